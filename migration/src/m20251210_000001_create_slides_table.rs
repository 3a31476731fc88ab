use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Slides::Table)
                    .if_not_exists()
                    .col(pk_auto(Slides::Id))
                    .col(custom(Slides::Data, "longblob"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Slides::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum Slides {
    Table,
    Id,
    Data,
}
