//! Slide data repository for database operations
//!
//! Provides the `SlideRepository` for reading and writing rows of the `slides` table and
//! converting them into the slide domain model. Every predicate is built through SeaORM's
//! query builder, so identifiers always reach the database as bound parameters.

use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::slide::Slide;

/// Repository providing database operations for slides.
///
/// Holds a borrowed connection handle. Each method checks a connection out of the pool
/// behind it for the duration of a single statement.
pub struct SlideRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SlideRepository<'a> {
    /// Creates a new SlideRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `SlideRepository` - new repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new slide row with the provided payload
    ///
    /// # Arguments
    /// - `data` - Payload stored for the new slide
    ///
    /// # Returns
    /// - `Ok(i32)` - The id the database assigned to the new row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, data: Vec<u8>) -> Result<i32, DbErr> {
        let slide = entity::slides::ActiveModel {
            id: ActiveValue::NotSet,
            data: ActiveValue::Set(data),
        };

        let result = entity::prelude::Slides::insert(slide).exec(self.db).await?;

        Ok(result.last_insert_id)
    }

    /// Finds a slide by ID
    ///
    /// # Arguments
    /// - `id` - ID of the slide to retrieve
    ///
    /// # Returns
    /// - `Ok(Some(Slide))` - The requested slide if found
    /// - `Ok(None)` - No slide with that id exists
    /// - `Err(DbErr)` - Database error during lookup
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Slide>, DbErr> {
        let entity = entity::prelude::Slides::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Slide::from_entity))
    }

    /// Overwrites the payload of the slide with the provided ID
    ///
    /// # Arguments
    /// - `id` - ID of the slide to update
    /// - `data` - Replacement payload
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows matched by the update; `0` when no such slide exists
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_data(&self, id: i32, data: Vec<u8>) -> Result<u64, DbErr> {
        let result = entity::prelude::Slides::update_many()
            .col_expr(entity::slides::Column::Data, Expr::value(data))
            .filter(entity::slides::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets every stored slide ordered by ascending ID
    ///
    /// # Returns
    /// - `Ok(Vec<Slide>)` - All slides, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Slide>, DbErr> {
        let entities = entity::prelude::Slides::find()
            .order_by_asc(entity::slides::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Slide::from_entity).collect())
    }
}
