//! Slide factory for creating test slide entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test slides with customizable payloads.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::slide::SlideFactory;
///
/// let slide = SlideFactory::new(&db)
///     .data("[]")
///     .build()
///     .await?;
/// ```
pub struct SlideFactory<'a> {
    db: &'a DatabaseConnection,
    data: Vec<u8>,
}

impl<'a> SlideFactory<'a> {
    /// Creates a new SlideFactory with default values.
    ///
    /// Defaults:
    /// - data: `[{"name":"Slide {n}"}]` where n is auto-incremented
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `SlideFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            data: serde_json::json!([{ "name": format!("Slide {}", id) }])
                .to_string()
                .into_bytes(),
        }
    }

    /// Sets the raw payload for the slide. Accepts text or arbitrary bytes.
    pub fn data(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.data = data.into();
        self
    }

    /// Sets the payload from a JSON value, serialized compactly.
    pub fn json(mut self, value: serde_json::Value) -> Self {
        self.data = value.to_string().into_bytes();
        self
    }

    /// Builds and inserts the slide entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::slides::Model)` - Created slide entity with its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::slides::Model, DbErr> {
        entity::slides::ActiveModel {
            data: ActiveValue::Set(self.data),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a slide with a default payload.
///
/// Shorthand for `SlideFactory::new(db).build().await`.
pub async fn create_slide(db: &DatabaseConnection) -> Result<entity::slides::Model, DbErr> {
    SlideFactory::new(db).build().await
}
