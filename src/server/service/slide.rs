use sea_orm::DatabaseConnection;

use crate::server::{
    data::slide::SlideRepository,
    error::AppError,
    model::slide::{ListMode, Slide, PLACEHOLDER_SLIDE_COUNT, SENTINEL_PAYLOAD},
};

/// The slide storage contract.
///
/// Maps slide ids to payloads. Holds no state of its own beyond the injected connection
/// handle, so every call is independent; ordering between concurrent writers is whatever
/// the database decides.
pub struct SlideService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SlideService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new slide holding the sentinel payload and returns its id
    pub async fn create(&self) -> Result<i32, AppError> {
        let id = SlideRepository::new(self.db)
            .create(SENTINEL_PAYLOAD.to_vec())
            .await?;

        tracing::debug!("Created slide {}", id);

        Ok(id)
    }

    /// Gets the current payload of a slide
    ///
    /// Returns `AppError::NotFound` if no slide with that id exists.
    pub async fn get(&self, id: i32) -> Result<Vec<u8>, AppError> {
        let slide = SlideRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        Ok(slide.data)
    }

    /// Replaces the payload of a slide wholesale
    ///
    /// Returns `AppError::NotFound` if the update matched no row.
    pub async fn update(&self, id: i32, data: Vec<u8>) -> Result<(), AppError> {
        let rows = SlideRepository::new(self.db).update_data(id, data).await?;

        if rows == 0 {
            return Err(not_found(id));
        }

        tracing::debug!("Updated slide {}", id);

        Ok(())
    }

    /// Lists slides according to the configured mode
    ///
    /// `ListMode::Placeholder` answers without touching storage.
    pub async fn list_all(&self, mode: ListMode) -> Result<Vec<Slide>, AppError> {
        match mode {
            ListMode::Placeholder => Ok(vec![Slide::placeholder(); PLACEHOLDER_SLIDE_COUNT]),
            ListMode::Persisted => Ok(SlideRepository::new(self.db).get_all().await?),
        }
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Slide {} not found", id))
}
