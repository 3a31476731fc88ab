//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::slide::SlideFactory;

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates `count` slides with default payloads.
///
/// Slides are inserted sequentially, so the returned models are in ascending id order.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of slides to insert
///
/// # Returns
/// - `Ok(Vec<entity::slides::Model>)` - Created slide entities
/// - `Err(DbErr)` - Database error during insert
pub async fn create_slides(
    db: &DatabaseConnection,
    count: usize,
) -> Result<Vec<entity::slides::Model>, DbErr> {
    let mut slides = Vec::with_capacity(count);

    for _ in 0..count {
        slides.push(SlideFactory::new(db).build().await?);
    }

    Ok(slides)
}
