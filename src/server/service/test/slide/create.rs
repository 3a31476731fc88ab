use super::*;
use std::collections::HashSet;

/// Tests that a new slide holds the sentinel payload.
///
/// Expected: get(create()) returns "[]"
#[tokio::test]
async fn new_slide_holds_sentinel_payload() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slide_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = SlideService::new(db);
    let id = service.create().await?;

    assert!(id > 0);
    assert_eq!(service.get(id).await?, SENTINEL_PAYLOAD);

    Ok(())
}

/// Tests that every creation gets its own id.
///
/// Expected: Ok with distinct ids
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slide_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = SlideService::new(db);
    let first = service.create().await?;
    let second = service.create().await?;

    assert_ne!(first, second);

    Ok(())
}

/// Tests concurrent creations from independently scheduled tasks.
///
/// Expected: every task receives a different id
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_receive_distinct_ids() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slide_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    const TASKS: usize = 16;

    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..TASKS {
        let db = db.clone();
        tasks.spawn(async move { SlideService::new(&db).create().await });
    }

    let mut ids = HashSet::new();
    while let Some(result) = tasks.join_next().await {
        ids.insert(result.unwrap()?);
    }

    assert_eq!(ids.len(), TASKS);

    Ok(())
}
