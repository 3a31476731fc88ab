use super::*;

/// Tests creating a slide over HTTP.
///
/// Expected: 200 with the new id as decimal text, and the slide readable afterwards
#[tokio::test]
async fn returns_new_id_as_text() {
    let test = TestBuilder::new().with_slide_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let app = app(db, ListMode::Placeholder);

    let (status, body) = send(&app, "PUT", "/api/slide", Body::empty()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], b"1");

    let (status, body) = send(&app, "GET", "/api/slide/1", Body::empty()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], b"[]");
}

/// Tests that consecutive creations hand out different ids.
///
/// Expected: 200 twice with distinct ids
#[tokio::test]
async fn returns_distinct_ids() {
    let test = TestBuilder::new().with_slide_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let app = app(db, ListMode::Placeholder);

    let (_, first) = send(&app, "PUT", "/api/slide", Body::empty()).await;
    let (_, second) = send(&app, "PUT", "/api/slide", Body::empty()).await;

    let first: i32 = std::str::from_utf8(&first).unwrap().parse().unwrap();
    let second: i32 = std::str::from_utf8(&second).unwrap().parse().unwrap();
    assert_ne!(first, second);
}

/// Tests creating a slide when the table is missing.
///
/// Expected: 500 with the storage error message
#[tokio::test]
async fn returns_500_when_storage_unavailable() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let app = app(db, ListMode::Placeholder);

    let (status, body) = send(&app, "PUT", "/api/slide", Body::empty()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(error_message(&body).starts_with("Storage unavailable"));
}
