use super::*;

/// Tests the placeholder listing over HTTP.
///
/// Expected: 200 with two empty records
#[tokio::test]
async fn placeholder_mode_returns_fixed_records() {
    let test = TestBuilder::new().with_slide_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_slides(db, 3).await.unwrap();
    let app = app(db, ListMode::Placeholder);

    let (status, body) = send(&app, "GET", "/api/allslides", Body::empty()).await;

    assert_eq!(status, StatusCode::OK);
    let slides: Vec<SlideDto> = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        slides,
        vec![
            SlideDto { id: 0, data: String::new() },
            SlideDto { id: 0, data: String::new() },
        ]
    );
}

/// Tests the persisted listing over HTTP.
///
/// Expected: 200 with every stored slide in id order
#[tokio::test]
async fn persisted_mode_returns_stored_slides() {
    let test = TestBuilder::new().with_slide_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let created = factory::create_slides(db, 3).await.unwrap();
    let app = app(db, ListMode::Persisted);

    let (status, body) = send(&app, "GET", "/api/allslides", Body::empty()).await;

    assert_eq!(status, StatusCode::OK);
    let slides: Vec<SlideDto> = serde_json::from_slice(&body).unwrap();
    let expected: Vec<SlideDto> = created
        .into_iter()
        .map(|m| SlideDto {
            id: m.id,
            data: String::from_utf8(m.data).unwrap(),
        })
        .collect();
    assert_eq!(slides, expected);
}

/// Tests the JSON shape of listed records.
///
/// Expected: lowercase `id` and `data` keys, with non-UTF-8 payload bytes replaced
#[tokio::test]
async fn records_use_lowercase_keys() {
    let test = TestBuilder::new().with_slide_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let slide = factory::slide::SlideFactory::new(db)
        .data(vec![b'[', 0xff, b']'])
        .build()
        .await
        .unwrap();
    let app = app(db, ListMode::Persisted);

    let (status, body) = send(&app, "GET", "/api/allslides", Body::empty()).await;

    assert_eq!(status, StatusCode::OK);
    let records: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        records,
        serde_json::json!([{ "id": slide.id, "data": "[\u{fffd}]" }])
    );
}

/// Tests the persisted listing after storage went away.
///
/// Expected: 500 carrying the storage error message
#[tokio::test]
async fn persisted_mode_returns_500_when_storage_unavailable() {
    let mut test = TestBuilder::new().with_slide_tables().build().await.unwrap();
    test.close_database().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let app = app(db, ListMode::Persisted);

    let (status, body) = send(&app, "GET", "/api/allslides", Body::empty()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(error_message(&body).starts_with("Storage unavailable"));
}
