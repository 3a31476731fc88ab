use super::*;

/// Tests overwriting a slide payload.
///
/// Verifies that the whole payload is replaced and exactly one row is matched.
///
/// Expected: Ok(1) with the new payload stored
#[tokio::test]
async fn overwrites_payload() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slide_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::slide::SlideFactory::new(db)
        .data("[{\"name\":\"first\"},{\"name\":\"second\"}]")
        .build()
        .await?;

    let repo = SlideRepository::new(db);
    let rows = repo
        .update_data(created.id, b"[{\"name\":\"only\"}]".to_vec())
        .await?;

    assert_eq!(rows, 1);

    let stored = entity::prelude::Slides::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.data, b"[{\"name\":\"only\"}]");

    Ok(())
}

/// Tests updating a slide that does not exist.
///
/// Expected: Ok(0) with no rows written
#[tokio::test]
async fn matches_no_rows_for_nonexistent_slide() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slide_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let rows = SlideRepository::new(db)
        .update_data(42, b"{}".to_vec())
        .await?;

    assert_eq!(rows, 0);

    let count = entity::prelude::Slides::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests that updates leave other slides untouched.
///
/// Expected: Ok(1) with only the targeted row changed
#[tokio::test]
async fn leaves_other_slides_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slide_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let slides = factory::create_slides(db, 2).await?;

    SlideRepository::new(db)
        .update_data(slides[0].id, b"changed".to_vec())
        .await?;

    let other = entity::prelude::Slides::find_by_id(slides[1].id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(other.data, slides[1].data);

    Ok(())
}

/// Tests that an id-shaped payload cannot widen the predicate.
///
/// The id is bound as a parameter, so a payload resembling a SQL fragment is stored
/// verbatim and only the targeted row changes.
///
/// Expected: Ok(1) with the literal payload stored
#[tokio::test]
async fn stores_sql_like_payload_verbatim() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slide_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let slides = factory::create_slides(db, 2).await?;
    let payload = b"x' WHERE 1=1; --".to_vec();

    let rows = SlideRepository::new(db)
        .update_data(slides[0].id, payload.clone())
        .await?;

    assert_eq!(rows, 1);

    let first = entity::prelude::Slides::find_by_id(slides[0].id)
        .one(db)
        .await?
        .unwrap();
    let second = entity::prelude::Slides::find_by_id(slides[1].id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(first.data, payload);
    assert_eq!(second.data, slides[1].data);

    Ok(())
}
