use super::*;

/// Tests creating a rote with every field set.
///
/// Verifies that the repository stores all fields, generates an ID and stamps
/// the creation time.
///
/// Expected: Ok with rote created
#[tokio::test]
async fn creates_rote() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Rote)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoteRepository::new(db);
    let rote = repo
        .create(CreateRoteParams {
            name: "Call Lightning".to_string(),
            tradition: "Verbena".to_string(),
            description: "Summons a bolt from the sky.".to_string(),
            spheres: "Forces 3".to_string(),
            level: 3,
            page: Some("p. 112".to_string()),
        })
        .await?;

    assert!(rote.id > 0);
    assert_eq!(rote.name, "Call Lightning");
    assert_eq!(rote.spheres, "Forces 3");
    assert_eq!(rote.level, 3);
    assert_eq!(rote.page, Some("p. 112".to_string()));

    let db_rote = entity::prelude::Rote::find_by_id(rote.id).one(db).await?;
    assert!(db_rote.is_some());
    assert_eq!(db_rote.unwrap().tradition, "Verbena");

    Ok(())
}

/// Tests creating a rote without a page reference.
///
/// Expected: Ok with page stored as NULL
#[tokio::test]
async fn creates_rote_without_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Rote)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoteRepository::new(db);
    let rote = repo.create(params("Ward")).await?;

    assert_eq!(rote.page, None);

    Ok(())
}
