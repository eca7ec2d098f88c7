use super::*;

/// Tests creating a background.
///
/// Expected: Ok with all fields stored
#[tokio::test]
async fn creates_background() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Background)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BackgroundRepository::new(db);
    let background = repo
        .create(CreateBackgroundParams {
            name: "Node".to_string(),
            category: "Mystical".to_string(),
            subtype: "Place".to_string(),
            cost: 3,
            description: "A place of power.".to_string(),
            page: None,
        })
        .await?;

    assert!(background.id > 0);
    assert_eq!(background.name, "Node");
    assert_eq!(background.subtype, "Place");
    assert_eq!(background.cost, 3);

    Ok(())
}
