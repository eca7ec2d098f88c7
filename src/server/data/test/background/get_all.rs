use super::*;

/// Tests that backgrounds are grouped by category and ordered by name within it.
///
/// Expected: Ok with backgrounds ordered by (category, name)
#[tokio::test]
async fn returns_backgrounds_ordered_by_category_then_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Background)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::background::BackgroundFactory::new(db)
        .category("Social")
        .name("Mentor")
        .build()
        .await?;
    factory::background::BackgroundFactory::new(db)
        .category("Mystical")
        .name("Node")
        .build()
        .await?;
    factory::background::BackgroundFactory::new(db)
        .category("Social")
        .name("Allies")
        .build()
        .await?;

    let repo = BackgroundRepository::new(db);
    let backgrounds = repo.get_all().await?;

    let names: Vec<_> = backgrounds.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["Node", "Allies", "Mentor"]);

    Ok(())
}
