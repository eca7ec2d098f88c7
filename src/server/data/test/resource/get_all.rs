use super::*;

/// Tests the fixed resource ordering.
///
/// Verifies that featured resources come first, then resources are ordered by
/// type and finally by name.
///
/// Expected: Ok with resources ordered by (featured desc, type, name)
#[tokio::test]
async fn returns_featured_first_then_type_then_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Resource)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::resource::ResourceFactory::new(db)
        .name("Zeta")
        .resource_type("Article")
        .build()
        .await?;
    factory::resource::ResourceFactory::new(db)
        .name("Beta")
        .resource_type("Tool")
        .featured(true)
        .build()
        .await?;
    factory::resource::ResourceFactory::new(db)
        .name("Alpha")
        .resource_type("Tool")
        .build()
        .await?;
    factory::resource::ResourceFactory::new(db)
        .name("Gamma")
        .resource_type("Book")
        .featured(true)
        .build()
        .await?;

    let repo = ResourceRepository::new(db);
    let resources = repo.get_all().await?;

    let names: Vec<_> = resources.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Gamma", "Beta", "Zeta", "Alpha"]);
    assert!(resources[0].featured && resources[1].featured);
    assert!(!resources[2].featured && !resources[3].featured);

    Ok(())
}
