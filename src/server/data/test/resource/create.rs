use super::*;

/// Tests creating a resource with optional fields left empty.
///
/// Expected: Ok with author and image_url stored as NULL
#[tokio::test]
async fn creates_resource_without_optional_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Resource)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ResourceRepository::new(db);
    let resource = repo
        .create(CreateResourceParams {
            name: "Sphere Cheat Sheet".to_string(),
            resource_type: "Tool".to_string(),
            category: "Reference".to_string(),
            description: "Quick sphere lookup.".to_string(),
            url: "https://example.com/spheres".to_string(),
            author: None,
            image_url: None,
            featured: false,
        })
        .await?;

    assert_eq!(resource.resource_type, "Tool");
    assert_eq!(resource.author, None);
    assert_eq!(resource.image_url, None);
    assert!(!resource.featured);

    Ok(())
}
