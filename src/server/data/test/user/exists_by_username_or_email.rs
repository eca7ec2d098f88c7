use super::*;

/// Tests detection of an existing username or email.
///
/// Expected: true when either matches, false otherwise
#[tokio::test]
async fn detects_existing_username_or_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("archmage")
        .email("archmage@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo
        .exists_by_username_or_email("archmage", "new@example.com")
        .await?);
    assert!(repo
        .exists_by_username_or_email("newcomer", "archmage@example.com")
        .await?);
    assert!(!repo
        .exists_by_username_or_email("newcomer", "new@example.com")
        .await?);

    Ok(())
}
