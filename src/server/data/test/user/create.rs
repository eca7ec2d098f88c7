use super::*;

/// Tests creating a user account.
///
/// Expected: Ok with user created and findable by ID
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            username: "archmage".to_string(),
            email: "archmage@example.com".to_string(),
            password_hash: "hash".to_string(),
        })
        .await?;

    let found = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(found.username, "archmage");
    assert_eq!(found.email, "archmage@example.com");

    Ok(())
}

/// Tests that usernames are unique at the database level.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("archmage")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParams {
            username: "archmage".to_string(),
            email: "other@example.com".to_string(),
            password_hash: "hash".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests looking up a missing user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn find_by_id_returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    assert_eq!(repo.find_by_id(9999).await?, None);

    Ok(())
}
