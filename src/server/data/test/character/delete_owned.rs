use super::*;

/// Tests deleting a character owned by the user.
///
/// Expected: Ok(true) and the character is gone
#[tokio::test]
async fn deletes_owned_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let character = factory::create_character(db, user.id).await?;

    let repo = CharacterRepository::new(db);
    assert!(repo.delete_owned(character.id, user.id).await?);
    assert!(repo.get_by_user(user.id).await?.is_empty());

    Ok(())
}

/// Tests that another user's character can't be deleted.
///
/// Expected: Ok(false) and the character still exists
#[tokio::test]
async fn does_not_delete_other_users_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let intruder = factory::create_user(db).await?;
    let character = factory::create_character(db, owner.id).await?;

    let repo = CharacterRepository::new(db);
    assert!(!repo.delete_owned(character.id, intruder.id).await?);
    assert_eq!(repo.get_by_user(owner.id).await?.len(), 1);

    Ok(())
}
