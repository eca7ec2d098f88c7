use super::*;

/// Tests that only the user's own characters are returned, newest first.
///
/// Expected: Ok with the owner's characters ordered by creation time descending
#[tokio::test]
async fn returns_only_owned_characters_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let now = Utc::now();
    factory::character::CharacterFactory::new(db, owner.id)
        .name("Older")
        .created_at(now - Duration::hours(1))
        .build()
        .await?;
    factory::character::CharacterFactory::new(db, owner.id)
        .name("Newer")
        .created_at(now)
        .build()
        .await?;
    factory::create_character(db, other.id).await?;

    let repo = CharacterRepository::new(db);
    let characters = repo.get_by_user(owner.id).await?;

    let names: Vec<_> = characters.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Newer", "Older"]);
    assert!(characters.iter().all(|c| c.user_id == owner.id));

    Ok(())
}
