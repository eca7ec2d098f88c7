use super::*;

/// Tests creating a character for a user.
///
/// Expected: Ok with the character linked to its owner
#[tokio::test]
async fn creates_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = CharacterRepository::new(db);
    let character = repo
        .create(CreateCharacterParams {
            user_id: user.id,
            name: "Mira".to_string(),
            tradition: "Verbena".to_string(),
            concept: Some("Hedge witch".to_string()),
            essence: Some("Primordial".to_string()),
            nature: None,
            demeanor: None,
            arete: 2,
        })
        .await?;

    assert_eq!(character.user_id, user.id);
    assert_eq!(character.name, "Mira");
    assert_eq!(character.concept, Some("Hedge witch".to_string()));
    assert_eq!(character.arete, 2);

    Ok(())
}
