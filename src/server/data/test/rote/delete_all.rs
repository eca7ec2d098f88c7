use super::*;

/// Tests deleting every rote.
///
/// Expected: Ok with the number of deleted rows and an empty table afterwards
#[tokio::test]
async fn deletes_every_rote() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Rote)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_rote(db).await?;
    factory::create_rote(db).await?;

    let repo = RoteRepository::new(db);
    let deleted = repo.delete_all().await?;

    assert_eq!(deleted, 2);
    assert_eq!(repo.count().await?, 0);

    Ok(())
}

/// Tests that deleting from an empty table is a no-op.
///
/// Expected: Ok(0)
#[tokio::test]
async fn delete_all_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Rote)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_rote(db).await?;

    let repo = RoteRepository::new(db);
    assert_eq!(repo.delete_all().await?, 1);
    assert_eq!(repo.delete_all().await?, 0);

    Ok(())
}
