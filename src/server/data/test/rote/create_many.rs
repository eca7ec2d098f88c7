use super::*;

/// Tests inserting several rotes at once.
///
/// Expected: Ok with count equal to the number of inputs and all rows present
#[tokio::test]
async fn inserts_all_rotes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Rote)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoteRepository::new(db);
    let count = repo
        .create_many(vec![params("One"), params("Two"), params("Three")])
        .await?;

    assert_eq!(count, 3);
    assert_eq!(entity::prelude::Rote::find().count(db).await?, 3);

    Ok(())
}

/// Tests inserting an empty batch.
///
/// Expected: Ok(0) without touching the database
#[tokio::test]
async fn empty_batch_inserts_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Rote)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoteRepository::new(db);
    let count = repo.create_many(vec![]).await?;

    assert_eq!(count, 0);
    assert_eq!(repo.count().await?, 0);

    Ok(())
}
