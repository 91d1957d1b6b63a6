use super::*;

#[tokio::test]
async fn increments_keeps_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_share_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let share = ShareNoteFactory::new(db, &user.id).keeps(2).build().await?;

    let repo = ShareNoteRepository::new(db);
    let updated = repo.increment_keeps(&share.id).await?.unwrap();

    assert_eq!(updated.keeps, 3);
    assert_eq!(updated.click, 0);

    Ok(())
}

#[tokio::test]
async fn returns_none_for_deleted_share() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_share_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let deleted = ShareNoteFactory::new(db, &user.id).deleted().build().await?;

    let repo = ShareNoteRepository::new(db);

    assert!(repo.increment_keeps(&deleted.id).await?.is_none());

    Ok(())
}
