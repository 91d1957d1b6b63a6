use super::*;

/// Tests listing a user's shares newest first.
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_share_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let now = Utc::now();
    let older = ShareNoteFactory::new(db, &user.id)
        .created_at(now - Duration::days(2))
        .build()
        .await?;
    let newer = ShareNoteFactory::new(db, &user.id)
        .created_at(now)
        .build()
        .await?;

    let repo = ShareNoteRepository::new(db);
    let shares = repo.get_by_user(&user.id).await?;

    let ids: Vec<_> = shares.into_iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}

/// Tests that deleted shares and other owners' shares are excluded.
#[tokio::test]
async fn excludes_deleted_and_foreign_shares() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_share_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let live = factory::create_share(db, &user.id).await?;
    ShareNoteFactory::new(db, &user.id).deleted().build().await?;
    factory::create_share(db, &other.id).await?;

    let repo = ShareNoteRepository::new(db);
    let shares = repo.get_by_user(&user.id).await?;

    assert_eq!(shares.len(), 1);
    assert_eq!(shares[0].id, live.id);

    Ok(())
}
