use super::*;

/// Tests replacing the payload of a live share.
///
/// Expected: Ok(Some) with new data and a bumped `updated_at`, counters untouched
#[tokio::test]
async fn replaces_data() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_share_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let share = ShareNoteFactory::new(db, &user.id)
        .click(4)
        .created_at(Utc::now() - Duration::hours(1))
        .build()
        .await?;

    let repo = ShareNoteRepository::new(db);
    let updated = repo
        .update_data(&share.id, r#"{"id":"x","title":"v2"}"#.to_string())
        .await?
        .unwrap();

    assert_eq!(updated.data, r#"{"id":"x","title":"v2"}"#);
    assert_eq!(updated.click, 4);
    assert_eq!(updated.created_at, share.created_at);
    assert!(updated.updated_at > share.updated_at);

    Ok(())
}

#[tokio::test]
async fn skips_deleted_share() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_share_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let share = ShareNoteFactory::new(db, &user.id).deleted().build().await?;

    let repo = ShareNoteRepository::new(db);
    let updated = repo.update_data(&share.id, "{}".to_string()).await?;

    assert!(updated.is_none());

    Ok(())
}
