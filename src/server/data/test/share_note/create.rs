use super::*;

/// Tests creating a share for an existing user.
///
/// Expected: Ok with a generated id, zeroed counters and no deletion timestamp
#[tokio::test]
async fn creates_share() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_share_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = ShareNoteRepository::new(db);
    let share = repo
        .create(CreateShareNoteParam {
            user_id: user.id.clone(),
            local_id: "note-1".to_string(),
            data: r#"{"id":"note-1","title":"Hello"}"#.to_string(),
        })
        .await?;

    assert_eq!(share.id.len(), 25);
    assert_eq!(share.user_id, user.id);
    assert_eq!(share.local_id, "note-1");
    assert_eq!(share.data, r#"{"id":"note-1","title":"Hello"}"#);
    assert_eq!(share.click, 0);
    assert_eq!(share.keeps, 0);
    assert!(share.deleted_at.is_none());
    assert_eq!(share.created_at, share.updated_at);

    Ok(())
}

/// Tests that a share cannot reference a missing user.
///
/// Expected: Err(DbErr) from the foreign key constraint
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_share_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ShareNoteRepository::new(db);
    let result = repo
        .create(CreateShareNoteParam {
            user_id: "cmissing".to_string(),
            local_id: "note-1".to_string(),
            data: "{}".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
