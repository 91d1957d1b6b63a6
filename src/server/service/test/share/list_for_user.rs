use super::*;

#[tokio::test]
async fn lists_only_users_live_shares() -> Result<(), AppError> {
    let test = TestBuilder::new().with_share_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, shares) = factory::helpers::create_user_with_shares(db, 2).await?;
    ShareNoteFactory::new(db, &user.id).deleted().build().await?;
    factory::helpers::create_user_with_shares(db, 1).await?;

    let listed = ShareService::new(db).list_for_user(&user.id).await?;

    assert_eq!(listed.len(), 2);
    assert!(listed
        .iter()
        .all(|s| shares.iter().any(|created| created.id == s.id)));

    Ok(())
}
