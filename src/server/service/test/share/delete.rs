use super::*;

#[tokio::test]
async fn deletes_own_share() -> Result<(), AppError> {
    let test = TestBuilder::new().with_share_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let share = factory::create_share(db, &user.id).await?;

    let service = ShareService::new(db);
    let deleted = service.delete(&user.id, &share.id).await?;

    assert_eq!(deleted.id, share.id);
    assert!(deleted.deleted_at.is_some());
    assert!(service.list_for_user(&user.id).await?.is_empty());

    Ok(())
}

/// Tests that a user cannot delete someone else's share.
///
/// Expected: Err(ShareError::NotFound) and the share stays live
#[tokio::test]
async fn refuses_foreign_share() -> Result<(), AppError> {
    let test = TestBuilder::new().with_share_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let intruder = factory::create_user(db).await?;
    let share = factory::create_share(db, &owner.id).await?;

    let service = ShareService::new(db);
    let result = service.delete(&intruder.id, &share.id).await;

    assert!(matches!(result, Err(AppError::ShareErr(ShareError::NotFound))));
    assert_eq!(service.list_for_user(&owner.id).await?.len(), 1);

    Ok(())
}

#[tokio::test]
async fn rejects_blank_and_unknown_ids() -> Result<(), AppError> {
    let test = TestBuilder::new().with_share_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let service = ShareService::new(db);

    assert!(matches!(
        service.delete(&user.id, "").await,
        Err(AppError::ShareErr(ShareError::EmptyId))
    ));
    assert!(matches!(
        service.delete(&user.id, "cmissing").await,
        Err(AppError::ShareErr(ShareError::NotFound))
    ));

    Ok(())
}

#[tokio::test]
async fn does_not_trim_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_share_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let share = factory::create_share(db, &user.id).await?;

    let result = ShareService::new(db)
        .delete(&user.id, &format!(" {}", share.id))
        .await;

    assert!(matches!(result, Err(AppError::ShareErr(ShareError::NotFound))));

    Ok(())
}
