use super::*;

#[tokio::test]
async fn creates_new_share() -> Result<(), AppError> {
    let test = TestBuilder::new().with_share_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let user = load_user(db, &user.id).await;

    let outcome = ShareService::new(db)
        .publish(&user, payload("note-1", "Hello"))
        .await?;

    let PublishOutcome::Created(share) = outcome else {
        panic!("expected a new share");
    };
    assert_eq!(share.user_id, user.id);
    assert_eq!(share.local_id, "note-1");
    assert!(share.data.contains("Hello"));

    Ok(())
}

/// Tests that publishing the same note again replaces its payload.
///
/// Expected: Updated outcome on the same share id, with the new data
#[tokio::test]
async fn updates_existing_share() -> Result<(), AppError> {
    let test = TestBuilder::new().with_share_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let existing =
        factory::share_note::create_share_with_local_id(db, &user.id, "note-1").await?;
    let user = load_user(db, &user.id).await;

    let outcome = ShareService::new(db)
        .publish(&user, payload("note-1", "Second draft"))
        .await?;

    assert_eq!(outcome.message(), "Updated!");
    let share = outcome.into_share();
    assert_eq!(share.id, existing.id);
    assert!(share.data.contains("Second draft"));

    Ok(())
}

/// Tests that another user's share of the same local id is not touched.
#[tokio::test]
async fn does_not_update_foreign_share() -> Result<(), AppError> {
    let test = TestBuilder::new().with_share_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let foreign =
        factory::share_note::create_share_with_local_id(db, &owner.id, "note-1").await?;
    let user = factory::create_user(db).await?;
    let user = load_user(db, &user.id).await;

    let outcome = ShareService::new(db)
        .publish(&user, payload("note-1", "Mine"))
        .await?;

    let PublishOutcome::Created(share) = outcome else {
        panic!("expected a new share");
    };
    assert_ne!(share.id, foreign.id);

    Ok(())
}

/// Tests that a Free user at 10 live shares cannot publish another.
///
/// Expected: Err(ShareError::QuotaExceeded) with the plan limit
#[tokio::test]
async fn rejects_new_share_over_quota() -> Result<(), AppError> {
    let test = TestBuilder::new().with_share_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _) = factory::helpers::create_user_with_shares(db, 10).await?;
    let user = load_user(db, &user.id).await;

    let result = ShareService::new(db)
        .publish(&user, payload("note-new", "One too many"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::ShareErr(ShareError::QuotaExceeded { limit: 10 }))
    ));

    Ok(())
}

/// Tests that the quota also applies to refreshing an existing share.
///
/// Expected: Err(ShareError::QuotaExceeded) and the stored payload unchanged
#[tokio::test]
async fn rejects_update_at_quota() -> Result<(), AppError> {
    let test = TestBuilder::new().with_share_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, shares) = factory::helpers::create_user_with_shares(db, 10).await?;
    let user = load_user(db, &user.id).await;

    let result = ShareService::new(db)
        .publish(&user, payload(&shares[0].local_id, "Refreshed"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::ShareErr(ShareError::QuotaExceeded { limit: 10 }))
    ));
    let stored = ShareNoteRepository::new(db)
        .find_by_id(&shares[0].id)
        .await?
        .unwrap();
    assert_eq!(stored.data, shares[0].data);

    Ok(())
}

/// Tests that a user one below quota can still refresh a share.
#[tokio::test]
async fn updates_existing_share_below_quota() -> Result<(), AppError> {
    let test = TestBuilder::new().with_share_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, shares) = factory::helpers::create_user_with_shares(db, 9).await?;
    let user = load_user(db, &user.id).await;

    let outcome = ShareService::new(db)
        .publish(&user, payload(&shares[0].local_id, "Refreshed"))
        .await?;

    assert!(matches!(outcome, PublishOutcome::Updated(_)));

    Ok(())
}

/// Tests that deleted shares free up quota.
#[tokio::test]
async fn deleted_shares_do_not_count() -> Result<(), AppError> {
    let test = TestBuilder::new().with_share_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _) = factory::helpers::create_user_with_shares(db, 9).await?;
    ShareNoteFactory::new(db, &user.id).deleted().build().await?;
    let user = load_user(db, &user.id).await;

    let outcome = ShareService::new(db)
        .publish(&user, payload("note-10", "Tenth"))
        .await?;

    assert!(matches!(outcome, PublishOutcome::Created(_)));

    Ok(())
}

/// Tests that a higher plan raises the quota.
#[tokio::test]
async fn basic_plan_allows_more_shares() -> Result<(), AppError> {
    let test = TestBuilder::new().with_share_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user_with_plan(db, "1").await?;
    for _ in 0..10 {
        factory::create_share(db, &user.id).await?;
    }
    let user = load_user(db, &user.id).await;

    let outcome = ShareService::new(db)
        .publish(&user, payload("note-11", "Eleventh"))
        .await?;

    assert!(matches!(outcome, PublishOutcome::Created(_)));

    Ok(())
}
