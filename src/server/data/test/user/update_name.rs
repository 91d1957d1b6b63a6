use super::*;

/// Tests renaming a user.
///
/// Expected: Ok(Some) with the new name persisted
#[tokio::test]
async fn updates_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .without_name()
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo.update_name(&user.id, "inkwell".to_string()).await?;

    assert_eq!(updated.unwrap().name.as_deref(), Some("inkwell"));

    let reloaded = repo.find_by_id(&user.id).await?.unwrap();
    assert_eq!(reloaded.name.as_deref(), Some("inkwell"));

    Ok(())
}

#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let updated = repo.update_name("cmissing", "inkwell".to_string()).await?;

    assert!(updated.is_none());

    Ok(())
}
