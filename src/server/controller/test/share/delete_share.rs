use super::*;

#[tokio::test]
async fn deletes_own_share() {
    let mut test = TestBuilder::new().with_share_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await.unwrap();
    let created = factory::create_share(db, &user.id).await.unwrap();
    AuthSession::new(session)
        .set_user_id(user.id.clone())
        .await
        .unwrap();

    let result =
        share::delete_share(State(app_state(db)), session.clone(), id_query(&created.id)).await;
    let body = envelope(result).await;

    assert_eq!(body["code"], 200);
    assert_eq!(body["msg"], "Successed!");
    assert!(!body["data"]["deletedAt"].is_null());
}

/// Tests that deleting someone else's share looks like a missing share.
#[tokio::test]
async fn foreign_share_is_404() {
    let mut test = TestBuilder::new().with_share_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let owner = factory::create_user(db).await.unwrap();
    let created = factory::create_share(db, &owner.id).await.unwrap();
    let user = factory::create_user(db).await.unwrap();
    AuthSession::new(session)
        .set_user_id(user.id.clone())
        .await
        .unwrap();

    let result =
        share::delete_share(State(app_state(db)), session.clone(), id_query(&created.id)).await;
    let body = envelope(result).await;

    assert_eq!(body["code"], 404);
}

#[tokio::test]
async fn requires_login() {
    let mut test = TestBuilder::new().with_share_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = share::delete_share(State(app_state(db)), session.clone(), id_query("c1")).await;
    let body = envelope(result).await;

    assert_eq!(body["code"], 401);
}
