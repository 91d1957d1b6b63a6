use super::*;

#[tokio::test]
async fn lists_session_users_shares() {
    let mut test = TestBuilder::new().with_share_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (user, _) = factory::helpers::create_user_with_shares(db, 3).await.unwrap();
    factory::helpers::create_user_with_shares(db, 2).await.unwrap();
    AuthSession::new(session)
        .set_user_id(user.id.clone())
        .await
        .unwrap();

    let result = share::get_user_shares(State(app_state(db)), session.clone()).await;
    let body = envelope(result).await;

    assert_eq!(body["code"], 200);
    let shares = body["data"].as_array().unwrap();
    assert_eq!(shares.len(), 3);
    assert!(shares.iter().all(|s| s["userId"] == user.id.as_str()));
}

#[tokio::test]
async fn requires_login() {
    let mut test = TestBuilder::new().with_share_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let body = envelope(share::get_user_shares(State(app_state(db)), session.clone()).await).await;

    assert_eq!(body["code"], 401);
}
