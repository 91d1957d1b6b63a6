use super::*;

#[tokio::test]
async fn renames_session_user() {
    let mut test = TestBuilder::new().with_share_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let created = factory::create_user(db).await.unwrap();
    AuthSession::new(session)
        .set_user_id(created.id.clone())
        .await
        .unwrap();

    let payload = Ok(Json(UpdateNicknameDto {
        user_id: created.id.clone(),
        user_name: " penman ".to_string(),
    }));
    let body =
        envelope(user::update_nickname(State(app_state(db)), session.clone(), payload).await)
            .await;

    assert_eq!(body["code"], 200);
    assert_eq!(body["data"]["name"], "penman");
}

#[tokio::test]
async fn short_nickname_is_403() {
    let mut test = TestBuilder::new().with_share_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let created = factory::create_user(db).await.unwrap();
    AuthSession::new(session)
        .set_user_id(created.id.clone())
        .await
        .unwrap();

    let payload = Ok(Json(UpdateNicknameDto {
        user_id: created.id.clone(),
        user_name: "ab".to_string(),
    }));
    let body =
        envelope(user::update_nickname(State(app_state(db)), session.clone(), payload).await)
            .await;

    assert_eq!(body["code"], 403);
    assert_eq!(body["msg"], "Nickname must be 3-20 characters");
}

#[tokio::test]
async fn other_account_is_403() {
    let mut test = TestBuilder::new().with_share_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let created = factory::create_user(db).await.unwrap();
    let other = factory::create_user(db).await.unwrap();
    AuthSession::new(session)
        .set_user_id(created.id.clone())
        .await
        .unwrap();

    let payload = Ok(Json(UpdateNicknameDto {
        user_id: other.id.clone(),
        user_name: "takeover".to_string(),
    }));
    let body =
        envelope(user::update_nickname(State(app_state(db)), session.clone(), payload).await)
            .await;

    assert_eq!(body["code"], 403);
}
