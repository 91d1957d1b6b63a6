use super::*;

#[tokio::test]
async fn increments_keeps() {
    let test = TestBuilder::new().with_share_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await.unwrap();
    let created = factory::create_share(db, &user.id).await.unwrap();

    let result = share::keep_share(State(app_state(db)), id_query(&created.id)).await;
    let body = envelope(result).await;

    assert_eq!(body["code"], 200);
    assert_eq!(body["data"]["keeps"], 1);
}

#[tokio::test]
async fn unknown_share_is_404() {
    let test = TestBuilder::new().with_share_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let body = envelope(share::keep_share(State(app_state(db)), id_query("cmissing")).await).await;

    assert_eq!(body["code"], 404);
}
