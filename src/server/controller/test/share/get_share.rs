use super::*;

/// Tests reading a share anonymously.
///
/// Expected: envelope 200 "Successed!" with the share, and the click counted
#[tokio::test]
async fn returns_share_envelope() {
    let test = TestBuilder::new().with_share_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await.unwrap();
    let share = ShareNoteFactory::new(db, &user.id)
        .local_id("note-1")
        .build()
        .await
        .unwrap();

    let result = share::get_share(State(app_state(db)), id_query("note-1")).await;
    let body = envelope(result).await;

    assert_eq!(body["code"], 200);
    assert_eq!(body["msg"], "Successed!");
    assert_eq!(body["data"]["id"], share.id.as_str());
    assert_eq!(body["data"]["localId"], "note-1");
    assert_eq!(body["data"]["click"], 0);

    let again = envelope(share::get_share(State(app_state(db)), id_query("note-1")).await).await;
    assert_eq!(again["data"]["click"], 1);
}

#[tokio::test]
async fn missing_id_is_403() {
    let test = TestBuilder::new().with_share_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = share::get_share(State(app_state(db)), Query(ShareIdQuery::default())).await;
    let body = envelope(result).await;

    assert_eq!(body["code"], 403);
    assert_eq!(body["msg"], "Empty id");
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn unknown_id_is_404() {
    let test = TestBuilder::new().with_share_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = share::get_share(State(app_state(db)), id_query("nope")).await;
    let body = envelope(result).await;

    assert_eq!(body["code"], 404);
    assert_eq!(body["msg"], "Something wrong");
}
