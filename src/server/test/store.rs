use super::*;

use crate::server::service::user_action::UserActionService;

fn store_body(owner_id: i32) -> Value {
    json!({
        "lojista": owner_id,
        "nome": "Casa do Cafe",
        "localizacao": "Piso 1, loja 12",
        "horario_funcionamento": "10h-22h",
    })
}

/// Tests a shopper viewing a store they favorited.
///
/// Expected: 200 with `favoritado` true and a store view in the audit log
#[tokio::test]
async fn store_detail_marks_favorite_and_records_view() {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let shopper = factory::create_shopper(db).await.unwrap();
    let (_, store) = factory::helpers::create_store_with_owner(db).await.unwrap();
    factory::create_favorite_store(db, shopper.id, store.id)
        .await
        .unwrap();
    let access = access_for(shopper.account_id);

    let response = app(db)
        .oneshot(get_request(&format!("/api/lojas/{}", store.id), Some(&access)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], store.id);
    assert_eq!(body["favoritado"], true);
    assert_eq!(body["nota_media"], 0.0);

    let actions = UserActionService::new(db)
        .get_all(Some(shopper.account_id))
        .await
        .unwrap();
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].store_id, Some(store.id));
}

/// Tests a missing store.
///
/// Expected: 404
#[tokio::test]
async fn unknown_store_is_not_found() {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let shopper = factory::create_shopper(db).await.unwrap();
    let access = access_for(shopper.account_id);

    let response = app(db)
        .oneshot(get_request("/api/lojas/999", Some(&access)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Tests a shopper trying to create a store.
///
/// Expected: 403
#[tokio::test]
async fn shopper_cannot_create_store() {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let shopper = factory::create_shopper(db).await.unwrap();
    let owner = factory::create_store_owner(db).await.unwrap();
    let access = access_for(shopper.account_id);

    let response = app(db)
        .oneshot(with_token(
            json_request("POST", "/api/lojas", store_body(owner.id)),
            &access,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Tests a store owner creating a store while naming another owner.
///
/// Expected: 201 with the store assigned to the caller's own profile
#[tokio::test]
async fn store_owner_creates_under_own_profile() {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let me = factory::create_store_owner(db).await.unwrap();
    let other = factory::create_store_owner(db).await.unwrap();
    let access = access_for(me.account_id);

    let response = app(db)
        .oneshot(with_token(
            json_request("POST", "/api/lojas", store_body(other.id)),
            &access,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["lojista"], me.id);
}
