use super::*;

/// Tests the health endpoint.
///
/// Expected: 200 with `{"status": "ok"}`
#[tokio::test]
async fn health_reports_ok() {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let response = app(db)
        .oneshot(get_request("/api/health", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ok");
}

/// Tests the profile endpoint without credentials.
///
/// Expected: 401 with an error message
#[tokio::test]
async fn profile_requires_token() {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let response = app(db)
        .oneshot(get_request("/api/meu-perfil", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(body_json(response).await["error"].is_string());
}

/// Tests registering a shopper, logging in and reading the profile.
///
/// Expected: 201, then a token pair, then the profile with the shopper embedded
#[tokio::test]
async fn register_login_and_read_profile() {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let category = factory::create_category(db).await.unwrap();

    let registered = app(db)
        .oneshot(json_request(
            "POST",
            "/api/register",
            json!({
                "email": "Ana@Example.com",
                "senha": "uma senha longa",
                "nome": "Ana",
                "telefone": "(11) 90000-0000",
                "faixa_etaria": "18-25",
                "genero": "F",
                "tipo": "Turista",
                "categorias_desejadas": [category.id],
            }),
        ))
        .await
        .unwrap();
    assert_eq!(registered.status(), StatusCode::CREATED);

    let login = app(db)
        .oneshot(json_request(
            "POST",
            "/api/token",
            json!({ "email": "ana@example.com", "senha": "uma senha longa" }),
        ))
        .await
        .unwrap();
    assert_eq!(login.status(), StatusCode::OK);
    let pair = body_json(login).await;
    let access = pair["access"].as_str().unwrap().to_string();
    assert!(pair["refresh"].is_string());

    let profile = app(db)
        .oneshot(get_request("/api/meu-perfil", Some(&access)))
        .await
        .unwrap();
    assert_eq!(profile.status(), StatusCode::OK);

    let profile = body_json(profile).await;
    assert_eq!(profile["conta"]["email"], "ana@example.com");
    assert_eq!(profile["conta"]["tipo_usuario"], "cliente");
    assert_eq!(profile["cliente"]["categorias_desejadas"], json!([category.id]));
    assert!(profile.get("lojista").is_none());
}

/// Tests registering with a malformed email.
///
/// Expected: 400 with the `email` field listed
#[tokio::test]
async fn register_rejects_invalid_email() {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let response = app(db)
        .oneshot(json_request(
            "POST",
            "/api/criar-lojista",
            json!({
                "email": "not-an-email",
                "senha": "uma senha longa",
                "nome": "Loja",
                "telefone": "(11) 90000-0000",
                "cpf_cnpj": "12.345.678/0001-90",
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["fields"]["email"].is_array());
}
