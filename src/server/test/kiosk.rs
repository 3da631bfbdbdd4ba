use super::*;

/// Tests that an anonymous kiosk can submit a survey.
///
/// Expected: 201 with the stored answer
#[tokio::test]
async fn anonymous_survey_is_accepted() {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let category = factory::create_category(db).await.unwrap();

    let response = app(db)
        .oneshot(json_request(
            "POST",
            "/api/totens",
            json!({
                "tipo": "Local",
                "faixa_etaria": "36-45",
                "genero": "M",
                "categoria": category.id,
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let survey = body_json(response).await;
    assert_eq!(survey["categoria"], category.id);
    assert_eq!(survey["tipo"], "Local");
}

/// Tests a survey naming a category that does not exist.
///
/// Expected: 400
#[tokio::test]
async fn survey_with_unknown_category_is_rejected() {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let response = app(db)
        .oneshot(json_request(
            "POST",
            "/api/totens",
            json!({
                "tipo": "Turista",
                "faixa_etaria": "18-",
                "genero": "F",
                "categoria": 404,
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Tests listing surveys without credentials.
///
/// Expected: 401
#[tokio::test]
async fn listing_surveys_requires_token() {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let response = app(db)
        .oneshot(get_request("/api/totens", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
