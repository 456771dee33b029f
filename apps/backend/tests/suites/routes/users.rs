use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::{json, Value};

use crate::common::{assert_problem_details, bearer, test_security, unique_email, API};
use crate::support::app_builder::create_test_app;

#[actix_web::test]
async fn create_login_delete_user() -> Result<(), Box<dyn std::error::Error>> {
    let security = test_security();
    let auth = bearer(&security, "admin@example.test");
    let app = create_test_app(security).build().await?;
    let email = unique_email("new");

    let req = test::TestRequest::post()
        .uri(&format!("{API}/users"))
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({ "email": email, "password": "pw-123456" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "email": email, "status": "User successfully created" }));

    // The new account can log in
    let req = test::TestRequest::post()
        .uri(&format!("{API}/auth/login"))
        .set_json(json!({ "email": email, "password": "pw-123456" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::delete()
        .uri(&format!("{API}/users/"))
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({ "email": email }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "email": email, "status": "User deleted" }));

    let req = test::TestRequest::delete()
        .uri(&format!("{API}/users"))
        .insert_header(("Authorization", auth))
        .set_json(json!({ "email": email }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, StatusCode::NOT_FOUND, "USER_NOT_FOUND", None).await;
    Ok(())
}

#[actix_web::test]
async fn duplicate_email_conflicts() -> Result<(), Box<dyn std::error::Error>> {
    let security = test_security();
    let auth = bearer(&security, "admin@example.test");
    let email = unique_email("admin");
    let app = create_test_app(security)
        .with_admin(&email, "pw")
        .build()
        .await?;

    let req = test::TestRequest::post()
        .uri(&format!("{API}/users"))
        .insert_header(("Authorization", auth))
        .set_json(json!({ "email": email, "password": "another" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(
        resp,
        StatusCode::CONFLICT,
        "EMAIL_TAKEN",
        Some("Mail already used. Please provide another one."),
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn invalid_email_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let security = test_security();
    let auth = bearer(&security, "admin@example.test");
    let app = create_test_app(security).build().await?;

    let req = test::TestRequest::post()
        .uri(&format!("{API}/users"))
        .insert_header(("Authorization", auth))
        .set_json(json!({ "email": "not-an-email", "password": "pw" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, StatusCode::BAD_REQUEST, "INVALID_EMAIL", None).await;
    Ok(())
}
