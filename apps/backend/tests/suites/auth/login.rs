// Integration tests for POST /auth/login.

use std::time::SystemTime;

use actix_web::http::StatusCode;
use actix_web::test;
use portfolio_backend::auth::claims::TokenKind;
use portfolio_backend::auth::jwt::decode_token;
use serde_json::{json, Value};

use crate::common::{assert_problem_details, test_security, unique_email, API};
use crate::support::app_builder::create_test_app;

const PASSWORD: &str = "s3cret-Passw0rd";

#[actix_web::test]
async fn login_returns_token_pair_for_subject() -> Result<(), Box<dyn std::error::Error>> {
    let security = test_security();
    let email = unique_email("admin");
    let app = create_test_app(security.clone())
        .with_admin(&email, PASSWORD)
        .build()
        .await?;

    let req = test::TestRequest::post()
        .uri(&format!("{API}/auth/login"))
        .set_json(json!({ "email": email, "password": PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let access = body["access_token"]["token"].as_str().unwrap();
    let refresh = body["refresh_token"]["token"].as_str().unwrap();
    assert!(body["access_token"]["expires"].is_string());
    assert!(body["refresh_token"]["expires"].is_string());

    let now = SystemTime::now();
    let access_claims = decode_token(access, TokenKind::Access, now, &security)?;
    let refresh_claims = decode_token(refresh, TokenKind::Refresh, now, &security)?;
    assert_eq!(access_claims.sub, email);
    assert_eq!(refresh_claims.sub, email);
    assert!(refresh_claims.exp > access_claims.exp);
    Ok(())
}

#[actix_web::test]
async fn unknown_email_and_wrong_password_are_indistinguishable(
) -> Result<(), Box<dyn std::error::Error>> {
    let email = unique_email("admin");
    let app = create_test_app(test_security())
        .with_admin(&email, PASSWORD)
        .build()
        .await?;

    let attempts = [
        json!({ "email": unique_email("nobody"), "password": PASSWORD }),
        json!({ "email": email, "password": "not-the-password" }),
    ];

    let mut details = Vec::new();
    for attempt in attempts {
        let req = test::TestRequest::post()
            .uri(&format!("{API}/auth/login"))
            .set_json(attempt)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let problem = assert_problem_details(
            resp,
            StatusCode::BAD_REQUEST,
            "INVALID_CREDENTIALS",
            Some("Invalid email and / or password"),
        )
        .await;
        details.push((problem.title, problem.detail));
    }
    assert_eq!(details[0], details[1]);
    Ok(())
}

#[actix_web::test]
async fn malformed_body_is_bad_request() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_security()).build().await?;

    let req = test::TestRequest::post()
        .uri(&format!("{API}/auth/login"))
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"email": "a@b.com""#)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, StatusCode::BAD_REQUEST, "BAD_REQUEST", None).await;
    Ok(())
}

#[actix_web::test]
async fn login_without_database_hides_internals() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_security()).without_db().build().await?;

    let req = test::TestRequest::post()
        .uri(&format!("{API}/auth/login"))
        .set_json(json!({ "email": "a@b.com", "password": "pw" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(
        resp,
        StatusCode::SERVICE_UNAVAILABLE,
        "DB_UNAVAILABLE",
        Some("Ups... Something went wrong. Please try again later"),
    )
    .await;
    Ok(())
}
