// Credential gate behavior on protected scopes, end to end.

use std::time::{Duration, SystemTime};

use actix_web::http::StatusCode;
use actix_web::{test, web, App, HttpResponse};
use portfolio_backend::auth::claims::TokenKind;
use portfolio_backend::auth::jwt::mint_token;
use portfolio_backend::state::security_config::SecurityConfig;
use portfolio_backend::{AppState, AuthToken, JwtAuth, RequestTrace};

use crate::common::{assert_problem_details, bearer, test_security, API};
use crate::support::app_builder::create_test_app;

#[actix_web::test]
async fn protected_scopes_reject_missing_credentials() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_security()).build().await?;

    for scope in ["articles", "projects", "skills"] {
        let req = test::TestRequest::get()
            .uri(&format!("{API}/{scope}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details(
            resp,
            StatusCode::FORBIDDEN,
            "MISSING_CREDENTIALS",
            Some("No credentials provided"),
        )
        .await;
    }

    let req = test::TestRequest::delete()
        .uri(&format!("{API}/users"))
        .set_json(serde_json::json!({ "email": "a@b.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, StatusCode::FORBIDDEN, "MISSING_CREDENTIALS", None).await;
    Ok(())
}

#[actix_web::test]
async fn other_schemes_are_not_supported() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_security()).build().await?;

    let req = test::TestRequest::get()
        .uri(&format!("{API}/skills"))
        .insert_header(("Authorization", "Basic dXNlcjpwdw=="))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(
        resp,
        StatusCode::FORBIDDEN,
        "UNSUPPORTED_AUTH_SCHEME",
        Some("Not supported authentication scheme"),
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn expired_foreign_and_refresh_tokens_are_invalid() -> Result<(), Box<dyn std::error::Error>>
{
    let security = test_security();
    let app = create_test_app(security.clone()).build().await?;

    let now = SystemTime::now();
    let expired = mint_token(
        "a@b.com",
        TokenKind::Access,
        now - Duration::from_secs(60 * 60),
        &security,
    )?;
    let foreign = mint_token(
        "a@b.com",
        TokenKind::Access,
        now,
        &SecurityConfig::new("someone-else", "someone-else-refresh"),
    )?;
    let refresh = mint_token("a@b.com", TokenKind::Refresh, now, &security)?;

    for token in [expired, foreign, refresh] {
        let req = test::TestRequest::get()
            .uri(&format!("{API}/projects"))
            .insert_header(("Authorization", format!("Bearer {token}")))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details(
            resp,
            StatusCode::FORBIDDEN,
            "INVALID_BEARER_TOKEN",
            Some("Invalid bearer token"),
        )
        .await;
    }
    Ok(())
}

#[actix_web::test]
async fn fresh_access_token_passes() -> Result<(), Box<dyn std::error::Error>> {
    let security = test_security();
    let app = create_test_app(security.clone()).build().await?;

    let req = test::TestRequest::get()
        .uri(&format!("{API}/skills"))
        .insert_header(("Authorization", bearer(&security, "a@b.com")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    Ok(())
}

#[actix_web::test]
async fn auth_routes_and_health_are_open() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_security()).build().await?;

    let req = test::TestRequest::get().uri("/health").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    // Reaches the handler: rejected for the body, not for credentials
    let req = test::TestRequest::post()
        .uri(&format!("{API}/auth/refresh"))
        .set_json(serde_json::json!({ "refresh_token": "x" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );
    Ok(())
}

async fn echo_token(token: Option<AuthToken>) -> HttpResponse {
    match token {
        Some(auth) => HttpResponse::Ok().body(auth.token),
        None => HttpResponse::Ok().body("anonymous"),
    }
}

async fn gated_echo_app(
    gate: JwtAuth,
    security: SecurityConfig,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
    Error = actix_web::Error,
> {
    test::init_service(
        App::new()
            .wrap(RequestTrace)
            .app_data(web::Data::new(AppState::new_without_db(security)))
            .service(web::scope("/echo").wrap(gate).route("", web::get().to(echo_token))),
    )
    .await
}

#[actix_web::test]
async fn handler_receives_the_raw_token() {
    let security = test_security();
    let token = mint_token("a@b.com", TokenKind::Access, SystemTime::now(), &security).unwrap();
    let app = gated_echo_app(JwtAuth::strict(), security).await;

    let req = test::TestRequest::get()
        .uri("/echo")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(body, token.as_bytes());
}

#[actix_web::test]
async fn lenient_gate_lets_anonymous_requests_through() {
    let security = test_security();
    let app = gated_echo_app(JwtAuth::lenient(), security).await;

    let req = test::TestRequest::get().uri("/echo").to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(body, "anonymous".as_bytes());

    // A presented credential is still checked
    let req = test::TestRequest::get()
        .uri("/echo")
        .insert_header(("Authorization", "Bearer not.a.jwt"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(
        resp,
        StatusCode::FORBIDDEN,
        "INVALID_BEARER_TOKEN",
        Some("Invalid bearer token"),
    )
    .await;
}
