use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::{json, Value};

use crate::common::{assert_problem_details, bearer, test_security, API};
use crate::support::app_builder::create_test_app;

#[actix_web::test]
async fn skill_lifecycle() -> Result<(), Box<dyn std::error::Error>> {
    let security = test_security();
    let auth = bearer(&security, "owner@example.test");
    let app = create_test_app(security).build().await?;

    let req = test::TestRequest::post()
        .uri(&format!("{API}/skills"))
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({ "name": "TailwindCSS", "experience": 2 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created, json!({ "id": id, "name": "TailwindCSS", "experience": 2 }));

    let req = test::TestRequest::put()
        .uri(&format!("{API}/skills/{id}"))
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({ "experience": 3 }))
        .to_request();
    let status: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(status, json!({ "skill_id": id, "status": "Skill updated" }));

    let req = test::TestRequest::get()
        .uri(&format!("{API}/skills/{id}"))
        .insert_header(("Authorization", auth.clone()))
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched["experience"], 3);
    assert_eq!(fetched["name"], "TailwindCSS");

    let req = test::TestRequest::delete()
        .uri(&format!("{API}/skills/{id}"))
        .insert_header(("Authorization", auth))
        .to_request();
    let status: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(status, json!({ "skill_id": id, "status": "Skill deleted" }));
    Ok(())
}

#[actix_web::test]
async fn experience_outside_range_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let security = test_security();
    let auth = bearer(&security, "owner@example.test");
    let app = create_test_app(security).build().await?;

    for experience in [0, 4] {
        let req = test::TestRequest::post()
            .uri(&format!("{API}/skills"))
            .insert_header(("Authorization", auth.clone()))
            .set_json(json!({ "name": "Rust", "experience": experience }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details(resp, StatusCode::BAD_REQUEST, "VALIDATION_ERROR", None).await;
    }

    let req = test::TestRequest::get()
        .uri(&format!("{API}/skills"))
        .insert_header(("Authorization", auth))
        .to_request();
    let all: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert!(all.is_empty());
    Ok(())
}

#[actix_web::test]
async fn unknown_skill_is_404() -> Result<(), Box<dyn std::error::Error>> {
    let security = test_security();
    let auth = bearer(&security, "owner@example.test");
    let app = create_test_app(security).build().await?;

    let req = test::TestRequest::get()
        .uri(&format!("{API}/skills/99"))
        .insert_header(("Authorization", auth))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(
        resp,
        StatusCode::NOT_FOUND,
        "SKILL_NOT_FOUND",
        Some("Skill 99 not found"),
    )
    .await;
    Ok(())
}
