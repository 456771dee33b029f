use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::{json, Value};

use crate::common::{assert_problem_details, bearer, description, test_security, API};
use crate::support::app_builder::create_test_app;

fn new_project() -> Value {
    json!({
        "title": "Asset monitoring",
        "image_url": "www.example.test/project.svg",
        "description": description(),
        "project_url": "www.example.test",
        "tags": [
            { "icon_name": "react", "name": "React" },
            { "icon_name": "tailwind", "name": "TailwindCSS" }
        ],
    })
}

#[actix_web::test]
async fn project_lifecycle() -> Result<(), Box<dyn std::error::Error>> {
    let security = test_security();
    let auth = bearer(&security, "owner@example.test");
    let app = create_test_app(security).build().await?;

    let req = test::TestRequest::post()
        .uri(&format!("{API}/projects"))
        .insert_header(("Authorization", auth.clone()))
        .set_json(new_project())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["tags"].as_array().unwrap().len(), 2);

    let req = test::TestRequest::put()
        .uri(&format!("{API}/projects/{id}"))
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({ "tags": [] }))
        .to_request();
    let status: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(status, json!({ "project_id": id, "status": "Project updated" }));

    let req = test::TestRequest::get()
        .uri(&format!("{API}/projects/{id}"))
        .insert_header(("Authorization", auth.clone()))
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched["tags"], json!([]));
    assert_eq!(fetched["title"], "Asset monitoring");

    let req = test::TestRequest::delete()
        .uri(&format!("{API}/projects/{id}"))
        .insert_header(("Authorization", auth.clone()))
        .to_request();
    let status: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(status, json!({ "project_id": id, "status": "Project deleted" }));

    let req = test::TestRequest::delete()
        .uri(&format!("{API}/projects/{id}"))
        .insert_header(("Authorization", auth))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, StatusCode::NOT_FOUND, "PROJECT_NOT_FOUND", None).await;
    Ok(())
}

#[actix_web::test]
async fn project_requires_all_create_fields() -> Result<(), Box<dyn std::error::Error>> {
    let security = test_security();
    let auth = bearer(&security, "owner@example.test");
    let app = create_test_app(security).build().await?;

    let mut body = new_project();
    body.as_object_mut().unwrap().remove("project_url");
    let req = test::TestRequest::post()
        .uri(&format!("{API}/projects"))
        .insert_header(("Authorization", auth))
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, StatusCode::BAD_REQUEST, "BAD_REQUEST", None).await;
    Ok(())
}
