use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::{json, Value};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::common::{assert_problem_details, bearer, description, test_security, API};
use crate::support::app_builder::create_test_app;

fn new_article(title: &str) -> Value {
    json!({
        "author": "Tobias Caliskan",
        "tags": [{ "icon_name": "rust", "name": "Rust" }],
        "image_url": "www.example.test/picture.svg",
        "title": title,
        "description": description(),
        "content": "# Heading\n\nMarkdown body",
    })
}

#[actix_web::test]
async fn article_lifecycle() -> Result<(), Box<dyn std::error::Error>> {
    let security = test_security();
    let auth = bearer(&security, "author@example.test");
    let app = create_test_app(security).build().await?;

    // create
    let req = test::TestRequest::post()
        .uri(&format!("{API}/articles"))
        .insert_header(("Authorization", auth.clone()))
        .set_json(new_article("First"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["tags"][0]["name"], "Rust");
    assert!(created["updated_at"].is_null());
    OffsetDateTime::parse(created["created_at"].as_str().unwrap(), &Rfc3339)?;

    // read
    let req = test::TestRequest::get()
        .uri(&format!("{API}/articles/{id}"))
        .insert_header(("Authorization", auth.clone()))
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    for field in ["id", "title", "author", "tags", "content", "description"] {
        assert_eq!(fetched[field], created[field], "{field}");
    }

    // partial update
    let req = test::TestRequest::put()
        .uri(&format!("{API}/articles/{id}"))
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({ "title": "Renamed" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let status: Value = test::read_body_json(resp).await;
    assert_eq!(status, json!({ "article_id": id, "status": "Article updated" }));

    let req = test::TestRequest::get()
        .uri(&format!("{API}/articles/{id}"))
        .insert_header(("Authorization", auth.clone()))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["title"], "Renamed");
    assert_eq!(updated["author"], "Tobias Caliskan");
    assert_eq!(updated["tags"], created["tags"]);
    assert!(updated["updated_at"].is_string());

    // delete
    let req = test::TestRequest::delete()
        .uri(&format!("{API}/articles/{id}"))
        .insert_header(("Authorization", auth.clone()))
        .to_request();
    let status: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(status, json!({ "article_id": id, "status": "Article deleted" }));

    let req = test::TestRequest::get()
        .uri(&format!("{API}/articles/{id}"))
        .insert_header(("Authorization", auth))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, StatusCode::NOT_FOUND, "ARTICLE_NOT_FOUND", None).await;
    Ok(())
}

#[actix_web::test]
async fn list_pages_in_id_order() -> Result<(), Box<dyn std::error::Error>> {
    let security = test_security();
    let auth = bearer(&security, "author@example.test");
    let app = create_test_app(security).build().await?;

    for title in ["a", "b", "c", "d"] {
        let req = test::TestRequest::post()
            .uri(&format!("{API}/articles/"))
            .insert_header(("Authorization", auth.clone()))
            .set_json(new_article(title))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get()
        .uri(&format!("{API}/articles?skip=1&limit=2"))
        .insert_header(("Authorization", auth.clone()))
        .to_request();
    let page: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    let titles: Vec<&str> = page.iter().map(|a| a["title"].as_str().unwrap()).collect();
    assert_eq!(titles, ["b", "c"]);

    let req = test::TestRequest::get()
        .uri(&format!("{API}/articles/"))
        .insert_header(("Authorization", auth.clone()))
        .to_request();
    let all: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(all.len(), 4);

    for query in ["skip=-1", "limit=18446744073709551615", "skip=9223372036854775808", "limit=1001"] {
        let req = test::TestRequest::get()
            .uri(&format!("{API}/articles?{query}"))
            .insert_header(("Authorization", auth.clone()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details(resp, StatusCode::BAD_REQUEST, "BAD_REQUEST", None).await;
    }
    Ok(())
}

#[actix_web::test]
async fn description_length_is_enforced() -> Result<(), Box<dyn std::error::Error>> {
    let security = test_security();
    let auth = bearer(&security, "author@example.test");
    let app = create_test_app(security).build().await?;

    let mut body = new_article("short");
    body["description"] = json!("too short");
    let req = test::TestRequest::post()
        .uri(&format!("{API}/articles"))
        .insert_header(("Authorization", auth.clone()))
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, StatusCode::BAD_REQUEST, "VALIDATION_ERROR", None).await;

    let req = test::TestRequest::post()
        .uri(&format!("{API}/articles"))
        .insert_header(("Authorization", auth.clone()))
        .set_json(new_article("ok"))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::put()
        .uri(&format!("{API}/articles/{}", created["id"]))
        .insert_header(("Authorization", auth))
        .set_json(json!({ "description": "x".repeat(141) }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, StatusCode::BAD_REQUEST, "VALIDATION_ERROR", None).await;
    Ok(())
}

#[actix_web::test]
async fn missing_article_and_empty_patch() -> Result<(), Box<dyn std::error::Error>> {
    let security = test_security();
    let auth = bearer(&security, "author@example.test");
    let app = create_test_app(security).build().await?;

    let req = test::TestRequest::put()
        .uri(&format!("{API}/articles/4242"))
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({ "title": "nope" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, StatusCode::NOT_FOUND, "ARTICLE_NOT_FOUND", None).await;

    let req = test::TestRequest::delete()
        .uri(&format!("{API}/articles/4242"))
        .insert_header(("Authorization", auth.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, StatusCode::NOT_FOUND, "ARTICLE_NOT_FOUND", None).await;

    let req = test::TestRequest::put()
        .uri(&format!("{API}/articles/1"))
        .insert_header(("Authorization", auth))
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, StatusCode::BAD_REQUEST, "EMPTY_PATCH", None).await;
    Ok(())
}
