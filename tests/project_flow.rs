use actix_web::{http::StatusCode, test};
use serde_json::json;
use uuid::Uuid;

mod common;
use common::{client::TestClient, test_data, TestContext};

#[actix_web::test]
async fn test_project_create_with_team() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let team = client.create_test_team("Design").await;

    let req = test::TestRequest::post()
        .uri("/api/projects")
        .set_json(test_data::project("Website", Some(team.id)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "Website");
    assert_eq!(body["dueDate"], "2025-12-31");
    assert_eq!(body["teamId"], team.id.to_string());
    assert_eq!(body["team"]["name"], "Design");
    assert!(body["team"].get("members").is_none());
}

#[actix_web::test]
async fn test_project_create_without_team() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/projects")
        .set_json(json!({ "name": "Solo" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["team"].is_null());
    assert!(body["status"].is_null());
}

#[actix_web::test]
async fn test_project_create_with_unknown_team_is_rejected() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/projects")
        .set_json(test_data::project("Website", Some(Uuid::new_v4())))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
    assert!(ctx.db.list_projects().await.unwrap().is_empty());
}

#[actix_web::test]
async fn test_project_update_overwrites_every_field() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let first = client.create_test_team("Design").await;
    let second = client.create_test_team("Dev").await;

    let req = test::TestRequest::post()
        .uri("/api/projects")
        .set_json(test_data::project("Website", Some(first.id)))
        .to_request();
    let created: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = created["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::put()
        .uri(&format!("/api/projects/{id}"))
        .set_json(json!({ "name": "Website v2", "status": "Concluído", "teamId": second.id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "Website v2");
    assert_eq!(body["status"], "Concluído");
    assert_eq!(body["team"]["name"], "Dev");
    assert!(body["description"].is_null());
    assert!(body["dueDate"].is_null());
    assert!(body["ownerId"].is_null());

    // no teamId clears the link
    let req = test::TestRequest::put()
        .uri(&format!("/api/projects/{id}"))
        .set_json(json!({ "name": "Website v3" }))
        .to_request();
    let body: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert!(body["team"].is_null());
    assert!(body["teamId"].is_null());
}

#[actix_web::test]
async fn test_project_update_with_unknown_team_leaves_project_unmodified() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let team = client.create_test_team("Design").await;
    let req = test::TestRequest::post()
        .uri("/api/projects")
        .set_json(test_data::project("Website", Some(team.id)))
        .to_request();
    let created: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = Uuid::parse_str(created["id"].as_str().unwrap()).unwrap();
    let (before, _) = ctx.db.get_project(id).await.unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/api/projects/{id}"))
        .set_json(json!({ "name": "Changed", "teamId": Uuid::new_v4() }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let (after, linked) = ctx.db.get_project(id).await.unwrap();
    assert_eq!(before, after);
    assert_eq!(linked.map(|t| t.id), Some(team.id));
}

#[actix_web::test]
async fn test_project_update_missing_is_not_found() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/projects/{}", Uuid::new_v4()))
        .set_json(json!({ "name": "Ghost" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_project_list_get_and_delete() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    for name in ["Alpha", "Beta"] {
        let req = test::TestRequest::post()
            .uri("/api/projects")
            .set_json(test_data::project(name, None))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get().uri("/api/projects").to_request();
    let listed: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["name"], "Alpha");
    let id = listed[0]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::get().uri(&format!("/api/projects/{id}")).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::delete().uri(&format!("/api/projects/{id}")).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::delete().uri(&format!("/api/projects/{id}")).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    assert_eq!(ctx.db.list_projects().await.unwrap().len(), 1);
}

#[actix_web::test]
async fn test_project_update_missing_id_wins_over_blank_name() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/projects/{}", Uuid::new_v4()))
        .set_json(json!({ "name": "  " }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "NOT_FOUND");

    let req = test::TestRequest::post()
        .uri("/api/projects")
        .set_json(test_data::project("Website", None))
        .to_request();
    let created: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = created["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::put()
        .uri(&format!("/api/projects/{id}"))
        .set_json(json!({ "name": "  " }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_project_malformed_id_is_bad_request() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get().uri("/api/projects/not-a-uuid").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "BAD_REQUEST");
}
