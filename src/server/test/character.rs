use serde_json::json;

use super::*;

async fn create_character(app: &TestApp, cookie: &str, name: &str) -> TestResponse {
    app.post(
        "/api/characters",
        json!({ "name": name, "tradition": "Verbena" }),
        Some(cookie),
    )
    .await
}

#[tokio::test]
async fn characters_require_session() {
    let app = TestApp::new().await;

    let response = app.get("/api/characters", None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .post(
            "/api/characters",
            json!({ "name": "Mira", "tradition": "Verbena" }),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app.delete("/api/characters/1", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn creates_character_with_default_arete() {
    let app = TestApp::new().await;
    let cookie = app.sign_up("archmage").await;

    let response = create_character(&app, &cookie, "Mira").await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["name"], "Mira");
    assert_eq!(response.body["arete"], 1);
}

#[tokio::test]
async fn character_without_tradition_is_bad_request() {
    let app = TestApp::new().await;
    let cookie = app.sign_up("archmage").await;

    let response = app
        .post("/api/characters", json!({ "name": "Mira" }), Some(&cookie))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "tradition is required");
}

#[tokio::test]
async fn lists_only_callers_characters() {
    let app = TestApp::new().await;
    let owner = app.sign_up("archmage").await;
    let other = app.sign_up("apprentice").await;

    create_character(&app, &owner, "Mira").await;
    create_character(&app, &owner, "Tomas").await;
    create_character(&app, &other, "Intruder").await;

    let response = app.get("/api/characters", Some(&owner)).await;
    assert_eq!(response.status, StatusCode::OK);

    let names: Vec<_> = response
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"Mira".to_string()));
    assert!(names.contains(&"Tomas".to_string()));
}

#[tokio::test]
async fn deleting_another_users_character_is_not_found() {
    let app = TestApp::new().await;
    let owner = app.sign_up("archmage").await;
    let other = app.sign_up("apprentice").await;

    let created = create_character(&app, &owner, "Mira").await;
    let id = created.body["id"].as_i64().unwrap();

    let response = app
        .delete(&format!("/api/characters/{}", id), None, Some(&other))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .delete(&format!("/api/characters/{}", id), None, Some(&owner))
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = app.get("/api/characters", Some(&owner)).await;
    assert!(response.body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn non_numeric_character_id_is_json_bad_request() {
    let app = TestApp::new().await;
    let cookie = app.sign_up("archmage").await;

    let response = app.delete("/api/characters/abc", None, Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["error"].is_string());
}
