use serde_json::json;

use super::*;

#[tokio::test]
async fn creates_and_lists_rotes() {
    let app = TestApp::new().await;

    let response = app
        .post(
            "/api/rotes",
            json!({
                "name": "Healing Touch",
                "tradition": "Verbena",
                "description": "Knits flesh together.",
                "spheres": "Life 3",
                "level": 3
            }),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["name"], "Healing Touch");
    assert_eq!(response.body["page"], Value::Null);
    assert!(response.body["id"].as_i64().unwrap() > 0);

    let response = app.get("/api/rotes", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn rote_without_name_is_bad_request() {
    let app = TestApp::new().await;

    let response = app
        .post(
            "/api/rotes",
            json!({
                "tradition": "Verbena",
                "description": "Nameless.",
                "spheres": "Life 1",
                "level": 1
            }),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, json!({ "error": "name is required" }));
}

#[tokio::test]
async fn blank_required_field_is_bad_request() {
    let app = TestApp::new().await;

    let response = app
        .post(
            "/api/rotes",
            json!({
                "name": "   ",
                "tradition": "Verbena",
                "description": "Blank name.",
                "spheres": "Life 1",
                "level": 1
            }),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_json_is_internal_error() {
    let app = TestApp::new().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/rotes")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.send(request).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body, json!({ "error": "Internal server error" }));
}

#[tokio::test]
async fn filters_rotes_by_tradition_and_sphere() {
    let app = TestApp::new().await;

    for (name, tradition, spheres) in [
        ("Call the Storm", "Verbena", "Forces 3, Prime 2"),
        ("Mind Shield", "Akashic Brotherhood", "Mind 1"),
        ("Quintessential Charge", "Sons of Ether", "Prime 2, Forces 2"),
    ] {
        let response = app
            .post(
                "/api/rotes",
                json!({
                    "name": name,
                    "tradition": tradition,
                    "description": "Test rote.",
                    "spheres": spheres,
                    "level": 2
                }),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let response = app.get("/api/rotes?tradition=Verbena", None).await;
    let names: Vec<_> = response
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Call the Storm"]);

    let response = app.get("/api/rotes?sphere=Prime", None).await;
    assert_eq!(response.body.as_array().unwrap().len(), 2);

    let response = app.get("/api/rotes?tradition=&sphere=", None).await;
    assert_eq!(response.body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn sphere_filter_does_not_expand_wildcards() {
    let app = TestApp::new().await;

    for (name, spheres) in [("Call the Storm", "Forces 3"), ("Mind Shield", "Mind 1")] {
        let response = app
            .post(
                "/api/rotes",
                json!({
                    "name": name,
                    "tradition": "Verbena",
                    "description": "Test rote.",
                    "spheres": spheres,
                    "level": 1
                }),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    for uri in ["/api/rotes?sphere=%25", "/api/rotes?sphere=_"] {
        let response = app.get(uri, None).await;
        assert_eq!(response.status, StatusCode::OK);
        assert!(response.body.as_array().unwrap().is_empty(), "{}", uri);
    }
}

#[tokio::test]
async fn invalid_rote_query_is_json_bad_request() {
    let app = TestApp::new().await;

    let response = app.get("/api/rotes?tradition=a&tradition=b", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["error"].is_string());
}

#[tokio::test]
async fn creates_and_lists_backgrounds() {
    let app = TestApp::new().await;

    let response = app
        .post(
            "/api/backgrounds",
            json!({
                "name": "Node",
                "category": "Mystical",
                "subtype": "Place",
                "cost": 3,
                "description": "A place of power."
            }),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["subtype"], "Place");

    let response = app
        .post(
            "/api/backgrounds",
            json!({
                "name": "Allies",
                "category": "Social",
                "subtype": "People",
                "description": "Missing cost."
            }),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "cost is required");

    let response = app.get("/api/backgrounds", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn lists_featured_resources_first() {
    let app = TestApp::new().await;

    for (name, kind, featured) in [
        ("Zeta", "Article", false),
        ("Beta", "Tool", true),
        ("Alpha", "Tool", false),
        ("Gamma", "Book", true),
    ] {
        let response = app
            .post(
                "/api/resources",
                json!({
                    "name": name,
                    "type": kind,
                    "category": "Reference",
                    "description": "A link.",
                    "url": "https://example.com",
                    "featured": featured
                }),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
        assert_eq!(response.body["type"], kind);
    }

    let response = app.get("/api/resources", None).await;
    assert_eq!(response.status, StatusCode::OK);

    let resources = response.body.as_array().unwrap();
    let names: Vec<_> = resources
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Gamma", "Beta", "Zeta", "Alpha"]);
    assert_eq!(resources[0]["featured"], true);
    assert_eq!(resources[3]["featured"], false);
}

#[tokio::test]
async fn resource_featured_defaults_to_false() {
    let app = TestApp::new().await;

    let response = app
        .post(
            "/api/resources",
            json!({
                "name": "Sphere Cheat Sheet",
                "type": "Tool",
                "category": "Reference",
                "description": "Quick sphere lookup.",
                "url": "https://example.com/spheres"
            }),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["featured"], false);
    assert_eq!(response.body["author"], Value::Null);
}

#[tokio::test]
async fn serves_openapi_document() {
    let app = TestApp::new().await;

    let response = app.get("/api/docs/openapi.json", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["paths"]["/api/rotes"].is_object());
    assert!(response.body["paths"]["/api/characters/{id}"].is_object());
}
