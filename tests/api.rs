use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use bakers_formula::app::build_app;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn create(app: &Router, body: Value) -> (String, Value) {
    let (status, json) = send(app, Method::POST, "/api/formulas", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    (json["id"].as_str().unwrap().to_string(), json)
}

#[tokio::test]
async fn healthz_reports_service_state() {
    let app = build_app();
    let (status, json) = send(&app, Method::GET, "/healthz", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["presets"], 4);
}

#[tokio::test]
async fn share_preview_falls_back_to_default() {
    let app = build_app();
    let (status, json) = send(&app, Method::GET, "/api/share?garbage$$$", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Basic Bread");
    assert!(json["id"].is_null());

    let (_, json) = send(&app, Method::GET, "/api/share", None).await;
    assert_eq!(json["name"], "Basic Bread");
}

#[tokio::test]
async fn share_preview_decodes_raw_query() {
    let app = build_app();
    let (status, json) = send(
        &app,
        Method::GET,
        "/api/share?n:Rye%20Loaf!b:400!i:Water*80,Salt*2",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Rye Loaf");
    assert_eq!(json["base_weight"], 400.0);
    assert_eq!(json["ingredients"][0]["weight"], 320.0);
    assert_eq!(json["ingredients"][1]["weight"], 8.0);
    assert_eq!(json["total_percent"], 182.0);
    assert_eq!(json["total_weight"], 728.0);
    assert_eq!(json["code"], "n:Rye%20Loaf!b:400!i:Water*80,Salt*2");
}

#[tokio::test]
async fn create_from_preset_and_unknown_preset() {
    let app = build_app();
    let (_, json) = create(&app, json!({"preset": "pizza"})).await;
    assert_eq!(json["name"], "Neapolitan Pizza");

    let (status, json) = send(&app, Method::POST, "/api/formulas", Some(json!({"preset": "croissant"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "bad request");

    let (status, json) = send(&app, Method::GET, "/api/presets", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["presets"].as_array().unwrap().contains(&json!("basic-bread")));
}

#[tokio::test]
async fn edit_formula_through_api() {
    let app = build_app();
    let (id, json) = create(&app, json!({})).await;
    assert_eq!(json["base_weight"], 500.0);
    assert_eq!(json["ingredients"][0]["weight"], 315.0);

    let base = format!("/api/formulas/{}", id);

    let (status, json) = send(
        &app,
        Method::POST,
        &format!("{}/ingredients", base),
        Some(json!({"name": "Olive Oil", "percent": "4"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["ingredients"][3]["weight"], 20.0);
    assert_eq!(json["total_percent"], 170.0);

    let (_, json) = send(
        &app,
        Method::PUT,
        &format!("{}/ingredients/0/weight", base),
        Some(json!({"value": 630})),
    )
    .await;
    assert_eq!(json["base_weight"], 1000.0);
    assert_eq!(json["ingredients"][3]["weight"], 40.0);

    let (_, json) = send(
        &app,
        Method::PUT,
        &format!("{}/ingredients/1/percent", base),
        Some(json!({"value": "abc"})),
    )
    .await;
    assert_eq!(json["ingredients"][1]["percent"], 0.0);
    assert_eq!(json["ingredients"][1]["weight"], 0.0);

    let (_, json) = send(
        &app,
        Method::PUT,
        &format!("{}/base-weight", base),
        Some(json!({"value": "not a number"})),
    )
    .await;
    assert_eq!(json["base_weight"], 500.0);

    let (_, json) = send(&app, Method::PUT, &format!("{}/name", base), Some(json!({"value": "Focaccia"}))).await;
    assert_eq!(json["name"], "Focaccia");

    let (_, json) = send(
        &app,
        Method::PUT,
        &format!("{}/ingredients/2/name", base),
        Some(json!({"value": "Instant Yeast"})),
    )
    .await;
    assert_eq!(json["ingredients"][2]["name"], "Instant Yeast");

    let (_, share) = send(&app, Method::GET, &format!("{}/share", base), None).await;
    let (_, preview) = send(&app, Method::GET, &format!("/api/share?{}", share["code"].as_str().unwrap()), None).await;
    let (_, current) = send(&app, Method::GET, &base, None).await;
    assert_eq!(preview["ingredients"], current["ingredients"]);
    assert_eq!(preview["name"], "Focaccia");
}

#[tokio::test]
async fn out_of_range_removal_is_ignored() {
    let app = build_app();
    let (id, before) = create(&app, json!({})).await;

    for index in ["-1", "3", "x"] {
        let uri = format!("/api/formulas/{}/ingredients/{}", id, index);
        let (status, json) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        if index == "x" {
            // 非数字下标解析为 0
            assert_eq!(json["ingredients"].as_array().unwrap().len(), 2);
        } else {
            assert_eq!(json["ingredients"], before["ingredients"]);
        }
    }
}

#[tokio::test]
async fn missing_formula_is_not_found() {
    let app = build_app();
    let uri = format!("/api/formulas/{}", uuid::Uuid::new_v4());
    let (status, json) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "not found");

    let (id, _) = create(&app, json!({})).await;
    let uri = format!("/api/formulas/{}", id);
    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
