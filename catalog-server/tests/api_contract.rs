//! HTTP contract of the catalog API, driven in-process against `mem://`

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use catalog_server::api::build_app;
use catalog_server::{Config, ServerState};

async fn app() -> Router {
    let state = ServerState::initialize(&Config::in_memory()).await.unwrap();
    build_app(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn ids(list: &Value) -> Vec<String> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn health_reports_service() {
    let app = app().await;
    let (status, body) = send(&app, "GET", "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "DIALIBATOU BTP API");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn unknown_route_is_json_404() {
    let app = app().await;
    let (status, body) = send(&app, "GET", "/api/agents", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 3);
}

#[tokio::test]
async fn startup_seeds_defaults_in_order() {
    let app = app().await;

    let (status, properties) = send(&app, "GET", "/api/properties", None).await;
    assert_eq!(status, StatusCode::OK);
    let expected: Vec<String> = (1..=12).map(|i| format!("p{i}")).collect();
    assert_eq!(ids(&properties), expected);
    assert_eq!(properties[0]["ti"], "Luxueux Appartement Vue Mer Almadies");
    assert_eq!(properties[0]["ag"]["na"], "Mame Cheikh Ndiaye");

    let (_, lots) = send(&app, "GET", "/api/lots", None).await;
    let expected: Vec<String> = (1..=8).map(|i| format!("lot{i}")).collect();
    assert_eq!(ids(&lots), expected);
}

#[tokio::test]
async fn create_assigns_prefixed_id_and_defaults() {
    let app = app().await;

    let (status, created) = send(
        &app,
        "POST",
        "/api/properties",
        Some(json!({ "id": "p1", "ti": "Duplex Yoff", "pr": 98000000 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let id = created["id"].as_str().unwrap();
    assert!(id.starts_with('p'));
    assert_ne!(id, "p1");
    assert_eq!(created["ty"], "Appartement");
    assert_eq!(created["tr"], "Vente");
    assert_eq!(created["fe"], json!([]));
    assert_eq!(created["vd"], json!([]));
    assert_eq!(created["ag"]["ph"], "+221 77 709 61 44");

    let (status, fetched) = send(&app, "GET", &format!("/api/properties/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    // p1 is untouched
    let (_, p1) = send(&app, "GET", "/api/properties/p1", None).await;
    assert_eq!(p1["ti"], "Luxueux Appartement Vue Mer Almadies");
}

#[tokio::test]
async fn create_without_title_is_rejected() {
    let app = app().await;
    let (status, body) = send(&app, "POST", "/api/properties", Some(json!({ "pr": 1 }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 2);
    assert!(body["message"].as_str().unwrap().contains("ti"));

    let (_, list) = send(&app, "GET", "/api/properties", None).await;
    assert_eq!(list.as_array().unwrap().len(), 12);
}

#[tokio::test]
async fn malformed_json_is_400_with_error_body() {
    let app = app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/properties")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"ti\": "))
        .unwrap();
    let (status, body) = send_raw(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 5);

    let request = Request::builder()
        .method("PUT")
        .uri("/api/lots/lot1")
        .body(Body::from(r#"{"loc":"Diass"}"#))
        .unwrap();
    let (status, body) = send_raw(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 5);

    let (_, lot1) = send(&app, "GET", "/api/lots/lot1", None).await;
    assert_ne!(lot1["loc"], "Diass");
}

#[tokio::test]
async fn large_surface_and_null_description_round_trip() {
    let app = app().await;

    let (status, created) = send(
        &app,
        "POST",
        "/api/properties",
        Some(json!({ "ti": "Terrain Bayakh", "su": 3000000000_i64, "de": null })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["su"], 3000000000_i64);
    assert_eq!(created["de"], Value::Null);

    let id = created["id"].as_str().unwrap();
    let (_, fetched) = send(&app, "GET", &format!("/api/properties/{id}"), None).await;
    assert_eq!(fetched["su"], 3000000000_i64);
    assert_eq!(fetched["de"], Value::Null);
}

#[tokio::test]
async fn update_is_full_replace() {
    let app = app().await;

    let (status, updated) = send(
        &app,
        "PUT",
        "/api/properties/p1",
        Some(json!({ "id": "other", "ti": "Nouveau titre" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], "p1");
    assert_eq!(updated["ti"], "Nouveau titre");
    assert_eq!(updated["pr"], 0);
    assert_eq!(updated["fe"], json!([]));
    assert_eq!(updated["ft"], false);

    let (_, fetched) = send(&app, "GET", "/api/properties/p1", None).await;
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn update_lot_availability() {
    let app = app().await;
    let (_, mut lot3) = send(&app, "GET", "/api/lots/lot3", None).await;
    lot3["dispo"] = json!(0);

    let (status, _) = send(&app, "PUT", "/api/lots/lot3", Some(lot3.clone())).await;
    assert_eq!(status, StatusCode::OK);

    let (_, fetched) = send(&app, "GET", "/api/lots/lot3", None).await;
    assert_eq!(fetched, lot3);
    assert_eq!(fetched["dispo"], 0);
    assert_eq!(fetched["loc"], "Diass");
    assert_eq!(fetched["lots"], 80);
}

#[tokio::test]
async fn unknown_ids_are_404() {
    let app = app().await;

    let (status, body) = send(&app, "GET", "/api/properties/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Property not found");
    assert_eq!(body["code"], 6001);

    let (status, _) = send(&app, "PUT", "/api/properties/nope", Some(json!({ "ti": "x" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // PUT on a missing id does not create it
    let (status, _) = send(&app, "GET", "/api/properties/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_lot_ids_are_404() {
    let app = app().await;

    let (status, body) = send(&app, "GET", "/api/lots/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Lot not found");
    assert_eq!(body["code"], 6101);

    let (status, body) = send(&app, "PUT", "/api/lots/nope", Some(json!({ "loc": "Mbour" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 6101);

    let (status, body) = send(&app, "DELETE", "/api/lots/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Lot not found");

    // PUT on a missing id does not create it
    let (status, _) = send(&app, "GET", "/api/lots/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, lots) = send(&app, "GET", "/api/lots", None).await;
    assert_eq!(lots.as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn delete_removes_from_list() {
    let app = app().await;

    let (status, body) = send(&app, "DELETE", "/api/properties/p5", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Property deleted successfully");

    let (_, list) = send(&app, "GET", "/api/properties", None).await;
    let ids = ids(&list);
    assert_eq!(ids.len(), 11);
    assert!(!ids.contains(&"p5".to_string()));

    let (status, _) = send(&app, "DELETE", "/api/properties/p5", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, "DELETE", "/api/lots/lot1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Lot deleted successfully");
}

#[tokio::test]
async fn bulk_replace_keeps_order_with_fresh_ids() {
    let app = app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/properties/bulk",
        Some(json!([
            { "id": "p1", "ti": "Premier" },
            { "ti": "Deuxième", "ty": "Villa" },
            { "ti": "Troisième", "ty": "Terrain" }
        ])),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "3 properties saved");

    let (_, list) = send(&app, "GET", "/api/properties", None).await;
    let titles: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["ti"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Premier", "Deuxième", "Troisième"]);

    let ids = ids(&list);
    assert!(ids.iter().all(|id| id.starts_with('p') && id != "p1"));
    let mut unique = ids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 3);
}

#[tokio::test]
async fn bulk_replace_empty_clears_collection() {
    let app = app().await;

    let (status, body) = send(&app, "POST", "/api/properties/bulk", Some(json!([]))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "0 properties saved");

    let (_, list) = send(&app, "GET", "/api/properties", None).await;
    assert_eq!(list, json!([]));

    let (_, body) = send(&app, "POST", "/api/lots/bulk", Some(json!([{ "loc": "Mbour" }]))).await;
    assert_eq!(body["message"], "1 lots saved");
}

#[tokio::test]
async fn bulk_with_invalid_item_changes_nothing() {
    let app = app().await;
    let (status, body) = send(
        &app,
        "POST",
        "/api/lots/bulk",
        Some(json!([{ "loc": "Thiès" }, { "zone": "sans loc" }])),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 2);

    let (_, lots) = send(&app, "GET", "/api/lots", None).await;
    assert_eq!(lots.as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn reset_restores_defaults() {
    let app = app().await;

    send(&app, "DELETE", "/api/properties/p1", None).await;
    send(&app, "POST", "/api/lots/bulk", Some(json!([]))).await;
    send(&app, "POST", "/api/properties", Some(json!({ "ti": "Extra" }))).await;

    let (status, body) = send(&app, "POST", "/api/reset", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Database reset to default data");

    let (_, properties) = send(&app, "GET", "/api/properties", None).await;
    let expected: Vec<String> = (1..=12).map(|i| format!("p{i}")).collect();
    assert_eq!(ids(&properties), expected);

    let (_, lots) = send(&app, "GET", "/api/lots", None).await;
    assert_eq!(lots.as_array().unwrap().len(), 8);
}

fn multipart_request(
    field: &str,
    filename: Option<&str>,
    content_type: Option<&str>,
    data: &[u8],
) -> Request<Body> {
    let boundary = "X-CATALOG-BOUNDARY";
    let mut disposition = format!("Content-Disposition: form-data; name=\"{field}\"");
    if let Some(name) = filename {
        disposition.push_str(&format!("; filename=\"{name}\""));
    }

    let mut body = Vec::new();
    body.extend_from_slice(format!("--{boundary}\r\n{disposition}\r\n").as_bytes());
    if let Some(ct) = content_type {
        body.extend_from_slice(format!("Content-Type: {ct}\r\n").as_bytes());
    }
    body.extend_from_slice(b"\r\n");
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/api/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn send_raw(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn upload_returns_data_url() {
    let app = app().await;
    let request = multipart_request("file", Some("villa.png"), Some("image/png"), b"abc");

    let (status, body) = send_raw(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["url"], "data:image/png;base64,YWJj");
    assert_eq!(body["filename"], "villa.png");
}

#[tokio::test]
async fn upload_without_content_type_defaults_to_jpeg() {
    let app = app().await;
    let request = multipart_request("file", Some("photo"), None, b"abc");

    let (status, body) = send_raw(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["url"], "data:image/jpeg;base64,YWJj");
}

#[tokio::test]
async fn upload_without_file_field_is_400() {
    let app = app().await;
    let request = multipart_request("image", Some("a.png"), Some("image/png"), b"abc");

    let (status, body) = send_raw(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6504);
}
