mod common;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use common::{SAM_ID, fixture_service};
use todolite::api::router;

fn app(prefix: &str) -> Router {
    let (svc, _) = fixture_service();
    router(Arc::new(svc), prefix)
}

async fn send(app: Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut req = Request::builder().method(method).uri(uri);
    if body.is_some() {
        req = req.header(header::CONTENT_TYPE, "application/json");
    }
    let req = req.body(body.map_or_else(Body::empty, |b| Body::from(b.to_string()))).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, json)
}

fn owners(v: &Value) -> Vec<&str> {
    v.as_array().unwrap().iter().map(|t| t["owner"].as_str().unwrap()).collect()
}

#[tokio::test]
async fn list_all_sorted_by_owner() {
    let (status, body) = send(app(""), Method::GET, "/todos", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(owners(&body), ["Chris", "Jamie", "Pat", "Sam"]);
    assert_eq!(body[3]["_id"], SAM_ID);
}

#[tokio::test]
async fn list_with_filters_and_limit() {
    let (status, body) =
        send(app(""), Method::GET, "/todos?category=software%20design&sortorder=desc&limit=1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(owners(&body), ["Sam"]);
}

#[tokio::test]
async fn list_rejects_bad_parameters() {
    for uri in ["/todos?status=maybe", "/todos?category=work", "/todos?limit=0", "/todos?limit=-1"] {
        let (status, body) = send(app(""), Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["code"], 400);
        assert!(body["error"].is_string());
    }
}

#[tokio::test]
async fn get_by_id() {
    let (status, body) = send(app(""), Method::GET, &format!("/todos/{SAM_ID}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["owner"], "Sam");
    assert_eq!(body["status"], false);

    let (status, body) = send(app(""), Method::GET, "/todos/nope", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("wasn't a legal identifier"));

    let (status, _) = send(app(""), Method::GET, "/todos/000000000000000000000000", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_then_fetch() {
    let app = app("");
    let (status, body) = send(
        app.clone(),
        Method::POST,
        "/todos",
        Some(r#"{"owner":"Kim","body":"buy milk","category":"groceries"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_str().unwrap().to_string();
    assert_eq!(id.len(), 24);

    let (status, body) = send(app, Method::GET, &format!("/todos/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["owner"], "Kim");
    assert_eq!(body["status"], false);
}

#[tokio::test]
async fn create_rejects_invalid_bodies() {
    for body in [
        r#"{"owner":"","body":"b","category":"homework"}"#,
        r#"{"owner":"o","body":"b","category":"work"}"#,
        r#"{"owner":"o","body":"b"}"#,
        "{not json",
    ] {
        let (status, resp) = send(app(""), Method::POST, "/todos", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(resp["code"], 400);
    }
}

#[tokio::test]
async fn delete_outcomes() {
    let app = app("");
    let (status, _) = send(app.clone(), Method::DELETE, &format!("/todos/{SAM_ID}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(app.clone(), Method::DELETE, &format!("/todos/{SAM_ID}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(app.clone(), Method::DELETE, "/todos/garbage", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, body) = send(app, Method::GET, "/todos", None).await;
    assert_eq!(owners(&body), ["Chris", "Jamie", "Pat"]);
}

#[tokio::test]
async fn routes_mount_under_prefix() {
    let (status, body) = send(app("/api"), Method::GET, "/api/todos?owner=chris", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(owners(&body), ["Chris"]);
    let (status, _) = send(app("api/"), Method::GET, "/todos", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
