use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use storylex_backend::config::Config;

pub struct TestApp {
    pub router: Router,
    pub profile_path: PathBuf,
    _tmp: tempfile::TempDir,
}

pub async fn create_test_app() -> TestApp {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let profile_path = tmp.path().join("profile.json");
    let content_path = tmp.path().join("content.json");

    std::fs::write(&content_path, content_fixture().to_string()).expect("write content fixture");

    let config = Config {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        log_level: "info".to_string(),
        profile_path: profile_path.clone(),
        content_path,
        learned_streak_threshold: 3,
        practice_set_size: 10,
    };

    TestApp {
        router: storylex_backend::create_app_with_config(&config).await,
        profile_path,
        _tmp: tmp,
    }
}

fn content_fixture() -> serde_json::Value {
    serde_json::json!({
        "stories": [{
            "id": "story-1",
            "chapters": [{
                "id": "ch-1",
                "vocabulary": [
                    {
                        "word": "obstinate",
                        "type": "adjective",
                        "definition": "stubbornly refusing to change one's mind",
                        "example1": "He remained obstinate despite the evidence.",
                        "equivalent": "testardo"
                    },
                    {
                        "word": "sagacious",
                        "type": "adjective",
                        "definition": "having keen judgment",
                        "equivalent": "sagace"
                    },
                    {
                        "word": "laconic",
                        "type": "adjective",
                        "definition": "using very few words",
                        "equivalent": "laconico"
                    }
                ]
            }]
        }]
    })
}

pub async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn delete(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn expect_error(response: Response, status: StatusCode, code: &str) {
    assert_eq!(response.status(), status);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], code);
}
