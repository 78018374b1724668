//! Exercises `CatalogClient` against a local stub of the catalog API.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use assert_matches::assert_matches;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use blip_catalog::models::{CatalogEnvelope, CatalogPage};
use blip_catalog::signing::request_hash;
use blip_catalog::{
    CatalogCharacter, CatalogClient, CatalogCredentials, CatalogError, CatalogSource, Pages,
    Thumbnail,
};

type Captured = Arc<Mutex<Vec<HashMap<String, String>>>>;

#[derive(Clone)]
struct StubState {
    total: i64,
    captured: Captured,
}

async fn characters(
    State(state): State<StubState>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let offset: i64 = params
        .get("offset")
        .and_then(|o| o.parse().ok())
        .unwrap_or(0);
    state.captured.lock().unwrap().push(params);

    let end = (offset + 100).min(state.total);
    let results: Vec<CatalogCharacter> = (offset..end)
        .map(|id| CatalogCharacter {
            id: 1_000_000 + id,
            name: format!("Hero {id}"),
            thumbnail: Thumbnail {
                path: format!("http://i.annihil.us/u/prod/marvel/i/mg/{id}"),
                extension: "jpg".into(),
            },
        })
        .collect();

    Json(CatalogEnvelope {
        code: Some(200),
        data: CatalogPage {
            offset,
            limit: 100,
            total: state.total,
            count: results.len() as i64,
            results,
        },
    })
}

async fn unauthorized() -> impl IntoResponse {
    (
        StatusCode::UNAUTHORIZED,
        r#"{"code":"InvalidCredentials","message":"The passed API key is invalid."}"#,
    )
}

/// Serve `router` on an ephemeral port and return its base URL.
async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn credentials() -> CatalogCredentials {
    CatalogCredentials {
        public_key: "pub-key".into(),
        private_key: "priv-key".into(),
    }
}

async fn stub_catalog(total: i64) -> (String, Captured) {
    let captured: Captured = Arc::default();
    let router = Router::new()
        .route("/v1/public/characters", get(characters))
        .with_state(StubState {
            total,
            captured: Arc::clone(&captured),
        });
    (spawn(router).await, captured)
}

#[tokio::test]
async fn fetch_page_sends_signed_query() {
    let (base_url, captured) = stub_catalog(250).await;
    let client = CatalogClient::new(base_url, credentials());

    let page = client.fetch_page(100).await.unwrap();
    assert_eq!(page.total, 250);
    assert_eq!(page.results.len(), 100);
    assert_eq!(page.results[0].id, 1_000_100);

    let requests = captured.lock().unwrap();
    let params = &requests[0];
    assert_eq!(params["apikey"], "pub-key");
    assert_eq!(params["limit"], "100");
    assert_eq!(params["offset"], "100");
    let ts = &params["ts"];
    assert_eq!(params["hash"], request_hash(ts, "priv-key", "pub-key"));
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_ignored() {
    let (base_url, captured) = stub_catalog(3).await;
    let client = CatalogClient::new(format!("{base_url}/"), credentials());

    let page = client.fetch_page(0).await.unwrap();
    assert_eq!(page.results.len(), 3);
    assert_eq!(captured.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn pages_walk_whole_catalog_over_http() {
    let (base_url, captured) = stub_catalog(250).await;
    let client = CatalogClient::new(base_url, credentials());

    let mut pages = Pages::new(&client);
    let mut ids = Vec::new();
    while let Some(page) = pages.next_page().await {
        ids.extend(page.unwrap().results.into_iter().map(|c| c.id));
    }

    assert_eq!(ids.len(), 250);
    let offsets: Vec<String> = captured
        .lock()
        .unwrap()
        .iter()
        .map(|p| p["offset"].clone())
        .collect();
    assert_eq!(offsets, vec!["0", "100", "200"]);
}

#[tokio::test]
async fn non_success_status_is_api_error() {
    let router = Router::new().route("/v1/public/characters", get(unauthorized));
    let base_url = spawn(router).await;
    let client = CatalogClient::new(base_url, credentials());

    let err = client.fetch_page(0).await.unwrap_err();
    assert_matches!(err, CatalogError::Api { status: 401, ref body } if body.contains("InvalidCredentials"));
}

#[tokio::test]
async fn malformed_body_is_request_error() {
    let router = Router::new().route("/v1/public/characters", get(|| async { "not json" }));
    let base_url = spawn(router).await;
    let client = CatalogClient::new(base_url, credentials());

    let err = client.fetch_page(0).await.unwrap_err();
    assert_matches!(err, CatalogError::Request(_));
}

#[tokio::test]
async fn unreachable_host_is_request_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = CatalogClient::new(format!("http://{addr}"), credentials());
    let err = client.fetch_page(0).await.unwrap_err();
    assert_matches!(err, CatalogError::Request(_));
}

#[test]
fn debug_output_redacts_private_key() {
    let rendered = format!("{:?}", credentials());
    assert!(rendered.contains("pub-key"));
    assert!(!rendered.contains("priv-key"));
}
