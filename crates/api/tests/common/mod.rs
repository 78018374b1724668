#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use blip_api::config::{CatalogConfig, ServerConfig};
use blip_api::router::build_app_router;
use blip_api::state::AppState;
use blip_catalog::{
    CatalogCharacter, CatalogCredentials, CatalogError, CatalogPage, CatalogSource, Thumbnail,
    PAGE_SIZE,
};
use blip_core::classifier::Classifier;
use blip_db::models::character::CreateCharacter;
use blip_db::repositories::CharacterRepo;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        catalog: CatalogConfig {
            base_url: "http://catalog.invalid".to_string(),
            credentials: CatalogCredentials {
                public_key: "test-public".to_string(),
                private_key: "test-private".to_string(),
            },
        },
        classifier_lists: None,
    }
}

/// In-memory catalog serving a fixed list of characters.
///
/// Records every requested offset; can be told to fail at one offset.
pub struct FakeCatalog {
    characters: Vec<CatalogCharacter>,
    fail_at: Option<i64>,
    offsets: Mutex<Vec<i64>>,
}

impl FakeCatalog {
    pub fn new(characters: Vec<CatalogCharacter>) -> Self {
        Self {
            characters,
            fail_at: None,
            offsets: Mutex::new(Vec::new()),
        }
    }

    /// `count` characters named `Hero {n}` with ids starting at 1.
    pub fn numbered(count: i64) -> Self {
        Self::new((1..=count).map(|n| character(n, &format!("Hero {n}"))).collect())
    }

    pub fn failing_at(mut self, offset: i64) -> Self {
        self.fail_at = Some(offset);
        self
    }

    pub fn offsets(&self) -> Vec<i64> {
        self.offsets.lock().unwrap().clone()
    }
}

#[async_trait]
impl CatalogSource for FakeCatalog {
    async fn fetch_page(&self, offset: i64) -> Result<CatalogPage, CatalogError> {
        self.offsets.lock().unwrap().push(offset);
        if self.fail_at == Some(offset) {
            return Err(CatalogError::Api {
                status: 503,
                body: "catalog unavailable".to_string(),
            });
        }
        let results: Vec<CatalogCharacter> = self
            .characters
            .iter()
            .skip(offset as usize)
            .take(PAGE_SIZE as usize)
            .cloned()
            .collect();
        Ok(CatalogPage {
            offset,
            limit: PAGE_SIZE,
            total: self.characters.len() as i64,
            count: results.len() as i64,
            results,
        })
    }
}

pub fn character(id: i64, name: &str) -> CatalogCharacter {
    CatalogCharacter {
        id,
        name: name.to_string(),
        thumbnail: Thumbnail {
            path: format!("http://i.annihil.us/u/prod/marvel/i/mg/{id}"),
            extension: "jpg".to_string(),
        },
    }
}

pub fn record(marvel_id: i64, name: &str, blip: Option<bool>) -> CreateCharacter {
    CreateCharacter {
        marvel_id,
        name: name.to_string(),
        thumbnail: format!("http://i.annihil.us/u/prod/marvel/i/mg/{marvel_id}.jpg"),
        blip,
    }
}

/// Build the full application router over `pool` with an empty catalog.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, Arc::new(FakeCatalog::new(Vec::new())))
}

/// Build the full application router over `pool`, syncing from `catalog`.
///
/// Uses the same middleware stack as production.
pub fn build_test_app_with(pool: PgPool, catalog: Arc<dyn CatalogSource>) -> Router {
    let config = test_config();
    let state = AppState {
        characters: CharacterRepo::new(pool),
        config: Arc::new(config.clone()),
        catalog,
        classifier: Arc::new(Classifier::builtin()),
    };
    build_app_router(state, &config)
}

/// Seed the table directly through the repository.
pub async fn seed(pool: &PgPool, records: &[CreateCharacter]) {
    CharacterRepo::new(pool.clone())
        .replace_all(records)
        .await
        .unwrap();
}

/// Send a GET request to `uri`.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
