use std::sync::Arc;

use blip_catalog::CatalogSource;
use blip_core::classifier::Classifier;
use blip_db::repositories::CharacterRepo;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Character repository, built once over the connection pool.
    pub characters: CharacterRepo,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Remote catalog used by `/sync`.
    pub catalog: Arc<dyn CatalogSource>,
    /// Name classifier applied to every synced record.
    pub classifier: Arc<Classifier>,
}
