use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blip_api::config::ServerConfig;
use blip_api::router::build_app_router;
use blip_api::state::AppState;
use blip_catalog::CatalogClient;
use blip_core::classifier::Classifier;
use blip_db::repositories::CharacterRepo;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blip_api=debug,blip_db=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        catalog = %config.catalog.base_url,
        "Loaded server configuration"
    );

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = blip_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    blip_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    blip_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Classifier ---
    let classifier = match &config.classifier_lists {
        Some(path) => {
            let classifier = Classifier::from_file(path)
                .unwrap_or_else(|e| panic!("Invalid classifier lists: {e}"));
            tracing::info!(path = %path.display(), "Loaded classifier lists");
            classifier
        }
        None => Classifier::builtin(),
    };
    tracing::info!(
        affected = classifier.affected().len(),
        unaffected = classifier.unaffected().len(),
        "Classifier ready"
    );

    // --- Catalog client ---
    let catalog = CatalogClient::new(
        config.catalog.base_url.clone(),
        config.catalog.credentials.clone(),
    );

    // --- App state ---
    let state = AppState {
        characters: CharacterRepo::new(pool),
        config: Arc::new(config.clone()),
        catalog: Arc::new(catalog),
        classifier: Arc::new(classifier),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
