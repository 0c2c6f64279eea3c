//! ASPRI Identity Service Server
//!
//! Binary entrypoint wiring the PostgreSQL-backed store, the token service
//! and the HTTP router into a running server.

use std::sync::Arc;

use dotenv::dotenv;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use aspri_identity::{
    api::{AppState, RouterBuilder},
    config::AppConfig,
    database::DatabaseConfig,
    service::{AuthService, ProfileService, TokenService},
    store::{PgProfileStore, ProfileStore},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv().ok();

    env_logger::init();

    log::info!("Starting ASPRI identity service v{}", aspri_identity::VERSION);

    // Load configuration from environment
    let config = AppConfig::from_env();
    config.validate()?;

    log::info!("Configuration loaded and validated");

    // Database connection and migrations
    let db_config = DatabaseConfig::from_env()?;
    let pool = db_config.create_pool().await?;

    log::info!("Running database migrations");
    sqlx::migrate!("./migrations").run(&pool).await?;

    // Wire services over the PostgreSQL store
    let store: Arc<dyn ProfileStore> = Arc::new(PgProfileStore::new(pool));
    let token_service = Arc::new(TokenService::from_config(&config.jwt));
    let auth_service = Arc::new(AuthService::with_bcrypt_cost(
        store.clone(),
        token_service.clone(),
        config.security.bcrypt_cost,
    ));
    let profile_service = Arc::new(ProfileService::new(store.clone()));

    log::info!("Services initialized");
    log::info!(
        "Access token TTL: {}s, refresh token TTL: {}s",
        config.jwt.access_ttl_millis / 1000,
        config.jwt.refresh_ttl_millis / 1000
    );

    let state = AppState {
        auth_service,
        profile_service,
        token_service,
        store,
    };

    let app = RouterBuilder::with_all_routes().build(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
            .into_inner(),
    );

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    log::info!("Listening on {}", bind_addr);
    log::info!("Endpoints:");
    log::info!("  POST /auth/register - Register a new user");
    log::info!("  POST /auth/login    - Authenticate");
    log::info!("  POST /auth/logout   - Log out (stateless no-op)");
    log::info!("  POST /auth/refresh  - Refresh the access token");
    log::info!("  GET  /profile       - Get the caller's profile");
    log::info!("  POST /profile       - Provision the caller's profile");
    log::info!("  PUT  /profile       - Update the caller's profile");
    log::info!("  GET  /health        - Health check");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
