use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use storage::Database;
use storage::store::{LocalResultStore, PgResultStore, ResultStore};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;
mod state;

use config::Config;
use middleware::auth::Sessions;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::results::handlers::list_results,
        features::results::handlers::stream_results,
        features::results::handlers::create_result,
        features::results::handlers::delete_result,
        features::leaderboard::handlers::get_leaderboard,
        features::leaderboard::handlers::stream_leaderboard,
        features::auth::handlers::login,
        features::auth::handlers::logout,
        features::auth::handlers::session,
        features::health::handlers::get_health,
    ),
    components(
        schemas(
            storage::dto::result::CreateResultRequest,
            storage::dto::result::ResultResponse,
            storage::models::EventResult,
            storage::models::Group,
            storage::models::EventType,
            storage::models::Position,
            storage::models::GroupScore,
            features::auth::handlers::LoginRequest,
            features::auth::handlers::SessionResponse,
            features::health::handlers::HealthResponse,
            middleware::auth::AdminIdentity,
        )
    ),
    tags(
        (name = "results", description = "Result listing, filtering and admin writes"),
        (name = "leaderboard", description = "Live group standings"),
        (name = "auth", description = "Admin session endpoints"),
        (name = "health", description = "Service health"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("Session token")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Sportiva results API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let store: Arc<dyn ResultStore> = match &config.database_url {
        Some(database_url) => {
            tracing::info!(
                "Connecting to database at: {}",
                database_url.split('@').next_back().unwrap_or("unknown")
            );
            let db = Database::new(database_url)
                .await
                .context("Failed to initialize database")?;
            tracing::info!("Database connection established");

            tracing::info!("Running database migrations");
            db.run_migrations()
                .await
                .context("Failed to run migrations")?;
            tracing::info!("Database migrations completed successfully");

            Arc::new(
                PgResultStore::new(db)
                    .await
                    .context("Failed to load results from Postgres")?,
            )
        }
        None => {
            tracing::warn!(
                "DATABASE_URL not set, falling back to local storage at {}",
                config.data_path.display()
            );
            Arc::new(
                LocalResultStore::open(&config.data_path)
                    .await
                    .context("Failed to open local result storage")?,
            )
        }
    };
    tracing::info!(backend = store.backend_tag(), "Result store ready");

    let sessions = Sessions::new(&config.admin_email, &config.admin_password);

    let mut auth_rx = sessions.subscribe();
    tokio::spawn(async move {
        while auth_rx.changed().await.is_ok() {
            let identity = auth_rx.borrow_and_update().clone();
            match identity {
                Some(identity) => tracing::info!(email = %identity.email, "Admin session opened"),
                None => tracing::info!("Admin session closed"),
            }
        }
    });

    let state = AppState {
        store,
        sessions: sessions.clone(),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let openapi = ApiDoc::openapi();

    let app = Router::new()
        .nest("/api/results", features::results::routes::routes(sessions))
        .nest("/api/leaderboard", features::leaderboard::routes::routes())
        .nest("/api/auth", features::auth::routes::routes())
        .nest("/api/health", features::health::routes::routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .layer(cors)
        .with_state(state);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;
    axum::serve(listener, app).await?;

    Ok(())
}
