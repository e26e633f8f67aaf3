//! Code Vimarsh Site Backend
//!
//! Serves the community site's pages as JSON, reading content through a typed
//! CRUD layer over either a hosted content store or a local SQLite store.

mod api;
mod applications;
mod auth;
mod config;
mod db;
mod errors;
mod models;
mod store;
mod terminal;
mod views;

use std::sync::Arc;

use axum::{middleware, routing::get, routing::post, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use applications::ApplicationsClient;
use config::{Config, ContentSource};
use db::ContentRepository;
use errors::AppError;
use store::{ContentStore, CrudService, HttpContentStore};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub crud: CrudService,
    pub applications: Option<Arc<ApplicationsClient>>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Code Vimarsh site backend");
    tracing::info!("Bind address: {}", config.bind_addr);

    let crud = connect_content_store(&config).await?;
    tracing::info!("Content store backend: {}", crud.backend_tag());

    let applications = match &config.applications {
        Some(settings) => Some(Arc::new(ApplicationsClient::new(
            settings,
            config.store_timeout,
        )?)),
        None => {
            tracing::warn!(
                "Application table not configured (VIMARSH_SUPABASE_URL / VIMARSH_SUPABASE_ANON_KEY). The join form is disabled."
            );
            None
        }
    };

    if config.member_session_secret.is_none() {
        tracing::warn!(
            "No member session secret configured (VIMARSH_MEMBER_SESSION_SECRET). Members pages are closed."
        );
    }

    let state = AppState {
        crud,
        applications,
        config: Arc::new(config.clone()),
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the CRUD layer over whichever content store is configured.
async fn connect_content_store(config: &Config) -> Result<CrudService, AppError> {
    let store: Arc<dyn ContentStore> = match &config.content {
        ContentSource::Remote { base_url, api_key } => {
            tracing::info!("Content store URL: {}", base_url);
            Arc::new(HttpContentStore::new(
                base_url,
                api_key.clone(),
                config.store_timeout,
            )?)
        }
        ContentSource::Sqlite { db_path, seed_path } => {
            tracing::info!("Database path: {:?}", db_path);
            let pool = db::init_database(db_path).await?;
            let repo = ContentRepository::new(pool);
            if let Some(seed_path) = seed_path {
                repo.import_seed(seed_path).await?;
            }
            Arc::new(repo)
        }
    };

    Ok(CrudService::new(store))
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let directory_secret = state.config.member_session_secret.clone();
    let member_secret = state.config.member_session_secret.clone();

    // Gated pages, each with its own sign-in message
    let directory_routes = Router::new()
        .route("/members", get(api::list_members))
        .route("/collections/teammembers", get(api::list_team_member_records))
        .route_layer(middleware::from_fn(move |req, next| {
            auth::member_gate(directory_secret.clone(), auth::DIRECTORY_SIGN_IN, req, next)
        }));

    let member_routes = Router::new()
        .route("/members/{id}", get(api::get_member))
        .route(
            "/collections/teammembers/{id}",
            get(api::get_team_member_record),
        )
        .route_layer(middleware::from_fn(move |req, next| {
            auth::member_gate(member_secret.clone(), auth::MEMBER_SIGN_IN, req, next)
        }));

    // API routes
    let api_routes = Router::new()
        .route("/home", get(api::get_home))
        // Events
        .route("/events", get(api::list_events))
        .route("/events/{id}", get(api::get_event))
        // Projects
        .route("/projects", get(api::list_projects))
        .route("/projects/{id}", get(api::get_project))
        // Roadmap
        .route("/roadmap", get(api::get_roadmap))
        // Join form
        .route("/join", post(api::submit_application))
        // Generic collection access
        .route("/collections/{collection}", get(api::list_collection))
        .route(
            "/collections/{collection}/{id}",
            get(api::get_collection_item),
        )
        // Terminal
        .route(
            "/terminal",
            get(api::terminal_banner).post(api::run_terminal_command),
        )
        .merge(directory_routes)
        .merge(member_routes);

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .fallback(api::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
