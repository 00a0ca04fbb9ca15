//! CMS Admin Backend
//!
//! Content editing backend for landing pages, campaigns, rich menus and site
//! settings, persisted as whole JSON collections in a key/value store.

mod api;
mod config;
mod editor;
mod errors;
mod listing;
mod media;
mod models;
mod seed;
mod settings;
mod store;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::{Config, StoreKind};
use editor::{campaign::CampaignAction, form::FormAction, page::PageAction};
use models::{
    Banner, Campaign, EmailTemplate, Faq, FormTemplate, LandingPage, LineAccount, Partner,
    RichMenu, SystemCategory,
};
use store::{KeyValueStore, MemoryStore, Repository, SqliteStore};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
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

    tracing::info!("Starting CMS Admin Backend");
    tracing::info!("Store: {:?}", config.store);
    tracing::info!("Bind address: {}", config.bind_addr);

    let store: Arc<dyn KeyValueStore> = match config.store {
        StoreKind::Sqlite => {
            tracing::info!("Database path: {:?}", config.db_path);
            let pool = store::init_database(&config.db_path).await?;
            Arc::new(SqliteStore::new(pool))
        }
        StoreKind::Memory => {
            tracing::warn!("Using the in-memory store; edits are lost on restart");
            Arc::new(MemoryStore::new())
        }
    };

    let state = AppState {
        repo: Arc::new(Repository::new(store)),
        config: Arc::new(config.clone()),
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut api_routes = Router::new()
        .route("/dashboard", get(api::get_dashboard))
        // Campaign table and rich menu wizard
        .route("/campaigns/list", get(api::list_campaign_rows))
        .route(
            "/campaigns/rich-menus/templates",
            get(api::list_rich_menu_templates),
        )
        .route(
            "/campaigns/rich-menus/wizard/template",
            post(api::select_rich_menu_template),
        )
        .route(
            "/campaigns/rich-menus/wizard/next",
            post(api::next_rich_menu_step),
        )
        .route(
            "/campaigns/rich-menus/wizard/back",
            post(api::previous_rich_menu_step),
        )
        .route(
            "/campaigns/rich-menus/wizard/action",
            post(api::set_rich_menu_action),
        )
        // Settings
        .route("/settings", get(api::get_settings))
        .route(
            "/settings/selected-account",
            get(api::get_selected_account).put(api::set_selected_account),
        )
        .route("/settings/accounts/verify", post(api::verify_line_account))
        .route("/settings/categories/actions", post(api::edit_categories))
        .route(
            "/settings/categories/{id}/options",
            post(api::add_category_option),
        )
        .route(
            "/settings/categories/{id}/options/{option_id}",
            delete(api::remove_category_option),
        )
        // Media
        .route("/media/data-url", post(api::create_data_url));

    api_routes = api::entity_routes::<LandingPage>(api_routes, "/pages");
    api_routes = api::entity_routes::<Campaign>(api_routes, "/campaigns");
    api_routes = api::entity_routes::<RichMenu>(api_routes, "/campaigns/rich-menus");
    api_routes = api::entity_routes::<Banner>(api_routes, "/campaigns/banners");
    api_routes = api::entity_routes::<FormTemplate>(api_routes, "/forms");
    api_routes = api::entity_routes::<Faq>(api_routes, "/faq");
    api_routes = api::entity_routes::<Partner>(api_routes, "/partners");
    api_routes = api::entity_routes::<EmailTemplate>(api_routes, "/email-templates");
    api_routes = api::entity_routes::<LineAccount>(api_routes, "/settings/accounts");
    api_routes = api::entity_routes::<SystemCategory>(api_routes, "/settings/categories");

    // Block, paragraph and field editors
    api_routes = api::edit_route::<LandingPage, PageAction>(api_routes, "/pages");
    api_routes = api::edit_route::<Campaign, CampaignAction>(api_routes, "/campaigns");
    api_routes = api::edit_route::<FormTemplate, FormAction>(api_routes, "/forms");

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
