pub mod config;
pub mod logging;
pub mod response;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;

use std::sync::Arc;

use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::state::AppState;
use crate::store::{ContentStore, ProfileStore};

pub async fn create_app() -> axum::Router {
    let config = Config::from_env();
    create_app_with_config(&config).await
}

/// Assemble the router for a concrete configuration. Unreadable store
/// documents degrade to empty stores rather than aborting startup; the
/// learner sees an empty list and the problem is in the logs.
pub async fn create_app_with_config(config: &Config) -> axum::Router {
    let profile = match ProfileStore::load(&config.profile_path).await {
        Ok(store) => store,
        Err(err) => {
            tracing::warn!(error = %err, "profile document unreadable, starting with an empty list");
            ProfileStore::empty(config.profile_path.clone())
        }
    };

    let content = match ContentStore::load(&config.content_path).await {
        Ok(store) => store,
        Err(err) => {
            tracing::warn!(error = %err, "content document unreadable, catalogue is empty");
            ContentStore::empty()
        }
    };

    let state = AppState::new(
        Arc::new(profile),
        Arc::new(content),
        config.scheduler_config(),
    );

    routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
