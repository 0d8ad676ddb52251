use axum::Router;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod data_sources;
pub mod provider;
pub mod resources;

pub fn router() -> Router {
    Router::new()
        .merge(provider::router())
        .nest("/data-sources", data_sources::router())
        .nest("/resources", resources::router())
}

/// Configuration of the provider block or of a data source or resource
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct ConfigRequest {
    #[serde(default)]
    pub config: Value,
}
