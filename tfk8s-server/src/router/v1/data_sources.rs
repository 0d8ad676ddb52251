use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    routing::post,
    Json,
    Router,
};
use std::sync::Arc;
use tracing::debug;

use tfk8s_provider::provider::K8sProvider;
use tfk8s_provider::response::{DiagnosticsResponse, StateResponse};

use crate::error::{APIError, APIResult};
use crate::router::v1::ConfigRequest;

pub fn router() -> Router {
    Router::new()
        .route("/:type_name/validate", post(validate))
        .route("/:type_name/read", post(read))
}

pub async fn validate(
    Extension(provider): Extension<Arc<K8sProvider>>,
    Path(type_name): Path<String>,
    payload: Result<Json<ConfigRequest>, JsonRejection>,
) -> APIResult<Json<DiagnosticsResponse>> {
    let Json(request) = payload.map_err(|e| APIError::invalid_data_format(&e.body_text()))?;
    let data_source = provider
        .data_source(&type_name)
        .ok_or_else(|| APIError::unknown_data_source(&type_name))?;

    Ok(Json(data_source.validate(&request.config).into()))
}

pub async fn read(
    Extension(provider): Extension<Arc<K8sProvider>>,
    Path(type_name): Path<String>,
    payload: Result<Json<ConfigRequest>, JsonRejection>,
) -> APIResult<Json<StateResponse>> {
    let Json(request) = payload.map_err(|e| APIError::invalid_data_format(&e.body_text()))?;
    let data_source = provider
        .data_source(&type_name)
        .ok_or_else(|| APIError::unknown_data_source(&type_name))?;

    debug!(event = "ReadDataSource", type_name = %type_name);
    Ok(Json(data_source.read(provider.context().await, &request.config).await))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tfk8s_common::state::State;

    fn provider() -> Extension<Arc<K8sProvider>> {
        Extension(Arc::new(K8sProvider::new(Arc::new(State::default()))))
    }

    fn request() -> ConfigRequest {
        ConfigRequest { config: json!({"metadata": {"name": "hello", "namespace": "camel"}}) }
    }

    #[tokio::test]
    async fn unknown_type_is_not_found() {
        let error = read(provider(), Path("k8s_apps_deployment_v1".to_string()), Ok(Json(request())))
            .await
            .unwrap_err();

        assert_eq!(error, APIError::unknown_data_source("k8s_apps_deployment_v1"));
        assert_eq!(error.status(), axum::http::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn read_before_configure() {
        let Json(response) = read(provider(), Path("k8s_camel_apache_org_integration_v1".to_string()), Ok(Json(request())))
            .await
            .unwrap();

        assert_eq!(response.state, None);
        assert_eq!(response.diagnostics.iter().next().unwrap().summary, "Provider not configured");
    }

    #[tokio::test]
    async fn manifest_reads_without_configure() {
        let config = json!({
            "metadata": {"name": "hello", "namespace": "camel"},
            "spec": {"replicas": 1},
        });
        let Json(response) = read(
            provider(),
            Path("k8s_camel_apache_org_integration_v1_manifest".to_string()),
            Ok(Json(ConfigRequest { config })),
        )
        .await
        .unwrap();

        let state = response.state.unwrap();
        assert_eq!(state["id"], "camel/hello");
        assert!(state["yaml"].as_str().unwrap().contains("replicas: 1"));
    }

    #[tokio::test]
    async fn validate_known_type() {
        let Json(response) = validate(
            provider(),
            Path("k8s_camel_apache_org_integration_v1".to_string()),
            Ok(Json(ConfigRequest { config: json!({"metadata": {"name": "hello"}}) })),
        )
        .await
        .unwrap();

        let diag = response.diagnostics.iter().next().unwrap();
        assert_eq!(diag.summary, "Missing Configuration for Required Attribute");
        assert_eq!(diag.attribute.as_ref().unwrap().to_string(), "metadata.namespace");
    }
}
