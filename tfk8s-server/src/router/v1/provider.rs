use axum::{
    extract::{rejection::JsonRejection, Extension},
    routing::{get, post},
    Json,
    Router,
};
use std::sync::Arc;

use tfk8s_provider::provider::{K8sProvider, ProviderMetadata};
use tfk8s_provider::response::DiagnosticsResponse;
use tfk8s_provider::schema::ProviderSchema;

use crate::error::{APIError, APIResult};
use crate::router::v1::ConfigRequest;

pub fn router() -> Router {
    Router::new()
        .route("/metadata", get(metadata))
        .route("/schema", get(schema))
        .route("/provider/validate", post(validate))
        .route("/provider/configure", post(configure))
}

pub async fn metadata(Extension(provider): Extension<Arc<K8sProvider>>) -> Json<ProviderMetadata> {
    Json(provider.metadata())
}

pub async fn schema(Extension(provider): Extension<Arc<K8sProvider>>) -> Json<ProviderSchema> {
    Json(provider.schema())
}

pub async fn validate(
    Extension(provider): Extension<Arc<K8sProvider>>,
    payload: Result<Json<ConfigRequest>, JsonRejection>,
) -> APIResult<Json<DiagnosticsResponse>> {
    let Json(request) = payload.map_err(|e| APIError::invalid_data_format(&e.body_text()))?;
    Ok(Json(provider.validate_provider_config(&request.config).into()))
}

pub async fn configure(
    Extension(provider): Extension<Arc<K8sProvider>>,
    payload: Result<Json<ConfigRequest>, JsonRejection>,
) -> APIResult<Json<DiagnosticsResponse>> {
    let Json(request) = payload.map_err(|e| APIError::invalid_data_format(&e.body_text()))?;
    Ok(Json(provider.configure(&request.config).await))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tfk8s_common::state::State;

    fn provider() -> Extension<Arc<K8sProvider>> {
        Extension(Arc::new(K8sProvider::new(Arc::new(State::default()))))
    }

    #[tokio::test]
    async fn schema_lists_every_type() {
        let Json(schema) = schema(provider()).await;

        assert!(schema.provider.attribute("kubeconfig").is_some());
        assert!(schema.data_sources.contains_key("k8s_camel_apache_org_integration_v1"));
        assert!(schema.data_sources.contains_key("k8s_camel_apache_org_kamelet_v1_manifest"));
        assert!(schema.resources.contains_key("k8s_camel_apache_org_integration_v1"));
    }

    #[tokio::test]
    async fn metadata_reports_version() {
        let Json(metadata) = metadata(provider()).await;

        assert_eq!(metadata.type_name, "k8s");
        assert_eq!(metadata.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn validate_reports_diagnostics() {
        let request = ConfigRequest { config: json!({"context": true}) };
        let Json(response) = validate(provider(), Ok(Json(request))).await.unwrap();

        assert_eq!(response.diagnostics.len(), 1);
        assert_eq!(response.diagnostics.iter().next().unwrap().summary, "Incorrect attribute value type");
    }

    #[tokio::test]
    async fn configure_rejects_missing_kubeconfig() {
        let request = ConfigRequest { config: json!({"kubeconfig": "/nonexistent/kubeconfig"}) };
        let Json(response) = configure(provider(), Ok(Json(request))).await.unwrap();

        assert!(response.diagnostics.has_error());
        assert_eq!(response.diagnostics.iter().next().unwrap().summary, "Unable to Create Kubernetes Client");
    }
}
