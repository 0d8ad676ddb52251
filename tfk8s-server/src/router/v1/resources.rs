use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    routing::post,
    Json,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use tfk8s_provider::provider::K8sProvider;
use tfk8s_provider::resource::Resource;
use tfk8s_provider::response::{DiagnosticsResponse, StateResponse};

use crate::error::{APIError, APIResult};
use crate::router::v1::ConfigRequest;

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct PlanRequest {
    #[serde(default)]
    pub plan: Value,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct StateRequest {
    #[serde(default)]
    pub state: Value,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct UpdateRequest {
    #[serde(default)]
    pub prior: Value,
    #[serde(default)]
    pub plan: Value,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ImportRequest {
    pub id: String,
}

pub fn router() -> Router {
    Router::new()
        .route("/:type_name/validate", post(validate))
        .route("/:type_name/create", post(create))
        .route("/:type_name/read", post(read))
        .route("/:type_name/update", post(update))
        .route("/:type_name/delete", post(delete))
        .route("/:type_name/import", post(import))
}

fn lookup(provider: &K8sProvider, type_name: &str) -> APIResult<Arc<dyn Resource>> {
    provider
        .resource(type_name)
        .ok_or_else(|| APIError::unknown_resource(type_name))
}

fn payload<T>(payload: Result<Json<T>, JsonRejection>) -> APIResult<T> {
    payload
        .map(|Json(request)| request)
        .map_err(|e| APIError::invalid_data_format(&e.body_text()))
}

pub async fn validate(
    Extension(provider): Extension<Arc<K8sProvider>>,
    Path(type_name): Path<String>,
    request: Result<Json<ConfigRequest>, JsonRejection>,
) -> APIResult<Json<DiagnosticsResponse>> {
    let request = payload(request)?;
    let resource = lookup(&provider, &type_name)?;

    Ok(Json(resource.validate(&request.config).into()))
}

pub async fn create(
    Extension(provider): Extension<Arc<K8sProvider>>,
    Path(type_name): Path<String>,
    request: Result<Json<PlanRequest>, JsonRejection>,
) -> APIResult<Json<StateResponse>> {
    let request = payload(request)?;
    let resource = lookup(&provider, &type_name)?;

    debug!(event = "CreateResource", type_name = %type_name);
    Ok(Json(resource.create(provider.context().await, &request.plan).await))
}

pub async fn read(
    Extension(provider): Extension<Arc<K8sProvider>>,
    Path(type_name): Path<String>,
    request: Result<Json<StateRequest>, JsonRejection>,
) -> APIResult<Json<StateResponse>> {
    let request = payload(request)?;
    let resource = lookup(&provider, &type_name)?;

    debug!(event = "ReadResource", type_name = %type_name);
    Ok(Json(resource.read(provider.context().await, &request.state).await))
}

pub async fn update(
    Extension(provider): Extension<Arc<K8sProvider>>,
    Path(type_name): Path<String>,
    request: Result<Json<UpdateRequest>, JsonRejection>,
) -> APIResult<Json<StateResponse>> {
    let request = payload(request)?;
    let resource = lookup(&provider, &type_name)?;

    debug!(event = "UpdateResource", type_name = %type_name);
    Ok(Json(resource.update(provider.context().await, &request.prior, &request.plan).await))
}

pub async fn delete(
    Extension(provider): Extension<Arc<K8sProvider>>,
    Path(type_name): Path<String>,
    request: Result<Json<StateRequest>, JsonRejection>,
) -> APIResult<Json<DiagnosticsResponse>> {
    let request = payload(request)?;
    let resource = lookup(&provider, &type_name)?;

    debug!(event = "DeleteResource", type_name = %type_name);
    Ok(Json(resource.delete(provider.context().await, &request.state).await))
}

pub async fn import(
    Extension(provider): Extension<Arc<K8sProvider>>,
    Path(type_name): Path<String>,
    request: Result<Json<ImportRequest>, JsonRejection>,
) -> APIResult<Json<StateResponse>> {
    let request = payload(request)?;
    let resource = lookup(&provider, &type_name)?;

    debug!(event = "ImportResource", type_name = %type_name, id = %request.id);
    Ok(Json(resource.import(provider.context().await, &request.id).await))
}
