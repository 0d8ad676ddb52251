use async_trait::async_trait;
use serde_json::Value;
use std::marker::PhantomData;
use std::sync::Arc;

use tfk8s_common::telemetry::{info, warn};

use crate::client;
use crate::context::Context;
use crate::crd::{ProviderKind, object_attributes};
use crate::crd::model::{ObjectModel, object_key};
use crate::diag::{AttributePath, Diagnostic, Diagnostics};
use crate::response::StateResponse;
use crate::schema::{Schema, SchemaMode, value::validate};

/// A read-only view of external state
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Full type name, e.g. `k8s_camel_apache_org_integration_v1` for provider type `k8s`
    fn type_name(&self, provider_type: &str) -> String;

    fn schema(&self) -> Schema;

    fn validate(&self, config: &Value) -> Diagnostics {
        let mut diags = Diagnostics::new();
        validate(&self.schema().attributes, config, &AttributePath::default(), &mut diags);
        diags
    }

    async fn read(&self, ctx: Option<Arc<Context>>, config: &Value) -> StateResponse;
}

pub fn not_configured() -> Diagnostic {
    Diagnostic::error(
        "Provider not configured",
        "The provider hasn't been configured before this operation. Configure the provider first.",
    )
}

/// Data source reading a single namespaced custom resource by name
pub struct CrdDataSource<K> {
    _kind: PhantomData<fn() -> K>,
}

impl<K> CrdDataSource<K> {
    pub fn new() -> Self {
        CrdDataSource { _kind: PhantomData }
    }
}

impl<K> Default for CrdDataSource<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<K: ProviderKind> DataSource for CrdDataSource<K> {
    fn type_name(&self, provider_type: &str) -> String {
        format!("{}_{}", provider_type, K::type_suffix())
    }

    fn schema(&self) -> Schema {
        let mut schema = Schema::new(K::description());
        schema.attributes = object_attributes::<K>(SchemaMode::Computed);
        schema
    }

    async fn read(&self, ctx: Option<Arc<Context>>, config: &Value) -> StateResponse {
        let Some(ctx) = ctx else {
            return not_configured().into();
        };

        let diags = self.validate(config);
        if diags.has_error() {
            return StateResponse::with_diagnostics(diags);
        }
        let Some((namespace, name)) = object_key(config) else {
            return Diagnostic::error("Missing Attribute", "metadata.name and metadata.namespace must be set").into();
        };

        let kind = K::kind(&());
        info!(event = "ReadObject", kind = %kind, namespace = %namespace, name = %name);

        let object = match client::get(&ctx.client, &client::api_resource::<K>(), &namespace, &name).await {
            Ok(object) => object,
            Err(e) => {
                warn!(event = "ReadObjectFailed", kind = %kind, namespace = %namespace, name = %name, error = %e);
                return Diagnostic::error(
                    "Unable to GET resource",
                    format!("Unable to GET {} `{}` in namespace `{}`, got error: {}", kind, name, namespace, e),
                ).into();
            }
        };

        let state = ObjectModel::<K::SpecModel>::from_dynamic(&object)
            .and_then(|model| model.to_state::<K>(&self.schema().attributes));
        state.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crd::camel::v1::integration::Integration;
    use serde_json::json;

    #[test]
    fn integration_type_name() {
        let ds = CrdDataSource::<Integration>::new();
        assert_eq!(ds.type_name("k8s"), "k8s_camel_apache_org_integration_v1");
    }

    #[test]
    fn validate_rejects_configured_spec() {
        let ds = CrdDataSource::<Integration>::new();
        let diags = ds.validate(&json!({
            "metadata": {"name": "hello", "namespace": "camel"},
            "spec": {"replicas": 3},
        }));

        assert_eq!(diags.len(), 1);
        let diag = diags.iter().next().unwrap();
        assert_eq!(diag.summary, "Invalid Configuration for Read-Only Attribute");
        assert_eq!(diag.attribute.as_ref().unwrap().to_string(), "spec");
    }

    #[tokio::test]
    async fn read_without_configuration() {
        let ds = CrdDataSource::<Integration>::new();
        let response = ds.read(None, &json!({"metadata": {"name": "hello", "namespace": "camel"}})).await;

        assert_eq!(response.state, None);
        assert_eq!(response.diagnostics.iter().next().unwrap().summary, "Provider not configured");
    }
}
