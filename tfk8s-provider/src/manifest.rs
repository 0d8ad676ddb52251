use async_trait::async_trait;
use serde_json::Value;
use std::marker::PhantomData;
use std::sync::Arc;

use tfk8s_common::telemetry::debug;

use crate::context::Context;
use crate::crd::{ProviderKind, object_attributes};
use crate::crd::model::{ObjectModel, object_from_state};
use crate::datasource::DataSource;
use crate::error::{ProviderError, Result};
use crate::response::StateResponse;
use crate::schema::{Attribute, Schema, SchemaMode};

/// Data source rendering a custom resource as a YAML manifest without touching the cluster
pub struct CrdManifestDataSource<K> {
    _kind: PhantomData<fn() -> K>,
}

impl<K> CrdManifestDataSource<K> {
    pub fn new() -> Self {
        CrdManifestDataSource { _kind: PhantomData }
    }
}

impl<K> Default for CrdManifestDataSource<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ProviderKind> CrdManifestDataSource<K> {
    fn render(&self, attributes: &[Attribute], config: &Value) -> Result<Value> {
        let object: K = serde_json::from_value(object_from_state::<K>(attributes, config))
            .map_err(|e| ProviderError::InvalidConfiguration("manifest configuration", e))?;
        let yaml = serde_norway::to_string(&object)?;

        let normalized = serde_json::to_value(&object)
            .map_err(|e| ProviderError::MarshalError("manifest", e))?;
        let model: ObjectModel<K::SpecModel> = serde_json::from_value(normalized)
            .map_err(|e| ProviderError::UnmarshalError("manifest", e))?;

        let mut state = model.to_state::<K>(attributes)?;
        if let Value::Object(fields) = &mut state {
            fields.insert("yaml".to_string(), Value::String(yaml));
        }
        Ok(state)
    }
}

#[async_trait]
impl<K: ProviderKind> DataSource for CrdManifestDataSource<K> {
    fn type_name(&self, provider_type: &str) -> String {
        format!("{}_{}_manifest", provider_type, K::type_suffix())
    }

    fn schema(&self) -> Schema {
        let mut schema = Schema::new(&format!("Renders a {} as a YAML manifest.", K::kind(&())));
        schema.attributes = object_attributes::<K>(SchemaMode::Configurable);
        schema.with_attribute(
            Attribute::string("yaml")
                .description("The rendered manifest.")
                .computed(),
        )
    }

    async fn read(&self, _ctx: Option<Arc<Context>>, config: &Value) -> StateResponse {
        let diags = self.validate(config);
        if diags.has_error() {
            return StateResponse::with_diagnostics(diags);
        }

        debug!(event = "RenderManifest", kind = %K::kind(&()));
        self.render(&self.schema().attributes, config).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crd::camel::v1::integration::Integration;
    use serde_json::json;

    #[test]
    fn manifest_type_name() {
        let ds = CrdManifestDataSource::<Integration>::new();
        assert_eq!(ds.type_name("k8s"), "k8s_camel_apache_org_integration_v1_manifest");
    }

    #[tokio::test]
    async fn renders_without_a_cluster() {
        let ds = CrdManifestDataSource::<Integration>::new();
        let response = ds.read(None, &json!({
            "metadata": {"name": "hello", "namespace": "camel", "labels": {"app.kubernetes.io/name": "hello"}},
            "spec": {
                "replicas": 1,
                "traits": {"container": {"image_pull_policy": "Always"}},
            },
        })).await;

        assert!(!response.diagnostics.has_error(), "{:?}", response.diagnostics);
        let state = response.state.unwrap();
        assert_eq!(state["id"], "camel/hello");
        assert_eq!(state["api_version"], "camel.apache.org/v1");
        assert_eq!(state["metadata"]["labels"]["app.kubernetes.io/name"], "hello");
        assert_eq!(state["spec"]["traits"]["container"]["image_pull_policy"], "Always");

        let yaml = state["yaml"].as_str().unwrap();
        assert!(yaml.contains("kind: Integration"));
        assert!(yaml.contains("imagePullPolicy: Always"));
    }

    #[tokio::test]
    async fn invalid_configuration_is_not_rendered() {
        let ds = CrdManifestDataSource::<Integration>::new();
        let response = ds.read(None, &json!({
            "metadata": {"name": "Hello_World", "namespace": "camel"},
            "spec": {"traits": {"container": {"image_pull_policy": "Sometimes"}}},
        })).await;

        assert_eq!(response.state, None);
        let paths: Vec<String> = response
            .diagnostics
            .iter()
            .filter_map(|d| d.attribute.as_ref().map(|p| p.to_string()))
            .collect();
        assert_eq!(paths, vec!["metadata.name", "spec.traits.container.image_pull_policy"]);
    }

    #[tokio::test]
    async fn replicas_out_of_int32_range() {
        let ds = CrdManifestDataSource::<Integration>::new();
        let response = ds.read(None, &json!({
            "metadata": {"name": "hello", "namespace": "camel"},
            "spec": {"replicas": 3_000_000_000u64},
        })).await;

        assert_eq!(response.state, None);
        let diag = response.diagnostics.iter().next().unwrap();
        assert_eq!(diag.summary, "Invalid Attribute Value");
        assert_eq!(diag.attribute.as_ref().unwrap().to_string(), "spec.replicas");
    }
}
