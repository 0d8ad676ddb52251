use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::api::DynamicObject;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{json, Value};

use crate::crd::ProviderKind;
use crate::error::{ProviderError, Result};
use crate::schema::{Attribute, value::{from_state, to_state}};

/// Typed mirror of a custom resource as returned by the API server.
///
/// Only the fields declared in the schema survive the round trip through this model,
/// `status` and any fields unknown to the spec type are dropped.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ObjectModel<S> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<S>,
}

impl<S> ObjectModel<S>
where
    S: Serialize + DeserializeOwned,
{
    /// Marshal a dynamic object to JSON and unmarshal it into the typed model
    pub fn from_dynamic(object: &DynamicObject) -> Result<Self> {
        let raw = serde_json::to_vec(object)
            .map_err(|e| ProviderError::MarshalError("kubernetes response", e))?;
        serde_json::from_slice(&raw)
            .map_err(|e| ProviderError::UnmarshalError("kubernetes response", e))
    }

    pub fn id(&self) -> Result<String> {
        let namespace = self.metadata.namespace.as_deref()
            .ok_or(ProviderError::MissingObjectKeyError("metadata.namespace"))?;
        let name = self.metadata.name.as_deref()
            .ok_or(ProviderError::MissingObjectKeyError("metadata.name"))?;
        Ok(object_id(namespace, name))
    }

    /// Build the state of a data source or resource from this model.
    ///
    /// `id` is always `namespace/name`, `api_version` and `kind` are the constants of `K`
    /// regardless of what the server sent.
    pub fn to_state<K>(&self, attributes: &[Attribute]) -> Result<Value>
    where
        K: ProviderKind<SpecModel = S>,
    {
        let metadata = serde_json::to_value(&self.metadata)
            .map_err(|e| ProviderError::MarshalError("metadata", e))?;
        let spec = serde_json::to_value(&self.spec)
            .map_err(|e| ProviderError::MarshalError("spec", e))?;

        let object = json!({
            "id": self.id()?,
            "apiVersion": K::api_version(&()),
            "kind": K::kind(&()),
            "metadata": metadata,
            "spec": spec,
        });

        Ok(to_state(attributes, &object))
    }
}

/// Build the Kubernetes object described by configuration or state.
///
/// Only `metadata` and `spec` are taken from `state`, `apiVersion` and `kind` are the
/// constants of `K`.
pub fn object_from_state<K: ProviderKind>(attributes: &[Attribute], state: &Value) -> Value {
    let body: Vec<Attribute> = attributes
        .iter()
        .filter(|a| a.json_name == "metadata" || a.json_name == "spec")
        .cloned()
        .collect();

    let mut object = from_state(&body, state);
    if let Value::Object(fields) = &mut object {
        fields.insert("apiVersion".to_string(), json!(K::api_version(&())));
        fields.insert("kind".to_string(), json!(K::kind(&())));
    }
    object
}

/// The `(namespace, name)` of the object in configuration or state
pub fn object_key(state: &Value) -> Option<(String, String)> {
    let metadata = state.get("metadata")?;
    let namespace = metadata.get("namespace")?.as_str().filter(|s| !s.is_empty())?;
    let name = metadata.get("name")?.as_str().filter(|s| !s.is_empty())?;
    Some((namespace.to_string(), name.to_string()))
}

pub fn object_id(namespace: &str, name: &str) -> String {
    format!("{}/{}", namespace, name)
}

/// Split an id of the form `namespace/name`
pub fn parse_object_id(id: &str) -> Result<(String, String)> {
    match id.split_once('/') {
        Some((namespace, name)) if !namespace.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok((namespace.to_string(), name.to_string()))
        }
        _ => Err(ProviderError::InvalidImportId(id.to_string())),
    }
}
