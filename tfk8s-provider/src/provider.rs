use figment::{Figment, providers::Serialized};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use tfk8s_common::config::ProviderConfig;
use tfk8s_common::constant::PROVIDER_TYPE_NAME;
use tfk8s_common::state::State;
use tfk8s_common::telemetry::{error, info};

use crate::client::create_k8s_client;
use crate::context::Context;
use crate::crd::ProviderKind;
use crate::crd::camel::v1::integration::Integration;
use crate::crd::camel::v1::kamelet::Kamelet;
use crate::datasource::{CrdDataSource, DataSource};
use crate::diag::{AttributePath, Diagnostic, Diagnostics};
use crate::error::Result;
use crate::manifest::CrdManifestDataSource;
use crate::resource::{CrdResource, Resource};
use crate::response::{DiagnosticsResponse, StateResponse};
use crate::schema::{Attribute, ProviderSchema, Schema, value::{from_state, validate}};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ProviderMetadata {
    pub type_name: String,
    pub version: String,
    pub data_sources: Vec<String>,
    pub resources: Vec<String>,
}

/// Registry of every data source and resource, holding the kube client once configured
pub struct K8sProvider {
    state: Arc<State>,
    context: RwLock<Option<Arc<Context>>>,
    data_sources: BTreeMap<String, Arc<dyn DataSource>>,
    resources: BTreeMap<String, Arc<dyn Resource>>,
}

impl K8sProvider {
    /// Create a provider with every supported kind registered
    pub fn new(state: Arc<State>) -> Self {
        Self::empty(state)
            .with_kind::<Integration>()
            .with_kind::<Kamelet>()
    }

    pub fn empty(state: Arc<State>) -> Self {
        K8sProvider {
            state,
            context: RwLock::new(None),
            data_sources: BTreeMap::new(),
            resources: BTreeMap::new(),
        }
    }

    /// Register the data source, manifest data source and resource of a kind
    pub fn with_kind<K: ProviderKind>(self) -> Self {
        self.with_data_source(Arc::new(CrdDataSource::<K>::new()))
            .with_data_source(Arc::new(CrdManifestDataSource::<K>::new()))
            .with_resource(Arc::new(CrdResource::<K>::new()))
    }

    pub fn with_data_source(mut self, data_source: Arc<dyn DataSource>) -> Self {
        self.data_sources.insert(data_source.type_name(PROVIDER_TYPE_NAME), data_source);
        self
    }

    pub fn with_resource(mut self, resource: Arc<dyn Resource>) -> Self {
        self.resources.insert(resource.type_name(PROVIDER_TYPE_NAME), resource);
        self
    }

    pub fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            type_name: PROVIDER_TYPE_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_sources: self.data_sources.keys().cloned().collect(),
            resources: self.resources.keys().cloned().collect(),
        }
    }

    pub fn provider_schema() -> Schema {
        Schema::new("Manage Kubernetes custom resources.")
            .with_attribute(
                Attribute::string("kubeconfig")
                    .description("Path to the kubeconfig file. Inferred from the environment when unset.")
                    .optional(),
            )
            .with_attribute(
                Attribute::string("context")
                    .description("Context of the kubeconfig to use instead of the current context.")
                    .optional(),
            )
            .with_attribute(
                Attribute::string("field_manager")
                    .description("Field manager used for server-side apply.")
                    .optional(),
            )
    }

    pub fn schema(&self) -> ProviderSchema {
        ProviderSchema {
            provider: Self::provider_schema(),
            data_sources: self.data_sources.iter().map(|(name, ds)| (name.clone(), ds.schema())).collect(),
            resources: self.resources.iter().map(|(name, r)| (name.clone(), r.schema())).collect(),
        }
    }

    pub fn data_source(&self, type_name: &str) -> Option<Arc<dyn DataSource>> {
        self.data_sources.get(type_name).cloned()
    }

    pub fn resource(&self, type_name: &str) -> Option<Arc<dyn Resource>> {
        self.resources.get(type_name).cloned()
    }

    pub async fn context(&self) -> Option<Arc<Context>> {
        self.context.read().await.clone()
    }

    pub fn validate_provider_config(&self, config: &Value) -> Diagnostics {
        let mut diags = Diagnostics::new();
        validate(&Self::provider_schema().attributes, config, &AttributePath::default(), &mut diags);
        diags
    }

    pub fn validate_data_source_config(&self, type_name: &str, config: &Value) -> Diagnostics {
        match self.data_source(type_name) {
            Some(data_source) => data_source.validate(config),
            None => unknown_data_source(type_name).into(),
        }
    }

    pub fn validate_resource_config(&self, type_name: &str, config: &Value) -> Diagnostics {
        match self.resource(type_name) {
            Some(resource) => resource.validate(config),
            None => unknown_resource(type_name).into(),
        }
    }

    /// Merge the provider block over the loaded configuration
    fn settings(&self, config: &Value) -> Result<ProviderConfig> {
        let overrides = from_state(&Self::provider_schema().attributes, config);
        let settings = Figment::from(Serialized::defaults(&self.state.config.provider))
            .merge(Serialized::defaults(overrides))
            .extract()?;
        Ok(settings)
    }

    /// Build the kube client from the provider block
    pub async fn configure(&self, config: &Value) -> DiagnosticsResponse {
        let diags = self.validate_provider_config(config);
        if diags.has_error() {
            return diags.into();
        }

        let settings = match self.settings(config) {
            Ok(settings) => settings,
            Err(e) => return Diagnostic::from(&e).into(),
        };
        let client = match create_k8s_client(&settings).await {
            Ok(client) => client,
            Err(e) => {
                error!(event = "ConfigureProvider", error = %e);
                return Diagnostic::from(&e).into();
            }
        };

        info!(
            event = "ConfigureProvider",
            kubeconfig = ?settings.kubeconfig,
            context = ?settings.context,
            field_manager = %settings.field_manager
        );

        let mut app_config = self.state.config.clone();
        app_config.provider = settings;
        let context = Context::new(client).with_state(Arc::new(State { config: app_config }));
        *self.context.write().await = Some(Arc::new(context));

        DiagnosticsResponse::default()
    }

    pub async fn read_data_source(&self, type_name: &str, config: &Value) -> StateResponse {
        match self.data_source(type_name) {
            Some(data_source) => data_source.read(self.context().await, config).await,
            None => unknown_data_source(type_name).into(),
        }
    }
}

pub fn unknown_data_source(type_name: &str) -> Diagnostic {
    Diagnostic::error(
        "Unknown Data Source Type",
        format!("The provider does not support the data source type \"{}\".", type_name),
    )
}

pub fn unknown_resource(type_name: &str) -> Diagnostic {
    Diagnostic::error(
        "Unknown Resource Type",
        format!("The provider does not support the resource type \"{}\".", type_name),
    )
}
