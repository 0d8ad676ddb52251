use async_trait::async_trait;
use serde_json::{json, Value};
use std::marker::PhantomData;
use std::sync::Arc;

use tfk8s_common::telemetry::{info, warn};

use crate::client;
use crate::context::Context;
use crate::crd::{ProviderKind, object_attributes};
use crate::crd::model::{ObjectModel, object_from_state, object_key, parse_object_id};
use crate::datasource::not_configured;
use crate::diag::{AttributePath, Diagnostic, Diagnostics};
use crate::error::{ProviderError, Result, is_not_found};
use crate::response::{DiagnosticsResponse, StateResponse};
use crate::schema::{Attribute, Schema, SchemaMode, value::validate};

/// A managed object with a full create/read/update/delete lifecycle
#[async_trait]
pub trait Resource: Send + Sync {
    fn type_name(&self, provider_type: &str) -> String;

    fn schema(&self) -> Schema;

    fn validate(&self, config: &Value) -> Diagnostics {
        let mut diags = Diagnostics::new();
        validate(&self.schema().attributes, config, &AttributePath::default(), &mut diags);
        diags
    }

    async fn create(&self, ctx: Option<Arc<Context>>, plan: &Value) -> StateResponse;

    /// Refresh state, `state` in the response is `None` when the object is gone
    async fn read(&self, ctx: Option<Arc<Context>>, state: &Value) -> StateResponse;

    async fn update(&self, ctx: Option<Arc<Context>>, prior: &Value, plan: &Value) -> StateResponse;

    async fn delete(&self, ctx: Option<Arc<Context>>, state: &Value) -> DiagnosticsResponse;

    /// Adopt an existing object by id
    async fn import(&self, ctx: Option<Arc<Context>>, id: &str) -> StateResponse;
}

/// Apply options carried in the state of every resource next to the object itself
#[derive(Debug, Clone, PartialEq)]
struct ApplyOptions {
    field_manager: String,
    force_conflicts: bool,
}

impl ApplyOptions {
    fn from_state(ctx: &Context, state: &Value) -> Self {
        ApplyOptions {
            field_manager: state
                .get("field_manager")
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .unwrap_or(ctx.field_manager())
                .to_string(),
            force_conflicts: state
                .get("force_conflicts")
                .and_then(Value::as_bool)
                .unwrap_or(false),
        }
    }

    fn write(&self, state: &mut Value) {
        if let Value::Object(fields) = state {
            fields.insert("field_manager".to_string(), json!(self.field_manager));
            fields.insert("force_conflicts".to_string(), json!(self.force_conflicts));
        }
    }
}

/// Resource managing a namespaced custom resource through server-side apply
pub struct CrdResource<K> {
    _kind: PhantomData<fn() -> K>,
}

impl<K> CrdResource<K> {
    pub fn new() -> Self {
        CrdResource { _kind: PhantomData }
    }
}

impl<K> Default for CrdResource<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ProviderKind> CrdResource<K> {
    fn state_from(&self, object: &kube::api::DynamicObject, options: &ApplyOptions) -> Result<Value> {
        let mut state = ObjectModel::<K::SpecModel>::from_dynamic(object)?
            .to_state::<K>(&self.schema().attributes)?;
        options.write(&mut state);
        Ok(state)
    }

    async fn apply(&self, ctx: &Context, plan: &Value) -> StateResponse {
        // a plan may carry computed values from prior state
        let mut config = plan.clone();
        if let Value::Object(fields) = &mut config {
            for key in ["id", "api_version", "kind"] {
                fields.remove(key);
            }
        }
        let diags = self.validate(&config);
        if diags.has_error() {
            return StateResponse::with_diagnostics(diags);
        }
        let Some((namespace, name)) = object_key(plan) else {
            return Diagnostic::error("Missing Attribute", "metadata.name and metadata.namespace must be set").into();
        };

        let object = object_from_state::<K>(&self.schema().attributes, plan);
        if let Err(e) = serde_json::from_value::<K>(object.clone()) {
            return ProviderError::InvalidConfiguration("planned object", e).into();
        }

        let options = ApplyOptions::from_state(ctx, plan);
        let kind = K::kind(&());
        info!(
            event = "ApplyObject",
            kind = %kind,
            namespace = %namespace,
            name = %name,
            field_manager = %options.field_manager,
            force = options.force_conflicts
        );

        let applied = client::apply(
            &ctx.client,
            &client::api_resource::<K>(),
            &namespace,
            &name,
            &object,
            &options.field_manager,
            options.force_conflicts,
        ).await;

        match applied {
            Ok(object) => self.state_from(&object, &options).into(),
            Err(e) => {
                warn!(event = "ApplyObjectFailed", kind = %kind, namespace = %namespace, name = %name, error = %e);
                Diagnostic::error(
                    "Kubernetes API Error",
                    format!("Unable to apply {} `{}` in namespace `{}`, got error: {}", kind, name, namespace, e),
                ).into()
            }
        }
    }

    async fn fetch(&self, ctx: &Context, namespace: &str, name: &str) -> Result<Option<kube::api::DynamicObject>> {
        match client::get(&ctx.client, &client::api_resource::<K>(), namespace, name).await {
            Ok(object) => Ok(Some(object)),
            Err(ProviderError::KubeError(e)) if is_not_found(&e) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl<K: ProviderKind> Resource for CrdResource<K> {
    fn type_name(&self, provider_type: &str) -> String {
        format!("{}_{}", provider_type, K::type_suffix())
    }

    fn schema(&self) -> Schema {
        let mut schema = Schema::new(K::description());
        schema.attributes = object_attributes::<K>(SchemaMode::Configurable);
        schema
            .with_attribute(
                Attribute::string("field_manager")
                    .description("The name of the manager used to track field ownership. Defaults to the provider field manager.")
                    .optional()
                    .computed(),
            )
            .with_attribute(
                Attribute::bool("force_conflicts")
                    .description("Force changes against conflicts with other field managers.")
                    .optional(),
            )
    }

    async fn create(&self, ctx: Option<Arc<Context>>, plan: &Value) -> StateResponse {
        let Some(ctx) = ctx else {
            return not_configured().into();
        };
        self.apply(&ctx, plan).await
    }

    async fn read(&self, ctx: Option<Arc<Context>>, state: &Value) -> StateResponse {
        let Some(ctx) = ctx else {
            return not_configured().into();
        };
        let Some((namespace, name)) = object_key(state) else {
            return Diagnostic::error("Missing Attribute", "metadata.name and metadata.namespace must be set").into();
        };

        match self.fetch(&ctx, &namespace, &name).await {
            Ok(Some(object)) => self.state_from(&object, &ApplyOptions::from_state(&ctx, state)).into(),
            Ok(None) => {
                warn!(event = "ObjectGone", kind = %K::kind(&()), namespace = %namespace, name = %name);
                StateResponse::gone()
            }
            Err(e) => e.into(),
        }
    }

    async fn update(&self, ctx: Option<Arc<Context>>, _prior: &Value, plan: &Value) -> StateResponse {
        let Some(ctx) = ctx else {
            return not_configured().into();
        };
        self.apply(&ctx, plan).await
    }

    async fn delete(&self, ctx: Option<Arc<Context>>, state: &Value) -> DiagnosticsResponse {
        let Some(ctx) = ctx else {
            return not_configured().into();
        };
        let Some((namespace, name)) = object_key(state) else {
            return Diagnostic::error("Missing Attribute", "metadata.name and metadata.namespace must be set").into();
        };

        let kind = K::kind(&());
        info!(event = "DeleteObject", kind = %kind, namespace = %namespace, name = %name);

        match client::delete(&ctx.client, &client::api_resource::<K>(), &namespace, &name).await {
            Ok(()) => DiagnosticsResponse::default(),
            Err(ProviderError::KubeError(e)) if is_not_found(&e) => DiagnosticsResponse::default(),
            Err(e) => Diagnostic::error(
                "Kubernetes API Error",
                format!("Unable to delete {} `{}` in namespace `{}`, got error: {}", kind, name, namespace, e),
            ).into(),
        }
    }

    async fn import(&self, ctx: Option<Arc<Context>>, id: &str) -> StateResponse {
        let Some(ctx) = ctx else {
            return not_configured().into();
        };
        let (namespace, name) = match parse_object_id(id) {
            Ok(key) => key,
            Err(e) => return e.into(),
        };

        match self.fetch(&ctx, &namespace, &name).await {
            Ok(Some(object)) => self.state_from(&object, &ApplyOptions::from_state(&ctx, &Value::Null)).into(),
            Ok(None) => Diagnostic::error(
                "Cannot import non-existent remote object",
                format!("{} `{}` does not exist in namespace `{}`", K::kind(&()), name, namespace),
            ).into(),
            Err(e) => e.into(),
        }
    }
}
