use kube::{
    api::{Api, ApiResource, DeleteParams, DynamicObject, Patch, PatchParams},
    config::{KubeConfigOptions, Kubeconfig},
    Client, Config,
};
use serde_json::Value;

use tfk8s_common::config::ProviderConfig;
use tfk8s_common::telemetry::debug;

use crate::crd::ProviderKind;
use crate::error::{ProviderError, Result};


/// Create a new kube client from the provider settings
///
/// An explicit kubeconfig path wins, a context alone selects a context of the default
/// kubeconfig, otherwise the config is inferred from the environment or the service account.
///
/// # Arguments
/// * `settings`: The provider configuration
///
/// # Returns
/// A Result containing the kube Client or an error
pub async fn create_k8s_client(settings: &ProviderConfig) -> Result<Client> {
    let options = KubeConfigOptions {
        context: settings.context.clone(),
        ..Default::default()
    };

    let config = match (&settings.kubeconfig, &settings.context) {
        (Some(path), _) => {
            debug!(event = "LoadKubeconfig", path = %path, context = ?settings.context);
            let kubeconfig = Kubeconfig::read_from(path)?;
            Config::from_custom_kubeconfig(kubeconfig, &options).await?
        }
        (None, Some(context)) => {
            debug!(event = "LoadKubeconfig", context = %context);
            Config::from_kubeconfig(&options).await?
        }
        (None, None) => Config::infer().await?,
    };

    Client::try_from(config).map_err(ProviderError::from)
}

/// The group/version/resource of a typed custom resource
pub fn api_resource<K: ProviderKind>() -> ApiResource {
    ApiResource::erase::<K>(&())
}

fn namespaced_api(client: &Client, resource: &ApiResource, namespace: &str) -> Api<DynamicObject> {
    Api::namespaced_with(client.clone(), namespace, resource)
}

/// Get an object through the dynamic client
///
/// # Arguments
/// * `client`: The kube client
/// * `resource`: The group/version/resource of the object
/// * `namespace`: The namespace of the object
/// * `name`: The name of the object
///
/// # Returns
/// A Result containing the object or an error
pub async fn get(client: &Client, resource: &ApiResource, namespace: &str, name: &str) -> Result<DynamicObject> {
    namespaced_api(client, resource, namespace)
        .get(name)
        .await
        .map_err(ProviderError::from)
}

/// Server-side apply an object
///
/// # Arguments
/// * `client`: The kube client
/// * `resource`: The group/version/resource of the object
/// * `namespace`: The namespace of the object
/// * `name`: The name of the object
/// * `object`: The full object to apply, including `apiVersion` and `kind`
/// * `field_manager`: The field manager owning the applied fields
/// * `force`: Whether to take ownership of fields managed by someone else
///
/// # Returns
/// A Result containing the object as stored by the API server or an error
pub async fn apply(
    client: &Client,
    resource: &ApiResource,
    namespace: &str,
    name: &str,
    object: &Value,
    field_manager: &str,
    force: bool,
) -> Result<DynamicObject> {
    let mut params = PatchParams::apply(field_manager);
    if force {
        params = params.force();
    }

    namespaced_api(client, resource, namespace)
        .patch(name, &params, &Patch::Apply(object))
        .await
        .map_err(ProviderError::from)
}

/// Delete an object
///
/// # Arguments
/// * `client`: The kube client
/// * `resource`: The group/version/resource of the object
/// * `namespace`: The namespace of the object
/// * `name`: The name of the object to delete
///
/// # Returns
/// A Result indicating the delete request was accepted or an error
pub async fn delete(client: &Client, resource: &ApiResource, namespace: &str, name: &str) -> Result<()> {
    namespaced_api(client, resource, namespace)
        .delete(name, &DeleteParams::default())
        .await
        .map(|_| ())
        .map_err(ProviderError::from)
}
