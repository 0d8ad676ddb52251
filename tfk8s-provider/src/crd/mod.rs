pub mod camel;
pub mod metadata;
pub mod model;
pub mod utils;

use convert_case::{Case, Casing};
use kube::{Resource, CustomResourceExt, core::object::HasSpec};
use k8s_openapi::NamespaceResourceScope;
use schemars::JsonSchema;
use serde::{Serialize, de::DeserializeOwned};
use std::fmt::Debug;

use crate::crd::metadata::metadata_attribute;
use crate::schema::{Attribute, SchemaMode};

pub trait NamespacedCustomResource:
    Clone
        + Resource<Scope = NamespaceResourceScope, DynamicType = ()>
        + CustomResourceExt
        + HasSpec
        + JsonSchema
        + DeserializeOwned
        + Serialize
        + Debug
        + Send
        + Sync
        + 'static
{}

impl<T> NamespacedCustomResource for T
where
    T: Clone
        + Resource<Scope = NamespaceResourceScope, DynamicType = ()>
        + CustomResourceExt
        + HasSpec
        + JsonSchema
        + DeserializeOwned
        + Serialize
        + Debug
        + Send
        + Sync
        + 'static
{}

/// A custom resource kind exposed through the provider as a data source, a manifest
/// data source and a resource.
pub trait ProviderKind: NamespacedCustomResource {
    /// The typed spec the Kubernetes response is unmarshalled into
    type SpecModel: Serialize + DeserializeOwned + Clone + Debug + PartialEq + Send + Sync + 'static;

    fn description() -> &'static str;

    /// Attributes of the `spec` block, declared without a mode
    fn spec_attributes() -> Vec<Attribute>;

    /// Suffix of every type name for this kind, e.g. `camel_apache_org_integration_v1`
    fn type_suffix() -> String {
        format!(
            "{}_{}_{}",
            Self::group(&()).replace(|c| c == '.' || c == '-', "_"),
            Self::kind(&()).to_case(Case::Snake),
            Self::version(&()),
        )
    }
}

/// Top level attributes shared by every data source and resource of a kind
pub fn object_attributes<K: ProviderKind>(mode: SchemaMode) -> Vec<Attribute> {
    let mut spec = Attribute::single_nested("spec", K::spec_attributes())
        .description(&format!("Desired state of the {}.", K::kind(&())));
    if mode == SchemaMode::Configurable {
        spec = spec.required();
    }

    vec![
        Attribute::string("id")
            .description("Identifier of the object in the form `namespace/name`.")
            .computed(),
        Attribute::string("apiVersion")
            .description("APIVersion defines the versioned schema of this representation of an object.")
            .computed(),
        Attribute::string("kind")
            .description("Kind is a string value representing the REST resource this object represents.")
            .computed(),
        metadata_attribute(mode),
        spec.with_mode(mode),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crd::camel::v1::integration::Integration;
    use crate::crd::camel::v1::kamelet::Kamelet;

    #[test]
    fn type_suffix_from_group_kind_and_version() {
        assert_eq!(Integration::type_suffix(), "camel_apache_org_integration_v1");
        assert_eq!(Kamelet::type_suffix(), "camel_apache_org_kamelet_v1");
    }

    #[test]
    fn data_source_spec_is_computed() {
        let attributes = object_attributes::<Integration>(SchemaMode::Computed);
        let names: Vec<&str> = attributes.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["id", "api_version", "kind", "metadata", "spec"]);

        let spec = &attributes[4];
        assert!(spec.is_read_only());
        assert!(spec.kind.nested().unwrap().iter().all(|a| a.is_read_only()));
    }

    #[test]
    fn resource_spec_is_required_with_optional_fields() {
        let attributes = object_attributes::<Integration>(SchemaMode::Configurable);
        let spec = &attributes[4];

        assert!(spec.required);
        let replicas = spec.kind.nested().unwrap().iter().find(|a| a.name == "replicas").unwrap();
        assert!(replicas.optional && !replicas.computed);
    }
}
