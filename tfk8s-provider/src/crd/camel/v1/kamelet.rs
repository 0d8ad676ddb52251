use kube::CustomResource;
use std::collections::BTreeMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::crd::ProviderKind;
use crate::crd::camel::v1::common::{
    SourceSpec, source_attributes, any_value, preserve_unknown_fields,
};
use crate::schema::{Attribute, ElementType};

#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[kube(
    kind = "Kamelet",
    group = "camel.apache.org",
    version = "v1",
    doc = "Kamelet is the Schema for the kamelets API.",
    shortname = "kl",
    derive = "PartialEq",
    derive = "Default",
    namespaced
)]
#[serde(rename_all = "camelCase")]
pub struct KameletSpec {
    /// defines the formal configuration of the Kamelet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<KameletDefinition>,
    /// Camel dependencies needed by the Kamelet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<String>>,
    /// sources in any Camel DSL supported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<SourceSpec>>,
    /// the main source in YAML DSL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(schema_with = "preserve_unknown_fields")]
    pub template: Option<Value>,
    /// data specification types for the events consumed/produced by the Kamelet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<BTreeMap<String, EventTypeSpec>>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, JsonSchema)]
pub struct KameletDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// the names of the properties that must be set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    /// the configuration properties of the Kamelet, keyed by property name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, KameletProperty>>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, JsonSchema)]
pub struct KameletProperty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(schema_with = "any_value")]
    pub default: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(schema_with = "any_value")]
    pub example: Option<Value>,
    #[serde(default, rename = "enum", skip_serializing_if = "Option::is_none")]
    #[schemars(schema_with = "any_value")]
    pub enum_: Option<Value>,
    /// UI hints for the property, e.g. `urn:camel:group:credentials`
    #[serde(default, rename = "x-descriptors", skip_serializing_if = "Option::is_none")]
    pub x_descriptors: Option<Vec<String>>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventTypeSpec {
    /// media type as expected for HTTP media types (ie, application/json)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    /// the expected schema for the event
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(schema_with = "preserve_unknown_fields")]
    pub schema: Option<Value>,
}

impl ProviderKind for Kamelet {
    type SpecModel = KameletSpec;

    fn description() -> &'static str {
        "Kamelet is the Schema for the kamelets API."
    }

    fn spec_attributes() -> Vec<Attribute> {
        vec![
            Attribute::single_nested("definition", vec![
                Attribute::string("title"),
                Attribute::string("description"),
                Attribute::list("required", ElementType::String)
                    .description("the names of the properties that must be set"),
                Attribute::string("type"),
                Attribute::map_nested("properties", vec![
                    Attribute::string("title"),
                    Attribute::string("description"),
                    Attribute::string("type"),
                    Attribute::string("format"),
                    Attribute::string("pattern"),
                    Attribute::dynamic("default"),
                    Attribute::dynamic("example"),
                    Attribute::dynamic("enum"),
                    Attribute::list("x-descriptors", ElementType::String)
                        .description("UI hints for the property, e.g. 'urn:camel:group:credentials'"),
                ]).description("the configuration properties of the Kamelet, keyed by property name"),
            ]).description("defines the formal configuration of the Kamelet"),
            Attribute::list("dependencies", ElementType::String)
                .description("Camel dependencies needed by the Kamelet"),
            Attribute::list_nested("sources", source_attributes())
                .description("sources in any Camel DSL supported"),
            Attribute::dynamic("template").description("the main source in YAML DSL"),
            Attribute::map_nested("types", vec![
                Attribute::string("mediaType")
                    .description("media type as expected for HTTP media types (ie, application/json)"),
                Attribute::dynamic("schema").description("the expected schema for the event"),
            ]).description("data specification types for the events consumed/produced by the Kamelet"),
        ]
    }
}
