use serde::{Deserialize, Serialize};
use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};

use crate::schema::{Attribute, ElementType};


/// Schema for an object whose fields are not validated by the API server
pub fn preserve_unknown_fields(_: &mut SchemaGenerator) -> Schema {
    json_schema!({
        "type": "object",
        "x-kubernetes-preserve-unknown-fields": true,
    })
}

/// Schema for a list of objects whose fields are not validated by the API server
pub fn preserve_unknown_fields_list(_: &mut SchemaGenerator) -> Schema {
    json_schema!({
        "type": "array",
        "items": {
            "type": "object",
            "x-kubernetes-preserve-unknown-fields": true,
        },
    })
}

/// Schema for a value of any JSON type
pub fn any_value(_: &mut SchemaGenerator) -> Schema {
    json_schema!({
        "x-kubernetes-preserve-unknown-fields": true,
    })
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SourceSpec {
    /// if the content is compressed (base64 encrypted)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compression: Option<bool>,
    /// the source code (plain text)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// the confimap key holding the source content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_key: Option<String>,
    /// the confimap reference holding the source content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_ref: Option<String>,
    /// the content type (tipically text or binary)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Interceptors are optional identifiers the org.apache.camel.k.RoutesLoader uses to pre/post process sources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interceptors: Option<Vec<String>>,
    /// specify which is the language (Camel DSL) used to interpret this source code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Loader is an optional id of the org.apache.camel.k.RoutesLoader that will interpret this source at runtime
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loader: Option<String>,
    /// the name of the specification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// the path where the file is stored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// List of property names defined in the source (e.g. if type is 'template')
    #[serde(default, rename = "property-names", skip_serializing_if = "Option::is_none")]
    pub property_names: Option<Vec<String>>,
    /// Type defines the kind of source described by this object
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
}

pub fn source_attributes() -> Vec<Attribute> {
    vec![
        Attribute::bool("compression").description("if the content is compressed (base64 encrypted)"),
        Attribute::string("content").description("the source code (plain text)"),
        Attribute::string("contentKey").description("the confimap key holding the source content"),
        Attribute::string("contentRef").description("the confimap reference holding the source content"),
        Attribute::string("contentType").description("the content type (tipically text or binary)"),
        Attribute::list("interceptors", ElementType::String)
            .description("Interceptors are optional identifiers the org.apache.camel.k.RoutesLoader uses to pre/post process sources"),
        Attribute::string("language").description("specify which is the language (Camel DSL) used to interpret this source code"),
        Attribute::string("loader")
            .description("Loader is an optional id of the org.apache.camel.k.RoutesLoader that will interpret this source at runtime"),
        Attribute::string("name").description("the name of the specification"),
        Attribute::string("path").description("the path where the file is stored"),
        Attribute::list("property-names", ElementType::String)
            .description("List of property names defined in the source (e.g. if type is 'template')"),
        Attribute::string("type").description("Type defines the kind of source described by this object"),
    ]
}
