//! Attribute model for provider, data source and resource schemas.
//!
//! Attributes are keyed by the field name of the Kubernetes object they mirror, the
//! name exposed to Terraform is the snake_case form of that field name.

pub mod value;

use convert_case::{Case, Casing};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    String,
    Int64,
    Float64,
    Bool,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AttributeType {
    String,
    Int64,
    Float64,
    Bool,
    /// Arbitrary JSON, used where the CRD preserves unknown fields
    Dynamic,
    List { element: ElementType },
    Map { element: ElementType },
    SingleNested { attributes: Vec<Attribute> },
    ListNested { attributes: Vec<Attribute> },
    MapNested { attributes: Vec<Attribute> },
}

impl AttributeType {
    pub fn nested(&self) -> Option<&[Attribute]> {
        match self {
            AttributeType::SingleNested { attributes }
            | AttributeType::ListNested { attributes }
            | AttributeType::MapNested { attributes } => Some(attributes),
            _ => None,
        }
    }

    fn nested_mut(&mut self) -> Option<&mut Vec<Attribute>> {
        match self {
            AttributeType::SingleNested { attributes }
            | AttributeType::ListNested { attributes }
            | AttributeType::MapNested { attributes } => Some(attributes),
            _ => None,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Validator {
    LengthAtLeast { min: usize },
    RegexMatches { pattern: String, message: String },
    OneOf { values: Vec<String> },
    IntBetween { min: i64, max: i64 },
}

impl Validator {
    pub fn length_at_least(min: usize) -> Self {
        Validator::LengthAtLeast { min }
    }

    pub fn regex_matches(pattern: &str, message: &str) -> Self {
        Validator::RegexMatches { pattern: pattern.to_string(), message: message.to_string() }
    }

    pub fn one_of(values: &[&str]) -> Self {
        Validator::OneOf { values: values.iter().map(|v| v.to_string()).collect() }
    }

    pub fn int_between(min: i64, max: i64) -> Self {
        Validator::IntBetween { min, max }
    }

    /// Check a string value, returning the reason it is invalid
    pub fn check(&self, value: &str) -> Option<String> {
        match self {
            Validator::LengthAtLeast { min } => (value.chars().count() < *min)
                .then(|| format!("string length must be at least {}, got: {}", min, value.chars().count())),
            Validator::RegexMatches { pattern, message } => match Regex::new(pattern) {
                Ok(re) if re.is_match(value) => None,
                Ok(_) => Some(format!("{}, got: {}", message, value)),
                Err(e) => Some(format!("invalid validation pattern `{}`: {}", pattern, e)),
            },
            Validator::OneOf { values } => (!values.iter().any(|v| v == value))
                .then(|| format!("value must be one of: {}, got: {}", values.join(", "), value)),
            Validator::IntBetween { .. } => None,
        }
    }

    /// Check an integer value, string validators always pass
    pub fn check_int(&self, value: i64) -> Option<String> {
        match self {
            Validator::IntBetween { min, max } => (value < *min || value > *max)
                .then(|| format!("value must be between {} and {}, got: {}", min, max, value)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaMode {
    /// Every attribute is filled in by the provider (data sources)
    Computed,
    /// Attributes are set by the user, optional unless the CRD requires them
    Configurable,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    #[serde(skip)]
    pub json_name: String,
    #[serde(flatten)]
    pub kind: AttributeType,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub sensitive: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub requires_replace: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
}

impl Attribute {
    pub fn new(json_name: &str, kind: AttributeType) -> Self {
        Attribute {
            name: json_name.to_case(Case::Snake),
            json_name: json_name.to_string(),
            kind,
            description: String::new(),
            required: false,
            optional: false,
            computed: false,
            sensitive: false,
            requires_replace: false,
            validators: vec![],
        }
    }

    pub fn string(json_name: &str) -> Self {
        Self::new(json_name, AttributeType::String)
    }

    pub fn int64(json_name: &str) -> Self {
        Self::new(json_name, AttributeType::Int64)
    }

    /// An `int64` attribute backed by a 32 bit field in the object
    pub fn int32(json_name: &str) -> Self {
        Self::int64(json_name).validator(Validator::int_between(i32::MIN.into(), i32::MAX.into()))
    }

    pub fn float64(json_name: &str) -> Self {
        Self::new(json_name, AttributeType::Float64)
    }

    pub fn bool(json_name: &str) -> Self {
        Self::new(json_name, AttributeType::Bool)
    }

    pub fn dynamic(json_name: &str) -> Self {
        Self::new(json_name, AttributeType::Dynamic)
    }

    pub fn list(json_name: &str, element: ElementType) -> Self {
        Self::new(json_name, AttributeType::List { element })
    }

    pub fn map(json_name: &str, element: ElementType) -> Self {
        Self::new(json_name, AttributeType::Map { element })
    }

    pub fn single_nested(json_name: &str, attributes: Vec<Attribute>) -> Self {
        Self::new(json_name, AttributeType::SingleNested { attributes })
    }

    pub fn list_nested(json_name: &str, attributes: Vec<Attribute>) -> Self {
        Self::new(json_name, AttributeType::ListNested { attributes })
    }

    pub fn map_nested(json_name: &str, attributes: Vec<Attribute>) -> Self {
        Self::new(json_name, AttributeType::MapNested { attributes })
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self.optional = false;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self.required = false;
        self
    }

    pub fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    pub fn requires_replace(mut self) -> Self {
        self.requires_replace = true;
        self
    }

    pub fn validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    /// Read-only attributes can never be set in configuration
    pub fn is_read_only(&self) -> bool {
        self.computed && !self.optional && !self.required
    }

    /// Apply a schema mode to this attribute and everything nested below it
    pub fn with_mode(mut self, mode: SchemaMode) -> Self {
        match mode {
            SchemaMode::Computed => {
                self.required = false;
                self.optional = false;
                self.computed = true;
                self.validators.clear();
            }
            SchemaMode::Configurable => {
                if !self.required && !self.computed {
                    self.optional = true;
                }
            }
        }
        if let Some(attributes) = self.kind.nested_mut() {
            let nested = std::mem::take(attributes);
            *attributes = nested.into_iter().map(|a| a.with_mode(mode)).collect();
        }
        self
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Schema {
    pub version: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub attributes: Vec<Attribute>,
}

impl Schema {
    pub fn new(description: &str) -> Self {
        Schema {
            version: 0,
            description: description.to_string(),
            attributes: vec![],
        }
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ProviderSchema {
    pub provider: Schema,
    pub data_sources: BTreeMap<String, Schema>,
    pub resources: BTreeMap<String, Schema>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terraform_names_are_snake_case() {
        assert_eq!(Attribute::string("serviceAccountName").name, "service_account_name");
        assert_eq!(Attribute::bool("pull-secret").name, "pull_secret");
        assert_eq!(Attribute::string("apiVersion").name, "api_version");
        assert_eq!(Attribute::string("name").name, "name");
        assert_eq!(Attribute::string("serviceAccountName").json_name, "serviceAccountName");
    }

    #[test]
    fn computed_mode_reaches_nested_attributes() {
        let attribute = Attribute::list_nested("sources", vec![
            Attribute::string("name").required(),
            Attribute::string("content").validator(Validator::length_at_least(1)),
        ])
        .with_mode(SchemaMode::Computed);

        assert!(attribute.is_read_only());
        for nested in attribute.kind.nested().unwrap() {
            assert!(nested.is_read_only());
            assert!(nested.validators.is_empty());
        }
    }

    #[test]
    fn configurable_mode_keeps_required() {
        let attribute = Attribute::single_nested("definition", vec![
            Attribute::string("title").required(),
            Attribute::string("description"),
        ])
        .with_mode(SchemaMode::Configurable);

        assert!(attribute.optional);
        let nested = attribute.kind.nested().unwrap();
        assert!(nested[0].required && !nested[0].optional);
        assert!(nested[1].optional && !nested[1].required);
    }

    #[test]
    fn validators() {
        assert_eq!(Validator::length_at_least(1).check(""), Some("string length must be at least 1, got: 0".to_string()));
        assert_eq!(Validator::length_at_least(1).check("a"), None);
        assert!(Validator::regex_matches("^[a-z]+$", "must be lowercase").check("ABC").is_some());
        assert!(Validator::one_of(&["a", "b"]).check("b").is_none());
        assert!(Validator::one_of(&["a", "b"]).check("c").is_some());

        let int32 = Validator::int_between(i32::MIN.into(), i32::MAX.into());
        assert_eq!(int32.check_int(3_000_000_000), Some("value must be between -2147483648 and 2147483647, got: 3000000000".to_string()));
        assert_eq!(int32.check_int(-1), None);
        assert_eq!(int32.check("anything"), None);
        assert_eq!(Validator::one_of(&["a"]).check_int(7), None);
    }

    #[test]
    fn schema_serializes_terraform_names() {
        let schema = Schema::new("example").with_attribute(
            Attribute::map("annotations", ElementType::String).computed(),
        ).with_attribute(
            Attribute::string("serviceAccountName").optional(),
        );

        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(value["attributes"][0]["type"], "map");
        assert_eq!(value["attributes"][0]["element"], "string");
        assert_eq!(value["attributes"][1]["name"], "service_account_name");
        assert!(value["attributes"][1].get("json_name").is_none());
        assert!(schema.attribute("service_account_name").is_some());
    }
}
