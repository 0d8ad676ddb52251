use serde_json::{Map, Value};

use crate::diag::{AttributePath, Diagnostics};
use crate::schema::{Attribute, AttributeType, ElementType};

/// Convert a Kubernetes object (camelCase field names) into state for the given attributes.
///
/// Every attribute is present in the result, the ones missing from the object are `null`.
/// Keys of `map` and `map_nested` values are user data and are copied unchanged.
pub fn to_state(attributes: &[Attribute], object: &Value) -> Value {
    let mut state = Map::new();
    for attribute in attributes {
        let value = object.get(&attribute.json_name).unwrap_or(&Value::Null);
        state.insert(attribute.name.clone(), value_to_state(&attribute.kind, value));
    }
    Value::Object(state)
}

fn value_to_state(kind: &AttributeType, value: &Value) -> Value {
    match (kind, value) {
        (_, Value::Null) => Value::Null,
        (AttributeType::SingleNested { attributes }, Value::Object(_)) => to_state(attributes, value),
        (AttributeType::ListNested { attributes }, Value::Array(items)) => {
            Value::Array(items.iter().map(|item| to_state(attributes, item)).collect())
        }
        (AttributeType::MapNested { attributes }, Value::Object(entries)) => Value::Object(
            entries
                .iter()
                .map(|(key, item)| (key.clone(), to_state(attributes, item)))
                .collect(),
        ),
        (
            AttributeType::SingleNested { .. } | AttributeType::ListNested { .. } | AttributeType::MapNested { .. },
            _,
        ) => Value::Null,
        _ => value.clone(),
    }
}

/// Convert state or configuration back into a Kubernetes object, dropping `null` values.
pub fn from_state(attributes: &[Attribute], state: &Value) -> Value {
    let mut object = Map::new();
    for attribute in attributes {
        let value = state
            .get(&attribute.name)
            .map(|value| value_from_state(&attribute.kind, value))
            .unwrap_or(Value::Null);
        if !value.is_null() {
            object.insert(attribute.json_name.clone(), value);
        }
    }
    Value::Object(object)
}

fn value_from_state(kind: &AttributeType, value: &Value) -> Value {
    match (kind, value) {
        (_, Value::Null) => Value::Null,
        (AttributeType::SingleNested { attributes }, Value::Object(_)) => from_state(attributes, value),
        (AttributeType::ListNested { attributes }, Value::Array(items)) => {
            Value::Array(items.iter().map(|item| from_state(attributes, item)).collect())
        }
        (AttributeType::MapNested { attributes }, Value::Object(entries)) => Value::Object(
            entries
                .iter()
                .map(|(key, item)| (key.clone(), from_state(attributes, item)))
                .collect(),
        ),
        _ => value.clone(),
    }
}

/// Validate configuration against the attributes, appending an error diagnostic per problem.
pub fn validate(attributes: &[Attribute], config: &Value, path: &AttributePath, diags: &mut Diagnostics) {
    if let Some(entries) = config.as_object() {
        for key in entries.keys() {
            if !attributes.iter().any(|a| &a.name == key) {
                diags.add_attribute_error(
                    path.child(key.as_str()),
                    "Unsupported Attribute",
                    format!("An attribute named \"{}\" is not expected here.", key),
                );
            }
        }
    }

    for attribute in attributes {
        let path = path.child(attribute.name.as_str());
        let value = config.get(&attribute.name).unwrap_or(&Value::Null);

        if value.is_null() {
            if attribute.required {
                diags.add_attribute_error(
                    path.clone(),
                    "Missing Configuration for Required Attribute",
                    format!("Must set a configuration value for the {} attribute as the provider has marked it as required.", path),
                );
            }
            continue;
        }

        if attribute.is_read_only() {
            diags.add_attribute_error(
                path.clone(),
                "Invalid Configuration for Read-Only Attribute",
                format!("Cannot set value for the {} attribute as the provider has marked it as read-only. Remove the configuration line setting the value.", path),
            );
            continue;
        }

        validate_value(attribute, value, &path, diags);
    }
}

fn validate_value(attribute: &Attribute, value: &Value, path: &AttributePath, diags: &mut Diagnostics) {
    match &attribute.kind {
        AttributeType::String => match value.as_str() {
            Some(s) => {
                for validator in &attribute.validators {
                    if let Some(reason) = validator.check(s) {
                        diags.add_attribute_error(
                            path.clone(),
                            "Invalid Attribute Value",
                            format!("Attribute {} {}", path, reason),
                        );
                    }
                }
            }
            None => type_error(path, "string", diags),
        },
        AttributeType::Int64 => match value.as_i64() {
            Some(n) => {
                for validator in &attribute.validators {
                    if let Some(reason) = validator.check_int(n) {
                        diags.add_attribute_error(
                            path.clone(),
                            "Invalid Attribute Value",
                            format!("Attribute {} {}", path, reason),
                        );
                    }
                }
            }
            None => type_error(path, "int64", diags),
        },
        AttributeType::Float64 => {
            if !value.is_number() {
                type_error(path, "float64", diags);
            }
        }
        AttributeType::Bool => {
            if !value.is_boolean() {
                type_error(path, "bool", diags);
            }
        }
        AttributeType::Dynamic => {}
        AttributeType::List { element } => match value.as_array() {
            Some(items) => {
                for (i, item) in items.iter().enumerate() {
                    if !element_matches(*element, item) {
                        type_error(&path.child(i.to_string()), element_name(*element), diags);
                    }
                }
            }
            None => type_error(path, "list", diags),
        },
        AttributeType::Map { element } => match value.as_object() {
            Some(entries) => {
                for (key, item) in entries {
                    if !element_matches(*element, item) {
                        type_error(&path.child(key.as_str()), element_name(*element), diags);
                    }
                }
            }
            None => type_error(path, "map", diags),
        },
        AttributeType::SingleNested { attributes } => {
            if value.is_object() {
                validate(attributes, value, path, diags);
            } else {
                type_error(path, "object", diags);
            }
        }
        AttributeType::ListNested { attributes } => match value.as_array() {
            Some(items) => {
                for (i, item) in items.iter().enumerate() {
                    let item_path = path.child(i.to_string());
                    if item.is_object() {
                        validate(attributes, item, &item_path, diags);
                    } else {
                        type_error(&item_path, "object", diags);
                    }
                }
            }
            None => type_error(path, "list", diags),
        },
        AttributeType::MapNested { attributes } => match value.as_object() {
            Some(entries) => {
                for (key, item) in entries {
                    let item_path = path.child(key.as_str());
                    if item.is_object() {
                        validate(attributes, item, &item_path, diags);
                    } else {
                        type_error(&item_path, "object", diags);
                    }
                }
            }
            None => type_error(path, "map", diags),
        },
    }
}

fn element_matches(element: ElementType, value: &Value) -> bool {
    match element {
        ElementType::String => value.is_string(),
        ElementType::Int64 => value.is_i64(),
        ElementType::Float64 => value.is_number(),
        ElementType::Bool => value.is_boolean(),
    }
}

fn element_name(element: ElementType) -> &'static str {
    match element {
        ElementType::String => "string",
        ElementType::Int64 => "int64",
        ElementType::Float64 => "float64",
        ElementType::Bool => "bool",
    }
}

fn type_error(path: &AttributePath, expected: &str, diags: &mut Diagnostics) {
    diags.add_attribute_error(
        path.clone(),
        "Incorrect attribute value type",
        format!("Inappropriate value for attribute {}: {} required.", path, expected),
    );
}
