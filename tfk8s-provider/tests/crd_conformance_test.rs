use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::{
    JSONSchemaProps, JSONSchemaPropsOrArray, JSONSchemaPropsOrBool,
};
use kube::CustomResourceExt;
use rstest::*;
use std::collections::BTreeSet;

use tfk8s_provider::crd::ProviderKind;
use tfk8s_provider::crd::camel::v1::integration::Integration;
use tfk8s_provider::crd::camel::v1::kamelet::Kamelet;
use tfk8s_provider::schema::{Attribute, AttributeType, ElementType};

fn is_concrete(props: &JSONSchemaProps) -> bool {
    props.type_.is_some()
        || props.properties.is_some()
        || props.x_kubernetes_preserve_unknown_fields == Some(true)
}

/// Follow `anyOf`/`oneOf`/`allOf` wrappers (e.g. for optional fields) to the schema they carry
fn effective(props: &JSONSchemaProps) -> &JSONSchemaProps {
    if is_concrete(props) {
        return props;
    }
    props
        .any_of
        .iter()
        .chain(props.one_of.iter())
        .chain(props.all_of.iter())
        .flatten()
        .find(|s| is_concrete(s) && s.type_.as_deref() != Some("null"))
        .map(effective)
        .unwrap_or(props)
}

fn items(props: &JSONSchemaProps) -> Option<&JSONSchemaProps> {
    match props.items.as_ref()? {
        JSONSchemaPropsOrArray::Schema(schema) => Some(effective(schema)),
        JSONSchemaPropsOrArray::Schemas(schemas) => schemas.first().map(effective),
    }
}

fn additional_properties(props: &JSONSchemaProps) -> Option<&JSONSchemaProps> {
    match props.additional_properties.as_ref()? {
        JSONSchemaPropsOrBool::Schema(schema) => Some(effective(schema)),
        JSONSchemaPropsOrBool::Bool(_) => None,
    }
}

fn type_of(props: &JSONSchemaProps) -> &str {
    props.type_.as_deref().unwrap_or_default()
}

fn element_type(element: ElementType) -> &'static str {
    match element {
        ElementType::String => "string",
        ElementType::Int64 => "integer",
        ElementType::Float64 => "number",
        ElementType::Bool => "boolean",
    }
}

fn check_object(attributes: &[Attribute], props: &JSONSchemaProps, path: &str, errors: &mut Vec<String>) {
    let fields = props.properties.clone().unwrap_or_default();

    let declared: BTreeSet<&str> = attributes.iter().map(|a| a.json_name.as_str()).collect();
    let actual: BTreeSet<&str> = fields.keys().map(String::as_str).collect();
    for missing in actual.difference(&declared) {
        errors.push(format!("{path}.{missing}: field is not declared"));
    }
    for extra in declared.difference(&actual) {
        errors.push(format!("{path}.{extra}: declared but not in the CRD"));
    }

    let required: BTreeSet<&str> = props
        .required
        .iter()
        .flatten()
        .map(String::as_str)
        .collect();

    for attribute in attributes {
        let Some(field) = fields.get(&attribute.json_name) else {
            continue;
        };
        let field_path = format!("{path}.{}", attribute.json_name);
        if attribute.required != required.contains(attribute.json_name.as_str()) {
            errors.push(format!("{field_path}: required is {} in the declaration", attribute.required));
        }
        check_type(&attribute.kind, effective(field), &field_path, errors);
    }
}

fn check_type(kind: &AttributeType, props: &JSONSchemaProps, path: &str, errors: &mut Vec<String>) {
    let preserves = |p: &JSONSchemaProps| p.x_kubernetes_preserve_unknown_fields == Some(true);

    let ok = match kind {
        AttributeType::String => type_of(props) == "string",
        AttributeType::Int64 => type_of(props) == "integer",
        AttributeType::Float64 => type_of(props) == "number",
        AttributeType::Bool => type_of(props) == "boolean",
        AttributeType::Dynamic => preserves(props) || items(props).is_some_and(preserves),
        AttributeType::List { element } => {
            type_of(props) == "array" && items(props).is_some_and(|i| type_of(i) == element_type(*element))
        }
        AttributeType::Map { element } => {
            type_of(props) == "object"
                && additional_properties(props).is_some_and(|v| type_of(v) == element_type(*element))
        }
        AttributeType::SingleNested { attributes } => {
            check_object(attributes, props, path, errors);
            type_of(props) == "object"
        }
        AttributeType::ListNested { attributes } => match items(props) {
            Some(item) if type_of(props) == "array" => {
                check_object(attributes, item, path, errors);
                true
            }
            _ => false,
        },
        AttributeType::MapNested { attributes } => match additional_properties(props) {
            Some(value) if type_of(props) == "object" => {
                check_object(attributes, value, path, errors);
                true
            }
            _ => false,
        },
    };

    if !ok {
        errors.push(format!("{path}: declared as {:?} but the CRD schema is {:?}", kind_name(kind), type_of(props)));
    }
}

fn kind_name(kind: &AttributeType) -> &'static str {
    match kind {
        AttributeType::String => "string",
        AttributeType::Int64 => "int64",
        AttributeType::Float64 => "float64",
        AttributeType::Bool => "bool",
        AttributeType::Dynamic => "dynamic",
        AttributeType::List { .. } => "list",
        AttributeType::Map { .. } => "map",
        AttributeType::SingleNested { .. } => "single_nested",
        AttributeType::ListNested { .. } => "list_nested",
        AttributeType::MapNested { .. } => "map_nested",
    }
}

fn spec_schema<K: ProviderKind>() -> JSONSchemaProps {
    let crd = K::crd();
    let root = crd.spec.versions[0]
        .schema
        .as_ref()
        .and_then(|s| s.open_api_v3_schema.clone())
        .unwrap();
    effective(&root.properties.unwrap()["spec"]).clone()
}

fn conformance_errors<K: ProviderKind>() -> Vec<String> {
    let mut errors = vec![];
    check_object(&K::spec_attributes(), &spec_schema::<K>(), "spec", &mut errors);
    errors
}

#[rstest]
fn test_integration_attributes_match_crd() {
    let errors = conformance_errors::<Integration>();
    assert!(errors.is_empty(), "{:#?}", errors);
}

#[rstest]
fn test_kamelet_attributes_match_crd() {
    let errors = conformance_errors::<Kamelet>();
    assert!(errors.is_empty(), "{:#?}", errors);
}

#[rstest]
fn test_conformance_detects_drift() {
    let mut attributes = Integration::spec_attributes();
    attributes.retain(|a| a.json_name != "profile");
    attributes.push(Attribute::string("replicaCount"));

    let mut errors = vec![];
    check_object(&attributes, &spec_schema::<Integration>(), "spec", &mut errors);

    assert_eq!(errors, vec![
        "spec.profile: field is not declared".to_string(),
        "spec.replicaCount: declared but not in the CRD".to_string(),
    ]);
}

#[rstest]
fn test_integration_crd_identity() {
    let crd = Integration::crd();

    assert_eq!(crd.spec.group, "camel.apache.org");
    assert_eq!(crd.spec.names.kind, "Integration");
    assert_eq!(crd.spec.names.plural, "integrations");
    assert_eq!(crd.spec.names.short_names, Some(vec!["it".to_string()]));
    assert_eq!(crd.spec.scope, "Namespaced");
}
