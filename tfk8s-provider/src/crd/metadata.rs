use crate::schema::{Attribute, ElementType, SchemaMode, Validator};

const DNS_SUBDOMAIN: &str = r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$";
const DNS_LABEL: &str = r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$";

/// The `metadata` block shared by every custom resource type.
///
/// In `Computed` mode (data sources) `name` and `namespace` select the object and stay
/// required, labels and annotations are read from the cluster. In `Configurable` mode
/// everything is user supplied and changing the name or namespace replaces the object.
pub fn metadata_attribute(mode: SchemaMode) -> Attribute {
    let name = Attribute::string("name")
        .description("Name must be unique within a namespace. Is required when creating resources, although some resources may allow a client to request the generation of an appropriate name automatically. Name is primarily intended for creation idempotence and configuration definition. Cannot be updated.")
        .required()
        .validator(Validator::length_at_least(1))
        .validator(Validator::regex_matches(DNS_SUBDOMAIN, "must be a valid DNS subdomain name"));
    let namespace = Attribute::string("namespace")
        .description("Namespace defines the space within which each name must be unique. An empty namespace is equivalent to the \"default\" namespace, but \"default\" is the canonical representation. Not all objects are required to be scoped to a namespace - the value of this field for those objects will be empty. Must be a DNS_LABEL. Cannot be updated.")
        .required()
        .validator(Validator::length_at_least(1))
        .validator(Validator::regex_matches(DNS_LABEL, "must be a valid DNS label"));
    let labels = Attribute::map("labels", ElementType::String)
        .description("Map of string keys and values that can be used to organize and categorize (scope and select) objects. May match selectors of replication controllers and services.");
    let annotations = Attribute::map("annotations", ElementType::String)
        .description("Annotations is an unstructured key value map stored with a resource that may be set by external tools to store and retrieve arbitrary metadata. They are not queryable and should be preserved when modifying objects.");

    let attributes = match mode {
        SchemaMode::Computed => vec![name, namespace, labels.computed(), annotations.computed()],
        SchemaMode::Configurable => vec![
            name.requires_replace(),
            namespace.requires_replace(),
            labels.optional(),
            annotations.optional(),
        ],
    };

    Attribute::single_nested("metadata", attributes)
        .description("Data that helps uniquely identify this object.")
        .required()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_source_metadata_selects_by_name_and_namespace() {
        let metadata = metadata_attribute(SchemaMode::Computed);
        let nested = metadata.kind.nested().unwrap();

        let required: Vec<&str> = nested.iter().filter(|a| a.required).map(|a| a.name.as_str()).collect();
        let computed: Vec<&str> = nested.iter().filter(|a| a.is_read_only()).map(|a| a.name.as_str()).collect();
        assert_eq!(required, vec!["name", "namespace"]);
        assert_eq!(computed, vec!["labels", "annotations"]);
    }

    #[test]
    fn resource_metadata_replaces_on_rename() {
        let metadata = metadata_attribute(SchemaMode::Configurable);
        let nested = metadata.kind.nested().unwrap();

        assert!(nested[0].requires_replace && nested[1].requires_replace);
        assert!(nested[2].optional && nested[3].optional);
    }

    #[test]
    fn name_validators() {
        let metadata = metadata_attribute(SchemaMode::Computed);
        let name = &metadata.kind.nested().unwrap()[0];

        let check = |value: &str| name.validators.iter().filter_map(|v| v.check(value)).count();
        assert_eq!(check("my-integration.v1"), 0);
        assert_eq!(check("My_Integration"), 1);
        assert_eq!(check(""), 2);
    }
}
