mod common;

use assertables::*;
// the prelude doesn't include PATCH
use httpmock::Method::*;
use rstest::*;
use serde_json::{json, Value};

use tfk8s_provider::crd::camel::v1::integration::Integration;
use tfk8s_provider::resource::{CrdResource, Resource};

use common::*;

#[fixture]
fn plan() -> Value {
    json!({
        "metadata": {"name": "hello", "namespace": "camel", "labels": {"app.kubernetes.io/name": "hello"}},
        "spec": {
            "replicas": 2,
            "traits": {"container": {"image_pull_policy": "Always"}},
        },
    })
}

#[fixture]
fn prior_state() -> Value {
    json!({
        "id": "camel/hello",
        "metadata": {"name": "hello", "namespace": "camel"},
        "field_manager": "ci",
        "force_conflicts": true,
    })
}

#[rstest]
#[tokio::test]
async fn test_create_applies_with_default_field_manager(plan: Value) {
    let (mut fake_apiserver, ctx) = make_fake_apiserver();
    fake_apiserver
        .handle(|when, then| {
            when.method(PATCH)
                .path(format!("{INTEGRATIONS_PATH}/hello"))
                .query_param("fieldManager", "terraform-provider-k8s")
                .header("content-type", "application/apply-patch+yaml");
            then.json_body(integration_object());
        })
        .build();

    let response = CrdResource::<Integration>::new().create(Some(ctx), &plan).await;
    fake_apiserver.assert();

    assert!(response.diagnostics.is_empty(), "{:?}", response.diagnostics);
    let state = response.state.unwrap();
    assert_eq!(state["id"], "camel/hello");
    assert_eq!(state["kind"], "Integration");
    assert_eq!(state["spec"]["replicas"], 2);
    assert_eq!(state["field_manager"], "terraform-provider-k8s");
    assert_eq!(state["force_conflicts"], false);
}

#[rstest]
#[tokio::test]
async fn test_update_forces_conflicts(mut plan: Value, prior_state: Value) {
    plan["field_manager"] = json!("ci");
    plan["force_conflicts"] = json!(true);
    plan["id"] = json!("camel/hello");

    let (mut fake_apiserver, ctx) = make_fake_apiserver();
    fake_apiserver
        .handle(|when, then| {
            when.method(PATCH)
                .path(format!("{INTEGRATIONS_PATH}/hello"))
                .query_param("fieldManager", "ci")
                .query_param("force", "true");
            then.json_body(integration_object());
        })
        .build();

    let response = CrdResource::<Integration>::new().update(Some(ctx), &prior_state, &plan).await;
    fake_apiserver.assert();

    assert!(response.diagnostics.is_empty(), "{:?}", response.diagnostics);
    let state = response.state.unwrap();
    assert_eq!(state["field_manager"], "ci");
    assert_eq!(state["force_conflicts"], true);
}

#[rstest]
#[tokio::test]
async fn test_create_rejects_invalid_plan() {
    let (mut fake_apiserver, ctx) = make_fake_apiserver();
    fake_apiserver.build();

    let response = CrdResource::<Integration>::new()
        .create(Some(ctx), &json!({"metadata": {"name": "hello", "namespace": "camel"}}))
        .await;

    assert_none!(response.state);
    let diag = response.diagnostics.iter().next().unwrap();
    assert_eq!(diag.summary, "Missing Configuration for Required Attribute");
    assert_eq!(diag.attribute.as_ref().unwrap().to_string(), "spec");
}

#[rstest]
#[tokio::test]
async fn test_create_rejects_out_of_range_replicas(mut plan: Value) {
    plan["spec"]["replicas"] = json!(3_000_000_000u64);
    let (mut fake_apiserver, ctx) = make_fake_apiserver();
    fake_apiserver.build();

    let response = CrdResource::<Integration>::new().create(Some(ctx), &plan).await;

    assert_none!(response.state);
    let diag = response.diagnostics.iter().next().unwrap();
    assert_eq!(diag.summary, "Invalid Attribute Value");
    assert_eq!(diag.attribute.as_ref().unwrap().to_string(), "spec.replicas");
    assert_contains!(diag.detail, "between -2147483648 and 2147483647");
}

#[rstest]
#[tokio::test]
async fn test_create_reports_conflict(plan: Value) {
    let (mut fake_apiserver, ctx) = make_fake_apiserver();
    fake_apiserver
        .handle_status("PATCH", format!("{INTEGRATIONS_PATH}/hello"), 409, "Conflict")
        .build();

    let response = CrdResource::<Integration>::new().create(Some(ctx), &plan).await;
    fake_apiserver.assert();

    assert_none!(response.state);
    let diag = response.diagnostics.iter().next().unwrap();
    assert_eq!(diag.summary, "Kubernetes API Error");
    assert_contains!(diag.detail, "Unable to apply Integration `hello` in namespace `camel`");
}

#[rstest]
#[tokio::test]
async fn test_read_keeps_apply_options(prior_state: Value) {
    let (mut fake_apiserver, ctx) = make_fake_apiserver();
    fake_apiserver
        .handle(|when, then| {
            when.method(GET).path(format!("{INTEGRATIONS_PATH}/hello"));
            then.json_body(integration_object());
        })
        .build();

    let response = CrdResource::<Integration>::new().read(Some(ctx), &prior_state).await;
    fake_apiserver.assert();

    let state = response.state.unwrap();
    assert_eq!(state["metadata"]["labels"]["app.kubernetes.io/name"], "hello");
    assert_eq!(state["field_manager"], "ci");
    assert_eq!(state["force_conflicts"], true);
}

#[rstest]
#[tokio::test]
async fn test_read_gone_object_clears_state(prior_state: Value) {
    let (mut fake_apiserver, ctx) = make_fake_apiserver();
    fake_apiserver
        .handle_status("GET", format!("{INTEGRATIONS_PATH}/hello"), 404, "NotFound")
        .build();

    let response = CrdResource::<Integration>::new().read(Some(ctx), &prior_state).await;
    fake_apiserver.assert();

    assert_none!(response.state);
    assert!(response.diagnostics.is_empty());
}

#[rstest]
#[tokio::test]
async fn test_read_forbidden(prior_state: Value) {
    let (mut fake_apiserver, ctx) = make_fake_apiserver();
    fake_apiserver
        .handle_status("GET", format!("{INTEGRATIONS_PATH}/hello"), 403, "Forbidden")
        .build();

    let response = CrdResource::<Integration>::new().read(Some(ctx), &prior_state).await;

    assert_none!(response.state);
    assert_eq!(response.diagnostics.iter().next().unwrap().summary, "Kubernetes API Error");
}

#[rstest]
#[tokio::test]
async fn test_delete(prior_state: Value) {
    let (mut fake_apiserver, ctx) = make_fake_apiserver();
    fake_apiserver
        .handle(|when, then| {
            when.method(DELETE).path(format!("{INTEGRATIONS_PATH}/hello"));
            then.json_body(status_ok());
        })
        .build();

    let response = CrdResource::<Integration>::new().delete(Some(ctx), &prior_state).await;
    fake_apiserver.assert();

    assert!(response.diagnostics.is_empty(), "{:?}", response.diagnostics);
}

#[rstest]
#[case::already_gone(404, "NotFound", 0)]
#[case::forbidden(403, "Forbidden", 1)]
#[tokio::test]
async fn test_delete_errors(prior_state: Value, #[case] code: u16, #[case] reason: &'static str, #[case] errors: usize) {
    let (mut fake_apiserver, ctx) = make_fake_apiserver();
    fake_apiserver
        .handle_status("DELETE", format!("{INTEGRATIONS_PATH}/hello"), code, reason)
        .build();

    let response = CrdResource::<Integration>::new().delete(Some(ctx), &prior_state).await;
    fake_apiserver.assert();

    assert_eq!(response.diagnostics.len(), errors);
}

#[rstest]
#[tokio::test]
async fn test_import() {
    let (mut fake_apiserver, ctx) = make_fake_apiserver();
    fake_apiserver
        .handle(|when, then| {
            when.method(GET).path(format!("{INTEGRATIONS_PATH}/hello"));
            then.json_body(integration_object());
        })
        .build();

    let response = CrdResource::<Integration>::new().import(Some(ctx), "camel/hello").await;
    fake_apiserver.assert();

    let state = response.state.unwrap();
    assert_eq!(state["id"], "camel/hello");
    assert_eq!(state["field_manager"], "terraform-provider-k8s");
    assert_eq!(state["force_conflicts"], false);
}

#[rstest]
#[case("camel", "Unexpected Import Identifier")]
#[case("camel/hello/extra", "Unexpected Import Identifier")]
#[case("camel/missing", "Cannot import non-existent remote object")]
#[tokio::test]
async fn test_import_errors(#[case] id: &str, #[case] summary: &str) {
    let (mut fake_apiserver, ctx) = make_fake_apiserver();
    fake_apiserver
        .handle_status("GET", format!("{INTEGRATIONS_PATH}/missing"), 404, "NotFound")
        .build();

    let response = CrdResource::<Integration>::new().import(Some(ctx), id).await;

    assert_none!(response.state);
    assert_eq!(response.diagnostics.iter().next().unwrap().summary, summary);
}
