use kube::CustomResource;
use k8s_openapi::api::core::v1::ObjectReference;
use std::collections::BTreeMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::crd::ProviderKind;
use crate::crd::camel::v1::common::{
    SourceSpec, source_attributes, preserve_unknown_fields, preserve_unknown_fields_list,
};
use crate::schema::{Attribute, ElementType, Validator};

#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[kube(
    kind = "Integration",
    group = "camel.apache.org",
    version = "v1",
    doc = "Integration is the Schema for the integrations API.",
    shortname = "it",
    derive = "PartialEq",
    derive = "Default",
    namespaced
)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationSpec {
    /// Deprecated: Use camel trait (camel.properties) to manage properties. Use mount trait (mount.configs) to manage configs. Use mount trait (mount.resources) to manage resources. Use mount trait (mount.volumes) to manage volumes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<Vec<ConfigurationSpec>>,
    /// the list of Camel or Maven dependencies required by the Integration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<String>>,
    /// a source in YAML DSL language which contain the routes to run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(schema_with = "preserve_unknown_fields_list")]
    pub flows: Option<Vec<Value>>,
    /// the reference of the `IntegrationKit` which is used for this Integration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration_kit: Option<ObjectReference>,
    /// the profile needed to run this Integration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    /// the number of `Pods` needed for the running Integration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,
    /// additional Maven repositories to be used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repositories: Option<Vec<String>>,
    /// custom SA to use for the Integration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_account_name: Option<String>,
    /// the sources which contain the Camel routes to run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<SourceSpec>>,
    /// Pod template customization
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(schema_with = "preserve_unknown_fields")]
    pub template: Option<Value>,
    /// the traits needed to run this Integration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traits: Option<Traits>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, JsonSchema)]
pub struct ConfigurationSpec {
    /// represents the type of configuration, ie: property, configmap, secret, ...
    #[serde(rename = "type")]
    pub type_: String,
    /// the value to assign to the configuration (syntax may vary depending on the `Type`)
    pub value: String,
}

/// Traits is a list of the traits configured for this Integration. Only the traits
/// shipped with Camel K are typed, anything else goes through `addons`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Traits {
    /// The extension point with addon traits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(schema_with = "preserve_unknown_fields")]
    pub addons: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affinity: Option<AffinityTrait>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builder: Option<BuilderTrait>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camel: Option<CamelTrait>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<ContainerTrait>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cron: Option<CronTrait>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<DependenciesTrait>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployer: Option<DeployerTrait>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment: Option<DeploymentTrait>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<EnvironmentTrait>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gc: Option<GcTrait>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<HealthTrait>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingress: Option<IngressTrait>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jvm: Option<JvmTrait>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kamelets: Option<KameletsTrait>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoggingTrait>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mount: Option<MountTrait>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<OwnerTrait>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdb: Option<PdbTrait>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<PlatformTrait>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pod: Option<PodTrait>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prometheus: Option<PrometheusTrait>,
    #[serde(default, rename = "pull-secret", skip_serializing_if = "Option::is_none")]
    pub pull_secret: Option<PullSecretTrait>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quarkus: Option<QuarkusTrait>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<RouteTrait>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<ServiceTrait>,
    #[serde(default, rename = "service-binding", skip_serializing_if = "Option::is_none")]
    pub service_binding: Option<ServiceBindingTrait>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toleration: Option<TolerationTrait>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AffinityTrait {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Always co-locates multiple replicas of the integration in the same node (default `false`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pod_affinity: Option<bool>,
    /// Never co-locates multiple replicas of the integration in the same node (default `false`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pod_anti_affinity: Option<bool>,
    /// Defines a set of nodes the integration pod(s) are eligible to be scheduled on, based on labels on the node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_affinity_labels: Option<Vec<String>>,
    /// Defines a set of pods (namely those matching the label selector, relative to the given namespace) that the integration pod(s) should be co-located with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pod_affinity_labels: Option<Vec<String>>,
    /// Defines a set of pods (namely those matching the label selector, relative to the given namespace) that the integration pod(s) should not be co-located with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pod_anti_affinity_labels: Option<Vec<String>>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BuilderTrait {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Enable verbose logging on build components that support it (e.g. OpenShift build pod).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,
    /// A list of properties to be provided to the build task
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<String>>,
    /// The strategy to use, either `pod` or `routine` (default `routine`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
    /// The build order strategy to use, either `dependencies`, `fifo` or `sequential` (default `sequential`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_strategy: Option<String>,
    /// When using `pod` strategy, the minimum amount of CPU required by the pod builder.
    #[serde(default, rename = "requestCPU", skip_serializing_if = "Option::is_none")]
    pub request_cpu: Option<String>,
    /// When using `pod` strategy, the minimum amount of memory required by the pod builder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_memory: Option<String>,
    /// When using `pod` strategy, the maximum amount of CPU required by the pod builder.
    #[serde(default, rename = "limitCPU", skip_serializing_if = "Option::is_none")]
    pub limit_cpu: Option<String>,
    /// When using `pod` strategy, the maximum amount of memory required by the pod builder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_memory: Option<String>,
    /// A list of references pointing to configmaps/secrets that contains a maven profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maven_profiles: Option<Vec<String>>,
    /// Use the incremental image build option, to reuse existing containers (default `true`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incremental_image_build: Option<bool>,
    /// Specify a base image. In order to have the application working properly it must be a container image which has a Java JDK installed and ready to use on path (ie `/usr/bin/java`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_image: Option<String>,
    /// Defines a set of nodes the builder pod is eligible to be scheduled on, based on labels on the node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_selector: Option<BTreeMap<String, String>>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CamelTrait {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// A list of properties to be provided to the Integration runtime
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<String>>,
    /// The camel-k-runtime version to use for the integration. It overrides the default version set in the Integration Platform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_version: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContainerTrait {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// To automatically enable the trait
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto: Option<bool>,
    /// The minimum amount of CPU required (default 125 millicores).
    #[serde(default, rename = "requestCPU", skip_serializing_if = "Option::is_none")]
    pub request_cpu: Option<String>,
    /// The minimum amount of memory required (default 128 Mi).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_memory: Option<String>,
    /// The maximum amount of CPU to be provided (default 500 millicores).
    #[serde(default, rename = "limitCPU", skip_serializing_if = "Option::is_none")]
    pub limit_cpu: Option<String>,
    /// The maximum amount of memory to be provided (default 512 Mi).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_memory: Option<String>,
    /// Can be used to enable/disable exposure via kubernetes Service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expose: Option<bool>,
    /// To configure a different port exposed by the container (default `8080`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    /// To configure a different port name for the port exposed by the container.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_name: Option<String>,
    /// To configure under which service port the container port is to be exposed (default `80`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_port: Option<i32>,
    /// To configure under which service port name the container port is to be exposed (default `http`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_port_name: Option<String>,
    /// The main container name. It's named `integration` by default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The main container image to use for the Integration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// The pull policy: Always|Never|IfNotPresent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_pull_policy: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CronTrait {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// The CronJob schedule for the whole integration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    /// A comma separated list of the Camel components that need to be customized in order for them to work when the schedule is triggered externally by Kubernetes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<String>,
    /// Use the default Camel implementation of the `cron` endpoint (`quartz`) instead of trying to materialize the integration as Kubernetes CronJob.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<bool>,
    /// Specifies how to treat concurrent executions of a Job. Valid values are: - "Allow": allows CronJobs to run concurrently; - "Forbid" (default): forbids concurrent runs, skipping next run if previous run hasn't finished yet; - "Replace": cancels currently running job and replaces it with a new one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concurrency_policy: Option<String>,
    /// Automatically deploy the integration as CronJob when all routes are either starting from a periodic consumer or a `cron`, `timer` or `quartz` endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto: Option<bool>,
    /// Optional deadline in seconds for starting the job if it misses scheduled time for any reason.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_deadline_seconds: Option<i64>,
    /// Specifies the duration in seconds, relative to the start time, that the job may be continuously active before it is considered to be failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_deadline_seconds: Option<i64>,
    /// Specifies the number of retries before marking the job failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backoff_limit: Option<i32>,
    /// The timezone that the CronJob will run on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, JsonSchema)]
pub struct DependenciesTrait {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeployerTrait {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Allows to explicitly select the desired deployment kind between `deployment`, `cron-job` or `knative-service` when creating the resources for running the integration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Use server-side apply to update the owned resources (default `true`).
    #[serde(default, rename = "useSSA", skip_serializing_if = "Option::is_none")]
    pub use_ssa: Option<bool>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentTrait {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// The maximum time in seconds for the deployment to make progress before it is considered to be failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_deadline_seconds: Option<i32>,
    /// The deployment strategy to use to replace existing pods with new ones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentTrait {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Enables injection of `NAMESPACE` and `POD_NAME` environment variables (default `true`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_meta: Option<bool>,
    /// Propagates the `HTTP_PROXY`, `HTTPS_PROXY` and `NO_PROXY` environment variables (default `true`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_proxy: Option<bool>,
    /// A list of environment variables to be added to the integration container.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vars: Option<Vec<String>>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GcTrait {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Discovery client cache to be used, either `disabled`, `disk` or `memory` (default `memory`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discovery_cache: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthTrait {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Configures the liveness probe for the integration container (default `false`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liveness_probe_enabled: Option<bool>,
    /// Scheme to use when connecting to the liveness probe (default `HTTP`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liveness_scheme: Option<String>,
    /// Number of seconds after the container has started before the liveness probe is initiated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liveness_initial_delay: Option<i32>,
    /// Number of seconds after which the liveness probe times out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liveness_timeout: Option<i32>,
    /// How often to perform the liveness probe.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liveness_period: Option<i32>,
    /// Minimum consecutive successes for the liveness probe to be considered successful after having failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liveness_success_threshold: Option<i32>,
    /// Minimum consecutive failures for the liveness probe to be considered failed after having succeeded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liveness_failure_threshold: Option<i32>,
    /// Configures the readiness probe for the integration container (default `true`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readiness_probe_enabled: Option<bool>,
    /// Scheme to use when connecting to the readiness probe (default `HTTP`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readiness_scheme: Option<String>,
    /// Number of seconds after the container has started before the readiness probe is initiated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readiness_initial_delay: Option<i32>,
    /// Number of seconds after which the readiness probe times out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readiness_timeout: Option<i32>,
    /// How often to perform the readiness probe.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readiness_period: Option<i32>,
    /// Minimum consecutive successes for the readiness probe to be considered successful after having failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readiness_success_threshold: Option<i32>,
    /// Minimum consecutive failures for the readiness probe to be considered failed after having succeeded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readiness_failure_threshold: Option<i32>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IngressTrait {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// The annotations added to the ingress.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
    /// To configure the host exposed by the ingress.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// To configure the path exposed by the ingress (default `/`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// To configure the path type exposed by the ingress. One of `Exact`, `Prefix`, `ImplementationSpecific` (default to `Prefix`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_type: Option<String>,
    /// To configure tls hosts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_hosts: Option<Vec<String>>,
    /// To configure tls secret name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_secret_name: Option<String>,
    /// To automatically add an ingress whenever the integration uses an HTTP endpoint consumer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto: Option<bool>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct JvmTrait {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Activates remote debugging, so that a debugger can be attached to the JVM, e.g., using port-forwarding
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
    /// Suspends the target JVM immediately before the main class is loaded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suspend: Option<bool>,
    /// Prints the command used the start the JVM in the container logs (default `true`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub print_command: Option<bool>,
    /// Transport address at which to listen for the newly launched JVM (default `*:5005`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_address: Option<String>,
    /// A list of JVM options
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// Additional JVM classpath (use `Linux` classpath separator)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classpath: Option<String>,
    /// The Jar dependency which will run the application. Leave it empty for managed Integrations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jar: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KameletsTrait {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Automatically inject all referenced Kamelets and their default configuration (enabled by default)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto: Option<bool>,
    /// Comma separated list of Kamelet names to load into the current integration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<String>,
    /// The directory where the application mounts and reads Kamelet spec (default `/etc/camel/kamelets`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mount_point: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoggingTrait {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Colorize the log output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
    /// Logs message format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Adjust the logging level (defaults to `INFO`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    /// Output the logs in JSON
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json: Option<bool>,
    /// Enable "pretty printing" of the JSON logs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_pretty_print: Option<bool>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MountTrait {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// A list of configuration pointing to configmap/secret.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configs: Option<Vec<String>>,
    /// A list of resources (text or binary content) pointing to configmap/secret.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<String>>,
    /// A list of Persistent Volume Claims to be mounted. Syntax: [pvcname:/container/path]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volumes: Option<Vec<String>>,
    /// A list of EmptyDir volumes to be mounted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty_dirs: Option<Vec<String>>,
    /// Enable "hot reload" when a secret/configmap mounted is edited (default `false`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hot_reload: Option<bool>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerTrait {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// The set of annotations to be transferred
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_annotations: Option<Vec<String>>,
    /// The set of labels to be transferred
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_labels: Option<Vec<String>>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PdbTrait {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// The number of pods for the Integration that must still be available after an eviction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_available: Option<String>,
    /// The number of pods for the Integration that can be unavailable after an eviction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_unavailable: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlatformTrait {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// To create a default (empty) platform when the platform is missing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_default: Option<bool>,
    /// Indicates if the platform should be created globally in the case of global operator (default true).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global: Option<bool>,
    /// To automatically detect from the environment if a default platform can be created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto: Option<bool>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, JsonSchema)]
pub struct PodTrait {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrometheusTrait {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Whether a `PodMonitor` resource is created (default `true`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pod_monitor: Option<bool>,
    /// The `PodMonitor` resource labels, applicable when `pod-monitor` is `true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pod_monitor_labels: Option<Vec<String>>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PullSecretTrait {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// The pull secret name to set on the Pod. If left empty this is automatically taken from the `IntegrationPlatform` registry configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_name: Option<String>,
    /// When using a global operator with a shared platform, this enables delegation of the `system:image-puller` cluster role on the operator namespace to the integration service account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_puller_delegation: Option<bool>,
    /// Automatically configures the platform registry secret on the pod if it is of type `kubernetes.io/dockerconfigjson`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto: Option<bool>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuarkusTrait {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// The Quarkus mode to run: either `jvm` or `native` (default `jvm`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_mode: Option<Vec<String>>,
    /// The base image to use when running a native build (default `quay.io/quarkus/quarkus-micro-image:2.0`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native_base_image: Option<String>,
    /// The image containing the tooling required for a native build (by default it will use the one provided in the runtime catalog)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native_builder_image: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RouteTrait {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// The annotations added to route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
    /// To configure the host exposed by the route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// The TLS termination type, like `edge`, `passthrough` or `reencrypt`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_termination: Option<String>,
    /// The TLS certificate contents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_certificate: Option<String>,
    /// The secret name and key reference to the TLS certificate. The format is "secret-name[/key-name]".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_certificate_secret: Option<String>,
    /// The TLS certificate key contents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_key: Option<String>,
    /// The secret name and key reference to the TLS certificate key. The format is "secret-name[/key-name]".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_key_secret: Option<String>,
    /// The TLS CA certificate contents.
    #[serde(default, rename = "tlsCACertificate", skip_serializing_if = "Option::is_none")]
    pub tls_ca_certificate: Option<String>,
    /// The secret name and key reference to the TLS CA certificate. The format is "secret-name[/key-name]".
    #[serde(default, rename = "tlsCACertificateSecret", skip_serializing_if = "Option::is_none")]
    pub tls_ca_certificate_secret: Option<String>,
    /// The destination CA certificate provides the contents of the ca certificate of the final destination.
    #[serde(default, rename = "tlsDestinationCACertificate", skip_serializing_if = "Option::is_none")]
    pub tls_destination_ca_certificate: Option<String>,
    /// The secret name and key reference to the destination CA certificate. The format is "secret-name[/key-name]".
    #[serde(default, rename = "tlsDestinationCACertificateSecret", skip_serializing_if = "Option::is_none")]
    pub tls_destination_ca_certificate_secret: Option<String>,
    /// To configure how to deal with insecure traffic, e.g. `Allow`, `Disable` or `Redirect` traffic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_insecure_edge_termination_policy: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTrait {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// To automatically detect from the code if a Service needs to be created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto: Option<bool>,
    /// Enable Service to be exposed as NodePort (default `false`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_port: Option<bool>,
    /// The type of service to be used, either 'ClusterIP', 'NodePort' or 'LoadBalancer'.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    /// The annotations added to the Service object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
    /// The labels added to the Service object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, JsonSchema)]
pub struct ServiceBindingTrait {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// List of Services in the form [[apigroup/]version:]kind:[namespace/]name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<String>>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, JsonSchema)]
pub struct TolerationTrait {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// The list of taints to tolerate, in the form `Key[=Value]:Effect[:Seconds]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taints: Option<Vec<String>>,
}

impl ProviderKind for Integration {
    type SpecModel = IntegrationSpec;

    fn description() -> &'static str {
        "Integration is the Schema for the integrations API."
    }

    fn spec_attributes() -> Vec<Attribute> {
        vec![
            Attribute::list_nested("configuration", vec![
                Attribute::string("type")
                    .description("represents the type of configuration, ie: property, configmap, secret, ...")
                    .required(),
                Attribute::string("value")
                    .description("the value to assign to the configuration (syntax may vary depending on the 'Type')")
                    .required(),
            ]).description("Deprecated: Use camel trait (camel.properties) to manage properties. Use mount trait (mount.configs) to manage configs. Use mount trait (mount.resources) to manage resources. Use mount trait (mount.volumes) to manage volumes."),
            Attribute::list("dependencies", ElementType::String)
                .description("the list of Camel or Maven dependencies required by the Integration"),
            Attribute::dynamic("flows").description("a source in YAML DSL language which contain the routes to run"),
            Attribute::single_nested("integrationKit", object_reference_attributes())
                .description("the reference of the 'IntegrationKit' which is used for this Integration"),
            Attribute::string("profile").description("the profile needed to run this Integration"),
            Attribute::int32("replicas").description("the number of 'Pods' needed for the running Integration"),
            Attribute::list("repositories", ElementType::String).description("additional Maven repositories to be used"),
            Attribute::string("serviceAccountName").description("custom SA to use for the Integration"),
            Attribute::list_nested("sources", source_attributes())
                .description("the sources which contain the Camel routes to run"),
            Attribute::dynamic("template").description("Pod template customization"),
            Attribute::single_nested("traits", trait_attributes())
                .description("the traits needed to run this Integration"),
        ]
    }
}

fn object_reference_attributes() -> Vec<Attribute> {
    vec![
        Attribute::string("apiVersion").description("API version of the referent."),
        Attribute::string("fieldPath").description("If referring to a piece of an object instead of an entire object, this string should contain a valid JSON/Go field access statement, such as desiredState.manifest.containers[2]."),
        Attribute::string("kind").description("Kind of the referent."),
        Attribute::string("name").description("Name of the referent."),
        Attribute::string("namespace").description("Namespace of the referent."),
        Attribute::string("resourceVersion").description("Specific resourceVersion to which this reference is made, if any."),
        Attribute::string("uid").description("UID of the referent."),
    ]
}

fn enabled() -> Attribute {
    Attribute::bool("enabled")
        .description("Can be used to enable or disable a trait. All traits share this common property.")
}

fn trait_attributes() -> Vec<Attribute> {
    vec![
        Attribute::dynamic("addons").description("The extension point with addon traits"),
        Attribute::single_nested("affinity", vec![
            enabled(),
            Attribute::bool("podAffinity").description("Always co-locates multiple replicas of the integration in the same node (default 'false')."),
            Attribute::bool("podAntiAffinity").description("Never co-locates multiple replicas of the integration in the same node (default 'false')."),
            Attribute::list("nodeAffinityLabels", ElementType::String).description("Defines a set of nodes the integration pod(s) are eligible to be scheduled on, based on labels on the node."),
            Attribute::list("podAffinityLabels", ElementType::String).description("Defines a set of pods (namely those matching the label selector, relative to the given namespace) that the integration pod(s) should be co-located with."),
            Attribute::list("podAntiAffinityLabels", ElementType::String).description("Defines a set of pods (namely those matching the label selector, relative to the given namespace) that the integration pod(s) should not be co-located with."),
        ]).description("Allows constraining which nodes the integration pod(s) are eligible to be scheduled on."),
        Attribute::single_nested("builder", vec![
            enabled(),
            Attribute::bool("verbose").description("Enable verbose logging on build components that support it (e.g. OpenShift build pod)."),
            Attribute::list("properties", ElementType::String).description("A list of properties to be provided to the build task"),
            Attribute::string("strategy")
                .description("The strategy to use, either 'pod' or 'routine' (default 'routine')")
                .validator(Validator::one_of(&["pod", "routine"])),
            Attribute::string("orderStrategy")
                .description("The build order strategy to use, either 'dependencies', 'fifo' or 'sequential' (default 'sequential')")
                .validator(Validator::one_of(&["dependencies", "fifo", "sequential"])),
            Attribute::string("requestCPU").description("When using 'pod' strategy, the minimum amount of CPU required by the pod builder."),
            Attribute::string("requestMemory").description("When using 'pod' strategy, the minimum amount of memory required by the pod builder."),
            Attribute::string("limitCPU").description("When using 'pod' strategy, the maximum amount of CPU required by the pod builder."),
            Attribute::string("limitMemory").description("When using 'pod' strategy, the maximum amount of memory required by the pod builder."),
            Attribute::list("mavenProfiles", ElementType::String).description("A list of references pointing to configmaps/secrets that contains a maven profile."),
            Attribute::bool("incrementalImageBuild").description("Use the incremental image build option, to reuse existing containers (default 'true')"),
            Attribute::string("baseImage").description("Specify a base image. In order to have the application working properly it must be a container image which has a Java JDK installed and ready to use on path (ie '/usr/bin/java')."),
            Attribute::map("nodeSelector", ElementType::String).description("Defines a set of nodes the builder pod is eligible to be scheduled on, based on labels on the node."),
        ]).description("The configuration of Builder trait"),
        Attribute::single_nested("camel", vec![
            enabled(),
            Attribute::list("properties", ElementType::String).description("A list of properties to be provided to the Integration runtime"),
            Attribute::string("runtimeVersion").description("The camel-k-runtime version to use for the integration. It overrides the default version set in the Integration Platform."),
        ]).description("The configuration of Camel trait"),
        Attribute::single_nested("container", vec![
            enabled(),
            Attribute::bool("auto").description("To automatically enable the trait"),
            Attribute::string("requestCPU").description("The minimum amount of CPU required (default 125 millicores)."),
            Attribute::string("requestMemory").description("The minimum amount of memory required (default 128 Mi)."),
            Attribute::string("limitCPU").description("The maximum amount of CPU to be provided (default 500 millicores)."),
            Attribute::string("limitMemory").description("The maximum amount of memory to be provided (default 512 Mi)."),
            Attribute::bool("expose").description("Can be used to enable/disable exposure via kubernetes Service."),
            Attribute::int32("port").description("To configure a different port exposed by the container (default '8080')."),
            Attribute::string("portName").description("To configure a different port name for the port exposed by the container."),
            Attribute::int32("servicePort").description("To configure under which service port the container port is to be exposed (default '80')."),
            Attribute::string("servicePortName").description("To configure under which service port name the container port is to be exposed (default 'http')."),
            Attribute::string("name").description("The main container name. It's named 'integration' by default."),
            Attribute::string("image").description("The main container image to use for the Integration."),
            Attribute::string("imagePullPolicy")
                .description("The pull policy: Always|Never|IfNotPresent")
                .validator(Validator::one_of(&["Always", "Never", "IfNotPresent"])),
        ]).description("The configuration of Container trait"),
        Attribute::single_nested("cron", vec![
            enabled(),
            Attribute::string("schedule").description("The CronJob schedule for the whole integration."),
            Attribute::string("components").description("A comma separated list of the Camel components that need to be customized in order for them to work when the schedule is triggered externally by Kubernetes."),
            Attribute::bool("fallback").description("Use the default Camel implementation of the 'cron' endpoint ('quartz') instead of trying to materialize the integration as Kubernetes CronJob."),
            Attribute::string("concurrencyPolicy")
                .description("Specifies how to treat concurrent executions of a Job.")
                .validator(Validator::one_of(&["Allow", "Forbid", "Replace"])),
            Attribute::bool("auto").description("Automatically deploy the integration as CronJob when all routes are either starting from a periodic consumer or a 'cron', 'timer' or 'quartz' endpoint."),
            Attribute::int64("startingDeadlineSeconds").description("Optional deadline in seconds for starting the job if it misses scheduled time for any reason."),
            Attribute::int64("activeDeadlineSeconds").description("Specifies the duration in seconds, relative to the start time, that the job may be continuously active before it is considered to be failed."),
            Attribute::int32("backoffLimit").description("Specifies the number of retries before marking the job failed."),
            Attribute::string("timeZone").description("The timezone that the CronJob will run on"),
        ]).description("The configuration of Cron trait"),
        Attribute::single_nested("dependencies", vec![enabled()])
            .description("The configuration of Dependencies trait"),
        Attribute::single_nested("deployer", vec![
            enabled(),
            Attribute::string("kind")
                .description("Allows to explicitly select the desired deployment kind between 'deployment', 'cron-job' or 'knative-service' when creating the resources for running the integration.")
                .validator(Validator::one_of(&["deployment", "cron-job", "knative-service"])),
            Attribute::bool("useSSA").description("Use server-side apply to update the owned resources (default 'true')."),
        ]).description("The configuration of Deployer trait"),
        Attribute::single_nested("deployment", vec![
            enabled(),
            Attribute::int32("progressDeadlineSeconds").description("The maximum time in seconds for the deployment to make progress before it is considered to be failed."),
            Attribute::string("strategy")
                .description("The deployment strategy to use to replace existing pods with new ones.")
                .validator(Validator::one_of(&["Recreate", "RollingUpdate"])),
        ]).description("The configuration of Deployment trait"),
        Attribute::single_nested("environment", vec![
            enabled(),
            Attribute::bool("containerMeta").description("Enables injection of 'NAMESPACE' and 'POD_NAME' environment variables (default 'true')"),
            Attribute::bool("httpProxy").description("Propagates the 'HTTP_PROXY', 'HTTPS_PROXY' and 'NO_PROXY' environment variables (default 'true')"),
            Attribute::list("vars", ElementType::String).description("A list of environment variables to be added to the integration container."),
        ]).description("The configuration of Environment trait"),
        Attribute::single_nested("gc", vec![
            enabled(),
            Attribute::string("discoveryCache")
                .description("Discovery client cache to be used, either 'disabled', 'disk' or 'memory' (default 'memory')."),
        ]).description("The configuration of GC trait"),
        Attribute::single_nested("health", vec![
            enabled(),
            Attribute::bool("livenessProbeEnabled").description("Configures the liveness probe for the integration container (default 'false')."),
            Attribute::string("livenessScheme").description("Scheme to use when connecting to the liveness probe (default 'HTTP')."),
            Attribute::int32("livenessInitialDelay").description("Number of seconds after the container has started before the liveness probe is initiated."),
            Attribute::int32("livenessTimeout").description("Number of seconds after which the liveness probe times out."),
            Attribute::int32("livenessPeriod").description("How often to perform the liveness probe."),
            Attribute::int32("livenessSuccessThreshold").description("Minimum consecutive successes for the liveness probe to be considered successful after having failed."),
            Attribute::int32("livenessFailureThreshold").description("Minimum consecutive failures for the liveness probe to be considered failed after having succeeded."),
            Attribute::bool("readinessProbeEnabled").description("Configures the readiness probe for the integration container (default 'true')."),
            Attribute::string("readinessScheme").description("Scheme to use when connecting to the readiness probe (default 'HTTP')."),
            Attribute::int32("readinessInitialDelay").description("Number of seconds after the container has started before the readiness probe is initiated."),
            Attribute::int32("readinessTimeout").description("Number of seconds after which the readiness probe times out."),
            Attribute::int32("readinessPeriod").description("How often to perform the readiness probe."),
            Attribute::int32("readinessSuccessThreshold").description("Minimum consecutive successes for the readiness probe to be considered successful after having failed."),
            Attribute::int32("readinessFailureThreshold").description("Minimum consecutive failures for the readiness probe to be considered failed after having succeeded."),
        ]).description("The configuration of Health trait"),
        Attribute::single_nested("ingress", vec![
            enabled(),
            Attribute::map("annotations", ElementType::String).description("The annotations added to the ingress."),
            Attribute::string("host").description("To configure the host exposed by the ingress."),
            Attribute::string("path").description("To configure the path exposed by the ingress (default '/')."),
            Attribute::string("pathType")
                .description("To configure the path type exposed by the ingress. One of 'Exact', 'Prefix', 'ImplementationSpecific' (default to 'Prefix').")
                .validator(Validator::one_of(&["Exact", "Prefix", "ImplementationSpecific"])),
            Attribute::list("tlsHosts", ElementType::String).description("To configure tls hosts"),
            Attribute::string("tlsSecretName").description("To configure tls secret name"),
            Attribute::bool("auto").description("To automatically add an ingress whenever the integration uses an HTTP endpoint consumer."),
        ]).description("The configuration of Ingress trait"),
        Attribute::single_nested("jvm", vec![
            enabled(),
            Attribute::bool("debug").description("Activates remote debugging, so that a debugger can be attached to the JVM, e.g., using port-forwarding"),
            Attribute::bool("suspend").description("Suspends the target JVM immediately before the main class is loaded"),
            Attribute::bool("printCommand").description("Prints the command used the start the JVM in the container logs (default 'true')"),
            Attribute::string("debugAddress").description("Transport address at which to listen for the newly launched JVM (default '*:5005')"),
            Attribute::list("options", ElementType::String).description("A list of JVM options"),
            Attribute::string("classpath").description("Additional JVM classpath (use 'Linux' classpath separator)"),
            Attribute::string("jar").description("The Jar dependency which will run the application. Leave it empty for managed Integrations."),
        ]).description("The configuration of JVM trait"),
        Attribute::single_nested("kamelets", vec![
            enabled(),
            Attribute::bool("auto").description("Automatically inject all referenced Kamelets and their default configuration (enabled by default)"),
            Attribute::string("list").description("Comma separated list of Kamelet names to load into the current integration"),
            Attribute::string("mountPoint").description("The directory where the application mounts and reads Kamelet spec (default '/etc/camel/kamelets')"),
        ]).description("The configuration of Kamelets trait"),
        Attribute::single_nested("logging", vec![
            enabled(),
            Attribute::bool("color").description("Colorize the log output"),
            Attribute::string("format").description("Logs message format"),
            Attribute::string("level").description("Adjust the logging level (defaults to 'INFO')"),
            Attribute::bool("json").description("Output the logs in JSON"),
            Attribute::bool("jsonPrettyPrint").description("Enable 'pretty printing' of the JSON logs"),
        ]).description("The configuration of Logging trait"),
        Attribute::single_nested("mount", vec![
            enabled(),
            Attribute::list("configs", ElementType::String).description("A list of configuration pointing to configmap/secret."),
            Attribute::list("resources", ElementType::String).description("A list of resources (text or binary content) pointing to configmap/secret."),
            Attribute::list("volumes", ElementType::String).description("A list of Persistent Volume Claims to be mounted. Syntax: [pvcname:/container/path]"),
            Attribute::list("emptyDirs", ElementType::String).description("A list of EmptyDir volumes to be mounted."),
            Attribute::bool("hotReload").description("Enable 'hot reload' when a secret/configmap mounted is edited (default 'false')."),
        ]).description("The configuration of Mount trait"),
        Attribute::single_nested("owner", vec![
            enabled(),
            Attribute::list("targetAnnotations", ElementType::String).description("The set of annotations to be transferred"),
            Attribute::list("targetLabels", ElementType::String).description("The set of labels to be transferred"),
        ]).description("The configuration of Owner trait"),
        Attribute::single_nested("pdb", vec![
            enabled(),
            Attribute::string("minAvailable").description("The number of pods for the Integration that must still be available after an eviction."),
            Attribute::string("maxUnavailable").description("The number of pods for the Integration that can be unavailable after an eviction."),
        ]).description("The configuration of PDB trait"),
        Attribute::single_nested("platform", vec![
            enabled(),
            Attribute::bool("createDefault").description("To create a default (empty) platform when the platform is missing."),
            Attribute::bool("global").description("Indicates if the platform should be created globally in the case of global operator (default true)."),
            Attribute::bool("auto").description("To automatically detect from the environment if a default platform can be created."),
        ]).description("The configuration of Platform trait"),
        Attribute::single_nested("pod", vec![enabled()])
            .description("The configuration of Pod trait"),
        Attribute::single_nested("prometheus", vec![
            enabled(),
            Attribute::bool("podMonitor").description("Whether a 'PodMonitor' resource is created (default 'true')."),
            Attribute::list("podMonitorLabels", ElementType::String).description("The 'PodMonitor' resource labels, applicable when 'pod-monitor' is 'true'."),
        ]).description("The configuration of Prometheus trait"),
        Attribute::single_nested("pull-secret", vec![
            enabled(),
            Attribute::string("secretName").description("The pull secret name to set on the Pod. If left empty this is automatically taken from the 'IntegrationPlatform' registry configuration."),
            Attribute::bool("imagePullerDelegation").description("When using a global operator with a shared platform, this enables delegation of the 'system:image-puller' cluster role on the operator namespace to the integration service account."),
            Attribute::bool("auto").description("Automatically configures the platform registry secret on the pod if it is of type 'kubernetes.io/dockerconfigjson'."),
        ]).description("The configuration of Pull Secret trait"),
        Attribute::single_nested("quarkus", vec![
            enabled(),
            Attribute::list("buildMode", ElementType::String).description("The Quarkus mode to run: either 'jvm' or 'native' (default 'jvm')."),
            Attribute::string("nativeBaseImage").description("The base image to use when running a native build (default 'quay.io/quarkus/quarkus-micro-image:2.0')"),
            Attribute::string("nativeBuilderImage").description("The image containing the tooling required for a native build (by default it will use the one provided in the runtime catalog)"),
        ]).description("The configuration of Quarkus trait"),
        Attribute::single_nested("route", vec![
            enabled(),
            Attribute::map("annotations", ElementType::String).description("The annotations added to route."),
            Attribute::string("host").description("To configure the host exposed by the route."),
            Attribute::string("tlsTermination")
                .description("The TLS termination type, like 'edge', 'passthrough' or 'reencrypt'.")
                .validator(Validator::one_of(&["edge", "reencrypt", "passthrough"])),
            Attribute::string("tlsCertificate").description("The TLS certificate contents.").sensitive(),
            Attribute::string("tlsCertificateSecret").description("The secret name and key reference to the TLS certificate. The format is 'secret-name[/key-name]'."),
            Attribute::string("tlsKey").description("The TLS certificate key contents.").sensitive(),
            Attribute::string("tlsKeySecret").description("The secret name and key reference to the TLS certificate key. The format is 'secret-name[/key-name]'."),
            Attribute::string("tlsCACertificate").description("The TLS CA certificate contents."),
            Attribute::string("tlsCACertificateSecret").description("The secret name and key reference to the TLS CA certificate. The format is 'secret-name[/key-name]'."),
            Attribute::string("tlsDestinationCACertificate").description("The destination CA certificate provides the contents of the ca certificate of the final destination."),
            Attribute::string("tlsDestinationCACertificateSecret").description("The secret name and key reference to the destination CA certificate. The format is 'secret-name[/key-name]'."),
            Attribute::string("tlsInsecureEdgeTerminationPolicy")
                .description("To configure how to deal with insecure traffic, e.g. 'Allow', 'Disable' or 'Redirect' traffic.")
                .validator(Validator::one_of(&["None", "Allow", "Redirect"])),
        ]).description("The configuration of Route trait"),
        Attribute::single_nested("service", vec![
            enabled(),
            Attribute::bool("auto").description("To automatically detect from the code if a Service needs to be created."),
            Attribute::bool("nodePort").description("Enable Service to be exposed as NodePort (default 'false')."),
            Attribute::string("type")
                .description("The type of service to be used, either 'ClusterIP', 'NodePort' or 'LoadBalancer'.")
                .validator(Validator::one_of(&["ClusterIP", "NodePort", "LoadBalancer"])),
            Attribute::map("annotations", ElementType::String).description("The annotations added to the Service object."),
            Attribute::map("labels", ElementType::String).description("The labels added to the Service object."),
        ]).description("The configuration of Service trait"),
        Attribute::single_nested("service-binding", vec![
            enabled(),
            Attribute::list("services", ElementType::String).description("List of Services in the form [[apigroup/]version:]kind:[namespace/]name"),
        ]).description("The configuration of Service Binding trait"),
        Attribute::single_nested("toleration", vec![
            enabled(),
            Attribute::list("taints", ElementType::String).description("The list of taints to tolerate, in the form 'Key[=Value]:Effect[:Seconds]'"),
        ]).description("The configuration of Toleration trait"),
    ]
}
