#![allow(dead_code)]

use httpmock::{HttpMockRequest, Mock, MockServer, Then, When};
use serde_json::{json, Value};
use std::sync::Arc;

use tfk8s_common::state::State;
use tfk8s_provider::context::Context;

pub const INTEGRATIONS_PATH: &str = "/apis/camel.apache.org/v1/namespaces/camel/integrations";

pub struct FakeApiServer {
    server: MockServer,
    handlers: Vec<Box<dyn Fn(When, Then)>>,
    mock_ids: Vec<usize>,
}

fn print_req(req: &HttpMockRequest) -> bool {
    println!("    Received: {:?} {}", req.method(), req.uri().path());
    true
}

impl FakeApiServer {
    pub fn new() -> FakeApiServer {
        FakeApiServer {
            server: MockServer::start(),
            handlers: vec![],
            mock_ids: vec![],
        }
    }

    pub fn assert(&self) {
        for id in &self.mock_ids {
            Mock::new(*id, &self.server).assert()
        }
    }

    pub fn handle<F: Fn(When, Then) + 'static>(&mut self, f: F) -> &mut Self {
        self.handlers.push(Box::new(move |w, t| {
            let w = w.matches(print_req);
            f(w, t);
        }));
        self
    }

    pub fn handle_status(&mut self, method: &'static str, path: String, code: u16, reason: &'static str) -> &mut Self {
        self.handle(move |when, then| {
            when.method(method).path(&path);
            then.status(code).json_body(status_failure(code, reason));
        })
    }

    pub fn build(&mut self) {
        for f in self.handlers.iter() {
            self.mock_ids.push(self.server.mock(f).id);
        }

        // logs unmatched requests, registered last so the handlers above match first
        self.server.mock(|when, _| {
            when.matches(print_req);
        });
    }

    pub fn client(&self) -> kube::Client {
        let config = kube::Config::new(self.server.url("/").parse().unwrap());
        kube::Client::try_from(config).unwrap()
    }
}

pub fn make_fake_apiserver() -> (FakeApiServer, Arc<Context>) {
    let server = FakeApiServer::new();
    let context = Context::new(server.client()).with_state(Arc::new(State::default()));
    (server, Arc::new(context))
}

pub fn status_ok() -> Value {
    json!({
      "kind": "Status",
      "apiVersion": "v1",
      "metadata": {},
      "status": "Success",
      "code": 200
    })
}

pub fn status_failure(code: u16, reason: &str) -> Value {
    json!({
      "kind": "Status",
      "apiVersion": "v1",
      "metadata": {},
      "status": "Failure",
      "message": format!("request failed with {}", reason),
      "reason": reason,
      "code": code
    })
}

/// An Integration as served by the API server, including fields the schema does not model
pub fn integration_object() -> Value {
    json!({
        "apiVersion": "camel.apache.org/v1",
        "kind": "Integration",
        "metadata": {
            "name": "hello",
            "namespace": "camel",
            "uid": "4b3e2f8c-6a0d-4f5e-9d43-0b1f1c2a7e11",
            "resourceVersion": "1042",
            "generation": 2,
            "labels": {"app.kubernetes.io/name": "hello"},
            "annotations": {"camel.apache.org/operator.id": "camel-k"},
            "managedFields": [{
                "manager": "terraform-provider-k8s",
                "operation": "Apply",
                "apiVersion": "camel.apache.org/v1",
                "fieldsType": "FieldsV1",
                "fieldsV1": {"f:spec": {"f:replicas": {}}}
            }]
        },
        "spec": {
            "replicas": 2,
            "serviceAccountName": "camel-runner",
            "dependencies": ["camel:timer", "camel:log"],
            "configuration": [{"type": "property", "value": "greeting=hi"}],
            "flows": [{
                "from": {
                    "uri": "timer:tick",
                    "parameters": {"period": "5000"},
                    "steps": [{"to": "log:info"}]
                }
            }],
            "sources": [{"name": "Hello.java", "language": "java", "content": "class Hello {}"}],
            "traits": {
                "container": {"imagePullPolicy": "Always", "requestCPU": "250m"},
                "pull-secret": {"secretName": "registry"},
                "route": {"tlsCACertificateSecret": "ca/tls.crt"},
                "builder": {"nodeSelector": {"kubernetes.io/arch": "amd64"}},
                "addons": {"master": {"enabled": true}},
                "unknownTrait": {"enabled": true}
            }
        },
        "status": {
            "phase": "Running",
            "replicas": 2
        }
    })
}
