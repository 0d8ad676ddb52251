use kube::Client;
use std::sync::Arc;

use tfk8s_common::constant::DEFAULT_FIELD_MANAGER;
use tfk8s_common::state::State;

// Context struct to hold the kube client and the state of a configured provider
#[derive(Clone)]
pub struct Context {
    pub client: Client,
    pub state: Option<Arc<State>>,
}

impl Context {
    pub fn new(client: Client) -> Self {
        Self { client, state: None }
    }

    pub fn with_state(mut self, state: Arc<State>) -> Self {
        self.state = Some(state);
        self
    }

    pub fn field_manager(&self) -> &str {
        self.state
            .as_ref()
            .map(|state| state.config.provider.field_manager.as_str())
            .unwrap_or(DEFAULT_FIELD_MANAGER)
    }
}
