use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::diag::{Diagnostic, Diagnostics};
use crate::error::{ProviderError, Result};

/// Result of an operation producing state. `state` is `None` when there is nothing to
/// store, either because of an error or because the remote object no longer exists.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct StateResponse {
    #[serde(default)]
    pub state: Option<Value>,
    #[serde(default)]
    pub diagnostics: Diagnostics,
}

impl StateResponse {
    pub fn with_state(state: Value) -> Self {
        StateResponse { state: Some(state), diagnostics: Diagnostics::new() }
    }

    pub fn gone() -> Self {
        Self::default()
    }

    pub fn with_diagnostics(diagnostics: Diagnostics) -> Self {
        StateResponse { state: None, diagnostics }
    }
}

impl From<Diagnostic> for StateResponse {
    fn from(diagnostic: Diagnostic) -> Self {
        Self::with_diagnostics(diagnostic.into())
    }
}

impl From<ProviderError> for StateResponse {
    fn from(error: ProviderError) -> Self {
        Diagnostic::from(&error).into()
    }
}

impl From<Result<Value>> for StateResponse {
    fn from(result: Result<Value>) -> Self {
        match result {
            Ok(state) => StateResponse::with_state(state),
            Err(e) => e.into(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct DiagnosticsResponse {
    #[serde(default)]
    pub diagnostics: Diagnostics,
}

impl From<Diagnostics> for DiagnosticsResponse {
    fn from(diagnostics: Diagnostics) -> Self {
        DiagnosticsResponse { diagnostics }
    }
}

impl From<Diagnostic> for DiagnosticsResponse {
    fn from(diagnostic: Diagnostic) -> Self {
        DiagnosticsResponse { diagnostics: diagnostic.into() }
    }
}
