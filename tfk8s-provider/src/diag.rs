use std::fmt::{Display, Formatter, Result as FmtResult};
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// Path to an attribute inside a configuration or state value, e.g. `metadata.name`
/// or `spec.sources.0.name`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct AttributePath(Vec<String>);

impl AttributePath {
    pub fn root(name: &str) -> Self {
        AttributePath(vec![name.to_string()])
    }

    pub fn child(&self, step: impl Into<String>) -> Self {
        let mut steps = self.0.clone();
        steps.push(step.into());
        AttributePath(steps)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for AttributePath {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}", self.0.join("."))
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<AttributePath>,
}

impl Diagnostic {
    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Error,
            summary: summary.into(),
            detail: detail.into(),
            attribute: None,
        }
    }

    pub fn warning(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            summary: summary.into(),
            detail: detail.into(),
            attribute: None,
        }
    }

    pub fn with_attribute(mut self, path: AttributePath) -> Self {
        self.attribute = Some(path);
        self
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }

    pub fn add_attribute_error(&mut self, path: AttributePath, summary: impl Into<String>, detail: impl Into<String>) {
        self.push(Diagnostic::error(summary, detail).with_attribute(path));
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.0.extend(other.0);
    }

    pub fn has_error(&self) -> bool {
        self.0.iter().any(|d| d.severity == Severity::Error)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }
}

impl From<Diagnostic> for Diagnostics {
    fn from(diagnostic: Diagnostic) -> Self {
        Diagnostics(vec![diagnostic])
    }
}

impl From<&ProviderError> for Diagnostic {
    fn from(error: &ProviderError) -> Self {
        let summary = match error {
            ProviderError::KubeError(_) => "Kubernetes API Error",
            ProviderError::KubeconfigError(_) | ProviderError::InferConfigError(_) => "Unable to Create Kubernetes Client",
            ProviderError::MarshalError(..) => "Unable to marshal response",
            ProviderError::UnmarshalError(..) => "Unable to unmarshal KUBERNETES response",
            ProviderError::InvalidConfiguration(..) => "Invalid Configuration",
            ProviderError::ManifestError(_) => "Unable to render manifest",
            ProviderError::ConfigError(_) => "Invalid Provider Configuration",
            ProviderError::InvalidImportId(_) => "Unexpected Import Identifier",
            ProviderError::MissingObjectKeyError(_) => "Missing Attribute",
        };
        Diagnostic::error(summary, error.to_string())
    }
}
