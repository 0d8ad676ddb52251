// SPDX-FileCopyrightText: 2025 Timothy Pogue
//
// SPDX-License-Identifier: ISC

use std::result;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("kubernetes api error: {0}")]
    KubeError(#[from] kube::Error),
    #[error("failed to load kubeconfig: {0}")]
    KubeconfigError(#[from] kube::config::KubeconfigError),
    #[error("failed to infer kubernetes config: {0}")]
    InferConfigError(#[from] kube::config::InferConfigError),
    #[error("failed to marshal {0}: {1}")]
    MarshalError(&'static str, #[source] serde_json::Error),
    #[error("failed to unmarshal {0}: {1}")]
    UnmarshalError(&'static str, #[source] serde_json::Error),
    #[error("invalid {0}: {1}")]
    InvalidConfiguration(&'static str, #[source] serde_json::Error),
    #[error("failed to render manifest: {0}")]
    ManifestError(#[from] serde_norway::Error),
    #[error("invalid configuration: {0}")]
    ConfigError(#[from] figment::Error),
    #[error("invalid import id `{0}`, expected `namespace/name`")]
    InvalidImportId(String),
    #[error("missing object key: {0}")]
    MissingObjectKeyError(&'static str),
}

pub type Result<T> = result::Result<T, ProviderError>;

/// Whether a kube error is the API server reporting the object as missing
pub fn is_not_found(error: &kube::Error) -> bool {
    matches!(error, kube::Error::Api(response) if response.code == 404)
}
