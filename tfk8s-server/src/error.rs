// SPDX-FileCopyrightText: 2025 Timothy Pogue
//
// SPDX-License-Identifier: ISC

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use std::result;
use thiserror::Error as ThisError;

/// Error body of the plugin transport. `code` is the HTTP status followed by a two digit
/// reason, e.g. `40401`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct APIError {
    pub code: u32,
    pub message: String,
}

impl APIError {
    pub fn new(code: u32, message: String) -> Self {
        Self { code, message }
    }

    pub fn invalid_data_format(message: &str) -> Self {
        Self {
            code: 40002,
            message: message.to_string(),
        }
    }

    pub fn unknown_data_source(type_name: &str) -> Self {
        Self {
            code: 40401,
            message: format!("Unknown data source type: {}", type_name),
        }
    }

    pub fn unknown_resource(type_name: &str) -> Self {
        Self {
            code: 40402,
            message: format!("Unknown resource type: {}", type_name),
        }
    }

    pub fn status(&self) -> StatusCode {
        u16::try_from(self.code / 100)
            .ok()
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for APIError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

pub type APIResult<T> = result::Result<T, APIError>;

#[derive(ThisError, Debug)]
pub enum ServerError {
    #[error("invalid listen address `{0}`: {1}")]
    InvalidAddress(String, #[source] std::net::AddrParseError),
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(APIError::unknown_data_source("k8s_x"), StatusCode::NOT_FOUND)]
    #[case(APIError::unknown_resource("k8s_x"), StatusCode::NOT_FOUND)]
    #[case(APIError::invalid_data_format("bad"), StatusCode::BAD_REQUEST)]
    #[case(APIError::new(50000, "boom".to_string()), StatusCode::INTERNAL_SERVER_ERROR)]
    #[case(APIError::new(7, "nonsense".to_string()), StatusCode::INTERNAL_SERVER_ERROR)]
    fn status_from_code(#[case] error: APIError, #[case] status: StatusCode) {
        assert_eq!(error.status(), status);
        assert_eq!(error.into_response().status(), status);
    }
}
