use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::modules::events::core::ports::EventStoreError;

/// Why a required field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    NonBlank,
    ForDeletion,
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Requirement::NonBlank => f.write_str("required and cannot be null or empty"),
            Requirement::ForDeletion => f.write_str("required for deletion"),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EventError {
    #[error("'{field}' field is {requirement}")]
    MissingField {
        field: &'static str,
        requirement: Requirement,
    },

    #[error("event with name '{0}' already exists")]
    DuplicateName(String),

    #[error("event with name '{0}' not found")]
    NotFound(String),

    #[error("Invalid '{0}' parameter")]
    InvalidParameter(&'static str),

    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error(transparent)]
    Backend(#[from] EventStoreError),
}

impl EventError {
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField {
            field,
            requirement: Requirement::NonBlank,
        }
    }

    pub fn missing_name_for_deletion() -> Self {
        Self::MissingField {
            field: "name",
            requirement: Requirement::ForDeletion,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            EventError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            EventError::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

// Failures are reported as plain text carrying the error message.
impl IntoResponse for EventError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}
