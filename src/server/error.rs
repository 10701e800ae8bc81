use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::core::UnknownCategory;
use crate::shared::form::MSG_SUBMIT_FAILED;

/// Body-Text für unerwartete Fehler (ungültiger Body, Panic).
pub const MSG_INTERNAL: &str = "Internal server error";
const MSG_LOCATIONS_FAILED: &str = "Failed to load locations";

/// Fehler der HTTP-Handler; jeder Fall wird zu `{"error": "..."}`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to submit location")]
    SubmitFailed,

    #[error("Failed to load locations")]
    LocationsUnavailable,

    #[error(transparent)]
    UnknownCategory(#[from] UnknownCategory),

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::UnknownCategory(_) => StatusCode::BAD_REQUEST,
            ApiError::SubmitFailed | ApiError::LocationsUnavailable | ApiError::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn public_message(&self) -> String {
        match self {
            ApiError::SubmitFailed => MSG_SUBMIT_FAILED.to_string(),
            ApiError::LocationsUnavailable => MSG_LOCATIONS_FAILED.to_string(),
            ApiError::UnknownCategory(err) => err.to_string(),
            ApiError::Internal => MSG_INTERNAL.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.public_message() }))).into_response()
    }
}
