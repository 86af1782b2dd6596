//! Response composition for dispatch failures.
//!
//! Maps a failed dispatch to exactly one caller-facing response: validation
//! failures surface the missing field names with a 400, everything else
//! collapses to the endpoint's generic 500 message. Full detail is always
//! logged server-side and never returned.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::AppError;

use super::models::ErrorResponse;

/// A dispatch failure paired with the endpoint's generic failure message.
#[derive(Debug)]
pub struct ApiFailure {
    error: AppError,
    fallback: &'static str,
}

impl ApiFailure {
    pub(crate) fn new(error: AppError, fallback: &'static str) -> Self {
        Self { error, fallback }
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        let (status, client_message) = match &self.error {
            AppError::Validation { missing } => (
                StatusCode::BAD_REQUEST,
                format!("Missing required fields: {}", missing.join(", ")),
            ),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, self.fallback.to_string()),
        };

        // Always log the detailed error server-side
        tracing::error!(
            status = %status.as_u16(),
            error = %self.error,
            "dispatch failed"
        );

        let body = ErrorResponse {
            error: client_message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DispatchStage;

    #[test]
    fn test_validation_maps_to_400_with_field_names() {
        let failure = ApiFailure::new(
            AppError::Validation {
                missing: vec!["feedback".to_string()],
            },
            "Error processing after demo form submission",
        );

        let response = failure.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_transport_maps_to_500() {
        let failure = ApiFailure::new(
            AppError::Transport {
                stage: DispatchStage::PrimarySend,
                message: "connection reset".to_string(),
            },
            "Error sending email",
        );

        let response = failure.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_config_maps_to_500() {
        let failure = ApiFailure::new(
            AppError::Config("credentials missing".to_string()),
            "Error sending email",
        );

        let response = failure.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
