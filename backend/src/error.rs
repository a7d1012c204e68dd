use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::lead_models::{DeliveryOutcome, SubmissionResult};

/// Failure of a single outbound call to an external provider.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{provider} returned {status}: {body}")]
    Api {
        provider: &'static str,
        status: u16,
        body: String,
    },
    #[error("email provider error: {0}")]
    Email(String),
    #[error("failed to sign token: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub const GENERIC_DELIVERY_ERROR: &str = "We couldn't record your request. Please try again.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Malformed(String),
    #[error("one or more delivery channels failed")]
    Delivery(Vec<DeliveryOutcome>),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, SubmissionResult::error(message)),
            ApiError::Malformed(message) => (StatusCode::INTERNAL_SERVER_ERROR, SubmissionResult::error(message)),
            ApiError::Delivery(deliveries) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                SubmissionResult::error(GENERIC_DELIVERY_ERROR).with_deliveries(deliveries),
            ),
        };
        (status, Json(body)).into_response()
    }
}
