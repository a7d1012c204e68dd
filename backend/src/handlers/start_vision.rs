use std::sync::Arc;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::delivery::deliver_lead;
use crate::error::ApiError;
use crate::models::lead_models::{LeadFormPayload, SubmissionResult};
use crate::AppState;

pub async fn start_vision(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LeadFormPayload>, JsonRejection>,
) -> Result<Json<SubmissionResult>, ApiError> {
    let Json(lead) = payload.map_err(|rejection| {
        tracing::error!("Failed to parse vision request: {}", rejection.body_text());
        ApiError::Malformed(rejection.body_text())
    })?;

    // answered exactly like a real submission
    if lead.is_bot() {
        tracing::info!("Honeypot field filled, discarding submission");
        return Ok(Json(SubmissionResult::ok()));
    }

    let missing = lead.missing_required();
    if !missing.is_empty() {
        tracing::warn!("Rejecting vision request, missing fields: {:?}", missing);
        return Err(ApiError::BadRequest(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    tracing::info!("Vision request received from {}", lead.name.trim());
    tracing::debug!("Vision request contact: {}, city: {}", lead.contact, lead.city);

    if state.email.is_none() && state.sheets.is_none() {
        tracing::warn!("No delivery channel configured, vision request from {} is not stored", lead.name.trim());
    }

    let deliveries = deliver_lead(&state, &lead).await;
    if deliveries.iter().any(|d| d.is_failure()) {
        tracing::error!("Vision request from {} partially failed: {:?}", lead.name.trim(), deliveries);
        return Err(ApiError::Delivery(deliveries));
    }

    Ok(Json(SubmissionResult::ok().with_deliveries(deliveries)))
}
