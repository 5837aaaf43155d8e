//! REST endpoints for the onboarding wizard.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use crate::error::OnboardingError;

use super::manager::OnboardingManager;

/// Shared state for onboarding routes.
#[derive(Clone)]
pub struct OnboardingRouteState {
    pub manager: Arc<OnboardingManager>,
}

/// Build the onboarding REST routes.
pub fn onboarding_routes(state: OnboardingRouteState) -> Router {
    Router::new()
        .route("/api/onboarding/status", get(get_status))
        .route("/api/onboarding/steps", get(get_steps))
        .route("/api/onboarding/field", post(set_field))
        .route("/api/onboarding/next", post(next_step))
        .route("/api/onboarding/back", post(back_step))
        .with_state(state)
}

/// GET /api/onboarding/status
async fn get_status(State(state): State<OnboardingRouteState>) -> impl IntoResponse {
    Json(state.manager.status().await)
}

/// GET /api/onboarding/steps — the step definitions for rendering the form.
async fn get_steps(State(state): State<OnboardingRouteState>) -> impl IntoResponse {
    Json(state.manager.steps().await)
}

#[derive(Debug, Deserialize)]
struct SetFieldRequest {
    name: String,
    value: String,
}

/// POST /api/onboarding/field — store an answer for the current step.
async fn set_field(
    State(state): State<OnboardingRouteState>,
    Json(req): Json<SetFieldRequest>,
) -> impl IntoResponse {
    match state.manager.set_field(&req.name, &req.value).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e @ OnboardingError::UnknownField { .. }) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({ "error": e.to_string() })),
        )
            .into_response(),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}

/// POST /api/onboarding/next — advance, or run the terminal submit on the
/// last step. A blocked call is a successful no-op, not an error.
async fn next_step(State(state): State<OnboardingRouteState>) -> impl IntoResponse {
    match state.manager.next().await {
        Ok(action) => Json(action).into_response(),
        // Submission failure is transient and user-retriable.
        Err(e) => (
            StatusCode::BAD_GATEWAY,
            Json(serde_json::json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}

/// POST /api/onboarding/back
async fn back_step(State(state): State<OnboardingRouteState>) -> impl IntoResponse {
    let step = state.manager.back().await;
    Json(serde_json::json!({ "step": step }))
}
