//! Authentication collaborator — signup and logout delegate to an external
//! service; this module only carries the calls and surfaces their messages.

use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::AuthError;
use crate::onboarding::OnboardingManager;

/// External authentication service.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Register a new account. On success the service sends a verification
    /// email; on failure the message is surfaced to the user verbatim.
    async fn sign_up(&self, email: &str, password: &str) -> Result<(), AuthError>;

    /// End the current session.
    async fn sign_out(&self) -> Result<(), AuthError>;
}

/// HTTP-delegating provider.
pub struct HttpAuthProvider {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAuthProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Pull a human-readable message out of an error response body.
    async fn error_message(response: reqwest::Response) -> String {
        let status = response.status();
        match response.json::<serde_json::Value>().await {
            Ok(body) => body
                .get("message")
                .or_else(|| body.get("error"))
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| format!("auth service returned {status}")),
            Err(_) => format!("auth service returned {status}"),
        }
    }
}

#[async_trait]
impl AuthProvider for HttpAuthProvider {
    async fn sign_up(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let response = self
            .client
            .post(format!("{}/signup", self.base_url))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| AuthError::Http(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            let message = Self::error_message(response).await;
            Err(AuthError::SignupFailed { message })
        }
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        let response = self
            .client
            .post(format!("{}/logout", self.base_url))
            .send()
            .await
            .map_err(|e| AuthError::Http(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            let message = Self::error_message(response).await;
            Err(AuthError::SignoutFailed { message })
        }
    }
}

/// Accept-everything provider for development and tests. Only input shape
/// is checked, so the failure path stays exercisable.
#[derive(Default)]
pub struct LocalAuthProvider;

#[async_trait]
impl AuthProvider for LocalAuthProvider {
    async fn sign_up(&self, email: &str, password: &str) -> Result<(), AuthError> {
        if email.trim().is_empty() || !email.contains('@') {
            return Err(AuthError::SignupFailed {
                message: "A valid email address is required".to_string(),
            });
        }
        if password.len() < 6 {
            return Err(AuthError::SignupFailed {
                message: "Password should be at least 6 characters".to_string(),
            });
        }
        Ok(())
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        Ok(())
    }
}

// ── Routes ──────────────────────────────────────────────────────────────

/// Shared state for auth routes.
#[derive(Clone)]
pub struct AuthRouteState {
    pub provider: Arc<dyn AuthProvider>,
    pub manager: Arc<OnboardingManager>,
}

/// Build the auth REST routes.
pub fn auth_routes(state: AuthRouteState) -> Router {
    Router::new()
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/logout", post(logout))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct SignupRequest {
    email: String,
    password: String,
}

/// POST /api/auth/signup
///
/// On success the caller shows the "verification email sent" state; on
/// failure the provider's message is surfaced verbatim.
async fn signup(
    State(state): State<AuthRouteState>,
    Json(req): Json<SignupRequest>,
) -> impl IntoResponse {
    match state.provider.sign_up(&req.email, &req.password).await {
        Ok(()) => {
            info!(email = %req.email, "signup accepted, verification email sent");
            Json(serde_json::json!({ "status": "email_sent" })).into_response()
        }
        Err(e) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({ "error": e.message() })),
        )
            .into_response(),
    }
}

/// POST /api/auth/logout
///
/// Clears the persisted onboarding flag and signals navigation home. A
/// provider-side signout failure is a non-fatal notice; the local session
/// teardown still happens.
async fn logout(State(state): State<AuthRouteState>) -> impl IntoResponse {
    if let Err(e) = state.provider.sign_out().await {
        warn!(error = %e, "auth provider signout failed");
    }

    match state.manager.reset_on_logout().await {
        Ok(()) => Json(serde_json::json!({
            "status": "signed_out",
            "navigate_to": "/",
        }))
        .into_response(),
        Err(e) => (
            StatusCode::BAD_GATEWAY,
            Json(serde_json::json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}
