use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::TokenResponseData;
use crate::inbound::http::router::AppState;

/// POST /register
///
/// Validates the credential pair before any store access, creates the
/// identity, and returns its first session token.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequestBody>,
) -> Result<ApiSuccess<TokenResponseData>, ApiError> {
    let credentials = auth::Credentials::parse(body.email, body.secret)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .identity_service
        .register(credentials)
        .await
        .map_err(ApiError::from)
        .map(|token| ApiSuccess::new(StatusCode::CREATED, TokenResponseData { token }))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequestBody {
    email: String,
    secret: String,
}
