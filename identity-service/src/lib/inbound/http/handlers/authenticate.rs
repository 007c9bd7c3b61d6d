use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::TokenResponseData;
use crate::inbound::http::router::AppState;

/// POST /login
///
/// Malformed input fails with the specific validation reason; a wrong
/// secret or an unknown email both fail with the same Unauthorized body.
pub async fn authenticate(
    State(state): State<AppState>,
    Json(body): Json<AuthenticateRequestBody>,
) -> Result<ApiSuccess<TokenResponseData>, ApiError> {
    let credentials = auth::Credentials::parse(body.email, body.secret)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .identity_service
        .authenticate(credentials)
        .await
        .map_err(ApiError::from)
        .map(|token| ApiSuccess::new(StatusCode::OK, TokenResponseData { token }))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthenticateRequestBody {
    email: String,
    secret: String,
}
