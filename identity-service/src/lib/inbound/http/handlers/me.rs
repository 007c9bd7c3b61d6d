use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedIdentity;

/// GET /me
///
/// Protected resource: reachable only through the token-verification
/// middleware, which puts the verified subject in request extensions.
pub async fn me(
    Extension(identity): Extension<AuthenticatedIdentity>,
) -> Result<ApiSuccess<MeResponseData>, ApiError> {
    Ok(ApiSuccess::new(
        StatusCode::OK,
        MeResponseData {
            email: identity.email,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeResponseData {
    pub email: String,
}
