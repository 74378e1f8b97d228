//! Token issuance handlers

use axum::{extract::State, Json};
use tracing::warn;

use crate::auth::create_token;
use crate::dto::auth::{LoginRequest, TokenResponse};
use crate::error::ApiError;
use crate::AppState;

/// Issues a time-limited JWT when the credentials check out.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    if !state.credentials.verify(&request.username, &request.password) {
        warn!(username = %request.username, "login rejected");
        return Err(ApiError::Unauthorized);
    }

    let token = create_token(
        &request.username,
        &state.config.jwt_secret,
        state.config.jwt_expiration_secs,
    )
    .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(TokenResponse { token }))
}
