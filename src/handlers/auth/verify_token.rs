use axum::{
    Json,
    extract::State,
    http::{HeaderMap, header::AUTHORIZATION},
};

use crate::{AppState, auth::decode_claims, error::AppError};

/// Reports whether the bearer token is currently valid and its subject
/// still names an existing user. Always answers with a boolean, never an
/// auth failure.
pub async fn verify_token(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<bool>, AppError> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));
    let Some(token) = token else {
        return Ok(Json(false));
    };

    let Ok(claims) = decode_claims(token) else {
        return Ok(Json(false));
    };

    let exists = sqlx::query("SELECT id FROM users WHERE username = $1")
        .bind(&claims.sub)
        .fetch_optional(&state.pool)
        .await?
        .is_some();

    Ok(Json(exists))
}
