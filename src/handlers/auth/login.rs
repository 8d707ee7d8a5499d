use axum::{Json, extract::State};
use bcrypt::verify;

use crate::{AppState, auth::create_token, error::AppError, models::*};

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let user: User = sqlx::query_as("SELECT * FROM users WHERE username = $1")
        .bind(&req.username)
        .fetch_optional(&state.pool)
        .await?
        .ok_or(AppError::AuthError)?;

    if !verify(req.password.as_bytes(), &user.password_hash)
        .map_err(|e| AppError::InternalError(e.into()))?
    {
        return Err(AppError::AuthError);
    }

    let token = create_token(&user.username)?;

    Ok(Json(AuthResponse {
        token,
        id: user.id,
        username: user.username,
        email: user.email,
        avatar: user.avatar,
        points: user.points,
        country: user.country,
        role: user.role,
    }))
}
