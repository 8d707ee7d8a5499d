use axum::{
    Json,
    extract::{Path, State},
};
use bcrypt::{DEFAULT_COST, hash};

use crate::{AppState, auth::AuthUser, error::AppError, models::*};

/// Partial profile update. Username and email changes are re-validated
/// for uniqueness against every other row.
pub async fn update_user(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    if auth.user_id != id && auth.role != ROLE_ADMIN {
        return Err(AppError::Forbidden);
    }

    let current: User = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or(AppError::NotFound)?;

    if let Some(username) = &req.username
        && username != &current.username
        && sqlx::query("SELECT id FROM users WHERE username = $1 AND id <> $2")
            .bind(username)
            .bind(id)
            .fetch_optional(&state.pool)
            .await?
            .is_some()
    {
        return Err(AppError::Conflict("username already exists".to_string()));
    }

    if let Some(email) = &req.email
        && email != &current.email
        && sqlx::query("SELECT id FROM users WHERE email = $1 AND id <> $2")
            .bind(email)
            .bind(id)
            .fetch_optional(&state.pool)
            .await?
            .is_some()
    {
        return Err(AppError::Conflict("email already exists".to_string()));
    }

    let username = req.username.unwrap_or(current.username);
    let email = req.email.unwrap_or(current.email);
    let password_hash = match req.password {
        Some(p) => hash(p.as_bytes(), DEFAULT_COST).map_err(|e| AppError::InternalError(e.into()))?,
        None => current.password_hash,
    };
    let avatar = req.avatar.or(current.avatar);
    let country = req.country.or(current.country);

    let updated: User = sqlx::query_as(
        r#"
        UPDATE users
        SET username = $1, email = $2, password_hash = $3, avatar = $4, country = $5
        WHERE id = $6
        RETURNING *
        "#,
    )
    .bind(&username)
    .bind(&email)
    .bind(&password_hash)
    .bind(&avatar)
    .bind(&country)
    .bind(id)
    .fetch_one(&state.pool)
    .await?;

    Ok(Json(updated.into()))
}
