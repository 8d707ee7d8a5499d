use axum::{
    Json,
    extract::{Path, State},
};

use crate::{AppState, auth::AdminUser, error::AppError, models::*};

pub async fn admin_activate_challenge(
    _auth: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Challenge>, AppError> {
    set_active(&state, id, true).await.map(Json)
}

pub async fn admin_deactivate_challenge(
    _auth: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Challenge>, AppError> {
    set_active(&state, id, false).await.map(Json)
}

async fn set_active(state: &AppState, id: i64, active: bool) -> Result<Challenge, AppError> {
    sqlx::query_as("UPDATE challenges SET active = $1 WHERE id = $2 RETURNING *")
        .bind(active)
        .bind(id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or(AppError::NotFound)
}
