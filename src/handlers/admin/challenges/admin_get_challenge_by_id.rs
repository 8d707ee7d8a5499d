use axum::{
    Json,
    extract::{Path, State},
};

use crate::{AppState, auth::AdminUser, error::AppError, models::*};

pub async fn admin_get_challenge_by_id(
    _auth: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Challenge>, AppError> {
    let challenge: Challenge = sqlx::query_as("SELECT * FROM challenges WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(challenge))
}
