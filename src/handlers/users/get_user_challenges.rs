use axum::{
    Json,
    extract::{Path, State},
};

use crate::{AppState, error::AppError, models::*};

/// Full attempt history for a user, newest first.
pub async fn get_user_challenges(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<AttemptResponse>>, AppError> {
    sqlx::query("SELECT id FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or(AppError::NotFound)?;

    let attempts: Vec<UserChallenge> = sqlx::query_as(
        "SELECT * FROM user_challenges WHERE user_id = $1 ORDER BY timestamp DESC",
    )
    .bind(id)
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(attempts.into_iter().map(AttemptResponse::from).collect()))
}
