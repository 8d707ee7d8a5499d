use axum::{
    Json,
    extract::{Path, State},
};

use crate::{AppState, error::AppError};

/// Rank is one plus the number of users holding strictly more points, so
/// ties share a rank.
pub async fn get_user_rank(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<i64>, AppError> {
    let points: i32 = sqlx::query_scalar("SELECT points FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or(AppError::NotFound)?;

    let ahead: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE points > $1")
        .bind(points)
        .fetch_one(&state.pool)
        .await?;

    Ok(Json(ahead + 1))
}
