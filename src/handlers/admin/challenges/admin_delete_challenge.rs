use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::{AppState, auth::AdminUser, error::AppError};

/// Deletion is refused while any attempt row references the challenge,
/// preserving attempt history.
pub async fn admin_delete_challenge(
    auth: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    sqlx::query("SELECT id FROM challenges WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or(AppError::NotFound)?;

    let attempts: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM user_challenges WHERE challenge_id = $1")
            .bind(id)
            .fetch_one(&state.pool)
            .await?;

    if attempts > 0 {
        return Err(AppError::Conflict(
            "cannot delete a challenge with recorded attempts".to_string(),
        ));
    }

    sqlx::query("DELETE FROM challenges WHERE id = $1")
        .bind(id)
        .execute(&state.pool)
        .await?;

    tracing::info!(challenge_id = id, admin = auth.user_id, "challenge deleted");

    Ok(StatusCode::NO_CONTENT)
}
