use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::{AppState, auth::AuthUser, error::AppError, models::ROLE_ADMIN};

/// Removes the account. Badge and attempt rows go with it via the
/// foreign-key cascades.
pub async fn delete_user(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if auth.user_id != id && auth.role != ROLE_ADMIN {
        return Err(AppError::Forbidden);
    }

    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(&state.pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }

    tracing::info!(user_id = id, deleted_by = auth.user_id, "user deleted");

    Ok(StatusCode::NO_CONTENT)
}
