use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::{AppState, auth::AdminUser, error::AppError};

pub async fn admin_delete_badge(
    auth: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let result = sqlx::query("DELETE FROM badges WHERE id = $1")
        .bind(id)
        .execute(&state.pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }

    tracing::info!(badge_id = id, admin = auth.user_id, "badge deleted");

    Ok(StatusCode::NO_CONTENT)
}
