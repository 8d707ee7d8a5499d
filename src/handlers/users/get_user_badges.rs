use axum::{
    Json,
    extract::{Path, State},
};

use crate::{AppState, error::AppError, models::*};

pub async fn get_user_badges(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<UserBadgeResponse>>, AppError> {
    sqlx::query("SELECT id FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or(AppError::NotFound)?;

    let badges: Vec<UserBadgeResponse> = sqlx::query_as(
        r#"
        SELECT ub.id, ub.badge_id, b.title, b.image_url, ub.awarded_at
        FROM user_badges ub
        JOIN badges b ON b.id = ub.badge_id
        WHERE ub.user_id = $1
        ORDER BY ub.awarded_at DESC
        "#,
    )
    .bind(id)
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(badges))
}
