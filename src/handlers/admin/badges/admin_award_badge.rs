use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState, auth::AdminUser, error::AppError, models::*, scoring::BADGE_AWARD_POINTS,
};

/// Awards a badge to a user and credits the fixed point bonus. The join
/// row and the credit commit together or not at all.
pub async fn admin_award_badge(
    auth: AdminUser,
    State(state): State<AppState>,
    Path((badge_id, user_id)): Path<(i64, i64)>,
) -> Result<Json<UserBadgeResponse>, AppError> {
    let mut tx = state.pool.begin().await?;

    let badge: Badge = sqlx::query_as("SELECT * FROM badges WHERE id = $1")
        .bind(badge_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(AppError::NotFound)?;

    sqlx::query("SELECT id FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(AppError::NotFound)?;

    if sqlx::query("SELECT id FROM user_badges WHERE user_id = $1 AND badge_id = $2")
        .bind(user_id)
        .bind(badge_id)
        .fetch_optional(&mut *tx)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict("user already has this badge".to_string()));
    }

    let awarded: UserBadge = sqlx::query_as(
        r#"
        INSERT INTO user_badges (user_id, badge_id, awarded_at)
        VALUES ($1, $2, NOW())
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(badge_id)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query("UPDATE users SET points = points + $1 WHERE id = $2")
        .bind(BADGE_AWARD_POINTS)
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    tracing::info!(
        admin = auth.user_id,
        user_id,
        badge_id,
        points = BADGE_AWARD_POINTS,
        "badge awarded"
    );

    Ok(Json(UserBadgeResponse {
        id: awarded.id,
        badge_id: badge.id,
        title: badge.title,
        image_url: badge.image_url,
        awarded_at: awarded.awarded_at,
    }))
}
