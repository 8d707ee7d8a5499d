use axum::{
    Json,
    extract::{Path, State},
};

use crate::{AppState, auth::AdminUser, error::AppError, models::*};

/// Full replace of title, description, image URL and requirements.
pub async fn admin_update_badge(
    _auth: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateBadgeRequest>,
) -> Result<Json<Badge>, AppError> {
    if req.title.trim().is_empty() {
        return Err(AppError::BadRequest("badge title cannot be empty".to_string()));
    }

    let badge: Badge = sqlx::query_as(
        r#"
        UPDATE badges
        SET title = $1, description = $2, image_url = $3, requirements = $4
        WHERE id = $5
        RETURNING *
        "#,
    )
    .bind(&req.title)
    .bind(&req.description)
    .bind(&req.image_url)
    .bind(&req.requirements)
    .bind(id)
    .fetch_optional(&state.pool)
    .await?
    .ok_or(AppError::NotFound)?;

    Ok(Json(badge))
}
