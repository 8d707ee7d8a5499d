use axum::{
    Json,
    extract::{Path, State},
};

use crate::{AppState, auth::AuthUser, error::AppError, models::*, upload};

/// Replaces the stored avatar: the old image file is removed before the
/// new URL is persisted.
pub async fn upload_user_avatar(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    mut multipart: axum::extract::Multipart,
) -> Result<Json<UserResponse>, AppError> {
    if auth.user_id != id && auth.role != ROLE_ADMIN {
        return Err(AppError::Forbidden);
    }

    let user: User = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or(AppError::NotFound)?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field
            .file_name()
            .map(|s| s.to_string())
            .unwrap_or_else(|| format!("{}.jpg", uuid::Uuid::new_v4()));

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::InternalError(e.into()))?;

        if data.is_empty() {
            return Err(AppError::BadRequest("uploaded file is empty".to_string()));
        }

        if let Some(old) = &user.avatar {
            upload::delete_image(old).await;
        }

        let avatar_url = upload::store_image("avatars", &file_name, &data).await?;

        let updated: User = sqlx::query_as("UPDATE users SET avatar = $1 WHERE id = $2 RETURNING *")
            .bind(&avatar_url)
            .bind(id)
            .fetch_one(&state.pool)
            .await?;

        return Ok(Json(updated.into()));
    }

    Err(AppError::BadRequest("no avatar file provided".to_string()))
}
