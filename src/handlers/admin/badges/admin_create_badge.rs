use axum::{Json, extract::State};

use crate::{AppState, auth::AdminUser, error::AppError, models::*, upload};

/// Multipart create: optional image file plus title, description and
/// requirements fields.
pub async fn admin_create_badge(
    _auth: AdminUser,
    State(state): State<AppState>,
    mut multipart: axum::extract::Multipart,
) -> Result<Json<Badge>, AppError> {
    let mut title = None;
    let mut description = None;
    let mut requirements = None;
    let mut image_file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let file_name = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| format!("{}.png", uuid::Uuid::new_v4()));
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::InternalError(e.into()))?;
                if !data.is_empty() {
                    image_file = Some((file_name, data.to_vec()));
                }
            }
            "title" => title = Some(read_text(field).await?),
            "description" => description = Some(read_text(field).await?),
            "requirements" => requirements = Some(read_text(field).await?),
            _ => {}
        }
    }

    let title = title
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("badge title cannot be empty".to_string()))?;

    if sqlx::query("SELECT id FROM badges WHERE title = $1")
        .bind(&title)
        .fetch_optional(&state.pool)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict(
            "badge with this title already exists".to_string(),
        ));
    }

    let image_url = match image_file {
        Some((file_name, data)) => Some(upload::store_image("badges", &file_name, &data).await?),
        None => None,
    };

    let badge: Badge = sqlx::query_as(
        r#"
        INSERT INTO badges (title, description, image_url, requirements)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(&title)
    .bind(&description)
    .bind(&image_url)
    .bind(&requirements)
    .fetch_one(&state.pool)
    .await?;

    Ok(Json(badge))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(format!("invalid multipart field: {e}")))
}
