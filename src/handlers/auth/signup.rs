use axum::{Json, extract::State};
use bcrypt::{DEFAULT_COST, hash};

use crate::{AppState, auth::create_token, error::AppError, models::*, upload};

/// Multipart signup: optional avatar file plus username, email, password
/// and optional country fields.
pub async fn signup(
    State(state): State<AppState>,
    mut multipart: axum::extract::Multipart,
) -> Result<Json<AuthResponse>, AppError> {
    let mut username = None;
    let mut email = None;
    let mut password = None;
    let mut country = None;
    let mut avatar_file: Option<(String, Vec<u8>)> = None;

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
                    .unwrap_or_else(|| format!("{}.jpg", uuid::Uuid::new_v4()));
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::InternalError(e.into()))?;
                if !data.is_empty() {
                    avatar_file = Some((file_name, data.to_vec()));
                }
            }
            "username" => username = Some(read_text_field(field).await?),
            "email" => email = Some(read_text_field(field).await?),
            "password" => password = Some(read_text_field(field).await?),
            "country" => country = Some(read_text_field(field).await?),
            _ => {}
        }
    }

    let username = username
        .filter(|u| !u.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("username is required".to_string()))?;
    let email = email
        .filter(|e| !e.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("email is required".to_string()))?;
    let password = password
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::BadRequest("password is required".to_string()))?;

    if sqlx::query("SELECT id FROM users WHERE username = $1")
        .bind(&username)
        .fetch_optional(&state.pool)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict("username already exists".to_string()));
    }
    if sqlx::query("SELECT id FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(&state.pool)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict("email already exists".to_string()));
    }

    let password_hash =
        hash(password.as_bytes(), DEFAULT_COST).map_err(|e| AppError::InternalError(e.into()))?;

    let avatar = match avatar_file {
        Some((file_name, data)) => Some(upload::store_image("avatars", &file_name, &data).await?),
        None => None,
    };

    let user: User = sqlx::query_as(
        r#"
        INSERT INTO users (username, email, password_hash, avatar, country, created_at)
        VALUES ($1, $2, $3, $4, $5, NOW())
        RETURNING *
        "#,
    )
    .bind(&username)
    .bind(&email)
    .bind(&password_hash)
    .bind(&avatar)
    .bind(&country)
    .fetch_one(&state.pool)
    .await?;

    let token = create_token(&user.username)?;

    tracing::info!(user_id = user.id, "user registered");

    Ok(Json(AuthResponse {
        token,
        id: user.id,
        username: user.username,
        email: user.email,
        avatar: user.avatar,
        points: user.points,
        country: user.country,
        role: user.role,
    }))
}

async fn read_text_field(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(format!("invalid multipart field: {e}")))
}
