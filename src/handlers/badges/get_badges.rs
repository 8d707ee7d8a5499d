use axum::{Json, extract::State};

use crate::{AppState, error::AppError, models::*};

pub async fn get_badges(State(state): State<AppState>) -> Result<Json<Vec<Badge>>, AppError> {
    let badges: Vec<Badge> = sqlx::query_as("SELECT * FROM badges ORDER BY id")
        .fetch_all(&state.pool)
        .await?;

    Ok(Json(badges))
}
