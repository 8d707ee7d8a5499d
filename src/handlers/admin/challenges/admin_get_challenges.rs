use axum::{Json, extract::State};

use crate::{AppState, auth::AdminUser, error::AppError, models::*};

/// Unfiltered catalog listing, inactive challenges included.
pub async fn admin_get_challenges(
    _auth: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Challenge>>, AppError> {
    let challenges: Vec<Challenge> = sqlx::query_as("SELECT * FROM challenges ORDER BY id")
        .fetch_all(&state.pool)
        .await?;

    Ok(Json(challenges))
}
