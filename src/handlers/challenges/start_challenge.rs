use axum::{
    Json,
    extract::{Path, State},
};

use crate::{AppState, auth::AuthUser, error::AppError, models::*};

/// Opens a new attempt for the caller. Earlier attempts for the same
/// challenge stay as they are; submission always grades the newest row.
pub async fn start_challenge(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(challenge_id): Path<i64>,
) -> Result<Json<StartChallengeResponse>, AppError> {
    sqlx::query("SELECT id FROM challenges WHERE id = $1")
        .bind(challenge_id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or(AppError::NotFound)?;

    let attempt: UserChallenge = sqlx::query_as(
        r#"
        INSERT INTO user_challenges (user_id, challenge_id, started_at, status, timestamp)
        VALUES ($1, $2, NOW(), $3, NOW())
        RETURNING *
        "#,
    )
    .bind(auth.user_id)
    .bind(challenge_id)
    .bind(ChallengeStatus::InProgress.as_str())
    .fetch_one(&state.pool)
    .await?;

    tracing::info!(
        user_id = auth.user_id,
        challenge_id,
        attempt_id = attempt.id,
        "challenge started"
    );

    Ok(Json(StartChallengeResponse {
        id: attempt.id,
        challenge_id: attempt.challenge_id,
        status: attempt.status,
        started_at: attempt.started_at,
    }))
}
