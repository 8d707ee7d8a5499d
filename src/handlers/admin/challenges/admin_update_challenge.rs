use axum::{
    Json,
    extract::{Path, State},
};

use crate::{AppState, auth::AdminUser, error::AppError, models::*};

/// Full field replace. The active flag is managed separately by the
/// activate and deactivate endpoints.
pub async fn admin_update_challenge(
    _auth: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateChallengeRequest>,
) -> Result<Json<Challenge>, AppError> {
    if req.title.trim().is_empty() {
        return Err(AppError::BadRequest(
            "challenge title cannot be empty".to_string(),
        ));
    }

    let difficulty = Difficulty::parse(&req.difficulty).ok_or_else(|| {
        AppError::BadRequest(format!("unknown difficulty tier: {}", req.difficulty))
    })?;

    let challenge: Challenge = sqlx::query_as(
        r#"
        UPDATE challenges
        SET title = $1, description = $2, difficulty = $3, points = $4,
            test_cases = $5, code_blocks = $6, solution_logic = $7
        WHERE id = $8
        RETURNING *
        "#,
    )
    .bind(&req.title)
    .bind(&req.description)
    .bind(difficulty.as_str())
    .bind(req.points)
    .bind(&req.test_cases)
    .bind(&req.code_blocks)
    .bind(&req.solution_logic)
    .bind(id)
    .fetch_optional(&state.pool)
    .await?
    .ok_or(AppError::NotFound)?;

    Ok(Json(challenge))
}
