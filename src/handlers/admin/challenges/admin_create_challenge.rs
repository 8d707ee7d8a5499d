use axum::{Json, extract::State};

use crate::{AppState, auth::AdminUser, error::AppError, models::*};

pub async fn admin_create_challenge(
    _auth: AdminUser,
    State(state): State<AppState>,
    Json(req): Json<CreateChallengeRequest>,
) -> Result<Json<Challenge>, AppError> {
    let title = req
        .title
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("challenge title cannot be empty".to_string()))?;

    let difficulty = req
        .difficulty
        .ok_or_else(|| AppError::BadRequest("challenge difficulty must be specified".to_string()))?;
    let difficulty = Difficulty::parse(&difficulty)
        .ok_or_else(|| AppError::BadRequest(format!("unknown difficulty tier: {difficulty}")))?;

    let challenge: Challenge = sqlx::query_as(
        r#"
        INSERT INTO challenges
            (title, description, difficulty, points, test_cases, code_blocks, solution_logic, active)
        VALUES ($1, $2, $3, $4, $5, $6, $7, true)
        RETURNING *
        "#,
    )
    .bind(&title)
    .bind(&req.description)
    .bind(difficulty.as_str())
    .bind(req.points)
    .bind(&req.test_cases)
    .bind(&req.code_blocks)
    .bind(&req.solution_logic)
    .fetch_one(&state.pool)
    .await?;

    Ok(Json(challenge))
}
