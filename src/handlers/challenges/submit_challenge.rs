use axum::{
    Json,
    extract::{Path, State},
};

use crate::{AppState, auth::AuthUser, error::AppError, models::*, scoring};

/// Grades the caller's newest attempt for this challenge. The body is the
/// raw solution text.
///
/// The grade and the point credit commit in one transaction; the credit
/// is an in-place increment, so concurrent submissions for other
/// challenges cannot lose points.
pub async fn submit_challenge(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(challenge_id): Path<i64>,
    solution: String,
) -> Result<Json<AttemptResponse>, AppError> {
    let mut tx = state.pool.begin().await?;

    // Lock the attempt row so a concurrent submit of the same attempt
    // waits here instead of grading it twice.
    let attempt: UserChallenge = sqlx::query_as(
        r#"
        SELECT * FROM user_challenges
        WHERE user_id = $1 AND challenge_id = $2
        ORDER BY timestamp DESC
        LIMIT 1
        FOR UPDATE
        "#,
    )
    .bind(auth.user_id)
    .bind(challenge_id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or(AppError::NotFound)?;

    if ChallengeStatus::parse(&attempt.status) != Some(ChallengeStatus::InProgress) {
        return Err(AppError::Conflict(
            "attempt already graded; start the challenge again to retry".to_string(),
        ));
    }

    let challenge: Challenge = sqlx::query_as("SELECT * FROM challenges WHERE id = $1")
        .bind(challenge_id)
        .fetch_one(&mut *tx)
        .await?;

    let correct = scoring::evaluate_solution(&challenge, &solution);
    let (status, score) = if correct {
        (ChallengeStatus::Completed, scoring::calculate_score(&challenge))
    } else {
        (ChallengeStatus::Failed, 0)
    };

    let graded: UserChallenge = sqlx::query_as(
        r#"
        UPDATE user_challenges
        SET status = $1, score = $2, timestamp = NOW()
        WHERE id = $3
        RETURNING *
        "#,
    )
    .bind(status.as_str())
    .bind(score)
    .bind(attempt.id)
    .fetch_one(&mut *tx)
    .await?;

    if score > 0 {
        sqlx::query("UPDATE users SET points = points + $1 WHERE id = $2")
            .bind(score)
            .bind(auth.user_id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    tracing::info!(
        user = %auth.username,
        challenge_id,
        status = %graded.status,
        score,
        "challenge submitted"
    );

    Ok(Json(graded.into()))
}
