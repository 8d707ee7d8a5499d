use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::{AppState, error::AppError, models::*, pagination::PageParams};

#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    pub country: Option<String>,
    pub page: Option<i64>,
    pub size: Option<i64>,
}

/// Users ordered by points. Rank is computed against the whole
/// directory even when a country filter narrows the listing, so a
/// filtered page shows each user's global standing.
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Json<PageResponse<LeaderboardEntry>>, AppError> {
    let params = PageParams {
        page: query.page,
        size: query.size,
        sort: None,
    };
    let country = query.country.filter(|c| !c.is_empty());

    let (total, entries) = match &country {
        Some(country) => {
            let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE country = $1")
                .bind(country)
                .fetch_one(&state.pool)
                .await?;

            let entries: Vec<LeaderboardEntry> = sqlx::query_as(
                r#"
                SELECT u.id AS user_id, u.username, u.avatar, u.points,
                       1 + (SELECT COUNT(*) FROM users v WHERE v.points > u.points) AS rank,
                       (SELECT COUNT(*) FROM user_challenges uc
                        WHERE uc.user_id = u.id AND uc.status = 'COMPLETED') AS completed_challenges,
                       (SELECT COUNT(*) FROM user_badges ub
                        WHERE ub.user_id = u.id) AS earned_badges
                FROM users u
                WHERE u.country = $1
                ORDER BY u.points DESC, u.id
                LIMIT $2 OFFSET $3
                "#,
            )
            .bind(country)
            .bind(params.size())
            .bind(params.offset())
            .fetch_all(&state.pool)
            .await?;

            (total, entries)
        }
        None => {
            let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
                .fetch_one(&state.pool)
                .await?;

            let entries: Vec<LeaderboardEntry> = sqlx::query_as(
                r#"
                SELECT u.id AS user_id, u.username, u.avatar, u.points,
                       1 + (SELECT COUNT(*) FROM users v WHERE v.points > u.points) AS rank,
                       (SELECT COUNT(*) FROM user_challenges uc
                        WHERE uc.user_id = u.id AND uc.status = 'COMPLETED') AS completed_challenges,
                       (SELECT COUNT(*) FROM user_badges ub
                        WHERE ub.user_id = u.id) AS earned_badges
                FROM users u
                ORDER BY u.points DESC, u.id
                LIMIT $1 OFFSET $2
                "#,
            )
            .bind(params.size())
            .bind(params.offset())
            .fetch_all(&state.pool)
            .await?;

            (total, entries)
        }
    };

    Ok(Json(PageResponse {
        items: entries,
        page: params.page(),
        size: params.size(),
        total,
    }))
}
