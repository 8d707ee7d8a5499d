use axum::{
    Json,
    extract::{Query, State},
};

use crate::{AppState, error::AppError, models::*, pagination::PageParams};

const SORTABLE_COLUMNS: &[&str] = &["id", "title", "difficulty", "points"];

pub async fn get_challenges(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<PageResponse<Challenge>>, AppError> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM challenges")
        .fetch_one(&state.pool)
        .await?;

    let order_by = params.order_by(SORTABLE_COLUMNS, "id ASC");
    let sql = format!("SELECT * FROM challenges ORDER BY {order_by} LIMIT $1 OFFSET $2");

    let items: Vec<Challenge> = sqlx::query_as(&sql)
        .bind(params.size())
        .bind(params.offset())
        .fetch_all(&state.pool)
        .await?;

    Ok(Json(PageResponse {
        items,
        page: params.page(),
        size: params.size(),
        total,
    }))
}
