use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application error taxonomy. Every handler returns `Result<_, AppError>`
/// and the `IntoResponse` impl maps each variant to its HTTP status.
#[derive(Debug)]
pub enum AppError {
    NotFound,
    Conflict(String),
    BadRequest(String),
    AuthError,
    Forbidden,
    Database(sqlx::Error),
    InternalError(anyhow::Error),
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict("resource already exists".to_string())
            }
            _ => AppError::Database(err),
        }
    }
}

impl AppError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "resource not found".to_string()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::AuthError => (
                StatusCode::UNAUTHORIZED,
                "invalid credentials or token".to_string(),
            ),
            AppError::Forbidden => (StatusCode::FORBIDDEN, "admin access required".to_string()),
            AppError::Database(_) | AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Database(err) => tracing::error!("database error: {err}"),
            AppError::InternalError(err) => tracing::error!("internal error: {err:#}"),
            _ => {}
        }

        let (status, message) = self.status_and_message();
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_map_to_expected_statuses() {
        assert_eq!(
            AppError::NotFound.status_and_message().0,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Conflict("dup".into()).status_and_message().0,
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::BadRequest("bad".into()).status_and_message().0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::AuthError.status_and_message().0,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Forbidden.status_and_message().0,
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn row_not_found_is_a_database_error_not_a_404() {
        // NotFound is reserved for lookups the handlers decide are absent.
        let err = AppError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::Database(_)));
    }
}
