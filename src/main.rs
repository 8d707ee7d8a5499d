//! Gamified coding-education backend: accounts, challenges, badges and a
//! points leaderboard over Postgres.
//!
//! Environment:
//!   DATABASE_URL        : Postgres connection string (required)
//!   PORT                : listen port (default 8080)
//!   JWT_SECRET          : HS256 signing secret (required for auth)
//!   JWT_EXPIRATION_SECS : token lifetime (default 86400)
//!   CORS_ORIGIN         : exact allowed origin (default: allow any)
//!   LOG_LEVEL           : tracing filter, e.g. "debug"
//!   LOG_FORMAT          : "json" for structured logs

mod auth;
mod error;
mod handlers;
mod models;
mod pagination;
mod scoring;
mod telemetry;
mod upload;

use std::net::SocketAddr;

use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::info;

use crate::handlers::*;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init_tracing();

    let database_url = std::env::var("DATABASE_URL")?;
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&database_url)
        .await?;

    sqlx::migrate!().run(&pool).await?;

    let app = build_router(AppState { pool });

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "HTTP server listening");
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    let cors = match std::env::var("CORS_ORIGIN")
        .ok()
        .and_then(|o| o.parse::<HeaderValue>().ok())
    {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any),
        None => CorsLayer::permissive(),
    };

    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/auth/login", post(login))
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/verify", get(verify_token))
        .route(
            "/api/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/api/users/{id}/badges", get(get_user_badges))
        .route("/api/users/{id}/challenges", get(get_user_challenges))
        .route("/api/users/{id}/avatar", post(upload_user_avatar))
        .route("/api/challenges", get(get_challenges))
        .route("/api/challenges/{id}", get(get_challenge_by_id))
        .route("/api/challenges/{id}/start", post(start_challenge))
        .route("/api/challenges/{id}/submit", post(submit_challenge))
        .route("/api/badges", get(get_badges))
        .route("/api/badges/user/{user_id}", get(get_badges_for_user))
        .route("/api/leaderboard", get(get_leaderboard))
        .route("/api/leaderboard/user/{id}/rank", get(get_user_rank))
        .route(
            "/api/admin/challenges",
            get(admin_get_challenges).post(admin_create_challenge),
        )
        .route(
            "/api/admin/challenges/{id}",
            get(admin_get_challenge_by_id)
                .put(admin_update_challenge)
                .delete(admin_delete_challenge),
        )
        .route(
            "/api/admin/challenges/{id}/activate",
            post(admin_activate_challenge),
        )
        .route(
            "/api/admin/challenges/{id}/deactivate",
            post(admin_deactivate_challenge),
        )
        .route("/api/admin/badges", post(admin_create_badge))
        .route(
            "/api/admin/badges/{id}",
            axum::routing::put(admin_update_badge).delete(admin_delete_badge),
        )
        .route(
            "/api/admin/badges/{badge_id}/award/{user_id}",
            post(admin_award_badge),
        )
        .nest_service("/uploads", ServeDir::new("uploads"))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
