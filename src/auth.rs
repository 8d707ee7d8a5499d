//! Bearer-token auth: HS256 tokens carrying the username, plus the
//! request extractors handlers take as their first argument.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{AppState, error::AppError, models::ROLE_ADMIN};

const DEFAULT_TOKEN_LIFETIME_SECS: i64 = 86_400;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

fn jwt_secret() -> Result<String, AppError> {
    std::env::var("JWT_SECRET")
        .map_err(|_| AppError::InternalError(anyhow::anyhow!("JWT_SECRET is not set")))
}

pub fn create_token(username: &str) -> Result<String, AppError> {
    let lifetime = std::env::var("JWT_EXPIRATION_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_TOKEN_LIFETIME_SECS);
    sign_token(&jwt_secret()?, username, lifetime)
}

pub fn decode_claims(token: &str) -> Result<Claims, AppError> {
    verify_token(&jwt_secret()?, token)
}

fn sign_token(secret: &str, username: &str, lifetime_secs: i64) -> Result<String, AppError> {
    let now = OffsetDateTime::now_utc().unix_timestamp();
    let claims = Claims {
        sub: username.to_string(),
        iat: now,
        exp: now + lifetime_secs,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalError(e.into()))
}

fn verify_token(secret: &str, token: &str) -> Result<Claims, AppError> {
    let mut validation = Validation::default();
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::AuthError)
}

pub fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Caller resolved from the Authorization header. The token subject must
/// still name an existing user.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: i64,
    pub username: String,
    pub role: String,
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or(AppError::AuthError)?;
        let claims = decode_claims(token)?;

        let state = AppState::from_ref(state);
        let row: Option<(i64, String)> =
            sqlx::query_as("SELECT id, role FROM users WHERE username = $1")
                .bind(&claims.sub)
                .fetch_optional(&state.pool)
                .await?;
        let (user_id, role) = row.ok_or(AppError::AuthError)?;

        Ok(AuthUser {
            user_id,
            username: claims.sub,
            role,
        })
    }
}

/// Like [`AuthUser`] but rejects callers without the admin role.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub user_id: i64,
}

impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;
        if auth.role != ROLE_ADMIN {
            return Err(AppError::Forbidden);
        }

        Ok(AdminUser {
            user_id: auth.user_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn token_round_trip() {
        let token = sign_token(SECRET, "alice", 3600).unwrap();
        let claims = verify_token(SECRET, &token).unwrap();
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn expired_token_is_rejected() {
        let token = sign_token(SECRET, "alice", -120).unwrap();
        assert!(matches!(
            verify_token(SECRET, &token),
            Err(AppError::AuthError)
        ));
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = sign_token(SECRET, "alice", 3600).unwrap();
        assert!(matches!(
            verify_token("other-secret", &token),
            Err(AppError::AuthError)
        ));
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(matches!(
            verify_token(SECRET, "not.a.token"),
            Err(AppError::AuthError)
        ));
    }
}
