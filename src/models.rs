use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Serialize OffsetDateTime as RFC 3339 strings instead of the `time`
// crate's default representation.
mod iso8601 {
    use serde::{self, Serializer};
    use time::OffsetDateTime;
    use time::format_description::well_known::Rfc3339;

    pub fn serialize<S>(date: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = date.format(&Rfc3339).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&s)
    }
}

// ============================================
// Entity rows
// ============================================

#[derive(Debug, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub avatar: Option<String>,
    pub points: i32,
    pub country: Option<String>,
    pub role: String,
    #[serde(rename = "createdAt", serialize_with = "iso8601::serialize")]
    pub created_at: time::OffsetDateTime,
}

#[derive(Debug, Serialize, FromRow)]
pub struct Badge {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    pub requirements: Option<String>,
}

#[derive(Debug, Serialize, FromRow)]
pub struct UserBadge {
    pub id: i64,
    pub user_id: i64,
    pub badge_id: i64,
    pub awarded_at: time::OffsetDateTime,
}

#[derive(Debug, Serialize, FromRow)]
pub struct Challenge {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub difficulty: String,
    pub points: Option<i32>,
    #[serde(rename = "testCases")]
    pub test_cases: Vec<String>,
    #[serde(rename = "codeBlocks")]
    pub code_blocks: Option<String>,
    #[serde(rename = "solutionLogic")]
    pub solution_logic: Option<String>,
    pub active: bool,
}

#[derive(Debug, Serialize, FromRow)]
pub struct UserChallenge {
    pub id: i64,
    pub user_id: i64,
    pub challenge_id: i64,
    pub started_at: time::OffsetDateTime,
    pub status: String,
    pub score: Option<i32>,
    pub timestamp: time::OffsetDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeStatus {
    InProgress,
    Completed,
    Failed,
}

impl ChallengeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChallengeStatus::InProgress => "IN_PROGRESS",
            ChallengeStatus::Completed => "COMPLETED",
            ChallengeStatus::Failed => "FAILED",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "IN_PROGRESS" => Some(ChallengeStatus::InProgress),
            "COMPLETED" => Some(ChallengeStatus::Completed),
            "FAILED" => Some(ChallengeStatus::Failed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "BEGINNER",
            Difficulty::Intermediate => "INTERMEDIATE",
            Difficulty::Advanced => "ADVANCED",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "BEGINNER" => Some(Difficulty::Beginner),
            "INTERMEDIATE" => Some(Difficulty::Intermediate),
            "ADVANCED" => Some(Difficulty::Advanced),
            _ => None,
        }
    }

    pub fn multiplier(&self) -> i32 {
        match self {
            Difficulty::Beginner => 1,
            Difficulty::Intermediate => 2,
            Difficulty::Advanced => 3,
        }
    }
}

pub const ROLE_ADMIN: &str = "ROLE_ADMIN";

// ============================================
// Auth
// ============================================

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub id: i64,
    pub username: String,
    pub email: String,
    pub avatar: Option<String>,
    pub points: i32,
    pub country: Option<String>,
    pub role: String,
}

// ============================================
// Users
// ============================================

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub avatar: Option<String>,
    pub points: i32,
    pub country: Option<String>,
    pub role: String,
    #[serde(rename = "createdAt", serialize_with = "iso8601::serialize")]
    pub created_at: time::OffsetDateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            username: user.username,
            email: user.email,
            avatar: user.avatar,
            points: user.points,
            country: user.country,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub avatar: Option<String>,
    pub country: Option<String>,
}

// ============================================
// Badges
// ============================================

#[derive(Debug, Deserialize)]
pub struct UpdateBadgeRequest {
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    pub requirements: Option<String>,
}

/// Join row projected together with the badge it references.
#[derive(Debug, Serialize, FromRow)]
pub struct UserBadgeResponse {
    pub id: i64,
    #[serde(rename = "badgeId")]
    pub badge_id: i64,
    pub title: String,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(rename = "awardedAt", serialize_with = "iso8601::serialize")]
    pub awarded_at: time::OffsetDateTime,
}

// ============================================
// Challenges
// ============================================

#[derive(Debug, Deserialize)]
pub struct CreateChallengeRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub difficulty: Option<String>,
    pub points: Option<i32>,
    #[serde(rename = "testCases", default)]
    pub test_cases: Vec<String>,
    #[serde(rename = "codeBlocks")]
    pub code_blocks: Option<String>,
    #[serde(rename = "solutionLogic")]
    pub solution_logic: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateChallengeRequest {
    pub title: String,
    pub description: Option<String>,
    pub difficulty: String,
    pub points: Option<i32>,
    #[serde(rename = "testCases", default)]
    pub test_cases: Vec<String>,
    #[serde(rename = "codeBlocks")]
    pub code_blocks: Option<String>,
    #[serde(rename = "solutionLogic")]
    pub solution_logic: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StartChallengeResponse {
    pub id: i64,
    #[serde(rename = "challengeId")]
    pub challenge_id: i64,
    pub status: String,
    #[serde(rename = "startedAt", serialize_with = "iso8601::serialize")]
    pub started_at: time::OffsetDateTime,
}

#[derive(Debug, Serialize)]
pub struct AttemptResponse {
    pub id: i64,
    #[serde(rename = "challengeId")]
    pub challenge_id: i64,
    pub status: String,
    pub score: Option<i32>,
    #[serde(rename = "startedAt", serialize_with = "iso8601::serialize")]
    pub started_at: time::OffsetDateTime,
    #[serde(serialize_with = "iso8601::serialize")]
    pub timestamp: time::OffsetDateTime,
}

impl From<UserChallenge> for AttemptResponse {
    fn from(attempt: UserChallenge) -> Self {
        AttemptResponse {
            id: attempt.id,
            challenge_id: attempt.challenge_id,
            status: attempt.status,
            score: attempt.score,
            started_at: attempt.started_at,
            timestamp: attempt.timestamp,
        }
    }
}

// ============================================
// Leaderboard
// ============================================

#[derive(Debug, Serialize, FromRow)]
pub struct LeaderboardEntry {
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub username: String,
    pub avatar: Option<String>,
    pub points: i32,
    pub rank: i64,
    #[serde(rename = "completedChallenges")]
    pub completed_challenges: i64,
    #[serde(rename = "earnedBadges")]
    pub earned_badges: i64,
}

// ============================================
// Shared wrappers
// ============================================

#[derive(Debug, Serialize)]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub size: i64,
    pub total: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_and_rejects_unknown() {
        assert_eq!(
            ChallengeStatus::parse("IN_PROGRESS"),
            Some(ChallengeStatus::InProgress)
        );
        assert_eq!(ChallengeStatus::Completed.as_str(), "COMPLETED");
        assert_eq!(ChallengeStatus::parse("completed"), None);
        assert_eq!(ChallengeStatus::parse("DONE"), None);
    }

    #[test]
    fn difficulty_multipliers() {
        assert_eq!(Difficulty::Beginner.multiplier(), 1);
        assert_eq!(Difficulty::Intermediate.multiplier(), 2);
        assert_eq!(Difficulty::Advanced.multiplier(), 3);
        assert_eq!(Difficulty::parse("EXPERT"), None);
    }
}
