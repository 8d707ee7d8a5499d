pub mod admin;
pub mod auth;
pub mod badges;
pub mod challenges;
pub mod health_check;
pub mod leaderboard;
pub mod users;

pub use admin::{
    admin_activate_challenge, admin_award_badge, admin_create_badge, admin_create_challenge,
    admin_deactivate_challenge, admin_delete_badge, admin_delete_challenge,
    admin_get_challenge_by_id, admin_get_challenges, admin_update_badge, admin_update_challenge,
};
pub use auth::login::login;
pub use auth::signup::signup;
pub use auth::verify_token::verify_token;
pub use badges::get_badges::get_badges;
pub use badges::get_badges_for_user::get_badges_for_user;
pub use challenges::get_challenge_by_id::get_challenge_by_id;
pub use challenges::get_challenges::get_challenges;
pub use challenges::start_challenge::start_challenge;
pub use challenges::submit_challenge::submit_challenge;
pub use health_check::health_check;
pub use leaderboard::get_leaderboard::get_leaderboard;
pub use leaderboard::get_user_rank::get_user_rank;
pub use users::delete_user::delete_user;
pub use users::get_user::get_user;
pub use users::get_user_badges::get_user_badges;
pub use users::get_user_challenges::get_user_challenges;
pub use users::update_user::update_user;
pub use users::upload_user_avatar::upload_user_avatar;
