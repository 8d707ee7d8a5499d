pub mod admin_create_challenge;
pub mod admin_delete_challenge;
pub mod admin_get_challenge_by_id;
pub mod admin_get_challenges;
pub mod admin_set_challenge_active;
pub mod admin_update_challenge;
