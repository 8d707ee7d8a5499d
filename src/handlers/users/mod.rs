pub mod delete_user;
pub mod get_user;
pub mod get_user_badges;
pub mod get_user_challenges;
pub mod update_user;
pub mod upload_user_avatar;
