pub mod get_badges;
pub mod get_badges_for_user;
