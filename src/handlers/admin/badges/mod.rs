pub mod admin_award_badge;
pub mod admin_create_badge;
pub mod admin_delete_badge;
pub mod admin_update_badge;
