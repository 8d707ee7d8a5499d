pub mod badges;
pub mod challenges;

pub use badges::{
    admin_award_badge::admin_award_badge, admin_create_badge::admin_create_badge,
    admin_delete_badge::admin_delete_badge, admin_update_badge::admin_update_badge,
};
pub use challenges::{
    admin_create_challenge::admin_create_challenge,
    admin_delete_challenge::admin_delete_challenge,
    admin_get_challenge_by_id::admin_get_challenge_by_id,
    admin_get_challenges::admin_get_challenges,
    admin_set_challenge_active::{admin_activate_challenge, admin_deactivate_challenge},
    admin_update_challenge::admin_update_challenge,
};
