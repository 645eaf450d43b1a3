pub mod get_profile_tags;
pub mod set_profile_tags;
