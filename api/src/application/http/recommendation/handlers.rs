pub mod clear_cache;
pub mod get_last_recommendation;
pub mod rebudget;
pub mod recommend;
pub mod recommend_basic;
