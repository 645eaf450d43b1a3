pub mod budget;
pub mod common;
pub mod hard_filter;
pub mod llm;
pub mod menu;
pub mod profile;
pub mod recommendation;
pub mod recommendation_cache;
pub mod tags;
