pub mod budget_planning;
pub mod llm;
pub mod menu_extraction;
pub mod profile;
pub mod recommendation_cache;
