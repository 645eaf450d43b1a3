pub mod greedy_budget_planner;
pub mod llm_budget_planner;

pub use greedy_budget_planner::GreedyBudgetPlanner;
pub use llm_budget_planner::LlmBudgetPlanner;
