use crate::domain::{
    budget::{
        entities::{PlanItem, RecommendationPlan},
        ports::BudgetPlanner,
        value_objects::PlanningRequest,
    },
    common::{entities::app_errors::CoreError, fits_budget},
};

const GREEDY_RATIONALE: &str = "Items were picked in menu order, one of each, \
as long as the running total stayed within the budget.";

/// Deterministic planner that walks the menu once and never overshoots.
#[derive(Debug, Clone, Default)]
pub struct GreedyBudgetPlanner;

impl GreedyBudgetPlanner {
    pub fn new() -> Self {
        Self
    }
}

impl BudgetPlanner for GreedyBudgetPlanner {
    async fn plan(&self, request: PlanningRequest) -> Result<RecommendationPlan, CoreError> {
        let budget = request.budget.amount();
        let mut running = 0.0;
        let mut items = Vec::new();

        for item in &request.menu.items {
            let next = running + item.price;
            if fits_budget(next, budget) {
                running = next;
                items.push(PlanItem {
                    name: item.name.clone(),
                    qty: 1,
                    unit_price: item.price,
                    subtotal: item.price,
                });
            }
        }

        Ok(RecommendationPlan::new(
            items,
            running,
            request.menu.currency,
            GREEDY_RATIONALE.to_string(),
            budget,
        ))
    }
}
