use tracing::{error, info};

use crate::domain::{
    budget::{
        entities::RecommendationPlan, helpers::parse_plan_response, ports::BudgetPlanner,
        schema::get_budget_plan_schema, value_objects::PlanningRequest,
    },
    common::entities::app_errors::CoreError,
    llm::ports::LLMClient,
};

/// Asks a language model to choose the best combination within budget.
#[derive(Debug, Clone)]
pub struct LlmBudgetPlanner<L> {
    llm_client: L,
    model: String,
}

impl<L> LlmBudgetPlanner<L>
where
    L: LLMClient,
{
    pub fn new(llm_client: L, model: impl Into<String>) -> Self {
        Self {
            llm_client,
            model: model.into(),
        }
    }
}

fn build_prompt(request: &PlanningRequest) -> Result<String, CoreError> {
    let menu_json = serde_json::to_string(&request.menu.items).map_err(|e| {
        error!("Failed to serialize menu for planning: {}", e);
        CoreError::InternalServerError
    })?;

    let mut prompt = format!(
        "You help diners order within a budget. Choose the combination of menu items \
that gives the best meal without the total exceeding {budget:.2} {currency}. \
Only use items from the menu below, with their listed prices. Quantities are whole \
numbers of at least 1. Explain the choice briefly in the rationale.\n\nMenu:\n{menu_json}",
        budget = request.budget.amount(),
        currency = request.menu.currency,
    );

    if let Some(note) = &request.user_note {
        prompt.push_str("\n\nDiner note: ");
        prompt.push_str(note);
    }

    Ok(prompt)
}

impl<L> BudgetPlanner for LlmBudgetPlanner<L>
where
    L: LLMClient,
{
    async fn plan(&self, request: PlanningRequest) -> Result<RecommendationPlan, CoreError> {
        let prompt = build_prompt(&request)?;

        let raw = self
            .llm_client
            .generate_with_text(self.model.clone(), prompt, get_budget_plan_schema())
            .await
            .map_err(|e| {
                error!("Budget planning failed: {}", e);
                match e {
                    CoreError::ExternalServiceError(message) => CoreError::BudgetApiError(message),
                    other => other,
                }
            })?;

        let plan = parse_plan_response(&raw, &request.menu.currency, request.budget.amount())?;
        info!(
            items = plan.items.len(),
            total = plan.total,
            within_budget = plan.within_budget,
            "budget plan received"
        );

        Ok(plan)
    }
}
