use std::future::Future;

use crate::domain::{
    budget::{entities::RecommendationPlan, value_objects::PlanningRequest},
    common::entities::app_errors::CoreError,
};

/// Picks a combination of menu items that fits a budget.
#[cfg_attr(test, mockall::automock)]
pub trait BudgetPlanner: Send + Sync {
    fn plan(
        &self,
        request: PlanningRequest,
    ) -> impl Future<Output = Result<RecommendationPlan, CoreError>> + Send;
}
