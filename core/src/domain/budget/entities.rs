use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::fits_budget;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlanItem {
    pub name: String,
    pub qty: u32,
    pub unit_price: f64,
    pub subtotal: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecommendationPlan {
    pub total: f64,
    pub currency: String,
    pub items: Vec<PlanItem>,
    pub rationale: String,
    pub budget: f64,
    pub within_budget: bool,
}

impl RecommendationPlan {
    pub fn new(
        items: Vec<PlanItem>,
        total: f64,
        currency: String,
        rationale: String,
        budget: f64,
    ) -> Self {
        Self {
            total,
            currency,
            items,
            rationale,
            budget,
            within_budget: fits_budget(total, budget),
        }
    }

    /// Plan for a menu where nothing survived the dietary constraints.
    pub fn empty(currency: String, budget: f64) -> Self {
        Self::new(
            Vec::new(),
            0.0,
            currency,
            "No menu items satisfy the requested dietary constraints.".to_string(),
            budget,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_budget_is_derived_from_total() {
        let over = RecommendationPlan::new(Vec::new(), 25.0, "USD".into(), String::new(), 20.0);
        assert!(!over.within_budget);

        let exact = RecommendationPlan::new(Vec::new(), 20.0, "USD".into(), String::new(), 20.0);
        assert!(exact.within_budget);

        let sub_cent_over =
            RecommendationPlan::new(Vec::new(), 20.004, "KWD".into(), String::new(), 20.0);
        assert!(!sub_cent_over.within_budget);
    }

    #[test]
    fn test_empty_plan() {
        let plan = RecommendationPlan::empty("USD".into(), 15.0);
        assert!(plan.items.is_empty());
        assert_eq!(plan.total, 0.0);
        assert!(plan.within_budget);
    }
}
