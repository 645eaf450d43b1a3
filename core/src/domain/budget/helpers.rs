use serde_json::Value;

use crate::domain::{
    budget::entities::{PlanItem, RecommendationPlan},
    common::entities::app_errors::CoreError,
    menu::helpers::parse_price,
};

/// Validates and normalizes a budget plan returned by a language model.
///
/// Items with an empty name or a non-finite price are dropped, quantities are
/// at least one, and `total` falls back to the sum of subtotals.
pub fn parse_plan_response(
    raw_response: &str,
    fallback_currency: &str,
    budget: f64,
) -> Result<RecommendationPlan, CoreError> {
    if raw_response.trim().is_empty() {
        return Err(CoreError::BudgetApiError(
            "Empty response from budget model".to_string(),
        ));
    }

    let parsed: Value = serde_json::from_str(raw_response).map_err(|e| {
        tracing::error!("Failed to parse budget response: {}", e);
        CoreError::BudgetApiError(format!("Failed to parse budget response: {}", e))
    })?;

    if !parsed.is_object() {
        return Err(CoreError::BudgetApiError(
            "Budget response is not a JSON object".to_string(),
        ));
    }

    let items: Vec<PlanItem> = parsed
        .get("items")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(normalize_plan_item).collect())
        .unwrap_or_default();

    let total = parsed
        .get("total")
        .and_then(parse_price)
        .filter(|t| t.is_finite())
        .unwrap_or_else(|| items.iter().map(|i| i.subtotal).sum());

    let currency = parsed
        .get("currency")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(fallback_currency)
        .to_uppercase();

    let rationale = parsed
        .get("rationale")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .trim()
        .to_string();

    Ok(RecommendationPlan::new(
        items,
        total,
        currency,
        rationale,
        budget,
    ))
}

fn normalize_plan_item(value: &Value) -> Option<PlanItem> {
    let name = value
        .get("name")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|n| !n.is_empty())?
        .to_string();

    let unit_price = value.get("unit_price").and_then(parse_price)?;
    let subtotal = value.get("subtotal").and_then(parse_price)?;
    if !unit_price.is_finite() || !subtotal.is_finite() {
        return None;
    }

    let qty = value
        .get("qty")
        .and_then(parse_price)
        .filter(|q| q.is_finite())
        .unwrap_or(1.0)
        .max(1.0);

    Some(PlanItem {
        name,
        qty: qty.round() as u32,
        unit_price,
        subtotal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_plan() {
        let raw = r#"{
            "total": 17.5,
            "currency": "usd",
            "items": [
                {"name": "Spring Rolls", "qty": 1, "unit_price": 6.5, "subtotal": 6.5},
                {"name": "Fried Rice", "qty": 1, "unit_price": 11, "subtotal": 11}
            ],
            "rationale": "A starter and a main."
        }"#;

        let plan = parse_plan_response(raw, "EUR", 20.0).unwrap();
        assert_eq!(plan.total, 17.5);
        assert_eq!(plan.currency, "USD");
        assert_eq!(plan.items.len(), 2);
        assert_eq!(plan.budget, 20.0);
        assert!(plan.within_budget);
    }

    #[test]
    fn test_corrupted_items_are_dropped_and_qty_coerced() {
        let raw = r#"{
            "currency": "USD",
            "items": [
                {"name": "Tea", "qty": 0, "unit_price": 3, "subtotal": 3},
                {"name": "  ", "qty": 1, "unit_price": 2, "subtotal": 2},
                {"name": "Soup", "qty": 2, "unit_price": "n/a", "subtotal": 8},
                {"name": "Bread", "qty": "3", "unit_price": 1.5, "subtotal": 4.5}
            ],
            "rationale": "ok"
        }"#;

        let plan = parse_plan_response(raw, "USD", 10.0).unwrap();
        let names: Vec<_> = plan.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Tea", "Bread"]);
        assert_eq!(plan.items[0].qty, 1);
        assert_eq!(plan.items[1].qty, 3);
        assert_eq!(plan.total, 7.5);
    }

    #[test]
    fn test_over_budget_is_flagged_not_hidden() {
        let raw = r#"{"total": 31, "currency": "USD", "items": [], "rationale": ""}"#;
        let plan = parse_plan_response(raw, "USD", 20.0).unwrap();

        assert_eq!(plan.total, 31.0);
        assert!(!plan.within_budget);
    }

    #[test]
    fn test_sub_cent_overshoot_is_not_rounded_away() {
        let raw = r#"{"total": 20.004, "currency": "KWD", "items": [], "rationale": ""}"#;
        let plan = parse_plan_response(raw, "KWD", 20.0).unwrap();

        assert_eq!(plan.total, 20.004);
        assert!(!plan.within_budget);
    }

    #[test]
    fn test_missing_currency_uses_menu_currency() {
        let raw = r#"{"total": 1, "items": [], "rationale": ""}"#;
        let plan = parse_plan_response(raw, "jpy", 20.0).unwrap();
        assert_eq!(plan.currency, "JPY");
    }

    #[test]
    fn test_empty_or_invalid_response_is_a_budget_error() {
        assert!(matches!(
            parse_plan_response("", "USD", 20.0),
            Err(CoreError::BudgetApiError(_))
        ));
        assert!(matches!(
            parse_plan_response("{oops", "USD", 20.0),
            Err(CoreError::BudgetApiError(_))
        ));
        assert!(matches!(
            parse_plan_response("[1, 2]", "USD", 20.0),
            Err(CoreError::BudgetApiError(_))
        ));
    }
}
