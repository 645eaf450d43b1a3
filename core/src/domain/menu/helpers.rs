use serde_json::Value;

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu::entities::{MenuInfo, MenuItem},
};

pub const DEFAULT_CURRENCY: &str = "USD";

/// Parses a vision model answer into a validated [`MenuInfo`].
pub fn parse_menu_response(raw_response: &str) -> Result<MenuInfo, CoreError> {
    if raw_response.trim().is_empty() {
        return Err(CoreError::VisionApiError(
            "Empty response from vision model".to_string(),
        ));
    }

    let parsed: Value = serde_json::from_str(raw_response).map_err(|e| {
        tracing::error!("Failed to parse vision response: {}", e);
        CoreError::VisionApiError(format!("Failed to parse vision response: {}", e))
    })?;

    let currency = parsed
        .get("currency")
        .and_then(Value::as_str)
        .map(|c| c.trim().to_uppercase())
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

    let items: Vec<MenuItem> = parsed
        .get("items")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(normalize_menu_item).collect())
        .unwrap_or_default();

    if items.is_empty() {
        return Err(CoreError::NoMenuItems);
    }

    Ok(MenuInfo::new(currency, items))
}

fn normalize_menu_item(value: &Value) -> Option<MenuItem> {
    let name = optional_text(value.get("name"))?;
    let price = value.get("price").and_then(parse_price)?;

    if !price.is_finite() || price < 0.0 {
        return None;
    }

    Some(MenuItem {
        name,
        description: optional_text(value.get("description")),
        price,
        category: optional_text(value.get("category")),
    })
}

fn optional_text(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Reads a price given as a number or as text such as `"$12.50"`, `"1,200"`
/// or `"€2,50"`.
///
/// When both `.` and `,` appear, the last one is the decimal separator. A
/// lone `,` followed by one or two digits is a decimal comma; otherwise
/// commas group thousands.
pub fn parse_price(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let cleaned: String = s
                .chars()
                .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
                .collect();
            normalize_separators(&cleaned).parse::<f64>().ok()
        }
        _ => None,
    }
}

fn normalize_separators(text: &str) -> String {
    let decimal_comma = match (text.rfind(','), text.rfind('.')) {
        (Some(comma), Some(dot)) => comma > dot,
        (Some(comma), None) => {
            let decimals = text.len() - comma - 1;
            text.matches(',').count() == 1 && (1..=2).contains(&decimals)
        }
        _ => false,
    };

    if decimal_comma {
        text.replace('.', "").replace(',', ".")
    } else {
        text.replace(',', "")
    }
}
