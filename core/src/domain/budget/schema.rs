use serde_json::json;

/// Returns the JSON schema for budget plan LLM responses
pub fn get_budget_plan_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "total": { "type": "number" },
            "currency": { "type": "string" },
            "items": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "qty": { "type": "integer" },
                        "unit_price": { "type": "number" },
                        "subtotal": { "type": "number" }
                    },
                    "required": ["name", "qty", "unit_price", "subtotal"],
                    "additionalProperties": false
                }
            },
            "rationale": { "type": "string" }
        },
        "required": ["total", "currency", "items", "rationale"],
        "additionalProperties": false
    })
}
