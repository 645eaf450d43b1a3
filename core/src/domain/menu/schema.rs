use serde_json::json;

/// Returns the JSON schema for menu extraction LLM responses
pub fn get_menu_extraction_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "currency": { "type": "string" },
            "items": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "description": { "type": "string" },
                        "price": { "type": "number" },
                        "category": { "type": "string" }
                    },
                    "required": ["name", "description", "price", "category"],
                    "additionalProperties": false
                }
            }
        },
        "required": ["currency", "items"],
        "additionalProperties": false
    })
}

pub const MENU_EXTRACTION_PROMPT: &str = "You read restaurant menus. Extract every orderable \
item visible in the photo. For each item return its name, a short description (empty string \
if none is printed), its price as a plain number without currency symbols, and the menu \
section it belongs to (empty string if unknown). Return the ISO 4217 currency code of the \
prices. Skip items without a readable price.";
