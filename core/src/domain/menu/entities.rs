use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MenuItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: None,
            price,
            category: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Name and description joined, the text dietary rules are matched against.
    pub fn searchable_text(&self) -> String {
        match &self.description {
            Some(description) => format!("{} {}", self.name, description),
            None => self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MenuInfo {
    pub currency: String,
    pub items: Vec<MenuItem>,
}

impl MenuInfo {
    pub fn new(currency: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Self {
            currency: currency.into(),
            items,
        }
    }

    /// Same currency, different items.
    pub fn with_items(&self, items: Vec<MenuItem>) -> Self {
        Self {
            currency: self.currency.clone(),
            items,
        }
    }
}
