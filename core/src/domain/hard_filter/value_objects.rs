use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::menu::entities::MenuItem;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FilterDebug {
    pub item_name: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FilterResult {
    pub allowed_items: Vec<MenuItem>,
    pub removed_count: usize,
    pub hard_core: Vec<String>,
    pub neg_keys: Vec<String>,
    pub soft: Vec<String>,
    pub debug: Vec<FilterDebug>,
}
