use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Core diets that exclude items outright.
pub const CORE_HARD_TAGS: [&str; 3] = ["vegan", "vegetarian", "glutenfree"];

/// Tags applied when neither the request nor the profile yields any.
pub const DEFAULT_TAGS: [&str; 5] = ["glutenfree", "vegan", "vegetarian", "halal", "kosher"];

/// Tag specification as sent by a client: one delimited string or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum TagInput {
    Text(String),
    List(Vec<String>),
}

impl From<&str> for TagInput {
    fn from(value: &str) -> Self {
        TagInput::Text(value.to_string())
    }
}

impl From<Vec<String>> for TagInput {
    fn from(value: Vec<String>) -> Self {
        TagInput::List(value)
    }
}

/// A user exclusion after synonym lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NegativeTerm {
    Known {
        key: String,
        synonyms: &'static [&'static str],
    },
    Literal(String),
}

impl NegativeTerm {
    pub fn terms(&self) -> Vec<String> {
        match self {
            NegativeTerm::Known { synonyms, .. } => {
                synonyms.iter().map(|s| s.to_lowercase()).collect()
            }
            NegativeTerm::Literal(key) => vec![key.to_lowercase()],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TagClassification {
    pub hard_core: Vec<String>,
    pub neg_keys: Vec<String>,
    pub soft: Vec<String>,
}
