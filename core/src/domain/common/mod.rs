use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct MealMintConfig {
    pub llm: LLMConfig,
    pub cache: CacheConfig,
}

/// Which implementation backs the menu extractor and the budget planner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyMode {
    Mock,
    Live,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub mode: StrategyMode,
    pub api_key: Option<String>,
    pub base_url: String,
    pub vision_model: String,
    pub budget_model: String,
    pub timeout: Duration,
}

/// Limits of the per-session stores.
#[derive(Clone, Debug)]
pub struct CacheConfig {
    pub ttl: Option<Duration>,
    pub max_sessions: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: None,
            max_sessions: 10_000,
        }
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            mode: StrategyMode::Mock,
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            vision_model: "gpt-4o-mini".to_string(),
            budget_model: "gpt-4o-mini".to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

const BUDGET_TOLERANCE: f64 = 1e-9;

/// Whether `amount` stays within `budget`, ignoring float noise only.
///
/// The tolerance is relative to the budget, so sub-cent prices of
/// three-decimal currencies still count.
pub fn fits_budget(amount: f64, budget: f64) -> bool {
    amount <= budget + BUDGET_TOLERANCE * budget.abs().max(1.0)
}
