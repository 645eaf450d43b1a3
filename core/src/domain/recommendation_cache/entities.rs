use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    budget::entities::RecommendationPlan, common::generate_timestamp, menu::entities::MenuInfo,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CacheEntry {
    pub id: Uuid,
    pub menu_hash: Option<String>,
    pub menu_info: MenuInfo,
    pub recommendation: RecommendationPlan,
    pub budget: f64,
    pub tags: Vec<String>,
    pub user_note: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Everything needed to overwrite a session's cache slot.
///
/// Without `image` the previous `menu_hash` is kept, so a rebudget does not
/// need the photo again.
#[derive(Debug, Clone)]
pub struct CacheWrite {
    pub image: Option<Bytes>,
    pub menu_info: MenuInfo,
    pub recommendation: RecommendationPlan,
    pub budget: f64,
    pub tags: Vec<String>,
    pub user_note: Option<String>,
}

impl CacheEntry {
    pub fn new(menu_hash: Option<String>, write: CacheWrite) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            menu_hash,
            menu_info: write.menu_info,
            recommendation: write.recommendation,
            budget: write.budget,
            tags: write.tags,
            user_note: write.user_note,
            timestamp: now,
        }
    }
}
