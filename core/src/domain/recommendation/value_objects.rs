use bytes::Bytes;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    budget::entities::RecommendationPlan, hard_filter::value_objects::FilterResult,
    menu::entities::MenuInfo, tags::value_objects::TagInput,
};

/// Input of the base controller: extraction then planning, nothing else.
#[derive(Debug, Clone)]
pub struct HandleRecommendInput {
    pub image_buffer: Option<Bytes>,
    pub image_mime_type: Option<String>,
    pub budget: f64,
    pub user_note: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RecommendInput {
    pub image_buffer: Option<Bytes>,
    pub image_mime_type: Option<String>,
    pub budget: f64,
    pub user_note: Option<String>,
    pub tags: Option<TagInput>,
    pub ignore_profile_tags: bool,
}

#[derive(Debug, Clone)]
pub struct RebudgetInput {
    pub budget: f64,
    pub user_note: Option<String>,
    pub tags: Option<TagInput>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BasicRecommendation {
    pub menu_info: MenuInfo,
    pub recommendation: RecommendationPlan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecommendOutput {
    pub menu_info: MenuInfo,
    pub filter: FilterResult,
    pub recommendation: RecommendationPlan,
    pub tags: Vec<String>,
    pub menu_hash: Option<String>,
    pub cached: bool,
}
