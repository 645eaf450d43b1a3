use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    hard_filter::value_objects::FilterResult,
    menu::entities::MenuInfo,
    recommendation::value_objects::{
        BasicRecommendation, HandleRecommendInput, RebudgetInput, RecommendInput, RecommendOutput,
    },
    recommendation_cache::{entities::CacheEntry, value_objects::SessionKey},
    tags::value_objects::TagInput,
};

/// Service trait for the menu-photo to recommendation pipeline
pub trait RecommendationService: Send + Sync {
    /// Extraction followed by planning over the whole menu, no filtering or caching.
    fn handle_recommend(
        &self,
        input: HandleRecommendInput,
    ) -> impl Future<Output = Result<BasicRecommendation, CoreError>> + Send;

    /// Tag resolution, extraction (or cached menu), hard filter, planning, caching.
    fn recommend(
        &self,
        session: SessionKey,
        input: RecommendInput,
    ) -> impl Future<Output = Result<RecommendOutput, CoreError>> + Send;

    /// Re-plans the cached menu for a new budget and optionally new tags.
    fn rebudget(
        &self,
        session: SessionKey,
        input: RebudgetInput,
    ) -> impl Future<Output = Result<RecommendOutput, CoreError>> + Send;

    fn last_recommendation(
        &self,
        session: SessionKey,
    ) -> impl Future<Output = Result<CacheEntry, CoreError>> + Send;

    fn clear_cache(&self, session: SessionKey)
    -> impl Future<Output = Result<(), CoreError>> + Send;

    fn filter_menu(&self, menu: &MenuInfo, tags: Option<&TagInput>) -> FilterResult;

    fn get_profile_tags(
        &self,
        session: SessionKey,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    fn set_profile_tags(
        &self,
        session: SessionKey,
        tags: TagInput,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;
}
