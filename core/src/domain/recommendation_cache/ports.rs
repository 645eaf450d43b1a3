use std::future::Future;

use bytes::Bytes;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recommendation_cache::{
        entities::{CacheEntry, CacheWrite},
        value_objects::SessionKey,
    },
};

/// Single-slot store of the last recommendation, one slot per session.
#[cfg_attr(test, mockall::automock)]
pub trait RecommendationCache: Send + Sync {
    fn set_last_recommendation(
        &self,
        session: SessionKey,
        write: CacheWrite,
    ) -> impl Future<Output = Result<CacheEntry, CoreError>> + Send;

    fn get_last_recommendation(
        &self,
        session: SessionKey,
    ) -> impl Future<Output = Result<Option<CacheEntry>, CoreError>> + Send;

    fn has_same_menu(
        &self,
        session: SessionKey,
        image_bytes: Bytes,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn has_same_budget(
        &self,
        session: SessionKey,
        budget: f64,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn clear(&self, session: SessionKey) -> impl Future<Output = Result<(), CoreError>> + Send;
}
