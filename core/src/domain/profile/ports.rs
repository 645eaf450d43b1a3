use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, recommendation_cache::value_objects::SessionKey,
};

/// Source of the dietary tags saved on a user's profile.
#[cfg_attr(test, mockall::automock)]
pub trait ProfileTagRepository: Send + Sync {
    fn get_profile_tags(
        &self,
        session: SessionKey,
    ) -> impl Future<Output = Result<Option<Vec<String>>, CoreError>> + Send;

    fn set_profile_tags(
        &self,
        session: SessionKey,
        tags: Vec<String>,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;
}
