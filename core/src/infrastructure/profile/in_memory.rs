use std::sync::Arc;

use dashmap::DashMap;
use tokio::time::Instant;
use tracing::debug;

use crate::domain::{
    common::entities::app_errors::CoreError, profile::ports::ProfileTagRepository,
    recommendation_cache::value_objects::SessionKey,
};

#[derive(Debug, Clone)]
struct StoredTags {
    tags: Vec<String>,
    updated_at: Instant,
}

/// Profile tags per session, capped at `max_sessions` entries.
#[derive(Debug, Clone)]
pub struct InMemoryProfileTagRepository {
    profiles: Arc<DashMap<SessionKey, StoredTags>>,
    max_sessions: usize,
}

impl InMemoryProfileTagRepository {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            profiles: Arc::new(DashMap::new()),
            max_sessions: max_sessions.max(1),
        }
    }

    fn make_room(&self, session: &SessionKey) {
        if self.profiles.contains_key(session) || self.profiles.len() < self.max_sessions {
            return;
        }

        let oldest = self
            .profiles
            .iter()
            .min_by_key(|stored| stored.updated_at)
            .map(|stored| stored.key().clone());

        if let Some(oldest) = oldest {
            debug!(session = %oldest, "profile store full, evicting oldest tags");
            self.profiles.remove(&oldest);
        }
    }
}

impl ProfileTagRepository for InMemoryProfileTagRepository {
    async fn get_profile_tags(&self, session: SessionKey) -> Result<Option<Vec<String>>, CoreError> {
        Ok(self
            .profiles
            .get(&session)
            .map(|stored| stored.tags.clone()))
    }

    async fn set_profile_tags(
        &self,
        session: SessionKey,
        tags: Vec<String>,
    ) -> Result<Vec<String>, CoreError> {
        if tags.is_empty() {
            self.profiles.remove(&session);
        } else {
            self.make_room(&session);
            self.profiles.insert(
                session,
                StoredTags {
                    tags: tags.clone(),
                    updated_at: Instant::now(),
                },
            );
        }

        Ok(tags)
    }
}
