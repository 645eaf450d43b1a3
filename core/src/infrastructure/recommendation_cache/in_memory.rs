use std::{
    sync::{Arc, Weak},
    time::Duration,
};

use bytes::Bytes;
use dashmap::DashMap;
use tokio::{
    task::JoinHandle,
    time::{Instant, MissedTickBehavior},
};
use tracing::debug;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recommendation_cache::{
        entities::{CacheEntry, CacheWrite},
        helpers::compute_menu_hash,
        ports::RecommendationCache,
        value_objects::SessionKey,
    },
};

#[derive(Debug, Clone)]
struct Slot {
    entry: CacheEntry,
    stored_at: Instant,
}

fn is_expired(ttl: Option<Duration>, slot: &Slot) -> bool {
    ttl.is_some_and(|ttl| slot.stored_at.elapsed() >= ttl)
}

/// Process-local cache holding the last recommendation of each session.
///
/// At most `max_sessions` sessions are kept; a new session beyond that
/// replaces the least recently written one.
#[derive(Debug, Clone)]
pub struct InMemoryRecommendationCache {
    slots: Arc<DashMap<SessionKey, Slot>>,
    ttl: Option<Duration>,
    max_sessions: usize,
}

impl InMemoryRecommendationCache {
    pub fn new(ttl: Option<Duration>, max_sessions: usize) -> Self {
        Self {
            slots: Arc::new(DashMap::new()),
            ttl,
            max_sessions: max_sessions.max(1),
        }
    }

    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    /// Drops every expired slot and returns how many were removed.
    pub fn sweep_expired(&self) -> usize {
        sweep(&self.slots, self.ttl)
    }

    /// Sweeps expired slots every `every` until the cache is dropped.
    pub fn spawn_sweeper(&self, every: Duration) -> JoinHandle<()> {
        let slots: Weak<DashMap<SessionKey, Slot>> = Arc::downgrade(&self.slots);
        let ttl = self.ttl;
        let every = every.max(Duration::from_secs(1));

        tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + every, every);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                let Some(slots) = slots.upgrade() else {
                    break;
                };
                let removed = sweep(&slots, ttl);
                if removed > 0 {
                    debug!(removed, "swept expired recommendations");
                }
            }
        })
    }

    /// Live entry for the session, evicting it first if the TTL elapsed.
    fn live_entry(&self, session: &SessionKey) -> Option<CacheEntry> {
        {
            let slot = self.slots.get(session)?;
            if !is_expired(self.ttl, &slot) {
                return Some(slot.entry.clone());
            }
        }

        debug!(session = %session, "evicting expired recommendation");
        self.slots
            .remove_if(session, |_, slot| is_expired(self.ttl, slot));
        None
    }

    /// Frees a slot for `session` when the cache is full.
    fn make_room(&self, session: &SessionKey) {
        if self.slots.contains_key(session) || self.slots.len() < self.max_sessions {
            return;
        }

        if self.sweep_expired() > 0 && self.slots.len() < self.max_sessions {
            return;
        }

        let oldest = self
            .slots
            .iter()
            .min_by_key(|slot| slot.stored_at)
            .map(|slot| slot.key().clone());

        if let Some(oldest) = oldest {
            debug!(session = %oldest, "cache full, evicting oldest recommendation");
            self.slots.remove(&oldest);
        }
    }
}

fn sweep(slots: &DashMap<SessionKey, Slot>, ttl: Option<Duration>) -> usize {
    if ttl.is_none() {
        return 0;
    }

    let before = slots.len();
    slots.retain(|_, slot| !is_expired(ttl, slot));
    before.saturating_sub(slots.len())
}

impl RecommendationCache for InMemoryRecommendationCache {
    async fn set_last_recommendation(
        &self,
        session: SessionKey,
        write: CacheWrite,
    ) -> Result<CacheEntry, CoreError> {
        let menu_hash = match &write.image {
            Some(image) => Some(compute_menu_hash(image)),
            None => self
                .live_entry(&session)
                .and_then(|previous| previous.menu_hash),
        };

        let entry = CacheEntry::new(menu_hash, write);
        self.make_room(&session);
        self.slots.insert(
            session,
            Slot {
                entry: entry.clone(),
                stored_at: Instant::now(),
            },
        );

        Ok(entry)
    }

    async fn get_last_recommendation(
        &self,
        session: SessionKey,
    ) -> Result<Option<CacheEntry>, CoreError> {
        Ok(self.live_entry(&session))
    }

    async fn has_same_menu(
        &self,
        session: SessionKey,
        image_bytes: Bytes,
    ) -> Result<bool, CoreError> {
        let Some(cached_hash) = self.live_entry(&session).and_then(|e| e.menu_hash) else {
            return Ok(false);
        };

        Ok(cached_hash == compute_menu_hash(&image_bytes))
    }

    async fn has_same_budget(&self, session: SessionKey, budget: f64) -> Result<bool, CoreError> {
        Ok(self
            .live_entry(&session)
            .is_some_and(|entry| entry.budget == budget))
    }

    async fn clear(&self, session: SessionKey) -> Result<(), CoreError> {
        self.slots.remove(&session);
        Ok(())
    }
}
