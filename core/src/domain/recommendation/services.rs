use std::{future::Future, time::Duration};

use bytes::Bytes;
use tracing::{info, instrument, warn};

use crate::domain::{
    budget::{
        entities::RecommendationPlan,
        ports::BudgetPlanner,
        value_objects::{Budget, PlanningRequest},
    },
    common::{entities::app_errors::CoreError, services::Service},
    hard_filter::{services::apply_hard_filter, value_objects::FilterResult},
    menu::{entities::MenuInfo, ports::MenuExtractor, value_objects::MenuImage},
    profile::ports::ProfileTagRepository,
    recommendation::{
        ports::RecommendationService,
        value_objects::{
            BasicRecommendation, HandleRecommendInput, RebudgetInput, RecommendInput,
            RecommendOutput,
        },
    },
    recommendation_cache::{
        entities::{CacheEntry, CacheWrite},
        ports::RecommendationCache,
        value_objects::SessionKey,
    },
    tags::{
        normalizer::{normalize_tags, normalize_tags_strict, resolve_tags},
        value_objects::TagInput,
    },
};

impl<ME, BP, RC, PR> Service<ME, BP, RC, PR>
where
    ME: MenuExtractor,
    BP: BudgetPlanner,
    RC: RecommendationCache,
    PR: ProfileTagRepository,
{
    async fn extract(&self, image: MenuImage) -> Result<MenuInfo, CoreError> {
        let timeout = self.llm_timeout;
        bounded(timeout, self.menu_extractor.extract_menu(image), || {
            CoreError::VisionApiError(format!(
                "Menu extraction timed out after {}s",
                timeout.as_secs()
            ))
        })
        .await
    }

    async fn plan(
        &self,
        menu: MenuInfo,
        budget: Budget,
        user_note: Option<String>,
    ) -> Result<RecommendationPlan, CoreError> {
        if menu.items.is_empty() {
            return Ok(RecommendationPlan::empty(menu.currency, budget.amount()));
        }

        let timeout = self.llm_timeout;
        let request = PlanningRequest {
            menu,
            budget,
            user_note,
        };

        bounded(timeout, self.budget_planner.plan(request), || {
            CoreError::BudgetApiError(format!(
                "Budget planning timed out after {}s",
                timeout.as_secs()
            ))
        })
        .await
    }

    async fn plan_filtered(
        &self,
        menu: &MenuInfo,
        filter: &FilterResult,
        budget: Budget,
        user_note: Option<&str>,
    ) -> Result<RecommendationPlan, CoreError> {
        let filtered_menu = menu.with_items(filter.allowed_items.clone());
        self.plan(
            filtered_menu,
            budget,
            compose_planner_note(user_note, &filter.soft),
        )
        .await
    }

    async fn request_tags(
        &self,
        session: &SessionKey,
        explicit: Option<&TagInput>,
        ignore_profile_tags: bool,
    ) -> Result<Vec<String>, CoreError> {
        let profile_tags = if normalize_tags_strict(explicit).is_none() && !ignore_profile_tags {
            self.profile_repository
                .get_profile_tags(session.clone())
                .await?
        } else {
            None
        };

        Ok(resolve_tags(
            explicit,
            profile_tags.as_deref(),
            ignore_profile_tags,
        ))
    }
}

impl<ME, BP, RC, PR> RecommendationService for Service<ME, BP, RC, PR>
where
    ME: MenuExtractor,
    BP: BudgetPlanner,
    RC: RecommendationCache,
    PR: ProfileTagRepository,
{
    #[instrument(skip(self, input))]
    async fn handle_recommend(
        &self,
        input: HandleRecommendInput,
    ) -> Result<BasicRecommendation, CoreError> {
        let image = validate_image(input.image_buffer, input.image_mime_type)?;
        let budget = Budget::new(input.budget)?;

        let menu_info = self.extract(image).await?;
        let recommendation = self
            .plan(menu_info.clone(), budget, clean_note(input.user_note))
            .await?;

        Ok(BasicRecommendation {
            menu_info,
            recommendation,
        })
    }

    #[instrument(skip(self, session, input), fields(session = %session))]
    async fn recommend(
        &self,
        session: SessionKey,
        input: RecommendInput,
    ) -> Result<RecommendOutput, CoreError> {
        // 1. Validate before touching any adapter
        let image = validate_image(input.image_buffer, input.image_mime_type)?;
        let budget = Budget::new(input.budget)?;
        let user_note = clean_note(input.user_note);

        // 2. Resolve tags: request > profile > defaults
        let tags = self
            .request_tags(&session, input.tags.as_ref(), input.ignore_profile_tags)
            .await?;

        // 3. Reuse the cached menu when the photo is unchanged
        let cached_entry = if self
            .recommendation_cache
            .has_same_menu(session.clone(), image.bytes().clone())
            .await?
        {
            self.recommendation_cache
                .get_last_recommendation(session.clone())
                .await?
        } else {
            None
        };

        let menu_info = match cached_entry {
            Some(entry) => {
                if entry.budget == budget.amount()
                    && entry.tags == tags
                    && entry.user_note == user_note
                {
                    info!("serving cached recommendation");
                    let filter = apply_hard_filter(&entry.menu_info, &entry.tags);
                    return Ok(RecommendOutput {
                        menu_info: entry.menu_info,
                        filter,
                        recommendation: entry.recommendation,
                        tags: entry.tags,
                        menu_hash: entry.menu_hash,
                        cached: true,
                    });
                }

                info!("menu unchanged, skipping extraction");
                entry.menu_info
            }
            None => self.extract(image.clone()).await?,
        };

        // 4. Hard filter then plan
        let filter = apply_hard_filter(&menu_info, &tags);
        info!(
            items = menu_info.items.len(),
            removed = filter.removed_count,
            "menu filtered"
        );

        let recommendation = self
            .plan_filtered(&menu_info, &filter, budget, user_note.as_deref())
            .await?;

        // 5. Cache
        let entry = self
            .recommendation_cache
            .set_last_recommendation(
                session,
                CacheWrite {
                    image: Some(image.bytes().clone()),
                    menu_info: menu_info.clone(),
                    recommendation: recommendation.clone(),
                    budget: budget.amount(),
                    tags: tags.clone(),
                    user_note,
                },
            )
            .await?;

        Ok(RecommendOutput {
            menu_info,
            filter,
            recommendation,
            tags,
            menu_hash: entry.menu_hash,
            cached: false,
        })
    }

    #[instrument(skip(self, session, input), fields(session = %session))]
    async fn rebudget(
        &self,
        session: SessionKey,
        input: RebudgetInput,
    ) -> Result<RecommendOutput, CoreError> {
        let budget = Budget::new(input.budget)?;

        let entry = self
            .recommendation_cache
            .get_last_recommendation(session.clone())
            .await?
            .ok_or(CoreError::NoCache)?;

        let tags = normalize_tags_strict(input.tags.as_ref()).unwrap_or(entry.tags);
        let user_note = clean_note(input.user_note).or(entry.user_note);

        let filter = apply_hard_filter(&entry.menu_info, &tags);
        let recommendation = self
            .plan_filtered(&entry.menu_info, &filter, budget, user_note.as_deref())
            .await?;

        if !recommendation.within_budget {
            warn!(
                total = recommendation.total,
                budget = budget.amount(),
                "recommendation exceeds budget"
            );
        }

        let updated = self
            .recommendation_cache
            .set_last_recommendation(
                session,
                CacheWrite {
                    image: None,
                    menu_info: entry.menu_info.clone(),
                    recommendation: recommendation.clone(),
                    budget: budget.amount(),
                    tags: tags.clone(),
                    user_note,
                },
            )
            .await?;

        Ok(RecommendOutput {
            menu_info: entry.menu_info,
            filter,
            recommendation,
            tags,
            menu_hash: updated.menu_hash,
            cached: false,
        })
    }

    async fn last_recommendation(&self, session: SessionKey) -> Result<CacheEntry, CoreError> {
        self.recommendation_cache
            .get_last_recommendation(session)
            .await?
            .ok_or(CoreError::NoCache)
    }

    async fn clear_cache(&self, session: SessionKey) -> Result<(), CoreError> {
        self.recommendation_cache.clear(session).await
    }

    fn filter_menu(&self, menu: &MenuInfo, tags: Option<&TagInput>) -> FilterResult {
        apply_hard_filter(menu, &normalize_tags(tags))
    }

    async fn get_profile_tags(&self, session: SessionKey) -> Result<Vec<String>, CoreError> {
        Ok(self
            .profile_repository
            .get_profile_tags(session)
            .await?
            .unwrap_or_default())
    }

    async fn set_profile_tags(
        &self,
        session: SessionKey,
        tags: TagInput,
    ) -> Result<Vec<String>, CoreError> {
        let tags = normalize_tags_strict(Some(&tags)).unwrap_or_default();
        self.profile_repository.set_profile_tags(session, tags).await
    }
}

fn validate_image(
    image_buffer: Option<Bytes>,
    image_mime_type: Option<String>,
) -> Result<MenuImage, CoreError> {
    match (image_buffer, image_mime_type) {
        (Some(buffer), Some(mime_type)) => MenuImage::new(buffer, mime_type),
        _ => Err(CoreError::MissingImageBuffer),
    }
}

fn clean_note(note: Option<String>) -> Option<String> {
    note.map(|n| n.trim().to_string()).filter(|n| !n.is_empty())
}

/// Soft preferences travel to the planner as context, never as exclusions.
fn compose_planner_note(user_note: Option<&str>, soft: &[String]) -> Option<String> {
    let preferences = (!soft.is_empty()).then(|| format!("Preferences: {}.", soft.join(", ")));

    match (preferences, user_note) {
        (Some(p), Some(n)) => Some(format!("{p} {n}")),
        (Some(p), None) => Some(p),
        (None, Some(n)) => Some(n.to_string()),
        (None, None) => None,
    }
}

async fn bounded<T>(
    timeout: Duration,
    call: impl Future<Output = Result<T, CoreError>>,
    on_timeout: impl FnOnce() -> CoreError,
) -> Result<T, CoreError> {
    match tokio::time::timeout(timeout, call).await {
        Ok(result) => result,
        Err(_) => {
            let error = on_timeout();
            warn!("{}", error);
            Err(error)
        }
    }
}
