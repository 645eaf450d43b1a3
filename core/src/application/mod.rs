use tracing::{info, warn};

use crate::{
    domain::{
        budget::{entities::RecommendationPlan, ports::BudgetPlanner, value_objects::PlanningRequest},
        common::{MealMintConfig, StrategyMode, entities::app_errors::CoreError, services::Service},
        menu::{entities::MenuInfo, ports::MenuExtractor, value_objects::MenuImage},
    },
    infrastructure::{
        budget_planning::{GreedyBudgetPlanner, LlmBudgetPlanner},
        llm::OpenAiLLMClient,
        menu_extraction::{LlmMenuExtractor, SampleMenuExtractor},
        profile::InMemoryProfileTagRepository,
        recommendation_cache::InMemoryRecommendationCache,
    },
};

pub type MealMintService = Service<
    MenuExtractorStrategy,
    BudgetPlannerStrategy,
    InMemoryRecommendationCache,
    InMemoryProfileTagRepository,
>;

#[derive(Debug, Clone)]
pub enum MenuExtractorStrategy {
    Sample(SampleMenuExtractor),
    Llm(LlmMenuExtractor<OpenAiLLMClient>),
}

impl MenuExtractor for MenuExtractorStrategy {
    async fn extract_menu(&self, image: MenuImage) -> Result<MenuInfo, CoreError> {
        match self {
            MenuExtractorStrategy::Sample(extractor) => extractor.extract_menu(image).await,
            MenuExtractorStrategy::Llm(extractor) => extractor.extract_menu(image).await,
        }
    }
}

#[derive(Debug, Clone)]
pub enum BudgetPlannerStrategy {
    Greedy(GreedyBudgetPlanner),
    Llm(LlmBudgetPlanner<OpenAiLLMClient>),
}

impl BudgetPlanner for BudgetPlannerStrategy {
    async fn plan(&self, request: PlanningRequest) -> Result<RecommendationPlan, CoreError> {
        match self {
            BudgetPlannerStrategy::Greedy(planner) => planner.plan(request).await,
            BudgetPlannerStrategy::Llm(planner) => planner.plan(request).await,
        }
    }
}

/// Builds the service with the strategies selected by `config`.
///
/// Live mode without an API key falls back to the offline strategies.
pub fn create_service(config: MealMintConfig) -> MealMintService {
    let llm = config.llm;

    let api_key = match (llm.mode, llm.api_key) {
        (StrategyMode::Live, Some(key)) if !key.trim().is_empty() => Some(key),
        (StrategyMode::Live, _) => {
            warn!("live mode requested without an API key, using sample menu and greedy planner");
            None
        }
        (StrategyMode::Mock, _) => None,
    };

    let (menu_extractor, budget_planner) = match api_key {
        Some(key) => {
            info!(
                base_url = %llm.base_url,
                vision_model = %llm.vision_model,
                budget_model = %llm.budget_model,
                "using live LLM strategies"
            );
            let client = OpenAiLLMClient::new(key, llm.base_url);
            (
                MenuExtractorStrategy::Llm(LlmMenuExtractor::new(client.clone(), llm.vision_model)),
                BudgetPlannerStrategy::Llm(LlmBudgetPlanner::new(client, llm.budget_model)),
            )
        }
        None => {
            info!("using sample menu extractor and greedy budget planner");
            (
                MenuExtractorStrategy::Sample(SampleMenuExtractor::new()),
                BudgetPlannerStrategy::Greedy(GreedyBudgetPlanner::new()),
            )
        }
    };

    Service::new(
        menu_extractor,
        budget_planner,
        InMemoryRecommendationCache::new(config.cache.ttl, config.cache.max_sessions),
        InMemoryProfileTagRepository::new(config.cache.max_sessions),
        llm.timeout,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::{CacheConfig, LLMConfig};

    fn config(mode: StrategyMode, api_key: Option<&str>) -> MealMintConfig {
        MealMintConfig {
            llm: LLMConfig {
                mode,
                api_key: api_key.map(str::to_string),
                ..LLMConfig::default()
            },
            cache: CacheConfig::default(),
        }
    }

    #[test]
    fn test_mock_mode_uses_offline_strategies() {
        let service = create_service(config(StrategyMode::Mock, Some("sk-test")));

        assert!(matches!(
            service.menu_extractor,
            MenuExtractorStrategy::Sample(_)
        ));
        assert!(matches!(
            service.budget_planner,
            BudgetPlannerStrategy::Greedy(_)
        ));
    }

    #[test]
    fn test_live_mode_without_key_falls_back() {
        let service = create_service(config(StrategyMode::Live, None));
        assert!(matches!(
            service.menu_extractor,
            MenuExtractorStrategy::Sample(_)
        ));

        let service = create_service(config(StrategyMode::Live, Some("  ")));
        assert!(matches!(
            service.budget_planner,
            BudgetPlannerStrategy::Greedy(_)
        ));
    }

    #[test]
    fn test_live_mode_with_key() {
        let service = create_service(config(StrategyMode::Live, Some("sk-test")));

        assert!(matches!(service.menu_extractor, MenuExtractorStrategy::Llm(_)));
        assert!(matches!(service.budget_planner, BudgetPlannerStrategy::Llm(_)));
    }
}
