use std::time::Duration;

/// Generic service carrying every port the recommendation pipeline needs.
///
/// Strategies are chosen when the service is built, see
/// [`crate::application::create_service`].
#[derive(Clone)]
pub struct Service<ME, BP, RC, PR> {
    pub menu_extractor: ME,
    pub budget_planner: BP,
    pub recommendation_cache: RC,
    pub profile_repository: PR,
    pub llm_timeout: Duration,
}

impl<ME, BP, RC, PR> Service<ME, BP, RC, PR> {
    pub fn new(
        menu_extractor: ME,
        budget_planner: BP,
        recommendation_cache: RC,
        profile_repository: PR,
        llm_timeout: Duration,
    ) -> Self {
        Self {
            menu_extractor,
            budget_planner,
            recommendation_cache,
            profile_repository,
            llm_timeout,
        }
    }
}
