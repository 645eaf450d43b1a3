use std::sync::Arc;

use mealmint_core::application::MealMintService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: MealMintService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: MealMintService) -> Self {
        Self { args, service }
    }
}
