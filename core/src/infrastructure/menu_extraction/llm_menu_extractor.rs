use tracing::{error, info};

use crate::domain::{
    common::entities::app_errors::CoreError,
    llm::ports::LLMClient,
    menu::{
        entities::MenuInfo,
        helpers::parse_menu_response,
        ports::MenuExtractor,
        schema::{MENU_EXTRACTION_PROMPT, get_menu_extraction_schema},
        value_objects::MenuImage,
    },
};

/// Reads menu photos with a vision model.
#[derive(Debug, Clone)]
pub struct LlmMenuExtractor<L> {
    llm_client: L,
    model: String,
}

impl<L> LlmMenuExtractor<L>
where
    L: LLMClient,
{
    pub fn new(llm_client: L, model: impl Into<String>) -> Self {
        Self {
            llm_client,
            model: model.into(),
        }
    }
}

impl<L> MenuExtractor for LlmMenuExtractor<L>
where
    L: LLMClient,
{
    async fn extract_menu(&self, image: MenuImage) -> Result<MenuInfo, CoreError> {
        let raw = self
            .llm_client
            .generate_with_image(
                self.model.clone(),
                MENU_EXTRACTION_PROMPT.to_string(),
                image.bytes().to_vec(),
                image.mime_type().to_string(),
                get_menu_extraction_schema(),
            )
            .await
            .map_err(|e| {
                error!("Menu extraction failed: {}", e);
                match e {
                    CoreError::ExternalServiceError(message) => CoreError::VisionApiError(message),
                    other => other,
                }
            })?;

        let menu = parse_menu_response(&raw)?;
        info!(items = menu.items.len(), currency = %menu.currency, "menu extracted");

        Ok(menu)
    }
}
