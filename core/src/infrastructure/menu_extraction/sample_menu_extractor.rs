use tracing::debug;

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu::{
        entities::{MenuInfo, MenuItem},
        ports::MenuExtractor,
        value_objects::MenuImage,
    },
};

/// Offline extractor returning a fixed menu whatever the photo shows.
#[derive(Debug, Clone, Default)]
pub struct SampleMenuExtractor;

impl SampleMenuExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn sample_menu() -> MenuInfo {
        MenuInfo::new(
            "USD",
            vec![
                MenuItem::new("Spring Rolls", 6.50)
                    .with_description("Crispy vegetable rolls with sweet chili sauce")
                    .with_category("Starters"),
                MenuItem::new("Fried Rice", 11.00)
                    .with_description("Wok fried rice with egg and scallions")
                    .with_category("Mains"),
                MenuItem::new("Kung Pao Chicken", 13.50)
                    .with_description("Chicken with peanuts and dried chilies")
                    .with_category("Mains"),
                MenuItem::new("Jasmine Tea", 3.00)
                    .with_description("Hot pot of jasmine tea")
                    .with_category("Drinks"),
                MenuItem::new("Mango Pudding", 5.00)
                    .with_description("Chilled mango pudding with cream")
                    .with_category("Desserts"),
            ],
        )
    }
}

impl MenuExtractor for SampleMenuExtractor {
    async fn extract_menu(&self, image: MenuImage) -> Result<MenuInfo, CoreError> {
        debug!(
            bytes = image.bytes().len(),
            mime_type = image.mime_type(),
            "returning sample menu"
        );
        Ok(Self::sample_menu())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sample_menu_ignores_image() {
        let extractor = SampleMenuExtractor::new();
        let first = extractor
            .extract_menu(MenuImage::new(vec![1u8], "image/png").unwrap())
            .await
            .unwrap();
        let second = extractor
            .extract_menu(MenuImage::new(vec![9u8, 9, 9], "image/webp").unwrap())
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(first.currency, "USD");
        assert_eq!(first.items.len(), 5);
        assert_eq!(first.items[0].name, "Spring Rolls");
    }
}
