use mealmint_core::domain::{menu::entities::MenuInfo, tags::value_objects::TagInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

const MAX_MENU_ITEMS: usize = 500;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct FilterMenuValidator {
    #[validate(custom(function = "validate_menu"))]
    pub menu: MenuInfo,
    pub tags: Option<TagInput>,
}

fn validate_menu(menu: &MenuInfo) -> Result<(), ValidationError> {
    if menu.items.len() > MAX_MENU_ITEMS {
        return Err(ValidationError::new("menu_too_large")
            .with_message(format!("menu must have at most {} items", MAX_MENU_ITEMS).into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealmint_core::domain::menu::entities::MenuItem;

    #[test]
    fn test_menu_size_limit() {
        let small = FilterMenuValidator {
            menu: MenuInfo::new("USD", vec![MenuItem::new("Tea", 3.0)]),
            tags: None,
        };
        assert!(small.validate().is_ok());

        let large = FilterMenuValidator {
            menu: MenuInfo::new("USD", vec![MenuItem::new("Tea", 3.0); MAX_MENU_ITEMS + 1]),
            tags: None,
        };
        assert!(large.validate().is_err());
    }
}
