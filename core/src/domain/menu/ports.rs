use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu::{entities::MenuInfo, value_objects::MenuImage},
};

/// Turns a menu photo into structured items.
#[cfg_attr(test, mockall::automock)]
pub trait MenuExtractor: Send + Sync {
    fn extract_menu(
        &self,
        image: MenuImage,
    ) -> impl Future<Output = Result<MenuInfo, CoreError>> + Send;
}
