use mealmint_core::domain::tags::value_objects::TagInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SetProfileTagsValidator {
    pub tags: TagInput,
}
