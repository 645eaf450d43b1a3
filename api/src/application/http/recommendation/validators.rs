use axum::{extract::Multipart, http::StatusCode};
use bytes::{Bytes, BytesMut};
use mealmint_core::domain::{
    common::entities::app_errors::CoreError, tags::value_objects::TagInput,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::server::api_entities::api_error::ApiError;

const MAX_NOTE_LENGTH: u64 = 1000;

/// Multipart body of `POST /recommend` and `POST /recommend/basic`, for docs.
#[derive(Debug, ToSchema)]
pub struct RecommendMultipart {
    /// Menu photo
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
    #[schema(example = "20")]
    pub budget: String,
    pub user_note: Option<String>,
    /// Comma separated text or a JSON array of tags
    #[schema(example = "vegan, no mushroom")]
    pub tags: Option<String>,
    #[schema(example = "false")]
    pub ignore_profile_tags: Option<String>,
}

/// Fields read from a recommendation multipart body.
#[derive(Debug, Default)]
pub struct RecommendForm {
    pub image: Option<Bytes>,
    pub image_mime_type: Option<String>,
    pub budget: f64,
    pub user_note: Option<String>,
    pub tags: Option<TagInput>,
    pub ignore_profile_tags: bool,
}

impl RecommendForm {
    /// Reads every known field. The image is streamed and rejected as soon as
    /// it grows past `max_image_bytes`. A missing or unreadable budget is kept
    /// as NaN so the service reports it after validating the image.
    pub async fn from_multipart(
        multipart: &mut Multipart,
        max_image_bytes: usize,
    ) -> Result<Self, ApiError> {
        let mut form = RecommendForm {
            budget: f64::NAN,
            ..Default::default()
        };

        while let Some(mut field) = multipart.next_field().await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                ApiError::from(CoreError::ImageTooLarge {
                    max_bytes: max_image_bytes,
                })
            } else {
                ApiError::BadRequest(format!("Failed to read multipart field: {}", e.body_text()))
            }
        })? {
            let name = field.name().unwrap_or("").to_string();

            match name.as_str() {
                "image" => {
                    form.image_mime_type = Some(
                        field
                            .content_type()
                            .unwrap_or("application/octet-stream")
                            .to_string(),
                    );

                    let mut buffer = BytesMut::new();
                    while let Some(chunk) = field.chunk().await.map_err(|e| {
                        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                            ApiError::from(CoreError::ImageTooLarge {
                                max_bytes: max_image_bytes,
                            })
                        } else {
                            ApiError::BadRequest(format!("Failed to read image: {}", e.body_text()))
                        }
                    })? {
                        if buffer.len() + chunk.len() > max_image_bytes {
                            return Err(CoreError::ImageTooLarge {
                                max_bytes: max_image_bytes,
                            }
                            .into());
                        }
                        buffer.extend_from_slice(&chunk);
                    }

                    form.image = Some(buffer.freeze());
                }
                "budget" => {
                    let value = read_text(field, "budget").await?;
                    form.budget = parse_budget_text(&value);
                }
                "user_note" => {
                    let value = read_text(field, "user_note").await?;
                    if value.chars().count() as u64 > MAX_NOTE_LENGTH {
                        return Err(ApiError::BadRequest(format!(
                            "user_note must be at most {} characters",
                            MAX_NOTE_LENGTH
                        )));
                    }
                    form.user_note = Some(value);
                }
                "tags" => {
                    let value = read_text(field, "tags").await?;
                    form.tags = Some(parse_tags_field(&value));
                }
                "ignore_profile_tags" => {
                    let value = read_text(field, "ignore_profile_tags").await?;
                    form.ignore_profile_tags = parse_flag(&value);
                }
                _ => {}
            }
        }

        Ok(form)
    }

    /// Fails with `MISSING_IMAGE` when no file was sent.
    pub fn require_image(&self) -> Result<(), ApiError> {
        match &self.image {
            Some(_) => Ok(()),
            None => Err(CoreError::MissingImage.into()),
        }
    }
}

async fn read_text(
    field: axum::extract::multipart::Field<'_>,
    name: &str,
) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read {}: {}", name, e.body_text())))
}

/// Tags arrive either as comma separated text or as a JSON array.
pub fn parse_tags_field(value: &str) -> TagInput {
    let trimmed = value.trim();
    if trimmed.starts_with('[')
        && let Ok(list) = serde_json::from_str::<Vec<String>>(trimmed)
    {
        return TagInput::List(list);
    }
    TagInput::Text(value.to_string())
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

/// Reads a budget sent as text. Anything unreadable becomes NaN, which the
/// service rejects as `INVALID_BUDGET`.
pub fn parse_budget_text(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct RebudgetValidator {
    #[schema(value_type = f64, example = 30.0)]
    pub budget: Option<Value>,
    #[validate(length(max = 1000, message = "user_note must be at most 1000 characters"))]
    pub user_note: Option<String>,
    pub tags: Option<TagInput>,
}

impl RebudgetValidator {
    /// Budget as a number; missing, null or non-numeric values become NaN.
    pub fn budget_amount(&self) -> f64 {
        match &self.budget {
            Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
            Some(Value::String(text)) => parse_budget_text(text),
            _ => f64::NAN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_field_shapes() {
        assert_eq!(
            parse_tags_field(r#"["vegan", "no nuts"]"#),
            TagInput::List(vec!["vegan".to_string(), "no nuts".to_string()])
        );
        assert_eq!(
            parse_tags_field("vegan, no nuts"),
            TagInput::Text("vegan, no nuts".to_string())
        );
        assert_eq!(
            parse_tags_field("[not json"),
            TagInput::Text("[not json".to_string())
        );
    }

    #[test]
    fn test_flag_parsing() {
        assert!(parse_flag("true"));
        assert!(parse_flag(" Yes "));
        assert!(parse_flag("1"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn test_rebudget_budget_amount() {
        let read = |body: &str| {
            serde_json::from_str::<RebudgetValidator>(body)
                .unwrap()
                .budget_amount()
        };

        assert_eq!(read(r#"{"budget": 12.5}"#), 12.5);
        assert_eq!(read(r#"{"budget": " 30 "}"#), 30.0);
        assert!(read(r#"{"budget": "cheap"}"#).is_nan());
        assert!(read(r#"{"budget": null}"#).is_nan());
        assert!(read(r#"{"budget": [10]}"#).is_nan());
        assert!(read(r#"{}"#).is_nan());
    }
}
