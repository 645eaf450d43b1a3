use bytes::Bytes;

use crate::domain::common::entities::app_errors::CoreError;

pub const ACCEPTED_IMAGE_MIME_TYPES: [&str; 7] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/webp",
    "image/gif",
    "image/heic",
    "image/heif",
];

/// Menu photo handed to the extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuImage {
    bytes: Bytes,
    mime_type: String,
}

impl MenuImage {
    pub fn new(bytes: impl Into<Bytes>, mime_type: impl Into<String>) -> Result<Self, CoreError> {
        let bytes = bytes.into();
        let mime_type = mime_type.into().trim().to_lowercase();

        if bytes.is_empty() || mime_type.is_empty() {
            return Err(CoreError::MissingImageBuffer);
        }

        if !ACCEPTED_IMAGE_MIME_TYPES.contains(&mime_type.as_str()) {
            return Err(CoreError::InvalidMimeType(mime_type));
        }

        Ok(Self { bytes, mime_type })
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }
}
