use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("No menu items could be extracted from the image")]
    NoMenuItems,

    #[error("No image was provided")]
    MissingImage,

    #[error("Unsupported image type: {0}")]
    InvalidMimeType(String),

    #[error("Image exceeds the maximum size of {max_bytes} bytes")]
    ImageTooLarge { max_bytes: usize },

    #[error("Budget must be a finite number greater than zero")]
    InvalidBudget,

    #[error("Image buffer and mime type are required")]
    MissingImageBuffer,

    #[error("No cached recommendation for this session")]
    NoCache,

    #[error("Vision API error: {0}")]
    VisionApiError(String),

    #[error("Budget API error: {0}")]
    BudgetApiError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    /// Stable machine-readable code surfaced to clients.
    pub fn code(&self) -> &'static str {
        match self {
            CoreError::NoMenuItems => "NO_MENU_ITEMS",
            CoreError::MissingImage => "MISSING_IMAGE",
            CoreError::InvalidMimeType(_) => "INVALID_MIMETYPE",
            CoreError::ImageTooLarge { .. } => "IMAGE_TOO_LARGE",
            CoreError::InvalidBudget => "INVALID_BUDGET",
            CoreError::MissingImageBuffer => "MISSING_IMAGE_BUFFER",
            CoreError::NoCache => "NO_CACHE",
            CoreError::VisionApiError(_) => "VISION_API_ERROR",
            CoreError::BudgetApiError(_) => "BUDGET_API_ERROR",
            CoreError::ExternalServiceError(_) => "EXTERNAL_SERVICE_ERROR",
            CoreError::InvalidId(_) => "INVALID_ID",
            CoreError::InternalServerError => "INTERNAL_ERROR",
        }
    }
}
