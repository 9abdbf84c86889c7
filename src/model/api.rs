use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Envelope for successful API responses.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Success envelope carrying only a payload
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// Success envelope carrying a payload and a human-readable message
    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Success envelope carrying only a message, e.g. for deletions
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }
}

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response for a request rejected by field validation
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ValidationErrorDto {
    pub error: String,
    /// Field name mapped to the messages explaining why it was rejected
    pub fields: BTreeMap<String, Vec<String>>,
}
