//! Response envelope and normalisation
//!
//! Every endpoint answers `{ success, data?, error?, message? }`. A body is
//! only parsed once the status is 2xx and the content type says JSON.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::ApiError;

/// Characters of a non-JSON body kept for the error message
pub const PREVIEW_LIMIT: usize = 200;

#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// `data` of a successful envelope (may be absent), or the contract error
    pub fn into_data(self) -> Result<Option<T>, ApiError> {
        if self.success {
            return Ok(self.data);
        }
        let reason = self
            .error
            .or(self.message)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "Request failed".to_string());
        Err(ApiError::Rejected(reason))
    }
}

/// Turn a raw response into an envelope, in this order:
/// status → content type → JSON decode.
pub fn decode_envelope<T: DeserializeOwned>(
    status: u16,
    content_type: &str,
    body: &str,
) -> Result<Envelope<T>, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Status {
            status,
            body: body.trim().to_string(),
        });
    }

    if !is_json(content_type) {
        return Err(ApiError::NotJson {
            content_type: if content_type.is_empty() {
                "none".to_string()
            } else {
                content_type.to_string()
            },
            preview: preview(body),
        });
    }

    Ok(serde_json::from_str(body)?)
}

fn is_json(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || essence.ends_with("+json")
}

/// First [`PREVIEW_LIMIT`] characters (not bytes) of a body
pub fn preview(body: &str) -> String {
    body.chars().take(PREVIEW_LIMIT).collect()
}
