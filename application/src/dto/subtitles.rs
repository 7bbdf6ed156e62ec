use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateSubtitlesRequest {
    /// Base64-encoded WAV container.
    #[validate(length(min = 1))]
    pub audio: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateSubtitlesResponse {
    pub srt: String,
}
