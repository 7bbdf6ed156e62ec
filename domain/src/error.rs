use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum DomainError {
    #[error("invalid base64 audio payload: {0}")]
    Decode(String),

    #[error("malformed WAV container: {0}")]
    Format(String),

    #[error(
        "audio must be mono 16-bit WAV at {required_sample_rate_hz} Hz; \
         got {channels} channel(s) at {sample_rate_hz} Hz with {bits_per_sample}-bit samples"
    )]
    UnsupportedProfile {
        channels: u16,
        sample_rate_hz: u32,
        bits_per_sample: u16,
        required_sample_rate_hz: u32,
    },

    #[error("recognition engine failure: {0}")]
    Recognition(String),
}
