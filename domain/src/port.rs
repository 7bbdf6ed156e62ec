use async_trait::async_trait;

use crate::{AudioClip, DomainError, RecognitionOutput, RecognitionRequest};

/// Decodes a transport-encoded audio payload into a validated clip.
pub trait AudioIngestPort: Send + Sync {
    fn decode(&self, payload: &str) -> Result<AudioClip, DomainError>;
}

#[async_trait]
pub trait RecognizerPort: Send + Sync {
    async fn recognize(
        &self,
        request: RecognitionRequest,
    ) -> Result<RecognitionOutput, DomainError>;
}
