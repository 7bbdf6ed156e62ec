use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;
use validator::Validate;

use subtitle_domain::{
    render_srt, subtitle_blocks, AudioIngestPort, RecognitionRequest, RecognizerPort,
};

use crate::{ApplicationError, GenerateSubtitlesRequest, GenerateSubtitlesResponse};

#[async_trait]
pub trait SubtitleUseCase: Send + Sync {
    async fn generate(
        &self,
        request: GenerateSubtitlesRequest,
    ) -> Result<GenerateSubtitlesResponse, ApplicationError>;
}

pub struct SubtitleUseCaseImpl {
    ingest: Arc<dyn AudioIngestPort>,
    recognizer: Arc<dyn RecognizerPort>,
}

impl SubtitleUseCaseImpl {
    pub fn new(ingest: Arc<dyn AudioIngestPort>, recognizer: Arc<dyn RecognizerPort>) -> Self {
        Self { ingest, recognizer }
    }
}

#[async_trait]
impl SubtitleUseCase for SubtitleUseCaseImpl {
    async fn generate(
        &self,
        request: GenerateSubtitlesRequest,
    ) -> Result<GenerateSubtitlesResponse, ApplicationError> {
        request
            .validate()
            .map_err(|err| ApplicationError::Validation(err.to_string()))?;

        let request_id = Uuid::new_v4();
        tracing::debug!(
            %request_id,
            payload_bytes = request.audio.len(),
            "starting subtitle generation"
        );

        let clip = self.ingest.decode(&request.audio)?;
        tracing::debug!(
            %request_id,
            frames = clip.frames,
            sample_rate_hz = clip.sample_rate_hz,
            duration_secs = clip.duration_secs(),
            "audio payload validated"
        );

        let output = self
            .recognizer
            .recognize(RecognitionRequest {
                sample_rate_hz: clip.sample_rate_hz,
                samples: clip.samples,
            })
            .await?;

        let blocks = subtitle_blocks(&output.utterances);
        let srt = render_srt(&blocks);

        tracing::debug!(
            %request_id,
            utterance_count = output.utterances.len(),
            block_count = blocks.len(),
            "subtitle generation completed"
        );

        Ok(GenerateSubtitlesResponse { srt })
    }
}
