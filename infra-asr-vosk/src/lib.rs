//! Vosk-backed recognizer adapter. The whole crate is compiled in only
//! with the `vosk-runtime` feature, which links against libvosk.
#![cfg(feature = "vosk-runtime")]

use async_trait::async_trait;
use vosk::{CompleteResult, DecodingState, Model, Recognizer};

use subtitle_domain::{
    DomainError, RecognitionOutput, RecognitionRequest, RecognizedUtterance, RecognizerPort,
    WordTiming,
};

#[derive(Debug, Clone)]
pub struct VoskAdapterConfig {
    pub model_path: String,
    pub chunk_samples: usize,
}

/// Recognizer adapter over the Vosk engine.
///
/// The model is loaded once and shared read-only; every request gets
/// its own recognizer session, which is dropped when the request ends.
pub struct VoskRecognizerAdapter {
    config: VoskAdapterConfig,
    model: Model,
}

impl VoskRecognizerAdapter {
    pub fn new(config: VoskAdapterConfig) -> Result<Self, DomainError> {
        let model = Model::new(&config.model_path).ok_or_else(|| {
            DomainError::Recognition(format!(
                "failed to load model from `{}`",
                config.model_path
            ))
        })?;
        Ok(Self { config, model })
    }
}

#[async_trait]
impl RecognizerPort for VoskRecognizerAdapter {
    async fn recognize(
        &self,
        request: RecognitionRequest,
    ) -> Result<RecognitionOutput, DomainError> {
        self.recognize_clip(request)
    }
}

impl VoskRecognizerAdapter {
    fn recognize_clip(
        &self,
        request: RecognitionRequest,
    ) -> Result<RecognitionOutput, DomainError> {
        let mut recognizer = Recognizer::new(&self.model, request.sample_rate_hz as f32)
            .ok_or_else(|| {
                DomainError::Recognition("failed to create recognizer session".to_string())
            })?;
        recognizer.set_words(true);

        let chunk_samples = self.config.chunk_samples.max(1);
        let mut utterances = Vec::new();

        for chunk in request.samples.chunks(chunk_samples) {
            let state = recognizer
                .accept_waveform(chunk)
                .map_err(|err| DomainError::Recognition(format!("waveform rejected: {err}")))?;
            match state {
                DecodingState::Finalized => utterances.push(to_utterance(recognizer.result())),
                DecodingState::Failed => {
                    return Err(DomainError::Recognition(
                        "decoder reported a failure".to_string(),
                    ));
                }
                DecodingState::Running => {}
            }
        }

        // Trailing partial result; kept only when the engine produced text.
        let trailing = to_utterance(recognizer.final_result());
        if !trailing.summary_text.is_empty() || !trailing.words.is_empty() {
            utterances.push(trailing);
        }

        Ok(RecognitionOutput { utterances })
    }
}

fn to_utterance(result: CompleteResult) -> RecognizedUtterance {
    match result {
        CompleteResult::Single(single) => RecognizedUtterance {
            words: single
                .result
                .iter()
                .map(|word| WordTiming {
                    word: word.word.to_string(),
                    start_secs: f64::from(word.start),
                    end_secs: f64::from(word.end),
                })
                .collect(),
            summary_text: single.text.to_string(),
        },
        // Alternatives are never requested; if the engine returns them
        // anyway, keep the top text without word timings.
        CompleteResult::Multiple(multiple) => RecognizedUtterance {
            words: Vec::new(),
            summary_text: multiple
                .alternatives
                .first()
                .map(|alternative| alternative.text.to_string())
                .unwrap_or_default(),
        },
    }
}
