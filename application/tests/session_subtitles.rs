use std::sync::Arc;

use async_trait::async_trait;

use subtitle_application::{
    ApplicationError, GenerateSubtitlesRequest, SubtitleUseCase, SubtitleUseCaseImpl,
};
use subtitle_domain::{
    AudioClip, AudioIngestPort, DomainError, RecognitionOutput, RecognitionRequest,
    RecognizedUtterance, RecognizerPort, WordTiming,
};

struct MockIngest;

impl AudioIngestPort for MockIngest {
    fn decode(&self, _payload: &str) -> Result<AudioClip, DomainError> {
        Ok(AudioClip {
            channels: 1,
            sample_rate_hz: 16_000,
            bits_per_sample: 16,
            frames: 32_000,
            samples: vec![0; 32_000],
        })
    }
}

struct RejectingIngest;

impl AudioIngestPort for RejectingIngest {
    fn decode(&self, _payload: &str) -> Result<AudioClip, DomainError> {
        Err(DomainError::UnsupportedProfile {
            channels: 2,
            sample_rate_hz: 44_100,
            bits_per_sample: 16,
            required_sample_rate_hz: 16_000,
        })
    }
}

struct MockRecognizer {
    utterances: Vec<RecognizedUtterance>,
}

#[async_trait]
impl RecognizerPort for MockRecognizer {
    async fn recognize(
        &self,
        request: RecognitionRequest,
    ) -> Result<RecognitionOutput, DomainError> {
        assert_eq!(request.sample_rate_hz, 16_000);
        Ok(RecognitionOutput {
            utterances: self.utterances.clone(),
        })
    }
}

struct FailingRecognizer;

#[async_trait]
impl RecognizerPort for FailingRecognizer {
    async fn recognize(
        &self,
        _request: RecognitionRequest,
    ) -> Result<RecognitionOutput, DomainError> {
        Err(DomainError::Recognition("engine crashed".to_string()))
    }
}

fn word(word: &str, start_secs: f64, end_secs: f64) -> WordTiming {
    WordTiming {
        word: word.to_string(),
        start_secs,
        end_secs,
    }
}

fn request() -> GenerateSubtitlesRequest {
    GenerateSubtitlesRequest {
        audio: "UklGRg==".to_string(),
    }
}

#[tokio::test]
async fn generate_renders_srt_from_recognized_words() {
    let recognizer = MockRecognizer {
        utterances: vec![
            RecognizedUtterance {
                words: vec![word("hello", 0.5, 0.8), word("world", 0.9, 1.2)],
                summary_text: "hello world".to_string(),
            },
            RecognizedUtterance {
                words: Vec::new(),
                summary_text: String::new(),
            },
        ],
    };
    let usecase: Arc<dyn SubtitleUseCase> = Arc::new(SubtitleUseCaseImpl::new(
        Arc::new(MockIngest),
        Arc::new(recognizer),
    ));

    let response = usecase.generate(request()).await.expect("subtitles");
    assert_eq!(
        response.srt,
        "1\n00:00:00,500 --> 00:00:01,200\nHello world\n"
    );
}

#[tokio::test]
async fn generate_returns_placeholder_when_nothing_was_recognized() {
    let recognizer = MockRecognizer {
        utterances: Vec::new(),
    };
    let usecase =
        SubtitleUseCaseImpl::new(Arc::new(MockIngest), Arc::new(recognizer));

    let response = usecase.generate(request()).await.expect("subtitles");
    assert_eq!(
        response.srt,
        "1\n00:00:00,000 --> 00:00:01,000\nNo speech detected\n"
    );
}

#[tokio::test]
async fn generate_rejects_empty_audio_field() {
    let recognizer = MockRecognizer {
        utterances: Vec::new(),
    };
    let usecase =
        SubtitleUseCaseImpl::new(Arc::new(MockIngest), Arc::new(recognizer));

    let error = usecase
        .generate(GenerateSubtitlesRequest {
            audio: String::new(),
        })
        .await
        .expect_err("empty payload rejected");
    assert!(matches!(error, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn generate_propagates_ingest_rejection() {
    let recognizer = MockRecognizer {
        utterances: Vec::new(),
    };
    let usecase =
        SubtitleUseCaseImpl::new(Arc::new(RejectingIngest), Arc::new(recognizer));

    let error = usecase
        .generate(request())
        .await
        .expect_err("profile violation surfaces");
    match error {
        ApplicationError::Domain(DomainError::UnsupportedProfile { channels, .. }) => {
            assert_eq!(channels, 2);
        }
        other => panic!("expected profile error, got {other:?}"),
    }
}

#[tokio::test]
async fn generate_propagates_recognizer_failure() {
    let usecase =
        SubtitleUseCaseImpl::new(Arc::new(MockIngest), Arc::new(FailingRecognizer));

    let error = usecase
        .generate(request())
        .await
        .expect_err("engine fault surfaces");
    match error {
        ApplicationError::Domain(DomainError::Recognition(message)) => {
            assert!(message.contains("engine crashed"));
        }
        other => panic!("expected recognition error, got {other:?}"),
    }
}
