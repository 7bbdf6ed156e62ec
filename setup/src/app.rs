use std::sync::Arc;

use anyhow::Error;

use subtitle_application::{SubtitleUseCase, SubtitleUseCaseImpl};
use subtitle_configuration::{AppConfig, ServerConfig};
use subtitle_domain::{AudioIngestPort, RecognizerPort};
use subtitle_http_server::{serve, AppState};
use subtitle_infra_audio::WavAudioDecoder;

#[cfg(feature = "vosk-runtime")]
use subtitle_infra_asr_vosk::{VoskAdapterConfig, VoskRecognizerAdapter};

pub async fn build_and_run(config: AppConfig, server_config: ServerConfig) -> Result<(), Error> {
    let app = Application::new(config).await?;
    app.run(server_config).await
}

pub struct Application {
    pub config: AppConfig,
    pub state: AppState,
}

impl Application {
    pub async fn new(config: AppConfig) -> Result<Self, Error> {
        #[cfg(feature = "vosk-runtime")]
        tracing::info!("vosk runtime feature enabled");
        #[cfg(not(feature = "vosk-runtime"))]
        tracing::warn!(
            "service compiled without `vosk-runtime`; recognition will report no speech"
        );

        tracing::info!(
            sample_rate_hz = config.service.audio.sample_rate_hz,
            model_path = %config.service.recognizer.model_path,
            "initializing subtitle application"
        );

        let recognizer = build_recognizer(&config)?;
        let ingest: Arc<dyn AudioIngestPort> =
            Arc::new(WavAudioDecoder::new(config.service.audio.sample_rate_hz));
        let usecase: Arc<dyn SubtitleUseCase> =
            Arc::new(SubtitleUseCaseImpl::new(ingest, recognizer));
        let state = AppState::new(usecase);

        Ok(Self { config, state })
    }

    pub async fn run(self, server_config: ServerConfig) -> Result<(), Error> {
        tracing::info!(
            host = %server_config.host,
            port = server_config.port,
            "starting subtitle HTTP routes"
        );

        serve(self.state, server_config)
            .await
            .map_err(|err| anyhow::anyhow!("server startup failed: {err}"))
    }
}

#[cfg(feature = "vosk-runtime")]
fn build_recognizer(config: &AppConfig) -> Result<Arc<dyn RecognizerPort>, Error> {
    // 16-bit samples: two bytes each.
    let chunk_samples = (config.service.audio.chunk_bytes / 2).max(1);
    let adapter = VoskRecognizerAdapter::new(VoskAdapterConfig {
        model_path: config.service.recognizer.model_path.clone(),
        chunk_samples,
    })
    .map_err(|err| anyhow::anyhow!("recognizer startup failed: {err}"))?;
    Ok(Arc::new(adapter))
}

#[cfg(not(feature = "vosk-runtime"))]
fn build_recognizer(_config: &AppConfig) -> Result<Arc<dyn RecognizerPort>, Error> {
    Ok(Arc::new(NoSpeechRecognizer))
}

/// Stand-in recognizer for builds without the engine.
#[cfg(not(feature = "vosk-runtime"))]
struct NoSpeechRecognizer;

#[cfg(not(feature = "vosk-runtime"))]
#[async_trait::async_trait]
impl RecognizerPort for NoSpeechRecognizer {
    async fn recognize(
        &self,
        _request: subtitle_domain::RecognitionRequest,
    ) -> Result<subtitle_domain::RecognitionOutput, subtitle_domain::DomainError> {
        Ok(subtitle_domain::RecognitionOutput {
            utterances: Vec::new(),
        })
    }
}
