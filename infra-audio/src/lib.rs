//! WAV ingest adapter: base64 transport decoding, container parsing,
//! and enforcement of the audio profile the recognizer accepts.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use subtitle_domain::{
    AudioClip, AudioIngestPort, DomainError, REQUIRED_BITS_PER_SAMPLE, REQUIRED_CHANNELS,
};

pub struct WavAudioDecoder {
    required_sample_rate_hz: u32,
}

impl WavAudioDecoder {
    pub fn new(required_sample_rate_hz: u32) -> Self {
        Self {
            required_sample_rate_hz,
        }
    }
}

impl AudioIngestPort for WavAudioDecoder {
    fn decode(&self, payload: &str) -> Result<AudioClip, DomainError> {
        let bytes = STANDARD
            .decode(payload)
            .map_err(|err| DomainError::Decode(err.to_string()))?;

        let mut reader = hound::WavReader::new(Cursor::new(bytes))
            .map_err(|err| DomainError::Format(err.to_string()))?;
        let spec = reader.spec();

        if spec.channels != REQUIRED_CHANNELS
            || spec.sample_rate != self.required_sample_rate_hz
            || spec.bits_per_sample != REQUIRED_BITS_PER_SAMPLE
            || spec.sample_format != hound::SampleFormat::Int
        {
            return Err(DomainError::UnsupportedProfile {
                channels: spec.channels,
                sample_rate_hz: spec.sample_rate,
                bits_per_sample: spec.bits_per_sample,
                required_sample_rate_hz: self.required_sample_rate_hz,
            });
        }

        let frames = reader.duration();
        let samples = reader
            .samples::<i16>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| DomainError::Format(err.to_string()))?;

        tracing::debug!(
            frames,
            sample_rate_hz = spec.sample_rate,
            "decoded WAV payload"
        );

        Ok(AudioClip {
            channels: spec.channels,
            sample_rate_hz: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
            frames,
            samples,
        })
    }
}
