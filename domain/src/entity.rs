use serde::{Deserialize, Serialize};

/// Channel count the recognizer accepts.
pub const REQUIRED_CHANNELS: u16 = 1;

/// Sample width the recognizer accepts, in bits.
pub const REQUIRED_BITS_PER_SAMPLE: u16 = 16;

/// A validated PCM clip extracted from a WAV container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioClip {
    pub channels: u16,
    pub sample_rate_hz: u32,
    pub bits_per_sample: u16,
    pub frames: u32,
    pub samples: Vec<i16>,
}

impl AudioClip {
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate_hz == 0 {
            return 0.0;
        }
        f64::from(self.frames) / f64::from(self.sample_rate_hz)
    }
}

/// One recognized word with its timing, in fractional seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordTiming {
    pub word: String,
    pub start_secs: f64,
    pub end_secs: f64,
}

/// One speech segment reported by the recognizer.
///
/// `words` is empty for non-speech segments. `summary_text` is the
/// engine's flat transcription of the segment; it can be non-empty even
/// when no word timings were produced, in which case the segment is
/// still treated as non-speech downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizedUtterance {
    pub words: Vec<WordTiming>,
    pub summary_text: String,
}

#[derive(Debug, Clone)]
pub struct RecognitionRequest {
    pub sample_rate_hz: u32,
    pub samples: Vec<i16>,
}

#[derive(Debug, Clone)]
pub struct RecognitionOutput {
    pub utterances: Vec<RecognizedUtterance>,
}
