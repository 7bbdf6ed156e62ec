//! Rendering of recognized utterances into SubRip (SRT) text.

use crate::entity::RecognizedUtterance;

/// Document returned when no utterance produced usable caption text.
pub const NO_SPEECH_PLACEHOLDER: &str = "1\n00:00:00,000 --> 00:00:01,000\nNo speech detected\n";

/// One numbered caption with its time range.
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleBlock {
    pub index: usize,
    pub start_secs: f64,
    pub end_secs: f64,
    pub text: String,
}

/// Turns recognizer segments into sequentially numbered caption blocks.
///
/// Segments without word timings are dropped, including segments that
/// carry a flat `summary_text` but no word-level timing. Indices are
/// assigned only to rendered blocks, so they stay gapless.
pub fn subtitle_blocks(utterances: &[RecognizedUtterance]) -> Vec<SubtitleBlock> {
    let mut blocks = Vec::new();
    let mut index = 1;

    for utterance in utterances {
        let (Some(first), Some(last)) = (utterance.words.first(), utterance.words.last()) else {
            if !utterance.summary_text.is_empty() {
                tracing::debug!(
                    text_len = utterance.summary_text.len(),
                    "dropping recognizer segment without word timings"
                );
            }
            continue;
        };

        let joined = utterance
            .words
            .iter()
            .map(|timing| timing.word.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let text = capitalize_first(&joined);
        if text.is_empty() {
            continue;
        }

        blocks.push(SubtitleBlock {
            index,
            start_secs: first.start_secs,
            end_secs: last.end_secs,
            text,
        });
        index += 1;
    }

    blocks
}

/// Serializes caption blocks as an SRT document with `\n` line endings.
pub fn render_srt(blocks: &[SubtitleBlock]) -> String {
    if blocks.is_empty() {
        return NO_SPEECH_PLACEHOLDER.to_string();
    }

    blocks
        .iter()
        .map(|block| {
            format!(
                "{}\n{} --> {}\n{}\n",
                block.index,
                format_srt_timestamp(block.start_secs),
                format_srt_timestamp(block.end_secs),
                block.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a fractional-seconds time as `HH:MM:SS,mmm`.
///
/// The hour field is fixed at two digits; clips long enough to overflow
/// it are outside this service's domain.
pub fn format_srt_timestamp(seconds: f64) -> String {
    let ms = to_millis(seconds);
    let total_seconds = ms / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;
    let millis = ms % 1000;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, secs, millis)
}

// Recognizer timestamps sit on a millisecond grid, but their nearest
// doubles can land just under it (1.2 % 1.0 * 1000.0 truncates to 199),
// so snap to the grid once and split as integers.
fn to_millis(seconds: f64) -> u64 {
    (seconds.max(0.0) * 1000.0).round() as u64
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
