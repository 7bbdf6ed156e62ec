pub mod subtitles;

pub use subtitles::{SubtitleUseCase, SubtitleUseCaseImpl};
