pub mod subtitles;

pub use subtitles::*;
