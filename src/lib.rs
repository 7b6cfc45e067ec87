pub mod config;
pub mod ffmpeg;
pub mod naming;
pub mod pipeline;
pub mod prompt;
pub mod quality;
pub mod ytdlp;

use quality::{AudioQuality, VideoQuality};

/// Output container chosen by the user, with its quality parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Mp3(AudioQuality),
    Mp4(VideoQuality),
}

impl OutputKind {
    pub fn extension(self) -> &'static str {
        match self {
            OutputKind::Mp3(_) => "mp3",
            OutputKind::Mp4(_) => "mp4",
        }
    }
}

/// One download job collected from the interactive prompts.
#[derive(Debug, Clone)]
pub struct MediaRequest {
    pub url: String,
    pub output: OutputKind,
}

/// Accept full watch URLs and youtu.be short links; everything else is
/// rejected before any subprocess runs.
pub fn is_youtube_url(input: &str) -> bool {
    let input = input.trim();
    input.starts_with("https://www.youtube.com/") || input.starts_with("https://youtu.be/")
}
