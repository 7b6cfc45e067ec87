/// Audio bitrate tier for mp3 output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudioQuality {
    Low,
    #[default]
    Medium,
    High,
}

impl AudioQuality {
    /// Strict menu lookup: only the advertised labels match.
    pub fn from_menu(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "low" => Some(AudioQuality::Low),
            "medium" => Some(AudioQuality::Medium),
            "high" => Some(AudioQuality::High),
            _ => None,
        }
    }

    /// Permissive lookup: unrecognized labels resolve to Medium rather than
    /// erroring. Used for config-supplied defaults.
    pub fn resolve(label: &str) -> Self {
        Self::from_menu(label).unwrap_or_default()
    }

    /// Bitrate string passed to the transcoder.
    pub fn bitrate(self) -> &'static str {
        match self {
            AudioQuality::Low => "128k",
            AudioQuality::Medium => "192k",
            AudioQuality::High => "320k",
        }
    }
}

impl std::fmt::Display for AudioQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AudioQuality::Low => write!(f, "low"),
            AudioQuality::Medium => write!(f, "medium"),
            AudioQuality::High => write!(f, "high"),
        }
    }
}

/// Resolution cap for mp4 output. `Best` is uncapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VideoQuality {
    P720,
    P1080,
    P1440,
    #[default]
    Best,
}

impl VideoQuality {
    /// Strict menu lookup: only the advertised labels match.
    pub fn from_menu(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "720p" => Some(VideoQuality::P720),
            "1080p" => Some(VideoQuality::P1080),
            "1440p" => Some(VideoQuality::P1440),
            _ => None,
        }
    }

    /// Permissive lookup: unrecognized labels resolve to uncapped Best rather
    /// than erroring. Used for config-supplied defaults.
    pub fn resolve(label: &str) -> Self {
        Self::from_menu(label).unwrap_or_default()
    }

    /// yt-dlp format selector expression.
    pub fn format_selector(self) -> &'static str {
        match self {
            VideoQuality::P720 => "bestvideo[height<=720]+bestaudio/best",
            VideoQuality::P1080 => "bestvideo[height<=1080]+bestaudio/best",
            VideoQuality::P1440 => "bestvideo[height<=1440]+bestaudio/best",
            VideoQuality::Best => "bestvideo+bestaudio/best",
        }
    }
}

impl std::fmt::Display for VideoQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VideoQuality::P720 => write!(f, "720p"),
            VideoQuality::P1080 => write!(f, "1080p"),
            VideoQuality::P1440 => write!(f, "1440p"),
            VideoQuality::Best => write!(f, "best"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_bitrates() {
        assert_eq!(AudioQuality::resolve("low").bitrate(), "128k");
        assert_eq!(AudioQuality::resolve("medium").bitrate(), "192k");
        assert_eq!(AudioQuality::resolve("high").bitrate(), "320k");
    }

    #[test]
    fn test_audio_unknown_label_defaults_to_medium() {
        assert_eq!(AudioQuality::resolve("unknown").bitrate(), "192k");
        assert_eq!(AudioQuality::resolve("").bitrate(), "192k");
        assert_eq!(AudioQuality::resolve("ultra").bitrate(), "192k");
    }

    #[test]
    fn test_audio_label_is_trimmed_and_case_folded() {
        assert_eq!(AudioQuality::resolve("  HIGH  "), AudioQuality::High);
        assert_eq!(AudioQuality::from_menu("Low"), Some(AudioQuality::Low));
    }

    #[test]
    fn test_audio_menu_rejects_unknown() {
        assert_eq!(AudioQuality::from_menu("best"), None);
        assert_eq!(AudioQuality::from_menu(""), None);
    }

    #[test]
    fn test_video_selectors() {
        assert_eq!(
            VideoQuality::resolve("720p").format_selector(),
            "bestvideo[height<=720]+bestaudio/best"
        );
        assert_eq!(
            VideoQuality::resolve("1080p").format_selector(),
            "bestvideo[height<=1080]+bestaudio/best"
        );
        assert_eq!(
            VideoQuality::resolve("1440p").format_selector(),
            "bestvideo[height<=1440]+bestaudio/best"
        );
    }

    #[test]
    fn test_video_unknown_label_defaults_to_best() {
        assert_eq!(
            VideoQuality::resolve("bogus").format_selector(),
            "bestvideo+bestaudio/best"
        );
        assert_eq!(VideoQuality::resolve("4k"), VideoQuality::Best);
    }

    #[test]
    fn test_video_menu_rejects_unknown() {
        assert_eq!(VideoQuality::from_menu("480p"), None);
        assert_eq!(VideoQuality::from_menu("best"), None);
    }
}
