use std::io::{self, BufRead, Write};

use eyre::{Result, bail};
use log::error;

use crate::config::Config;
use crate::quality::{AudioQuality, VideoQuality};
use crate::{MediaRequest, OutputKind};

/// Print a prompt and read one trimmed line from stdin.
fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        bail!("input stream closed");
    }
    Ok(line.trim().to_string())
}

/// "yes" or "no", nothing else.
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "yes" => Some(true),
        "no" => Some(false),
        _ => None,
    }
}

/// Collect one request from the prompts. Returns None when an answer fails
/// validation; the caller logs nothing extra and starts the next iteration.
pub fn collect_request(config: &Config) -> Result<Option<MediaRequest>> {
    let url = read_line("Enter the URL of the YouTube video: ")?;
    if !crate::is_youtube_url(&url) {
        error!("Invalid YouTube URL. Please provide a valid URL.");
        return Ok(None);
    }

    let format_choice = read_line("Choose format (mp3/mp4): ")?.to_lowercase();
    let output = match format_choice.as_str() {
        "mp3" => {
            let default = config.default_audio_quality.as_deref().map(AudioQuality::resolve);
            match choose_audio_quality(default)? {
                Some(quality) => OutputKind::Mp3(quality),
                None => return Ok(None),
            }
        }
        "mp4" => {
            let default = config.default_video_quality.as_deref().map(VideoQuality::resolve);
            match choose_video_quality(default)? {
                Some(quality) => OutputKind::Mp4(quality),
                None => return Ok(None),
            }
        }
        _ => {
            error!("Invalid choice. Please choose 'mp3' or 'mp4'.");
            return Ok(None);
        }
    };

    Ok(Some(MediaRequest { url, output }))
}

fn choose_audio_quality(default: Option<AudioQuality>) -> Result<Option<AudioQuality>> {
    let prompt = match default {
        Some(d) => format!("Choose audio quality (low/medium/high) [{d}]: "),
        None => "Choose audio quality (low/medium/high): ".to_string(),
    };
    let label = read_line(&prompt)?;

    if label.is_empty() {
        if let Some(d) = default {
            return Ok(Some(d));
        }
    }
    match AudioQuality::from_menu(&label) {
        Some(quality) => Ok(Some(quality)),
        None => {
            error!("Invalid choice. Please choose 'low', 'medium', or 'high'.");
            Ok(None)
        }
    }
}

fn choose_video_quality(default: Option<VideoQuality>) -> Result<Option<VideoQuality>> {
    let prompt = match default {
        Some(d) => format!("Choose video quality (720p/1080p/1440p) [{d}]: "),
        None => "Choose video quality (720p/1080p/1440p): ".to_string(),
    };
    let label = read_line(&prompt)?;

    if label.is_empty() {
        if let Some(d) = default {
            return Ok(Some(d));
        }
    }
    match VideoQuality::from_menu(&label) {
        Some(quality) => Ok(Some(quality)),
        None => {
            error!("Invalid choice. Please choose '720p', '1080p', or '1440p'.");
            Ok(None)
        }
    }
}

/// Ask whether to keep going. Re-asks until the answer is yes or no.
pub fn ask_continue() -> Result<bool> {
    loop {
        let answer = read_line("Do you want to convert another video? (yes/no): ")?;
        match parse_yes_no(&answer) {
            Some(again) => return Ok(again),
            None => error!("Invalid input. Please enter 'yes' or 'no'."),
        }
    }
}
