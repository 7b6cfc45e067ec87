use std::path::{Path, PathBuf};
use std::process::Command;

use eyre::{Result, bail};
use log::debug;
use serde::Deserialize;

/// Slice of the yt-dlp `--dump-json` output we care about.
#[derive(Debug, Deserialize)]
pub struct VideoMetadata {
    #[serde(default)]
    pub title: Option<String>,
}

impl VideoMetadata {
    /// Title to name the output file after. yt-dlp occasionally reports no
    /// title; fall back to a fixed placeholder.
    pub fn title_or_default(&self) -> &str {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or("video")
    }
}

/// Ask a tool for its version, as a single trimmed line. None means the tool
/// is missing or refused to run.
pub fn tool_version(name: &str, version_flag: &str) -> Option<String> {
    Command::new(name)
        .arg(version_flag)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| {
            String::from_utf8_lossy(&o.stdout)
                .trim()
                .lines()
                .next()
                .unwrap_or("")
                .to_string()
        })
}

/// Fetch video metadata without downloading anything.
pub fn fetch_metadata(url: &str) -> Result<VideoMetadata> {
    debug!("Fetching metadata via yt-dlp: {url}");

    let output = Command::new("yt-dlp")
        .args(["--dump-json", "--no-playlist", url])
        .output();

    let output = match output {
        Ok(o) => o,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => bail!(not_found_hint()),
        Err(e) => bail!("failed to run yt-dlp: {e}"),
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("yt-dlp metadata fetch failed: {}", last_line(&stderr));
    }

    Ok(serde_json::from_slice(&output.stdout)?)
}

/// Download the best audio stream and extract it to m4a. Returns the path of
/// the intermediate file, which the caller transcodes and removes.
pub fn download_audio(url: &str, dir: &Path) -> Result<PathBuf> {
    let output_template = dir.join("audio.%(ext)s");
    let expected = dir.join("audio.m4a");

    debug!("Downloading audio via yt-dlp: {url}");

    let status = Command::new("yt-dlp")
        .args([
            "-f",
            "bestaudio/best",
            "--extract-audio",
            "--audio-format",
            "m4a",
            "--audio-quality",
            "192",
            "--no-playlist",
            "-o",
        ])
        .arg(&output_template)
        .arg(url)
        .status();

    check_exit(status)?;

    if !expected.exists() {
        bail!(
            "yt-dlp did not produce expected output file: {}",
            expected.display()
        );
    }

    Ok(expected)
}

/// Download video+audio per the format selector, merged into mp4. Returns the
/// path of the intermediate file, which the caller renames into place.
pub fn download_video(url: &str, format_selector: &str, dir: &Path) -> Result<PathBuf> {
    let output_template = dir.join("video.%(ext)s");
    let expected = dir.join("video.mp4");

    debug!("Downloading video via yt-dlp: {url} (format: {format_selector})");

    let status = Command::new("yt-dlp")
        .args(["-f", format_selector, "--merge-output-format", "mp4", "--no-playlist", "-o"])
        .arg(&output_template)
        .arg(url)
        .status();

    check_exit(status)?;

    if !expected.exists() {
        bail!(
            "yt-dlp did not produce expected output file: {}",
            expected.display()
        );
    }

    Ok(expected)
}

fn check_exit(status: std::io::Result<std::process::ExitStatus>) -> Result<()> {
    match status {
        Ok(s) if s.success() => Ok(()),
        Ok(s) => bail!("yt-dlp exited with status {s}"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => bail!(not_found_hint()),
        Err(e) => bail!("failed to run yt-dlp: {e}"),
    }
}

fn not_found_hint() -> String {
    "yt-dlp not found. Install it:\n  \
     pip install yt-dlp\n  \
     or: brew install yt-dlp"
        .to_string()
}

fn last_line(stderr: &str) -> &str {
    stderr.trim().lines().next_back().unwrap_or("(no output)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_title_present() {
        let meta: VideoMetadata = serde_json::from_str(r#"{"title": "My Video", "id": "x"}"#).unwrap();
        assert_eq!(meta.title_or_default(), "My Video");
    }

    #[test]
    fn test_metadata_title_missing_falls_back() {
        let meta: VideoMetadata = serde_json::from_str(r#"{"id": "x"}"#).unwrap();
        assert_eq!(meta.title_or_default(), "video");
    }

    #[test]
    fn test_metadata_title_blank_falls_back() {
        let meta: VideoMetadata = serde_json::from_str(r#"{"title": "   "}"#).unwrap();
        assert_eq!(meta.title_or_default(), "video");
    }

    #[test]
    fn test_last_line_picks_final_stderr_line() {
        assert_eq!(last_line("warning: x\nERROR: unavailable\n"), "ERROR: unavailable");
        assert_eq!(last_line(""), "(no output)");
    }
}
