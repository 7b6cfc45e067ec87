use std::fs;
use std::path::{Path, PathBuf};

use eyre::Result;
use log::{info, warn};

use crate::{MediaRequest, OutputKind, naming};

/// Boundary to the external tools. One iteration of the loop only talks to
/// yt-dlp and ffmpeg through this trait, so the flow is testable without
/// either binary installed.
pub trait MediaBackend {
    /// Video title, used to name the output file.
    fn fetch_title(&self, url: &str) -> Result<String>;

    /// Download and extract the best audio stream into `dir`, returning the
    /// intermediate m4a path.
    fn fetch_audio(&self, url: &str, dir: &Path) -> Result<PathBuf>;

    /// Download per the format selector into `dir`, returning the
    /// intermediate mp4 path.
    fn fetch_video(&self, url: &str, format_selector: &str, dir: &Path) -> Result<PathBuf>;

    /// Re-encode `input` to mp3 at `bitrate`, writing `output`.
    fn transcode_audio(&self, input: &Path, output: &Path, bitrate: &str) -> Result<()>;
}

/// The real backend: yt-dlp and ffmpeg subprocesses.
pub struct ToolBackend;

impl MediaBackend for ToolBackend {
    fn fetch_title(&self, url: &str) -> Result<String> {
        Ok(crate::ytdlp::fetch_metadata(url)?.title_or_default().to_string())
    }

    fn fetch_audio(&self, url: &str, dir: &Path) -> Result<PathBuf> {
        crate::ytdlp::download_audio(url, dir)
    }

    fn fetch_video(&self, url: &str, format_selector: &str, dir: &Path) -> Result<PathBuf> {
        crate::ytdlp::download_video(url, format_selector, dir)
    }

    fn transcode_audio(&self, input: &Path, output: &Path, bitrate: &str) -> Result<()> {
        crate::ffmpeg::transcode_to_mp3(input, output, bitrate)
    }
}

/// Run one request end to end and return the path of the finished file.
///
/// mp3: fetch audio as m4a, re-encode to mp3 at the chosen bitrate, drop the
/// intermediate. mp4: fetch merged video and rename it into place. Either way
/// the destination comes from the allocator, so an existing `Title.mp3` gets
/// a `Title_1.mp3` sibling instead of being clobbered.
pub fn run(backend: &dyn MediaBackend, request: &MediaRequest, download_dir: &Path) -> Result<PathBuf> {
    let title = naming::sanitize(&backend.fetch_title(&request.url)?);

    match request.output {
        OutputKind::Mp3(quality) => {
            let intermediate = backend.fetch_audio(&request.url, download_dir)?;
            info!("Download complete");

            let dest = naming::allocate(download_dir, &title, "mp3");
            backend.transcode_audio(&intermediate, &dest, quality.bitrate())?;
            info!("Conversion to mp3 at {quality} quality complete");

            if let Err(e) = fs::remove_file(&intermediate) {
                warn!("Could not remove intermediate file {}: {e}", intermediate.display());
            }
            Ok(dest)
        }
        OutputKind::Mp4(quality) => {
            let fetched = backend.fetch_video(&request.url, quality.format_selector(), download_dir)?;
            info!("Download complete");

            let dest = naming::allocate(download_dir, &title, "mp4");
            fs::rename(&fetched, &dest)?;
            Ok(dest)
        }
    }
}
