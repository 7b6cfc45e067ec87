use std::path::Path;
use std::process::{Command, Stdio};

use eyre::{Result, bail};
use log::debug;

/// Re-encode an audio file to mp3 at the given bitrate (e.g. "192k").
pub fn transcode_to_mp3(input: &Path, output: &Path, bitrate: &str) -> Result<()> {
    debug!(
        "Transcoding {} -> {} at {bitrate}",
        input.display(),
        output.display()
    );

    let result = Command::new("ffmpeg")
        .arg("-y")
        .arg("-i")
        .arg(input)
        .args(["-b:a", bitrate])
        .arg(output)
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output();

    let output_data = match result {
        Ok(o) => o,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            bail!("ffmpeg not found. Install it to use this tool.")
        }
        Err(e) => bail!("failed to run ffmpeg: {e}"),
    };

    if !output_data.status.success() {
        let stderr = String::from_utf8_lossy(&output_data.stderr);
        bail!(
            "ffmpeg exited with status {}: {}",
            output_data.status,
            stderr.trim().lines().next_back().unwrap_or("(no output)")
        );
    }

    Ok(())
}
