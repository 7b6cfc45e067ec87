use eyre::{Result, bail};
use log::{debug, error, info};

mod cli;

use cli::Cli;
use ytmd::pipeline::ToolBackend;
use ytmd::ytdlp::tool_version;

fn setup_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();
}

fn build_after_help() -> String {
    let yt_dlp = tool_version("yt-dlp", "--version");
    let ffmpeg = tool_version("ffmpeg", "-version");

    let yt_dlp_line = match &yt_dlp {
        Some(v) => format!("  \x1b[32m✅\x1b[0m yt-dlp     {v}"),
        None => "  \x1b[31m❌\x1b[0m yt-dlp     (not found — needed for downloading)".to_string(),
    };
    let ffmpeg_line = match &ffmpeg {
        Some(v) => format!("  \x1b[32m✅\x1b[0m ffmpeg     {v}"),
        None => "  \x1b[31m❌\x1b[0m ffmpeg     (not found — needed for transcoding)".to_string(),
    };

    format!("\nREQUIRED TOOLS:\n{yt_dlp_line}\n{ffmpeg_line}")
}

fn main() -> Result<()> {
    setup_logging();

    let after_help = build_after_help();
    let cmd = <Cli as clap::CommandFactory>::command().after_help(after_help);
    let _matches = cmd.get_matches();

    // Load config file (non-fatal if missing/invalid)
    let config = ytmd::config::Config::load().unwrap_or_default();

    // Both tools are hard requirements; refuse to start without them rather
    // than failing halfway through a download.
    if tool_version("ffmpeg", "-version").is_none() {
        bail!("ffmpeg is not installed. Please install it to use this tool.");
    }
    if tool_version("yt-dlp", "--version").is_none() {
        bail!("yt-dlp is not installed. Please install it to use this tool.");
    }

    let download_dir = config.download_dir();
    std::fs::create_dir_all(&download_dir)?;
    debug!("Download directory: {}", download_dir.display());

    let backend = ToolBackend;

    loop {
        let request = match ytmd::prompt::collect_request(&config)? {
            Some(request) => request,
            // Validation failure was already logged; start over.
            None => continue,
        };

        match ytmd::pipeline::run(&backend, &request, &download_dir) {
            Ok(path) => info!("File saved as: {}", path.display()),
            Err(e) => error!("{e:#}"),
        }

        if !ytmd::prompt::ask_continue()? {
            break;
        }
    }

    Ok(())
}
