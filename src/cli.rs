use clap::Parser;

/// Everything is collected interactively; the command line carries no
/// arguments beyond --help and --version.
#[derive(Parser)]
#[command(
    name = "ytmd",
    about = "Interactive YouTube downloader (mp3/mp4)",
    version,
)]
pub struct Cli {}
