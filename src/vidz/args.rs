use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vidz")]
#[command(about = "A toy video-player shell for the command line", long_about = None)]
pub struct Cli {
    /// Load the video library from a JSON file instead of the built-in catalog
    #[arg(short, long, value_name = "FILE")]
    pub library: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
