use clap::Parser;
use directories::ProjectDirs;

use vidz::api::VidzApi;
use vidz::config::VidzConfig;
use vidz::error::Result;
use vidz::library::VideoLibrary;

mod args;
mod print;
mod shell;

use args::Cli;
use shell::PromptSelector;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = load_config();
    let library = match cli.library.as_ref().or(config.library_path.as_ref()) {
        Some(path) => VideoLibrary::from_path(path)?,
        None => VideoLibrary::builtin(),
    };

    let mut api = VidzApi::new(library, PromptSelector);
    shell::run(&mut api)
}

fn load_config() -> VidzConfig {
    let Some(dirs) = ProjectDirs::from("com", "vidz", "vidz") else {
        return VidzConfig::default();
    };
    VidzConfig::load(dirs.config_dir()).unwrap_or_default()
}
