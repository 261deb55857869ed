use std::path::PathBuf;

use clap::Parser;
use env_logger::{Builder, Target};
use log::LevelFilter;
use userdesk_config::ConfigLoader;
use userdesk_console::app::{self, AppConfig};
use userdesk_model::UserID;

/// Edit one user's profile against the user directory
#[derive(Debug, Parser)]
#[command(name = "userdesk", version)]
struct Cli {
    /// Id of the user to edit
    user_id: String,

    /// Path to a userdesk.toml file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Load environment overrides from this file instead of `.env`
    #[arg(long, value_name = "PATH")]
    env_file: Option<PathBuf>,

    /// Run against an in-memory directory instead of the server
    #[arg(long)]
    use_test_stubs: bool,
}

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("userdesk_console", LevelFilter::Debug)
        .init();
}

fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    if let Some(path) = &cli.env_file {
        loader = loader.with_env_file(path);
    }

    let load = loader.load()?;
    for warning in load.warnings.iter() {
        match &warning.hint {
            Some(hint) => log::warn!("[Config] {} ({})", warning.message, hint),
            None => log::warn!("[Config] {}", warning.message),
        }
    }

    let user_id = UserID::new(&cli.user_id)?;
    let mut config = AppConfig::new(user_id, load.config);
    if cli.use_test_stubs {
        config = config.with_test_stubs(true);
    }

    app::run(config)
}
