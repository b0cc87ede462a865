mod cli;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use trellis_core::AppConfig;
use trellis_tui::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("TRELLIS_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .with_context(|| format!("cannot open debug log {}", log_path))?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    if cli.empty {
        config.lists = Some(Vec::new());
    }

    match cli.command {
        None => {
            let mut app = App::new(&config);
            app.run().await?;
        }
        Some(Commands::Config) => {
            print!("{}", config.effective().to_toml_string()?);
        }
        Some(Commands::Completions { shell }) => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "trellis", &mut std::io::stdout());
        }
    }

    Ok(())
}
