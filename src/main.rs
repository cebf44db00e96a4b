use std::{fs, path::PathBuf, process};

use clap::Parser;
use lazynginx::{
    config::{default_log_path, Config},
    error::Result,
    tui,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lazynginx")]
#[command(about = "Terminal dashboard for nginx")]
struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Log file (defaults to the user cache directory)
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Do not capture the mouse
    #[arg(long)]
    no_mouse: bool,
    /// Print the effective config as JSON and exit
    #[arg(long)]
    print_config: bool,
}

/// Log to a file; the terminal belongs to the dashboard.
fn init_tracing(path: PathBuf) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let log_file = fs::File::create(&path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lazynginx=info")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    init_tracing(cli.log_file.unwrap_or_else(default_log_path))?;

    let mut config = Config::load(cli.config.as_deref())?;
    if cli.no_mouse {
        config.mouse = false;
    }
    if cli.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }
    tui::run(config).await
}

#[tokio::main]
async fn main() {
    if let Err(e) = run(Cli::parse()).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
