use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use summarizer_common::{logger, AppConfig};

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    match find_project_root().map(|root| root.join(".env")) {
        Some(env_path) if env_path.exists() => {
            dotenv::from_path(&env_path).ok();
        }
        _ => {
            dotenv::dotenv().ok();
        }
    }
}

#[derive(Parser)]
#[command(name = "summarizer")]
#[command(version, about = "Summarizer Agent - AI text summarization for chat webhooks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log to the console only
    #[arg(long, global = true)]
    console_log: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,

        /// Directory for the summary history and logs
        #[arg(long)]
        db_path: Option<PathBuf>,
    },
}

#[actix_web::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    load_dotenv_from_project_root();

    let mut config = AppConfig::from_env()?;

    if let Some(Commands::Serve { host, port, db_path }) = cli.command {
        if let Some(host) = host {
            config.server_host = host;
        }
        if let Some(port) = port {
            config.server_port = port;
        }
        if let Some(db_path) = db_path {
            config.log_dir = db_path.join("log");
            config.db_base_path = db_path;
        }
        config.validate()?;
    }

    config.ensure_directories()?;

    if cli.console_log {
        logger::setup_console_logging(&config.log_level)?;
    } else {
        logger::setup_logging(&config)?;
    }

    tracing::info!("Summarizer starting...");
    tracing::info!("  Bind: {}", config.server_bind_address());
    tracing::info!("  Model: {}", config.llm_model);
    tracing::info!("  Database: {}", config.db_base_path.display());

    println!("Server listening on http://{}", config.server_bind_address());

    summarizer_server::start_server(config).await?;

    Ok(())
}
