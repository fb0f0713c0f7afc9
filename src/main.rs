use std::path::PathBuf;

use clap::Parser;
use tinyserve::config::Config;
use tinyserve::server;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory served by the /files/ routes
    #[arg(long)]
    directory: Option<PathBuf>,

    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on, e.g. 0.0.0.0:4221
    #[arg(short, long)]
    listen: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let args = Args::parse();

    let mut cfg = Config::load(args.config.as_deref())?;
    if let Some(directory) = args.directory {
        cfg.files.directory = Some(directory);
    }
    if let Some(listen) = args.listen {
        cfg.server.listen_addr = listen;
    }

    tokio::select! {
        res = server::listener::run(&cfg) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
