use clap::Parser;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use wanderer::commands::{CmdCtx, CommandError, Flow};
use wanderer::output::Output;
use wanderer::store::LocalStore;
use wanderer::{Registry, Session, banner, config, db, process_command};

/// A tiny chat-dungeon front-end
#[derive(Debug, Parser)]
#[command(name = "wanderer", version)]
struct Cli {
    /// Name to greet you by while anonymous
    #[arg(long)]
    name: Option<String>,

    /// Read configuration from a TOML file instead of the environment
    #[arg(long)]
    config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let cfg = Arc::new(match &cli.config {
        Some(path) => config::Config::load(path)?,
        None => config::Config::from_env()?,
    });

    let db = Arc::new(db::Db::new(&cfg.database_url)?);
    if let Err(e) = db.init().await {
        // Anonymous play needs no backend; signed-in commands will surface
        // their own fetch failures.
        tracing::warn!(error = %e, "remote storage unavailable; progress stays local until it returns");
    }

    let store = Arc::new(LocalStore::open(cfg.data_dir.join("local_store.json")));
    let registry = Arc::new(Registry::new(db, store, cfg.clone()));

    let sess = Arc::new(RwLock::new(Session::new(cli.name)));
    let output = Output::new();

    output.line(banner::BANNER);
    output.line(banner::ENTRY);
    output.line(format!("Welcome, {}!", sess.read().greeting_name()));

    let ctx = Arc::new(CmdCtx {
        output,
        registry,
        sess,
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        ctx.output.prompt();
        let Some(line) = lines.next_line().await? else {
            break;
        };

        if line.trim().is_empty() {
            continue;
        }

        match process_command(&line, ctx.clone()).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(CommandError::Usage(usage)) => {
                ctx.output.system(format!("Usage: {usage}"));
            }
            Err(e) => {
                tracing::error!(error = %e, "command failed");
                ctx.output.error("Something went wrong. Try again.");
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, prelude::*};

    color_eyre::install().unwrap();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_timer(tracing_subscriber::fmt::time::uptime()),
        )
        .with(tracing_error::ErrorLayer::default())
        .init();
}
