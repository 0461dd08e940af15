use std::sync::Arc;

use clap::Parser;
use engine::{Engine, MemoryStore};
use tokio::sync::broadcast::error::RecvError;

mod settings;

#[derive(Parser, Debug)]
#[command(name = "planora")]
#[command(about = "Collaborative vacation planning server")]
struct Cli {
    /// Configuration file (TOML, extension optional).
    #[arg(long, env = "PLANORA_CONFIG", default_value = "planora")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    let settings = settings::Settings::new(&cli.config)?;
    let mut tasks = tokio::task::JoinSet::new();

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "planora={level},server={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let store = Arc::new(MemoryStore::new());
    let engine = Arc::new(Engine::builder().store(store).build());

    // Mirror the store's change feed into the log so shared edits are
    // visible in the server output.
    let mut feed = engine.subscribe();
    tasks.spawn(async move {
        loop {
            match feed.recv().await {
                Ok(event) => tracing::info!(?event, "document changed"),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("change feed lagged, skipped {skipped} events");
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    let engine_for_server = engine.clone();
    let addr = format!("{}:{}", settings.server.bind, settings.server.port);
    tasks.spawn(async move {
        let listener = match tokio::net::TcpListener::bind(addr).await {
            Ok(listener) => listener,
            Err(err) => {
                tracing::error!("failed to bind server listener: {err}");
                return;
            }
        };
        if let Err(err) = server::run_with_listener(engine_for_server, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    while tasks.join_next().await.is_some() {
        tasks.shutdown().await;
    }

    Ok(())
}
