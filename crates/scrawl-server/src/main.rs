mod cli;
mod logging;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use cli::Cli;
use scrawl_config::AppConfig;
use scrawl_surrealdb::{StoreConfig, SurrealNoteStore};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).context(
        "failed to load configuration (database.url is required; set SCRAWL__DATABASE__URL)",
    )?;

    // CLI flags win over file and environment values.
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(database_url) = cli.database_url {
        config.database.url = database_url;
    }

    let guards = logging::init(&config.log, &config.environment, cli.verbose);

    let store_config = StoreConfig {
        url: config.database.url.clone(),
        namespace: config.database.namespace.clone(),
        database: config.database.database.clone(),
    };
    let store = match SurrealNoteStore::connect(&store_config).await {
        Ok(store) => store,
        Err(err) => {
            error!(error = %err, "Could not connect to the document store");
            drop(guards);
            std::process::exit(1);
        }
    };
    info!("Connected to document store at {}", config.database.url);

    scrawl_web::start_server(&config.server, Arc::new(store)).await?;

    Ok(())
}
