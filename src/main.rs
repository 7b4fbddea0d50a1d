use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use eth_view_gateway::api::{self, AppState};
use eth_view_gateway::chain::EthClient;
use eth_view_gateway::cli::{Cli, Commands};
use eth_view_gateway::config::Config;
use eth_view_gateway::resolver::Resolver;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = Config::from_env().context("failed to load configuration")?;

    let client = EthClient::connect(config.eth_rpc_url.clone(), config.upstream_timeout)
        .await
        .context("failed to connect to Ethereum client")?;
    let resolver = Resolver::new(Arc::new(client), config.upstream_timeout);

    match cli.command {
        Commands::Serve { addr } => {
            let bind = addr.unwrap_or_else(|| config.http_bind_addr.clone());
            api::run_http_server(&bind, AppState::new(resolver)).await?;
        }
        Commands::Block { number } => {
            let view = resolver.resolve_block(&number).await?;
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        Commands::Tx { hash } => {
            let view = resolver.resolve_transaction(&hash).await?;
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();
}
