use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gitstats::server::{configure_stats_routes, health_check};
use gitstats::{AppState, Config, GitHubClient, StatsAggregator};

#[derive(Parser, Debug)]
#[command(name = "gitstats")]
#[command(version = "0.1.0")]
#[command(about = "Serve aggregated GitHub profile statistics for a portfolio site")]
struct Args {
    /// Bind address (overrides HOST)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    /// GitHub username to aggregate (overrides GITHUB_USERNAME)
    #[arg(short, long)]
    username: Option<String>,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("gitstats=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration, with CLI overrides on top
    let mut config = Config::from_env()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(username) = args.username {
        config.github_username = username;
    }

    // Initialize the upstream client and the aggregator
    let client = GitHubClient::new(
        config.github_token.as_deref(),
        Duration::from_secs(config.cache_ttl_secs),
    )?;
    let aggregator = StatsAggregator::new(
        Arc::new(client),
        config.github_username.clone(),
        config.tuning.clone(),
    );
    let state = web::Data::new(AppState { aggregator });

    tracing::info!(
        "Serving stats for {} on {}:{}",
        config.github_username,
        config.host,
        config.port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/health", web::get().to(health_check))
            .service(web::scope("/api").configure(configure_stats_routes))
    })
    .bind((config.host.clone(), config.port))?
    .run()
    .await?;

    Ok(())
}
