use clap::Parser;
use colored::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use repo_showcase_server::cli::Cli;
use repo_showcase_server::error::{Result, ShowcaseError};
use repo_showcase_server::github::GitHubClient;
use repo_showcase_server::health::{health_router, HealthState};
use repo_showcase_server::pool::{create_pool, PoolConfig, SurrealConnectionConfig};
use repo_showcase_server::server::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut cli = Cli::parse();

    // Override db_url if --local flag is set
    if cli.local {
        cli.db_url = "ws://localhost:8000".to_string();
        println!("{}", "Running in local mode (DB URL: ws://localhost:8000)".yellow());
    }

    println!("{}", "Repo Showcase Server".bold().green());
    println!("{}\n", "=".repeat(50).dimmed());

    let connection_config = SurrealConnectionConfig {
        url: cli.db_url.clone(),
        username: cli.db_user.clone(),
        password: cli.db_pass.clone(),
        namespace: cli.db_namespace.clone(),
        database: cli.db_database.clone(),
    };

    let pool_config = PoolConfig {
        max_size: cli.db_pool_max_size,
        min_idle: Some(cli.db_pool_min_idle),
        connection_timeout: std::time::Duration::from_secs(cli.db_connection_timeout),
        ..Default::default()
    };

    let db_pool = Arc::new(create_pool(connection_config, pool_config)?);

    // Warm up one connection so a misconfigured store fails at startup
    // instead of on the first request
    db_pool
        .get()
        .await
        .map_err(|e| ShowcaseError::PersistenceError(format!("Failed to reach store: {}", e)))?;

    println!(
        "✅ Created SurrealDB connection pool with {} connections",
        cli.db_pool_max_size
    );

    let github = Arc::new(GitHubClient::new(cli.github_token.clone())?);

    let app_state = AppState {
        db_pool: db_pool.clone(),
        github,
    };

    let health_state = HealthState {
        db_pool,
        start_time: std::time::Instant::now(),
    };

    let app = create_router(app_state, &cli.static_dir).merge(health_router(health_state));

    let addr = format!("0.0.0.0:{}", cli.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    println!("✅ The application is listening on port {}", cli.port);
    println!("\nPress Ctrl+C to stop the server\n");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    println!("✅ Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        println!("\n🛑 Shutting down server...");
    }
}
