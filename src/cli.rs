use clap::Parser;

#[derive(Parser)]
#[command(name = "repo-showcase-server")]
#[command(about = "Repo Showcase Server - Generates shareable showcase cards for GitHub repositories")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// SurrealDB connection URL
    #[arg(long, env = "DB_URL", default_value = "ws://localhost:8000")]
    pub db_url: String,

    /// SurrealDB username
    #[arg(long, env = "DB_USER", default_value = "root")]
    pub db_user: String,

    /// SurrealDB password
    #[arg(long, env = "DB_PASS", default_value = "root")]
    pub db_pass: String,

    /// SurrealDB namespace
    #[arg(long, env = "DB_NAMESPACE", default_value = "showcase")]
    pub db_namespace: String,

    /// SurrealDB database
    #[arg(long, env = "DB_DATABASE", default_value = "cards")]
    pub db_database: String,

    /// HTTP listening port
    #[arg(long, env = "PORT", default_value_t = 3001)]
    pub port: u16,

    /// Directory holding the static single-page frontend build
    #[arg(long, env = "STATIC_DIR", default_value = "build")]
    pub static_dir: String,

    /// Optional GitHub API token for authenticated requests
    #[arg(long, env = "GITHUB_TOKEN")]
    pub github_token: Option<String>,

    /// Maximum number of pooled database connections
    #[arg(long, default_value_t = 10)]
    pub db_pool_max_size: usize,

    /// Minimum number of idle database connections
    #[arg(long, default_value_t = 2)]
    pub db_pool_min_idle: usize,

    /// Database connection timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub db_connection_timeout: u64,

    /// Shortcut for a local SurrealDB instance (overrides --db-url)
    #[arg(long, default_value_t = false)]
    pub local: bool,
}
