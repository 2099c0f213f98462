use clap::Parser;

/// Command line flags. Unset flags fall back to the config file, then defaults.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "shop-api")]
#[command(about = "Product catalog HTTP API")]
pub struct CliConfig {
    #[arg(long, env = "SHOP_HOST")]
    pub host: Option<String>,

    #[arg(long, env = "SHOP_PORT")]
    pub port: Option<u16>,

    /// JSON or CSV file with the product catalog
    #[arg(long, env = "SHOP_SEED_PATH")]
    pub seed_path: Option<String>,

    #[arg(long, env = "SHOP_REQUEST_TIMEOUT_SECS")]
    pub request_timeout_secs: Option<u64>,

    #[arg(long, env = "SHOP_MAX_PAGE_SIZE")]
    pub max_page_size: Option<usize>,

    /// Path to TOML configuration file
    #[arg(short, long, env = "SHOP_CONFIG")]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
