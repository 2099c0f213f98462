use clap::Parser;
use shop_api::utils::error::ErrorSeverity;
use shop_api::utils::{logger, validation::Validate};
use shop_api::{CliConfig, ServerConfig, ShopError, TomlConfig};

fn exit_code(e: &ShopError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn resolve_config(cli: &CliConfig) -> Result<ServerConfig, ShopError> {
    let mut config = ServerConfig::default();

    // 先套用設定檔，再由命令列參數覆蓋
    if let Some(path) = &cli.config {
        let file = TomlConfig::from_file(path)?;
        config.apply_toml(&file)?;
    }
    config.apply_cli(cli);

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_logger(config.verbose, config.log_format);

    tracing::info!("Starting shop-api");
    tracing::debug!("Resolved config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = shop_api::server::serve(config).await {
        tracing::error!(
            "❌ Server failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());

        let code = exit_code(&e);
        if code > 0 {
            std::process::exit(code);
        }
    }

    Ok(())
}
