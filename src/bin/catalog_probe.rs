use clap::Parser;
use shop_api::client::{CatalogClient, ProbeResult};
use shop_api::utils::logger::{self, LogFormat};

#[derive(Parser)]
#[command(name = "catalog-probe")]
#[command(about = "Smoke-test a running shop-api instance")]
struct Args {
    /// Base URL of the running server
    #[arg(long, default_value = "http://127.0.0.1:3000", env = "SHOP_BASE_URL")]
    base_url: String,

    /// Route that must not exist on the server
    #[arg(long, default_value = "/api/non-existent")]
    missing_route: String,

    #[arg(short, long)]
    verbose: bool,
}

struct Check {
    name: String,
    passed: bool,
    detail: String,
}

fn check_product_listing(result: &ProbeResult) -> Check {
    let passed = result.status == 200 && result.is_array();
    let detail = match &result.body {
        serde_json::Value::Array(items) => format!("HTTP {}, {} products", result.status, items.len()),
        _ => format!("HTTP {}, body is not an array", result.status),
    };
    Check {
        name: "GET /api/products returns 200 and an array".to_string(),
        passed,
        detail,
    }
}

fn check_missing_route(route: &str, result: &ProbeResult) -> Check {
    Check {
        name: format!("GET {} returns 404", route),
        passed: result.status == 404,
        detail: format!("HTTP {}", result.status),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_logger(args.verbose, LogFormat::Compact);

    let client = CatalogClient::new(&args.base_url)?;
    println!("🔍 Probing {}", client.base_url());

    let listing = client.probe("/api/products").await?;
    let missing = client.probe(&args.missing_route).await?;

    let checks = [
        check_product_listing(&listing),
        check_missing_route(&args.missing_route, &missing),
    ];

    for check in &checks {
        let mark = if check.passed { "✅" } else { "❌" };
        println!("{} {} ({})", mark, check.name, check.detail);
    }

    let failed = checks.iter().filter(|c| !c.passed).count();
    if failed > 0 {
        eprintln!("❌ {} of {} checks failed", failed, checks.len());
        std::process::exit(1);
    }

    println!("🎉 All checks passed");
    Ok(())
}
