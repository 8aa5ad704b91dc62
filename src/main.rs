use clap::Parser;
use pack_order::utils::error::ErrorSeverity;
use pack_order::utils::logger;
use pack_order::{app, AppError, CliConfig, OrderServer};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if let Err(e) = run(config).await {
        // 記錄詳細錯誤信息
        tracing::error!("❌ pack-order failed: {} (Severity: {:?})", e, e.severity());
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

async fn run(config: CliConfig) -> Result<(), AppError> {
    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            // logger not up yet, settings decide its format
            logger::init_cli_logger(config.verbose, config.json_logs);
            return Err(e);
        }
    };

    logger::init_cli_logger(config.verbose, settings.json_logs);

    tracing::info!("Starting pack-order server");
    tracing::debug!("Resolved settings: {:?}", settings);

    let router = app::build_router(&settings.catalog)?;
    let server = OrderServer::new(router, settings.shutdown_timeout);

    server.run(settings.address).await?;

    tracing::info!("✅ pack-order stopped cleanly");
    Ok(())
}
