use clap::Parser;
use menu_etl::core::{ConfigProvider, Storage};
use menu_etl::utils::{logger, validation::Validate};
use menu_etl::{
    loader_for, presenter_for, CliConfig, LocalStorage, MenuEngine, MenuSummary, OutputFormat,
    PresenterSettings, Result, TomlConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    // 初始化日誌
    if args.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::debug!("CLI config: {:?}", args);

    let outcome = match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match TomlConfig::from_file(path) {
                Ok(config) => execute(&config).await,
                Err(e) => Err(e),
            }
        }
        None => execute(&args).await,
    };

    match outcome {
        Ok(summary) => {
            tracing::info!(
                "✅ Menu ready: {} categories, {} items",
                summary.categories,
                summary.items
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的狀態訊息
            eprintln!("❌ {}", menu_etl::core::engine::status_message(&e));
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}

async fn execute<C: ConfigProvider + Validate>(config: &C) -> Result<MenuSummary> {
    config.validate()?;

    let format: OutputFormat = config.format().parse()?;
    let settings = PresenterSettings {
        price_prefix: config.price_prefix().to_string(),
        collapsed: config.collapsed(),
        pretty: config.pretty(),
    };
    let presenter = presenter_for(format, &settings);

    let loader = loader_for(config.source(), config.timeout_seconds())?;
    let engine = MenuEngine::new(loader);

    match config.output_path() {
        Some(path) => {
            let mut buffer = Vec::new();
            let summary = engine.run(presenter.as_ref(), &mut buffer).await?;
            LocalStorage::new(".".to_string())
                .write_file(path, &buffer)
                .await?;
            tracing::info!("📁 Output saved to: {}", path);
            Ok(summary)
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            engine.run(presenter.as_ref(), &mut handle).await
        }
    }
}
