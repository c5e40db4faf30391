use clap::Parser;
use std::path::Path;
use wheelbook::utils::{logger, validation::Validate};
use wheelbook::{app, CliConfig, FileConfig, Registry};

fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting wheelbook");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // TOML 覆蓋層（如果有指定）
    if let Some(path) = config.config.clone() {
        let overlay = FileConfig::from_file(Path::new(&path))?;
        overlay.apply(&mut config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let mut registry = Registry::new();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    match app::run(&config, &mut registry, stdin.lock(), stdout.lock()) {
        Ok(()) => {
            tracing::info!(
                "Saved {} users and {} appointments",
                registry.users().len(),
                registry.appointments().len()
            );
            println!("✅ User and appointment data successfully saved.");
        }
        Err(e) => {
            tracing::error!("Session failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
