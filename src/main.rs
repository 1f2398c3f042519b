use clap::Parser;
use florist::utils::{logger, validation::Validate};
use florist::{CliConfig, FloristError, Shop};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting florist CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    let mut shop = Shop::new(config);
    match shop.run() {
        Ok(run) => {
            tracing::info!(
                "✅ Run completed: {} flowers imported, {} rows skipped",
                run.imported,
                run.skipped_rows
            );
            println!("{}", run.order_summary);
            println!("{}", run.invoice);
        }
        Err(e @ FloristError::EmptyCatalog) => {
            // distinguishable "no data" outcome
            tracing::error!("❌ {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!("❌ Run failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
