use clap::Parser;
use log_report::utils::{logger, validation::Validate};
use log_report::{
    AverageReportPipeline, CliConfig, LocalStorage, ReportEngine, ReportKind, ReportOutcome,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Missing or invalid arguments exit non-zero here, before any file IO.
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting log-report");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(".".to_string());
    let outcome = match config.report {
        ReportKind::Average => {
            let pipeline = AverageReportPipeline::new(storage, config);
            ReportEngine::new(pipeline).run()?
        }
    };

    match outcome {
        ReportOutcome::NoData => {
            println!("❌ No valid log data found.");
        }
        ReportOutcome::NoEndpoints => {
            println!("❌ No endpoints found in logs.");
        }
        ReportOutcome::Rendered(table) => {
            println!("\n📊 Report: Average Response Time by Endpoint");
            println!("{}", table);
        }
    }

    Ok(())
}
