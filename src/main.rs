use clap::Parser;
use repo_insight::domain::ports::ConfigProvider;
use repo_insight::utils::error::{ErrorSeverity, InsightError};
use repo_insight::utils::monitor::RunMonitor;
use repo_insight::utils::{logger, validation::Validate};
use repo_insight::{AnalysisEngine, AnalysisPipeline, CliConfig, FileConfig, LocalStorage};
use std::path::Path;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting repo-insight");
    if cli.verbose {
        tracing::debug!(
            "Analyzing {} against {}",
            cli.workspace_path,
            cli.api_endpoint
        );
    }

    let mut monitor = cli.monitor.then(RunMonitor::start);
    if monitor.is_some() {
        tracing::info!("🔍 Resource monitoring enabled");
    }

    let result = run(&cli).await;

    if let Some(monitor) = monitor.as_mut() {
        monitor.report();
    }

    match result {
        Ok(report_path) => {
            println!("✅ Analysis completed successfully!");
            println!("📁 Report saved to: {}", report_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Analysis failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

async fn run(cli: &CliConfig) -> Result<String, InsightError> {
    if let Some(path) = &cli.config {
        let config = FileConfig::load(Path::new(path))?.with_api_key(cli.api_key.clone());
        config.validate()?;
        run_with(config, cli.open).await
    } else {
        cli.validate()?;
        run_with(cli.clone(), cli.open).await
    }
}

async fn run_with<C>(config: C, open_report: bool) -> Result<String, InsightError>
where
    C: ConfigProvider + 'static,
{
    // Checked before scanning, so a missing credential never costs a walk
    // or a request.
    if config.api_key().is_none() {
        return Err(InsightError::MissingConfigError {
            field: "api_key".to_string(),
        });
    }

    let storage = LocalStorage::new(config.output_path());
    let pipeline = AnalysisPipeline::new(storage, config);
    let engine = AnalysisEngine::new(pipeline);
    let report_path = engine.run().await?;

    if open_report {
        if let Err(err) = open::that(&report_path) {
            tracing::warn!("Could not open the report: {}", err);
        }
    }

    Ok(report_path)
}
