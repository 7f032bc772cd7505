use clap::Parser;
use vacancy_stats::utils::{logger, validation::Validate};
use vacancy_stats::{render, CliConfig, SurveyEngine, SurveyError};

async fn run(cli: &CliConfig) -> Result<String, SurveyError> {
    let config = cli.load_config()?;
    config.validate()?;
    tracing::debug!("Survey config: {:?}", config);

    let reports = SurveyEngine::new(config).run().await?;
    render(&reports, cli.format)
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting vacancy-stats");

    match run(&cli).await {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!(
                "❌ Survey failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.exit_code());
        }
    }
}
