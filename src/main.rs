use clap::Parser;
use salary_stats::utils::{logger, validation::Validate};
use salary_stats::{run_report, CliConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env 先載入，SECRET_KEY 才能被 clap 讀到
    dotenvy::dotenv().ok();

    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting salary-stats");

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    if cli.verbose {
        tracing::debug!(
            "Specializations: {:?}, HeadHunter: {}, SuperJob: {}, timeout: {:?}",
            config.specializations(),
            config.headhunter.enabled,
            config.superjob.enabled,
            config.request_timeout()
        );
    }

    match run_report(&config, cli.format).await {
        Ok(outputs) => {
            for output in outputs {
                println!("{}", output);
            }
            tracing::info!("✅ Report completed");
        }
        Err(e) => {
            tracing::error!(
                "❌ Report failed: {} (Category: {:?}, Severity: {:?})",
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

    Ok(())
}
