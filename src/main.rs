use clap::Parser;
use name_syllables::core::ConfigProvider;
use name_syllables::utils::{logger, validation::Validate};
use name_syllables::{
    run_calibration, CliConfig, LocalStorage, NameSyllablePipeline, SyllableEngine,
    REFERENCE_CASES,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting name-syllables");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    println!("Name Syllable Counter (German Optimized)");
    println!("{}", "=".repeat(50));

    if !config.skip_self_check {
        let report = run_calibration(REFERENCE_CASES);
        println!("Testing syllable counting algorithm:");
        println!("{}", report.render());
        println!();

        if !report.meets(config.min_accuracy()) {
            tracing::warn!(
                "⚠️ Syllable counting accuracy {:.1}% is below {:.1}%, continuing anyway",
                report.accuracy() * 100.0,
                config.min_accuracy() * 100.0
            );
        }
    }

    println!("Updating file: {}", config.input_file());
    if config.backup_enabled() {
        println!("Creating backup: {}", config.backup_file());
    }

    let backup_file = config.backup_file();
    let backup_enabled = config.backup_enabled();
    let monitor_enabled = config.monitor;

    let storage = LocalStorage::current_dir();
    let pipeline = NameSyllablePipeline::new(storage, config);
    let engine = SyllableEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(outcome) => {
            println!(
                "Successfully updated {} names with syllable counts!",
                outcome.updated
            );
            if let Some(stats) = &outcome.stats {
                println!();
                println!("{}", stats.render());
            }
            if backup_enabled {
                println!();
                println!("Backup saved as: {}", backup_file);
            }
            println!("Done!");
        }
        Err(e) => {
            tracing::error!(
                "❌ Syllable update failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ Error: {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
