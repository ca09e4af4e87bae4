use clap::Parser;
use name_syllables::app::pipelines::name_pipeline::parse_records;
use name_syllables::core::{ConfigProvider, Storage};
use name_syllables::utils::{logger, validation::Validate};
use name_syllables::{
    estimate_syllables, run_calibration, LocalStorage, NameSyllablePipeline, SyllableEngine,
    TomlConfig, REFERENCE_CASES,
};

#[derive(Parser)]
#[command(name = "toml-update")]
#[command(about = "Update name syllables from a TOML job file")]
struct Args {
    /// Path to TOML job file
    #[arg(short, long, default_value = "syllables-job.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Dry run - preview estimates without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Number of records shown in the dry run preview
    #[arg(long, default_value_t = 10)]
    preview: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 先載入配置才能決定日誌格式
    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if config.json_logs() {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting TOML-based syllable update");
    tracing::info!("📁 Configuration loaded from: {}", args.config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    display_config_summary(&config, &args);

    if config.self_check_enabled() {
        let report = run_calibration(REFERENCE_CASES);
        tracing::info!(
            "Reference check: {}/{} ({:.1}%)",
            report.correct,
            report.total,
            report.accuracy() * 100.0
        );
        if !report.meets(config.min_accuracy()) {
            tracing::warn!(
                "⚠️ Syllable counting accuracy is below {:.1}%, continuing anyway",
                config.min_accuracy() * 100.0
            );
        }
    }

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be written");
        perform_dry_run(&config, args.preview).await?;
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::current_dir();
    let pipeline = NameSyllablePipeline::new(storage, config);
    let engine = SyllableEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(outcome) => {
            println!("✅ Updated {} names ({} skipped)", outcome.updated, outcome.skipped);
            println!("📁 Output saved to: {}", outcome.output_path);
            if let Some(stats) = &outcome.stats {
                println!();
                println!("{}", stats.render());
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Syllable update failed: {} (Category: {:?}, Severity: {:?})",
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

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!("  Job: {}", config.job_name());
    if let Some(description) = &config.job.description {
        println!("  Description: {}", description);
    }
    println!("  Input: {}", config.input_file());
    if config.backup_enabled() {
        println!("  Backup: {}", config.backup_file());
    }
    println!("  Progress Interval: {}", config.progress_interval());
    println!("  Cache: {}", config.cache_enabled());

    if let Some(summary) = config.summary_path() {
        println!("  Summary: {}", summary);
    }

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

async fn perform_dry_run(config: &TomlConfig, preview: usize) -> anyhow::Result<()> {
    let storage = LocalStorage::current_dir();
    let raw = storage.read_file(config.input_file()).await?;
    let records = parse_records(&raw)?;

    let named = records.iter().filter(|r| r.name().is_some()).count();

    println!("🔍 Dry Run Analysis:");
    println!("  Records: {}", records.len());
    println!("  With name: {}", named);
    println!("  Without name: {}", records.len() - named);
    println!();
    println!("🔄 Preview (current -> estimated):");

    let named_records = records
        .iter()
        .filter_map(|r| r.name().map(|name| (r, name)))
        .take(preview);

    for (record, name) in named_records {
        let current = record
            .syllables()
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("  {:15} {} -> {}", name, current, estimate_syllables(name));
    }

    println!();
    println!("✅ Dry run analysis complete.");

    Ok(())
}
