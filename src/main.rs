use clap::Parser;
use std::time::Duration;
use vedic_partner::core::{ConfigProvider, Storage};
use vedic_partner::utils::error::ErrorSeverity;
use vedic_partner::utils::{logger, validation::FormValidator};
use vedic_partner::{
    AnalyzeArgs, CliConfig, Command, FormController, HttpAnalysisClient, LocalStorage,
    Result, SubmitOutcome,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting vedic-partner CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let result = match config.command() {
        Command::Analyze(args) => run_analyze(&config, args).await,
        Command::Health => run_health(&config).await,
    };

    let exit_code = match result {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(
                "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            e.exit_code()
        }
    };

    if exit_code > 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn run_analyze(config: &CliConfig, args: AnalyzeArgs) -> Result<i32> {
    let profile = config.load_profile()?;
    let settings = config.resolve(profile, args)?;
    let mut page = settings.page();
    let language = page.language();
    tracing::info!("🌐 Page {} ({})", settings.page_url(), language.code());

    // 送出前先驗證所有欄位
    let mut validator = FormValidator::new(language);
    if !validator.validate_form(page.form()) {
        if let Some(e) = validator.into_error() {
            return Err(e);
        }
    }

    let client = HttpAnalysisClient::with_timeout(
        settings.page_url.clone(),
        settings.timeout_seconds().map(Duration::from_secs),
    )?;
    let controller = FormController::new(client, language);
    let form = page.form().clone();

    match controller.submit_to(&mut page, &form).await {
        SubmitOutcome::Rendered(_) => {
            let document = if settings.print_view() {
                page.print_document(chrono::Local::now().naive_local())
                    .unwrap_or_else(|| page.render_document())
            } else {
                page.render_document()
            };

            let storage = LocalStorage::new(".");
            storage
                .write_file(settings.output_path(), document.as_bytes())
                .await?;

            tracing::info!("📁 Report saved to: {}", settings.output_path());
            println!("✅ Report saved to: {}", settings.output_path());
            Ok(0)
        }
        SubmitOutcome::Failed { kind, message } => {
            tracing::warn!("Analysis failed ({:?}): {}", kind, message);
            for notice in page.notices().active() {
                eprintln!("❌ {}", notice.message);
            }
            Ok(ErrorSeverity::Medium.exit_code())
        }
    }
}

async fn run_health(config: &CliConfig) -> Result<i32> {
    let profile = config.load_profile()?;
    let page_url = config.page_url(profile.as_ref())?;
    let client = HttpAnalysisClient::with_timeout(
        page_url,
        config
            .timeout_seconds(profile.as_ref())
            .map(Duration::from_secs),
    )?;

    let status = client.health().await?;
    println!("{}", serde_json::to_string_pretty(&status)?);

    if status.is_healthy() {
        tracing::info!("✅ Backend is healthy");
        Ok(0)
    } else {
        tracing::warn!("🔶 Backend reported status: {}", status.status);
        Ok(ErrorSeverity::Medium.exit_code())
    }
}
