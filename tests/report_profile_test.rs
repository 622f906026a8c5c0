use anyhow::Result;
use clap::Parser;
use httpmock::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use vedic_partner::core::{ConfigProvider, Storage};
use vedic_partner::utils::validation::FormValidator;
use vedic_partner::{
    CliConfig, Command, FormController, HttpAnalysisClient, Language, LocalStorage, SubmitOutcome,
};

fn low_match_body() -> serde_json::Value {
    json!({
        "success": true,
        "male_rahu": {"longitude": 33.5, "rasi": "Rishaba"},
        "male_ketu": {"longitude": 213.5, "rasi": "Vrischika"},
        "male_rahu_nakshatra": "கிருத்திகை",
        "male_ketu_nakshatra": "விசாகம்",
        "rahu_nakshatra_lord": "Sun",
        "ketu_nakshatra_lord": "Jupiter",
        "rahu_matches": [],
        "ketu_matches": [],
        "rahu_reasoning": [],
        "ketu_reasoning": [],
        "total_matches": 0,
        "primary_match_type": "None",
        "compatibility_data": [
            {"condition": "பெண் நட்சத்திரம்", "value": "ரேவதி Pada 2",
             "match_type": "பொருத்தம் இல்லை", "status": "no_match", "reasoning": ""}
        ],
        "verdict": "⚠️ குறைந்த பொருத்தம்",
        "verdict_class": "low",
        "message": "வரையறுக்கப்பட்ட பொருத்த குறிகாட்டிகள்."
    })
}

fn resolve(temp_dir: &TempDir, server: &MockServer, extra: &[&str]) -> Result<vedic_partner::AnalyzeSettings> {
    let profile_path = temp_dir.path().join("profile.toml");
    let output_path = temp_dir.path().join("out").join("report.html");
    std::fs::write(
        &profile_path,
        format!(
            r#"
[server]
page_url = "{}"
timeout_seconds = 10

[male]
dob = "1978-09-18"
tob = "17:35"
lat = 13.08333333
lon = 80.28333333

[female]
dob = "1984-01-15"
tob = "13:30"
lat = "11.9416"
lon = "79.8083"

[output]
path = "{}"
"#,
            server.url("/tamil"),
            output_path.to_string_lossy().replace('\\', "/")
        ),
    )?;

    let profile_arg = profile_path.to_string_lossy().to_string();
    let mut argv = vec!["vedic-partner", "--profile", profile_arg.as_str(), "analyze"];
    argv.extend_from_slice(extra);
    let config = CliConfig::parse_from(argv);

    let Command::Analyze(args) = config.command() else {
        anyhow::bail!("expected analyze command");
    };
    let profile = config.load_profile()?;
    Ok(config.resolve(profile, args)?)
}

#[tokio::test]
async fn test_profile_run_writes_tamil_report() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/analyze")
            .header("X-Language", "ta")
            .json_body_partial(r#"{"male_lat": "13.08333333", "female_lat": "11.9416"}"#);
        then.status(200).json_body(low_match_body());
    });

    let settings = resolve(&temp_dir, &server, &[])?;
    let mut page = settings.page();
    assert_eq!(page.language(), Language::Ta);

    let mut validator = FormValidator::new(page.language());
    assert!(validator.validate_form(page.form()));

    let client = HttpAnalysisClient::new(settings.page_url.clone())?;
    let controller = FormController::new(client, page.language());
    let form = page.form().clone();
    let outcome = controller.submit_to(&mut page, &form).await;
    assert!(matches!(outcome, SubmitOutcome::Rendered(_)));
    api_mock.assert();

    let storage = LocalStorage::new(".");
    storage
        .write_file(settings.output_path(), page.render_document().as_bytes())
        .await?;

    let html = std::fs::read_to_string(temp_dir.path().join("out").join("report.html"))?;
    assert!(html.contains(r#"<html lang="ta">"#));
    assert!(html.contains("fas fa-exclamation-triangle"));
    assert!(html.contains("no-matches-box"));
    assert!(html.contains("<small>பொருத்தம் கண்டறியப்படவில்லை</small>"));
    assert!(html.contains("வகை: பொருத்தம் இல்லை"));
    Ok(())
}

#[tokio::test]
async fn test_invalid_override_is_caught_before_submit() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/analyze");
        then.status(200).json_body(low_match_body());
    });

    let settings = resolve(&temp_dir, &server, &["--female-lat", "95", "--print"])?;
    assert!(settings.print_view());

    let page = settings.page();
    let mut validator = FormValidator::new(page.language());
    assert!(!validator.validate_form(page.form()));
    assert_eq!(
        validator.errors()[0].1,
        "அட்சரேகை -90 முதல் 90 வரை இருக்க வேண்டும்."
    );

    // 驗證失敗不應送出請求
    api_mock.assert_hits(0);
    Ok(())
}
