use crate::core::page::Page;
use crate::core::{AnalysisReport, AnalysisService, AnalyzeResponse, Language};
use crate::domain::language::Text;
use crate::domain::model::BirthForm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The request or its decoding failed.
    Network,
    /// The backend answered with `success: false`.
    Application,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Rendered(Box<AnalysisReport>),
    Failed { kind: FailureKind, message: String },
}

impl SubmitOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, SubmitOutcome::Rendered(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmitOutcome::Rendered(_) => None,
            SubmitOutcome::Failed { message, .. } => Some(message),
        }
    }
}

/// Submit handler of the birth details form.
pub struct FormController<S: AnalysisService> {
    service: S,
    language: Language,
}

impl<S: AnalysisService> FormController<S> {
    pub fn new(service: S, language: Language) -> Self {
        Self { service, language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Sends one analysis request and classifies the answer.
    pub async fn submit(&self, form: &BirthForm) -> SubmitOutcome {
        let request = form.to_request();
        tracing::debug!(
            "🔮 Submitting analysis for {} / {} ({})",
            request.male_dob,
            request.female_dob,
            self.language.code()
        );

        match self.service.analyze(&request, self.language).await {
            Ok(AnalyzeResponse::Success(report)) => {
                tracing::info!(
                    "✅ Analysis received: {} matches, verdict {}",
                    report.total_matches,
                    report.verdict_class.css_class()
                );
                SubmitOutcome::Rendered(report)
            }
            Ok(AnalyzeResponse::Failure { error }) => {
                tracing::warn!("❌ Analysis rejected: {:?}", error);
                SubmitOutcome::Failed {
                    kind: FailureKind::Application,
                    message: error
                        .unwrap_or_else(|| self.language.text(Text::ErrorOccurred).to_string()),
                }
            }
            Err(e) => {
                tracing::error!("❌ Analysis request failed: {}", e);
                SubmitOutcome::Failed {
                    kind: FailureKind::Network,
                    message: self.language.text(Text::NetworkError).to_string(),
                }
            }
        }
    }

    /// Drives the page through loading, then results or an error banner.
    pub async fn submit_to(&self, page: &mut Page, form: &BirthForm) -> SubmitOutcome {
        page.show_loading();
        let outcome = self.submit(form).await;
        match &outcome {
            SubmitOutcome::Rendered(report) => page.display_results(report),
            SubmitOutcome::Failed { message, .. } => page.show_error(message.clone()),
        }
        outcome
    }
}
