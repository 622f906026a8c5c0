use crate::core::notice::NoticeBoard;
use crate::core::print::render_print_document;
use crate::core::render::{escape_html, render_results};
use crate::core::{AnalysisReport, Language};
use crate::domain::language::Text;
use crate::domain::model::BirthForm;
use chrono::NaiveDateTime;
use url::Url;

const PAGE_STYLES: &str = r#"
        .hidden { display: none; }
        @keyframes card-fade-in {
            from { opacity: 0; transform: translateY(20px); }
            to { opacity: 1; transform: translateY(0); }
        }
"#;

/// View state of the prediction page: the form, the loading and results
/// panels, and any error banners.
#[derive(Debug, Clone)]
pub struct Page {
    language: Language,
    form: BirthForm,
    loading_visible: bool,
    results_visible: bool,
    results_markup: Option<String>,
    notices: NoticeBoard,
}

impl Page {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            form: BirthForm::default(),
            loading_visible: false,
            results_visible: false,
            results_markup: None,
            notices: NoticeBoard::new(),
        }
    }

    /// Language comes from the path; `sample=true` in the query prefills
    /// the form.
    pub fn from_page_url(url: &Url) -> Self {
        let mut page = Self::new(Language::from_page_url(url));
        if url.query().is_some_and(|q| q.contains("sample=true")) {
            tracing::debug!("Prefilling form with sample data");
            page.form = BirthForm::sample();
        }
        page
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn form(&self) -> &BirthForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut BirthForm {
        &mut self.form
    }

    pub fn loading_visible(&self) -> bool {
        self.loading_visible
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    pub fn results_markup(&self) -> Option<&str> {
        self.results_markup.as_deref()
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    pub fn show_loading(&mut self) {
        self.loading_visible = true;
        self.results_visible = false;
    }

    pub fn display_results(&mut self, report: &AnalysisReport) {
        self.loading_visible = false;
        self.results_markup = Some(render_results(report, self.language));
        self.results_visible = true;
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.loading_visible = false;
        self.notices.post(message);
    }

    pub fn reset(&mut self) {
        self.form.reset();
        self.results_visible = false;
        self.loading_visible = false;
    }

    /// Printable copy of the current results, if any are rendered.
    pub fn print_document(&self, generated_at: NaiveDateTime) -> Option<String> {
        self.results_markup
            .as_deref()
            .map(|markup| render_print_document(markup, generated_at))
    }

    pub fn render_document(&self) -> String {
        let hidden = |visible: bool| if visible { "" } else { " hidden" };

        format!(
            r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="utf-8">
    <title>{title}</title>
    <style>{styles}</style>
</head>
<body>
<h1>{title}</h1>
<div class="form-container">
{notices}
</div>
<div id="loading" class="loading{loading_hidden}">
    <p>{analyzing}</p>
</div>
<section id="results" class="results{results_hidden}">
{results}
</section>
</body>
</html>
"#,
            lang = self.language.code(),
            title = escape_html(self.language.text(Text::Title)),
            styles = PAGE_STYLES,
            notices = self.notices.render_html(),
            loading_hidden = hidden(self.loading_visible),
            analyzing = escape_html(self.language.text(Text::Analyzing)),
            results_hidden = hidden(self.results_visible),
            results = self.results_markup.as_deref().unwrap_or_default(),
        )
    }
}
