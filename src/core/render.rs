//! HTML rendering of an analysis report.
//!
//! Markup mirrors the results section of the page: three summary cards, the
//! verdict card, the detailed compatibility table and the reasoning boxes.

use crate::core::{AnalysisReport, Language};
use crate::domain::language::Text;
use crate::domain::model::CompatibilityRow;
use std::fmt::Write;

/// 卡片依序淡入的間隔 (毫秒)
pub const CARD_STAGGER_MS: u64 = 100;

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

struct SummaryCard {
    id: &'static str,
    title: &'static str,
    value: String,
    lines: [(&'static str, String); 2],
}

fn summary_cards(report: &AnalysisReport, language: Language) -> [SummaryCard; 3] {
    [
        SummaryCard {
            id: "male-rahu-nakshatra",
            title: language.text(Text::MaleRahuNakshatra),
            value: report.male_rahu_nakshatra.clone(),
            lines: [
                ("rahu-lord", language.lord_label(&report.rahu_nakshatra_lord)),
                (
                    "rahu-details",
                    language.position_label(report.male_rahu.longitude, &report.male_rahu.rasi),
                ),
            ],
        },
        SummaryCard {
            id: "male-ketu-nakshatra",
            title: language.text(Text::MaleKetuNakshatra),
            value: report.male_ketu_nakshatra.clone(),
            lines: [
                ("ketu-lord", language.lord_label(&report.ketu_nakshatra_lord)),
                (
                    "ketu-details",
                    language.position_label(report.male_ketu.longitude, &report.male_ketu.rasi),
                ),
            ],
        },
        SummaryCard {
            id: "total-matches",
            title: language.text(Text::TotalMatches),
            value: report.total_matches.to_string(),
            lines: [
                (
                    "match-type",
                    language.match_type_label(&report.primary_match_type),
                ),
                (
                    "match-breakdown",
                    language.breakdown_label(report.rahu_matches.len(), report.ketu_matches.len()),
                ),
            ],
        },
    ]
}

pub fn render_summary_cards(report: &AnalysisReport, language: Language) -> String {
    let mut html = String::from("<div class=\"summary-cards\">\n");
    for (index, card) in summary_cards(report, language).iter().enumerate() {
        let delay = index as u64 * CARD_STAGGER_MS;
        let _ = writeln!(
            html,
            "  <div class=\"summary-card\" style=\"animation: card-fade-in 0.5s ease {}ms both;\">",
            delay
        );
        let _ = writeln!(html, "    <h3>{}</h3>", escape_html(card.title));
        let _ = writeln!(
            html,
            "    <div class=\"card-value\" id=\"{}\">{}</div>",
            card.id,
            escape_html(&card.value)
        );
        for (id, text) in &card.lines {
            let _ = writeln!(html, "    <small id=\"{}\">{}</small>", id, escape_html(text));
        }
        html.push_str("  </div>\n");
    }
    html.push_str("</div>\n");
    html
}

pub fn render_verdict(report: &AnalysisReport, language: Language) -> String {
    format!(
        r#"<div class="verdict-card {class}" id="verdict-card">
  <h3>{heading}</h3>
  <i id="verdict-icon" class="{icon}"></i>
  <h2 id="verdict-title">{title}</h2>
  <p id="verdict-message">{message}</p>
</div>
"#,
        class = report.verdict_class.css_class(),
        heading = escape_html(language.text(Text::CompatibilityVerdict)),
        icon = report.verdict_class.icon_class(),
        title = escape_html(&report.verdict),
        message = escape_html(&report.message),
    )
}

pub fn render_table_row(row: &CompatibilityRow, language: Language) -> String {
    let (icon, status_class) = if row.is_match() {
        ("✓", "match")
    } else {
        ("✗", "no-match")
    };
    let reasoning = row
        .reasoning()
        .unwrap_or_else(|| language.text(Text::NoMatchFound));

    format!(
        "<tr class=\"{}\">\n  <td>{}</td>\n  <td>{}</td>\n  <td>{}</td>\n  <td class=\"status {}\">{}</td>\n  <td><small>{}</small></td>\n</tr>\n",
        escape_html(&row.status),
        escape_html(&row.condition),
        escape_html(&row.value),
        escape_html(&row.match_type),
        status_class,
        icon,
        escape_html(reasoning)
    )
}

pub fn render_compatibility_table(rows: &[CompatibilityRow], language: Language) -> String {
    let mut html = format!(
        "<h3>{}</h3>\n<table class=\"compatibility-table\">\n<thead>\n<tr>",
        escape_html(language.text(Text::DetailedAnalysis))
    );
    for header in [
        Text::Condition,
        Text::FemaleChartDetails,
        Text::MatchType,
        Text::Status,
        Text::Reasoning,
    ] {
        let _ = write!(html, "<th>{}</th>", escape_html(language.text(header)));
    }
    html.push_str("</tr>\n</thead>\n<tbody id=\"compatibility-table-body\">\n");
    for row in rows {
        html.push_str(&render_table_row(row, language));
    }
    html.push_str("</tbody>\n</table>\n");
    html
}

fn reasoning_box(id: &str, title: &str, reasons: &[String]) -> String {
    let mut html = format!(
        "<div class=\"reasoning-box\" id=\"{}-box\">\n  <h4>{}</h4>\n  <div id=\"{}-content\">\n",
        id,
        escape_html(title),
        id
    );
    for reason in reasons {
        let _ = writeln!(html, "    <p>{}</p>", escape_html(reason));
    }
    html.push_str("  </div>\n</div>\n");
    html
}

/// Rahu and Ketu boxes appear only with reasons; the "no matches" box only
/// when both are empty.
pub fn render_reasoning_boxes(report: &AnalysisReport, language: Language) -> String {
    let rahu = report.rahu_reasons();
    let ketu = report.ketu_reasons();
    let mut html = String::new();

    if !rahu.is_empty() {
        html.push_str(&reasoning_box(
            "rahu-reasoning",
            language.text(Text::PrimaryMatches),
            rahu,
        ));
    }
    if !ketu.is_empty() {
        html.push_str(&reasoning_box(
            "ketu-reasoning",
            language.text(Text::SecondaryMatches),
            ketu,
        ));
    }
    if rahu.is_empty() && ketu.is_empty() {
        let _ = write!(
            html,
            "<div class=\"reasoning-box\" id=\"no-matches-box\">\n  <h4>{}</h4>\n  <p>{}</p>\n</div>\n",
            escape_html(language.text(Text::NoMatchesFound)),
            escape_html(language.text(Text::NoMatchesMessage))
        );
    }
    html
}

pub fn render_results(report: &AnalysisReport, language: Language) -> String {
    let mut html = format!(
        "<h2>{}</h2>\n",
        escape_html(language.text(Text::CompatibilityResults))
    );
    html.push_str(&render_summary_cards(report, language));
    html.push_str(&render_verdict(report, language));
    html.push_str(&render_compatibility_table(&report.compatibility_data, language));
    html.push_str(&render_reasoning_boxes(report, language));
    html
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::model::{NodePosition, VerdictClass};

    pub(crate) fn sample_report() -> AnalysisReport {
        AnalysisReport {
            male_rahu_nakshatra: "Swati".to_string(),
            male_ketu_nakshatra: "Ashwini".to_string(),
            rahu_nakshatra_lord: "Rahu".to_string(),
            ketu_nakshatra_lord: "Ketu".to_string(),
            male_rahu: NodePosition {
                longitude: 190.123,
                rasi: "Thula".to_string(),
                nakshatra: Some("Swati".to_string()),
                pada: Some(2),
                retrograde: Some(true),
            },
            male_ketu: NodePosition {
                longitude: 10.123,
                rasi: "Mesha".to_string(),
                nakshatra: None,
                pada: None,
                retrograde: None,
            },
            total_matches: 1,
            primary_match_type: "Rahu".to_string(),
            rahu_matches: vec!["Female Nakshatra".to_string()],
            ketu_matches: vec![],
            verdict: "⚖️ MODERATELY COMPATIBLE".to_string(),
            verdict_class: VerdictClass::Moderate,
            message: "Some positive indications. Consider other factors as well.".to_string(),
            compatibility_data: vec![
                CompatibilityRow {
                    condition: "Female Nakshatra".to_string(),
                    value: "Swati Pada 1".to_string(),
                    match_type: "Rahu".to_string(),
                    status: "match".to_string(),
                    reasoning: Some("🟢 Rahu Lord Rahu = Female Moon Nakshatra Lord Rahu".to_string()),
                },
                CompatibilityRow {
                    condition: "Female Lagna Lord".to_string(),
                    value: "Lagna: 12.00° in Mesha".to_string(),
                    match_type: "No Match".to_string(),
                    status: "no_match".to_string(),
                    reasoning: Some(String::new()),
                },
            ],
            rahu_reasoning: Some(vec![
                "Rahu Lord Rahu = Female Moon Nakshatra Lord Rahu".to_string(),
            ]),
            ketu_reasoning: None,
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_summary_cards_english() {
        let html = render_summary_cards(&sample_report(), Language::En);
        assert!(html.contains(r#"id="male-rahu-nakshatra">Swati<"#));
        assert!(html.contains(r#"id="rahu-lord">Lord: Rahu<"#));
        assert!(html.contains(r#"id="rahu-details">Position: 190.12° in Thula<"#));
        assert!(html.contains(r#"id="ketu-details">Position: 10.12° in Mesha<"#));
        assert!(html.contains(r#"id="total-matches">1<"#));
        assert!(html.contains(r#"id="match-type">Type: Rahu<"#));
        assert!(html.contains(r#"id="match-breakdown">Rahu: 1, Ketu: 0<"#));
    }

    #[test]
    fn test_summary_cards_stagger() {
        let html = render_summary_cards(&sample_report(), Language::En);
        assert!(html.contains("0.5s ease 0ms"));
        assert!(html.contains("0.5s ease 100ms"));
        assert!(html.contains("0.5s ease 200ms"));
    }

    #[test]
    fn test_summary_cards_tamil() {
        let html = render_summary_cards(&sample_report(), Language::Ta);
        assert!(html.contains("ஆட்சியாளர்: Rahu"));
        assert!(html.contains("நிலை: 190.12° Thulaல்"));
        assert!(html.contains("வகை: ராகு"));
        assert!(html.contains("ராகு: 1, கேது: 0"));
    }

    #[test]
    fn test_verdict_icon_follows_class() {
        let mut report = sample_report();
        let html = render_verdict(&report, Language::En);
        assert!(html.contains(r#"class="verdict-card moderate""#));
        assert!(html.contains("fas fa-balance-scale"));
        assert!(html.contains("MODERATELY COMPATIBLE"));

        report.verdict_class = VerdictClass::High;
        assert!(render_verdict(&report, Language::En).contains("fas fa-heart"));

        report.verdict_class = VerdictClass::Low;
        assert!(render_verdict(&report, Language::En).contains("fas fa-exclamation-triangle"));
    }

    #[test]
    fn test_table_rows() {
        let report = sample_report();
        let html = render_compatibility_table(&report.compatibility_data, Language::En);

        assert!(html.contains(r#"<tr class="match">"#));
        assert!(html.contains(r#"<td class="status match">✓</td>"#));
        assert!(html.contains(r#"<tr class="no_match">"#));
        assert!(html.contains(r#"<td class="status no-match">✗</td>"#));
        // 空字串的 reasoning 改用預設文字
        assert!(html.contains("<small>No match found</small>"));
        assert!(html.contains("<th>Female Chart Details</th>"));
    }

    #[test]
    fn test_table_default_reasoning_tamil() {
        let row = CompatibilityRow {
            condition: "பெண் நட்சத்திரம்".to_string(),
            value: "x".to_string(),
            match_type: "பொருத்தம் இல்லை".to_string(),
            status: "no_match".to_string(),
            reasoning: None,
        };
        let html = render_table_row(&row, Language::Ta);
        assert!(html.contains("<small>பொருத்தம் கண்டறியப்படவில்லை</small>"));
    }

    #[test]
    fn test_reasoning_boxes_visibility() {
        let mut report = sample_report();
        let html = render_reasoning_boxes(&report, Language::En);
        assert!(html.contains("rahu-reasoning-box"));
        assert!(!html.contains("ketu-reasoning-box"));
        assert!(!html.contains("no-matches-box"));
        assert!(html.contains("<p>Rahu Lord Rahu = Female Moon Nakshatra Lord Rahu</p>"));

        report.rahu_reasoning = Some(vec![]);
        report.ketu_reasoning = None;
        let html = render_reasoning_boxes(&report, Language::En);
        assert!(!html.contains("rahu-reasoning-box"));
        assert!(html.contains("no-matches-box"));
        assert!(html.contains("Neither Rahu nor Ketu"));

        report.ketu_reasoning = Some(vec!["Ketu Lord Venus present in female lagna".to_string()]);
        let html = render_reasoning_boxes(&report, Language::En);
        assert!(html.contains("ketu-reasoning-box"));
        assert!(!html.contains("no-matches-box"));
    }

    #[test]
    fn test_backend_text_is_escaped() {
        let mut report = sample_report();
        report.message = "<script>alert(1)</script>".to_string();
        let html = render_results(&report, Language::En);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
