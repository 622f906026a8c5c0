use chrono::NaiveDateTime;

pub const PRINT_TITLE: &str = "Vedic Life Partner Prediction Results";

const PRINT_STYLES: &str = r#"
        body {
            font-family: Arial, sans-serif;
            margin: 20px;
            line-height: 1.6;
        }
        .print-header {
            text-align: center;
            margin-bottom: 30px;
            border-bottom: 2px solid #667eea;
            padding-bottom: 20px;
        }
        .print-header h1 {
            color: #667eea;
            margin-bottom: 10px;
        }
        .summary-cards {
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 20px;
            margin-bottom: 30px;
        }
        .summary-card {
            border: 1px solid #ddd;
            padding: 15px;
            text-align: center;
            border-radius: 10px;
        }
        .verdict-card {
            border: 2px solid #667eea;
            padding: 20px;
            border-radius: 10px;
            margin-bottom: 30px;
            background: #f8f9fa;
        }
        .compatibility-table {
            width: 100%;
            border-collapse: collapse;
            margin-top: 20px;
        }
        .compatibility-table th,
        .compatibility-table td {
            border: 1px solid #ddd;
            padding: 10px;
            text-align: left;
        }
        .compatibility-table th {
            background: #667eea;
            color: white;
        }
        .match {
            background: #d4edda;
        }
        .no-match {
            background: #f8f9fa;
        }
        @media print {
            .action-buttons {
                display: none;
            }
        }
"#;

/// Standalone printable copy of the results markup. Opening the document
/// brings up the print dialog.
pub fn render_print_document(results_markup: &str, generated_at: NaiveDateTime) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{title}</title>
    <style>{styles}</style>
</head>
<body>
    <div class="print-header">
        <h1>🔮 {title}</h1>
        <p>Generated on {date} at {time}</p>
    </div>
{results}
    <script>window.addEventListener('load', function () {{ window.print(); }});</script>
</body>
</html>
"#,
        title = PRINT_TITLE,
        styles = PRINT_STYLES,
        date = generated_at.format("%-m/%-d/%Y"),
        time = generated_at.format("%-I:%M:%S %p"),
        results = results_markup,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_print_document_wraps_results() {
        let generated_at = NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(14, 5, 9)
            .unwrap();
        let html = render_print_document("<div id=\"marker\">results</div>", generated_at);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Vedic Life Partner Prediction Results</title>"));
        assert!(html.contains("Generated on 3/7/2024 at 2:05:09 PM"));
        assert!(html.contains("<div id=\"marker\">results</div>"));
        assert!(html.contains("window.print()"));
        assert!(html.contains(".compatibility-table th"));
    }
}
