//! Result rendering. Pure functions of a ClassificationResult.
//!
//! No state, no network, no validation; copy/reset actions live in the
//! TUI flow that displays this output.

use crate::domain::{Category, ClassificationResult};
use chrono::{DateTime, Local, NaiveDateTime};

/// Confidence as a percentage with one decimal place: 0.93 -> "93.0%".
pub fn format_confidence(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

/// Processing time in seconds with two decimal places: 0.42 -> "0.42s".
pub fn format_processing_time(seconds: f64) -> String {
    format!("{:.2}s", seconds)
}

/// Localize an ISO-8601 timestamp for display. Falls back to the raw
/// string when it cannot be parsed (the service owns that field).
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts
            .with_timezone(&Local)
            .format("%d/%m/%Y %H:%M:%S")
            .to_string();
    }
    // Backend sometimes emits naive timestamps without an offset.
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.format("%d/%m/%Y %H:%M:%S").to_string();
    }
    raw.to_string()
}

fn category_heading(category: Category) -> &'static str {
    match category {
        Category::Produtivo => "Productive email",
        Category::Improdutivo => "Unproductive email",
    }
}

/// Render the full result block shown after a classification.
pub fn render_result(result: &ClassificationResult) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} ({})\n",
        category_heading(result.category),
        result.category
    ));
    out.push_str(&format!(
        "  confidence:       {}\n",
        format_confidence(result.confidence_score)
    ));
    out.push_str(&format!(
        "  processing time:  {}\n",
        format_processing_time(result.processing_time)
    ));

    out.push_str("\nSuggested response:\n");
    for line in result.suggested_response.lines() {
        out.push_str(&format!("  {}\n", line));
    }

    out.push_str("\nProcessing info:\n");
    if let Some(sender) = &result.metadata.sender {
        out.push_str(&format!("  sender:    {}\n", sender));
    }
    if let Some(subject) = &result.metadata.subject {
        out.push_str(&format!("  subject:   {}\n", subject));
    }
    if let Some(filename) = &result.metadata.filename {
        out.push_str(&format!("  file:      {}\n", filename));
    }
    out.push_str(&format!(
        "  processed: {}\n",
        format_timestamp(&result.metadata.timestamp)
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ResultMetadata;

    fn result() -> ClassificationResult {
        ClassificationResult {
            category: Category::Produtivo,
            confidence_score: 0.93,
            suggested_response: "Confirmado.".to_string(),
            processing_time: 0.42,
            metadata: ResultMetadata {
                sender: Some("Ana".to_string()),
                subject: None,
                filename: None,
                timestamp: "2024-01-15T10:00:00Z".to_string(),
            },
        }
    }

    #[test]
    fn test_format_confidence_one_decimal() {
        assert_eq!(format_confidence(0.93), "93.0%");
        assert_eq!(format_confidence(0.0), "0.0%");
        assert_eq!(format_confidence(1.0), "100.0%");
        assert_eq!(format_confidence(0.8765), "87.7%");
    }

    #[test]
    fn test_format_processing_time_two_decimals() {
        assert_eq!(format_processing_time(0.42), "0.42s");
        assert_eq!(format_processing_time(1.0), "1.00s");
        assert_eq!(format_processing_time(0.005), "0.01s");
    }

    #[test]
    fn test_format_timestamp_localizes_rfc3339() {
        let formatted = format_timestamp("2024-01-15T10:00:00Z");
        // dd/mm/yyyy, regardless of the local offset.
        assert!(formatted.contains('/'), "got {formatted}");
    }

    #[test]
    fn test_format_timestamp_accepts_naive() {
        assert_eq!(
            format_timestamp("2024-01-15T14:30:00"),
            "15/01/2024 14:30:00"
        );
    }

    #[test]
    fn test_format_timestamp_falls_back_to_raw() {
        assert_eq!(format_timestamp("not-a-date"), "not-a-date");
    }

    #[test]
    fn test_render_result_includes_present_metadata_only() {
        let rendered = render_result(&result());
        assert!(rendered.contains("produtivo"));
        assert!(rendered.contains("93.0%"));
        assert!(rendered.contains("0.42s"));
        assert!(rendered.contains("Confirmado."));
        assert!(rendered.contains("sender:    Ana"));
        assert!(!rendered.contains("subject:"));
        assert!(!rendered.contains("file:"));
        assert!(rendered.contains("processed:"));
    }
}
