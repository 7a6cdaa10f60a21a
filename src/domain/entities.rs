//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/terminal types here — these are mapped from adapters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category assigned by the classification service.
///
/// Wire values are Portuguese literals (the service contract).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Actionable / business-relevant email.
    Produtivo,
    /// Promotional, personal or otherwise non-actionable email.
    Improdutivo,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Produtivo => write!(f, "produtivo"),
            Category::Improdutivo => write!(f, "improdutivo"),
        }
    }
}

/// An email pasted as raw text, awaiting classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextSubmission {
    pub sender_name: String,
    pub subject: String,
    pub email_content: String,
}

/// Metadata for an email submitted as a file upload. The file itself
/// travels separately as a [`SelectedFile`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSubmission {
    pub sender_name: String,
    pub subject: String,
}

/// A file chosen for upload: raw bytes plus the declared size and media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub filename: String,
    pub media_type: String,
    pub size: u64,
    pub bytes: Vec<u8>,
}

/// Result returned by the classification service for one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub category: Category,
    /// Service confidence in [0, 1].
    pub confidence_score: f64,
    /// Reply text suggested by the service, ready to copy.
    pub suggested_response: String,
    /// Server-side processing time in seconds.
    pub processing_time: f64,
    pub metadata: ResultMetadata,
}

/// Provenance attached to a result. `timestamp` is always present
/// (ISO-8601); the rest depends on the submission kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub timestamp: String,
}

/// Outcome of one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A result was obtained and stored.
    Completed,
    /// No usable result (transport failure or malformed response).
    Failed,
    /// Another submission is still outstanding; nothing was sent.
    InFlight,
}

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// A user-facing notification emitted by the pipeline (submission outcome,
/// clipboard outcome). Delivery is the notifier adapter's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub body: String,
}

impl Notification {
    pub fn new(severity: Severity, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            severity,
            title: title.into(),
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_values() {
        assert_eq!(
            serde_json::to_string(&Category::Produtivo).unwrap(),
            "\"produtivo\""
        );
        assert_eq!(
            serde_json::from_str::<Category>("\"improdutivo\"").unwrap(),
            Category::Improdutivo
        );
    }

    #[test]
    fn test_result_round_trip_full_metadata() {
        let json = r#"{
            "category": "produtivo",
            "confidence_score": 0.892,
            "suggested_response": "Olá João, recebemos sua solicitação.",
            "processing_time": 1.234,
            "metadata": {
                "sender": "João Silva",
                "subject": "Problema no sistema de vendas",
                "filename": "email.pdf",
                "timestamp": "2024-01-15T14:30:00Z"
            }
        }"#;
        let result: ClassificationResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.category, Category::Produtivo);
        assert_eq!(result.confidence_score, 0.892);
        assert_eq!(result.metadata.filename.as_deref(), Some("email.pdf"));

        let back: ClassificationResult =
            serde_json::from_str(&serde_json::to_string(&result).unwrap()).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_result_round_trip_minimal_metadata() {
        let json = r#"{
            "category": "improdutivo",
            "confidence_score": 0.5,
            "suggested_response": "ok",
            "processing_time": 0.0,
            "metadata": {"timestamp": "2024-01-15T10:00:00Z"}
        }"#;
        let result: ClassificationResult = serde_json::from_str(json).unwrap();
        assert!(result.metadata.sender.is_none());
        assert!(result.metadata.subject.is_none());
        assert!(result.metadata.filename.is_none());

        // Omitted optionals must stay omitted after serializing.
        let text = serde_json::to_string(&result).unwrap();
        assert!(!text.contains("sender"));
        assert!(!text.contains("filename"));
        let back: ClassificationResult = serde_json::from_str(&text).unwrap();
        assert_eq!(back, result);
    }
}
