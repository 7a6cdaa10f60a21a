//! Mock classifier for running without a backend.
//!
//! Returns canned results for development and testing purposes.

use crate::domain::{
    Category, ClassificationResult, DomainError, FileSubmission, ResultMetadata, SelectedFile,
    TextSubmission,
};
use crate::ports::ClassifierPort;
use chrono::Utc;
use std::time::Duration;
use tracing::info;

/// Mock classification adapter.
///
/// Returns predetermined responses without making API calls.
/// Simulates network latency with configurable delay.
pub struct MockClassifierAdapter {
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
}

impl MockClassifierAdapter {
    /// Create a new mock adapter with default delay (300ms).
    pub fn new() -> Self {
        Self { delay_ms: 300 }
    }

    /// Create a mock adapter with custom delay.
    pub fn with_delay(delay_ms: u64) -> Self {
        Self { delay_ms }
    }

    fn canned_result(
        &self,
        sender: &str,
        subject: &str,
        filename: Option<&str>,
    ) -> ClassificationResult {
        ClassificationResult {
            category: Category::Produtivo,
            confidence_score: 0.87,
            suggested_response: format!(
                "[MOCK] Olá {}, recebemos sua mensagem sobre \"{}\". \
                 Nossa equipe entrará em contato em breve.",
                sender, subject
            ),
            processing_time: self.delay_ms as f64 / 1000.0,
            metadata: ResultMetadata {
                sender: Some(sender.to_string()),
                subject: Some(subject.to_string()),
                filename: filename.map(str::to_string),
                timestamp: Utc::now().to_rfc3339(),
            },
        }
    }
}

impl Default for MockClassifierAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ClassifierPort for MockClassifierAdapter {
    async fn classify_text(
        &self,
        input: &TextSubmission,
    ) -> Result<ClassificationResult, DomainError> {
        info!(
            sender = %input.sender_name,
            content_len = input.email_content.len(),
            "[MOCK] simulating text classification"
        );
        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        Ok(self.canned_result(&input.sender_name, &input.subject, None))
    }

    async fn classify_file(
        &self,
        input: &FileSubmission,
        file: &SelectedFile,
    ) -> Result<ClassificationResult, DomainError> {
        info!(
            sender = %input.sender_name,
            file = %file.filename,
            size = file.size,
            "[MOCK] simulating file classification"
        );
        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        Ok(self.canned_result(&input.sender_name, &input.subject, Some(&file.filename)))
    }

    async fn probe_health(&self) -> Result<(), DomainError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_classify_text() {
        let adapter = MockClassifierAdapter::with_delay(10);
        let input = TextSubmission {
            sender_name: "Ana".to_string(),
            subject: "Reunião".to_string(),
            email_content: "Podemos marcar a reunião de amanhã?".to_string(),
        };

        let result = adapter.classify_text(&input).await.unwrap();

        assert_eq!(result.category, Category::Produtivo);
        assert!((0.0..=1.0).contains(&result.confidence_score));
        assert_eq!(result.metadata.sender.as_deref(), Some("Ana"));
        assert!(result.metadata.filename.is_none());
    }

    #[tokio::test]
    async fn test_mock_classify_file_records_filename() {
        let adapter = MockClassifierAdapter::with_delay(10);
        let input = FileSubmission {
            sender_name: "Maria".to_string(),
            subject: "Relatório".to_string(),
        };
        let file = SelectedFile {
            filename: "relatorio.pdf".to_string(),
            media_type: "application/pdf".to_string(),
            size: 3,
            bytes: vec![1, 2, 3],
        };

        let result = adapter.classify_file(&input, &file).await.unwrap();
        assert_eq!(result.metadata.filename.as_deref(), Some("relatorio.pdf"));
    }
}
