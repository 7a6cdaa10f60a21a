//! HTTP adapter for the classification API.
//!
//! Implements `ClassifierPort` over multipart form POSTs with
//! schema-checked response parsing.

use crate::domain::{
    ClassificationResult, DomainError, FileSubmission, SelectedFile, TextSubmission,
};
use crate::ports::ClassifierPort;
use std::time::Duration;
use tracing::{debug, warn};

/// reqwest-based classification API client.
///
/// The base URL comes from configuration; the request timeout applies to
/// the whole request including the response body.
pub struct HttpClassifierAdapter {
    client: reqwest::Client,
    base_url: String,
}

impl HttpClassifierAdapter {
    /// Create a new adapter.
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g. "http://localhost:8000")
    /// * `timeout` - per-request timeout, from MAIL_TRIAGE_REQUEST_TIMEOUT_SECS
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Transport(format!("HTTP client build failed: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Parse and schema-check a success body. Anything that does not
    /// deserialize, or violates the result invariants, fails closed.
    fn parse_result_body(body: &str) -> Result<ClassificationResult, DomainError> {
        let result: ClassificationResult = serde_json::from_str(body).map_err(|e| {
            warn!(error = %e, body = %body.chars().take(200).collect::<String>(), "result parse failed");
            DomainError::MalformedResponse(format!("failed to parse result JSON: {}", e))
        })?;
        Self::check_result_invariants(&result)?;
        Ok(result)
    }

    fn check_result_invariants(result: &ClassificationResult) -> Result<(), DomainError> {
        if !(0.0..=1.0).contains(&result.confidence_score) {
            return Err(DomainError::MalformedResponse(format!(
                "confidence score {} outside [0, 1]",
                result.confidence_score
            )));
        }
        if result.processing_time < 0.0 {
            return Err(DomainError::MalformedResponse(format!(
                "negative processing time {}",
                result.processing_time
            )));
        }
        Ok(())
    }

    async fn send_classify(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<ClassificationResult, DomainError> {
        let response = self
            .client
            .post(self.endpoint(path))
            .multipart(form)
            .send()
            .await
            .map_err(|e| DomainError::Transport(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "classification API returned error");
            return Err(DomainError::Transport(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DomainError::Transport(format!("failed to read response body: {}", e)))?;
        Self::parse_result_body(&body)
    }
}

#[async_trait::async_trait]
impl ClassifierPort for HttpClassifierAdapter {
    async fn classify_text(
        &self,
        input: &TextSubmission,
    ) -> Result<ClassificationResult, DomainError> {
        let form = reqwest::multipart::Form::new()
            .text("email_content", input.email_content.clone())
            .text("sender_name", input.sender_name.clone())
            .text("subject", input.subject.clone());
        self.send_classify("classify-email", form).await
    }

    async fn classify_file(
        &self,
        input: &FileSubmission,
        file: &SelectedFile,
    ) -> Result<ClassificationResult, DomainError> {
        let part = reqwest::multipart::Part::bytes(file.bytes.clone())
            .file_name(file.filename.clone())
            .mime_str(&file.media_type)
            .map_err(|e| DomainError::File(format!("invalid media type: {}", e)))?;
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("sender_name", input.sender_name.clone())
            .text("subject", input.subject.clone());
        self.send_classify("classify-email-file", form).await
    }

    async fn probe_health(&self) -> Result<(), DomainError> {
        // Any status counts: the probe only cares whether the host answers.
        let response = self
            .client
            .get(self.endpoint("health"))
            .send()
            .await
            .map_err(|e| DomainError::Transport(format!("health probe failed: {}", e)))?;
        debug!(status = %response.status(), "health probe answered");
        Ok(())
    }
}
