//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{
    ClassificationResult, DomainError, FileSubmission, Notification, SelectedFile, TextSubmission,
};

/// Classification service gateway. The only network boundary of the app.
#[async_trait::async_trait]
pub trait ClassifierPort: Send + Sync {
    /// Classify a pasted-text email. Exactly one request per call.
    /// Callers are expected to have validated `input` already.
    async fn classify_text(
        &self,
        input: &TextSubmission,
    ) -> Result<ClassificationResult, DomainError>;

    /// Classify an uploaded file. Carries the file bytes plus the two
    /// text fields.
    async fn classify_file(
        &self,
        input: &FileSubmission,
        file: &SelectedFile,
    ) -> Result<ClassificationResult, DomainError>;

    /// Best-effort liveness probe. Any HTTP status counts as reachable;
    /// the body is ignored.
    async fn probe_health(&self) -> Result<(), DomainError>;
}

/// Notification sink. Injected into the pipeline so its operations stay
/// testable without a terminal attached.
pub trait NotifierPort: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Platform clipboard access.
pub trait ClipboardPort: Send + Sync {
    fn copy_text(&self, text: &str) -> Result<(), DomainError>;
}
