//! Submission pipeline. Sequences request dispatch and result bookkeeping.
//!
//! The only component that talks to the network boundary. Validation is a
//! caller concern: UI-level validation exists for user feedback, this
//! service assumes valid input and defends only against transport and
//! server failure.

use crate::domain::{
    ClassificationResult, DomainError, FileSubmission, Notification, SelectedFile, Severity,
    SubmitOutcome, TextSubmission,
};
use crate::ports::{ClassifierPort, ClipboardPort, NotifierPort};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

/// Resets the in-flight flag on every exit path, including panics.
struct FlightGuard<'a>(&'a AtomicBool);

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Owns the request lifecycle and the last classification result.
///
/// Single-flight: a second submission while one is outstanding is rejected
/// with [`SubmitOutcome::InFlight`] without issuing a request. Notifications
/// go through the injected [`NotifierPort`] rather than any ambient channel.
pub struct SubmissionService {
    classifier: Arc<dyn ClassifierPort>,
    notifier: Arc<dyn NotifierPort>,
    clipboard: Arc<dyn ClipboardPort>,
    in_flight: AtomicBool,
    last_result: Mutex<Option<ClassificationResult>>,
}

impl SubmissionService {
    pub fn new(
        classifier: Arc<dyn ClassifierPort>,
        notifier: Arc<dyn NotifierPort>,
        clipboard: Arc<dyn ClipboardPort>,
    ) -> Self {
        Self {
            classifier,
            notifier,
            clipboard,
            in_flight: AtomicBool::new(false),
            last_result: Mutex::new(None),
        }
    }

    /// Fire-and-forget liveness probe. Outcome is logged, never surfaced,
    /// and has no ordering relationship with user submissions.
    pub fn spawn_health_probe(self: &Arc<Self>) {
        let classifier = Arc::clone(&self.classifier);
        tokio::spawn(async move {
            match classifier.probe_health().await {
                Ok(()) => debug!("classification API reachable"),
                Err(e) => debug!(error = %e, "health probe failed (ignored)"),
            }
        });
    }

    /// Submit a pasted-text email. Precondition: `input` passed
    /// `validate_text_submission`; this is not re-checked here.
    pub async fn submit_text(&self, input: &TextSubmission) -> SubmitOutcome {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            debug!("text submission rejected: another request is outstanding");
            return SubmitOutcome::InFlight;
        }
        let _guard = FlightGuard(&self.in_flight);

        info!(
            sender = %input.sender_name,
            subject = %input.subject,
            content_len = input.email_content.len(),
            "classifying email text"
        );
        match self.classifier.classify_text(input).await {
            Ok(result) => self.store_success(result),
            Err(e) => self.report_failure(e),
        }
    }

    /// Submit a file upload. Same contract as [`submit_text`]; the caller
    /// has already gated size and media type.
    ///
    /// [`submit_text`]: Self::submit_text
    pub async fn submit_file(&self, input: &FileSubmission, file: &SelectedFile) -> SubmitOutcome {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            debug!("file submission rejected: another request is outstanding");
            return SubmitOutcome::InFlight;
        }
        let _guard = FlightGuard(&self.in_flight);

        info!(
            sender = %input.sender_name,
            subject = %input.subject,
            file = %file.filename,
            size = file.size,
            "classifying email file"
        );
        match self.classifier.classify_file(input, file).await {
            Ok(result) => self.store_success(result),
            Err(e) => self.report_failure(e),
        }
    }

    /// Clears the stored result. Does not touch the in-flight flag.
    pub fn reset_result(&self) {
        *self.lock_result() = None;
    }

    pub fn last_result(&self) -> Option<ClassificationResult> {
        self.lock_result().clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Copy text (typically the suggested response) to the clipboard.
    /// Failure is its own low-severity notification and never affects
    /// classification state.
    pub fn copy_response_text(&self, text: &str) -> SubmitOutcome {
        match self.clipboard.copy_text(text) {
            Ok(()) => {
                self.notifier.notify(Notification::new(
                    Severity::Success,
                    "copied",
                    "text copied to the clipboard",
                ));
                SubmitOutcome::Completed
            }
            Err(e) => {
                warn!(error = %e, "clipboard copy failed");
                self.notifier.notify(Notification::new(
                    Severity::Warning,
                    "copy failed",
                    "could not copy the text to the clipboard",
                ));
                SubmitOutcome::Failed
            }
        }
    }

    fn store_success(&self, result: ClassificationResult) -> SubmitOutcome {
        info!(
            category = %result.category,
            confidence = result.confidence_score,
            "classification complete"
        );
        let body = format!("email classified as {}", result.category);
        *self.lock_result() = Some(result);
        self.notifier.notify(Notification::new(
            Severity::Success,
            "classification complete",
            body,
        ));
        SubmitOutcome::Completed
    }

    fn report_failure(&self, error: DomainError) -> SubmitOutcome {
        warn!(error = %error, "classification failed");
        self.notifier.notify(Notification::new(
            Severity::Error,
            "classification failed",
            "could not get a result from the classification API; check that it is running",
        ));
        SubmitOutcome::Failed
    }

    fn lock_result(&self) -> MutexGuard<'_, Option<ClassificationResult>> {
        // Lock is only held for plain reads/writes, never across await points.
        self.last_result
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
