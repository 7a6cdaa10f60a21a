//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod gallery;
pub mod validation;

pub use entities::{
    Category, ClassificationResult, FileSubmission, Notification, ResultMetadata, SelectedFile,
    Severity, SubmitOutcome, TextSubmission,
};
pub use errors::DomainError;
pub use gallery::{EMAIL_EXAMPLES, EmailExample};
pub use validation::{
    ACCEPTED_MEDIA_TYPES, Field, MAX_UPLOAD_BYTES, ValidationErrors, media_type_for_path,
    validate_file_submission, validate_text_submission,
};
