//! Field-level validation for submissions. Pure and synchronous.
//!
//! Invalid input never errors out: it is reported as a populated
//! [`ValidationErrors`] set that callers check before submitting.

use crate::domain::{FileSubmission, SelectedFile, TextSubmission};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// Maximum accepted upload size in bytes (50 MiB). Enforced at file
/// selection time, before a `SelectedFile` is ever constructed.
pub const MAX_UPLOAD_BYTES: u64 = 52_428_800;

/// Media types the classification service accepts for uploads.
pub const ACCEPTED_MEDIA_TYPES: [&str; 2] = ["text/plain", "application/pdf"];

const MIN_SENDER_NAME_LEN: usize = 2;
const MIN_SUBJECT_LEN: usize = 3;
const MIN_EMAIL_CONTENT_LEN: usize = 10;

/// A form field that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    SenderName,
    Subject,
    EmailContent,
    File,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::SenderName => "sender_name",
            Field::Subject => "subject",
            Field::EmailContent => "email_content",
            Field::File => "file",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field validation errors. Absence of a field means it is valid;
/// an empty set is the overall validity signal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Clears one field's error (the UI does this when the field is edited).
    pub fn clear(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

/// Validate a pasted-text submission. All three fields are always
/// evaluated; emptiness is reported before the length floor.
pub fn validate_text_submission(input: &TextSubmission) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    check_sender_name(&input.sender_name, &mut errors);
    check_subject(&input.subject, &mut errors);

    let content = input.email_content.trim();
    if content.is_empty() {
        errors.insert(Field::EmailContent, "email content is required");
    } else if content.chars().count() < MIN_EMAIL_CONTENT_LEN {
        errors.insert(
            Field::EmailContent,
            format!("email content must be at least {MIN_EMAIL_CONTENT_LEN} characters"),
        );
    }

    errors
}

/// Validate a file-upload submission. The size limit is not re-checked
/// here: oversized files are rejected at selection time and never become
/// a `SelectedFile` (two-stage gate).
pub fn validate_file_submission(
    input: &FileSubmission,
    file: Option<&SelectedFile>,
) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    check_sender_name(&input.sender_name, &mut errors);
    check_subject(&input.subject, &mut errors);

    match file {
        None => errors.insert(Field::File, "a file is required"),
        Some(f) => {
            if !ACCEPTED_MEDIA_TYPES.contains(&f.media_type.as_str()) {
                errors.insert(Field::File, "only .txt and .pdf files are accepted");
            }
        }
    }

    errors
}

fn check_sender_name(raw: &str, errors: &mut ValidationErrors) {
    let name = raw.trim();
    if name.is_empty() {
        errors.insert(Field::SenderName, "sender name is required");
    } else if name.chars().count() < MIN_SENDER_NAME_LEN {
        errors.insert(
            Field::SenderName,
            format!("sender name must be at least {MIN_SENDER_NAME_LEN} characters"),
        );
    }
}

fn check_subject(raw: &str, errors: &mut ValidationErrors) {
    let subject = raw.trim();
    if subject.is_empty() {
        errors.insert(Field::Subject, "subject is required");
    } else if subject.chars().count() < MIN_SUBJECT_LEN {
        errors.insert(
            Field::Subject,
            format!("subject must be at least {MIN_SUBJECT_LEN} characters"),
        );
    }
}

/// Map a file path to the media type the service accepts, by extension.
/// Returns `None` for anything other than `.txt`/`.pdf`.
pub fn media_type_for_path(path: &Path) -> Option<&'static str> {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("txt") => Some("text/plain"),
        Some("pdf") => Some("application/pdf"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(sender: &str, subject: &str, content: &str) -> TextSubmission {
        TextSubmission {
            sender_name: sender.to_string(),
            subject: subject.to_string(),
            email_content: content.to_string(),
        }
    }

    fn file(media_type: &str) -> SelectedFile {
        SelectedFile {
            filename: "email.bin".to_string(),
            media_type: media_type.to_string(),
            size: 128,
            bytes: vec![0u8; 128],
        }
    }

    #[test]
    fn test_text_all_empty_yields_three_required_errors() {
        let errors = validate_text_submission(&text("", "", ""));
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(Field::SenderName), Some("sender name is required"));
        assert_eq!(errors.get(Field::Subject), Some("subject is required"));
        assert_eq!(
            errors.get(Field::EmailContent),
            Some("email content is required")
        );
    }

    #[test]
    fn test_text_boundary_lengths_are_valid() {
        // 2 / 3 / 10 trimmed characters are exactly at the floor.
        let errors = validate_text_submission(&text("Jo", "Hi!", "1234567890"));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_text_below_floor_reports_too_short_not_required() {
        let errors = validate_text_submission(&text("J", "Hi", "too short"));
        assert_eq!(
            errors.get(Field::SenderName),
            Some("sender name must be at least 2 characters")
        );
        assert_eq!(
            errors.get(Field::Subject),
            Some("subject must be at least 3 characters")
        );
        assert_eq!(
            errors.get(Field::EmailContent),
            Some("email content must be at least 10 characters")
        );
    }

    #[test]
    fn test_text_whitespace_only_counts_as_empty() {
        let errors = validate_text_submission(&text("   ", "\t\t", "  \n  "));
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(Field::SenderName), Some("sender name is required"));
    }

    #[test]
    fn test_text_trims_before_measuring() {
        let errors = validate_text_submission(&text("  Jo  ", " Hi! ", " 1234567890 "));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_file_missing_is_required() {
        let input = FileSubmission {
            sender_name: "Maria".to_string(),
            subject: "Relatório".to_string(),
        };
        let errors = validate_file_submission(&input, None);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::File), Some("a file is required"));
    }

    #[test]
    fn test_file_unsupported_media_type() {
        let input = FileSubmission {
            sender_name: "Maria".to_string(),
            subject: "Relatório".to_string(),
        };
        let errors = validate_file_submission(&input, Some(&file("image/png")));
        assert_eq!(
            errors.get(Field::File),
            Some("only .txt and .pdf files are accepted")
        );
    }

    #[test]
    fn test_file_pdf_with_valid_fields_is_valid() {
        let input = FileSubmission {
            sender_name: "Maria".to_string(),
            subject: "Relatório".to_string(),
        };
        let errors = validate_file_submission(&input, Some(&file("application/pdf")));
        assert!(errors.is_empty());

        let errors = validate_file_submission(&input, Some(&file("text/plain")));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_file_name_rules_match_text_form() {
        let input = FileSubmission {
            sender_name: "M".to_string(),
            subject: "".to_string(),
        };
        let errors = validate_file_submission(&input, Some(&file("text/plain")));
        assert_eq!(
            errors.get(Field::SenderName),
            Some("sender name must be at least 2 characters")
        );
        assert_eq!(errors.get(Field::Subject), Some("subject is required"));
    }

    #[test]
    fn test_clear_removes_single_field() {
        let mut errors = validate_text_submission(&text("", "", ""));
        errors.clear(Field::Subject);
        assert_eq!(errors.len(), 2);
        assert!(errors.get(Field::Subject).is_none());
    }

    #[test]
    fn test_media_type_for_path() {
        assert_eq!(
            media_type_for_path(Path::new("mail.txt")),
            Some("text/plain")
        );
        assert_eq!(
            media_type_for_path(Path::new("dir/Mail.PDF")),
            Some("application/pdf")
        );
        assert_eq!(media_type_for_path(Path::new("mail.png")), None);
        assert_eq!(media_type_for_path(Path::new("mail")), None);
    }
}
