//! Implements InputPort. Inquire-based interactive forms.
//!
//! Owns the raw drafts and their validation errors; only a draft whose
//! error set is empty ever reaches the submission pipeline. Drafts
//! survive failed submissions so the user can retry without retyping.

use crate::domain::{
    DomainError, EMAIL_EXAMPLES, EmailExample, FileSubmission, MAX_UPLOAD_BYTES, SelectedFile,
    TextSubmission, ValidationErrors, media_type_for_path, validate_file_submission,
    validate_text_submission,
};
use crate::ports::InputPort;
use crate::usecases::SubmissionService;
use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use inquire::{Confirm, InquireError, Select, Text};
use inquire::ui::{Color, RenderConfig, StyleSheet, Styled};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

const MENU_TEXT: &str = "Classify pasted text";
const MENU_FILE: &str = "Classify a .txt/.pdf file";
const MENU_EXAMPLES: &str = "Browse example emails";
const MENU_QUIT: &str = "Quit";

const RESULT_COPY: &str = "Copy suggested response";
const RESULT_NEW: &str = "New classification";
const RESULT_BACK: &str = "Back to menu";

/// Applies the accent theme to all subsequent inquire prompts.
pub fn apply_theme() {
    let config = RenderConfig::default_colored()
        .with_prompt_prefix(Styled::new("»").with_fg(Color::LightCyan))
        .with_answer(StyleSheet::new().with_fg(Color::LightCyan));
    inquire::set_global_render_config(config);
}

fn prompt_err(e: InquireError) -> DomainError {
    DomainError::Ui(e.to_string())
}

fn example_label(example: &EmailExample) -> String {
    format!(
        "{} | {} [{}]",
        example.sender, example.subject, example.category_label
    )
}

fn print_field_errors(errors: &ValidationErrors) {
    for (field, message) in errors.iter() {
        eprintln!("  {}: {}", field, message);
    }
}

fn submit_spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// TUI adapter. Inquire prompts around the submission pipeline.
pub struct TuiInputPort {
    service: Arc<SubmissionService>,
}

impl TuiInputPort {
    pub fn new(service: Arc<SubmissionService>) -> Self {
        Self { service }
    }

    async fn classify_text_flow(&self, prefill: Option<TextSubmission>) -> Result<(), DomainError> {
        let mut draft = prefill.unwrap_or_default();
        loop {
            draft = Self::prompt_text_draft(&draft)?;
            let errors = validate_text_submission(&draft);
            if !errors.is_empty() {
                eprintln!("Please fix the following fields:");
                print_field_errors(&errors);
                if !Self::confirm("Edit the draft?")? {
                    return Ok(());
                }
                continue;
            }

            let spinner = submit_spinner("Classifying email...");
            let outcome = self.service.submit_text(&draft).await;
            spinner.finish_and_clear();

            use crate::domain::SubmitOutcome::*;
            match outcome {
                Completed => {
                    // Successful submission discards the draft.
                    self.result_screen()?;
                    return Ok(());
                }
                Failed => {
                    // Draft is kept; the user retries without retyping.
                    if !Self::confirm("Try again with the same draft?")? {
                        return Ok(());
                    }
                }
                InFlight => return Ok(()),
            }
        }
    }

    async fn classify_file_flow(&self) -> Result<(), DomainError> {
        let mut draft = FileSubmission::default();
        loop {
            draft.sender_name = Text::new("Sender name:")
                .with_initial_value(&draft.sender_name)
                .prompt()
                .map_err(prompt_err)?;
            draft.subject = Text::new("Email subject:")
                .with_initial_value(&draft.subject)
                .prompt()
                .map_err(prompt_err)?;

            let file = match self.prompt_file()? {
                Some(file) => file,
                None => return Ok(()),
            };

            let errors = validate_file_submission(&draft, Some(&file));
            if !errors.is_empty() {
                eprintln!("Please fix the following fields:");
                print_field_errors(&errors);
                if !Self::confirm("Edit the draft?")? {
                    return Ok(());
                }
                continue;
            }

            let spinner = submit_spinner("Classifying file...");
            let outcome = self.service.submit_file(&draft, &file).await;
            spinner.finish_and_clear();

            use crate::domain::SubmitOutcome::*;
            match outcome {
                Completed => {
                    self.result_screen()?;
                    return Ok(());
                }
                Failed => {
                    if !Self::confirm("Try again with the same draft?")? {
                        return Ok(());
                    }
                }
                InFlight => return Ok(()),
            }
        }
    }

    /// Selection-time gate: oversized or unknown-extension files are
    /// rejected here and never become a `SelectedFile`.
    fn prompt_file(&self) -> Result<Option<SelectedFile>, DomainError> {
        loop {
            let raw = Text::new("File path (.txt or .pdf):")
                .prompt()
                .map_err(prompt_err)?;
            let path = Path::new(raw.trim());

            let media_type = match media_type_for_path(path) {
                Some(media_type) => media_type,
                None => {
                    eprintln!("  file: only .txt and .pdf files are accepted");
                    if !Self::confirm("Pick another file?")? {
                        return Ok(None);
                    }
                    continue;
                }
            };

            let metadata = match std::fs::metadata(path) {
                Ok(metadata) => metadata,
                Err(e) => {
                    eprintln!("  file: cannot read {} ({})", path.display(), e);
                    if !Self::confirm("Pick another file?")? {
                        return Ok(None);
                    }
                    continue;
                }
            };
            if metadata.len() > MAX_UPLOAD_BYTES {
                eprintln!("  file: exceeds the 50 MiB upload limit");
                if !Self::confirm("Pick another file?")? {
                    return Ok(None);
                }
                continue;
            }

            let bytes = std::fs::read(path)
                .map_err(|e| DomainError::File(format!("read {}: {}", path.display(), e)))?;
            let filename = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("upload")
                .to_string();
            return Ok(Some(SelectedFile {
                filename,
                media_type: media_type.to_string(),
                size: metadata.len(),
                bytes,
            }));
        }
    }

    fn prompt_text_draft(draft: &TextSubmission) -> Result<TextSubmission, DomainError> {
        let sender_name = Text::new("Sender name:")
            .with_initial_value(&draft.sender_name)
            .prompt()
            .map_err(prompt_err)?;
        let subject = Text::new("Email subject:")
            .with_initial_value(&draft.subject)
            .prompt()
            .map_err(prompt_err)?;
        let email_content = Text::new("Email content:")
            .with_initial_value(&draft.email_content)
            .with_help_message("minimum 10 characters")
            .prompt()
            .map_err(prompt_err)?;
        Ok(TextSubmission {
            sender_name,
            subject,
            email_content,
        })
    }

    /// Shows the stored result and its actions until the user leaves.
    fn result_screen(&self) -> Result<(), DomainError> {
        loop {
            let result = match self.service.last_result() {
                Some(result) => result,
                None => return Ok(()),
            };
            println!("\n{}", super::render::render_result(&result));

            let choice = Select::new(
                "Result actions",
                vec![RESULT_COPY, RESULT_NEW, RESULT_BACK],
            )
            .prompt()
            .map_err(prompt_err)?;

            match choice {
                RESULT_COPY => {
                    self.service.copy_response_text(&result.suggested_response);
                }
                RESULT_NEW => {
                    self.service.reset_result();
                    return Ok(());
                }
                _ => return Ok(()),
            }
        }
    }

    async fn browse_examples_flow(&self) -> Result<(), DomainError> {
        let labels: Vec<String> = EMAIL_EXAMPLES.iter().map(example_label).collect();
        let selected = Select::new("Example emails", labels)
            .prompt()
            .map_err(prompt_err)?;
        let example = match EMAIL_EXAMPLES
            .iter()
            .find(|e| example_label(e) == selected)
        {
            Some(example) => example,
            None => return Ok(()),
        };

        println!(
            "\n{} | {} ({}, {})\n\n{}\n",
            example.sender, example.subject, example.classification, example.date, example.content
        );

        if Self::confirm("Prefill the text form with this example?")? {
            self.classify_text_flow(Some(example.to_submission())).await?;
        }
        Ok(())
    }

    fn confirm(message: &str) -> Result<bool, DomainError> {
        Confirm::new(message)
            .with_default(true)
            .prompt()
            .map_err(prompt_err)
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let choice = Select::new(
                "What do you want to do?",
                vec![MENU_TEXT, MENU_FILE, MENU_EXAMPLES, MENU_QUIT],
            )
            .prompt()
            .map_err(prompt_err)?;

            let flow = match choice {
                MENU_TEXT => self.classify_text_flow(None).await,
                MENU_FILE => self.classify_file_flow().await,
                MENU_EXAMPLES => self.browse_examples_flow().await,
                _ => return Ok(()),
            };
            if let Err(e) = flow {
                warn!(error = %e, "flow aborted");
            }
        }
    }
}
