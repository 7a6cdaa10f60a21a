//! Terminal notifier. Implements NotifierPort with colored one-liners.

use crate::domain::{Notification, Severity};
use crate::ports::NotifierPort;
use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use std::io::{Write, stdout};

fn severity_style(severity: Severity) -> (&'static str, Color) {
    match severity {
        Severity::Info => ("[i]", Color::Cyan),
        Severity::Success => ("[ok]", Color::Green),
        Severity::Warning => ("[!]", Color::Yellow),
        Severity::Error => ("[x]", Color::Red),
    }
}

/// Prints notifications to stdout. Output failures are swallowed: a
/// notification must never take the application down.
pub struct TerminalNotifier;

impl TerminalNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl NotifierPort for TerminalNotifier {
    fn notify(&self, notification: Notification) {
        let (marker, color) = severity_style(notification.severity);
        let mut out = stdout();
        let _ = out.execute(SetForegroundColor(color));
        let _ = out.execute(Print(format!("{} {}", marker, notification.title)));
        let _ = out.execute(ResetColor);
        let _ = out.execute(Print(format!(": {}\r\n", notification.body)));
        let _ = out.flush();
    }
}
