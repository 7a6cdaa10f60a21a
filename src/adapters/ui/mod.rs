//! Terminal UI adapters: banner, prompts, result rendering, notifier.

pub mod banner;
pub mod notifier;
pub mod render;
pub mod tui;

pub use notifier::TerminalNotifier;
pub use tui::TuiInputPort;

/// Prints the welcome banner and applies the accent theme for all
/// subsequent inquire prompts. Call once at startup.
pub fn init_ui() {
    banner::print_welcome();
    tui::apply_theme();
}
