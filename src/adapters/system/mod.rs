//! Platform adapters (clipboard).

pub mod clipboard;

pub use clipboard::SystemClipboard;
