//! Infrastructure adapters. Implement outbound ports.
//!
//! Classification API, clipboard, terminal. Map errors to DomainError.

pub mod api;
pub mod system;
pub mod ui;
