//! Startup banner for MAIL-TRIAGE.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

/// Teal accent used for the banner and version line.
const ACCENT: (u8, u8, u8) = (0x0f, 0xc0, 0xb0);

/// Prints "MAIL-TRIAGE" in figlet standard font plus the version line.
/// Falls back to a plain line if the font cannot be loaded.
pub fn print_welcome() {
    let mut out = stdout();
    let art = FIGfont::standard()
        .ok()
        .and_then(|font| font.convert("MAIL-TRIAGE").map(|figure| figure.to_string()))
        .unwrap_or_else(|| "MAIL-TRIAGE\n".to_string());

    let _ = out.execute(SetForegroundColor(Color::Rgb {
        r: ACCENT.0,
        g: ACCENT.1,
        b: ACCENT.2,
    }));
    for line in art.lines() {
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
    }
    let _ = out.execute(Print(format!("v{}\r\n", env!("CARGO_PKG_VERSION"))));
    let _ = out.execute(Print("Email classification terminal client\r\n"));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}
