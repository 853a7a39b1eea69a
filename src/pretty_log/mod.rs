use crossterm::execute;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeColor {
    Main,
    Second,
    Success,
    Warn,
    Error,
}

impl From<ThemeColor> for Color {
    fn from(value: ThemeColor) -> Self {
        match value {
            ThemeColor::Main => Color::White,
            ThemeColor::Second => Color::Grey,
            ThemeColor::Success => Color::Green,
            ThemeColor::Warn => Color::Yellow,
            ThemeColor::Error => Color::Red,
        }
    }
}

/// Print one colored line. Console failures are ignored, a broken listener must
/// never break reporting.
pub fn colored_println<W: Write>(out: &mut W, color: ThemeColor, content: &str) {
    let _ = execute!(
        out,
        SetForegroundColor(color.into()),
        Print(content),
        ResetColor,
        Print("\n"),
    );
}
