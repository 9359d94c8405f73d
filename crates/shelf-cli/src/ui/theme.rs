//! Theme definitions for colors and status badges.

use shelf_core::Status;

/// Color definitions using ANSI escape codes.
pub mod colors {
    /// Green (available)
    pub const GREEN: &str = "\x1b[32m";
    /// Red (borrowed)
    pub const RED: &str = "\x1b[31m";
    /// Reset all styles
    pub const RESET: &str = "\x1b[0m";
}

/// Wrap `text` in a color when `enabled`, otherwise pass it through.
pub fn paint(text: &str, color: &str, enabled: bool) -> String {
    if enabled {
        format!("{}{}{}", color, text, colors::RESET)
    } else {
        text.to_string()
    }
}

/// Render a status as its parenthesized badge, colored when enabled.
///
/// The literal words always appear so piped output stays stable.
pub fn status_badge(status: Status, color: bool) -> String {
    let label = format!("({})", status.label());
    match status {
        Status::Available => paint(&label, colors::GREEN, color),
        Status::Borrowed => paint(&label, colors::RED, color),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_disabled_passes_through() {
        assert_eq!(paint("hello", colors::GREEN, false), "hello");
    }

    #[test]
    fn test_paint_enabled_wraps() {
        let painted = paint("hello", colors::GREEN, true);
        assert!(painted.starts_with(colors::GREEN));
        assert!(painted.ends_with(colors::RESET));
        assert!(painted.contains("hello"));
    }

    #[test]
    fn test_status_badge_plain() {
        assert_eq!(status_badge(Status::Available, false), "(Available)");
        assert_eq!(status_badge(Status::Borrowed, false), "(Borrowed)");
    }

    #[test]
    fn test_status_badge_colored_keeps_label() {
        let badge = status_badge(Status::Borrowed, true);
        assert!(badge.contains("(Borrowed)"));
        assert!(badge.starts_with(colors::RED));
    }
}
