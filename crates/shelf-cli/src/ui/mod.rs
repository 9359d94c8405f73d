//! Terminal presentation: color resolution and status badges.
//!
//! The core emits a plain [`shelf_core::Status`]; everything about how it
//! looks on screen lives here.

pub mod theme;

pub use theme::status_badge;

/// Resolved presentation settings for one CLI session.
#[derive(Debug, Clone, Copy)]
pub struct UiContext {
    /// Whether ANSI colors are emitted
    pub color: bool,
}

impl UiContext {
    /// Resolve presentation from the terminal environment.
    ///
    /// Routing rules:
    /// 1. `TERM=dumb` forces plain output
    /// 2. Color only when stdout is a TTY
    pub fn resolve(is_tty: bool, term_is_dumb: bool) -> Self {
        Self {
            color: is_tty && !term_is_dumb,
        }
    }

    /// Plain output, used by tests and piped sessions.
    #[allow(dead_code)]
    pub fn plain() -> Self {
        Self { color: false }
    }
}
