//! Field rendering contract
//!
//! The controller never draws anything itself. It tells a [`FieldRenderer`]
//! what to show or clear, and the host decides how that looks: inline error
//! text next to an input, a page banner, or plain console output.

/// Page-level feedback category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

/// Trait for rendering per-field errors and page-level feedback
#[cfg_attr(test, mockall::automock)]
pub trait FieldRenderer: Send {
    /// Mark a field invalid and display `message` next to it
    fn show_error(&mut self, field_id: &str, message: &str);

    /// Clear any error shown on a field
    fn clear_error(&mut self, field_id: &str);

    /// Display a page-level feedback banner
    fn show_feedback(&mut self, message: &str, kind: FeedbackKind);

    /// Hide the page-level feedback banner
    fn hide_feedback(&mut self);
}

/// Renderer that writes errors and feedback to the terminal
#[derive(Debug, Default)]
pub struct ConsoleRenderer;

impl FieldRenderer for ConsoleRenderer {
    fn show_error(&mut self, field_id: &str, message: &str) {
        eprintln!("  {field_id}: {message}");
    }

    fn clear_error(&mut self, _field_id: &str) {
        // Console output is append-only, nothing to clear
    }

    fn show_feedback(&mut self, message: &str, kind: FeedbackKind) {
        match kind {
            FeedbackKind::Success => println!("{message}"),
            FeedbackKind::Error => eprintln!("{message}"),
        }
    }

    fn hide_feedback(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_renderer_does_not_panic() {
        let mut renderer = ConsoleRenderer;
        renderer.show_error("email", "E-mail inválido");
        renderer.clear_error("email");
        renderer.show_feedback("ok", FeedbackKind::Success);
        renderer.show_feedback("bad", FeedbackKind::Error);
        renderer.hide_feedback();
    }
}
