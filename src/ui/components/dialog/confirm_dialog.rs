//! Confirmation dialog for resetting the form

use super::base::{render_dialog, DialogConfig};
use crate::state::PendingReset;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

const RESET_MESSAGE: &str =
    "Are you sure you want to reset the form? All entered data will be cleared.";

/// Render the reset confirmation overlay
pub fn render_confirm_dialog(frame: &mut Frame, pending: &PendingReset) {
    // Cancel first so Enter is harmless by default
    let options = [(false, "Cancel", Color::White), (true, "Reset", Color::Red)];

    let mut choices = Vec::new();
    for (is_reset, label, color) in options {
        let is_selected = pending.selected_option == is_reset;
        let prefix = if is_selected { "▸ " } else { "  " };
        let style = if is_selected {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        choices.push(Span::styled(format!("{prefix}{label}   "), style));
    }

    let hint = Line::from(vec![
        Span::styled("←→", Style::default().fg(Color::Cyan)),
        Span::styled(" select  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" confirm  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(" cancel", Style::default().fg(Color::DarkGray)),
    ]);

    render_dialog(
        frame,
        DialogConfig {
            title: "Reset Form",
            accent: Color::Red,
            message: RESET_MESSAGE,
            footer: vec![Line::from(choices), Line::from(""), hint],
            max_width: 56,
        },
    );
}
