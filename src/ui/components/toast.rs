//! Toast notification overlay

use super::dialog::wrap_text;
use crate::state::{Severity, Toast};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const TOAST_WIDTH: u16 = 44;

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => Color::Green,
        Severity::Error => Color::Red,
        Severity::Info => Color::Blue,
    }
}

/// Top-right box, clear of the header gauge
pub fn toast_area(screen: Rect, lines: u16) -> Rect {
    let width = TOAST_WIDTH.min(screen.width);
    Rect {
        x: screen.x + screen.width - width,
        y: screen.y + 3,
        width,
        height: (lines + 2).min(screen.height.saturating_sub(3)),
    }
}

/// Render the current toast
pub fn render_toast(frame: &mut Frame, toast: &Toast) {
    let color = severity_color(toast.severity);
    let lines = wrap_text(&toast.message, usize::from(TOAST_WIDTH - 4));
    let area = toast_area(frame.area(), lines.len() as u16);

    frame.render_widget(Clear, area);

    let content: Vec<Line> = lines
        .into_iter()
        .map(|l| Line::from(Span::styled(l, Style::default().fg(Color::White))))
        .collect();

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", toast.severity.label()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(Paragraph::new(content).block(block), area);
}
