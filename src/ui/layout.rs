//! Layout components (header, status bar)

use crate::platform::{RESET_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{RegistrationForm, Section};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with progress
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Title plus the completion gauge
pub fn draw_header(frame: &mut Frame, area: Rect, form: &RegistrationForm) {
    let block = Block::default()
        .title(Span::styled(
            " Student Registration ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let color = if form.progress == 100 {
        Color::Green
    } else {
        Color::Cyan
    };
    let gauge = Gauge::default()
        .block(block)
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .percent(u16::from(form.progress))
        .label(format!("{}% complete", form.progress));

    frame.render_widget(gauge, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, section: Section) {
    let hints = get_section_hints(section);
    let spans = vec![
        Span::raw(" "),
        Span::styled(hints, Style::default().fg(Color::Gray)),
    ];
    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right (double Ctrl+C to quit)
    let quit_hint = " ^C^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the visible section
fn get_section_hints(section: Section) -> String {
    match section {
        Section::Form => format!(
            "Tab:next  ←→:choose  {SUBMIT_SHORTCUT}:register  {RESET_SHORTCUT}:reset  PgUp/PgDn:scroll"
        ),
        Section::Confirmation => {
            "n:new  e:edit  p:export  y:copy id  j/k:scroll  q:quit".to_string()
        }
    }
}
