//! Confirmation screen shown after a successful registration

use crate::state::RegistrationForm;
use crate::summary::{Summary, NOT_PROVIDED};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Lines of the summary body, section by section
fn summary_lines(summary: &Summary) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for section in &summary.sections {
        lines.push(Line::from(Span::styled(
            section.title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        for item in &section.items {
            let value_style = if item.value == NOT_PROVIDED {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC)
            } else {
                Style::default().fg(Color::White)
            };
            // Multi-line addresses continue under the value column
            for (i, part) in item.value.split('\n').enumerate() {
                let label = if i == 0 { item.label } else { "" };
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {label:<20}"),
                        Style::default().fg(Color::Gray),
                    ),
                    Span::styled(part.to_string(), value_style),
                ]));
            }
        }
        lines.push(Line::from(""));
    }
    lines
}

/// Draw the confirmation section
pub fn draw(frame: &mut Frame, area: Rect, form: &RegistrationForm) {
    let block = Block::default()
        .title(" Registration Complete ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let Some(confirmation) = &form.confirmation else {
        let empty = Paragraph::new("No registration to show").block(block);
        frame.render_widget(empty, area);
        return;
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Registration ID: ", Style::default().fg(Color::Gray)),
            Span::styled(
                confirmation.record.id.clone(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Registered:      ", Style::default().fg(Color::Gray)),
            Span::raw(confirmation.record.date.clone()),
        ]),
        Line::from(""),
    ];
    lines.extend(summary_lines(&confirmation.summary));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((form.scroll_offset, 0));

    frame.render_widget(paragraph, area);
}
