//! Field rendering utilities for forms

use crate::state::{field_spec, CounterLevel, FieldClass, FormField, ADDRESS_MAX_LEN};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field occupies on screen
pub fn field_height(field: &FormField) -> u16 {
    if field.is_multiline() {
        6
    } else {
        3
    }
}

/// Border colour: validity first, then focus
fn border_color(field: &FormField, is_active: bool) -> Color {
    match field.status.class {
        Some(FieldClass::Invalid) => Color::Red,
        Some(FieldClass::Valid) => Color::Green,
        None if is_active => Color::Cyan,
        None => Color::DarkGray,
    }
}

fn counter_color(level: CounterLevel) -> Color {
    match level {
        CounterLevel::Normal => Color::DarkGray,
        CounterLevel::Info => Color::Yellow,
        CounterLevel::Warning => Color::Red,
    }
}

/// Draw a form field using FormField from the domain layer
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    counter: Option<CounterLevel>,
) {
    let style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    let cursor = if is_active { "▌" } else { "" };

    let display_value = field.display_value();
    let content = if display_value.is_empty() {
        let hint = if field.placeholder.is_empty() {
            "(empty)"
        } else {
            field.placeholder
        };
        Paragraph::new(Line::from(vec![
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
            Span::styled(hint, Style::default().fg(Color::DarkGray)),
        ]))
    } else if field.is_multiline() {
        let mut lines: Vec<Line> = display_value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_value, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let required = field_spec(field.name).is_some_and(|s| s.required);
    let title = if required {
        format!(" {} * ", field.label)
    } else {
        format!(" {} ", field.label)
    };
    let title_style = if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut block = Block::default()
        .title(Span::styled(title, title_style))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(field, is_active)));

    if let Some(error) = &field.status.error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red),
        )));
    }
    if let Some(level) = counter {
        let count = field.as_text().chars().count();
        block = block.title_bottom(
            Line::from(Span::styled(
                format!(" {count}/{ADDRESS_MAX_LEN} "),
                Style::default().fg(counter_color(level)),
            ))
            .right_aligned(),
        );
    }

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{names, FieldStatus, RegistrationForm};

    #[test]
    fn test_address_is_taller() {
        let form = RegistrationForm::new();
        assert_eq!(field_height(form.field(names::ADDRESS).unwrap()), 6);
        assert_eq!(field_height(form.field(names::EMAIL).unwrap()), 3);
    }

    #[test]
    fn test_border_follows_validity() {
        let mut form = RegistrationForm::new();
        let field = form.field_mut(names::EMAIL).unwrap();
        assert_eq!(border_color(field, true), Color::Cyan);
        assert_eq!(border_color(field, false), Color::DarkGray);

        field.status = FieldStatus {
            class: Some(FieldClass::Invalid),
            error: Some("Please enter a valid email address".to_string()),
        };
        assert_eq!(border_color(field, true), Color::Red);
    }
}
