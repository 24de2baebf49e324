//! Registration form rendering

use super::field_renderer::{draw_field, field_height};
use crate::state::{names, FormButton, RegistrationForm};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// First row to draw.
///
/// `heights` holds one entry per row, buttons row included. With a zero
/// offset the view starts at the first row that keeps the active row on
/// screen. The offset scrolls further down, but never past the row from
/// which every remaining row already fits.
pub fn first_visible_row(heights: &[u16], available: u16, active: usize, offset: usize) -> usize {
    let Some(last) = heights.len().checked_sub(1) else {
        return 0;
    };
    let active = active.min(last);
    let mut first = 0;
    while first < active && heights[first..=active].iter().sum::<u16>() > available {
        first += 1;
    }
    let mut max_first = first;
    while max_first < last && heights[max_first..].iter().sum::<u16>() > available {
        max_first += 1;
    }
    first.saturating_add(offset).min(max_first)
}

/// Height of every row, the buttons row last
fn row_heights(form: &RegistrationForm) -> Vec<u16> {
    let mut heights: Vec<u16> = form.fields.iter().map(field_height).collect();
    heights.push(BUTTON_HEIGHT);
    heights
}

/// Draw the registration form with its buttons row
pub fn draw_registration_form(frame: &mut Frame, area: Rect, form: &RegistrationForm) {
    let block = Block::default()
        .title(" Registration ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let heights = row_heights(form);
    let first = first_visible_row(
        &heights,
        inner.height,
        form.active_field_index,
        usize::from(form.scroll_offset),
    );

    let bottom = inner.y + inner.height;
    let mut y = inner.y;
    for (index, &height) in heights.iter().enumerate().skip(first) {
        if y + height > bottom {
            break;
        }
        let row = Rect {
            x: inner.x,
            y,
            width: inner.width,
            height,
        };
        match form.fields.get(index) {
            Some(field) => {
                let counter =
                    (field.name == names::ADDRESS).then(|| form.address_counter_level());
                draw_field(
                    frame,
                    row,
                    field,
                    index == form.active_field_index,
                    counter,
                );
            }
            None => draw_buttons(frame, row, form),
        }
        y += height;
    }
}

fn draw_buttons(frame: &mut Frame, area: Rect, form: &RegistrationForm) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(20), // Register (primary)
            Constraint::Length(20), // Reset
            Constraint::Min(0),
        ])
        .split(area);

    let focused = form.is_buttons_row_active();
    let selected = form.selected_form_button();

    let register_label = if form.busy {
        "Processing..."
    } else {
        "Register"
    };
    render_action_button(
        frame,
        chunks[0],
        register_label,
        focused && selected == FormButton::Register,
        !form.busy,
        Some(Color::Green),
    );
    render_action_button(
        frame,
        chunks[1],
        "Reset",
        focused && selected == FormButton::Reset,
        !form.busy,
        Some(Color::Gray),
    );
}
