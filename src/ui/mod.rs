//! UI module for rendering the TUI

mod components;
mod confirmation;
mod forms;
mod layout;

use crate::app::App;
use crate::state::Section;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());
    let form = app.form();

    layout::draw_header(frame, header_area, form);

    match form.section {
        Section::Form => forms::draw_registration_form(frame, main_area, form),
        Section::Confirmation => confirmation::draw(frame, main_area, form),
    }

    layout::draw_status_bar(frame, status_area, form.section);

    // Overlays
    if let Some(pending) = &app.pending_reset {
        components::render_confirm_dialog(frame, pending);
    }
    if let Some(toast) = &form.toast {
        components::render_toast(frame, toast);
    }
}
