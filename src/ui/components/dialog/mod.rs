//! Dialog components for TUI

mod base;
mod confirm_dialog;

pub use base::wrap_text;
pub use confirm_dialog::render_confirm_dialog;
