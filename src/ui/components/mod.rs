//! Reusable UI components

mod button;
mod dialog;
mod toast;

pub use button::{render_action_button, BUTTON_HEIGHT};
pub use dialog::render_confirm_dialog;
pub use toast::render_toast;
