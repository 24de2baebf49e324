//! Rendering seam between the controller and whatever draws the form

use crate::state::{FieldStatus, FieldValue, RegistrationRecord, Section, Severity};
use crate::summary::Summary;

/// Operations the controller needs from a rendering surface.
///
/// The terminal implements this with [`crate::state::RegistrationForm`];
/// tests substitute an in-memory fake.
pub trait FormView {
    /// Current value of a field, `None` if the surface has no such field
    fn field_value(&self, name: &str) -> Option<FieldValue>;

    fn set_field_value(&mut self, name: &str, value: FieldValue);

    /// Apply the valid/invalid class and inline error text
    fn set_field_status(&mut self, name: &str, status: FieldStatus);

    /// Replace the choices of a select field
    fn set_field_options(&mut self, name: &str, options: Vec<String>);

    fn set_progress(&mut self, percent: u8);

    fn show_section(&mut self, section: Section);

    /// Disable the submit control and show the busy indicator
    fn set_busy(&mut self, busy: bool);

    fn show_confirmation(&mut self, record: &RegistrationRecord, summary: Summary);

    /// Transient notification
    fn notify(&mut self, message: &str, severity: Severity);

    fn scroll_to_top(&mut self);
}
