//! Form state management for the registration screen

use super::field::{FieldStatus, FieldValue, FormField};
use super::schema::{names, FIELDS};
use crate::controller::FormView;
use crate::state::{RegistrationRecord, Section, Severity, Toast};
use crate::summary::Summary;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Colour band of the address character counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterLevel {
    Normal,
    Info,
    Warning,
}

/// Data shown on the confirmation screen
#[derive(Debug, Clone)]
pub struct Confirmation {
    pub record: RegistrationRecord,
    pub summary: Summary,
}

/// Action buttons below the fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormButton {
    Register,
    Reset,
}

impl FormButton {
    pub const ALL: [FormButton; 2] = [FormButton::Register, FormButton::Reset];
}

/// Terminal view model of the registration screen
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub fields: Vec<FormField>,
    /// Index into `fields`; `fields.len()` is the buttons row
    pub active_field_index: usize,
    pub selected_button: usize,
    pub progress: u8,
    pub section: Section,
    /// Submission in flight: the register button is disabled
    pub busy: bool,
    pub toast: Option<Toast>,
    pub confirmation: Option<Confirmation>,
    /// Scroll position of the visible section
    pub scroll_offset: u16,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self {
            fields: FIELDS.iter().map(FormField::from_spec).collect(),
            active_field_index: 0,
            selected_button: 0,
            progress: 0,
            section: Section::Form,
            busy: false,
            toast: None,
            confirmation: None,
            scroll_offset: 0,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Active field, unless the buttons row has focus
    pub fn active(&self) -> Option<&FormField> {
        self.fields.get(self.active_field_index)
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == self.fields.len()
    }

    pub fn selected_form_button(&self) -> FormButton {
        FormButton::ALL[self.selected_button % FormButton::ALL.len()]
    }

    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % FormButton::ALL.len();
    }

    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = FormButton::ALL.len() - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    pub fn address_length(&self) -> usize {
        self.field(names::ADDRESS)
            .map(|f| f.as_text().chars().count())
            .unwrap_or(0)
    }

    pub fn address_counter_level(&self) -> CounterLevel {
        match self.address_length() {
            n if n > 180 => CounterLevel::Warning,
            n if n > 150 => CounterLevel::Info,
            _ => CounterLevel::Normal,
        }
    }

    /// Stage the path typed into the photo field
    pub fn set_path_input(&mut self, name: &str, path: String) {
        if let Some(field) = self.field_mut(name) {
            field.path_input = path;
        }
    }

    /// Drop the toast once its lifetime has passed
    pub fn expire_toast(&mut self, lifetime: std::time::Duration) -> bool {
        if self.toast.as_ref().is_some_and(|t| t.is_expired(lifetime)) {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    /// Scroll the form by one row, stopping at the buttons row
    pub fn scroll_form_down(&mut self) {
        let last_row = u16::try_from(self.fields.len()).unwrap_or(u16::MAX);
        self.scroll_offset = self.scroll_offset.saturating_add(1).min(last_row);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        self.fields.len() + 1 // fields + buttons row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len());
    }
}

impl FormView for RegistrationForm {
    fn field_value(&self, name: &str) -> Option<FieldValue> {
        self.field(name).map(|f| f.value.clone())
    }

    fn set_field_value(&mut self, name: &str, value: FieldValue) {
        if let Some(field) = self.field_mut(name) {
            if matches!(value, FieldValue::File(_)) {
                field.path_input.clear();
            }
            field.value = value;
        }
    }

    fn set_field_status(&mut self, name: &str, status: FieldStatus) {
        if let Some(field) = self.field_mut(name) {
            field.status = status;
        }
    }

    fn set_field_options(&mut self, name: &str, options: Vec<String>) {
        if let Some(field) = self.field_mut(name) {
            field.options = options;
        }
    }

    fn set_progress(&mut self, percent: u8) {
        self.progress = percent.min(100);
    }

    fn show_section(&mut self, section: Section) {
        self.section = section;
    }

    fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    fn show_confirmation(&mut self, record: &RegistrationRecord, summary: Summary) {
        self.confirmation = Some(Confirmation {
            record: record.clone(),
            summary,
        });
    }

    fn notify(&mut self, message: &str, severity: Severity) {
        self.toast = Some(Toast::new(message, severity));
    }

    fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
        self.active_field_index = 0;
    }
}
