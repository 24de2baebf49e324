//! Form field value objects

use super::schema::{FieldKind, FieldSpec};
use crate::validation::FileSelection;

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    File(Option<FileSelection>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Text content; file values yield an empty string
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::File(_) => "",
        }
    }

    #[allow(dead_code)]
    pub fn as_file(&self) -> Option<&FileSelection> {
        match self {
            FieldValue::File(selection) => selection.as_ref(),
            FieldValue::Text(_) => None,
        }
    }

    /// Empty after trimming, or no file selected
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::File(selection) => selection.is_none(),
        }
    }
}

/// Visual validity class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldClass {
    Valid,
    Invalid,
}

/// What the field currently shows about its validity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldStatus {
    /// `None` when no class applies (an untouched empty field)
    pub class: Option<FieldClass>,
    /// Inline error text, when visible
    pub error: Option<String>,
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub value: FieldValue,
    pub status: FieldStatus,
    /// Current dropdown choices (select fields only)
    pub options: Vec<String>,
    pub max_len: Option<usize>,
    pub placeholder: &'static str,
    /// Path typed into a file field before it is attached
    pub path_input: String,
}

impl FormField {
    /// Build an empty field from its schema entry
    pub fn from_spec(spec: &FieldSpec) -> Self {
        let value = match spec.kind {
            FieldKind::File => FieldValue::File(None),
            _ => FieldValue::Text(String::new()),
        };
        Self {
            name: spec.name,
            label: spec.label,
            kind: spec.kind,
            value,
            status: FieldStatus::default(),
            options: Vec::new(),
            max_len: spec.max_len,
            placeholder: spec.placeholder,
            path_input: String::new(),
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self.kind, FieldKind::Multiline)
    }

    pub fn is_select(&self) -> bool {
        matches!(self.kind, FieldKind::Select(_))
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, FieldKind::File)
    }

    /// Get the text value (empty for file fields)
    pub fn as_text(&self) -> &str {
        self.value.as_text()
    }

    /// Text the user is editing: the value itself, or the pending path
    pub fn editable_text(&self) -> &str {
        if self.is_file() {
            &self.path_input
        } else {
            self.as_text()
        }
    }

    /// Value the field would hold after appending `c`, if editing allows it
    pub fn with_char(&self, c: char) -> Option<String> {
        if self.is_select() {
            return None;
        }
        let current = self.editable_text();
        if let Some(max) = self.max_len {
            if current.chars().count() >= max {
                return None;
            }
        }
        let mut next = current.to_string();
        next.push(c);
        Some(next)
    }

    /// Value the field would hold after removing its last character
    pub fn without_last_char(&self) -> Option<String> {
        if self.is_select() {
            return None;
        }
        let mut next = self.editable_text().to_string();
        next.pop()?;
        Some(next)
    }

    /// Next (or previous) option, wrapping through the empty placeholder
    pub fn cycled_option(&self, forward: bool) -> Option<String> {
        if !self.is_select() {
            return None;
        }
        // Slot 0 is the placeholder, slots 1..=n the options
        let slots = self.options.len() + 1;
        let current = self
            .options
            .iter()
            .position(|o| o == self.as_text())
            .map(|i| i + 1)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % slots
        } else {
            (current + slots - 1) % slots
        };
        Some(if next == 0 {
            String::new()
        } else {
            self.options[next - 1].clone()
        })
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) if s.is_empty() && self.is_select() => {
                format!("‹ {} ›", self.placeholder)
            }
            FieldValue::Text(s) if self.is_select() => format!("‹ {s} ›"),
            FieldValue::Text(s) => s.clone(),
            FieldValue::File(Some(selection)) if self.path_input.is_empty() => {
                format!("{} ({} KB)", selection.file_name(), selection.size.div_ceil(1024))
            }
            FieldValue::File(_) => self.path_input.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::schema::{field_spec, names};
    use std::path::PathBuf;

    fn field(name: &str) -> FormField {
        FormField::from_spec(field_spec(name).unwrap())
    }

    mod values {
        use super::*;

        #[test]
        fn test_blank_text() {
            assert!(FieldValue::text("  ").is_blank());
            assert!(!FieldValue::text("x").is_blank());
        }

        #[test]
        fn test_blank_file() {
            assert!(FieldValue::File(None).is_blank());
            let selection = FileSelection {
                path: PathBuf::from("a.png"),
                size: 1,
                mime: "image/png".to_string(),
            };
            assert!(!FieldValue::File(Some(selection)).is_blank());
        }

        #[test]
        fn test_file_value_has_no_text() {
            assert_eq!(FieldValue::File(None).as_text(), "");
        }
    }

    mod editing {
        use super::*;

        #[test]
        fn test_from_spec_file_field() {
            let photo = field(names::PHOTO);
            assert!(photo.is_file());
            assert_eq!(photo.value, FieldValue::File(None));
        }

        #[test]
        fn test_with_char_respects_max_len() {
            let mut address = field(names::ADDRESS);
            address.value = FieldValue::text("a".repeat(200));
            assert!(address.with_char('b').is_none());

            address.value = FieldValue::text("abc");
            assert_eq!(address.with_char('d').as_deref(), Some("abcd"));
        }

        #[test]
        fn test_select_is_not_typed_into() {
            let gender = field(names::GENDER);
            assert!(gender.with_char('M').is_none());
            assert!(gender.without_last_char().is_none());
        }

        #[test]
        fn test_without_last_char_on_empty() {
            let first = field(names::FIRST_NAME);
            assert!(first.without_last_char().is_none());
        }

        #[test]
        fn test_file_field_edits_path_input() {
            let mut photo = field(names::PHOTO);
            photo.path_input = "/tmp/a".to_string();
            assert_eq!(photo.with_char('b').as_deref(), Some("/tmp/ab"));
        }
    }

    mod options {
        use super::*;

        fn gender() -> FormField {
            let mut f = field(names::GENDER);
            f.options = vec!["Male".into(), "Female".into()];
            f
        }

        #[test]
        fn test_cycle_forward_wraps_through_placeholder() {
            let mut f = gender();
            assert_eq!(f.cycled_option(true).as_deref(), Some("Male"));
            f.value = FieldValue::text("Female");
            assert_eq!(f.cycled_option(true).as_deref(), Some(""));
        }

        #[test]
        fn test_cycle_backward() {
            let f = gender();
            assert_eq!(f.cycled_option(false).as_deref(), Some("Female"));
        }

        #[test]
        fn test_unknown_value_restarts_cycle() {
            let mut f = gender();
            f.value = FieldValue::text("Robot");
            assert_eq!(f.cycled_option(true).as_deref(), Some("Male"));
        }

        #[test]
        fn test_display_placeholder() {
            let f = gender();
            assert_eq!(f.display_value(), "‹ Select Gender ›");
        }
    }
}
