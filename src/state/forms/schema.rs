//! The fixed set of registration fields

use super::catalog::{ACADEMIC_YEARS, COURSES, EDUCATION_LEVELS, GENDERS};
use crate::validation::ValidationKind;

/// Field names; persisted data and the summary depend on these exact strings
pub mod names {
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const DATE_OF_BIRTH: &str = "dateOfBirth";
    pub const GENDER: &str = "gender";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const ADDRESS: &str = "address";
    pub const COURSE: &str = "course";
    pub const ACADEMIC_YEAR: &str = "academicYear";
    pub const PREVIOUS_EDUCATION: &str = "previousEducation";
    pub const EMERGENCY_NAME: &str = "emergencyName";
    pub const EMERGENCY_PHONE: &str = "emergencyPhone";
    pub const PHOTO: &str = "photo";
}

/// How a field is edited and rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Multiline,
    /// Dropdown populated from a fixed list at startup
    Select(&'static [&'static str]),
    File,
}

/// Static description of one field
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    /// Comma-separated validation kinds, evaluated in order
    pub validation: &'static str,
    pub required: bool,
    pub max_len: Option<usize>,
    pub placeholder: &'static str,
}

impl FieldSpec {
    pub fn validation_kinds(&self) -> Vec<ValidationKind> {
        ValidationKind::parse_list(self.validation)
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, FieldKind::File)
    }

    pub fn is_phone(&self) -> bool {
        self.validation_kinds().contains(&ValidationKind::Phone)
    }
}

/// Address length cap
pub const ADDRESS_MAX_LEN: usize = 200;

const fn text(
    name: &'static str,
    label: &'static str,
    validation: &'static str,
    placeholder: &'static str,
) -> FieldSpec {
    FieldSpec {
        name,
        label,
        kind: FieldKind::Text,
        validation,
        required: true,
        max_len: None,
        placeholder,
    }
}

const fn select(
    name: &'static str,
    label: &'static str,
    options: &'static [&'static str],
    required: bool,
    placeholder: &'static str,
) -> FieldSpec {
    FieldSpec {
        name,
        label,
        kind: FieldKind::Select(options),
        validation: if required { "required" } else { "" },
        required,
        max_len: None,
        placeholder,
    }
}

/// Every field, in form order
pub const FIELDS: &[FieldSpec] = &[
    text(names::FIRST_NAME, "First Name", "required,name", ""),
    text(names::LAST_NAME, "Last Name", "required,name", ""),
    text(names::DATE_OF_BIRTH, "Date of Birth", "required,age", "YYYY-MM-DD"),
    select(names::GENDER, "Gender", GENDERS, true, "Select Gender"),
    text(names::EMAIL, "Email", "required,email", "name@example.com"),
    text(names::PHONE, "Phone", "required,phone", "(123) 456-7890"),
    FieldSpec {
        name: names::ADDRESS,
        label: "Address",
        kind: FieldKind::Multiline,
        validation: "required",
        required: true,
        max_len: Some(ADDRESS_MAX_LEN),
        placeholder: "",
    },
    select(names::COURSE, "Course", COURSES, true, "Select Course"),
    select(
        names::ACADEMIC_YEAR,
        "Academic Year",
        ACADEMIC_YEARS,
        true,
        "Select Year",
    ),
    select(
        names::PREVIOUS_EDUCATION,
        "Previous Education",
        EDUCATION_LEVELS,
        false,
        "Select Education Level",
    ),
    text(names::EMERGENCY_NAME, "Emergency Contact Name", "required,name", ""),
    text(
        names::EMERGENCY_PHONE,
        "Emergency Contact Phone",
        "required,phone",
        "(123) 456-7890",
    ),
    FieldSpec {
        name: names::PHOTO,
        label: "Photo (optional)",
        kind: FieldKind::File,
        validation: "file",
        required: false,
        max_len: None,
        placeholder: "path to an image, Enter to attach",
    },
];

/// Look up a field by name
pub fn field_spec(name: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|spec| spec.name == name)
}

/// Fields that count towards progress and block submission when empty
pub fn required_fields() -> impl Iterator<Item = &'static FieldSpec> {
    FIELDS.iter().filter(|spec| spec.required)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for spec in FIELDS {
            assert!(seen.insert(spec.name), "duplicate field {}", spec.name);
        }
    }

    #[test]
    fn test_required_count() {
        assert_eq!(required_fields().count(), 11);
    }

    #[test]
    fn test_photo_is_optional_file() {
        let photo = field_spec(names::PHOTO).unwrap();
        assert!(photo.is_file());
        assert!(!photo.required);
        assert_eq!(photo.validation_kinds(), vec![ValidationKind::File]);
    }

    #[test]
    fn test_phone_fields() {
        let phones: Vec<_> = FIELDS.iter().filter(|s| s.is_phone()).map(|s| s.name).collect();
        assert_eq!(phones, vec![names::PHONE, names::EMERGENCY_PHONE]);
    }

    #[test]
    fn test_unknown_field() {
        assert!(field_spec("nickname").is_none());
    }
}
