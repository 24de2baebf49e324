//! Validation rules and their error messages

use super::RuleInput;
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Largest accepted photo upload (5 MB)
pub const MAX_PHOTO_BYTES: u64 = 5 * 1024 * 1024;

const MIN_AGE: i32 = 16;
const MAX_AGE: i32 = 100;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(?([0-9]{3})\)?[-. ]?([0-9]{3})[-. ]?([0-9]{4})$").expect("phone regex is valid")
});

static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s'-]+$").expect("name regex is valid"));

/// A validation kind a field can declare
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationKind {
    Required,
    Email,
    Phone,
    Name,
    Age,
    File,
    /// A declared kind with no rule behind it; always fails
    Unknown(String),
}

impl ValidationKind {
    /// Parse a comma-separated declaration such as `"required,email"`
    pub fn parse_list(declared: &str) -> Vec<Self> {
        declared
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Self::parse)
            .collect()
    }

    pub fn parse(kind: &str) -> Self {
        match kind {
            "required" => Self::Required,
            "email" => Self::Email,
            "phone" => Self::Phone,
            "name" => Self::Name,
            "age" => Self::Age,
            "file" => Self::File,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Message shown inline when this kind fails
    pub fn message(&self) -> &'static str {
        match self {
            Self::Required => "This field is required",
            Self::Email => "Please enter a valid email address",
            Self::Phone => "Please enter a valid phone number (e.g., (123) 456-7890)",
            Self::Name => {
                "Please enter a valid name (letters, spaces, hyphens, and apostrophes only)"
            }
            Self::Age => "Please enter a valid birth date (age must be between 16 and 100)",
            Self::File => "Please select a valid image file (max 5MB)",
            Self::Unknown(_) => "Invalid value",
        }
    }

    /// Run this kind's rule
    pub fn check(&self, input: RuleInput<'_>, today: NaiveDate) -> bool {
        match (self, input) {
            (Self::File, RuleInput::File(selection)) => file(selection),
            // A non-file field has no selection, which the file rule accepts
            (Self::File, RuleInput::Text(_)) => true,
            (Self::Unknown(_), _) => false,
            (kind, RuleInput::File(selection)) => {
                let shown = selection
                    .map(|s| s.path.display().to_string())
                    .unwrap_or_default();
                kind.check(RuleInput::Text(&shown), today)
            }
            (Self::Required, RuleInput::Text(v)) => required(v),
            (Self::Email, RuleInput::Text(v)) => email(v),
            (Self::Phone, RuleInput::Text(v)) => phone(v),
            (Self::Name, RuleInput::Text(v)) => name(v),
            (Self::Age, RuleInput::Text(v)) => age(v, today),
        }
    }
}

pub fn required(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

pub fn phone(value: &str) -> bool {
    PHONE_REGEX.is_match(value)
}

pub fn name(value: &str) -> bool {
    NAME_REGEX.is_match(value) && value.trim().chars().count() >= 2
}

/// Birth date in ISO form; age counts whole calendar years only
pub fn age(value: &str, today: NaiveDate) -> bool {
    let Ok(birth) = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") else {
        return false;
    };
    let age = today.year() - birth.year();
    (MIN_AGE..=MAX_AGE).contains(&age)
}

/// No selection is fine; a selection must be an image within the size cap
pub fn file(selection: Option<&FileSelection>) -> bool {
    match selection {
        None => true,
        Some(s) => s.size <= MAX_PHOTO_BYTES && s.mime.starts_with("image/"),
    }
}

/// A file picked for upload. Only metadata is kept, never the contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSelection {
    pub path: PathBuf,
    pub size: u64,
    pub mime: String,
}

impl FileSelection {
    /// Resolve a path on disk into a selection
    pub fn from_path(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is not a file", path.display()),
            ));
        }
        Ok(Self {
            path: path.to_path_buf(),
            size: metadata.len(),
            mime: mime_for_path(path).to_string(),
        })
    }

    /// File name for display
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// MIME type guessed from the file extension
fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Months;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn years_before(years: u32) -> String {
        today()
            .checked_sub_months(Months::new(years * 12))
            .unwrap()
            .format("%Y-%m-%d")
            .to_string()
    }

    mod text_rules {
        use super::*;

        #[test]
        fn test_required_trims_whitespace() {
            assert!(required("x"));
            assert!(!required(""));
            assert!(!required("   \t"));
        }

        #[test]
        fn test_email() {
            assert!(email("a@b.co"));
            assert!(!email("a@b"));
            assert!(!email(""));
            assert!(!email("a b@c.de"));
        }

        #[test]
        fn test_phone_shapes() {
            assert!(phone("(123) 456-7890"));
            assert!(phone("123-456-7890"));
            assert!(phone("123.456.7890"));
            assert!(phone("1234567890"));
            assert!(!phone("123-4567"));
            assert!(!phone("(123) 456-78901"));
        }

        #[test]
        fn test_name() {
            assert!(name("Ada"));
            assert!(name("Mary-Jane O'Neil"));
            assert!(!name("A"));
            assert!(!name(" A "));
            assert!(!name("R2D2"));
        }
    }

    mod age_rule {
        use super::*;

        #[test]
        fn test_exactly_sixteen_is_valid() {
            assert!(age(&years_before(16), today()));
        }

        #[test]
        fn test_fifteen_is_invalid() {
            assert!(!age(&years_before(15), today()));
        }

        #[test]
        fn test_hundred_bounds() {
            assert!(age(&years_before(100), today()));
            assert!(!age(&years_before(101), today()));
        }

        #[test]
        fn test_ignores_month_and_day() {
            // Born late in the year still counts the full year difference
            assert!(age("2010-12-31", today()));
        }

        #[test]
        fn test_empty_or_garbage_is_invalid() {
            assert!(!age("", today()));
            assert!(!age("not a date", today()));
            assert!(!age("2010-13-01", today()));
        }
    }

    mod file_rule {
        use super::*;

        fn selection(size: u64, mime: &str) -> FileSelection {
            FileSelection {
                path: PathBuf::from("photo.png"),
                size,
                mime: mime.to_string(),
            }
        }

        #[test]
        fn test_absent_selection_is_valid() {
            assert!(file(None));
        }

        #[test]
        fn test_image_under_cap() {
            assert!(file(Some(&selection(1024, "image/png"))));
            assert!(file(Some(&selection(MAX_PHOTO_BYTES, "image/jpeg"))));
        }

        #[test]
        fn test_too_large_or_not_image() {
            assert!(!file(Some(&selection(MAX_PHOTO_BYTES + 1, "image/png"))));
            assert!(!file(Some(&selection(10, "application/pdf"))));
        }

        #[test]
        fn test_from_path_reads_size_and_mime() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("Me.JPG");
            std::fs::write(&path, [0u8; 64]).unwrap();

            let selection = FileSelection::from_path(&path).unwrap();
            assert_eq!(selection.size, 64);
            assert_eq!(selection.mime, "image/jpeg");
            assert_eq!(selection.file_name(), "Me.JPG");
        }

        #[test]
        fn test_from_path_rejects_directory() {
            let dir = tempfile::tempdir().unwrap();
            assert!(FileSelection::from_path(dir.path()).is_err());
        }

        #[test]
        fn test_unknown_extension_is_not_an_image() {
            assert_eq!(mime_for_path(Path::new("photo.PNG")), "image/png");
            assert_eq!(mime_for_path(Path::new("notes.txt")), "text/plain");
            assert_eq!(
                mime_for_path(Path::new("photo")),
                "application/octet-stream"
            );
            assert!(!file(Some(&selection(64, mime_for_path(Path::new("a.heic"))))));
        }
    }

    mod kinds {
        use super::*;

        #[test]
        fn test_parse_list_trims_and_skips_empty() {
            let kinds = ValidationKind::parse_list(" required , email,,");
            assert_eq!(kinds, vec![ValidationKind::Required, ValidationKind::Email]);
        }

        #[test]
        fn test_file_kind_on_text_input_passes() {
            assert!(ValidationKind::File.check(RuleInput::Text(""), today()));
        }

        #[test]
        fn test_required_on_file_input_uses_path() {
            assert!(!ValidationKind::Required.check(RuleInput::File(None), today()));
        }
    }
}
