//! Submitted registration data

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Flat field-name to value mapping, as captured from the form
pub type FormData = BTreeMap<String, String>;

/// The single most recently submitted registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRecord {
    /// `STU` + year + four digits
    pub id: String,
    /// Long, human-readable submission timestamp
    pub date: String,
    pub data: FormData,
}
