//! Form domain layer
//!
//! Field schema, option catalogs and the view model of the
//! registration screen.

mod catalog;
mod field;
mod form_state;
mod schema;

pub use catalog::{courses_for_year, to_options, ACADEMIC_YEARS, EDUCATION_LEVELS, GENDERS};
pub use field::{FieldClass, FieldStatus, FieldValue, FormField};
pub use form_state::{CounterLevel, Form, FormButton, RegistrationForm};
pub use schema::{
    field_spec, names, required_fields, FieldKind, ADDRESS_MAX_LEN, FIELDS,
};
