//! Registration form controller
//!
//! [`FormController`] owns the view, the storage slots and the validation
//! state, and exposes every form operation as a method. It is constructed
//! once at startup and driven by input events, timers and lifecycle hooks.

mod registration;
mod view;

pub use registration::{format_registration_date, Clock, RegistrationIdGenerator, SystemClock};
pub use view::FormView;

use crate::state::{
    courses_for_year, field_spec, names, required_fields, to_options, FieldClass, FieldKind,
    FieldStatus, FieldValue, FormData, RegistrationRecord, Section, Severity, SubmissionPhase,
    ACADEMIC_YEARS, EDUCATION_LEVELS, FIELDS, GENDERS,
};
use crate::storage::{KeyValueStore, Persistence};
use crate::summary::Summary;
use crate::validation::{self, format_phone, FileSelection, RuleInput};
use chrono::Datelike;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

/// Tunables injected at construction
#[derive(Debug, Clone)]
pub struct ControllerSettings {
    /// Simulated network latency before a submission completes
    pub submit_delay: Duration,
    /// Where exported summaries are written
    pub export_dir: Option<PathBuf>,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            submit_delay: Duration::from_millis(1500),
            export_dir: None,
        }
    }
}

/// Result of asking to submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStart {
    /// Busy state entered; call [`FormController::finish_submission`]
    Started,
    /// Some field failed validation
    Invalid,
    /// A submission is already in flight
    AlreadySubmitting,
}

/// Field name to last validation result
pub type ValidationState = HashMap<String, bool>;

/// Single owner of all form state
pub struct FormController<V, S> {
    view: V,
    persistence: Persistence<S>,
    validation_state: ValidationState,
    phase: SubmissionPhase,
    clock: Box<dyn Clock + Send>,
    ids: RegistrationIdGenerator,
    settings: ControllerSettings,
    last_record: Option<RegistrationRecord>,
}

impl<V: FormView, S: KeyValueStore> FormController<V, S> {
    pub fn new(view: V, store: S, settings: ControllerSettings) -> Self {
        Self {
            view,
            persistence: Persistence::new(store),
            validation_state: ValidationState::new(),
            phase: SubmissionPhase::Editing,
            clock: Box::new(SystemClock),
            ids: RegistrationIdGenerator::new(),
            settings,
            last_record: None,
        }
    }

    #[allow(dead_code)]
    pub fn with_clock(mut self, clock: impl Clock + Send + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    #[allow(dead_code)]
    pub fn with_id_generator(mut self, ids: RegistrationIdGenerator) -> Self {
        self.ids = ids;
        self
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    #[allow(dead_code)]
    pub fn validation_state(&self) -> &ValidationState {
        &self.validation_state
    }

    pub fn last_record(&self) -> Option<&RegistrationRecord> {
        self.last_record.as_ref()
    }

    /// Populate dropdowns, restore any draft, compute progress
    pub fn initialize(&mut self) {
        self.view
            .set_field_options(names::GENDER, to_options(GENDERS));
        self.view
            .set_field_options(names::ACADEMIC_YEAR, to_options(ACADEMIC_YEARS));
        self.view
            .set_field_options(names::PREVIOUS_EDUCATION, to_options(EDUCATION_LEVELS));
        self.view
            .set_field_options(names::COURSE, courses_for_year(""));

        if self.load_draft() {
            tracing::info!("Restored saved draft");
        }
        self.update_progress();
    }

    // ------------------------------------------------------------------
    // Field events
    // ------------------------------------------------------------------

    /// The user changed a field: store, validate, recompute progress, autosave
    pub fn handle_input(&mut self, name: &str, value: FieldValue) {
        let Some(spec) = field_spec(name) else {
            tracing::warn!("Input for unknown field {name}");
            return;
        };

        let value = match value {
            FieldValue::Text(raw) if spec.is_phone() => FieldValue::Text(format_phone(&raw)),
            other => other,
        };
        self.view.set_field_value(name, value);

        if name == names::ACADEMIC_YEAR {
            self.refresh_course_options();
        }

        self.validate_field(name);
        self.update_progress();
        self.save_draft();
    }

    /// Focus left a field
    pub fn handle_blur(&mut self, name: &str) {
        self.validate_field(name);
    }

    /// Resolve a typed path and attach it to a file field.
    ///
    /// An empty path detaches the current file.
    pub fn attach_file(&mut self, name: &str, path: &str) {
        let path = path.trim();
        if path.is_empty() {
            self.handle_input(name, FieldValue::File(None));
            return;
        }
        match FileSelection::from_path(path) {
            Ok(selection) => self.handle_input(name, FieldValue::File(Some(selection))),
            Err(e) => {
                tracing::warn!("Could not attach {path}: {e}");
                self.view
                    .notify(&format!("Could not open {path}: {e}"), Severity::Error);
            }
        }
    }

    // ------------------------------------------------------------------
    // Validation and progress
    // ------------------------------------------------------------------

    /// Validate one field and update its visuals and the validation state
    pub fn validate_field(&mut self, name: &str) -> bool {
        let Some(spec) = field_spec(name) else {
            return true;
        };
        let Some(value) = self.view.field_value(name) else {
            return true;
        };

        let input = match &value {
            FieldValue::Text(text) => RuleInput::Text(text),
            FieldValue::File(selection) => RuleInput::File(selection.as_ref()),
        };
        let verdict = validation::evaluate(&spec.validation_kinds(), input, self.clock.today());

        // Empty fields carry no class; file fields are always classified
        let has_content = !value.is_blank();
        let class = if has_content || spec.is_file() {
            Some(if verdict.is_valid {
                FieldClass::Valid
            } else {
                FieldClass::Invalid
            })
        } else {
            None
        };
        let error = verdict
            .message
            .filter(|_| has_content)
            .map(str::to_string);

        self.view.set_field_status(name, FieldStatus { class, error });
        self.validation_state
            .insert(name.to_string(), verdict.is_valid);
        verdict.is_valid
    }

    /// Validate every field; true only if all pass
    pub fn validate_all(&mut self) -> bool {
        FIELDS
            .iter()
            .map(|spec| self.validate_field(spec.name))
            .fold(true, |all, ok| all && ok)
    }

    /// Recompute and render completion percentage
    pub fn update_progress(&mut self) -> u8 {
        let mut total = 0usize;
        let mut filled = 0usize;
        for spec in required_fields() {
            total += 1;
            let is_filled = matches!(spec.kind, FieldKind::File)
                || self
                    .view
                    .field_value(spec.name)
                    .is_some_and(|v| !v.is_blank());
            if is_filled {
                filled += 1;
            }
        }
        let percent = if total == 0 {
            0
        } else {
            ((filled as f64 / total as f64) * 100.0).round() as u8
        };
        self.view.set_progress(percent);
        percent
    }

    /// Academic year decides which courses are offered
    pub fn refresh_course_options(&mut self) {
        let year = self
            .view
            .field_value(names::ACADEMIC_YEAR)
            .map(|v| v.as_text().to_string())
            .unwrap_or_default();
        let courses = courses_for_year(&year);

        let current = self
            .view
            .field_value(names::COURSE)
            .map(|v| v.as_text().to_string())
            .unwrap_or_default();
        let still_offered = current.is_empty() || courses.contains(&current);
        self.view.set_field_options(names::COURSE, courses);

        if !still_offered {
            self.view
                .set_field_value(names::COURSE, FieldValue::Text(String::new()));
            self.validate_field(names::COURSE);
        }
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Current values of every non-file field
    pub fn collect_data(&self) -> FormData {
        FIELDS
            .iter()
            .filter(|spec| !spec.is_file())
            .filter_map(|spec| {
                self.view
                    .field_value(spec.name)
                    .map(|v| (spec.name.to_string(), v.as_text().to_string()))
            })
            .collect()
    }

    /// Best-effort autosave; failures are logged only
    pub fn save_draft(&mut self) -> bool {
        let data = self.collect_data();
        self.persistence.save_draft(&data)
    }

    /// Restore the stored draft, if any. Returns whether one was applied.
    pub fn load_draft(&mut self) -> bool {
        match self.persistence.load_draft() {
            Some(data) => {
                self.apply_data(&data);
                true
            }
            None => false,
        }
    }

    /// Write values back by name and re-validate each
    fn apply_data(&mut self, data: &FormData) {
        for (name, value) in data {
            let Some(spec) = field_spec(name) else {
                continue;
            };
            if spec.is_file() {
                continue;
            }
            self.view
                .set_field_value(spec.name, FieldValue::Text(value.clone()));
            self.validate_field(spec.name);
        }
        self.refresh_course_options();
        self.update_progress();
    }

    // ------------------------------------------------------------------
    // Submission
    // ------------------------------------------------------------------

    /// Validate and enter the busy state
    pub fn begin_submission(&mut self) -> SubmissionStart {
        if self.phase == SubmissionPhase::Submitting {
            return SubmissionStart::AlreadySubmitting;
        }
        if !self.validate_all() {
            self.view
                .notify("Please correct the errors in the form", Severity::Error);
            return SubmissionStart::Invalid;
        }
        self.phase = SubmissionPhase::Submitting;
        self.view.set_busy(true);
        SubmissionStart::Started
    }

    /// Wait out the simulated latency, then complete
    pub async fn finish_submission(&mut self) -> RegistrationRecord {
        tokio::time::sleep(self.settings.submit_delay).await;
        self.complete_submission()
    }

    /// Full submission flow; `None` when it could not start
    #[allow(dead_code)]
    pub async fn submit(&mut self) -> Option<RegistrationRecord> {
        match self.begin_submission() {
            SubmissionStart::Started => Some(self.finish_submission().await),
            SubmissionStart::Invalid | SubmissionStart::AlreadySubmitting => None,
        }
    }

    /// Synthesize and store the record, then switch to the confirmation
    pub fn complete_submission(&mut self) -> RegistrationRecord {
        let now = self.clock.now();
        let stored_id = self.persistence.load_registration().map(|r| r.id);
        let record = RegistrationRecord {
            id: self.ids.generate(now.year(), stored_id.as_deref()),
            date: format_registration_date(&now),
            data: self.collect_data(),
        };
        self.persistence.save_registration(&record);
        tracing::info!("Registration {} accepted", record.id);

        self.view.show_section(Section::Confirmation);
        self.view
            .show_confirmation(&record, Summary::from_data(&record.data));
        self.view.scroll_to_top();
        self.view.set_busy(false);
        self.view
            .notify("Registration completed successfully!", Severity::Success);

        self.phase = SubmissionPhase::Confirmed;
        self.last_record = Some(record.clone());
        record
    }

    // ------------------------------------------------------------------
    // Reset / new / edit
    // ------------------------------------------------------------------

    fn clear_form(&mut self) {
        for spec in FIELDS {
            let empty = if spec.is_file() {
                FieldValue::File(None)
            } else {
                FieldValue::Text(String::new())
            };
            self.view.set_field_value(spec.name, empty);
            self.view.set_field_status(spec.name, FieldStatus::default());
        }
        self.validation_state.clear();
        self.view
            .set_field_options(names::COURSE, courses_for_year(""));
        self.persistence.clear_draft();
        self.update_progress();
    }

    /// Clear everything after the user confirmed
    pub fn reset(&mut self) {
        self.clear_form();
        self.view.notify("Form has been reset", Severity::Info);
    }

    /// Clear everything and return to the form
    pub fn new_registration(&mut self) {
        self.clear_form();
        self.phase = SubmissionPhase::Editing;
        self.view.show_section(Section::Form);
        self.view.scroll_to_top();
        self.view
            .notify("Ready for new registration", Severity::Success);
    }

    /// Reload the last registration into the form for editing
    pub fn edit_registration(&mut self) {
        match self.persistence.load_registration() {
            Some(record) => self.apply_data(&record.data),
            None => tracing::warn!("No stored registration to edit"),
        }
        self.phase = SubmissionPhase::Editing;
        self.view.show_section(Section::Form);
        self.view.scroll_to_top();
        self.view
            .notify("You can now edit the registration", Severity::Info);
    }

    /// Write the printable summary of the last registration to disk
    pub fn export_summary(&mut self) -> Option<PathBuf> {
        let record = self.last_record.as_ref()?;
        let Some(dir) = self.settings.export_dir.clone() else {
            self.view
                .notify("No export directory available", Severity::Error);
            return None;
        };

        let text = Summary::from_data(&record.data).to_plain_text(&record.id, &record.date);
        let path = dir.join(format!("registration-{}.txt", record.id));
        let written = std::fs::create_dir_all(&dir).and_then(|_| std::fs::write(&path, text));

        match written {
            Ok(()) => {
                self.view.notify(
                    &format!("Summary saved to {}", path.display()),
                    Severity::Success,
                );
                Some(path)
            }
            Err(e) => {
                tracing::error!("Error exporting summary: {e}");
                self.view
                    .notify("Could not save the summary", Severity::Error);
                None
            }
        }
    }
}
