//! Application state and core logic

use crate::config::{EnrollConfig, DATA_DIR_ENV};
use crate::controller::{ControllerSettings, FormController, FormView, SubmissionStart};
use crate::platform::SHORTCUT_MODIFIER;
use crate::state::{
    FieldValue, Form, FormButton, PendingReset, RegistrationForm, Section, Severity, SubmissionPhase,
};
use crate::storage::{FileStore, KeyValueStore, MemoryStore};
use crate::validation::pop_phone_digit;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Store handed to the controller: on disk when a data directory exists
pub type BoxedStore = Box<dyn KeyValueStore + Send>;

/// The controller as wired into the terminal
pub type Controller = FormController<RegistrationForm, BoxedStore>;

/// Window for the second Ctrl+C press
const DOUBLE_CTRL_C: Duration = Duration::from_millis(800);

/// Main application struct
pub struct App {
    pub controller: Controller,
    /// Reset confirmation dialog, when open
    pub pending_reset: Option<PendingReset>,
    /// Whether the app should quit
    quit: bool,
    /// A submission passed validation and awaits completion
    submission_pending: bool,
    /// Timestamp of last Ctrl+C press for double-tap quit
    pub last_ctrl_c: Option<Instant>,
    last_autosave: Instant,
    autosave_interval: Duration,
    toast_duration: Duration,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &EnrollConfig) -> Self {
        let (store, data_dir) = open_store(config);
        let settings = ControllerSettings {
            submit_delay: config.submit_delay(),
            export_dir: data_dir,
        };
        let mut controller = FormController::new(RegistrationForm::new(), store, settings);
        controller.initialize();
        Self::with_controller(controller, config)
    }

    /// Wrap an already initialized controller
    pub fn with_controller(controller: Controller, config: &EnrollConfig) -> Self {
        Self {
            controller,
            pending_reset: None,
            quit: false,
            submission_pending: false,
            last_ctrl_c: None,
            last_autosave: Instant::now(),
            autosave_interval: config.autosave_interval(),
            toast_duration: config.toast_duration(),
        }
    }

    pub fn form(&self) -> &RegistrationForm {
        self.controller.view()
    }

    fn form_mut(&mut self) -> &mut RegistrationForm {
        self.controller.view_mut()
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn submission_pending(&self) -> bool {
        self.submission_pending
    }

    /// Complete a started submission after the simulated latency
    pub async fn finish_submission(&mut self) {
        if !self.submission_pending {
            return;
        }
        self.submission_pending = false;
        self.controller.finish_submission().await;
    }

    /// Periodic housekeeping: toast expiry and autosave
    pub fn tick(&mut self) {
        let lifetime = self.toast_duration;
        self.form_mut().expire_toast(lifetime);

        if self.last_autosave.elapsed() >= self.autosave_interval {
            self.last_autosave = Instant::now();
            self.controller.save_draft();
        }
    }

    /// The terminal lost focus; treat it like the page being hidden
    pub fn on_focus_lost(&mut self) {
        self.controller.save_draft();
    }

    /// Last chance to persist before the process exits
    pub fn on_exit(&mut self) {
        self.controller.save_draft();
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.handle_ctrl_c();
            return Ok(());
        }
        if key.code == KeyCode::Char('q') && key.modifiers.contains(SHORTCUT_MODIFIER) {
            self.quit = true;
            return Ok(());
        }

        // Reset dialog is modal
        if self.pending_reset.is_some() {
            self.handle_reset_dialog_key(key);
            return Ok(());
        }

        // Input is disabled while a submission is in flight
        if self.controller.phase() == SubmissionPhase::Submitting {
            return Ok(());
        }

        match self.form().section {
            Section::Form => self.handle_form_key(key),
            Section::Confirmation => self.handle_confirmation_key(key)?,
        }
        Ok(())
    }

    fn handle_ctrl_c(&mut self) {
        let now = Instant::now();
        match self.last_ctrl_c {
            Some(prev) if now.duration_since(prev) <= DOUBLE_CTRL_C => self.quit = true,
            _ => {
                self.last_ctrl_c = Some(now);
                self.form_mut()
                    .notify("Press Ctrl+C again to quit", Severity::Info);
            }
        }
    }

    fn handle_reset_dialog_key(&mut self, key: KeyEvent) {
        let Some(pending) = self.pending_reset.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Up
            | KeyCode::Down
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::Char('j')
            | KeyCode::Char('k') => pending.toggle(),
            KeyCode::Char('y') => {
                self.pending_reset = None;
                self.controller.reset();
            }
            KeyCode::Enter => {
                let confirmed = pending.selected_option;
                self.pending_reset = None;
                if confirmed {
                    self.controller.reset();
                }
            }
            KeyCode::Esc | KeyCode::Char('n') => self.pending_reset = None,
            _ => {}
        }
    }

    /// Handle keys on the registration form
    fn handle_form_key(&mut self, key: KeyEvent) {
        let on_buttons = self.form().is_buttons_row_active();

        match key.code {
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if key.modifiers.contains(SHORTCUT_MODIFIER) => {
                self.start_submission();
            }
            KeyCode::Char('r') if key.modifiers.contains(SHORTCUT_MODIFIER) => {
                self.pending_reset = Some(PendingReset::default());
            }
            KeyCode::Tab | KeyCode::Down => self.move_focus(true),
            KeyCode::BackTab | KeyCode::Up => self.move_focus(false),
            KeyCode::PageDown => self.form_mut().scroll_form_down(),
            KeyCode::PageUp => self.form_mut().scroll_up(),
            // Buttons row
            KeyCode::Left if on_buttons => self.form_mut().prev_button(),
            KeyCode::Right if on_buttons => self.form_mut().next_button(),
            KeyCode::Enter if on_buttons => match self.form().selected_form_button() {
                FormButton::Register => self.start_submission(),
                FormButton::Reset => self.pending_reset = Some(PendingReset::default()),
            },
            _ if on_buttons => {}
            _ => self.handle_field_key(key),
        }
    }

    /// Editing keys for the focused field
    fn handle_field_key(&mut self, key: KeyEvent) {
        let Some(field) = self.form().active().cloned() else {
            return;
        };
        let name = field.name;

        if field.is_select() {
            let forward = match key.code {
                KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter => true,
                KeyCode::Left => false,
                _ => return,
            };
            if let Some(option) = field.cycled_option(forward) {
                self.controller.handle_input(name, FieldValue::Text(option));
            }
            return;
        }

        if field.is_file() {
            match key.code {
                KeyCode::Enter => {
                    let path = field.path_input.clone();
                    self.controller.attach_file(name, &path);
                }
                KeyCode::Delete => self.controller.attach_file(name, ""),
                KeyCode::Backspace => {
                    if let Some(next) = field.without_last_char() {
                        self.form_mut().set_path_input(name, next);
                    }
                }
                KeyCode::Char(c) if !has_control(&key) => {
                    if let Some(next) = field.with_char(c) {
                        self.form_mut().set_path_input(name, next);
                    }
                }
                _ => {}
            }
            return;
        }

        let is_phone = crate::state::field_spec(name).is_some_and(|s| s.is_phone());
        let next = match key.code {
            KeyCode::Char(c) if !has_control(&key) => field.with_char(c),
            KeyCode::Backspace if is_phone => Some(pop_phone_digit(field.as_text())),
            KeyCode::Backspace => field.without_last_char(),
            KeyCode::Enter if field.is_multiline() => field.with_char('\n'),
            KeyCode::Enter => {
                self.move_focus(true);
                None
            }
            _ => None,
        };
        if let Some(value) = next {
            self.controller.handle_input(name, FieldValue::Text(value));
        }
    }

    /// Move focus, validating the field being left
    fn move_focus(&mut self, forward: bool) {
        if let Some(name) = self.form().active().map(|f| f.name) {
            self.controller.handle_blur(name);
        }
        // The view follows focus again
        self.form_mut().scroll_offset = 0;
        if forward {
            self.form_mut().next_field();
        } else {
            self.form_mut().prev_field();
        }
    }

    fn start_submission(&mut self) {
        if self.controller.begin_submission() == SubmissionStart::Started {
            self.submission_pending = true;
        }
    }

    /// Handle keys on the confirmation screen
    fn handle_confirmation_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('n') => self.controller.new_registration(),
            KeyCode::Char('e') => self.controller.edit_registration(),
            KeyCode::Char('p') => {
                self.controller.export_summary();
            }
            KeyCode::Char('y') => self.copy_registration_id(),
            KeyCode::Char('j') | KeyCode::Down => self.form_mut().scroll_down(),
            KeyCode::Char('k') | KeyCode::Up => self.form_mut().scroll_up(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
        Ok(())
    }

    fn copy_registration_id(&mut self) {
        let Some(id) = self.controller.last_record().map(|r| r.id.clone()) else {
            return;
        };
        match self.copy_to_clipboard(&id) {
            Ok(()) => self
                .form_mut()
                .notify(&format!("Copied {id} to clipboard"), Severity::Info),
            Err(e) => {
                tracing::warn!("Clipboard unavailable: {e}");
                self.form_mut()
                    .notify("Clipboard is not available", Severity::Error);
            }
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

fn has_control(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) || key.modifiers.contains(KeyModifiers::ALT)
}

/// Open the file store, or fall back to memory when no directory resolves
fn open_store(config: &EnrollConfig) -> (BoxedStore, Option<PathBuf>) {
    let dir = match config.resolve_data_dir(std::env::var(DATA_DIR_ENV).ok()) {
        Some(dir) => Ok(dir),
        None => FileStore::default_dir(),
    };
    match dir {
        Ok(dir) => {
            let store = FileStore::new(&dir);
            tracing::info!("Storing drafts in {}", store.dir().display());
            (Box::new(store), Some(dir))
        }
        Err(e) => {
            tracing::warn!("{e}; drafts will only live in memory");
            (Box::new(MemoryStore::new()), None)
        }
    }
}
