//! Application state and core logic

use crate::config::RegistrationConfig;
use crate::state::{Form, Locale, RegistrationForm, RegistrationSchema, SubmitOutcome};
use crate::submit::SubmitHandler;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// The registration form session
    pub form: RegistrationForm,
    /// Interface language
    pub locale: Locale,
    /// Hide password characters when rendering
    pub mask_passwords: bool,
    /// Receives validated registrations
    handler: Box<dyn SubmitHandler>,
    /// Whether the app should quit
    quit: bool,
    /// Last submit failure shown in the status bar
    pub error_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &RegistrationConfig, handler: Box<dyn SubmitHandler>) -> Self {
        let locale = config.locale();
        let form = RegistrationForm::new(RegistrationSchema::new(locale), config.revalidate_mode());

        Self {
            form,
            locale,
            mask_passwords: config.mask_passwords(),
            handler,
            quit: false,
            error_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key press
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let on_select = self.form.active_field().is_some_and(|f| f.is_select());
        let on_text = self.form.active_field().is_some_and(|f| !f.is_select());

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.form.next_control(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_control(),
            // Enter submits from anywhere, like a browser form
            KeyCode::Enter => self.submit().await,
            KeyCode::Char('s') if ctrl => self.submit().await,
            KeyCode::Char('u') if ctrl && on_text => {
                self.form.clear_field();
                self.clear_error();
            }
            KeyCode::Left if on_select => {
                self.form.prev_option();
                self.clear_error();
            }
            KeyCode::Right | KeyCode::Char(' ') if on_select => {
                self.form.next_option();
                self.clear_error();
            }
            KeyCode::Char(c) if on_text && !ctrl => {
                self.form.input_char(c);
                self.clear_error();
            }
            KeyCode::Backspace if on_text => {
                self.form.backspace();
                self.clear_error();
            }
            _ => {}
        }
        Ok(())
    }

    /// Validate the form and hand valid data to the submit handler
    async fn submit(&mut self) {
        self.clear_error();

        let registration = match self.form.handle_submit() {
            SubmitOutcome::Valid(registration) => registration,
            SubmitOutcome::Invalid(errors) => {
                let fields: Vec<&str> = errors.fields().map(|f| f.path()).collect();
                tracing::debug!("Submit blocked, invalid fields: {}", fields.join(", "));
                return;
            }
        };

        match self.handler.submit(&registration).await {
            Ok(()) => {
                self.form.mark_submitted();
                tracing::debug!("Accepted on submit attempt {}", self.form.submit_count());
            }
            Err(err) => {
                tracing::warn!("Submit handler failed: {err:#}");
                self.error_message = Some(format!("Submit failed: {err}"));
            }
        }
    }

    fn clear_error(&mut self) {
        self.error_message = None;
    }
}
