//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (content_area, status_area) = layout::create_layout(frame.area());

    forms::draw_registration(frame, content_area, app);
    layout::draw_status_bar(frame, status_area, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RegistrationConfig;
    use crate::state::{FieldName, Locale, SubmitOutcome};
    use crate::submit::MockSubmitHandler;
    use ratatui::{backend::TestBackend, Terminal};

    fn app(config: RegistrationConfig) -> App {
        App::new(&config, Box::new(MockSubmitHandler::new()))
    }

    /// Render one frame and return the screen as text
    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_heading_labels_and_button() {
        let screen = render(&app(RegistrationConfig::default()));
        assert!(screen.contains("Registration Form"));
        for label in ["First name", "Last name", "Password", "Confirm password", "Gender"] {
            assert!(screen.contains(label), "missing label {label}");
        }
        assert!(screen.contains("Register"));
        assert!(screen.contains("Male"));
    }

    #[test]
    fn test_pristine_form_shows_no_errors() {
        let screen = render(&app(RegistrationConfig::default()));
        assert!(!screen.contains("must be at least"));
    }

    #[test]
    fn test_submit_attempt_shows_inline_errors() {
        let mut app = app(RegistrationConfig::default());
        app.form.handle_submit();
        let screen = render(&app);
        assert!(screen.contains("First name must be at least 2 characters"));
        assert!(screen.contains("Last name must be at least 2 characters"));
        assert!(screen.contains("Password must be at least 4 characters"));
    }

    #[test]
    fn test_values_are_rendered() {
        let mut app = app(RegistrationConfig::default());
        app.form.set_value(FieldName::FirstName, "Ali");
        app.form.set_value(FieldName::Password, "s3cret");
        let screen = render(&app);
        assert!(screen.contains("Ali"));
        assert!(screen.contains("s3cret"));
    }

    #[test]
    fn test_masked_passwords_hide_characters() {
        let mut app = app(RegistrationConfig {
            mask_passwords: Some(true),
            ..Default::default()
        });
        app.form.set_value(FieldName::Password, "s3cret");
        let screen = render(&app);
        assert!(!screen.contains("s3cret"));
        assert!(screen.contains("••••••"));
    }

    fn submitted_app(config: RegistrationConfig) -> App {
        let mut app = app(config);
        for (field, value) in [
            (FieldName::FirstName, "Ali"),
            (FieldName::LastName, "Rezai"),
            (FieldName::Password, "1234"),
            (FieldName::PasswordConfirm, "1234"),
        ] {
            app.form.set_value(field, value);
        }
        assert!(matches!(app.form.handle_submit(), SubmitOutcome::Valid(_)));
        app.form.mark_submitted();
        app
    }

    #[test]
    fn test_submitted_phase_shows_message_in_status_bar() {
        let app = submitted_app(RegistrationConfig::default());
        let status = render_rows(&app).pop().unwrap();
        assert!(status.starts_with(" Registered! |"), "status was {status:?}");
    }

    #[test]
    fn test_submitted_message_follows_locale_and_clears_on_edit() {
        let mut app = submitted_app(RegistrationConfig {
            locale: Some(Locale::Fa),
            ..Default::default()
        });
        assert!(render(&app).contains("ثبت نام انجام شد"));

        app.form.set_value(FieldName::FirstName, "Reza");
        assert!(!render(&app).contains("ثبت نام انجام شد"));
    }

    #[test]
    fn test_handler_error_replaces_success_message() {
        let mut app = submitted_app(RegistrationConfig::default());
        app.error_message = Some("Submit failed: offline".to_string());
        let screen = render(&app);
        assert!(screen.contains("Submit failed: offline"));
        assert!(!screen.contains("Registered!"));
    }

    /// Render one frame and return each screen row as text
    fn render_rows(app: &App) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..24)
            .map(|y| (0..80).map(|x| buffer[(x, y)].symbol()).collect())
            .collect()
    }

    fn row_containing<'a>(rows: &'a [String], text: &str) -> &'a str {
        rows.iter()
            .find(|row| row.contains(text))
            .unwrap_or_else(|| panic!("no row contains {text:?}"))
    }

    #[test]
    fn test_persian_names_align_right_and_passwords_left() {
        let mut app = app(RegistrationConfig {
            locale: Some(Locale::Fa),
            ..Default::default()
        });
        app.form.set_value(FieldName::LastName, "رضایی");
        app.form.set_value(FieldName::Password, "abcd");
        let rows = render_rows(&app);

        // Value flush against the right border of its box
        assert!(row_containing(&rows, "رضایی").contains("رضایی│"));
        assert!(!row_containing(&rows, "رضایی").contains("│رضایی"));
        // Label ends at the top-right corner
        assert!(row_containing(&rows, "نام خانوادگی").contains("نام خانوادگی ┐"));

        // Password value starts at the left border
        assert!(row_containing(&rows, "abcd").contains("│abcd"));
        assert!(!row_containing(&rows, "abcd").contains("abcd│"));
    }

    #[test]
    fn test_english_names_align_left() {
        let mut app = app(RegistrationConfig::default());
        app.form.set_value(FieldName::LastName, "Rezai");
        let rows = render_rows(&app);
        assert!(row_containing(&rows, "Rezai").contains("│Rezai"));
        assert!(row_containing(&rows, "Last name").contains("┌ Last name "));
    }

    #[test]
    fn test_fits_small_terminal() {
        let app = app(RegistrationConfig {
            locale: Some(Locale::Fa),
            ..Default::default()
        });
        let mut terminal = Terminal::new(TestBackend::new(30, 10)).unwrap();
        assert!(terminal.draw(|frame| draw(frame, &app)).is_ok());
    }
}
