#![forbid(unsafe_code)]

//! Sign-in screen: branding panel plus the credential form.
//!
//! Submission simulates the authentication call with a short background
//! delay. Each submission bumps an epoch; the completion message carries it
//! back so a stale result (after a cancel or re-submit) can be discarded.

use std::time::Duration;

use ftui_core::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ftui_core::geometry::Rect;
use ftui_layout::{Constraint, Flex};
use ftui_render::frame::Frame;
use ftui_runtime::Cmd;
use ftui_style::Style;
use ftui_widgets::Widget;
use ftui_widgets::block::{Alignment, Block};
use ftui_widgets::borders::{BorderType, Borders};
use ftui_widgets::input::TextInput;
use ftui_widgets::paragraph::Paragraph;

use super::{HelpEntry, Screen};
use crate::app::AppMsg;
use crate::model::entities::Session;
use crate::theme;

/// Simulated latency of the authentication call.
pub const LOGIN_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Email,
    Password,
}

pub struct LoginScreen {
    email: TextInput,
    password: TextInput,
    focus: Field,
    error: Option<String>,
    /// True while the simulated sign-in call is in flight.
    pub submitting: bool,
    /// Bumped on every submission; completions with an older epoch are stale.
    pub epoch: u64,
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginScreen {
    pub fn new() -> Self {
        let email = TextInput::new()
            .with_placeholder("admin@ecobot.com")
            .with_style(Style::new().fg(theme::fg::PRIMARY))
            .with_focused(true);
        let password = TextInput::new()
            .with_placeholder("Enter your password")
            .with_mask('*')
            .with_style(Style::new().fg(theme::fg::PRIMARY))
            .with_focused(false);
        Self {
            email,
            password,
            focus: Field::Email,
            error: None,
            submitting: false,
            epoch: 0,
        }
    }

    /// Clear the form after a successful sign-in or sign-out.
    pub fn reset(&mut self) {
        self.email.clear();
        self.password.clear();
        self.error = None;
        self.submitting = false;
        self.set_focus(Field::Email);
    }

    /// Test/automation hook: fill both fields directly.
    pub fn set_credentials(&mut self, email: &str, password: &str) {
        self.email.set_value(email);
        self.password.set_value(password);
    }

    fn set_focus(&mut self, field: Field) {
        self.focus = field;
        self.email.set_focused(field == Field::Email);
        self.password.set_focused(field == Field::Password);
    }

    fn toggle_focus(&mut self) {
        let next = match self.focus {
            Field::Email => Field::Password,
            Field::Password => Field::Email,
        };
        self.set_focus(next);
    }

    fn submit(&mut self) -> Cmd<AppMsg> {
        let email = self.email.value().trim().to_string();
        let password = self.password.value();
        if email.is_empty() || password.is_empty() {
            self.error = Some("Email and password are required".into());
            return Cmd::none();
        }

        self.error = None;
        self.submitting = true;
        self.epoch += 1;
        let epoch = self.epoch;
        tracing::info!(target: "ecobot.auth", %email, epoch, "sign-in submitted");
        Cmd::task(move || {
            std::thread::sleep(LOGIN_DELAY);
            AppMsg::LoginCompleted {
                epoch,
                session: Session::new(email),
            }
        })
    }

    fn render_branding(&self, frame: &mut Frame, area: Rect) {
        let block = Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(theme::content_border());
        let inner = block.inner(area);
        block.render(area, frame);

        let text = format!(
            "{} EcoBot\nAutonomous Waste Management\n\n\
             {} Secure & Reliable Operations\n\
             {} Eco-Friendly Solutions\n\
             {} AI-Powered Efficiency",
            theme::icons::ROBOT,
            theme::icons::SHIELD,
            theme::icons::LEAF,
            theme::icons::ROBOT,
        );
        Paragraph::new(text).style(theme::body()).render(inner, frame);
    }

    fn render_form(&self, frame: &mut Frame, area: Rect) {
        let block = Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title("Welcome Back")
            .title_alignment(Alignment::Center)
            .style(theme::panel_border_style(true, theme::screen_accent::LOGIN));
        let inner = block.inner(area);
        block.render(area, frame);

        let rows = Flex::vertical()
            .constraints([
                Constraint::Fixed(1), // subtitle
                Constraint::Fixed(1),
                Constraint::Fixed(1), // email label
                Constraint::Fixed(1), // email input
                Constraint::Fixed(1),
                Constraint::Fixed(1), // password label
                Constraint::Fixed(1), // password input
                Constraint::Fixed(1),
                Constraint::Fixed(1), // submit / status
                Constraint::Fixed(1), // error
                Constraint::Min(0),   // hint
            ])
            .split(inner);

        Paragraph::new("Sign in to your EcoBot account")
            .style(theme::muted())
            .render(rows[0], frame);

        let label_style = |focused: bool| {
            if focused {
                Style::new().fg(theme::screen_accent::LOGIN)
            } else {
                theme::muted()
            }
        };

        Paragraph::new("Email Address")
            .style(label_style(self.focus == Field::Email))
            .render(rows[2], frame);
        Widget::render(&self.email, rows[3], frame);

        Paragraph::new("Password")
            .style(label_style(self.focus == Field::Password))
            .render(rows[5], frame);
        Widget::render(&self.password, rows[6], frame);

        let (submit_text, submit_style) = if self.submitting {
            ("Signing In...", theme::warning())
        } else {
            ("[ Enter ] Sign In", theme::success())
        };
        Paragraph::new(submit_text)
            .style(submit_style)
            .render(rows[8], frame);

        if let Some(error) = &self.error {
            Paragraph::new(error.as_str())
                .style(theme::error_style())
                .render(rows[9], frame);
        }

        Paragraph::new("Demo credentials: admin@ecobot.com / demo123")
            .style(theme::muted())
            .render(rows[10], frame);
    }
}

impl Screen for LoginScreen {
    type Message = AppMsg;

    fn update(&mut self, event: &Event) -> Cmd<AppMsg> {
        if self.submitting {
            // The form is locked until the in-flight call resolves.
            return Cmd::none();
        }

        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event
        {
            match code {
                KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                    self.toggle_focus();
                    return Cmd::none();
                }
                KeyCode::Enter => return self.submit(),
                _ => {}
            }
        }

        match self.focus {
            Field::Email => {
                self.email.handle_event(event);
            }
            Field::Password => {
                self.password.handle_event(event);
            }
        }
        Cmd::none()
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        // Branding on the left when there is room, form on the right.
        if area.width >= 80 {
            let cols = Flex::horizontal()
                .constraints([Constraint::Percentage(45.0), Constraint::Percentage(55.0)])
                .split(area);
            self.render_branding(frame, cols[0]);
            self.render_form(frame, cols[1]);
        } else {
            self.render_form(frame, area);
        }
    }

    fn keybindings(&self) -> Vec<HelpEntry> {
        vec![
            HelpEntry {
                key: "Tab/Up/Down",
                action: "Switch field",
            },
            HelpEntry {
                key: "Enter",
                action: "Sign in",
            },
        ]
    }

    fn title(&self) -> &'static str {
        "Sign In"
    }

    fn tab_label(&self) -> &'static str {
        "Login"
    }

    fn wants_text_input(&self) -> bool {
        !self.submitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ftui_render::grapheme_pool::GraphemePool;

    #[test]
    fn empty_credentials_are_rejected_before_any_async_work() {
        let mut screen = LoginScreen::new();
        let cmd = screen.submit();
        assert!(matches!(cmd, Cmd::None));
        assert!(!screen.submitting);
        assert!(screen.error.is_some());
        assert_eq!(screen.epoch, 0);
    }

    #[test]
    fn valid_credentials_start_submission_and_bump_epoch() {
        let mut screen = LoginScreen::new();
        screen.set_credentials("admin@ecobot.com", "demo123");
        let cmd = screen.submit();
        assert!(matches!(cmd, Cmd::Task(..)));
        assert!(screen.submitting);
        assert_eq!(screen.epoch, 1);
        assert!(screen.error.is_none());
    }

    #[test]
    fn input_is_locked_while_submitting() {
        let mut screen = LoginScreen::new();
        screen.set_credentials("admin@ecobot.com", "demo123");
        let _ = screen.submit();
        let before = screen.email.value().to_string();
        let _ = screen.update(&Event::Key(KeyEvent {
            code: KeyCode::Char('x'),
            modifiers: ftui_core::event::Modifiers::NONE,
            kind: KeyEventKind::Press,
        }));
        assert_eq!(screen.email.value(), before);
    }

    #[test]
    fn reset_clears_form_state() {
        let mut screen = LoginScreen::new();
        screen.set_credentials("a@b.c", "pw");
        let _ = screen.submit();
        screen.reset();
        assert!(screen.email.value().is_empty());
        assert!(screen.password.value().is_empty());
        assert!(!screen.submitting);
    }

    #[test]
    fn renders_without_panic() {
        let screen = LoginScreen::new();
        let mut pool = GraphemePool::new();
        let mut frame = Frame::new(120, 40, &mut pool);
        screen.view(&mut frame, Rect::new(0, 0, 120, 40));

        let mut narrow = GraphemePool::new();
        let mut frame = Frame::new(60, 20, &mut narrow);
        screen.view(&mut frame, Rect::new(0, 0, 60, 20));
    }
}
