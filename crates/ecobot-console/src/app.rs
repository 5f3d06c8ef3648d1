#![forbid(unsafe_code)]

//! Top-level application model, message routing, and screen navigation.
//!
//! [`AppModel`] implements the Elm architecture via [`Model`]: all state
//! lives here, messages drive transitions, and `view()` is a pure function
//! of state. It owns the session guard (everything except the login screen
//! is unreachable while signed out) and discards stale completions from
//! simulated backend calls.

use std::time::Duration;

use ftui_core::event::{Event, KeyCode, KeyEvent, KeyEventKind, Modifiers};
use ftui_core::geometry::Rect;
use ftui_layout::{Constraint, Flex};
use ftui_render::cell::Cell as RenderCell;
use ftui_render::frame::Frame;
use ftui_runtime::{Cmd, Every, Model, Subscription};
use ftui_widgets::Widget;
use ftui_widgets::block::{Alignment, Block};
use ftui_widgets::borders::{BorderType, Borders};

use crate::model::entities::Session;
use crate::screens::{self, HelpEntry, Screen};
use crate::theme;

// ---------------------------------------------------------------------------
// ScreenId
// ---------------------------------------------------------------------------

/// Identifies which console screen is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    /// Sign-in gate. Not part of the tab bar.
    Login,
    /// Operator dashboard with stats and quick actions.
    Home,
    /// Map picker for pinning cleanup locations.
    Locations,
    /// Camera viewfinder placeholder.
    Capture,
    /// Cleanup task list with robot dispatch controls.
    Tasks,
    /// Fleet overview.
    Robots,
    /// Review submission and analytics.
    Reviews,
    /// Notification feed and preferences.
    Notifications,
    /// Streaks, activity calendar, achievements.
    Streaks,
}

impl ScreenId {
    /// Post-login screens in tab order. Login is reached only through the
    /// session guard, never through navigation.
    pub const ALL: [ScreenId; 8] = [
        Self::Home,
        Self::Locations,
        Self::Capture,
        Self::Tasks,
        Self::Robots,
        Self::Reviews,
        Self::Notifications,
        Self::Streaks,
    ];

    /// 0-based index in the ALL array.
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&s| s == self).unwrap_or(0)
    }

    /// Next tab (wraps around).
    pub fn next(self) -> Self {
        let i = (self.index() + 1) % Self::ALL.len();
        Self::ALL[i]
    }

    /// Previous tab (wraps around).
    pub fn prev(self) -> Self {
        let i = (self.index() + Self::ALL.len() - 1) % Self::ALL.len();
        Self::ALL[i]
    }

    /// Title for the content border and status bar.
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Sign In",
            Self::Home => "Dashboard",
            Self::Locations => "Pin Locations",
            Self::Capture => "Capture",
            Self::Tasks => "Cleanup Tasks",
            Self::Robots => "Robot Fleet",
            Self::Reviews => "Reviews",
            Self::Notifications => "Notifications",
            Self::Streaks => "Streaks & Achievements",
        }
    }

    /// Short label for the tab bar.
    pub fn tab_label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Home => "Home",
            Self::Locations => "Pins",
            Self::Capture => "Capture",
            Self::Tasks => "Tasks",
            Self::Robots => "Robots",
            Self::Reviews => "Reviews",
            Self::Notifications => "Alerts",
            Self::Streaks => "Streaks",
        }
    }

    /// Map a number key to a tab: '1'..='8'.
    pub fn from_number_key(ch: char) -> Option<Self> {
        let idx = match ch {
            '1'..='8' => (ch as usize) - ('1' as usize),
            _ => return None,
        };
        Self::ALL.get(idx).copied()
    }
}

// ---------------------------------------------------------------------------
// AppMsg
// ---------------------------------------------------------------------------

/// Top-level application message.
#[derive(Debug)]
pub enum AppMsg {
    /// A raw terminal event forwarded to the active screen.
    ScreenEvent(Event),
    /// Switch to a post-login screen.
    Navigate(ScreenId),
    /// Jump to the fleet screen with a robot focused.
    OpenRobot {
        robot_id: String,
    },
    /// Simulated sign-in call finished.
    LoginCompleted {
        /// Login attempt this result belongs to. Stale results are dropped.
        epoch: u64,
        session: Session,
    },
    /// Simulated review submission finished.
    ReviewSubmitted {
        epoch: u64,
        task_id: String,
        rating: u8,
        comment: String,
        is_public: bool,
    },
    /// Toggle the help overlay.
    ToggleHelp,
    /// Cycle the active color theme.
    CycleTheme,
    /// Periodic tick for animations (100ms cadence).
    Tick,
    /// Terminal resize.
    Resize {
        width: u16,
        height: u16,
    },
    /// Quit the application.
    Quit,
}

impl From<Event> for AppMsg {
    fn from(event: Event) -> Self {
        if let Event::Resize { width, height } = event {
            return Self::Resize { width, height };
        }

        Self::ScreenEvent(event)
    }
}

// ---------------------------------------------------------------------------
// ScreenStates
// ---------------------------------------------------------------------------

/// Holds the state for every screen.
pub struct ScreenStates {
    pub login: screens::login::LoginScreen,
    pub home: screens::home::HomeScreen,
    pub locations: screens::locations::LocationsScreen,
    pub capture: screens::capture::CaptureScreen,
    pub tasks: screens::tasks::TasksScreen,
    pub robots: screens::robots::RobotsScreen,
    pub reviews: screens::reviews::ReviewsScreen,
    pub notifications: screens::notifications::NotificationsScreen,
    pub streaks: screens::streaks::StreaksScreen,
}

impl ScreenStates {
    fn new(seed: u64) -> Self {
        Self {
            login: screens::login::LoginScreen::new(),
            home: screens::home::HomeScreen::new(),
            locations: screens::locations::LocationsScreen::new(),
            capture: screens::capture::CaptureScreen::new(),
            tasks: screens::tasks::TasksScreen::new(),
            robots: screens::robots::RobotsScreen::new(),
            reviews: screens::reviews::ReviewsScreen::new(),
            notifications: screens::notifications::NotificationsScreen::new(),
            streaks: screens::streaks::StreaksScreen::new(seed),
        }
    }

    /// Forward an event to the screen identified by `id`.
    fn update(&mut self, id: ScreenId, event: &Event) -> Cmd<AppMsg> {
        match id {
            ScreenId::Login => self.login.update(event),
            ScreenId::Home => self.home.update(event),
            ScreenId::Locations => self.locations.update(event),
            ScreenId::Capture => self.capture.update(event),
            ScreenId::Tasks => self.tasks.update(event),
            ScreenId::Robots => self.robots.update(event),
            ScreenId::Reviews => self.reviews.update(event),
            ScreenId::Notifications => self.notifications.update(event),
            ScreenId::Streaks => self.streaks.update(event),
        }
    }

    /// Forward a tick to the active screen only.
    fn tick(&mut self, active: ScreenId, tick_count: u64) {
        match active {
            ScreenId::Login => self.login.tick(tick_count),
            ScreenId::Home => self.home.tick(tick_count),
            ScreenId::Locations => self.locations.tick(tick_count),
            ScreenId::Capture => self.capture.tick(tick_count),
            ScreenId::Tasks => self.tasks.tick(tick_count),
            ScreenId::Robots => self.robots.tick(tick_count),
            ScreenId::Reviews => self.reviews.tick(tick_count),
            ScreenId::Notifications => self.notifications.tick(tick_count),
            ScreenId::Streaks => self.streaks.tick(tick_count),
        }
    }

    /// Render the screen identified by `id` into the given area.
    fn view(&self, id: ScreenId, frame: &mut Frame, area: Rect) {
        match id {
            ScreenId::Login => self.login.view(frame, area),
            ScreenId::Home => self.home.view(frame, area),
            ScreenId::Locations => self.locations.view(frame, area),
            ScreenId::Capture => self.capture.view(frame, area),
            ScreenId::Tasks => self.tasks.view(frame, area),
            ScreenId::Robots => self.robots.view(frame, area),
            ScreenId::Reviews => self.reviews.view(frame, area),
            ScreenId::Notifications => self.notifications.view(frame, area),
            ScreenId::Streaks => self.streaks.view(frame, area),
        }
    }

    fn keybindings(&self, id: ScreenId) -> Vec<HelpEntry> {
        match id {
            ScreenId::Login => self.login.keybindings(),
            ScreenId::Home => self.home.keybindings(),
            ScreenId::Locations => self.locations.keybindings(),
            ScreenId::Capture => self.capture.keybindings(),
            ScreenId::Tasks => self.tasks.keybindings(),
            ScreenId::Robots => self.robots.keybindings(),
            ScreenId::Reviews => self.reviews.keybindings(),
            ScreenId::Notifications => self.notifications.keybindings(),
            ScreenId::Streaks => self.streaks.keybindings(),
        }
    }

    fn wants_text_input(&self, id: ScreenId) -> bool {
        match id {
            ScreenId::Login => self.login.wants_text_input(),
            ScreenId::Home => self.home.wants_text_input(),
            ScreenId::Locations => self.locations.wants_text_input(),
            ScreenId::Capture => self.capture.wants_text_input(),
            ScreenId::Tasks => self.tasks.wants_text_input(),
            ScreenId::Robots => self.robots.wants_text_input(),
            ScreenId::Reviews => self.reviews.wants_text_input(),
            ScreenId::Notifications => self.notifications.wants_text_input(),
            ScreenId::Streaks => self.streaks.wants_text_input(),
        }
    }
}

// ---------------------------------------------------------------------------
// AppModel
// ---------------------------------------------------------------------------

/// Top-level application state.
pub struct AppModel {
    /// Signed-in operator, if any. While `None` only the login screen is
    /// reachable, regardless of `current_screen`.
    pub session: Option<Session>,
    /// Screen shown once signed in.
    pub current_screen: ScreenId,
    /// Per-screen state storage.
    pub screens: ScreenStates,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// Global tick counter (incremented every 100ms).
    pub tick_count: u64,
    /// Current terminal width.
    pub terminal_width: u16,
    /// Current terminal height.
    pub terminal_height: u16,
    /// Auto-exit after this many milliseconds (0 = disabled).
    pub exit_after_ms: u64,
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(2024)
    }
}

impl AppModel {
    /// Create a new application model. `seed` drives the activity calendar.
    pub fn new(seed: u64) -> Self {
        // Only set theme in non-test builds so parallel tests do not race
        // on the global theme.
        #[cfg(not(test))]
        theme::set_theme(theme::ThemeId::CyberpunkAurora);

        Self {
            session: None,
            current_screen: ScreenId::Home,
            screens: ScreenStates::new(seed),
            help_visible: false,
            tick_count: 0,
            terminal_width: 0,
            terminal_height: 0,
            exit_after_ms: 0,
        }
    }

    /// Screen that actually receives events and renders: the session guard
    /// pins everything to login while signed out.
    fn active_screen(&self) -> ScreenId {
        if self.session.is_none() {
            ScreenId::Login
        } else {
            self.current_screen
        }
    }

    /// Mirror the unread notification count onto the home dashboard badge.
    fn sync_unread_badge(&mut self) {
        let unread = self.screens.notifications.unread_count();
        self.screens.home.set_unread_badge(unread);
    }

    fn install_session(&mut self, session: Session) {
        tracing::info!(target: "ecobot.auth", email = %session.email, "signed in");
        self.screens.home.set_session(Some(session.clone()));
        self.session = Some(session);
        self.screens.login.reset();
        self.sync_unread_badge();
        self.current_screen = ScreenId::Home;
    }

    fn sign_out(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!(target: "ecobot.auth", email = %session.email, "signed out");
        }
        self.screens.home.set_session(None);
        self.screens.login.reset();
        self.help_visible = false;
        self.current_screen = ScreenId::Home;
    }

    fn handle_msg(&mut self, msg: AppMsg) -> Cmd<AppMsg> {
        match msg {
            AppMsg::Quit => Cmd::Quit,

            AppMsg::Navigate(id) => {
                if self.session.is_some() {
                    self.current_screen = id;
                    self.help_visible = false;
                }
                Cmd::None
            }

            AppMsg::OpenRobot { robot_id } => {
                if self.session.is_some() {
                    self.screens.robots.focus_robot(&robot_id);
                    self.current_screen = ScreenId::Robots;
                }
                Cmd::None
            }

            AppMsg::LoginCompleted { epoch, session } => {
                if self.screens.login.submitting && epoch == self.screens.login.epoch {
                    self.install_session(session);
                } else {
                    tracing::debug!(
                        target: "ecobot.auth",
                        epoch,
                        current = self.screens.login.epoch,
                        "dropping stale login result"
                    );
                }
                Cmd::None
            }

            AppMsg::ReviewSubmitted {
                epoch,
                task_id,
                rating,
                comment,
                is_public,
            } => {
                if self.screens.reviews.submitting && epoch == self.screens.reviews.epoch {
                    self.screens
                        .reviews
                        .apply_submission(&task_id, rating, comment, is_public);
                } else {
                    tracing::debug!(
                        target: "ecobot.reviews",
                        epoch,
                        current = self.screens.reviews.epoch,
                        "dropping stale review submission"
                    );
                }
                Cmd::None
            }

            AppMsg::ToggleHelp => {
                self.help_visible = !self.help_visible;
                Cmd::None
            }

            AppMsg::CycleTheme => {
                theme::cycle_theme();
                tracing::debug!(
                    target: "ecobot.ui",
                    theme = theme::current_theme_name(),
                    "theme changed"
                );
                Cmd::None
            }

            AppMsg::Tick => {
                self.tick_count += 1;
                self.screens.tick(self.active_screen(), self.tick_count);
                Cmd::None
            }

            AppMsg::Resize { width, height } => {
                self.terminal_width = width;
                self.terminal_height = height;
                Cmd::None
            }

            AppMsg::ScreenEvent(event) => self.handle_screen_event(event),
        }
    }

    fn handle_screen_event(&mut self, event: Event) -> Cmd<AppMsg> {
        let active = self.active_screen();
        let typing = self.screens.wants_text_input(active);

        if let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = &event
        {
            // Ctrl+C always quits, even mid-typing.
            if *code == KeyCode::Char('c') && *modifiers == Modifiers::CTRL {
                return Cmd::Quit;
            }

            // The help overlay is modal: close on ? or Esc, swallow the rest.
            if self.help_visible {
                if matches!(code, KeyCode::Char('?') | KeyCode::Escape) {
                    self.help_visible = false;
                }
                return Cmd::None;
            }

            match (*code, *modifiers) {
                (KeyCode::Char('t'), Modifiers::CTRL) => {
                    return self.handle_msg(AppMsg::CycleTheme);
                }
                (KeyCode::Char('l'), Modifiers::CTRL) => {
                    if self.session.is_some() {
                        self.sign_out();
                    }
                    return Cmd::None;
                }
                _ => {}
            }

            // Single-key shortcuts are suspended while a text field has
            // focus so keystrokes reach the field.
            if !typing {
                match (*code, *modifiers) {
                    (KeyCode::Char('q'), Modifiers::NONE) => return Cmd::Quit,
                    (KeyCode::Char('?'), _) => {
                        self.help_visible = true;
                        return Cmd::None;
                    }
                    (KeyCode::Tab, Modifiers::NONE) if self.session.is_some() => {
                        self.current_screen = self.current_screen.next();
                        return Cmd::None;
                    }
                    (KeyCode::BackTab, _) if self.session.is_some() => {
                        self.current_screen = self.current_screen.prev();
                        return Cmd::None;
                    }
                    (KeyCode::Char(ch @ '1'..='8'), Modifiers::NONE)
                        if self.session.is_some() =>
                    {
                        if let Some(id) = ScreenId::from_number_key(ch) {
                            self.current_screen = id;
                            return Cmd::None;
                        }
                    }
                    _ => {}
                }
            }
        }

        let cmd = self.screens.update(active, &event);
        self.sync_unread_badge();
        cmd
    }
}

impl Model for AppModel {
    type Message = AppMsg;

    fn init(&mut self) -> Cmd<Self::Message> {
        if self.exit_after_ms > 0 {
            let ms = self.exit_after_ms;
            Cmd::task(move || {
                std::thread::sleep(Duration::from_millis(ms));
                AppMsg::Quit
            })
        } else {
            Cmd::None
        }
    }

    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message> {
        self.handle_msg(msg)
    }

    fn view(&self, frame: &mut Frame) {
        let area = Rect::from_size(frame.buffer.width(), frame.buffer.height());

        frame
            .buffer
            .fill(area, RenderCell::default().with_bg(theme::bg::DEEP.into()));

        let active = self.active_screen();

        if self.session.is_none() {
            // Signed out: login takes the whole area above the status bar.
            let chunks = Flex::vertical()
                .constraints([Constraint::Min(1), Constraint::Fixed(1)])
                .split(area);

            self.screens.view(ScreenId::Login, frame, chunks[0]);

            if self.help_visible {
                let bindings = self.screens.keybindings(ScreenId::Login);
                crate::chrome::render_help_overlay(
                    ScreenId::Login,
                    ScreenId::Login.title(),
                    &bindings,
                    frame,
                    area,
                );
            }

            let status_state = crate::chrome::StatusBarState {
                current_screen: ScreenId::Login,
                screen_title: ScreenId::Login.title(),
                screen_index: 0,
                screen_count: ScreenId::ALL.len(),
                tick_count: self.tick_count,
                terminal_width: self.terminal_width,
                terminal_height: self.terminal_height,
                theme_name: theme::current_theme_name(),
                operator: None,
                unread: 0,
            };
            crate::chrome::render_status_bar(&status_state, frame, chunks[1]);
            return;
        }

        // Top-level layout: tab bar (1 row) + content + status bar (1 row)
        let chunks = Flex::vertical()
            .constraints([
                Constraint::Fixed(1),
                Constraint::Min(1),
                Constraint::Fixed(1),
            ])
            .split(area);

        crate::chrome::render_tab_bar(active, frame, chunks[0]);

        let content_block = Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(active.title())
            .title_alignment(Alignment::Center)
            .style(theme::content_border());

        let inner = content_block.inner(chunks[1]);
        content_block.render(chunks[1], frame);

        self.screens.view(active, frame, inner);

        if self.help_visible {
            let bindings = self.screens.keybindings(active);
            crate::chrome::render_help_overlay(active, active.title(), &bindings, frame, area);
        }

        let status_state = crate::chrome::StatusBarState {
            current_screen: active,
            screen_title: active.title(),
            screen_index: active.index(),
            screen_count: ScreenId::ALL.len(),
            tick_count: self.tick_count,
            terminal_width: self.terminal_width,
            terminal_height: self.terminal_height,
            theme_name: theme::current_theme_name(),
            operator: self.session.as_ref().map(|s| s.email.as_str()),
            unread: self.screens.notifications.unread_count(),
        };
        crate::chrome::render_status_bar(&status_state, frame, chunks[2]);
    }

    fn subscriptions(&self) -> Vec<Box<dyn Subscription<Self::Message>>> {
        vec![Box::new(Every::new(Duration::from_millis(100), || {
            AppMsg::Tick
        }))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ftui_render::grapheme_pool::GraphemePool;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        })
    }

    fn press_with(code: KeyCode, modifiers: Modifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
        })
    }

    /// Drive the login flow to completion and return a signed-in model.
    fn signed_in() -> AppModel {
        let mut app = AppModel::new(2024);
        app.screens
            .login
            .set_credentials("admin@ecobot.com", "password");
        let cmd = app.update(AppMsg::ScreenEvent(press(KeyCode::Enter)));
        assert!(matches!(cmd, Cmd::Task(..)));
        let epoch = app.screens.login.epoch;
        app.update(AppMsg::LoginCompleted {
            epoch,
            session: Session::new("admin@ecobot.com"),
        });
        assert!(app.session.is_some());
        app
    }

    #[test]
    fn starts_signed_out_on_login() {
        let app = AppModel::new(2024);
        assert!(app.session.is_none());
        assert_eq!(app.active_screen(), ScreenId::Login);
    }

    #[test]
    fn login_completion_installs_session_and_lands_on_home() {
        let app = signed_in();
        assert_eq!(app.current_screen, ScreenId::Home);
        assert!(!app.screens.login.submitting);
        assert_eq!(
            app.session.as_ref().map(|s| s.email.as_str()),
            Some("admin@ecobot.com")
        );
    }

    #[test]
    fn stale_login_result_is_dropped() {
        let mut app = AppModel::new(2024);
        app.screens
            .login
            .set_credentials("admin@ecobot.com", "password");
        let _ = app.update(AppMsg::ScreenEvent(press(KeyCode::Enter)));
        let current = app.screens.login.epoch;

        app.update(AppMsg::LoginCompleted {
            epoch: current.wrapping_sub(1),
            session: Session::new("stale@ecobot.com"),
        });
        assert!(app.session.is_none());
        assert!(app.screens.login.submitting);
    }

    #[test]
    fn navigation_requires_session() {
        let mut app = AppModel::new(2024);
        app.update(AppMsg::Navigate(ScreenId::Tasks));
        assert_eq!(app.active_screen(), ScreenId::Login);

        // Number keys go to the login email field, not navigation.
        app.update(AppMsg::ScreenEvent(press(KeyCode::Char('3'))));
        assert_eq!(app.active_screen(), ScreenId::Login);
    }

    #[test]
    fn number_keys_switch_tabs_when_signed_in() {
        let mut app = signed_in();
        app.update(AppMsg::ScreenEvent(press(KeyCode::Char('5'))));
        assert_eq!(app.current_screen, ScreenId::Robots);
        app.update(AppMsg::ScreenEvent(press(KeyCode::Char('1'))));
        assert_eq!(app.current_screen, ScreenId::Home);
    }

    #[test]
    fn tab_cycles_and_wraps() {
        let mut app = signed_in();
        for _ in 0..ScreenId::ALL.len() {
            app.update(AppMsg::ScreenEvent(press(KeyCode::Tab)));
        }
        assert_eq!(app.current_screen, ScreenId::Home);

        app.update(AppMsg::ScreenEvent(press(KeyCode::BackTab)));
        assert_eq!(app.current_screen, ScreenId::Streaks);
    }

    #[test]
    fn open_robot_focuses_fleet_screen() {
        let mut app = signed_in();
        app.update(AppMsg::OpenRobot {
            robot_id: "EB-003".to_string(),
        });
        assert_eq!(app.current_screen, ScreenId::Robots);
    }

    #[test]
    fn quit_key_suspended_while_typing() {
        let mut app = AppModel::new(2024);
        // Login has text focus, so 'q' must reach the email field.
        let cmd = app.update(AppMsg::ScreenEvent(press(KeyCode::Char('q'))));
        assert!(!matches!(cmd, Cmd::Quit));

        let mut app2 = signed_in();
        let cmd = app2.update(AppMsg::ScreenEvent(press(KeyCode::Char('q'))));
        assert!(matches!(cmd, Cmd::Quit));
    }

    #[test]
    fn ctrl_c_quits_even_while_typing() {
        let mut app = AppModel::new(2024);
        let cmd = app.update(AppMsg::ScreenEvent(press_with(
            KeyCode::Char('c'),
            Modifiers::CTRL,
        )));
        assert!(matches!(cmd, Cmd::Quit));
    }

    #[test]
    fn help_overlay_is_modal() {
        let mut app = signed_in();
        app.update(AppMsg::ScreenEvent(press(KeyCode::Char('?'))));
        assert!(app.help_visible);

        // Swallowed while the overlay is open.
        app.update(AppMsg::ScreenEvent(press(KeyCode::Char('5'))));
        assert_eq!(app.current_screen, ScreenId::Home);

        app.update(AppMsg::ScreenEvent(press(KeyCode::Escape)));
        assert!(!app.help_visible);
    }

    #[test]
    fn sign_out_returns_to_login() {
        let mut app = signed_in();
        app.update(AppMsg::ScreenEvent(press_with(
            KeyCode::Char('l'),
            Modifiers::CTRL,
        )));
        assert!(app.session.is_none());
        assert_eq!(app.active_screen(), ScreenId::Login);
    }

    #[test]
    fn unread_badge_follows_notifications() {
        let mut app = signed_in();
        app.update(AppMsg::Navigate(ScreenId::Notifications));
        app.update(AppMsg::ScreenEvent(press(KeyCode::Char('a'))));
        assert_eq!(app.screens.notifications.unread_count(), 0);
    }

    #[test]
    fn stale_review_submission_is_dropped() {
        let mut app = signed_in();
        let pending_before = app.screens.reviews.pending_count();
        app.screens.reviews.submitting = true;
        app.screens.reviews.epoch = 7;

        app.update(AppMsg::ReviewSubmitted {
            epoch: 6,
            task_id: "2".to_string(),
            rating: 5,
            comment: String::new(),
            is_public: true,
        });
        assert_eq!(app.screens.reviews.pending_count(), pending_before);
        assert!(app.screens.reviews.submitting);
    }

    #[test]
    fn renders_signed_out_and_in() {
        let app = AppModel::new(2024);
        let mut pool = GraphemePool::new();
        let mut frame = Frame::new(120, 40, &mut pool);
        app.view(&mut frame);

        let app = signed_in();
        let mut pool = GraphemePool::new();
        let mut frame = Frame::new(120, 40, &mut pool);
        app.view(&mut frame);
    }

    #[test]
    fn screen_ids_round_trip_number_keys() {
        for (i, id) in ScreenId::ALL.iter().enumerate() {
            let ch = char::from(b'1' + i as u8);
            assert_eq!(ScreenId::from_number_key(ch), Some(*id));
        }
        assert_eq!(ScreenId::from_number_key('9'), None);
        assert_eq!(ScreenId::from_number_key('0'), None);
    }
}
