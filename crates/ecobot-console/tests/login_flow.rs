#![forbid(unsafe_code)]

//! End-to-end sign-in flow: typing credentials, the simulated backend
//! delay, and epoch-based discard of stale results.

use ecobot_console::app::{AppModel, AppMsg, ScreenId};
use ecobot_console::model::entities::Session;
use ftui_core::event::{Event, KeyCode, KeyEvent, KeyEventKind, Modifiers};
use ftui_render::frame::Frame;
use ftui_render::grapheme_pool::GraphemePool;
use ftui_runtime::{Cmd, Model};

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent {
        code,
        modifiers: Modifiers::NONE,
        kind: KeyEventKind::Press,
    })
}

fn type_str(app: &mut AppModel, text: &str) {
    for ch in text.chars() {
        app.update(AppMsg::from(press(KeyCode::Char(ch))));
    }
}

#[test]
fn typed_credentials_sign_in_and_land_on_home() {
    let mut app = AppModel::new(2024);
    assert!(app.session.is_none());

    type_str(&mut app, "admin@ecobot.com");
    app.update(AppMsg::from(press(KeyCode::Tab)));
    type_str(&mut app, "password");

    let cmd = app.update(AppMsg::from(press(KeyCode::Enter)));
    assert!(matches!(cmd, Cmd::Task(..)), "submit must spawn a task");
    assert!(app.screens.login.submitting);

    let epoch = app.screens.login.epoch;
    app.update(AppMsg::LoginCompleted {
        epoch,
        session: Session::new("admin@ecobot.com"),
    });

    assert_eq!(
        app.session.as_ref().map(|s| s.email.as_str()),
        Some("admin@ecobot.com")
    );
    assert_eq!(app.current_screen, ScreenId::Home);
    assert!(!app.screens.login.submitting);
}

#[test]
fn empty_email_is_rejected_inline() {
    let mut app = AppModel::new(2024);
    let cmd = app.update(AppMsg::from(press(KeyCode::Enter)));
    assert!(matches!(cmd, Cmd::None));
    assert!(!app.screens.login.submitting);
    assert!(app.session.is_none());
}

#[test]
fn stale_login_result_does_not_install_a_session() {
    let mut app = AppModel::new(2024);
    type_str(&mut app, "admin@ecobot.com");
    app.update(AppMsg::from(press(KeyCode::Tab)));
    type_str(&mut app, "password");
    let _ = app.update(AppMsg::from(press(KeyCode::Enter)));
    let epoch = app.screens.login.epoch;

    // A result from an earlier attempt arrives late.
    app.update(AppMsg::LoginCompleted {
        epoch: epoch.wrapping_sub(1),
        session: Session::new("stale@ecobot.com"),
    });
    assert!(app.session.is_none());
    assert!(app.screens.login.submitting, "current attempt still pending");

    // The matching result still lands.
    app.update(AppMsg::LoginCompleted {
        epoch,
        session: Session::new("admin@ecobot.com"),
    });
    assert!(app.session.is_some());
}

#[test]
fn sign_out_clears_session_and_shows_login_again() {
    let mut app = AppModel::new(2024);
    type_str(&mut app, "admin@ecobot.com");
    app.update(AppMsg::from(press(KeyCode::Tab)));
    type_str(&mut app, "password");
    let _ = app.update(AppMsg::from(press(KeyCode::Enter)));
    let epoch = app.screens.login.epoch;
    app.update(AppMsg::LoginCompleted {
        epoch,
        session: Session::new("admin@ecobot.com"),
    });

    app.update(AppMsg::from(Event::Key(KeyEvent {
        code: KeyCode::Char('l'),
        modifiers: Modifiers::CTRL,
        kind: KeyEventKind::Press,
    })));
    assert!(app.session.is_none());

    // Keystrokes go back to the login form, not navigation.
    app.update(AppMsg::from(press(KeyCode::Char('4'))));
    assert!(app.session.is_none());
}

#[test]
fn renders_before_and_after_sign_in() {
    let mut app = AppModel::new(2024);
    app.terminal_width = 120;
    app.terminal_height = 40;

    let mut pool = GraphemePool::new();
    let mut frame = Frame::new(120, 40, &mut pool);
    app.view(&mut frame);

    type_str(&mut app, "admin@ecobot.com");
    app.update(AppMsg::from(press(KeyCode::Tab)));
    type_str(&mut app, "password");
    let _ = app.update(AppMsg::from(press(KeyCode::Enter)));
    let epoch = app.screens.login.epoch;
    app.update(AppMsg::LoginCompleted {
        epoch,
        session: Session::new("admin@ecobot.com"),
    });

    let mut pool = GraphemePool::new();
    let mut frame = Frame::new(120, 40, &mut pool);
    app.view(&mut frame);
}
