#![forbid(unsafe_code)]

//! Navigation integration tests: the session guard, tab switching, quick
//! actions, and notification deep links.

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

fn signed_in() -> AppModel {
    let mut app = AppModel::new(2024);
    app.screens
        .login
        .set_credentials("admin@ecobot.com", "password");
    let _ = app.update(AppMsg::from(press(KeyCode::Enter)));
    let epoch = app.screens.login.epoch;
    app.update(AppMsg::LoginCompleted {
        epoch,
        session: Session::new("admin@ecobot.com"),
    });
    app
}

/// Feed a screen-produced command back into the model like the runtime does.
fn pump(app: &mut AppModel, cmd: Cmd<AppMsg>) {
    if let Cmd::Msg(msg) = cmd {
        app.update(msg);
    }
}

#[test]
fn navigate_is_ignored_while_signed_out() {
    let mut app = AppModel::new(2024);
    app.update(AppMsg::Navigate(ScreenId::Tasks));
    assert!(app.session.is_none());

    app.update(AppMsg::OpenRobot {
        robot_id: "EB-001".to_string(),
    });
    assert!(app.session.is_none());
}

#[test]
fn every_tab_is_reachable_by_number_key() {
    let mut app = signed_in();
    for (i, id) in ScreenId::ALL.iter().enumerate() {
        let ch = char::from(b'1' + i as u8);
        app.update(AppMsg::from(press(KeyCode::Char(ch))));
        assert_eq!(app.current_screen, *id);
    }
}

#[test]
fn home_quick_action_navigates() {
    let mut app = signed_in();
    assert_eq!(app.current_screen, ScreenId::Home);

    // 't' is the Tasks quick action on the dashboard; the screen answers
    // with a navigation message the runtime feeds back in.
    let cmd = app.update(AppMsg::from(press(KeyCode::Char('t'))));
    pump(&mut app, cmd);
    assert_eq!(app.current_screen, ScreenId::Tasks);
}

#[test]
fn completed_task_jumps_to_reviews() {
    let mut app = signed_in();
    app.update(AppMsg::from(press(KeyCode::Char('4'))));
    assert_eq!(app.current_screen, ScreenId::Tasks);

    // Fourth sample task is the completed one.
    for _ in 0..3 {
        app.update(AppMsg::from(press(KeyCode::Char('j'))));
    }
    let cmd = app.update(AppMsg::from(press(KeyCode::Enter)));
    pump(&mut app, cmd);
    assert_eq!(app.current_screen, ScreenId::Reviews);
}

#[test]
fn notification_deep_link_focuses_robot() {
    let mut app = signed_in();
    app.update(AppMsg::from(press(KeyCode::Char('7'))));
    assert_eq!(app.current_screen, ScreenId::Notifications);

    // Second sample notification is a robot status alert for EB-003.
    let cmd = app.update(AppMsg::from(press(KeyCode::Char('j'))));
    pump(&mut app, cmd);
    let cmd = app.update(AppMsg::from(press(KeyCode::Enter)));
    pump(&mut app, cmd);
    assert_eq!(app.current_screen, ScreenId::Robots);
}

#[test]
fn unread_badge_tracks_notification_reads() {
    let mut app = signed_in();
    let before = app.screens.notifications.unread_count();
    assert!(before > 0);

    app.update(AppMsg::from(press(KeyCode::Char('7'))));
    app.update(AppMsg::from(press(KeyCode::Char('a'))));
    assert_eq!(app.screens.notifications.unread_count(), 0);
}

#[test]
fn every_screen_renders_after_sign_in() {
    let mut app = signed_in();
    app.terminal_width = 120;
    app.terminal_height = 40;

    for id in ScreenId::ALL {
        app.update(AppMsg::Navigate(id));
        let mut pool = GraphemePool::new();
        let mut frame = Frame::new(120, 40, &mut pool);
        app.view(&mut frame);
    }
}

#[test]
fn small_terminal_does_not_panic() {
    let mut app = signed_in();
    app.terminal_width = 40;
    app.terminal_height = 12;

    for id in ScreenId::ALL {
        app.update(AppMsg::Navigate(id));
        let mut pool = GraphemePool::new();
        let mut frame = Frame::new(40, 12, &mut pool);
        app.view(&mut frame);
    }
}
