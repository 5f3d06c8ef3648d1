#![forbid(unsafe_code)]

//! End-to-end review submission: opening the form from the pending list,
//! the simulated backend delay, and the atomic pending/review handoff.

use ecobot_console::app::{AppModel, AppMsg, ScreenId};
use ecobot_console::model::entities::Session;
use ftui_core::event::{Event, KeyCode, KeyEvent, KeyEventKind, Modifiers};
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

fn open_reviews(app: &mut AppModel) {
    app.update(AppMsg::from(press(KeyCode::Char('6'))));
    assert_eq!(app.current_screen, ScreenId::Reviews);
}

#[test]
fn submission_moves_task_from_pending_to_reviews() {
    let mut app = signed_in();
    open_reviews(&mut app);
    assert_eq!(app.screens.reviews.pending_count(), 1);
    assert_eq!(app.screens.reviews.review_count(), 2);

    // Open the form for the one pending task, rate it, submit.
    app.update(AppMsg::from(press(KeyCode::Enter)));
    app.update(AppMsg::from(press(KeyCode::Char('4'))));
    let cmd = app.update(AppMsg::from(press(KeyCode::Enter)));
    assert!(matches!(cmd, Cmd::Task(..)), "submit must spawn a task");
    assert!(app.screens.reviews.submitting);

    let epoch = app.screens.reviews.epoch;
    app.update(AppMsg::ReviewSubmitted {
        epoch,
        task_id: "1".to_string(),
        rating: 4,
        comment: String::new(),
        is_public: true,
    });

    assert_eq!(app.screens.reviews.pending_count(), 0);
    assert_eq!(app.screens.reviews.review_count(), 3);
    assert!(!app.screens.reviews.submitting);
}

#[test]
fn zero_rating_is_rejected_without_a_call() {
    let mut app = signed_in();
    open_reviews(&mut app);

    app.update(AppMsg::from(press(KeyCode::Enter)));
    let cmd = app.update(AppMsg::from(press(KeyCode::Enter)));
    assert!(matches!(cmd, Cmd::None));
    assert!(!app.screens.reviews.submitting);
    assert_eq!(app.screens.reviews.pending_count(), 1);
}

#[test]
fn stale_submission_result_is_discarded() {
    let mut app = signed_in();
    open_reviews(&mut app);

    app.update(AppMsg::from(press(KeyCode::Enter)));
    app.update(AppMsg::from(press(KeyCode::Char('5'))));
    let _ = app.update(AppMsg::from(press(KeyCode::Enter)));
    let epoch = app.screens.reviews.epoch;

    app.update(AppMsg::ReviewSubmitted {
        epoch: epoch.wrapping_sub(1),
        task_id: "1".to_string(),
        rating: 5,
        comment: String::new(),
        is_public: true,
    });
    assert_eq!(app.screens.reviews.pending_count(), 1, "stale result dropped");
    assert!(app.screens.reviews.submitting, "real submission still pending");

    app.update(AppMsg::ReviewSubmitted {
        epoch,
        task_id: "1".to_string(),
        rating: 5,
        comment: String::new(),
        is_public: true,
    });
    assert_eq!(app.screens.reviews.pending_count(), 0);
}

#[test]
fn number_keys_stay_in_form_while_rating() {
    let mut app = signed_in();
    open_reviews(&mut app);

    // With the form open the screen owns keystrokes, so '3' is a rating,
    // not a tab switch.
    app.update(AppMsg::from(press(KeyCode::Enter)));
    app.update(AppMsg::from(press(KeyCode::Char('3'))));
    assert_eq!(app.current_screen, ScreenId::Reviews);
}
