#![forbid(unsafe_code)]

//! Shared styles for the fleet console, backed by ftui-extras themes.
//!
//! Besides the usual text styles this module maps domain values
//! (priorities, task and robot statuses, notification kinds, battery
//! levels) onto theme tokens so every screen colors them the same way.

use ftui_extras::theme as core_theme;
use ftui_style::{Style, StyleFlags};

pub use core_theme::{
    ColorToken, ThemeId, accent, alpha, bg, current_theme_name, cycle_theme, fg, set_theme,
    with_alpha,
};

use crate::model::entities::{
    LocationStatus, NotificationKind, Priority, RobotStatus, TaskStatus,
};

// ---------------------------------------------------------------------------
// Named styles
// ---------------------------------------------------------------------------

pub fn title() -> Style {
    Style::new().fg(fg::PRIMARY).attrs(StyleFlags::BOLD)
}

pub fn subtitle() -> Style {
    Style::new().fg(fg::SECONDARY).attrs(StyleFlags::ITALIC)
}

pub fn body() -> Style {
    Style::new().fg(fg::PRIMARY)
}

pub fn muted() -> Style {
    Style::new().fg(fg::MUTED)
}

pub fn error_style() -> Style {
    Style::new().fg(accent::ERROR).attrs(StyleFlags::BOLD)
}

pub fn success() -> Style {
    Style::new().fg(accent::SUCCESS).attrs(StyleFlags::BOLD)
}

pub fn warning() -> Style {
    Style::new().fg(accent::WARNING).attrs(StyleFlags::BOLD)
}

// ---------------------------------------------------------------------------
// Component styles
// ---------------------------------------------------------------------------

/// Tab bar background.
pub fn tab_bar() -> Style {
    Style::new().bg(alpha::SURFACE).fg(fg::SECONDARY)
}

/// Status bar background.
pub fn status_bar() -> Style {
    Style::new().bg(alpha::SURFACE).fg(fg::MUTED)
}

/// Content area border.
pub fn content_border() -> Style {
    Style::new().fg(fg::MUTED)
}

/// Help overlay background.
pub fn help_overlay() -> Style {
    Style::new().bg(alpha::OVERLAY).fg(fg::PRIMARY)
}

/// Border style for a panel depending on focus.
pub fn panel_border_style(is_focused: bool, accent: ColorToken) -> Style {
    if is_focused {
        Style::new().fg(accent)
    } else {
        content_border()
    }
}

/// Style for a list row depending on selection and panel focus.
pub fn list_item_style(is_selected: bool, is_focused: bool) -> Style {
    match (is_selected, is_focused) {
        (true, true) => Style::new()
            .fg(fg::PRIMARY)
            .bg(alpha::HIGHLIGHT)
            .attrs(StyleFlags::BOLD),
        (true, false) => Style::new().fg(fg::SECONDARY).bg(alpha::SURFACE),
        (false, _) => Style::new().fg(fg::PRIMARY),
    }
}

/// Selection prefix keeping rows aligned whether or not they are selected.
pub fn selection_indicator(is_selected: bool) -> &'static str {
    if is_selected { "▶ " } else { "  " }
}

// ---------------------------------------------------------------------------
// Domain color maps
// ---------------------------------------------------------------------------

pub fn priority_token(priority: Priority) -> ColorToken {
    match priority {
        Priority::High => accent::ERROR,
        Priority::Medium => accent::WARNING,
        Priority::Low => accent::SUCCESS,
    }
}

pub fn priority_style(priority: Priority) -> Style {
    Style::new().fg(priority_token(priority))
}

pub fn task_status_token(status: TaskStatus) -> ColorToken {
    match status {
        TaskStatus::Pending => accent::WARNING,
        TaskStatus::Assigned => accent::INFO,
        TaskStatus::InProgress => accent::PRIMARY,
        TaskStatus::Completed => accent::SUCCESS,
        TaskStatus::Paused => fg::MUTED,
    }
}

pub fn task_status_style(status: TaskStatus) -> Style {
    Style::new().fg(task_status_token(status))
}

pub fn location_status_style(status: LocationStatus) -> Style {
    let token = match status {
        LocationStatus::Pending => accent::WARNING,
        LocationStatus::Assigned => accent::INFO,
        LocationStatus::Completed => accent::SUCCESS,
    };
    Style::new().fg(token)
}

pub fn robot_status_style(status: RobotStatus) -> Style {
    let token = match status {
        RobotStatus::Working => accent::SUCCESS,
        RobotStatus::Idle => accent::INFO,
        RobotStatus::Charging => accent::WARNING,
        RobotStatus::Maintenance => accent::ERROR,
    };
    Style::new().fg(token)
}

pub fn notification_token(kind: NotificationKind) -> ColorToken {
    match kind {
        NotificationKind::Success => accent::SUCCESS,
        NotificationKind::Warning => accent::WARNING,
        NotificationKind::Info => accent::INFO,
        NotificationKind::Error => accent::ERROR,
    }
}

/// Battery color thresholds: healthy above 60%, caution above 30%, critical
/// below that.
pub fn battery_token(battery: u8) -> ColorToken {
    if battery > 60 {
        accent::SUCCESS
    } else if battery > 30 {
        accent::WARNING
    } else {
        accent::ERROR
    }
}

/// Per-screen accent colors for tab and status bar emphasis.
pub mod screen_accent {
    use super::{ColorToken, accent};

    pub const LOGIN: ColorToken = accent::SUCCESS;
    pub const HOME: ColorToken = accent::ACCENT_1;
    pub const LOCATIONS: ColorToken = accent::ACCENT_7;
    pub const CAPTURE: ColorToken = accent::ACCENT_2;
    pub const TASKS: ColorToken = accent::ACCENT_6;
    pub const ROBOTS: ColorToken = accent::ACCENT_3;
    pub const REVIEWS: ColorToken = accent::ACCENT_4;
    pub const NOTIFICATIONS: ColorToken = accent::ACCENT_5;
    pub const STREAKS: ColorToken = accent::ACCENT_8;
}

/// Icon vocabulary used across the screens.
pub mod icons {
    pub const ROBOT: &str = "🤖";
    pub const PIN: &str = "📍";
    pub const BELL: &str = "🔔";
    pub const CAMERA: &str = "📷";
    pub const LEAF: &str = "🌿";
    pub const SHIELD: &str = "🛡";
    pub const STAR_FILLED: &str = "★";
    pub const STAR_EMPTY: &str = "☆";
    pub const FIRE: &str = "🔥";
    pub const CHECK: &str = "✔";
    pub const CROSS: &str = "✘";
    pub const UNREAD: &str = "●";
    pub const READ: &str = "○";
    pub const CROSSHAIR: &str = "+";
    pub const MAP_DOT: &str = "·";
}
