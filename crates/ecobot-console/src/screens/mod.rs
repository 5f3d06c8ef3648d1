#![forbid(unsafe_code)]

//! Screen modules for the fleet console.
//!
//! Each screen implements the [`Screen`] trait and is reached through the
//! tab bar, number keys, or quick actions on the home dashboard.

pub mod capture;
pub mod home;
pub mod locations;
pub mod login;
pub mod notifications;
pub mod reviews;
pub mod robots;
pub mod streaks;
pub mod tasks;

use ftui_core::event::Event;
use ftui_core::geometry::Rect;
use ftui_render::frame::Frame;
use ftui_runtime::Cmd;

/// Per-screen keybinding entry for the help overlay.
pub struct HelpEntry {
    pub key: &'static str,
    pub action: &'static str,
}

/// Interface every console screen implements.
///
/// Screens receive raw terminal events and answer with app-level commands,
/// which is how a screen requests navigation or kicks off a simulated
/// backend call.
pub trait Screen {
    /// Message produced by commands this screen returns.
    type Message: Send + 'static;

    /// Handle a terminal event.
    fn update(&mut self, event: &Event) -> Cmd<Self::Message>;

    /// Render into the given area.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Screen-specific keybindings for the help overlay.
    fn keybindings(&self) -> Vec<HelpEntry> {
        Vec::new()
    }

    /// Periodic tick for animations (100ms cadence).
    fn tick(&mut self, _tick_count: u64) {}

    /// Title shown in the content border.
    fn title(&self) -> &'static str;

    /// Short label for the tab bar.
    fn tab_label(&self) -> &'static str {
        self.title()
    }

    /// True while a text field has focus; global single-key shortcuts are
    /// suspended so keystrokes reach the field.
    fn wants_text_input(&self) -> bool {
        false
    }
}
