#![forbid(unsafe_code)]

//! Notification center: all/unread feeds grouped by day, plus delivery
//! preference toggles.

use ftui_core::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ftui_core::geometry::Rect;
use ftui_layout::{Constraint, Flex};
use ftui_render::frame::Frame;
use ftui_runtime::Cmd;
use ftui_style::Style;
use ftui_widgets::Widget;
use ftui_widgets::block::{Alignment, Block};
use ftui_widgets::borders::{BorderType, Borders};
use ftui_widgets::paragraph::Paragraph;

use super::{HelpEntry, Screen};
use crate::app::{AppMsg, ScreenId};
use crate::model::entities::{Notification, NotificationAction};
use crate::model::sample;
use crate::model::stats;
use crate::model::store::Collection;
use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    All,
    Unread,
    Settings,
}

impl Tab {
    fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Unread => "Unread",
            Self::Settings => "Settings",
        }
    }

    fn next(self) -> Self {
        match self {
            Self::All => Self::Unread,
            Self::Unread => Self::Settings,
            Self::Settings => Self::All,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::All => Self::Settings,
            Self::Unread => Self::All,
            Self::Settings => Self::Unread,
        }
    }
}

struct Preference {
    label: &'static str,
    enabled: bool,
}

pub struct NotificationsScreen {
    notifications: Collection<Notification>,
    tab: Tab,
    selected: usize,
    preferences: Vec<Preference>,
    pref_cursor: usize,
    status_text: String,
}

impl Default for NotificationsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationsScreen {
    pub fn new() -> Self {
        Self {
            notifications: Collection::from_items(sample::notifications()),
            tab: Tab::All,
            selected: 0,
            preferences: vec![
                Preference {
                    label: "Task completion alerts",
                    enabled: true,
                },
                Preference {
                    label: "Robot status alerts",
                    enabled: true,
                },
                Preference {
                    label: "System alerts",
                    enabled: true,
                },
                Preference {
                    label: "Review reminders",
                    enabled: true,
                },
                Preference {
                    label: "Email notifications",
                    enabled: false,
                },
                Preference {
                    label: "Push notifications",
                    enabled: true,
                },
            ],
            pref_cursor: 0,
            status_text: "←/→: tab | r: toggle read | d: delete | a: mark all read".into(),
        }
    }

    pub fn unread_count(&self) -> usize {
        stats::unread_count(self.notifications.as_slice())
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Ids visible on the current tab, in list order.
    fn visible_ids(&self) -> Vec<String> {
        self.notifications
            .iter()
            .filter(|n| self.tab != Tab::Unread || !n.is_read)
            .map(|n| n.id.clone())
            .collect()
    }

    fn selected_id(&self) -> Option<String> {
        self.visible_ids().get(self.selected).cloned()
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_ids().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    fn toggle_read(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        let _ = self.notifications.update(&id, |n| n.is_read = !n.is_read);
        self.clamp_selection();
    }

    fn delete_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        if let Ok(removed) = self.notifications.remove(&id) {
            self.status_text = format!("Deleted \"{}\"", removed.title);
        }
        self.clamp_selection();
    }

    fn mark_all_read(&mut self) {
        let ids: Vec<String> = self.notifications.iter().map(|n| n.id.clone()).collect();
        for id in ids {
            let _ = self.notifications.update(&id, |n| n.is_read = true);
        }
        self.status_text = "All notifications marked read".into();
        self.clamp_selection();
    }

    fn follow_selected(&mut self) -> Cmd<AppMsg> {
        let Some(id) = self.selected_id() else {
            return Cmd::None;
        };
        let _ = self.notifications.update(&id, |n| n.is_read = true);

        let action = self
            .notifications
            .get(&id)
            .and_then(|n| n.action.clone());
        self.clamp_selection();
        match action {
            Some(NotificationAction::TaskCompleted { .. }) => {
                Cmd::msg(AppMsg::Navigate(ScreenId::Tasks))
            }
            Some(NotificationAction::RobotStatus { robot_id, .. }) => {
                Cmd::msg(AppMsg::OpenRobot { robot_id })
            }
            _ => Cmd::None,
        }
    }

    fn update_feed(&mut self, code: KeyCode) -> Cmd<AppMsg> {
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.visible_ids().len() {
                    self.selected += 1;
                }
            }
            KeyCode::Char('r' | 'R') => self.toggle_read(),
            KeyCode::Char('d' | 'D') => self.delete_selected(),
            KeyCode::Char('a' | 'A') => self.mark_all_read(),
            KeyCode::Enter => return self.follow_selected(),
            _ => {}
        }
        Cmd::None
    }

    fn update_settings(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.pref_cursor = self.pref_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.pref_cursor + 1 < self.preferences.len() {
                    self.pref_cursor += 1;
                }
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                let pref = &mut self.preferences[self.pref_cursor];
                pref.enabled = !pref.enabled;
                tracing::info!(
                    target: "ecobot.notifications",
                    preference = pref.label,
                    enabled = pref.enabled,
                    "preference toggled"
                );
            }
            _ => {}
        }
    }

    fn render_tabs(&self, frame: &mut Frame, area: Rect) {
        if area.is_empty() {
            return;
        }
        let unread = self.unread_count();
        let labels = [
            (Tab::All, format!("All ({})", self.notifications.len())),
            (Tab::Unread, format!("Unread ({unread})")),
            (Tab::Settings, "Settings".to_string()),
        ];
        let mut x = area.x;
        for (tab, label) in &labels {
            let text = format!(" {label} ");
            let width = text.chars().count() as u16;
            if x + width > area.x + area.width {
                break;
            }
            let style = if *tab == self.tab {
                Style::new()
                    .fg(theme::fg::PRIMARY)
                    .bg(theme::alpha::HIGHLIGHT)
                    .bold()
            } else {
                theme::muted()
            };
            Paragraph::new(text).style(style).render(Rect::new(x, area.y, width, 1), frame);
            x += width + 1;
        }
    }

    fn render_feed(&self, frame: &mut Frame, inner: Rect) {
        let ids = self.visible_ids();
        if ids.is_empty() {
            let text = if self.tab == Tab::Unread {
                "No unread notifications"
            } else {
                "No notifications"
            };
            Paragraph::new(text).style(theme::muted()).render(inner, frame);
            return;
        }

        let mut y = inner.y;
        let mut last_group: Option<bool> = None;
        for (i, id) in ids.iter().enumerate() {
            let Some(item) = self.notifications.get(id) else {
                continue;
            };
            if y >= inner.y + inner.height {
                break;
            }

            // Day separator between today's items and older ones.
            let group = item.is_from_today();
            if last_group != Some(group) {
                let header = if group { "Today" } else { "Earlier" };
                Paragraph::new(header)
                    .style(theme::subtitle())
                    .render(Rect::new(inner.x, y, inner.width, 1), frame);
                y += 1;
                last_group = Some(group);
                if y >= inner.y + inner.height {
                    break;
                }
            }

            let is_selected = i == self.selected;
            let read_icon = if item.is_read {
                theme::icons::READ
            } else {
                theme::icons::UNREAD
            };
            let header = format!(
                "{}{} {}  · {}",
                theme::selection_indicator(is_selected),
                read_icon,
                item.title,
                item.timestamp,
            );
            Paragraph::new(header)
                .style(if is_selected {
                    theme::list_item_style(true, true)
                } else {
                    Style::new().fg(theme::notification_token(item.kind))
                })
                .render(Rect::new(inner.x, y, inner.width, 1), frame);
            y += 1;

            if y < inner.y + inner.height {
                Paragraph::new(format!("    {}", item.message))
                    .style(theme::muted())
                    .render(Rect::new(inner.x, y, inner.width, 1), frame);
                y += 1;
            }
        }
    }

    fn render_settings(&self, frame: &mut Frame, inner: Rect) {
        for (i, pref) in self.preferences.iter().enumerate() {
            if i as u16 >= inner.height {
                break;
            }
            let is_selected = i == self.pref_cursor;
            let mark = if pref.enabled {
                theme::icons::CHECK
            } else {
                theme::icons::CROSS
            };
            let line = format!(
                "{}[{}] {}",
                theme::selection_indicator(is_selected),
                mark,
                pref.label
            );
            Paragraph::new(line)
                .style(theme::list_item_style(is_selected, true))
                .render(
                    Rect::new(inner.x, inner.y + i as u16, inner.width, 1),
                    frame,
                );
        }
    }
}

impl Screen for NotificationsScreen {
    type Message = AppMsg;

    fn update(&mut self, event: &Event) -> Cmd<AppMsg> {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event
        {
            match code {
                KeyCode::Left => {
                    self.tab = self.tab.prev();
                    self.selected = 0;
                    return Cmd::None;
                }
                KeyCode::Right => {
                    self.tab = self.tab.next();
                    self.selected = 0;
                    return Cmd::None;
                }
                _ => {}
            }
            return match self.tab {
                Tab::Settings => {
                    self.update_settings(*code);
                    Cmd::None
                }
                _ => self.update_feed(*code),
            };
        }
        Cmd::None
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.is_empty() {
            return;
        }
        let rows = Flex::vertical()
            .constraints([
                Constraint::Fixed(1),
                Constraint::Min(5),
                Constraint::Fixed(1),
            ])
            .split(area);

        self.render_tabs(frame, rows[0]);

        let block = Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(self.tab.label())
            .title_alignment(Alignment::Center)
            .style(theme::panel_border_style(
                true,
                theme::screen_accent::NOTIFICATIONS,
            ));
        let inner = block.inner(rows[1]);
        block.render(rows[1], frame);

        if !inner.is_empty() {
            match self.tab {
                Tab::Settings => self.render_settings(frame, inner),
                _ => self.render_feed(frame, inner),
            }
        }

        Paragraph::new(self.status_text.as_str())
            .style(theme::muted())
            .render(rows[2], frame);
    }

    fn keybindings(&self) -> Vec<HelpEntry> {
        vec![
            HelpEntry {
                key: "←/→",
                action: "Switch tab",
            },
            HelpEntry {
                key: "r",
                action: "Toggle read",
            },
            HelpEntry {
                key: "d",
                action: "Delete notification",
            },
            HelpEntry {
                key: "a",
                action: "Mark all read",
            },
            HelpEntry {
                key: "Enter",
                action: "Open linked screen / toggle setting",
            },
        ]
    }

    fn title(&self) -> &'static str {
        "Notification Center"
    }

    fn tab_label(&self) -> &'static str {
        "Alerts"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ftui_core::event::Modifiers;
    use ftui_render::grapheme_pool::GraphemePool;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        })
    }

    #[test]
    fn unread_count_tracks_toggles() {
        let mut screen = NotificationsScreen::new();
        assert_eq!(screen.unread_count(), 3);
        // First item is unread; toggling reads it.
        screen.toggle_read();
        assert_eq!(screen.unread_count(), 2);
        screen.selected = 0;
        screen.toggle_read();
        assert_eq!(screen.unread_count(), 3);
    }

    #[test]
    fn mark_all_read_is_idempotent() {
        let mut screen = NotificationsScreen::new();
        screen.mark_all_read();
        assert_eq!(screen.unread_count(), 0);
        screen.mark_all_read();
        assert_eq!(screen.unread_count(), 0);
    }

    #[test]
    fn deleting_unread_item_decrements_unread_count() {
        let mut screen = NotificationsScreen::new();
        screen.delete_selected();
        assert_eq!(screen.len(), 5);
        assert_eq!(screen.unread_count(), 2);
    }

    #[test]
    fn unread_tab_only_lists_unread_ids() {
        let mut screen = NotificationsScreen::new();
        screen.tab = Tab::Unread;
        let ids = screen.visible_ids();
        assert_eq!(ids, vec!["1".to_string(), "2".into(), "6".into()]);
    }

    #[test]
    fn enter_follows_task_action() {
        let mut screen = NotificationsScreen::new();
        let cmd = screen.update(&press(KeyCode::Enter));
        assert!(matches!(cmd, Cmd::Msg(AppMsg::Navigate(ScreenId::Tasks))));
        // Following marks the item read.
        assert_eq!(screen.unread_count(), 2);
    }

    #[test]
    fn enter_follows_robot_action_with_id() {
        let mut screen = NotificationsScreen::new();
        screen.selected = 1; // battery warning for EB-003
        let cmd = screen.update(&press(KeyCode::Enter));
        match cmd {
            Cmd::Msg(AppMsg::OpenRobot { robot_id }) => assert_eq!(robot_id, "EB-003"),
            other => panic!("expected OpenRobot, got {other:?}"),
        }
    }

    #[test]
    fn settings_toggle_flips_preference() {
        let mut screen = NotificationsScreen::new();
        screen.tab = Tab::Settings;
        assert!(screen.preferences[0].enabled);
        let _ = screen.update(&press(KeyCode::Char(' ')));
        assert!(!screen.preferences[0].enabled);
        // Email notifications default off.
        assert!(!screen.preferences[4].enabled);
    }

    #[test]
    fn renders_every_tab() {
        let mut screen = NotificationsScreen::new();
        for _ in 0..3 {
            let mut pool = GraphemePool::new();
            let mut frame = Frame::new(120, 40, &mut pool);
            screen.view(&mut frame, Rect::new(0, 0, 120, 40));
            let _ = screen.update(&press(KeyCode::Right));
        }
    }
}
