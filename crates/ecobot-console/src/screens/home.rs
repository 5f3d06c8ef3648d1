#![forbid(unsafe_code)]

//! Home dashboard: greeting, fleet stats, quick actions, recent tasks.

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
use ftui_widgets::progress::MiniBar;

use super::{HelpEntry, Screen};
use crate::app::{AppMsg, ScreenId};
use crate::model::entities::{Session, TaskStatus};
use crate::model::sample::{self, HomeStats};
use crate::theme;

struct QuickAction {
    key: char,
    label: &'static str,
    target: ScreenId,
}

const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        key: 'p',
        label: "Pin a cleanup location",
        target: ScreenId::Locations,
    },
    QuickAction {
        key: 'c',
        label: "Capture site photos",
        target: ScreenId::Capture,
    },
    QuickAction {
        key: 't',
        label: "Manage tasks",
        target: ScreenId::Tasks,
    },
    QuickAction {
        key: 'r',
        label: "Fleet status",
        target: ScreenId::Robots,
    },
    QuickAction {
        key: 'v',
        label: "Review completed work",
        target: ScreenId::Reviews,
    },
    QuickAction {
        key: 'n',
        label: "Notification center",
        target: ScreenId::Notifications,
    },
    QuickAction {
        key: 's',
        label: "Streaks & achievements",
        target: ScreenId::Streaks,
    },
];

pub struct HomeScreen {
    session: Option<Session>,
    stats: HomeStats,
    recent: Vec<(String, TaskStatus, String)>,
    unread_badge: usize,
    selected_action: usize,
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeScreen {
    pub fn new() -> Self {
        Self {
            session: None,
            stats: sample::home_stats(),
            recent: sample::recent_tasks(),
            unread_badge: 0,
            selected_action: 0,
        }
    }

    pub fn set_session(&mut self, session: Option<Session>) {
        self.session = session;
    }

    /// Unread notification count shown next to the bell icon.
    pub fn set_unread_badge(&mut self, unread: usize) {
        self.unread_badge = unread;
    }

    fn select_prev(&mut self) {
        if self.selected_action > 0 {
            self.selected_action -= 1;
        }
    }

    fn select_next(&mut self) {
        if self.selected_action + 1 < QUICK_ACTIONS.len() {
            self.selected_action += 1;
        }
    }

    fn render_greeting(&self, frame: &mut Frame, area: Rect) {
        if area.is_empty() {
            return;
        }
        let name = self
            .session
            .as_ref()
            .map_or("operator", |s| s.display_name.as_str());
        let greeting = format!("{} Welcome back, {}!", theme::icons::ROBOT, name);
        Paragraph::new(greeting).style(theme::title()).render(area, frame);

        let bell = format!("{} {}", theme::icons::BELL, self.unread_badge);
        let bell_width = 6u16;
        if area.width > bell_width {
            let bell_area = Rect::new(area.x + area.width - bell_width, area.y, bell_width, 1);
            let style = if self.unread_badge > 0 {
                theme::warning()
            } else {
                theme::muted()
            };
            Paragraph::new(bell).style(style).render(bell_area, frame);
        }
    }

    fn render_stat_card(
        frame: &mut Frame,
        area: Rect,
        title: &str,
        value: String,
        accent: theme::ColorToken,
    ) {
        if area.is_empty() || area.height < 3 {
            return;
        }
        let block = Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .title_alignment(Alignment::Center)
            .style(Style::new().fg(accent));
        let inner = block.inner(area);
        block.render(area, frame);
        Paragraph::new(value)
            .style(theme::title())
            .render(inner, frame);
    }

    fn render_stats(&self, frame: &mut Frame, area: Rect) {
        if area.is_empty() {
            return;
        }
        let cols = Flex::horizontal()
            .constraints([
                Constraint::Percentage(25.0),
                Constraint::Percentage(25.0),
                Constraint::Percentage(25.0),
                Constraint::Percentage(25.0),
            ])
            .split(area);

        Self::render_stat_card(
            frame,
            cols[0],
            "Active Robots",
            format!("{} {}", theme::icons::ROBOT, self.stats.active_robots),
            theme::accent::SUCCESS,
        );
        Self::render_stat_card(
            frame,
            cols[1],
            "Completed Tasks",
            format!("{} {}", theme::icons::CHECK, self.stats.completed_tasks),
            theme::accent::INFO,
        );
        Self::render_stat_card(
            frame,
            cols[2],
            "Day Streak",
            format!("{} {}", theme::icons::FIRE, self.stats.day_streak),
            theme::accent::WARNING,
        );

        // Fourth card carries a progress bar instead of a bare number.
        let area = cols[3];
        if !area.is_empty() && area.height >= 3 {
            let block = Block::new()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title("Today's Progress")
                .title_alignment(Alignment::Center)
                .style(Style::new().fg(theme::screen_accent::HOME));
            let inner = block.inner(area);
            block.render(area, frame);
            if !inner.is_empty() {
                MiniBar::new(f64::from(self.stats.today_progress) / 100.0, inner.width)
                    .show_percent(true)
                    .render(Rect::new(inner.x, inner.y, inner.width, 1), frame);
            }
        }
    }

    fn render_quick_actions(&self, frame: &mut Frame, area: Rect) {
        if area.is_empty() || area.height < 3 {
            return;
        }
        let block = Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title("Quick Actions")
            .title_alignment(Alignment::Center)
            .style(theme::panel_border_style(true, theme::screen_accent::HOME));
        let inner = block.inner(area);
        block.render(area, frame);

        for (i, action) in QUICK_ACTIONS.iter().enumerate() {
            if i as u16 >= inner.height {
                break;
            }
            let is_selected = i == self.selected_action;
            let row = Rect::new(inner.x, inner.y + i as u16, inner.width, 1);
            let line = format!(
                "{}[{}] {}",
                theme::selection_indicator(is_selected),
                action.key,
                action.label
            );
            Paragraph::new(line)
                .style(theme::list_item_style(is_selected, true))
                .render(row, frame);
        }
    }

    fn render_recent_tasks(&self, frame: &mut Frame, area: Rect) {
        if area.is_empty() || area.height < 3 {
            return;
        }
        let block = Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title("Recent Tasks")
            .title_alignment(Alignment::Center)
            .style(theme::content_border());
        let inner = block.inner(area);
        block.render(area, frame);

        for (i, (location, status, when)) in self.recent.iter().enumerate() {
            if i as u16 >= inner.height {
                break;
            }
            let y = inner.y + i as u16;
            let status_width = 13u16.min(inner.width);
            Paragraph::new(format!("{:12}", status.label()))
                .style(theme::task_status_style(*status))
                .render(Rect::new(inner.x, y, status_width, 1), frame);

            let rest = inner.width.saturating_sub(status_width);
            if rest > 0 {
                Paragraph::new(format!("{location}  ({when})"))
                    .style(theme::body())
                    .render(Rect::new(inner.x + status_width, y, rest, 1), frame);
            }
        }
    }
}

impl Screen for HomeScreen {
    type Message = AppMsg;

    fn update(&mut self, event: &Event) -> Cmd<AppMsg> {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event
        {
            match code {
                KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
                KeyCode::Down | KeyCode::Char('j') => self.select_next(),
                KeyCode::Enter => {
                    let target = QUICK_ACTIONS[self.selected_action].target;
                    return Cmd::msg(AppMsg::Navigate(target));
                }
                KeyCode::Char(c) => {
                    let lower = c.to_ascii_lowercase();
                    if let Some(action) = QUICK_ACTIONS.iter().find(|a| a.key == lower) {
                        return Cmd::msg(AppMsg::Navigate(action.target));
                    }
                }
                _ => {}
            }
        }
        Cmd::None
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.is_empty() {
            return;
        }
        let rows = Flex::vertical()
            .constraints([
                Constraint::Fixed(1), // greeting
                Constraint::Fixed(5), // stat cards
                Constraint::Min(5),   // actions + recent
            ])
            .split(area);

        self.render_greeting(frame, rows[0]);
        self.render_stats(frame, rows[1]);

        let cols = Flex::horizontal()
            .constraints([Constraint::Percentage(50.0), Constraint::Percentage(50.0)])
            .split(rows[2]);
        self.render_quick_actions(frame, cols[0]);
        self.render_recent_tasks(frame, cols[1]);
    }

    fn keybindings(&self) -> Vec<HelpEntry> {
        vec![
            HelpEntry {
                key: "j/k",
                action: "Select quick action",
            },
            HelpEntry {
                key: "Enter",
                action: "Open selected action",
            },
            HelpEntry {
                key: "p/c/t/r/v/n/s",
                action: "Jump to a screen",
            },
        ]
    }

    fn title(&self) -> &'static str {
        "Dashboard"
    }

    fn tab_label(&self) -> &'static str {
        "Home"
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
    fn quick_action_keys_navigate() {
        let mut screen = HomeScreen::new();
        let cmd = screen.update(&press(KeyCode::Char('p')));
        assert!(matches!(
            cmd,
            Cmd::Msg(AppMsg::Navigate(ScreenId::Locations))
        ));
        let cmd = screen.update(&press(KeyCode::Char('N')));
        assert!(matches!(
            cmd,
            Cmd::Msg(AppMsg::Navigate(ScreenId::Notifications))
        ));
    }

    #[test]
    fn enter_opens_selected_action() {
        let mut screen = HomeScreen::new();
        let _ = screen.update(&press(KeyCode::Down));
        let cmd = screen.update(&press(KeyCode::Enter));
        assert!(matches!(cmd, Cmd::Msg(AppMsg::Navigate(ScreenId::Capture))));
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut screen = HomeScreen::new();
        for _ in 0..20 {
            let _ = screen.update(&press(KeyCode::Down));
        }
        assert_eq!(screen.selected_action, QUICK_ACTIONS.len() - 1);
        for _ in 0..20 {
            let _ = screen.update(&press(KeyCode::Up));
        }
        assert_eq!(screen.selected_action, 0);
    }

    #[test]
    fn renders_with_and_without_session() {
        let mut screen = HomeScreen::new();
        let mut pool = GraphemePool::new();
        let mut frame = Frame::new(120, 40, &mut pool);
        screen.view(&mut frame, Rect::new(0, 0, 120, 40));

        screen.set_session(Some(Session::new("admin@ecobot.com")));
        screen.set_unread_badge(3);
        let mut pool = GraphemePool::new();
        let mut frame = Frame::new(120, 40, &mut pool);
        screen.view(&mut frame, Rect::new(0, 0, 120, 40));
    }
}
