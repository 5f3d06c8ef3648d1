#![forbid(unsafe_code)]

//! Streak tracker: streak stats, the 30-day activity calendar, and the
//! achievement list. Calendar data is generated from the configured seed.

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
use ftui_widgets::progress::{MiniBar, ProgressBar};

use super::{HelpEntry, Screen};
use crate::app::AppMsg;
use crate::model::activity::{self, CALENDAR_DAYS};
use crate::model::entities::{Achievement, DayActivity};
use crate::model::sample::{self, StreakStats};
use crate::model::stats;
use crate::theme;

pub struct StreaksScreen {
    stats: StreakStats,
    calendar: Vec<DayActivity>,
    achievements: Vec<Achievement>,
    selected_achievement: usize,
}

/// Color bucket for one calendar cell: none, light, medium, heavy.
fn activity_token(tasks: u8) -> theme::ColorToken {
    match tasks {
        0 => theme::fg::MUTED,
        1..=2 => theme::accent::ACCENT_8,
        3..=4 => theme::accent::SUCCESS,
        _ => theme::accent::WARNING,
    }
}

impl StreaksScreen {
    pub fn new(seed: u64) -> Self {
        Self {
            stats: sample::streak_stats(),
            calendar: activity::generate_activity(seed),
            achievements: sample::achievements(),
            selected_achievement: 0,
        }
    }

    fn consistency(&self) -> u8 {
        stats::percentage(activity::active_days(&self.calendar), CALENDAR_DAYS)
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
            "Current Streak",
            format!("{} {} days", theme::icons::FIRE, self.stats.current_streak),
            theme::accent::WARNING,
        );
        Self::render_stat_card(
            frame,
            cols[1],
            "Longest Streak",
            format!("{} days", self.stats.longest_streak),
            theme::accent::INFO,
        );
        Self::render_stat_card(
            frame,
            cols[2],
            "Total Tasks",
            format!("{}", self.stats.total_tasks),
            theme::accent::SUCCESS,
        );
        Self::render_stat_card(
            frame,
            cols[3],
            "Weekly Average",
            format!("{} tasks", self.stats.weekly_average),
            theme::screen_accent::STREAKS,
        );
    }

    fn render_goal(&self, frame: &mut Frame, area: Rect) {
        if area.is_empty() {
            return;
        }
        let ratio = f64::from(self.stats.current_streak) / f64::from(self.stats.streak_goal);
        ProgressBar::new()
            .ratio(ratio.min(1.0))
            .label(&format!(
                "Goal: {}/{} days",
                self.stats.current_streak, self.stats.streak_goal
            ))
            .style(Style::new().fg(theme::fg::MUTED))
            .gauge_style(
                Style::new()
                    .fg(theme::screen_accent::STREAKS)
                    .bg(theme::alpha::SURFACE),
            )
            .render(area, frame);
    }

    fn render_calendar(&self, frame: &mut Frame, area: Rect) {
        if area.is_empty() || area.height < 4 {
            return;
        }
        let block = Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title("Last 30 Days")
            .title_alignment(Alignment::Center)
            .style(theme::content_border());
        let inner = block.inner(area);
        block.render(area, frame);
        if inner.width < 22 || inner.height < 4 {
            return;
        }

        // 10 columns x 3 rows, oldest day top-left.
        let cols = 10u16;
        for (i, day) in self.calendar.iter().enumerate() {
            let col = i as u16 % cols;
            let row = i as u16 / cols;
            let x = inner.x + col * 2;
            let y = inner.y + row;
            if y >= inner.y + inner.height {
                break;
            }
            let glyph = if day.has_activity { "■" } else { "□" };
            Paragraph::new(glyph)
                .style(Style::new().fg(activity_token(day.tasks_completed)))
                .render(Rect::new(x, y, 2, 1), frame);
        }

        let summary = format!(
            "Active days: {}/{}  Tasks: {}  Consistency: {}%",
            activity::active_days(&self.calendar),
            CALENDAR_DAYS,
            activity::total_tasks(&self.calendar),
            self.consistency(),
        );
        let y = inner.y + inner.height.saturating_sub(1);
        Paragraph::new(summary)
            .style(theme::muted())
            .render(Rect::new(inner.x, y, inner.width, 1), frame);
    }

    fn render_achievements(&self, frame: &mut Frame, area: Rect) {
        if area.is_empty() || area.height < 3 {
            return;
        }
        let unlocked = self.achievements.iter().filter(|a| a.unlocked).count();
        let title = format!("Achievements ({unlocked}/{})", self.achievements.len());
        let block = Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title.as_str())
            .title_alignment(Alignment::Center)
            .style(theme::panel_border_style(true, theme::screen_accent::STREAKS));
        let inner = block.inner(area);
        block.render(area, frame);
        if inner.is_empty() {
            return;
        }

        for (i, achievement) in self.achievements.iter().enumerate() {
            if i as u16 >= inner.height {
                break;
            }
            let is_selected = i == self.selected_achievement;
            let y = inner.y + i as u16;
            let mut x = inner.x;

            let head = format!(
                "{}{} {}",
                theme::selection_indicator(is_selected),
                achievement.icon.glyph(),
                achievement.title,
            );
            let head_width = (inner.width / 2).max(20).min(inner.width);
            let style = if achievement.unlocked {
                theme::list_item_style(is_selected, true)
            } else {
                theme::muted()
            };
            Paragraph::new(head)
                .style(style)
                .render(Rect::new(x, y, head_width, 1), frame);
            x += head_width;

            let rest = (inner.x + inner.width).saturating_sub(x);
            if achievement.unlocked {
                if rest > 0 {
                    let when = achievement
                        .unlocked_date
                        .as_deref()
                        .unwrap_or("unlocked");
                    Paragraph::new(format!("{} {}", theme::icons::CHECK, when))
                        .style(theme::success())
                        .render(Rect::new(x, y, rest, 1), frame);
                }
            } else if rest >= 8 {
                let ratio = f64::from(achievement.progress.min(achievement.target))
                    / f64::from(achievement.target.max(1));
                MiniBar::new(ratio, rest)
                    .show_percent(true)
                    .render(Rect::new(x, y, rest, 1), frame);
            }
        }
    }
}

impl Screen for StreaksScreen {
    type Message = AppMsg;

    fn update(&mut self, event: &Event) -> Cmd<AppMsg> {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event
        {
            match code {
                KeyCode::Up | KeyCode::Char('k') => {
                    self.selected_achievement = self.selected_achievement.saturating_sub(1);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if self.selected_achievement + 1 < self.achievements.len() {
                        self.selected_achievement += 1;
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
                Constraint::Fixed(5), // stat cards
                Constraint::Fixed(1), // goal bar
                Constraint::Fixed(7), // calendar
                Constraint::Min(4),   // achievements
                Constraint::Fixed(1), // footer
            ])
            .split(area);

        self.render_stats(frame, rows[0]);
        self.render_goal(frame, rows[1]);
        self.render_calendar(frame, rows[2]);
        self.render_achievements(frame, rows[3]);

        let footer = format!(
            "{} Keep it up! {} more days to reach your streak goal.",
            theme::icons::FIRE,
            self.stats
                .streak_goal
                .saturating_sub(self.stats.current_streak)
        );
        Paragraph::new(footer)
            .style(theme::subtitle())
            .render(rows[4], frame);
    }

    fn keybindings(&self) -> Vec<HelpEntry> {
        vec![HelpEntry {
            key: "j/k",
            action: "Select achievement",
        }]
    }

    fn title(&self) -> &'static str {
        "Streaks & Achievements"
    }

    fn tab_label(&self) -> &'static str {
        "Streaks"
    }
}
