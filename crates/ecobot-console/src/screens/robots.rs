#![forbid(unsafe_code)]

//! Fleet overview: one card per robot with status, battery, and assignment.

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
use ftui_widgets::progress::ProgressBar;

use super::{HelpEntry, Screen};
use crate::app::AppMsg;
use crate::model::entities::{Robot, RobotStatus};
use crate::model::sample;
use crate::model::store::Collection;
use crate::theme;

pub struct RobotsScreen {
    robots: Collection<Robot>,
    selected: usize,
}

impl Default for RobotsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl RobotsScreen {
    pub fn new() -> Self {
        Self {
            robots: Collection::from_items(sample::robots()),
            selected: 0,
        }
    }

    /// Focus a robot by id, used when a notification links here.
    pub fn focus_robot(&mut self, robot_id: &str) {
        if let Some(idx) = self.robots.iter().position(|r| r.id == robot_id) {
            self.selected = idx;
        }
    }

    fn working_count(&self) -> usize {
        self.robots
            .iter()
            .filter(|r| r.status == RobotStatus::Working)
            .count()
    }

    fn render_card(&self, frame: &mut Frame, area: Rect, robot: &Robot, is_selected: bool) {
        if area.is_empty() || area.height < 5 {
            return;
        }
        let title = format!("{} {} ({})", theme::icons::ROBOT, robot.name, robot.id);
        let block = Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title.as_str())
            .title_alignment(Alignment::Center)
            .style(theme::panel_border_style(
                is_selected,
                theme::screen_accent::ROBOTS,
            ));
        let inner = block.inner(area);
        block.render(area, frame);
        if inner.is_empty() {
            return;
        }

        let rows = Flex::vertical()
            .constraints([
                Constraint::Fixed(1), // status
                Constraint::Fixed(1), // battery
                Constraint::Fixed(1), // task
                Constraint::Min(0),   // location
            ])
            .split(inner);

        Paragraph::new(format!("Status: {}", robot.status.label()))
            .style(theme::robot_status_style(robot.status))
            .render(rows[0], frame);

        ProgressBar::new()
            .ratio(f64::from(robot.battery) / 100.0)
            .label(&format!("Battery {}%", robot.battery))
            .style(Style::new().fg(theme::fg::MUTED))
            .gauge_style(
                Style::new()
                    .fg(theme::battery_token(robot.battery))
                    .bg(theme::alpha::SURFACE),
            )
            .render(rows[1], frame);

        let task = robot
            .current_task
            .as_deref()
            .map_or("none".to_string(), |id| format!("task #{id}"));
        Paragraph::new(format!("Assignment: {task}"))
            .style(theme::body())
            .render(rows[2], frame);

        Paragraph::new(format!("{} {}", theme::icons::PIN, robot.location))
            .style(theme::muted())
            .render(rows[3], frame);
    }
}

impl Screen for RobotsScreen {
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
                    self.selected = self.selected.saturating_sub(1);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if self.selected + 1 < self.robots.len() {
                        self.selected += 1;
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
            .constraints([Constraint::Fixed(1), Constraint::Min(5)])
            .split(area);

        let header = format!(
            "{} of {} robots working",
            self.working_count(),
            self.robots.len()
        );
        Paragraph::new(header).style(theme::body()).render(rows[0], frame);

        let card_height = (rows[1].height / self.robots.len().max(1) as u16).max(6);
        for (i, robot) in self.robots.iter().enumerate() {
            let y = rows[1].y + i as u16 * card_height;
            if y >= rows[1].y + rows[1].height {
                break;
            }
            let height = card_height.min(rows[1].y + rows[1].height - y);
            let card = Rect::new(rows[1].x, y, rows[1].width, height);
            self.render_card(frame, card, robot, i == self.selected);
        }
    }

    fn keybindings(&self) -> Vec<HelpEntry> {
        vec![HelpEntry {
            key: "j/k",
            action: "Select robot",
        }]
    }

    fn title(&self) -> &'static str {
        "Robot Fleet"
    }

    fn tab_label(&self) -> &'static str {
        "Robots"
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
    fn one_robot_working_in_sample_fleet() {
        let screen = RobotsScreen::new();
        assert_eq!(screen.working_count(), 1);
        assert_eq!(screen.robots.len(), 3);
    }

    #[test]
    fn focus_robot_selects_by_id() {
        let mut screen = RobotsScreen::new();
        screen.focus_robot("EB-003");
        assert_eq!(screen.selected, 2);
        screen.focus_robot("EB-999");
        assert_eq!(screen.selected, 2);
    }

    #[test]
    fn selection_is_clamped() {
        let mut screen = RobotsScreen::new();
        for _ in 0..10 {
            let _ = screen.update(&press(KeyCode::Down));
        }
        assert_eq!(screen.selected, 2);
    }

    #[test]
    fn renders_without_panic() {
        let screen = RobotsScreen::new();
        let mut pool = GraphemePool::new();
        let mut frame = Frame::new(120, 40, &mut pool);
        screen.view(&mut frame, Rect::new(0, 0, 120, 40));
    }
}
