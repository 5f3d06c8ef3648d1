#![forbid(unsafe_code)]

//! Task management: today's cleaning schedule with status counts, progress,
//! and per-task details.
//!
//! Start/pause/stop keys only log; the mock fleet service owns the real
//! lifecycle, so the console never mutates task state itself.

use ftui_core::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ftui_core::geometry::Rect;
use ftui_layout::{Constraint, Flex};
use ftui_render::frame::Frame;
use ftui_runtime::Cmd;
use ftui_widgets::Widget;
use ftui_widgets::block::{Alignment, Block};
use ftui_widgets::borders::{BorderType, Borders};
use ftui_widgets::paragraph::Paragraph;
use ftui_widgets::progress::MiniBar;

use super::{HelpEntry, Screen};
use crate::app::{AppMsg, ScreenId};
use crate::model::entities::{Task, TaskStatus};
use crate::model::sample;
use crate::model::stats;
use crate::model::store::Collection;
use crate::theme;

pub struct TasksScreen {
    tasks: Collection<Task>,
    selected: usize,
    status_text: String,
}

impl Default for TasksScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl TasksScreen {
    pub fn new() -> Self {
        Self {
            tasks: Collection::from_items(sample::tasks()),
            selected: 0,
            status_text: "j/k: select | s/p/x: start/pause/stop | Enter: open report".into(),
        }
    }

    fn selected_task(&self) -> Option<&Task> {
        self.tasks.as_slice().get(self.selected)
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn select_next(&mut self) {
        if self.selected + 1 < self.tasks.len() {
            self.selected += 1;
        }
    }

    fn request_control(&mut self, verb: &str) {
        let Some(task) = self.selected_task() else {
            return;
        };
        tracing::info!(target: "ecobot.tasks", task = %task.id, verb, "control request sent");
        self.status_text = format!("Sent {verb} request for {}", task.location);
    }

    fn open_selected(&self) -> Cmd<AppMsg> {
        match self.selected_task() {
            Some(task) if task.status == TaskStatus::Completed => {
                Cmd::msg(AppMsg::Navigate(ScreenId::Reviews))
            }
            _ => Cmd::None,
        }
    }

    fn render_counts(&self, frame: &mut Frame, area: Rect) {
        if area.is_empty() {
            return;
        }
        let counts = stats::task_status_counts(self.tasks.as_slice());
        let mut header = format!(
            "Pending: {}  Assigned: {}  In Progress: {}  Completed: {}",
            counts.pending, counts.assigned, counts.in_progress, counts.completed
        );
        if counts.paused > 0 {
            header.push_str(&format!("  Paused: {}", counts.paused));
        }
        Paragraph::new(header).style(theme::body()).render(area, frame);
    }

    fn render_list(&self, frame: &mut Frame, area: Rect) {
        if area.is_empty() || area.height < 3 {
            return;
        }
        let block = Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title("Today's Schedule")
            .title_alignment(Alignment::Center)
            .style(theme::panel_border_style(true, theme::screen_accent::TASKS));
        let inner = block.inner(area);
        block.render(area, frame);
        if inner.is_empty() {
            return;
        }

        for (i, task) in self.tasks.iter().enumerate() {
            if i as u16 >= inner.height {
                break;
            }
            let is_selected = i == self.selected;
            let y = inner.y + i as u16;
            let mut x = inner.x;

            Paragraph::new(theme::selection_indicator(is_selected))
                .style(theme::list_item_style(is_selected, true))
                .render(Rect::new(x, y, 2, 1), frame);
            x += 2;

            let status_width = 12u16;
            Paragraph::new(format!("{:11}", task.status.label()))
                .style(theme::task_status_style(task.status))
                .render(Rect::new(x, y, status_width, 1), frame);
            x += status_width;

            Paragraph::new(format!("[{}] ", task.priority.label()))
                .style(theme::priority_style(task.priority))
                .render(Rect::new(x, y, 9, 1), frame);
            x += 9;

            let bar_width = 12u16;
            let name_width = (inner.x + inner.width)
                .saturating_sub(x)
                .saturating_sub(bar_width + 1);
            if name_width > 0 {
                Paragraph::new(task.location.as_str())
                    .style(theme::list_item_style(is_selected, true))
                    .render(Rect::new(x, y, name_width, 1), frame);
                x += name_width + 1;
            }

            if task.progress > 0 && x + bar_width <= inner.x + inner.width {
                MiniBar::new(f64::from(task.progress) / 100.0, bar_width)
                    .show_percent(true)
                    .render(Rect::new(x, y, bar_width, 1), frame);
            }
        }
    }

    fn render_details(&self, frame: &mut Frame, area: Rect) {
        if area.is_empty() || area.height < 3 {
            return;
        }
        let block = Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title("Task Details")
            .title_alignment(Alignment::Center)
            .style(theme::content_border());
        let inner = block.inner(area);
        block.render(area, frame);
        if inner.is_empty() {
            return;
        }

        let Some(task) = self.selected_task() else {
            Paragraph::new("No task selected")
                .style(theme::muted())
                .render(inner, frame);
            return;
        };

        let mut lines = vec![
            format!("Location: {}", task.location),
            format!("Status: {}", task.status.label()),
            format!("Priority: {}", task.priority.label()),
            format!(
                "Robot: {}",
                task.assigned_robot.as_deref().unwrap_or("unassigned")
            ),
            format!("Deadline: {}", task.deadline),
            format!("Estimated: {}", task.estimated_duration),
            format!("Progress: {}%", task.progress),
        ];
        if let Some(start) = &task.start_time {
            lines.push(format!("Started: {start}"));
        }
        if let Some(end) = &task.end_time {
            lines.push(format!("Finished: {end}"));
        }
        lines.push(String::new());
        lines.push(task.description.clone());
        if task.status == TaskStatus::Completed {
            lines.push("Press Enter to open the cleanup report".into());
        }

        for (i, line) in lines.iter().enumerate() {
            if i as u16 >= inner.height {
                break;
            }
            Paragraph::new(line.as_str()).style(theme::body()).render(
                Rect::new(inner.x, inner.y + i as u16, inner.width, 1),
                frame,
            );
        }
    }
}

impl Screen for TasksScreen {
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
                KeyCode::Char('s' | 'S') => self.request_control("start"),
                KeyCode::Char('p' | 'P') => self.request_control("pause"),
                KeyCode::Char('x' | 'X') => self.request_control("stop"),
                KeyCode::Enter => return self.open_selected(),
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
                Constraint::Fixed(1),
                Constraint::Min(5),
                Constraint::Fixed(1),
            ])
            .split(area);

        self.render_counts(frame, rows[0]);

        let cols = Flex::horizontal()
            .constraints([Constraint::Percentage(60.0), Constraint::Percentage(40.0)])
            .split(rows[1]);
        self.render_list(frame, cols[0]);
        self.render_details(frame, cols[1]);

        Paragraph::new(self.status_text.as_str())
            .style(theme::muted())
            .render(rows[2], frame);
    }

    fn keybindings(&self) -> Vec<HelpEntry> {
        vec![
            HelpEntry {
                key: "j/k",
                action: "Select task",
            },
            HelpEntry {
                key: "s/p/x",
                action: "Start / pause / stop request",
            },
            HelpEntry {
                key: "Enter",
                action: "Open report for completed task",
            },
        ]
    }

    fn title(&self) -> &'static str {
        "Task Management"
    }

    fn tab_label(&self) -> &'static str {
        "Tasks"
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
    fn control_keys_do_not_change_task_state() {
        let mut screen = TasksScreen::new();
        let before = screen.tasks.as_slice().to_vec();
        let _ = screen.update(&press(KeyCode::Char('s')));
        let _ = screen.update(&press(KeyCode::Char('p')));
        let _ = screen.update(&press(KeyCode::Char('x')));
        assert_eq!(screen.tasks.as_slice(), before.as_slice());
        assert!(screen.status_text.contains("stop"));
    }

    #[test]
    fn enter_on_completed_task_opens_reviews() {
        let mut screen = TasksScreen::new();
        // Sample task 4 (index 3) is the completed one.
        for _ in 0..3 {
            let _ = screen.update(&press(KeyCode::Down));
        }
        let cmd = screen.update(&press(KeyCode::Enter));
        assert!(matches!(cmd, Cmd::Msg(AppMsg::Navigate(ScreenId::Reviews))));
    }

    #[test]
    fn enter_on_unfinished_task_is_a_noop() {
        let mut screen = TasksScreen::new();
        let cmd = screen.update(&press(KeyCode::Enter));
        assert!(matches!(cmd, Cmd::None));
    }

    #[test]
    fn status_counts_match_sample() {
        let screen = TasksScreen::new();
        let counts = stats::task_status_counts(screen.tasks.as_slice());
        assert_eq!(counts.pending, 1);
        assert_eq!(counts.assigned, 1);
        assert_eq!(counts.in_progress, 1);
        assert_eq!(counts.completed, 1);
    }

    #[test]
    fn renders_without_panic() {
        let screen = TasksScreen::new();
        let mut pool = GraphemePool::new();
        let mut frame = Frame::new(120, 40, &mut pool);
        screen.view(&mut frame, Rect::new(0, 0, 120, 40));
    }
}
