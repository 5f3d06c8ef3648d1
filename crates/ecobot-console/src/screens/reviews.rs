#![forbid(unsafe_code)]

//! Review center: pending reports, submitted reviews, and rating analytics.
//!
//! Submitting a review runs the simulated backend call off-thread. The
//! completion message carries the submission epoch plus the full review
//! payload; the review is only applied when the epoch still matches, so a
//! canceled or superseded submission cannot clobber newer state.

use std::time::Duration;

use ftui_core::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ftui_core::geometry::Rect;
use ftui_layout::{Constraint, Flex};
use ftui_render::frame::Frame;
use ftui_runtime::Cmd;
use ftui_style::Style;
use ftui_widgets::Widget;
use ftui_widgets::block::{Alignment, Block};
use ftui_widgets::borders::{BorderType, Borders};
use ftui_widgets::input::TextInput;
use ftui_widgets::paragraph::Paragraph;
use ftui_widgets::progress::MiniBar;

use super::{HelpEntry, Screen};
use crate::app::AppMsg;
use crate::model::entities::{CompletedTask, Review};
use crate::model::sample;
use crate::model::stats;
use crate::model::store::Collection;
use crate::theme;

/// Simulated latency of the review submission call.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Pending,
    Completed,
    Analytics,
}

impl Tab {
    fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Completed => "Completed",
            Self::Analytics => "Analytics",
        }
    }

    fn next(self) -> Self {
        match self {
            Self::Pending => Self::Completed,
            Self::Completed => Self::Analytics,
            Self::Analytics => Self::Pending,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Pending => Self::Analytics,
            Self::Completed => Self::Pending,
            Self::Analytics => Self::Completed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormFocus {
    Rating,
    Comment,
    Public,
}

struct ReviewForm {
    task_id: String,
    task_location: String,
    rating: u8,
    comment: TextInput,
    is_public: bool,
    focus: FormFocus,
    error: Option<String>,
}

impl ReviewForm {
    fn new(task: &CompletedTask) -> Self {
        Self {
            task_id: task.id.clone(),
            task_location: task.location.clone(),
            rating: 0,
            comment: TextInput::new()
                .with_placeholder("How did the robot do?")
                .with_style(Style::new().fg(theme::fg::PRIMARY)),
            is_public: true,
            focus: FormFocus::Rating,
            error: None,
        }
    }

    fn cycle_focus(&mut self, forward: bool) {
        self.focus = match (self.focus, forward) {
            (FormFocus::Rating, true) => FormFocus::Comment,
            (FormFocus::Comment, true) => FormFocus::Public,
            (FormFocus::Public, true) => FormFocus::Rating,
            (FormFocus::Rating, false) => FormFocus::Public,
            (FormFocus::Comment, false) => FormFocus::Rating,
            (FormFocus::Public, false) => FormFocus::Comment,
        };
        self.comment.set_focused(self.focus == FormFocus::Comment);
    }
}

pub struct ReviewsScreen {
    completed: Collection<CompletedTask>,
    reviews: Collection<Review>,
    tab: Tab,
    selected: usize,
    form: Option<ReviewForm>,
    /// True while a submission is in flight.
    pub submitting: bool,
    /// Bumped per submission; stale completions are discarded upstream.
    pub epoch: u64,
    next_review_id: u64,
    status_text: String,
}

impl Default for ReviewsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewsScreen {
    pub fn new() -> Self {
        Self {
            completed: Collection::from_items(sample::completed_tasks()),
            reviews: Collection::from_items(sample::reviews()),
            tab: Tab::Pending,
            selected: 0,
            form: None,
            submitting: false,
            epoch: 0,
            // Sample catalog ships reviews "1" and "2".
            next_review_id: 3,
            status_text: "←/→: switch tab | Enter: review selected task".into(),
        }
    }

    fn pending(&self) -> Vec<&CompletedTask> {
        self.completed.iter().filter(|t| !t.has_review).collect()
    }

    pub fn pending_count(&self) -> usize {
        self.pending().len()
    }

    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }

    fn list_len(&self) -> usize {
        match self.tab {
            Tab::Pending => self.pending().len(),
            Tab::Completed => self.reviews.len(),
            Tab::Analytics => 0,
        }
    }

    fn open_form(&mut self) {
        let Some(task) = self.pending().get(self.selected).copied() else {
            return;
        };
        self.form = Some(ReviewForm::new(task));
        self.status_text = "1-5: rate | Tab: next field | Enter: submit | Esc: cancel".into();
    }

    fn submit(&mut self) -> Cmd<AppMsg> {
        let Some(form) = self.form.as_mut() else {
            return Cmd::None;
        };
        if form.rating == 0 {
            form.error = Some("Select a rating before submitting".into());
            return Cmd::None;
        }
        form.error = None;

        self.submitting = true;
        self.epoch += 1;
        let epoch = self.epoch;
        let task_id = form.task_id.clone();
        let rating = form.rating;
        let comment = form.comment.value().trim().to_string();
        let is_public = form.is_public;
        tracing::info!(target: "ecobot.reviews", task = %task_id, rating, epoch, "review submitted");
        Cmd::task(move || {
            std::thread::sleep(SUBMIT_DELAY);
            AppMsg::ReviewSubmitted {
                epoch,
                task_id,
                rating,
                comment,
                is_public,
            }
        })
    }

    /// Apply a non-stale submission: append the review and mark the task
    /// reviewed in the same step, so the pending list and review list can
    /// never disagree.
    pub fn apply_submission(&mut self, task_id: &str, rating: u8, comment: String, is_public: bool) {
        let review = Review {
            id: self.next_review_id.to_string(),
            task_id: task_id.to_string(),
            rating,
            comment: comment.clone(),
            timestamp: "Just now".into(),
            is_public,
        };
        self.next_review_id += 1;

        if let Err(err) = self.reviews.add(review) {
            tracing::warn!(target: "ecobot.reviews", %err, "review rejected");
            return;
        }
        let marked = self.completed.update(task_id, |task| {
            task.has_review = true;
            task.rating = Some(rating);
            task.review_text = Some(comment);
        });
        if let Err(err) = marked {
            tracing::warn!(target: "ecobot.reviews", %err, "completed task missing");
        }

        self.submitting = false;
        self.form = None;
        self.selected = 0;
        self.status_text = format!("Review for task {task_id} published");
    }

    fn update_form(&mut self, event: &Event) -> Cmd<AppMsg> {
        let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return Cmd::None;
        };

        match code {
            KeyCode::Escape => {
                self.form = None;
                self.status_text = "Review canceled".into();
                return Cmd::None;
            }
            KeyCode::Tab => {
                if let Some(form) = self.form.as_mut() {
                    form.cycle_focus(true);
                }
                return Cmd::None;
            }
            KeyCode::BackTab => {
                if let Some(form) = self.form.as_mut() {
                    form.cycle_focus(false);
                }
                return Cmd::None;
            }
            KeyCode::Enter => return self.submit(),
            _ => {}
        }

        let Some(form) = self.form.as_mut() else {
            return Cmd::None;
        };
        match form.focus {
            FormFocus::Rating => match code {
                KeyCode::Char(c @ '1'..='5') => {
                    form.rating = *c as u8 - b'0';
                }
                KeyCode::Left => form.rating = form.rating.saturating_sub(1),
                KeyCode::Right => form.rating = (form.rating + 1).min(5),
                _ => {}
            },
            FormFocus::Comment => {
                form.comment.handle_event(event);
            }
            FormFocus::Public => {
                if matches!(code, KeyCode::Char(' ')) {
                    form.is_public = !form.is_public;
                }
            }
        }
        Cmd::None
    }

    fn update_lists(&mut self, event: &Event) -> Cmd<AppMsg> {
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
                }
                KeyCode::Right => {
                    self.tab = self.tab.next();
                    self.selected = 0;
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.selected = self.selected.saturating_sub(1);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if self.selected + 1 < self.list_len() {
                        self.selected += 1;
                    }
                }
                KeyCode::Enter => {
                    if self.tab == Tab::Pending {
                        self.open_form();
                    }
                }
                _ => {}
            }
        }
        Cmd::None
    }

    fn stars(rating: u8) -> String {
        let mut out = String::new();
        for i in 1..=5u8 {
            out.push_str(if i <= rating {
                theme::icons::STAR_FILLED
            } else {
                theme::icons::STAR_EMPTY
            });
        }
        out
    }

    fn render_tabs(&self, frame: &mut Frame, area: Rect) {
        if area.is_empty() {
            return;
        }
        let pending = self.pending().len();
        let labels = [
            (Tab::Pending, format!("Pending ({pending})")),
            (Tab::Completed, format!("Completed ({})", self.reviews.len())),
            (Tab::Analytics, "Analytics".to_string()),
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

    fn render_pending(&self, frame: &mut Frame, inner: Rect) {
        let pending = self.pending();
        if pending.is_empty() {
            Paragraph::new("All completed tasks are reviewed")
                .style(theme::success())
                .render(inner, frame);
            return;
        }
        for (i, task) in pending.iter().enumerate() {
            if i as u16 >= inner.height {
                break;
            }
            let is_selected = i == self.selected;
            let line = format!(
                "{}{} · {} by {} · took {}",
                theme::selection_indicator(is_selected),
                task.location,
                task.completed_at,
                task.robot_id,
                task.duration,
            );
            Paragraph::new(line)
                .style(theme::list_item_style(is_selected, true))
                .render(
                    Rect::new(inner.x, inner.y + i as u16, inner.width, 1),
                    frame,
                );
        }
    }

    fn render_completed(&self, frame: &mut Frame, inner: Rect) {
        if self.reviews.is_empty() {
            Paragraph::new("No reviews yet")
                .style(theme::muted())
                .render(inner, frame);
            return;
        }
        let mut y = inner.y;
        for (i, review) in self.reviews.iter().enumerate() {
            if y + 1 >= inner.y + inner.height {
                break;
            }
            let is_selected = i == self.selected;
            let visibility = if review.is_public { "public" } else { "private" };
            let header = format!(
                "{}{}  task #{} · {} · {}",
                theme::selection_indicator(is_selected),
                Self::stars(review.rating),
                review.task_id,
                review.timestamp,
                visibility,
            );
            Paragraph::new(header)
                .style(theme::list_item_style(is_selected, true))
                .render(Rect::new(inner.x, y, inner.width, 1), frame);
            Paragraph::new(format!("  {}", review.comment))
                .style(theme::muted())
                .render(Rect::new(inner.x, y + 1, inner.width, 1), frame);
            y += 2;
        }
    }

    fn render_analytics(&self, frame: &mut Frame, inner: Rect) {
        let reviews: Vec<Review> = self.reviews.iter().cloned().collect();
        let average = stats::average_rating(&reviews);
        let distribution = stats::rating_distribution(&reviews);
        let total = reviews.len();

        let rows = Flex::vertical()
            .constraints([
                Constraint::Fixed(1), // average
                Constraint::Fixed(1),
                Constraint::Fixed(5), // distribution
                Constraint::Fixed(1),
                Constraint::Fixed(1), // trend
                Constraint::Min(0),
            ])
            .split(inner);

        Paragraph::new(format!(
            "Average rating: {average:.1} {} ({total} reviews)",
            Self::stars(average.round() as u8)
        ))
        .style(theme::title())
        .render(rows[0], frame);

        // 5-star row first.
        for (row, stars) in (1..=5u8).rev().enumerate() {
            let count = distribution[usize::from(stars - 1)];
            let y = rows[2].y + row as u16;
            if y >= rows[2].y + rows[2].height {
                break;
            }
            let label_width = 4u16.min(rows[2].width);
            Paragraph::new(format!("{stars}{}", theme::icons::STAR_FILLED))
                .style(theme::body())
                .render(Rect::new(rows[2].x, y, label_width, 1), frame);
            let bar_width = rows[2].width.saturating_sub(label_width);
            if bar_width >= 6 {
                let ratio = if total == 0 {
                    0.0
                } else {
                    count as f64 / total as f64
                };
                MiniBar::new(ratio, bar_width).show_percent(true).render(
                    Rect::new(rows[2].x + label_width, y, bar_width, 1),
                    frame,
                );
            }
        }

        Paragraph::new("Sentiment trend: 85% positive / 15% negative")
            .style(theme::body())
            .render(rows[4], frame);
    }

    fn render_form(&self, frame: &mut Frame, area: Rect) {
        let Some(form) = self.form.as_ref() else {
            return;
        };
        let title = format!("Review: {}", form.task_location);
        let block = Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .title(title.as_str())
            .title_alignment(Alignment::Center)
            .style(theme::panel_border_style(true, theme::screen_accent::REVIEWS));
        let inner = block.inner(area);
        block.render(area, frame);
        if inner.height < 6 {
            return;
        }

        let rows = Flex::vertical()
            .constraints([
                Constraint::Fixed(1), // rating
                Constraint::Fixed(1), // comment label
                Constraint::Fixed(1), // comment input
                Constraint::Fixed(1), // public toggle
                Constraint::Fixed(1), // submit hint / status
                Constraint::Min(0),   // error
            ])
            .split(inner);

        let focus_marker = |focused: bool| if focused { "» " } else { "  " };
        Paragraph::new(format!(
            "{}Rating: {}",
            focus_marker(form.focus == FormFocus::Rating),
            Self::stars(form.rating)
        ))
        .style(if form.focus == FormFocus::Rating {
            theme::title()
        } else {
            theme::body()
        })
        .render(rows[0], frame);

        Paragraph::new(format!(
            "{}Comment:",
            focus_marker(form.focus == FormFocus::Comment)
        ))
        .style(theme::muted())
        .render(rows[1], frame);
        Widget::render(&form.comment, rows[2], frame);

        let toggle = if form.is_public {
            theme::icons::CHECK
        } else {
            theme::icons::CROSS
        };
        Paragraph::new(format!(
            "{}[{}] Share publicly (Space toggles)",
            focus_marker(form.focus == FormFocus::Public),
            toggle
        ))
        .style(theme::body())
        .render(rows[3], frame);

        let (text, style) = if self.submitting {
            ("Submitting review...", theme::warning())
        } else {
            ("[ Enter ] Submit review", theme::success())
        };
        Paragraph::new(text).style(style).render(rows[4], frame);

        if let Some(error) = &form.error {
            Paragraph::new(error.as_str())
                .style(theme::error_style())
                .render(rows[5], frame);
        }
    }
}

impl Screen for ReviewsScreen {
    type Message = AppMsg;

    fn update(&mut self, event: &Event) -> Cmd<AppMsg> {
        if self.submitting {
            return Cmd::None;
        }
        if self.form.is_some() {
            self.update_form(event)
        } else {
            self.update_lists(event)
        }
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
            .style(theme::content_border());
        let inner = block.inner(rows[1]);
        block.render(rows[1], frame);

        if !inner.is_empty() {
            match self.tab {
                Tab::Pending => self.render_pending(frame, inner),
                Tab::Completed => self.render_completed(frame, inner),
                Tab::Analytics => self.render_analytics(frame, inner),
            }
        }

        // Rating form overlays the middle of the content area.
        if self.form.is_some() && rows[1].width > 20 && rows[1].height > 10 {
            let w = rows[1].width.saturating_sub(10).min(60);
            let h = 9u16;
            let x = rows[1].x + (rows[1].width - w) / 2;
            let y = rows[1].y + (rows[1].height - h) / 2;
            self.render_form(frame, Rect::new(x, y, w, h));
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
                key: "j/k",
                action: "Select entry",
            },
            HelpEntry {
                key: "Enter",
                action: "Review task / submit form",
            },
            HelpEntry {
                key: "1-5",
                action: "Set rating (in form)",
            },
            HelpEntry {
                key: "Esc",
                action: "Cancel form",
            },
        ]
    }

    fn title(&self) -> &'static str {
        "Review Center"
    }

    fn tab_label(&self) -> &'static str {
        "Reviews"
    }

    fn wants_text_input(&self) -> bool {
        self.form.is_some() && !self.submitting
    }
}
