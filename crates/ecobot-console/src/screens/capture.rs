#![forbid(unsafe_code)]

//! Mock camera page for documenting cleanup sites. There is no real camera
//! behind it; pressing the shutter just counts frames.

use ftui_core::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ftui_core::geometry::Rect;
use ftui_layout::{Constraint, Flex};
use ftui_render::frame::Frame;
use ftui_runtime::Cmd;
use ftui_style::{Style, StyleFlags};
use ftui_widgets::Widget;
use ftui_widgets::block::{Alignment, Block};
use ftui_widgets::borders::{BorderType, Borders};
use ftui_widgets::paragraph::Paragraph;

use super::{HelpEntry, Screen};
use crate::app::AppMsg;
use crate::theme;

pub struct CaptureScreen {
    captures: u32,
    status_text: String,
    /// Drives the blinking record indicator.
    tick_count: u64,
}

impl Default for CaptureScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl CaptureScreen {
    pub fn new() -> Self {
        Self {
            captures: 0,
            status_text: "Align the site in the frame, then press c".into(),
            tick_count: 0,
        }
    }

    fn capture(&mut self) {
        self.captures += 1;
        self.status_text = format!("{} Captured photo #{}", theme::icons::CAMERA, self.captures);
        tracing::info!(target: "ecobot.capture", count = self.captures, "photo captured");
    }

    fn render_viewfinder(&self, frame: &mut Frame, area: Rect) {
        if area.is_empty() || area.height < 5 {
            return;
        }
        let block = Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .title("Viewfinder")
            .title_alignment(Alignment::Center)
            .style(theme::panel_border_style(true, theme::screen_accent::CAPTURE));
        let inner = block.inner(area);
        block.render(area, frame);
        if inner.width < 8 || inner.height < 4 {
            return;
        }

        // Rule-of-thirds framing guide.
        for i in 1..3u16 {
            let x = inner.x + inner.width * i / 3;
            for y in inner.y..inner.y + inner.height {
                Paragraph::new("┆")
                    .style(theme::muted())
                    .render(Rect::new(x, y, 1, 1), frame);
            }
            let y = inner.y + inner.height * i / 3;
            for x in inner.x..inner.x + inner.width {
                Paragraph::new("┄")
                    .style(theme::muted())
                    .render(Rect::new(x, y, 1, 1), frame);
            }
        }

        let center_y = inner.y + inner.height / 2;
        Paragraph::new("[ Site preview unavailable in console mode ]")
            .style(theme::muted())
            .render(Rect::new(inner.x, center_y, inner.width, 1), frame);

        // Blinking REC marker, camera-style.
        if self.tick_count % 10 < 5 {
            Paragraph::new("● REC")
                .style(Style::new().fg(theme::accent::ERROR).attrs(StyleFlags::BOLD))
                .render(Rect::new(inner.x + 1, inner.y, 6, 1), frame);
        }

        let count = format!("{} {}", theme::icons::CAMERA, self.captures);
        let w = 6u16.min(inner.width);
        Paragraph::new(count).style(theme::body()).render(
            Rect::new(inner.x + inner.width - w, inner.y, w, 1),
            frame,
        );
    }
}

impl Screen for CaptureScreen {
    type Message = AppMsg;

    fn update(&mut self, event: &Event) -> Cmd<AppMsg> {
        if let Event::Key(KeyEvent {
            code: KeyCode::Char('c' | 'C'),
            kind: KeyEventKind::Press,
            ..
        }) = event
        {
            self.capture();
        }
        Cmd::None
    }

    fn tick(&mut self, tick_count: u64) {
        self.tick_count = tick_count;
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.is_empty() {
            return;
        }
        let rows = Flex::vertical()
            .constraints([Constraint::Min(5), Constraint::Fixed(1)])
            .split(area);
        self.render_viewfinder(frame, rows[0]);
        Paragraph::new(self.status_text.as_str())
            .style(theme::muted())
            .render(rows[1], frame);
    }

    fn keybindings(&self) -> Vec<HelpEntry> {
        vec![HelpEntry {
            key: "c",
            action: "Capture photo",
        }]
    }

    fn title(&self) -> &'static str {
        "Site Capture"
    }

    fn tab_label(&self) -> &'static str {
        "Capture"
    }
}
