#![forbid(unsafe_code)]

//! Shared chrome: tab bar, status bar, and the help overlay.

use ftui_core::geometry::Rect;
use ftui_render::frame::Frame;
use ftui_style::{Style, StyleFlags};
use ftui_text::{Line, Span, Text};
use ftui_widgets::Widget;
use ftui_widgets::block::{Alignment, Block};
use ftui_widgets::borders::{BorderType, Borders};
use ftui_widgets::help::{Help, HelpMode};
use ftui_widgets::paragraph::Paragraph;

use crate::app::ScreenId;
use crate::screens::HelpEntry;
use crate::theme;

/// Alpha applied to the active tab's accent background.
const TAB_ACCENT_ALPHA: u8 = 220;

/// Accent color for a screen's tab and status bar emphasis.
pub fn accent_for(id: ScreenId) -> theme::ColorToken {
    match id {
        ScreenId::Login => theme::screen_accent::LOGIN,
        ScreenId::Home => theme::screen_accent::HOME,
        ScreenId::Locations => theme::screen_accent::LOCATIONS,
        ScreenId::Capture => theme::screen_accent::CAPTURE,
        ScreenId::Tasks => theme::screen_accent::TASKS,
        ScreenId::Robots => theme::screen_accent::ROBOTS,
        ScreenId::Reviews => theme::screen_accent::REVIEWS,
        ScreenId::Notifications => theme::screen_accent::NOTIFICATIONS,
        ScreenId::Streaks => theme::screen_accent::STREAKS,
    }
}

// ---------------------------------------------------------------------------
// Tab bar
// ---------------------------------------------------------------------------

/// Render the numbered tab bar over the post-login screens.
///
/// The active tab gets the screen's accent background plus bold primary
/// text; inactive tabs are muted on the surface color.
pub fn render_tab_bar(current: ScreenId, frame: &mut Frame, area: Rect) {
    let blank = Paragraph::new("").style(theme::tab_bar());
    blank.render(area, frame);

    let mut x = area.x;
    for (i, id) in ScreenId::ALL.iter().copied().enumerate() {
        let key_label = format!("{}", i + 1);
        let label_text = id.tab_label();
        let label_width = 1 + key_label.len() as u16 + 2 + label_text.len() as u16 + 1;

        if x + label_width > area.x + area.width {
            break;
        }

        let tab_area = Rect::new(x, area.y, label_width, 1);
        let is_active = id == current;
        let bg = if is_active {
            theme::with_alpha(accent_for(id), TAB_ACCENT_ALPHA)
        } else {
            theme::alpha::SURFACE.into()
        };
        let label_style = if is_active {
            Style::new()
                .bg(bg)
                .fg(theme::fg::PRIMARY)
                .attrs(StyleFlags::BOLD)
        } else {
            Style::new().bg(bg).fg(theme::fg::MUTED)
        };
        let key_style = Style::new()
            .bg(bg)
            .fg(theme::fg::MUTED)
            .attrs(StyleFlags::DIM);
        let pad_style = Style::new().bg(bg);

        let line = Line::from_spans([
            Span::styled(" ", pad_style),
            Span::styled(key_label.clone(), key_style),
            Span::styled(": ", key_style),
            Span::styled(label_text, label_style),
            Span::styled(" ", pad_style),
        ]);
        Paragraph::new(Text::from_lines([line])).render(tab_area, frame);

        x += label_width;

        if x < area.x + area.width {
            let sep_style = Style::new()
                .bg(theme::alpha::SURFACE)
                .fg(theme::fg::MUTED)
                .attrs(StyleFlags::DIM);
            Paragraph::new("│")
                .style(sep_style)
                .render(Rect::new(x, area.y, 1, 1), frame);
            x = x.saturating_add(1);
        }
    }
}

// ---------------------------------------------------------------------------
// Status bar
// ---------------------------------------------------------------------------

/// State needed to render the status bar.
pub struct StatusBarState<'a> {
    pub current_screen: ScreenId,
    pub screen_title: &'a str,
    pub screen_index: usize,
    pub screen_count: usize,
    pub tick_count: u64,
    pub terminal_width: u16,
    pub terminal_height: u16,
    pub theme_name: &'a str,
    /// Signed-in operator email, if any.
    pub operator: Option<&'a str>,
    pub unread: usize,
}

/// Render the bottom status bar: screen title and position on the left, the
/// operator in the middle, dimensions and uptime on the right.
pub fn render_status_bar(state: &StatusBarState<'_>, frame: &mut Frame, area: Rect) {
    let bg_color = theme::alpha::SURFACE;
    let blank = Paragraph::new("").style(theme::status_bar());
    blank.render(area, frame);

    let screen_accent = accent_for(state.current_screen);

    // Each tick is 100ms.
    let total_secs = state.tick_count / 10;
    let mins = total_secs / 60;
    let secs = total_secs % 60;

    let title_style = Style::new()
        .bg(bg_color)
        .fg(screen_accent)
        .attrs(StyleFlags::BOLD);
    let position_style = Style::new().bg(bg_color).fg(theme::fg::SECONDARY);
    let muted_style = Style::new().bg(bg_color).fg(theme::fg::MUTED);
    let dim_style = Style::new()
        .bg(bg_color)
        .fg(theme::fg::MUTED)
        .attrs(StyleFlags::DIM);
    let time_style = Style::new().bg(bg_color).fg(theme::fg::SECONDARY);
    let pad_style = Style::new().bg(bg_color);

    let position_str = format!("[{}/{}]", state.screen_index + 1, state.screen_count);
    let theme_str = format!("  {}", state.theme_name);
    let center_str = match state.operator {
        Some(email) => format!("{email}  {} {}", theme::icons::BELL, state.unread),
        None => "not signed in".to_string(),
    };
    let dims_str = format!("{}x{}", state.terminal_width, state.terminal_height);
    let time_str = format!("{mins:02}:{secs:02}");

    let left_content_len =
        1 + state.screen_title.len() + 1 + position_str.len() + theme_str.len();
    let center_content_len = center_str.chars().count();
    let right_content_len = dims_str.len() + 1 + time_str.len() + 1;

    let available = area.width as usize;
    let total_content = left_content_len + center_content_len + right_content_len;

    let mut spans = Vec::with_capacity(12);
    spans.push(Span::styled(" ", pad_style));
    spans.push(Span::styled(state.screen_title, title_style));
    spans.push(Span::styled(" ", pad_style));
    spans.push(Span::styled(position_str, position_style));
    spans.push(Span::styled(theme_str, muted_style));

    if total_content < available {
        let total_padding = available - total_content;
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;

        if left_pad > 0 {
            spans.push(Span::styled(" ".repeat(left_pad), pad_style));
        }
        spans.push(Span::styled(center_str, dim_style));
        if right_pad > 0 {
            spans.push(Span::styled(" ".repeat(right_pad), pad_style));
        }
        spans.push(Span::styled(dims_str, muted_style));
        spans.push(Span::styled(" ", pad_style));
        spans.push(Span::styled(time_str, time_style));
        spans.push(Span::styled(" ", pad_style));
    } else {
        let pad = available.saturating_sub(left_content_len + right_content_len);
        if pad > 0 {
            spans.push(Span::styled(" ".repeat(pad), pad_style));
        }
        spans.push(Span::styled(dims_str, muted_style));
        spans.push(Span::styled(" ", pad_style));
        spans.push(Span::styled(time_str, time_style));
        spans.push(Span::styled(" ", pad_style));
    }

    let line = Line::from_spans(spans);
    Paragraph::new(Text::from_lines([line])).render(area, frame);
}

// ---------------------------------------------------------------------------
// Help overlay
// ---------------------------------------------------------------------------

/// Render a centered help overlay with global and screen-specific bindings.
pub fn render_help_overlay(
    current: ScreenId,
    screen_title: &str,
    screen_bindings: &[HelpEntry],
    frame: &mut Frame,
    area: Rect,
) {
    let overlay_width = ((area.width as u32 * 60) / 100).clamp(36, 72) as u16;
    let overlay_height = ((area.height as u32 * 70) / 100).clamp(14, 28) as u16;
    let overlay_width = overlay_width.min(area.width.saturating_sub(2));
    let overlay_height = overlay_height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(overlay_width)) / 2;
    let y = area.y + (area.height.saturating_sub(overlay_height)) / 2;
    let overlay_area = Rect::new(x, y, overlay_width, overlay_height);

    let block = Block::new()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .title(" ⌨ Keyboard Shortcuts ")
        .title_alignment(Alignment::Center)
        .style(theme::help_overlay());

    let inner = block.inner(overlay_area);
    block.render(overlay_area, frame);

    if inner.width < 10 || inner.height < 5 {
        return;
    }

    let key_style = Style::new().bold().fg(accent_for(current));
    let desc_style = theme::body();
    let section_style = Style::new().bold().underline().fg(theme::fg::SECONDARY);

    let content_area = Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height.saturating_sub(1),
    );

    let globals = Help::new()
        .with_mode(HelpMode::Full)
        .with_key_style(key_style)
        .with_desc_style(desc_style)
        .entry("[1-8]", "Switch to screen by number")
        .entry("[Tab]", "Next screen")
        .entry("[S-Tab]", "Previous screen")
        .entry("[?]", "Toggle this help overlay")
        .entry("[Ctrl+T]", "Cycle color theme")
        .entry("[Ctrl+L]", "Sign out")
        .entry("[q / Ctrl+C]", "Quit");
    let global_rows = 8u16.min(content_area.height);

    Paragraph::new("Global")
        .style(section_style)
        .render(Rect::new(content_area.x, content_area.y, content_area.width, 1), frame);
    Widget::render(
        &globals,
        Rect::new(
            content_area.x,
            content_area.y + 1,
            content_area.width,
            global_rows.saturating_sub(1),
        ),
        frame,
    );

    if !screen_bindings.is_empty() && content_area.height > global_rows + 2 {
        let section_y = content_area.y + global_rows + 1;
        let section_title = format!("{screen_title} Controls");
        Paragraph::new(section_title)
            .style(section_style)
            .render(Rect::new(content_area.x, section_y, content_area.width, 1), frame);

        let mut contextual = Help::new()
            .with_mode(HelpMode::Full)
            .with_key_style(key_style)
            .with_desc_style(desc_style);
        for entry in screen_bindings {
            contextual = contextual.entry(format!("[{}]", entry.key), entry.action);
        }
        let remaining = (content_area.y + content_area.height).saturating_sub(section_y + 1);
        Widget::render(
            &contextual,
            Rect::new(content_area.x, section_y + 1, content_area.width, remaining),
            frame,
        );
    }

    let footer_y = overlay_area.bottom().saturating_sub(1);
    if footer_y > inner.y {
        let footer = "Press ? or Esc to close";
        let footer_x = inner.x + (inner.width.saturating_sub(footer.len() as u16)) / 2;
        Paragraph::new(footer)
            .style(Style::new().fg(theme::fg::MUTED))
            .render(Rect::new(footer_x, footer_y, footer.len() as u16, 1), frame);
    }
}
