#![forbid(unsafe_code)]

//! Location pinning: a schematic city map with a crosshair picker, an add
//! form, and the list of pinned cleanup sites.
//!
//! The crosshair moves on a fixed virtual grid so the grid-to-coordinate
//! mapping is independent of the terminal size.

use std::cell::RefCell;

use ftui_core::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ftui_core::geometry::Rect;
use ftui_extras::forms::{Form, FormField, FormState};
use ftui_layout::{Constraint, Flex};
use ftui_render::frame::Frame;
use ftui_runtime::Cmd;
use ftui_style::{Style, StyleFlags};
use ftui_widgets::block::{Alignment, Block};
use ftui_widgets::borders::{BorderType, Borders};
use ftui_widgets::paragraph::Paragraph;
use ftui_widgets::{StatefulWidget, Widget};

use super::{HelpEntry, Screen};
use crate::app::AppMsg;
use crate::model::entities::{Coordinates, LocationStatus, PinnedLocation, Priority};
use crate::model::sample::{self, MAP_CENTER};
use crate::model::store::Collection;
use crate::theme;

/// Virtual picker grid. Grid position, not screen position, determines the
/// pinned coordinates.
const GRID_COLS: u16 = 56;
const GRID_ROWS: u16 = 18;

/// Coordinate span covered by the whole grid, in degrees.
const MAP_SPAN: f64 = 0.02;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Panel {
    Map,
    Form,
    List,
}

pub struct LocationsScreen {
    pins: Collection<PinnedLocation>,
    focus: Panel,
    cursor_col: u16,
    cursor_row: u16,
    /// Point picked on the map, consumed when the form is submitted.
    selected_point: Option<Coordinates>,
    form: Form,
    form_state: RefCell<FormState>,
    selected_pin: usize,
    next_id: u64,
    status_text: String,
}

fn new_pin_form() -> Form {
    Form::new(vec![
        FormField::text_with_placeholder("Location Name", "e.g. Central Park Entrance"),
        FormField::select(
            "Priority",
            vec!["Low".into(), "Medium".into(), "High".into()],
        ),
        FormField::text_with_placeholder("Notes", "Describe the cleanup needed"),
        FormField::text_with_placeholder("Estimated Time", "e.g. 2 hours"),
    ])
    .validate(
        0,
        Box::new(|field| {
            if let FormField::Text { value, .. } = field {
                if value.trim().is_empty() {
                    return Some("Location name is required".into());
                }
            }
            None
        }),
    )
}

/// Map a grid position to mock coordinates around the map center.
fn grid_to_coords(col: u16, row: u16) -> Coordinates {
    let col_frac = f64::from(col) / f64::from(GRID_COLS - 1);
    let row_frac = f64::from(row) / f64::from(GRID_ROWS - 1);
    Coordinates {
        lat: MAP_CENTER.lat + (row_frac - 0.5) * MAP_SPAN,
        lng: MAP_CENTER.lng + (col_frac - 0.5) * MAP_SPAN,
    }
}

/// Inverse of [`grid_to_coords`], used to place existing pins on the map.
fn coords_to_frac(coords: Coordinates) -> (f64, f64) {
    let col_frac = ((coords.lng - MAP_CENTER.lng) / MAP_SPAN + 0.5).clamp(0.0, 1.0);
    let row_frac = ((coords.lat - MAP_CENTER.lat) / MAP_SPAN + 0.5).clamp(0.0, 1.0);
    (col_frac, row_frac)
}

impl Default for LocationsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationsScreen {
    pub fn new() -> Self {
        let form = new_pin_form();
        let mut form_state = FormState::default();
        form_state.init_tracking(&form);
        Self {
            pins: Collection::from_items(sample::pinned_locations()),
            focus: Panel::Map,
            cursor_col: GRID_COLS / 2,
            cursor_row: GRID_ROWS / 2,
            selected_point: None,
            form,
            form_state: RefCell::new(form_state),
            selected_pin: 0,
            // Sample catalog ships pins "1" and "2".
            next_id: 3,
            status_text: "Arrows: move crosshair | Enter: drop pin | l: pin list".into(),
        }
    }

    pub fn pin_count(&self) -> usize {
        self.pins.len()
    }

    fn reset_form(&mut self) {
        self.form = new_pin_form();
        let mut state = FormState::default();
        state.init_tracking(&self.form);
        self.form_state = RefCell::new(state);
    }

    fn move_cursor(&mut self, dx: i32, dy: i32) {
        let col = i32::from(self.cursor_col) + dx;
        let row = i32::from(self.cursor_row) + dy;
        self.cursor_col = col.clamp(0, i32::from(GRID_COLS - 1)) as u16;
        self.cursor_row = row.clamp(0, i32::from(GRID_ROWS - 1)) as u16;
    }

    fn pick_point(&mut self) {
        let coords = grid_to_coords(self.cursor_col, self.cursor_row);
        self.selected_point = Some(coords);
        self.focus = Panel::Form;
        self.status_text = format!(
            "Pin at {:.4}, {:.4} | fill in the details and submit",
            coords.lat, coords.lng
        );
    }

    fn handle_form_submit(&mut self) {
        let errors = self.form.validate_all();
        if !errors.is_empty() {
            self.status_text = errors[0].message.clone();
            self.form_state.borrow_mut().errors = errors;
            return;
        }

        let name = match self.form.field(0) {
            Some(FormField::Text { value, .. }) => value.trim().to_string(),
            _ => String::new(),
        };
        let priority = match self.form.field(1) {
            Some(FormField::Select { selected, .. }) => match *selected {
                0 => Priority::Low,
                2 => Priority::High,
                _ => Priority::Medium,
            },
            _ => Priority::Medium,
        };
        let notes = match self.form.field(2) {
            Some(FormField::Text { value, .. }) => value.trim().to_string(),
            _ => String::new(),
        };
        let estimated_time = match self.form.field(3) {
            Some(FormField::Text { value, .. }) => {
                let v = value.trim();
                if v.is_empty() { "1 hour".into() } else { v.to_string() }
            }
            _ => "1 hour".into(),
        };

        let coords = self.selected_point.unwrap_or(MAP_CENTER);
        let pin = PinnedLocation {
            id: self.next_id.to_string(),
            name: name.clone(),
            coords,
            priority,
            notes,
            estimated_time,
            status: LocationStatus::Pending,
        };
        self.next_id += 1;

        match self.pins.add(pin) {
            Ok(()) => {
                tracing::info!(target: "ecobot.locations", name = %name, lat = coords.lat, lng = coords.lng, "pin created");
                self.status_text = format!("Pinned \"{name}\"");
                self.selected_pin = self.pins.len() - 1;
                self.selected_point = None;
                self.reset_form();
                self.focus = Panel::List;
            }
            Err(err) => {
                self.status_text = err.to_string();
            }
        }
    }

    fn cancel_form(&mut self) {
        self.selected_point = None;
        self.reset_form();
        self.focus = Panel::Map;
        self.status_text = "Pin canceled".into();
    }

    fn delete_selected(&mut self) {
        let Some(pin) = self.pins.as_slice().get(self.selected_pin) else {
            return;
        };
        let id = pin.id.clone();
        match self.pins.remove(&id) {
            Ok(removed) => {
                tracing::info!(target: "ecobot.locations", id = %id, "pin deleted");
                self.status_text = format!("Deleted \"{}\"", removed.name);
                if self.selected_pin >= self.pins.len() && self.selected_pin > 0 {
                    self.selected_pin -= 1;
                }
            }
            Err(err) => {
                self.status_text = err.to_string();
            }
        }
    }

    fn update_map(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.move_cursor(0, -1),
            KeyCode::Down => self.move_cursor(0, 1),
            KeyCode::Left => self.move_cursor(-1, 0),
            KeyCode::Right => self.move_cursor(1, 0),
            KeyCode::Enter => self.pick_point(),
            KeyCode::Char('l' | 'L') => {
                self.focus = Panel::List;
                self.status_text = "j/k: select | d: delete | m: back to map".into();
            }
            _ => {}
        }
    }

    fn update_list(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_pin = self.selected_pin.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected_pin + 1 < self.pins.len() {
                    self.selected_pin += 1;
                }
            }
            KeyCode::Char('d' | 'D') => self.delete_selected(),
            KeyCode::Char('m' | 'M') | KeyCode::Escape => {
                self.focus = Panel::Map;
                self.status_text =
                    "Arrows: move crosshair | Enter: drop pin | l: pin list".into();
            }
            _ => {}
        }
    }

    fn render_map(&self, frame: &mut Frame, area: Rect) {
        if area.is_empty() || area.height < 4 {
            return;
        }
        let block = Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title("City Map")
            .title_alignment(Alignment::Center)
            .style(theme::panel_border_style(
                self.focus == Panel::Map,
                theme::screen_accent::LOCATIONS,
            ));
        let inner = block.inner(area);
        block.render(area, frame);
        if inner.width < 2 || inner.height < 2 {
            return;
        }

        // Sparse dot texture standing in for streets.
        let mut y = inner.y;
        while y < inner.y + inner.height {
            let mut x = inner.x + (y % 2) * 2;
            while x < inner.x + inner.width {
                Paragraph::new(theme::icons::MAP_DOT)
                    .style(theme::muted())
                    .render(Rect::new(x, y, 1, 1), frame);
                x += 4;
            }
            y += 2;
        }

        let place = |frac: (f64, f64)| {
            let x = inner.x + (frac.0 * f64::from(inner.width - 1)).round() as u16;
            let y = inner.y + (frac.1 * f64::from(inner.height - 1)).round() as u16;
            (x, y)
        };

        for pin in self.pins.iter() {
            let (x, y) = place(coords_to_frac(pin.coords));
            Paragraph::new(theme::icons::PIN)
                .style(theme::priority_style(pin.priority))
                .render(Rect::new(x, y, 2, 1), frame);
        }

        let cursor_frac = (
            f64::from(self.cursor_col) / f64::from(GRID_COLS - 1),
            f64::from(self.cursor_row) / f64::from(GRID_ROWS - 1),
        );
        let (cx, cy) = place(cursor_frac);
        Paragraph::new(theme::icons::CROSSHAIR)
            .style(
                Style::new()
                    .fg(theme::screen_accent::LOCATIONS)
                    .attrs(StyleFlags::BOLD),
            )
            .render(Rect::new(cx, cy, 1, 1), frame);

        // Coordinate readout in the bottom row of the panel.
        let coords = grid_to_coords(self.cursor_col, self.cursor_row);
        let readout = format!("{:.4}, {:.4}", coords.lat, coords.lng);
        let y = inner.y + inner.height - 1;
        Paragraph::new(readout)
            .style(theme::muted())
            .render(Rect::new(inner.x, y, inner.width, 1), frame);
    }

    fn render_form(&self, frame: &mut Frame, area: Rect) {
        if area.is_empty() || area.height < 4 {
            return;
        }
        let block = Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title("Pin Location")
            .title_alignment(Alignment::Center)
            .style(theme::panel_border_style(
                self.focus == Panel::Form,
                theme::screen_accent::LOCATIONS,
            ));
        let inner = block.inner(area);
        block.render(area, frame);
        if inner.is_empty() {
            return;
        }

        if self.selected_point.is_none() && self.focus != Panel::Form {
            Paragraph::new("Drop a pin on the map to add a location")
                .style(theme::muted())
                .render(inner, frame);
            return;
        }

        let mut state = self.form_state.borrow_mut();
        StatefulWidget::render(&self.form, inner, frame, &mut state);
    }

    fn render_list(&self, frame: &mut Frame, area: Rect) {
        if area.is_empty() || area.height < 3 {
            return;
        }
        let title = format!("Pinned Locations ({})", self.pins.len());
        let block = Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title.as_str())
            .title_alignment(Alignment::Center)
            .style(theme::panel_border_style(
                self.focus == Panel::List,
                theme::screen_accent::LOCATIONS,
            ));
        let inner = block.inner(area);
        block.render(area, frame);
        if inner.is_empty() {
            return;
        }

        if self.pins.is_empty() {
            Paragraph::new("No pinned locations yet")
                .style(theme::muted())
                .render(inner, frame);
            return;
        }

        for (i, pin) in self.pins.iter().enumerate() {
            if i as u16 >= inner.height {
                break;
            }
            let is_selected = i == self.selected_pin;
            let y = inner.y + i as u16;
            let row = Rect::new(inner.x, y, inner.width, 1);
            let line = format!(
                "{}{} {}  [{}] {} · {}",
                theme::selection_indicator(is_selected),
                theme::icons::PIN,
                pin.name,
                pin.priority.label(),
                pin.status.label(),
                pin.estimated_time,
            );
            Paragraph::new(line)
                .style(theme::list_item_style(is_selected, self.focus == Panel::List))
                .render(row, frame);
        }
    }
}

impl Screen for LocationsScreen {
    type Message = AppMsg;

    fn update(&mut self, event: &Event) -> Cmd<AppMsg> {
        if self.focus == Panel::Form {
            if let Event::Key(KeyEvent {
                code: KeyCode::Escape,
                kind: KeyEventKind::Press,
                ..
            }) = event
            {
                self.cancel_form();
                return Cmd::None;
            }

            {
                let mut state = self.form_state.borrow_mut();
                state.handle_event(&mut self.form, event);
            }
            let submitted = self.form_state.borrow().submitted;
            if submitted {
                self.form_state.borrow_mut().submitted = false;
                self.handle_form_submit();
            }
            return Cmd::None;
        }

        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event
        {
            match self.focus {
                Panel::Map => self.update_map(*code),
                Panel::List => self.update_list(*code),
                Panel::Form => unreachable!(),
            }
        }
        Cmd::None
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.is_empty() {
            return;
        }
        let rows = Flex::vertical()
            .constraints([Constraint::Min(5), Constraint::Fixed(1)])
            .split(area);

        let cols = Flex::horizontal()
            .constraints([Constraint::Percentage(58.0), Constraint::Percentage(42.0)])
            .split(rows[0]);
        self.render_map(frame, cols[0]);

        let right = Flex::vertical()
            .constraints([Constraint::Fixed(10), Constraint::Min(3)])
            .split(cols[1]);
        self.render_form(frame, right[0]);
        self.render_list(frame, right[1]);

        Paragraph::new(self.status_text.as_str())
            .style(theme::muted())
            .render(rows[1], frame);
    }

    fn keybindings(&self) -> Vec<HelpEntry> {
        vec![
            HelpEntry {
                key: "Arrows",
                action: "Move crosshair",
            },
            HelpEntry {
                key: "Enter",
                action: "Drop pin / submit form",
            },
            HelpEntry {
                key: "l",
                action: "Focus pin list",
            },
            HelpEntry {
                key: "d",
                action: "Delete selected pin",
            },
            HelpEntry {
                key: "Esc",
                action: "Cancel form",
            },
        ]
    }

    fn title(&self) -> &'static str {
        "Pin Locations"
    }

    fn tab_label(&self) -> &'static str {
        "Locations"
    }

    fn wants_text_input(&self) -> bool {
        self.focus == Panel::Form
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
    fn grid_corners_map_to_coordinate_extremes() {
        let top_left = grid_to_coords(0, 0);
        assert!((top_left.lat - (MAP_CENTER.lat - 0.01)).abs() < 1e-9);
        assert!((top_left.lng - (MAP_CENTER.lng - 0.01)).abs() < 1e-9);

        let bottom_right = grid_to_coords(GRID_COLS - 1, GRID_ROWS - 1);
        assert!((bottom_right.lat - (MAP_CENTER.lat + 0.01)).abs() < 1e-9);
        assert!((bottom_right.lng - (MAP_CENTER.lng + 0.01)).abs() < 1e-9);

        let center = grid_to_coords(GRID_COLS / 2, GRID_ROWS / 2);
        assert!((center.lat - MAP_CENTER.lat).abs() < 0.002);
        assert!((center.lng - MAP_CENTER.lng).abs() < 0.002);
    }

    #[test]
    fn enter_on_map_picks_point_and_opens_form() {
        let mut screen = LocationsScreen::new();
        assert_eq!(screen.focus, Panel::Map);
        let _ = screen.update(&press(KeyCode::Enter));
        assert_eq!(screen.focus, Panel::Form);
        assert!(screen.selected_point.is_some());
        assert!(screen.wants_text_input());
    }

    #[test]
    fn submitting_named_form_adds_pending_pin_with_fresh_id() {
        let mut screen = LocationsScreen::new();
        let _ = screen.update(&press(KeyCode::Enter));
        if let Some(FormField::Text { value, .. }) = screen.form.field_mut(0) {
            *value = "Harbor Front".into();
        }
        screen.handle_form_submit();

        assert_eq!(screen.pin_count(), 3);
        let pin = screen.pins.get("3").expect("new pin");
        assert_eq!(pin.name, "Harbor Front");
        assert_eq!(pin.status, LocationStatus::Pending);
        assert_eq!(pin.estimated_time, "1 hour");
        assert_eq!(screen.focus, Panel::List);
        assert!(screen.selected_point.is_none());
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut screen = LocationsScreen::new();
        let _ = screen.update(&press(KeyCode::Enter));
        screen.handle_form_submit();
        assert_eq!(screen.pin_count(), 2);
        assert_eq!(screen.focus, Panel::Form);
    }

    #[test]
    fn escape_cancels_pending_pin() {
        let mut screen = LocationsScreen::new();
        let _ = screen.update(&press(KeyCode::Enter));
        let _ = screen.update(&press(KeyCode::Escape));
        assert_eq!(screen.focus, Panel::Map);
        assert!(screen.selected_point.is_none());
    }

    #[test]
    fn delete_removes_selected_pin() {
        let mut screen = LocationsScreen::new();
        let _ = screen.update(&press(KeyCode::Char('l')));
        assert_eq!(screen.focus, Panel::List);
        let _ = screen.update(&press(KeyCode::Char('d')));
        assert_eq!(screen.pin_count(), 1);
        assert!(screen.pins.get("1").is_none());
        assert!(screen.pins.get("2").is_some());
    }

    #[test]
    fn crosshair_stays_on_grid() {
        let mut screen = LocationsScreen::new();
        for _ in 0..100 {
            let _ = screen.update(&press(KeyCode::Left));
        }
        assert_eq!(screen.cursor_col, 0);
        for _ in 0..200 {
            let _ = screen.update(&press(KeyCode::Right));
        }
        assert_eq!(screen.cursor_col, GRID_COLS - 1);
    }

    #[test]
    fn renders_without_panic() {
        let screen = LocationsScreen::new();
        let mut pool = GraphemePool::new();
        let mut frame = Frame::new(120, 40, &mut pool);
        screen.view(&mut frame, Rect::new(0, 0, 120, 40));
    }
}
