use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

pub const OPEN_BUTTON_LABEL: &str = " Open sheet ";
pub const CLOSE_BUTTON_LABEL: &str = "[x]";

pub struct AppLayout {
    pub header: Rect,
    pub open_button: Rect,
    pub activity: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: header | button row | activity log | status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Button row
            Constraint::Min(3),    // Activity log
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let button_row = chunks[1];
    let button_w = (OPEN_BUTTON_LABEL.len() as u16 + 2).min(button_row.width);
    let open_button = Rect::new(
        button_row.x + (button_row.width.saturating_sub(button_w)) / 2,
        button_row.y,
        button_w,
        button_row.height,
    );

    AppLayout {
        header: chunks[0],
        open_button,
        activity: chunks[2],
        status_bar: chunks[3],
    }
}

pub struct SheetLayout {
    /// Whole sheet including its border.
    pub sheet: Rect,
    /// Host area left visible above the sheet.
    pub scrim: Rect,
    pub close_button: Rect,
}

/// Bottom-anchored sheet covering `height_percent` of `area`, leaving the
/// status bar uncovered and at least one scrim row on top.
pub fn sheet_layout(area: Rect, height_percent: u16) -> SheetLayout {
    let usable_h = area.height.saturating_sub(1);
    let sheet_h = (usable_h as u32 * height_percent as u32 / 100) as u16;
    let sheet_h = sheet_h.max(6).min(usable_h.saturating_sub(1));
    let sheet_y = area.y + usable_h - sheet_h;

    let sheet = Rect::new(area.x, sheet_y, area.width, sheet_h);
    let scrim = Rect::new(area.x, area.y, area.width, sheet_y - area.y);

    let close_w = CLOSE_BUTTON_LABEL.len() as u16;
    let close_button = Rect::new(
        sheet.x + sheet.width.saturating_sub(close_w + 2),
        sheet.y,
        close_w.min(sheet.width),
        1,
    );

    SheetLayout {
        sheet,
        scrim,
        close_button,
    }
}

pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    rect.contains(Position::new(column, row))
}
