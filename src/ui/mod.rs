mod host;
pub mod layout;
mod sheet;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    host::render(frame, &app_layout, state);
    status_bar::render(frame, app_layout.status_bar, state);
    // Drawn last so it covers the host screen
    sheet::render(frame, area, state);
}
