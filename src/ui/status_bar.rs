use crate::app::state::*;
use crate::sheet::{OverlayState, StackPhase};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    let (label, color) = match state.overlay.state() {
        OverlayState::Visible => ("SHEET", Color::Green),
        OverlayState::Hidden => ("HOST", Color::Cyan),
    };
    parts.push(Span::styled(
        format!(" [{}] ", label),
        Style::default().fg(color).bg(Color::DarkGray),
    ));

    // Status text
    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    let phase = match state.overlay.phase() {
        Some(StackPhase::RootOnly) => format!(" root · depth {} ", state.overlay.depth()),
        Some(StackPhase::Nested) => format!(" nested · depth {} ", state.overlay.depth()),
        None => " Enter open · q quit ".to_string(),
    };

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.chars().count()).sum();
    let remaining = (area.width as usize).saturating_sub(used + phase.chars().count());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        phase,
        Style::default().fg(Color::Yellow).bg(Color::DarkGray),
    ));

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}
