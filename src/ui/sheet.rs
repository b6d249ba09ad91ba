use crate::app::state::AppState;
use crate::sheet::NavigationEntry;
use crate::ui::layout::{self, CLOSE_BUTTON_LABEL};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(coord) = state.overlay.coordinator() else {
        return;
    };
    let current = coord.current();

    let sheet_layout = layout::sheet_layout(area, state.config.sheet.height_percent);
    frame.buffer_mut().set_style(sheet_layout.scrim, Theme::scrim());

    let popup_area = sheet_layout.sheet;
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {} ", current.title()))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(Theme::ACCENT))
        .style(Style::default().bg(Theme::BG_SURFACE));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);
    frame.render_widget(
        Paragraph::new(Span::styled(CLOSE_BUTTON_LABEL, Theme::close_button())),
        sheet_layout.close_button,
    );

    if inner.height < 3 || inner.width < 20 {
        return;
    }

    // Body
    let mut lines: Vec<Line> = vec![Line::from("")];
    lines.extend(
        current
            .body()
            .iter()
            .map(|text| Line::from(Span::styled(*text, Style::default().fg(Theme::TEXT_PRIMARY)))),
    );
    lines.push(Line::from(""));
    lines.push(primary_action_line(current));

    let body_area = Rect::new(inner.x + 1, inner.y, inner.width - 2, inner.height - 1);
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), body_area);

    // Keybinding help
    let help_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
    let back_label = if coord.can_pop() { " Back  " } else { " Close  " };
    let help = Line::from(vec![
        Span::styled(" Esc", Theme::key_hint()),
        Span::styled(back_label, Theme::hint_text()),
        Span::styled("Enter", Theme::key_hint()),
        Span::styled(" Next  ", Theme::hint_text()),
        Span::styled("1-3", Theme::key_hint()),
        Span::styled(" Push page  ", Theme::hint_text()),
        Span::styled("x", Theme::key_hint()),
        Span::styled(" Close", Theme::hint_text()),
    ]);
    frame.render_widget(Paragraph::new(help), help_area);
}

fn primary_action_line(current: NavigationEntry) -> Line<'static> {
    match current.next() {
        Some(next) => Line::from(vec![
            Span::styled("▶ ", Theme::button()),
            Span::styled(format!("Go to {}", next), Theme::button()),
        ]),
        None => Line::from(Span::styled("End of the flow", Theme::hint_text())),
    }
}
