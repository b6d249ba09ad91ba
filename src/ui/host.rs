use crate::app::state::*;
use crate::ui::layout::{AppLayout, OPEN_BUTTON_LABEL};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

pub fn render(frame: &mut Frame, app_layout: &AppLayout, state: &AppState) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" sheetstack ", Theme::title()),
        Span::styled(
            "· a bottom sheet with its own navigation stack",
            Theme::hint_text(),
        ),
    ]));
    frame.render_widget(header, app_layout.header);

    let button = Paragraph::new(Span::styled(OPEN_BUTTON_LABEL, Theme::button()))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(Theme::border_type())
                .border_style(Style::default().fg(Theme::ACCENT)),
        );
    frame.render_widget(button, app_layout.open_button);

    render_activity(frame, app_layout.activity, state);
}

fn render_activity(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Activity ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());

    // Newest lines at the bottom, like a chat buffer
    let visible = (area.height as usize).saturating_sub(2);
    let skip = state.activity.len().saturating_sub(visible);
    let items: Vec<ListItem> = state
        .activity
        .iter()
        .skip(skip)
        .map(|a| {
            let style = match a.kind {
                ActivityKind::Shown => Theme::activity_shown(),
                ActivityKind::Pushed => Theme::activity_pushed(),
                ActivityKind::Popped => Theme::activity_popped(),
                ActivityKind::Dismissed => Theme::activity_dismissed(),
                ActivityKind::Info => Theme::activity_info(),
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", a.timestamp), Theme::timestamp()),
                Span::styled(a.text.clone(), style),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
