use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const ACCENT: Color = Color::Cyan;
    pub const ACCENT_AMBER: Color = Color::Yellow;
    pub const TEXT_PRIMARY: Color = Color::White;
    pub const TEXT_SECONDARY: Color = Color::Gray;
    pub const BG_SURFACE: Color = Color::Black;

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn timestamp() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn button() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn close_button() -> Style {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    }

    /// Host content behind an open sheet.
    pub fn scrim() -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    }

    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint_text() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn activity_shown() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn activity_pushed() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn activity_popped() -> Style {
        Style::default().fg(Color::Magenta)
    }

    pub fn activity_dismissed() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn activity_info() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }
}
