use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::sheet::{BackIntent, NavigationEntry};
use crate::ui::layout;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(w, h) => {
            state.viewport = Rect::new(0, 0, w, h);
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // The sheet captures all input while it is open
    if state.overlay.is_visible() {
        return handle_sheet_key(state, key);
    }

    match key.code {
        KeyCode::Enter | KeyCode::Char('o') => {
            open_sheet(state);
            vec![]
        }
        KeyCode::Char('q') => vec![Action::Quit],
        _ => vec![],
    }
}

fn handle_sheet_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Left if key.modifiers.contains(KeyModifiers::ALT) => {
            back(state, BackIntent::EdgeSwipe);
            vec![]
        }
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => {
            back(state, BackIntent::HardwareBack);
            vec![]
        }
        KeyCode::Char('x') => {
            close(state);
            vec![]
        }
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('n') => push_next(state),
        KeyCode::Char(c) => match c.to_string().parse::<NavigationEntry>() {
            Ok(entry) => {
                let transition = state.overlay.push(entry);
                state.record(transition, "key");
                vec![]
            }
            Err(_) => vec![],
        },
        _ => vec![],
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return vec![];
    }
    let (col, row) = (mouse.column, mouse.row);

    if !state.overlay.is_visible() {
        let app_layout = layout::compute_layout(state.viewport);
        if layout::contains(app_layout.open_button, col, row) {
            open_sheet(state);
        }
        return vec![];
    }

    let sheet_layout = layout::sheet_layout(state.viewport, state.config.sheet.height_percent);
    if layout::contains(sheet_layout.close_button, col, row) {
        close(state);
    } else if layout::contains(sheet_layout.scrim, col, row) && state.config.sheet.scrim_dismiss {
        back(state, BackIntent::ScrimDismiss);
    }
    vec![]
}

fn open_sheet(state: &mut AppState) {
    let transition = state.overlay.show();
    state.record(transition, "open");
}

fn back(state: &mut AppState, intent: BackIntent) {
    let transition = state.overlay.handle_back_intent(intent);
    state.record(transition, intent.label());
}

fn close(state: &mut AppState) {
    let transition = state.overlay.request_dismiss();
    state.record(transition, "close");
}

fn push_next(state: &mut AppState) -> Vec<Action> {
    let Some(current) = state.overlay.current() else {
        return vec![];
    };
    match current.next() {
        Some(next) => {
            let transition = state.overlay.push(next);
            state.record(transition, "next");
            vec![]
        }
        None => {
            state.status_message = Some(format!("{} is the last page", current));
            state.dirty = true;
            vec![Action::Bell]
        }
    }
}
