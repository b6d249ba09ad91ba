use crate::config::AppConfig;
use crate::sheet::{OverlayController, SheetTransition};
use chrono::Local;
use ratatui::layout::Rect;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Shown,
    Pushed,
    Popped,
    Dismissed,
    Info,
}

/// One line of the host screen's activity log.
#[derive(Debug, Clone)]
pub struct Activity {
    pub timestamp: String,
    pub text: String,
    pub kind: ActivityKind,
}

pub struct AppState {
    pub config: AppConfig,
    pub overlay: OverlayController,
    pub activity: VecDeque<Activity>,
    /// Last known terminal size, used to hit-test mouse clicks.
    pub viewport: Rect,
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let overlay = OverlayController::new(config.sheet.root);
        Self {
            config,
            overlay,
            activity: VecDeque::new(),
            viewport: Rect::default(),
            should_quit: false,
            dirty: true,
            status_message: None,
        }
    }

    pub fn push_activity(&mut self, kind: ActivityKind, text: String) {
        let activity = Activity {
            timestamp: Local::now()
                .format(&self.config.ui.timestamp_format)
                .to_string(),
            text,
            kind,
        };
        self.activity.push_back(activity);
        while self.activity.len() > self.config.ui.max_activity {
            self.activity.pop_front();
        }
        self.dirty = true;
    }

    /// Record what a sheet operation did. `cause` names the user action that
    /// triggered it.
    pub fn record(&mut self, transition: SheetTransition, cause: &str) {
        let depth = self.overlay.depth();
        if !matches!(transition, SheetTransition::AlreadyVisible | SheetTransition::Ignored) {
            self.status_message = None;
        }
        match transition {
            SheetTransition::Shown(root) => {
                self.push_activity(ActivityKind::Shown, format!("Sheet opened on {}", root));
            }
            SheetTransition::Pushed(entry) => self.push_activity(
                ActivityKind::Pushed,
                format!("Pushed {} (depth {})", entry, depth),
            ),
            SheetTransition::Popped(top) => self.push_activity(
                ActivityKind::Popped,
                format!("{}: back to {} (depth {})", cause, top, depth),
            ),
            SheetTransition::Dismissed => {
                self.push_activity(ActivityKind::Dismissed, format!("{}: sheet closed", cause));
            }
            SheetTransition::AlreadyVisible => {
                self.status_message = Some("Sheet is already open".to_string());
                self.dirty = true;
            }
            SheetTransition::Ignored => {}
        }
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        match self.overlay.coordinator() {
            Some(coord) => {
                let trail: Vec<String> = coord.stack().iter().map(|e| e.to_string()).collect();
                trail.join(" › ")
            }
            None => "Sheet hidden".to_string(),
        }
    }
}
