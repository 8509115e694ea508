//! Status bar component
//!
//! Renders the last error message from AppState on a single line.

use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;

#[derive(Debug, Clone)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);

        let style = state.config.config.styles.style("error");
        let message = state.system.status_message().unwrap_or_default();
        frame.render_widget(Paragraph::new(message).style(style), area);
    }
}

impl Default for StatusBarComponent {
    fn default() -> Self {
        Self::new()
    }
}
