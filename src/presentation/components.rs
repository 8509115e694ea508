//! Component collection
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::prelude::*;

use crate::core::state::AppState;

pub mod converter;
pub mod status_bar;

pub use converter::ConverterComponent;
pub use status_bar::StatusBarComponent;

/// Collection of all components
pub struct Components {
    pub converter: ConverterComponent,
    pub status_bar: StatusBarComponent,
}

impl Components {
    pub fn new() -> Self {
        Self {
            converter: ConverterComponent::new(),
            status_bar: StatusBarComponent::new(),
        }
    }

    /// Render all components
    ///
    /// The converter form takes the screen; the status bar owns the last row.
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Min(0),    // Converter form
                Constraint::Length(1), // Status bar
            ])
            .split(frame.area());

        self.converter.view(state, frame, layout[0]);
        self.status_bar.view(state, frame, layout[1]);
    }
}

impl Default for Components {
    fn default() -> Self {
        Self::new()
    }
}
