pub mod select_field;
pub mod value_field;

use ratatui::style::Style;

/// Styles shared by the form field widgets
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FieldStyles {
    pub label: Style,
    pub focused: Style,
}

/// Column width reserved for field labels
pub const LABEL_WIDTH: usize = 20;
