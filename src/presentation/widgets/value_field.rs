use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Widget};

use crate::presentation::widgets::{FieldStyles, LABEL_WIDTH};

/// Numeric input line. Shows `0.0` dimmed while empty and a cursor when focused.
#[derive(Debug, Clone)]
pub struct ValueFieldWidget<'a> {
    label: &'a str,
    input: &'a str,
    focused: bool,
    styles: FieldStyles,
}

impl<'a> ValueFieldWidget<'a> {
    pub fn new(label: &'a str, input: &'a str) -> Self {
        Self {
            label,
            input,
            focused: false,
            styles: FieldStyles::default(),
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn styles(mut self, styles: FieldStyles) -> Self {
        self.styles = styles;
        self
    }
}

impl<'a> Widget for ValueFieldWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let mut spans = vec![Span::styled(
            format!("{:<width$}", self.label, width = LABEL_WIDTH),
            self.styles.label,
        )];
        if self.input.is_empty() {
            spans.push(Span::styled("0.0", Style::default().dim()));
        } else if self.focused {
            spans.push(Span::styled(self.input.to_string(), self.styles.focused));
        } else {
            spans.push(Span::raw(self.input.to_string()));
        }
        if self.focused {
            spans.push(Span::styled("_", self.styles.focused.slow_blink()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
