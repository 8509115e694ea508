use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Widget};

use crate::presentation::widgets::{FieldStyles, LABEL_WIDTH};

/// One-line select: a label followed by the chosen option.
///
/// A focused select shows arrows around its value to hint that it can be
/// cycled, plus its position among the options.
#[derive(Debug, Clone)]
pub struct SelectFieldWidget<'a> {
    label: &'a str,
    options: &'a [&'a str],
    selected: Option<&'a str>,
    focused: bool,
    styles: FieldStyles,
}

impl<'a> SelectFieldWidget<'a> {
    pub fn new(label: &'a str, options: &'a [&'a str], selected: Option<&'a str>) -> Self {
        Self {
            label,
            options,
            selected,
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

    pub fn value_text(&self) -> String {
        let value = self.selected.unwrap_or("-");
        if !self.focused {
            return format!("  {value}");
        }
        let position = self
            .selected
            .and_then(|s| self.options.iter().position(|o| *o == s))
            .map(|i| format!(" ({}/{})", i + 1, self.options.len()))
            .unwrap_or_default();
        format!("< {value} >{position}")
    }
}

impl<'a> Widget for SelectFieldWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let value_style = if self.focused {
            self.styles.focused
        } else {
            Style::default()
        };
        let line = Line::from(vec![
            Span::styled(
                format!("{:<width$}", self.label, width = LABEL_WIDTH),
                self.styles.label,
            ),
            Span::styled(self.value_text(), value_style),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}
