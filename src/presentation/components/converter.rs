//! Converter form component
//!
//! Draws the title, the four form fields, the convert button, the result
//! line and a key hint line. All data comes from AppState.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{form::Field, AppState},
    domain::format::format_conversion,
    presentation::{
        config::keybindings::{key_label, Action, KeyBindings},
        widgets::{select_field::SelectFieldWidget, value_field::ValueFieldWidget, FieldStyles},
    },
};

pub const TITLE: &str = "Unit Converter";
pub const SUBTITLE: &str = "Convert between different units easily!";

const HINT_GROUPS: [(&str, &[Action]); 5] = [
    ("move", &[Action::FocusNext, Action::FocusPrev]),
    ("change", &[Action::SelectNext, Action::SelectPrev]),
    ("convert", &[Action::Convert]),
    ("clear", &[Action::ClearResult]),
    ("quit", &[Action::Quit]),
];

/// Key hint line built from the configured bindings, e.g. `Enter convert`.
/// Actions without a single-key binding are left out.
pub fn hint_line(keybindings: &KeyBindings) -> String {
    HINT_GROUPS
        .iter()
        .filter_map(|(description, actions)| {
            let keys: Vec<String> = actions
                .iter()
                .filter_map(|action| keybindings.keys_for(*action).first().map(key_label))
                .collect();
            (!keys.is_empty()).then(|| format!("{} {description}", keys.join("/")))
        })
        .collect::<Vec<_>>()
        .join("  ")
}

#[derive(Debug, Clone)]
pub struct ConverterComponent;

impl ConverterComponent {
    pub fn new() -> Self {
        Self
    }

    /// The result line for the last successful conversion, if any
    pub fn result_text(&self, state: &AppState) -> Option<String> {
        state
            .form
            .outcome()
            .map(|o| format_conversion(&o.request, o.result, state.precision()))
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let field_styles = FieldStyles {
            label: styles.style("label"),
            focused: styles.style("focused"),
        };
        let form = &state.form;

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Length(1), // Title
                Constraint::Length(1), // Subtitle
                Constraint::Length(1),
                Constraint::Length(1), // Category
                Constraint::Length(1), // From
                Constraint::Length(1), // To
                Constraint::Length(1), // Value
                Constraint::Length(1),
                Constraint::Length(1), // Convert button
                Constraint::Length(1), // Separator
                Constraint::Length(1), // Result
                Constraint::Min(0),
                Constraint::Length(1), // Hints
            ])
            .split(area);

        frame.render_widget(Paragraph::new(TITLE).style(styles.style("title")), rows[0]);
        frame.render_widget(
            Paragraph::new(SUBTITLE).style(styles.style("subtitle")),
            rows[1],
        );

        let categories = form.category_options();
        let from_units = form.from_options();
        let to_units = form.to_options();
        let selects = [
            (Field::Category, &categories, form.selected_category(), rows[3]),
            (Field::FromUnit, &from_units, form.selected_from(), rows[4]),
            (Field::ToUnit, &to_units, form.selected_to(), rows[5]),
        ];
        for (field, options, selected, row) in selects {
            let widget = SelectFieldWidget::new(field.label(), options, selected)
                .focused(form.focus == field)
                .styles(field_styles);
            frame.render_widget(widget, row);
        }

        frame.render_widget(
            ValueFieldWidget::new(Field::Value.label(), form.value_input())
                .focused(form.focus == Field::Value)
                .styles(field_styles),
            rows[6],
        );

        let button_style = if form.focus == Field::Convert {
            field_styles.focused.reversed()
        } else {
            field_styles.label
        };
        frame.render_widget(
            Paragraph::new(Field::Convert.label()).style(button_style),
            rows[8],
        );

        frame.render_widget(
            Block::default()
                .borders(Borders::TOP)
                .border_style(styles.style("hint")),
            rows[9],
        );

        if let Some(result) = self.result_text(state) {
            frame.render_widget(
                Paragraph::new(result).style(styles.style("result")),
                rows[10],
            );
        }

        let hints = hint_line(&state.config.config.keybindings);
        frame.render_widget(Paragraph::new(hints).style(styles.style("hint")), rows[12]);
    }
}

impl Default for ConverterComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::core::msg::form::FormMsg;
    use crate::infrastructure::config::Config;

    fn draw(state: &AppState) -> color_eyre::Result<Vec<String>> {
        let mut terminal = Terminal::new(TestBackend::new(70, 14))?;
        terminal.draw(|f| ConverterComponent::new().view(state, f, f.area()))?;
        let buffer = terminal.backend().buffer();
        Ok((0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect())
    }

    #[test]
    fn test_initial_form() -> color_eyre::Result<()> {
        let state = AppState::new(Config::from_defaults()?);
        let lines = draw(&state)?;
        assert_eq!(lines[0], "Unit Converter");
        assert_eq!(lines[1], "Convert between different units easily!");
        assert_eq!(lines[3], "Select a category:  < Length > (1/3)");
        assert_eq!(lines[4], "Convert from:         Meters");
        assert_eq!(lines[5], "Convert to:           Kilometers");
        assert_eq!(lines[6], "Enter the value:    0.0");
        assert_eq!(lines[8], "[ Convert ]");
        assert_eq!(lines[10], "");
        assert_eq!(
            lines[13],
            "Tab/S-Tab move  Down/Up change  Enter convert  Esc clear  q quit"
        );
        Ok(())
    }

    #[test]
    fn test_hints_follow_rebound_keys() -> color_eyre::Result<()> {
        let mut state = AppState::new(Config::from_defaults()?);
        let keybindings = &mut state.config.config.keybindings;
        keybindings.retain(|_, action| *action != Action::Convert && *action != Action::Quit);
        keybindings.insert(
            vec![crossterm::event::KeyEvent::new(
                crossterm::event::KeyCode::Char('c'),
                crossterm::event::KeyModifiers::NONE,
            )],
            Action::Convert,
        );

        assert_eq!(
            hint_line(&state.config.config.keybindings),
            "Tab/S-Tab move  Down/Up change  c convert  Esc clear"
        );
        let lines = draw(&state)?;
        assert_eq!(lines[13], "Tab/S-Tab move  Down/Up change  c convert  Esc clear");
        Ok(())
    }

    #[test]
    fn test_result_line_after_submit() -> color_eyre::Result<()> {
        let mut state = AppState::new(Config::from_defaults()?);
        state.form.update(FormMsg::PasteValue("100".to_string()));
        state.form.focus = Field::Category;
        state.form.update(FormMsg::SelectPrev);
        state.form.submit().expect("Celsius to Fahrenheit exists");

        let lines = draw(&state)?;
        assert_eq!(lines[10], "100.0 Celsius = 212.00 Fahrenheit");
        Ok(())
    }

    #[test]
    fn test_result_uses_precision() -> color_eyre::Result<()> {
        let mut state = AppState::new(Config::from_defaults()?);
        state.config.config.display.precision = 3;
        state.form.update(FormMsg::PasteValue("1".to_string()));
        state.form.submit().expect("Meters to Kilometers exists");
        assert_eq!(
            ConverterComponent::new().result_text(&state),
            Some("1.0 Meters = 0.001 Kilometers".to_string())
        );
        Ok(())
    }
}
