use serde::{Deserialize, Serialize};

use crate::{
    core::msg::form::FormMsg,
    domain::{
        conversion::{ConversionRequest, ConversionTable, TABLE},
        format::format_value,
    },
};

/// Longest value the form lets you type
pub const MAX_VALUE_LEN: usize = 16;

/// Amount added or removed by stepping the value field
pub const VALUE_STEP: f64 = 0.1;

/// Fields of the converter form, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Field {
    #[default]
    Category,
    FromUnit,
    ToUnit,
    Value,
    Convert,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Category,
        Field::FromUnit,
        Field::ToUnit,
        Field::Value,
        Field::Convert,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Category => "Select a category:",
            Field::FromUnit => "Convert from:",
            Field::ToUnit => "Convert to:",
            Field::Value => "Enter the value:",
            Field::Convert => "[ Convert ]",
        }
    }

    fn index(&self) -> usize {
        Field::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Field {
        Field::ALL[(self.index() + 1) % Field::ALL.len()]
    }

    pub fn prev(&self) -> Field {
        Field::ALL[(self.index() + Field::ALL.len() - 1) % Field::ALL.len()]
    }
}

/// A successful conversion, kept until the form is edited again
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub request: ConversionRequest,
    pub result: f64,
}

/// Converter form state
#[derive(Debug, Clone)]
pub struct FormState {
    pub focus: Field,
    pub table: &'static ConversionTable,
    category: usize,
    from: usize,
    to: usize,
    value_input: String,
    outcome: Option<Outcome>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(&TABLE)
    }
}

impl FormState {
    pub fn new(table: &'static ConversionTable) -> Self {
        Self {
            focus: Field::default(),
            table,
            category: 0,
            from: 0,
            to: 0,
            value_input: String::new(),
            outcome: None,
        }
    }

    pub fn category_options(&self) -> Vec<&'static str> {
        self.table.category_names()
    }

    pub fn from_options(&self) -> Vec<&'static str> {
        self.table
            .categories()
            .get(self.category)
            .map(|c| c.unit_names())
            .unwrap_or_default()
    }

    /// Targets are always the keys of the selected source unit's row
    pub fn to_options(&self) -> Vec<&'static str> {
        self.table
            .categories()
            .get(self.category)
            .and_then(|c| c.units.get(self.from))
            .map(|u| u.target_names())
            .unwrap_or_default()
    }

    pub fn selected_category(&self) -> Option<&'static str> {
        self.category_options().get(self.category).copied()
    }

    pub fn selected_from(&self) -> Option<&'static str> {
        self.from_options().get(self.from).copied()
    }

    pub fn selected_to(&self) -> Option<&'static str> {
        self.to_options().get(self.to).copied()
    }

    pub fn value_input(&self) -> &str {
        &self.value_input
    }

    /// The entered value; empty input counts as zero
    pub fn value(&self) -> f64 {
        self.value_input.parse().unwrap_or(0.0)
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// The request the form describes right now, if every select has a value
    pub fn request(&self) -> Option<ConversionRequest> {
        Some(ConversionRequest::new(
            self.selected_category()?,
            self.selected_from()?,
            self.selected_to()?,
            self.value(),
        ))
    }

    /// Runs the conversion for the current selection.
    ///
    /// On success the outcome is stored and returned. On failure the request
    /// that had no table entry is returned and the result area stays empty.
    pub fn submit(&mut self) -> Result<Outcome, ConversionRequest> {
        self.outcome = None;
        let request = self.request().unwrap_or_else(|| {
            ConversionRequest::new(
                self.selected_category().unwrap_or_default(),
                self.selected_from().unwrap_or_default(),
                self.selected_to().unwrap_or_default(),
                self.value(),
            )
        });
        match self.table.apply(&request) {
            Some(result) => {
                let outcome = Outcome { request, result };
                self.outcome = Some(outcome.clone());
                Ok(outcome)
            }
            None => Err(request),
        }
    }

    /// Form-specific update function
    /// Returns: whether anything visible changed
    pub fn update(&mut self, msg: FormMsg) -> bool {
        if msg.invalidates_outcome() {
            self.outcome = None;
        }

        match msg {
            FormMsg::FocusNext => {
                self.focus = self.focus.next();
                true
            }
            FormMsg::FocusPrev => {
                self.focus = self.focus.prev();
                true
            }
            FormMsg::SelectNext => self.step(true),
            FormMsg::SelectPrev => self.step(false),
            FormMsg::InputChar(c) => self.push_char(c),
            FormMsg::DeleteChar => self.value_input.pop().is_some(),
            FormMsg::PasteValue(text) => self.paste(&text),
            FormMsg::ClearResult => true,
            // Conversion is handled by the top-level update
            FormMsg::Submit => false,
        }
    }

    fn step(&mut self, forward: bool) -> bool {
        match self.focus {
            Field::Category => {
                let len = self.category_options().len();
                self.category = cycle(self.category, len, forward);
                self.from = 0;
                self.to = 0;
            }
            Field::FromUnit => {
                let len = self.from_options().len();
                self.from = cycle(self.from, len, forward);
                self.to = 0;
            }
            Field::ToUnit => {
                let len = self.to_options().len();
                self.to = cycle(self.to, len, forward);
            }
            Field::Value => {
                let delta = if forward { VALUE_STEP } else { -VALUE_STEP };
                let stepped = (self.value() + delta).max(0.0);
                // Trim float noise from the step; large values have none to trim
                let stepped = if stepped < 1e9 {
                    (stepped * 1e6).round() / 1e6
                } else {
                    stepped
                };
                return self.set_value(stepped);
            }
            Field::Convert => return false,
        }
        true
    }

    fn push_char(&mut self, c: char) -> bool {
        let accepted = match c {
            '0'..='9' => true,
            '.' => !self.value_input.contains('.'),
            _ => false,
        };
        if !accepted || self.value_input.len() >= MAX_VALUE_LEN {
            return false;
        }
        self.value_input.push(c);
        true
    }

    fn paste(&mut self, text: &str) -> bool {
        match text.trim().parse::<f64>() {
            Ok(value) => self.set_value(value),
            Err(_) => false,
        }
    }

    /// Stores `value` as the input text if it is finite, non-negative and
    /// fits in the field.
    fn set_value(&mut self, value: f64) -> bool {
        if !value.is_finite() || value < 0.0 {
            return false;
        }
        let text = format_value(value);
        if text.len() > MAX_VALUE_LEN {
            return false;
        }
        self.value_input = text;
        true
    }
}

fn cycle(index: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        0
    } else if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::domain::conversion::{Category, Conversion, Target, Unit};

    fn form_with(msgs: impl IntoIterator<Item = FormMsg>) -> FormState {
        let mut form = FormState::default();
        for msg in msgs {
            form.update(msg);
        }
        form
    }

    #[test]
    fn test_initial_selection() {
        let form = FormState::default();
        assert_eq!(form.focus, Field::Category);
        assert_eq!(form.selected_category(), Some("Length"));
        assert_eq!(form.selected_from(), Some("Meters"));
        assert_eq!(form.selected_to(), Some("Kilometers"));
        assert_eq!(form.value(), 0.0);
        assert_eq!(form.outcome(), None);
    }

    #[test]
    fn test_focus_cycles_both_ways() {
        let mut form = FormState::default();
        for expected in [
            Field::FromUnit,
            Field::ToUnit,
            Field::Value,
            Field::Convert,
            Field::Category,
        ] {
            form.update(FormMsg::FocusNext);
            assert_eq!(form.focus, expected);
        }
        form.update(FormMsg::FocusPrev);
        assert_eq!(form.focus, Field::Convert);
    }

    #[test]
    fn test_category_change_resets_units() {
        let mut form = form_with([FormMsg::FocusNext, FormMsg::SelectNext]);
        assert_eq!(form.selected_from(), Some("Kilometers"));

        form.focus = Field::Category;
        form.update(FormMsg::SelectNext);
        assert_eq!(form.selected_category(), Some("Weight"));
        assert_eq!(form.selected_from(), Some("Kilograms"));
        assert_eq!(form.selected_to(), Some("Grams"));
    }

    #[test]
    fn test_from_change_resets_target() {
        let mut form = form_with([
            FormMsg::FocusNext,
            FormMsg::FocusNext,
            FormMsg::SelectNext,
        ]);
        assert_eq!(form.selected_to(), Some("Miles"));

        form.update(FormMsg::FocusPrev);
        form.update(FormMsg::SelectNext);
        assert_eq!(form.selected_from(), Some("Kilometers"));
        assert_eq!(form.to_options(), vec!["Meters", "Miles", "Feet"]);
        assert_eq!(form.selected_to(), Some("Meters"));
    }

    #[test]
    fn test_select_wraps_around() {
        let form = form_with([FormMsg::SelectPrev]);
        assert_eq!(form.selected_category(), Some("Temperature"));
        assert_eq!(form.selected_from(), Some("Celsius"));
    }

    #[rstest]
    #[case("12.5", "12.5")]
    #[case("1.2.3", "1.23")]
    #[case("a1b", "1")]
    #[case("-4", "4")]
    fn test_input_filtering(#[case] typed: &str, #[case] expected: &str) {
        let mut form = form_with([FormMsg::FocusPrev, FormMsg::FocusPrev]);
        assert_eq!(form.focus, Field::Value);
        for c in typed.chars() {
            form.update(FormMsg::InputChar(c));
        }
        assert_eq!(form.value_input(), expected);
    }

    #[test]
    fn test_input_length_is_capped() {
        let mut form = FormState::default();
        for _ in 0..(MAX_VALUE_LEN + 5) {
            form.update(FormMsg::InputChar('9'));
        }
        assert_eq!(form.value_input().len(), MAX_VALUE_LEN);
    }

    #[test]
    fn test_delete_char() {
        let mut form = form_with([FormMsg::InputChar('4'), FormMsg::InputChar('2')]);
        assert!(form.update(FormMsg::DeleteChar));
        assert_eq!(form.value_input(), "4");
        form.update(FormMsg::DeleteChar);
        assert!(!form.update(FormMsg::DeleteChar));
        assert_eq!(form.value(), 0.0);
    }

    #[test]
    fn test_value_stepping_is_clamped_at_zero() {
        let mut form = FormState::default();
        form.focus = Field::Value;
        form.update(FormMsg::SelectPrev);
        assert_eq!(form.value_input(), "0.0");
        form.update(FormMsg::SelectNext);
        form.update(FormMsg::SelectNext);
        form.update(FormMsg::SelectNext);
        assert_eq!(form.value_input(), "0.3");
        assert_eq!(form.value(), 0.3);
    }

    #[test]
    fn test_value_stepping_stays_finite_and_in_field() {
        let mut form = FormState::default();
        form.focus = Field::Value;
        assert!(!form.update(FormMsg::PasteValue("1e303".to_string())));
        assert_eq!(form.value_input(), "");

        assert!(form.update(FormMsg::PasteValue("99999999999999.0".to_string())));
        assert!(form.update(FormMsg::SelectNext));
        assert_eq!(form.value_input(), "99999999999999.1");
        // another step would need more digits than the field holds
        assert!(!form.update(FormMsg::SelectNext));
        assert_eq!(form.value_input(), "99999999999999.1");
        assert!(form.value().is_finite());

        let outcome = form.submit().expect("conversion exists");
        assert!(outcome.result.is_finite());
    }

    #[test]
    fn test_large_value_steps_without_rounding() {
        let mut form = FormState::default();
        form.focus = Field::Value;
        form.update(FormMsg::PasteValue("5000000000".to_string()));
        form.update(FormMsg::SelectPrev);
        assert_eq!(form.value_input(), "4999999999.9");
        assert!(form.value_input().len() <= MAX_VALUE_LEN);
    }

    #[rstest]
    #[case(" 42 ", Some("42.0"))]
    #[case("0.25", Some("0.25"))]
    #[case("-1", None)]
    #[case("NaN", None)]
    #[case("abc", None)]
    #[case("1e303", None)]
    #[case("12345678901234567", None)]
    #[case("1234567890123.5", Some("1234567890123.5"))]
    fn test_paste(#[case] text: &str, #[case] expected: Option<&str>) {
        let mut form = FormState::default();
        let changed = form.update(FormMsg::PasteValue(text.to_string()));
        assert_eq!(changed, expected.is_some());
        assert_eq!(form.value_input(), expected.unwrap_or(""));
    }

    #[test]
    fn test_submit_stores_outcome() {
        let mut form = form_with("1500".chars().map(FormMsg::InputChar));

        let outcome = form.submit().expect("conversion exists");
        assert_eq!(
            outcome.request,
            ConversionRequest::new("Length", "Meters", "Kilometers", 1500.0)
        );
        assert!((outcome.result - 1.5).abs() < 1e-12);
        assert_eq!(form.outcome(), Some(&outcome));
    }

    #[test]
    fn test_edit_clears_outcome_but_focus_does_not() {
        let mut form = FormState::default();
        form.submit().expect("conversion exists");

        form.update(FormMsg::FocusNext);
        assert!(form.outcome().is_some());

        form.update(FormMsg::InputChar('3'));
        assert!(form.outcome().is_none());

        form.submit().expect("conversion exists");
        form.update(FormMsg::ClearResult);
        assert!(form.outcome().is_none());
    }

    const SPARSE_CATEGORIES: &[Category] = &[Category {
        name: "Length",
        units: &[
            Unit {
                name: "Meters",
                targets: &[Target {
                    unit: "Feet",
                    conversion: Conversion::Scalar(3.28084),
                }],
            },
            Unit {
                name: "Liters",
                targets: &[],
            },
        ],
    }];

    static SPARSE: ConversionTable = ConversionTable::new(SPARSE_CATEGORIES);

    #[test]
    fn test_submit_without_entry_keeps_result_empty() {
        let mut form = FormState::new(&SPARSE);
        form.focus = Field::FromUnit;
        form.update(FormMsg::SelectNext);
        assert_eq!(form.selected_from(), Some("Liters"));
        assert_eq!(form.selected_to(), None);

        let missing = form.submit().expect_err("no target for Liters");
        assert_eq!(missing.category, "Length");
        assert_eq!(missing.from_unit, "Liters");
        assert_eq!(missing.to_unit, "");
        assert_eq!(form.outcome(), None);
    }
}
