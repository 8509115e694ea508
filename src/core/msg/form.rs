use serde::{Deserialize, Serialize};

/// Messages handled by the converter form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormMsg {
    // Focus cycles over category, from, to, value and the convert button
    FocusNext,
    FocusPrev,

    // Option cycling for selects; stepping for the value field
    SelectNext,
    SelectPrev,

    // Value editing
    InputChar(char),
    DeleteChar,
    PasteValue(String),

    Submit,
    ClearResult,
}

impl FormMsg {
    /// Whether handling the message hides a shown result
    pub fn invalidates_outcome(&self) -> bool {
        !matches!(
            self,
            FormMsg::FocusNext | FormMsg::FocusPrev | FormMsg::Submit
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalidates_outcome() {
        assert!(FormMsg::SelectNext.invalidates_outcome());
        assert!(FormMsg::InputChar('1').invalidates_outcome());
        assert!(FormMsg::DeleteChar.invalidates_outcome());
        assert!(FormMsg::ClearResult.invalidates_outcome());
        assert!(!FormMsg::FocusNext.invalidates_outcome());
        assert!(!FormMsg::Submit.invalidates_outcome());
    }
}
