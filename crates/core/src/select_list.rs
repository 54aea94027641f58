//! Drop-down option lists.

use serde::{Deserialize, Serialize};

/// One option of an admin drop-down or multi-select.
///
/// `value` is the string form of the option's id; `"0"` is reserved for the
/// leading "All"/"None" item.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectListItem {
    pub text: String,
    pub value: String,
    #[serde(default)]
    pub selected: bool,
}

impl SelectListItem {
    pub fn new(text: impl Into<String>, value: impl ToString) -> Self {
        Self {
            text: text.into(),
            value: value.to_string(),
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// True for the "All"/"None" placeholder item.
    pub fn is_default_item(&self) -> bool {
        self.value == "0"
    }
}
