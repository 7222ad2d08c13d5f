//! Form Input Coordinator
//!
//! Keyboard-only entry: Enter moves name → image URL → quantity → submit.

use crate::gift_list::GiftList;
use crate::storage::GiftStorage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    ImageUrl,
    Quantity,
}

/// What the form should do after a commit key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStep {
    /// Move focus to this field
    Focus(FormField),
    /// Keep focus where it is
    Stay,
    /// Submit the form
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormCoordinator {
    focused: FormField,
}

impl FormCoordinator {
    pub fn focused(&self) -> FormField {
        self.focused
    }

    /// Back to the name field, used whenever the form face is shown
    pub fn reset(&mut self) {
        self.focused = FormField::Name;
    }

    /// Track focus changes made with the pointer
    pub fn focus(&mut self, field: FormField) {
        self.focused = field;
    }

    /// Handle Enter pressed in the focused field, which holds `value`
    pub fn commit<S: GiftStorage>(&mut self, value: &str, list: &GiftList<S>) -> FormStep {
        let step = match self.focused {
            FormField::Name => match list.validate_name(value) {
                Ok(()) => FormStep::Focus(FormField::ImageUrl),
                Err(_) => FormStep::Stay,
            },
            FormField::ImageUrl => FormStep::Focus(FormField::Quantity),
            FormField::Quantity => FormStep::Submit,
        };
        if let FormStep::Focus(next) = step {
            self.focused = next;
        }
        step
    }
}

/// Parse the quantity input the lenient way number inputs are usually read:
/// leading whitespace, optional sign, then the leading run of digits.
/// `"3"`, `" 3 "` and `"3.7"` give 3; `""` and `"abc"` give `None`.
pub fn parse_quantity(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    let (negative, rest) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let value: i64 = rest[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}
