//! The editable result field shared by both tools.
//!
//! Once a transform produces a result the user may overwrite it freely. The
//! edited text is what gets copied or opened and it is never re-validated.
//!
//! Copying shows a "copied" indicator that reverts after
//! [`COPIED_INDICATOR_TTL`]. Each copy hands out a [`CopyTicket`]; every later
//! copy, edit or replacement invalidates older tickets, so a reversion
//! scheduled for an earlier copy can never clear newer state.

use std::time::Duration;

/// How long the "copied" indicator stays on after a copy
pub const COPIED_INDICATOR_TTL: Duration = Duration::from_secs(2);

/// Proof of a specific copy action, used to revert its indicator later
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyTicket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditableResult {
    value: String,
    copied: bool,
    generation: u64,
}

impl EditableResult {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            copied: false,
            generation: 0,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Number of characters in the current value
    pub fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_copied(&self) -> bool {
        self.copied
    }

    /// Store a freshly produced transform output
    pub fn replace(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.reset_indicator();
    }

    /// Overwrite the value with user-edited text
    pub fn edit(&mut self, value: impl Into<String>) {
        self.replace(value);
    }

    /// Turn the indicator on for a copy of the current value
    pub fn mark_copied(&mut self) -> CopyTicket {
        self.generation += 1;
        self.copied = true;
        CopyTicket(self.generation)
    }

    /// Turn the indicator off if `ticket` belongs to the latest copy.
    ///
    /// Returns whether anything changed.
    pub fn revert_copied(&mut self, ticket: CopyTicket) -> bool {
        if ticket.0 != self.generation || !self.copied {
            return false;
        }

        self.copied = false;
        true
    }

    fn reset_indicator(&mut self) {
        self.generation += 1;
        self.copied = false;
    }
}
