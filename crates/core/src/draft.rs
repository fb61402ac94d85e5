// Copyright (C) 2026 Backline Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// The "new item being composed" sub-form on a wizard step.
///
/// Every step that appends to a collection composes the new entity in an
/// ephemeral draft before committing it into the document. The machine is
/// `NotStarted → Editing → Committed`; drafts are never persisted across
/// steps, and discarding returns to `NotStarted`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DraftState<T> {
    /// No draft in progress.
    #[default]
    NotStarted,
    /// A draft is being edited.
    Editing(T),
    /// The last draft was committed into the document.
    Committed,
}

impl<T> DraftState<T> {
    /// Starts editing a new draft, replacing any draft in progress.
    pub fn begin(&mut self, draft: T) {
        *self = Self::Editing(draft);
    }

    /// Returns a mutable view of the draft being edited, if any.
    pub const fn editing_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Editing(draft) => Some(draft),
            Self::NotStarted | Self::Committed => None,
        }
    }

    /// Commits the draft, returning it for insertion into the document.
    ///
    /// Returns `None` when no draft is being edited.
    pub fn commit(&mut self) -> Option<T> {
        match std::mem::replace(self, Self::Committed) {
            Self::Editing(draft) => Some(draft),
            other => {
                // Nothing was being edited; keep the prior state.
                *self = other;
                None
            }
        }
    }

    /// Discards the draft without committing it.
    pub fn discard(&mut self) {
        *self = Self::NotStarted;
    }

    /// Whether a draft is currently being edited.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }
}

#[cfg(test)]
mod tests {
    use super::DraftState;

    #[test]
    fn test_draft_lifecycle() {
        let mut draft: DraftState<String> = DraftState::default();
        assert!(!draft.is_editing());
        assert_eq!(draft.commit(), None);

        draft.begin(String::from("VIP"));
        assert!(draft.is_editing());

        if let Some(value) = draft.editing_mut() {
            value.push_str(" Ticket");
        }

        assert_eq!(draft.commit(), Some(String::from("VIP Ticket")));
        assert_eq!(draft, DraftState::Committed);
        assert_eq!(draft.commit(), None);
    }

    #[test]
    fn test_discard_returns_to_not_started() {
        let mut draft: DraftState<u32> = DraftState::default();
        draft.begin(7);
        draft.discard();
        assert_eq!(draft, DraftState::NotStarted);
    }
}
