//! Actions applied to the contact book.
//!
//! Every mutation is expressed as a [`ContactAction`] so the book can be
//! driven and tested without any console input; the CLI adapter only
//! builds actions and prints outcomes.

/// A mutation of the contact book.
#[derive(Debug, Clone)]
pub enum ContactAction {
    /// Append a new contact; the book assigns the next dense id and
    /// remarks start empty.
    Add {
        teacher_1: String,
        teacher_2: String,
        date: String,
        subject: String,
    },

    /// Partial update of a contact's fields; `None` leaves a field alone.
    Update {
        id: String,
        teacher_1: Option<String>,
        teacher_2: Option<String>,
        date: Option<String>,
        subject: Option<String>,
    },

    /// Overwrite a contact's remarks.
    SetRemarks { id: String, remarks: String },

    /// Remove a contact and renumber all survivors densely from 1.
    Delete { id: String },
}

/// What an action did to the book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Contact added under this id
    Added(String),
    /// Contact with this id updated in place
    Updated(String),
    /// Contact with this id removed (surviving ids renumbered)
    Deleted(String),
    /// No contact has this id; the book is unchanged
    NotFound(String),
}

impl ActionOutcome {
    /// True when the action missed and left the book unchanged.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ActionOutcome::NotFound(_))
    }

    /// True when the action mutated the book.
    pub fn changed(&self) -> bool {
        !self.is_not_found()
    }
}
