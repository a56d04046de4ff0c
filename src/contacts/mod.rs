//! Teacher contact book.
//!
//! A flat CSV file holding teacher assignments. The core is a pure
//! state machine ([`ContactBook::apply`] over [`ContactAction`]); reading
//! operator input and printing results belongs to the CLI adapter.

mod actions;
mod book;
mod record;

pub use actions::{ActionOutcome, ContactAction};
pub use book::ContactBook;
pub use record::Contact;
