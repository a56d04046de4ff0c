//! In-memory contact book with whole-file CSV persistence.
//!
//! The file is loaded in full, mutated in memory, and rewritten in full
//! after every mutating action. No locking; the book assumes one process.

use crate::contacts::actions::{ActionOutcome, ContactAction};
use crate::contacts::record::Contact;
use crate::error::Result;
use std::path::Path;

/// The full set of contacts, in stored order.
#[derive(Debug, Default)]
pub struct ContactBook {
    contacts: Vec<Contact>,
}

impl ContactBook {
    /// An empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the book from a CSV file. A missing file yields an empty
    /// book; it will be created on the first save.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("Contacts file {} does not exist, starting empty", path.display());
            return Ok(Self::new());
        }

        let mut reader = csv::Reader::from_path(path)?;
        let contacts = reader.deserialize().collect::<csv::Result<Vec<Contact>>>()?;
        Ok(Self { contacts })
    }

    /// Rewrite the whole file from the current state.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        if self.contacts.is_empty() {
            // serialize() would never run, so emit the header by hand.
            writer.write_record(["ID", "Teacher_1", "Teacher_2", "Date", "Subject", "Remarks"])?;
        }
        for contact in &self.contacts {
            writer.serialize(contact)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// All contacts in stored order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Look up a contact by its current id.
    pub fn get(&self, id: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    /// Case-insensitive equality match on the free-text date field.
    pub fn search_by_date(&self, date: &str) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|c| c.date.eq_ignore_ascii_case(date))
            .collect()
    }

    /// Apply one action. Misses come back as `NotFound` and leave the
    /// book untouched; they are outcomes, not errors.
    pub fn apply(&mut self, action: ContactAction) -> ActionOutcome {
        match action {
            ContactAction::Add {
                teacher_1,
                teacher_2,
                date,
                subject,
            } => {
                let id = (self.contacts.len() + 1).to_string();
                self.contacts.push(Contact {
                    id: id.clone(),
                    teacher_1,
                    teacher_2,
                    date,
                    subject,
                    remarks: String::new(),
                });
                ActionOutcome::Added(id)
            }

            ContactAction::Update {
                id,
                teacher_1,
                teacher_2,
                date,
                subject,
            } => match self.contacts.iter_mut().find(|c| c.id == id) {
                Some(contact) => {
                    if let Some(name) = teacher_1 {
                        contact.teacher_1 = name;
                    }
                    if let Some(name) = teacher_2 {
                        contact.teacher_2 = name;
                    }
                    if let Some(date) = date {
                        contact.date = date;
                    }
                    if let Some(subject) = subject {
                        contact.subject = subject;
                    }
                    ActionOutcome::Updated(id)
                }
                None => ActionOutcome::NotFound(id),
            },

            ContactAction::SetRemarks { id, remarks } => {
                match self.contacts.iter_mut().find(|c| c.id == id) {
                    Some(contact) => {
                        contact.remarks = remarks;
                        ActionOutcome::Updated(id)
                    }
                    None => ActionOutcome::NotFound(id),
                }
            }

            ContactAction::Delete { id } => {
                match self.contacts.iter().position(|c| c.id == id) {
                    Some(pos) => {
                        self.contacts.remove(pos);
                        self.reset_ids();
                        ActionOutcome::Deleted(id)
                    }
                    None => ActionOutcome::NotFound(id),
                }
            }
        }
    }

    /// Renumber every contact densely 1..N. Any previously recorded id is
    /// invalid afterwards and may point at a different contact.
    fn reset_ids(&mut self) {
        for (idx, contact) in self.contacts.iter_mut().enumerate() {
            contact.id = (idx + 1).to_string();
        }
    }
}
