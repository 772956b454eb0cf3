use crate::domain::ContactId;
use crate::models::{Contact, ContactFields};

/// Repository for managing contacts.
///
/// Abstraction over the ordered contact collection the form controller
/// writes to. [`ContactStore`](super::ContactStore) is the in-memory
/// implementation; tests substitute mocks that count calls.
///
/// None of the operations fail. Referencing an unknown id is a no-op.
pub trait ContactRepository {
    /// Ordered snapshot of every contact.
    fn contacts(&self) -> &[Contact];

    /// Look up a contact by id.
    fn get(&self, id: ContactId) -> Option<&Contact>;

    /// Append a contact. The caller guarantees the id is fresh.
    fn add(&mut self, contact: Contact);

    /// Replace name/email/phone of the contact with `id`, keeping its position.
    ///
    /// Returns `false` (and changes nothing) when no contact has that id.
    fn update(&mut self, id: ContactId, fields: ContactFields) -> bool;

    /// Delete the contact with `id`, returning it if it was present.
    fn remove(&mut self, id: ContactId) -> Option<Contact>;

    /// Number of contacts.
    fn len(&self) -> usize {
        self.contacts().len()
    }

    /// True when there are no contacts.
    fn is_empty(&self) -> bool {
        self.contacts().is_empty()
    }

    /// True when a contact with `id` exists.
    fn contains(&self, id: ContactId) -> bool {
        self.get(id).is_some()
    }
}
