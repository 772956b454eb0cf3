use contact_book::domain::ContactId;
use contact_book::models::{Contact, ContactFields};
use contact_book::store::ContactRepository;
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock contact repository for testing.
///
/// Keeps contacts in a plain Vec and tracks method calls so tests can
/// verify which store operations the form controller issued.
#[allow(dead_code)]
#[derive(Default)]
pub struct MockContactRepository {
    contacts: Vec<Contact>,
    call_counts: Mutex<HashMap<String, usize>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a contact without counting it as an `add` call.
    pub fn add_contact(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Number of calls that could have mutated the collection.
    pub fn mutation_count(&self) -> usize {
        self.get_call_count("add") + self.get_call_count("update") + self.get_call_count("remove")
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        let mut counts = self.call_counts.lock().unwrap();
        counts.clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl ContactRepository for MockContactRepository {
    fn contacts(&self) -> &[Contact] {
        self.track_call("contacts");
        &self.contacts
    }

    fn get(&self, id: ContactId) -> Option<&Contact> {
        self.track_call("get");
        self.contacts.iter().find(|c| c.id == id)
    }

    fn add(&mut self, contact: Contact) {
        self.track_call("add");
        self.contacts.push(contact);
    }

    fn update(&mut self, id: ContactId, fields: ContactFields) -> bool {
        self.track_call("update");
        match self.contacts.iter_mut().find(|c| c.id == id) {
            Some(contact) => {
                contact.apply(fields);
                true
            }
            None => false,
        }
    }

    fn remove(&mut self, id: ContactId) -> Option<Contact> {
        self.track_call("remove");
        let index = self.contacts.iter().position(|c| c.id == id)?;
        Some(self.contacts.remove(index))
    }
}
