//! In-memory contact store with change notification.

use super::events::{StoreEvent, StoreListener, SubscriptionId};
use super::traits::ContactRepository;
use crate::domain::ContactId;
use crate::models::{Contact, ContactFields};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// The ordered contact collection.
///
/// Created empty, mutated only through [`ContactRepository`] operations,
/// dropped with its owner. Every mutation that changes the collection is
/// published to the subscribed listeners, in subscription order, after the
/// change has been applied. No-ops publish nothing.
#[derive(Default)]
pub struct ContactStore {
    contacts: Vec<Contact>,
    listeners: Vec<(SubscriptionId, Arc<dyn StoreListener>)>,
    next_subscription: u64,
}

impl ContactStore {
    /// Create an empty store with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for change events.
    pub fn subscribe(&mut self, listener: Arc<dyn StoreListener>) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, listener));
        debug!(subscription = id.0, "Store listener subscribed");
        id
    }

    /// Drop a listener. Returns `false` if it was not subscribed.
    pub fn unsubscribe(&mut self, subscription: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(id, _)| *id != subscription);
        self.listeners.len() != before
    }

    /// Number of subscribed listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn position(&self, id: ContactId) -> Option<usize> {
        self.contacts.iter().position(|c| c.id == id)
    }

    fn publish(&self, event: StoreEvent) {
        debug!(
            event = event.kind(),
            contact_id = %event.contact_id(),
            contacts = self.contacts.len(),
            "Store changed"
        );
        for (_, listener) in &self.listeners {
            listener.on_change(&event, &self.contacts);
        }
    }
}

impl ContactRepository for ContactStore {
    fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    fn get(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    fn add(&mut self, contact: Contact) {
        let id = contact.id;
        self.contacts.push(contact);
        self.publish(StoreEvent::Added(id));
    }

    fn update(&mut self, id: ContactId, fields: ContactFields) -> bool {
        match self.position(id) {
            Some(index) => {
                self.contacts[index].apply(fields);
                self.publish(StoreEvent::Updated(id));
                true
            }
            None => {
                debug!(contact_id = %id, "Update ignored, no such contact");
                false
            }
        }
    }

    fn remove(&mut self, id: ContactId) -> Option<Contact> {
        let index = match self.position(id) {
            Some(index) => index,
            None => {
                debug!(contact_id = %id, "Remove ignored, no such contact");
                return None;
            }
        };

        let removed = self.contacts.remove(index);
        self.publish(StoreEvent::Removed(id));
        Some(removed)
    }
}

impl fmt::Debug for ContactStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactStore")
            .field("contacts", &self.contacts)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
