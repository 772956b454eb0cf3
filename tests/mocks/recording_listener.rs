use contact_book::models::Contact;
use contact_book::store::{StoreEvent, StoreListener};
use std::sync::{Arc, Mutex};

/// Store listener that records every notification it receives.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct RecordingListener {
    events: Arc<Mutex<Vec<StoreEvent>>>,
    snapshots: Arc<Mutex<Vec<Vec<Contact>>>>,
}

#[allow(dead_code)]
impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events received so far, in order.
    pub fn events(&self) -> Vec<StoreEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Snapshot passed along with the most recent event.
    pub fn last_snapshot(&self) -> Option<Vec<Contact>> {
        self.snapshots.lock().unwrap().last().cloned()
    }

    pub fn count(&self) -> usize {
        self.events.lock().unwrap().len()
    }
}

impl StoreListener for RecordingListener {
    fn on_change(&self, event: &StoreEvent, contacts: &[Contact]) {
        self.events.lock().unwrap().push(*event);
        self.snapshots.lock().unwrap().push(contacts.to_vec());
    }
}
