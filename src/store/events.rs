//! Change notifications published by the contact store.

use crate::domain::ContactId;
use crate::models::Contact;
use serde::Serialize;

/// What changed in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum StoreEvent {
    /// A contact was appended.
    Added(ContactId),

    /// A contact's fields were replaced in place.
    Updated(ContactId),

    /// A contact was deleted.
    Removed(ContactId),
}

impl StoreEvent {
    /// Id of the contact the event is about.
    pub fn contact_id(&self) -> ContactId {
        match self {
            Self::Added(id) | Self::Updated(id) | Self::Removed(id) => *id,
        }
    }

    /// Short name for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Added(_) => "added",
            Self::Updated(_) => "updated",
            Self::Removed(_) => "removed",
        }
    }
}

/// Receives a [`StoreEvent`] plus the post-mutation snapshot after every
/// effective change.
pub trait StoreListener: Send + Sync {
    fn on_change(&self, event: &StoreEvent, contacts: &[Contact]);
}

impl<F> StoreListener for F
where
    F: Fn(&StoreEvent, &[Contact]) + Send + Sync,
{
    fn on_change(&self, event: &StoreEvent, contacts: &[Contact]) {
        self(event, contacts)
    }
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);
