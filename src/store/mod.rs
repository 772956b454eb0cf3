//! Contact storage.
//!
//! The store owns the ordered contact collection and tells subscribers
//! whenever it changes. It is constructed explicitly and passed by
//! reference, so independent stores can coexist (one per test, say).

mod contact_store;
mod events;
mod traits;

pub use contact_store::ContactStore;
pub use events::{StoreEvent, StoreListener, SubscriptionId};
pub use traits::ContactRepository;
