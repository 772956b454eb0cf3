//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for contact ids, email addresses
//! and phone numbers, plus the generators that hand out fresh ids. Value
//! objects validate at construction time so invalid data cannot reach the
//! store.

pub mod contact_id;
pub mod email;
pub mod errors;
pub mod id_generator;
pub mod phone;

pub use contact_id::ContactId;
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use id_generator::{ClockIdGenerator, IdGenerator, SequentialIdGenerator};
pub use phone::PhoneNumber;
