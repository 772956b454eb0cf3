//! Contact Book - an in-memory contact list with an add/edit form.
//!
//! The library holds the contact state and the rules around it: unique ids,
//! switching the form between creating and editing, and field validation.
//! Rendering is left to whoever embeds it; the bundled binary drives it from
//! a line-oriented shell.
//!
//! # Architecture
//!
//! - **domain**: Value objects (ids, email, phone) and id generators
//! - **models**: The `Contact` record and its editable fields
//! - **store**: The ordered contact collection with change notification
//! - **form**: Form state, validation and the create/edit controller
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for configuration and shell input
//! - **observability**: Mutation and submit counters
//! - **shell**: Command parsing and the stdin/stdout loop

pub mod config;
pub mod domain;
pub mod error;
pub mod form;
pub mod models;
pub mod observability;
pub mod shell;
pub mod store;

// Re-export commonly used types
pub use config::{Config, IdStrategy};
pub use domain::{ContactId, IdGenerator, ValidationError};
pub use error::{CommandError, ConfigError};
pub use form::{Field, FieldErrors, FormController, FormMode, FormOptions, FormState, SubmitOutcome};
pub use models::{Contact, ContactFields};
pub use observability::{MetricsSummary, MetricsTracker};
pub use store::{ContactRepository, ContactStore, StoreEvent, StoreListener, SubscriptionId};
