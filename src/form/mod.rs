//! The add/edit contact form.
//!
//! - **state**: field values, edit mode and per-field errors
//! - **validation**: the submit-time field rules
//! - **controller**: mode switching and dispatch to the store

mod controller;
mod state;
mod validation;

pub use controller::{FormController, FormOptions, SubmitOutcome};
pub use state::{Field, FieldErrors, FormMode, FormState};
pub use validation::Validator;
