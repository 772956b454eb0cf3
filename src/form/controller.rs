//! The add/edit form controller.
//!
//! The controller owns the transient [`FormState`] and is the only thing
//! that writes to the store on the user's behalf. It has two modes:
//!
//! - **Create** (initial): submit appends a new contact with a fresh id.
//! - **Edit**: entered through [`FormController::select_for_edit`]; submit
//!   replaces the selected contact's fields and drops back to Create.
//!
//! Validation runs on every submit and nothing reaches the store unless all
//! three fields pass.

use super::state::{Field, FieldErrors, FormMode, FormState};
use super::validation::Validator;
use crate::config::Config;
use crate::domain::{ContactId, IdGenerator, PhoneNumber};
use crate::models::Contact;
use crate::observability::MetricsTracker;
use crate::store::ContactRepository;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Behavior switches for the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormOptions {
    /// Trim the name before validating and storing it.
    pub trim_name: bool,

    /// Reset the form when the contact being edited is deleted.
    pub reset_form_on_delete: bool,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            trim_name: false,
            reset_form_on_delete: true,
        }
    }
}

impl From<&Config> for FormOptions {
    fn from(config: &Config) -> Self {
        Self {
            trim_name: config.trim_name,
            reset_form_on_delete: config.reset_form_on_delete,
        }
    }
}

/// What an accepted submit did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// A new contact was appended.
    Created(ContactId),

    /// The edited contact was updated. `found` is false when the contact
    /// had already disappeared from the store, in which case nothing changed.
    Updated { id: ContactId, found: bool },
}

/// Drives the contact form against a [`ContactRepository`].
pub struct FormController {
    state: FormState,
    ids: Arc<dyn IdGenerator>,
    validator: Validator,
    options: FormOptions,
    metrics: MetricsTracker,
}

impl FormController {
    /// Create a controller in Create mode with empty fields.
    pub fn new(ids: Arc<dyn IdGenerator>, options: FormOptions) -> Self {
        Self {
            state: FormState::new(),
            ids,
            validator: Validator::new(options.trim_name),
            options,
            metrics: MetricsTracker::new(),
        }
    }

    /// Record submit outcomes on a shared tracker instead of a private one.
    pub fn with_metrics(mut self, metrics: MetricsTracker) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn mode(&self) -> FormMode {
        self.state.mode()
    }

    pub fn editing_id(&self) -> Option<ContactId> {
        self.state.editing_id()
    }

    pub fn options(&self) -> FormOptions {
        self.options
    }

    pub fn metrics(&self) -> &MetricsTracker {
        &self.metrics
    }

    /// Write one input. Phone input keeps only its decimal digits.
    pub fn set_field(&mut self, field: Field, value: &str) {
        let value = match field {
            Field::Phone => PhoneNumber::sanitize(value),
            Field::Name | Field::Email => value.to_string(),
        };
        self.state.set_value(field, value);
    }

    /// Load a contact into the form and switch to Edit mode.
    ///
    /// Unknown ids leave the form untouched and return `false`.
    pub fn select_for_edit<R>(&mut self, store: &R, id: ContactId) -> bool
    where
        R: ContactRepository + ?Sized,
    {
        match store.get(id) {
            Some(contact) => {
                self.state.load(id, contact.fields());
                debug!(contact_id = %id, "Editing contact");
                true
            }
            None => {
                debug!(contact_id = %id, "Edit ignored, no such contact");
                false
            }
        }
    }

    /// Validate and, if everything passes, create or update a contact.
    ///
    /// On success the fields are cleared and the form returns to Create
    /// mode. On failure the store is untouched, the form keeps its values,
    /// and the errors are both returned and kept in the form state.
    pub fn submit<R>(&mut self, store: &mut R) -> Result<SubmitOutcome, FieldErrors>
    where
        R: ContactRepository + ?Sized,
    {
        let fields = match self.validator.validate(self.state.fields()) {
            Ok(fields) => fields,
            Err(errors) => {
                self.metrics.track_submit(false, errors.len());
                debug!(errors = %errors, "Submit rejected");
                self.state.set_errors(errors.clone());
                return Err(errors);
            }
        };

        let outcome = match self.state.editing_id() {
            None => {
                let id = self.ids.next_id();
                store.add(Contact::new(id, fields));
                info!(contact_id = %id, "Contact created");
                SubmitOutcome::Created(id)
            }
            Some(id) => {
                let found = store.update(id, fields);
                if found {
                    info!(contact_id = %id, "Contact updated");
                } else {
                    warn!(contact_id = %id, "Edited contact no longer exists, update skipped");
                }
                SubmitOutcome::Updated { id, found }
            }
        };

        self.metrics.track_submit(true, 0);
        self.state.reset();
        Ok(outcome)
    }

    /// Delete a contact straight away.
    ///
    /// When the deleted contact is the one being edited and
    /// `reset_form_on_delete` is on, the form is reset to Create mode.
    /// Returns whether a contact was removed.
    pub fn delete_contact<R>(&mut self, store: &mut R, id: ContactId) -> bool
    where
        R: ContactRepository + ?Sized,
    {
        let removed = store.remove(id).is_some();
        if removed {
            info!(contact_id = %id, "Contact deleted");
        }

        if self.state.editing_id() == Some(id) {
            if self.options.reset_form_on_delete {
                debug!(contact_id = %id, "Deleted contact was being edited, form reset");
                self.state.reset();
            } else {
                warn!(contact_id = %id, "Deleted contact is still loaded in the form");
            }
        }

        removed
    }

    /// Abandon the current input and return to Create mode.
    pub fn cancel_edit(&mut self) {
        self.state.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SequentialIdGenerator;
    use crate::domain::ValidationError;
    use crate::models::ContactFields;
    use crate::store::ContactStore;

    fn controller() -> FormController {
        FormController::new(Arc::new(SequentialIdGenerator::new()), FormOptions::default())
    }

    fn fill(form: &mut FormController, name: &str, email: &str, phone: &str) {
        form.set_field(Field::Name, name);
        form.set_field(Field::Email, email);
        form.set_field(Field::Phone, phone);
    }

    #[test]
    fn test_phone_is_sanitized_while_typing() {
        let mut form = controller();
        form.set_field(Field::Phone, "12a3b");
        assert_eq!(form.state().value(Field::Phone), "123");

        // Other fields are stored verbatim
        form.set_field(Field::Name, " Ana 1 ");
        assert_eq!(form.state().value(Field::Name), " Ana 1 ");
    }

    #[test]
    fn test_submit_creates_and_clears() {
        let mut store = ContactStore::new();
        let mut form = controller();
        fill(&mut form, "Ana", "ana@example.com", "123");

        let outcome = form.submit(&mut store).unwrap();

        assert_eq!(outcome, SubmitOutcome::Created(ContactId::new(1)));
        assert_eq!(store.len(), 1);
        assert_eq!(store.contacts()[0].name, "Ana");
        assert_eq!(form.state(), &FormState::default());
        assert_eq!(form.mode(), FormMode::Create);
    }

    #[test]
    fn test_submit_rejects_empty_name() {
        let mut store = ContactStore::new();
        let mut form = controller();
        fill(&mut form, "", "a@b.c", "123");

        let errors = form.submit(&mut store).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Name), Some(&ValidationError::EmptyName));
        assert!(store.is_empty());
        // Input survives a rejected submit
        assert_eq!(form.state().value(Field::Email), "a@b.c");
        assert_eq!(form.state().errors(), &errors);
    }

    #[test]
    fn test_errors_recomputed_each_submit() {
        let mut store = ContactStore::new();
        let mut form = controller();
        fill(&mut form, "", "bad", "");
        assert_eq!(form.submit(&mut store).unwrap_err().len(), 3);

        form.set_field(Field::Name, "Ana");
        form.set_field(Field::Phone, "9");
        let errors = form.submit(&mut store).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.get(Field::Email).is_some());

        form.set_field(Field::Email, "ana@example.com");
        assert!(form.submit(&mut store).is_ok());
        assert!(form.state().errors().is_empty());
    }

    #[test]
    fn test_edit_cycle() {
        let mut store = ContactStore::new();
        store.add(Contact::new(
            ContactId::new(1),
            ContactFields::new("Old Name", "old@example.com", "111"),
        ));
        let mut form = controller();

        assert!(form.select_for_edit(&store, ContactId::new(1)));
        assert_eq!(form.mode(), FormMode::Edit(ContactId::new(1)));
        assert_eq!(form.state().value(Field::Email), "old@example.com");

        form.set_field(Field::Name, "New Name");
        let outcome = form.submit(&mut store).unwrap();

        assert_eq!(
            outcome,
            SubmitOutcome::Updated {
                id: ContactId::new(1),
                found: true
            }
        );
        assert_eq!(store.len(), 1);
        assert_eq!(store.contacts()[0].name, "New Name");
        assert_eq!(store.contacts()[0].id, ContactId::new(1));
        assert_eq!(form.editing_id(), None);
        assert!(form.state().fields().is_blank());
    }

    #[test]
    fn test_select_unknown_id_leaves_form_alone() {
        let store = ContactStore::new();
        let mut form = controller();
        form.set_field(Field::Name, "Draft");

        assert!(!form.select_for_edit(&store, ContactId::new(99)));
        assert_eq!(form.state().value(Field::Name), "Draft");
        assert_eq!(form.mode(), FormMode::Create);
    }

    #[test]
    fn test_delete_resets_form_of_edited_contact() {
        let mut store = ContactStore::new();
        store.add(Contact::new(ContactId::new(1), ContactFields::new("A", "a@b.c", "1")));
        let mut form = controller();
        form.select_for_edit(&store, ContactId::new(1));

        assert!(form.delete_contact(&mut store, ContactId::new(1)));
        assert_eq!(form.mode(), FormMode::Create);
        assert!(form.state().fields().is_blank());
    }

    #[test]
    fn test_delete_keeps_stale_form_when_configured() {
        let mut store = ContactStore::new();
        store.add(Contact::new(ContactId::new(1), ContactFields::new("A", "a@b.c", "1")));
        let mut form = FormController::new(
            Arc::new(SequentialIdGenerator::new()),
            FormOptions {
                trim_name: false,
                reset_form_on_delete: false,
            },
        );
        form.select_for_edit(&store, ContactId::new(1));
        form.delete_contact(&mut store, ContactId::new(1));

        assert_eq!(form.mode(), FormMode::Edit(ContactId::new(1)));

        let outcome = form.submit(&mut store).unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Updated {
                id: ContactId::new(1),
                found: false
            }
        );
        assert!(store.is_empty());
        assert_eq!(form.mode(), FormMode::Create);
    }

    #[test]
    fn test_delete_other_contact_keeps_edit() {
        let mut store = ContactStore::new();
        store.add(Contact::new(ContactId::new(1), ContactFields::new("A", "a@b.c", "1")));
        store.add(Contact::new(ContactId::new(2), ContactFields::new("B", "b@b.c", "2")));
        let mut form = controller();
        form.select_for_edit(&store, ContactId::new(1));

        form.delete_contact(&mut store, ContactId::new(2));
        assert_eq!(form.mode(), FormMode::Edit(ContactId::new(1)));
        assert_eq!(form.state().value(Field::Name), "A");
    }

    #[test]
    fn test_cancel_edit() {
        let mut store = ContactStore::new();
        store.add(Contact::new(ContactId::new(1), ContactFields::new("A", "a@b.c", "1")));
        let mut form = controller();
        form.select_for_edit(&store, ContactId::new(1));
        form.set_field(Field::Name, "Changed");

        form.cancel_edit();

        assert_eq!(form.mode(), FormMode::Create);
        assert_eq!(store.contacts()[0].name, "A");
    }

    #[test]
    fn test_metrics_count_submits() {
        let mut store = ContactStore::new();
        let metrics = MetricsTracker::new();
        let mut form = controller().with_metrics(metrics.clone());

        let _ = form.submit(&mut store);
        fill(&mut form, "Ana", "a@b.c", "1");
        let _ = form.submit(&mut store);

        assert_eq!(metrics.submits_rejected_total(), 1);
        assert_eq!(metrics.submits_accepted_total(), 1);
    }
}
