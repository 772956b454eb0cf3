//! Command dispatch for one shell session.

use super::command::{Command, USAGE};
use crate::config::Config;
use crate::domain::IdGenerator;
use crate::form::{FormController, FormOptions};
use crate::models::Contact;
use crate::observability::MetricsTracker;
use crate::store::{ContactRepository, ContactStore, StoreEvent};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Result of executing one command.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    /// JSON lines to print, in order
    pub lines: Vec<Value>,

    /// The session asked to end
    pub quit: bool,
}

impl Reply {
    fn one(value: Value) -> Self {
        Self {
            lines: vec![value],
            quit: false,
        }
    }
}

/// A store, a form bound to it, and the metrics both feed.
///
/// The session subscribes to its own store and, after each command, emits
/// a `contacts_changed` line with the fresh snapshot if anything changed.
pub struct Session {
    store: ContactStore,
    form: FormController,
    metrics: MetricsTracker,
    pending: Arc<Mutex<Vec<StoreEvent>>>,
}

impl Session {
    /// Build a session from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.id_strategy.generator(), FormOptions::from(config))
    }

    pub fn new(ids: Arc<dyn IdGenerator>, options: FormOptions) -> Self {
        let metrics = MetricsTracker::new();
        let pending: Arc<Mutex<Vec<StoreEvent>>> = Arc::new(Mutex::new(Vec::new()));

        let mut store = ContactStore::new();
        store.subscribe(Arc::new(metrics.clone()));

        let sink = pending.clone();
        store.subscribe(Arc::new(move |event: &StoreEvent, _: &[Contact]| {
            let mut pending = sink.lock().unwrap_or_else(|poisoned| {
                warn!("Pending event buffer was poisoned, recovering");
                poisoned.into_inner()
            });
            pending.push(*event);
        }));

        let form = FormController::new(ids, options).with_metrics(metrics.clone());

        Self {
            store,
            form,
            metrics,
            pending,
        }
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn metrics(&self) -> &MetricsTracker {
        &self.metrics
    }

    /// Run one command against the store and form.
    pub fn execute(&mut self, command: Command) -> Reply {
        let mut reply = match command {
            Command::Set(field, value) => {
                self.form.set_field(field, &value);
                Reply::one(json!({ "ok": true, "form": self.form.state() }))
            }
            Command::Edit(id) => {
                let found = self.form.select_for_edit(&self.store, id);
                let mut value = json!({ "ok": found, "form": self.form.state() });
                if !found {
                    value["error"] = json!(format!("No contact with id {}", id));
                }
                Reply::one(value)
            }
            Command::Submit => match self.form.submit(&mut self.store) {
                Ok(outcome) => Reply::one(json!({ "ok": true, "outcome": outcome })),
                Err(errors) => Reply::one(json!({ "ok": false, "errors": errors })),
            },
            Command::Delete(id) => {
                let removed = self.form.delete_contact(&mut self.store, id);
                Reply::one(json!({ "ok": true, "removed": removed }))
            }
            Command::Cancel => {
                self.form.cancel_edit();
                Reply::one(json!({ "ok": true, "form": self.form.state() }))
            }
            Command::List => Reply::one(json!({ "ok": true, "contacts": self.store.contacts() })),
            Command::Form => Reply::one(json!({
                "ok": true,
                "mode": self.form.mode(),
                "form": self.form.state(),
            })),
            Command::Stats => Reply::one(json!({
                "ok": true,
                "contacts": self.store.len(),
                "metrics": self.metrics.summary(),
            })),
            Command::Help => Reply::one(json!({ "ok": true, "commands": USAGE })),
            Command::Quit => Reply {
                lines: vec![json!({ "ok": true, "bye": true })],
                quit: true,
            },
        };

        let events = self.drain_events();
        if !events.is_empty() {
            reply.lines.push(json!({
                "type": "contacts_changed",
                "events": events,
                "contacts": self.store.contacts(),
            }));
        }

        reply
    }

    fn drain_events(&self) -> Vec<StoreEvent> {
        let mut pending = self.pending.lock().unwrap_or_else(|poisoned| {
            warn!("Pending event buffer was poisoned, recovering");
            poisoned.into_inner()
        });
        std::mem::take(&mut *pending)
    }
}
