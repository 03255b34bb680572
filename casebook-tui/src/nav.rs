//! Navigation requests raised from table handlers.
//!
//! Column and action handlers run inside the table's event dispatch and
//! cannot reach the app, so they leave a request in the shared [`Outbox`].
//! The app drains it after every command.

use std::sync::{Arc, Mutex};

use log::warn;

/// A request to change what the dashboard shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigate {
    /// Open the detail view of an invoice.
    Invoice(String),
    /// Open the detail view of a matter.
    Matter(String),
}

/// Shared queue of pending [`Navigate`] requests.
#[derive(Debug, Clone, Default)]
pub struct Outbox {
    inner: Arc<Mutex<Vec<Navigate>>>,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, request: Navigate) {
        match self.inner.lock() {
            Ok(mut queue) => queue.push(request),
            Err(_) => warn!("navigation outbox poisoned, dropping {:?}", request),
        }
    }

    /// Take every pending request, oldest first.
    pub fn drain(&self) -> Vec<Navigate> {
        self.inner
            .lock()
            .map(|mut queue| std::mem::take(&mut *queue))
            .unwrap_or_default()
    }

    /// Handler pushing an invoice request for the row's `field`.
    pub fn open_invoice(&self, field: &'static str) -> impl Fn(&casebook_table::Row) + Send + Sync + 'static {
        let outbox = self.clone();
        move |row| {
            if let Some(id) = row.get_str(field).filter(|id| !id.is_empty()) {
                outbox.push(Navigate::Invoice(id.to_string()));
            }
        }
    }

    /// Handler pushing a matter request for the row's `field`.
    pub fn open_matter(&self, field: &'static str) -> impl Fn(&casebook_table::Row) + Send + Sync + 'static {
        let outbox = self.clone();
        move |row| {
            if let Some(id) = row.get_str(field).filter(|id| !id.is_empty()) {
                outbox.push(Navigate::Matter(id.to_string()));
            }
        }
    }
}
