//! Registry of live contact form instances
//!
//! Each page load creates one [`ContactForm`] keyed by a [`FormId`]. Events
//! for a form are applied under the registry's write lock, so a form never
//! sees two transitions interleave.

use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::forms::ContactForm;

/// Identifier of one form instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormId(Uuid);

impl FormId {
    /// Generate a new random id
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// URL prefix for this form's routes
    #[must_use]
    pub fn base_path(&self) -> String {
        format!("/forms/{}", self.0)
    }
}

impl Default for FormId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Default)]
struct Inner {
    forms: HashMap<FormId, ContactForm>,
    order: VecDeque<FormId>,
}

/// Shared map of form instances with capacity-based eviction
///
/// When the registry is full, creating a form evicts the oldest one.
///
/// # Example
///
/// ```rust
/// use contact_form::forms::Field;
/// use contact_form::state::FormRegistry;
///
/// let registry = FormRegistry::new(8);
/// let id = registry.create();
///
/// registry.update(id, |form| form.on_field_change(Field::FirstName, "Bill"));
/// let snapshot = registry.get(id).unwrap();
/// assert_eq!(snapshot.values().first_name, "Bill");
/// ```
#[derive(Debug, Clone)]
pub struct FormRegistry {
    inner: Arc<RwLock<Inner>>,
    capacity: usize,
}

impl FormRegistry {
    /// Create a registry holding at most `capacity` forms (minimum one)
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner::default())),
            capacity: capacity.max(1),
        }
    }

    /// Create a fresh form and return its id
    pub fn create(&self) -> FormId {
        let id = FormId::new();
        let mut inner = self.inner.write();

        while inner.forms.len() >= self.capacity {
            let Some(oldest) = inner.order.pop_front() else {
                break;
            };
            inner.forms.remove(&oldest);
            tracing::debug!(form_id = %oldest, "evicted oldest form");
        }

        inner.forms.insert(id, ContactForm::new());
        inner.order.push_back(id);
        id
    }

    /// Snapshot of a form's current state
    #[must_use]
    pub fn get(&self, id: FormId) -> Option<ContactForm> {
        self.inner.read().forms.get(&id).cloned()
    }

    /// Apply `f` to a form under the write lock
    ///
    /// Returns `None` if the form does not exist.
    pub fn update<R>(&self, id: FormId, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
        self.inner.write().forms.get_mut(&id).map(f)
    }

    /// Number of live forms
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().forms.len()
    }

    /// Whether no forms are live
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().forms.is_empty()
    }

    /// Maximum number of live forms
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}
