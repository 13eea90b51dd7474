//! Error presenter: projects field validity onto the document.
//!
//! Marking a field invalid adds the `error` class, writes the message into
//! the field's error slot, and triggers a one-shot `shake` that clears
//! itself after [`SHAKE_DURATION`] without blocking anything. Marking it
//! valid swaps `error` for `valid` and empties the slot.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::dom::{class, Document};
use crate::error::DomError;

/// How long the attention animation stays on a field.
pub const SHAKE_DURATION: Duration = Duration::from_millis(500);

/// Conventional id of the error-message slot paired with a field.
pub fn error_slot(field_id: &str) -> String {
    format!("{field_id}Error")
}

/// Tracks pending shake deadlines alongside the class/text mutations.
///
/// At most one of `error`/`valid` is ever present on an element; untouched
/// fields carry neither.
#[derive(Debug, Default)]
pub struct Presenter {
    shakes: HashMap<String, Instant>,
}

impl Presenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show an error on a field: `error` class on, `valid` off, message in
    /// the slot, and a fresh shake deadline. Re-marking a field that is
    /// already shaking restarts its deadline.
    pub fn mark_invalid(
        &mut self,
        doc: &mut Document,
        field_id: &str,
        message: &str,
        now: Instant,
    ) -> Result<(), DomError> {
        let element = doc.require_mut(field_id)?;
        element.classes.add(class::ERROR);
        element.classes.remove(class::VALID);
        element.classes.add(class::SHAKE);
        self.shakes
            .insert(field_id.to_string(), now + SHAKE_DURATION);

        let slot = doc.require_mut(&error_slot(field_id))?;
        slot.text = message.to_string();
        log::debug!("field '{field_id}' invalid: {message}");
        Ok(())
    }

    /// Clear an error: `valid` class on, `error` off, slot emptied. A
    /// shake still in flight is left to expire on its own.
    pub fn mark_valid(&mut self, doc: &mut Document, field_id: &str) -> Result<(), DomError> {
        let element = doc.require_mut(field_id)?;
        element.classes.remove(class::ERROR);
        element.classes.add(class::VALID);

        let slot = doc.require_mut(&error_slot(field_id))?;
        slot.text.clear();
        Ok(())
    }

    /// Reset path: remove every validity class and the message, returning
    /// the field to its untouched presentation.
    pub fn clear(&mut self, doc: &mut Document, field_id: &str) -> Result<(), DomError> {
        let element = doc.require_mut(field_id)?;
        element.classes.remove(class::ERROR);
        element.classes.remove(class::VALID);
        element.classes.remove(class::SHAKE);
        self.shakes.remove(field_id);

        let slot = doc.require_mut(&error_slot(field_id))?;
        slot.text.clear();
        Ok(())
    }

    /// Remove `shake` from every element whose deadline has passed.
    /// Drivers call this from a timer; tests pass a fabricated `now`.
    pub fn tick(&mut self, doc: &mut Document, now: Instant) {
        let expired: Vec<String> = self
            .shakes
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(id, _)| id.clone())
            .collect();
        for id in expired {
            if let Some(element) = doc.get_mut(&id) {
                element.classes.remove(class::SHAKE);
            }
            self.shakes.remove(&id);
        }
    }

    /// Whether any shake is still pending (drivers use this to keep their
    /// timer alive).
    pub fn has_pending_shakes(&self) -> bool {
        !self.shakes.is_empty()
    }
}
