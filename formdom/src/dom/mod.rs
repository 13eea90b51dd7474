//! Minimal document model: elements addressed by stable id.
//!
//! The document is the only mutation surface the validation and submission
//! machinery touches. All state changes are expressed as class toggles,
//! text assignments, and attribute flips on elements looked up by id, so a
//! test can assert on the exact same observable surface a browser driver
//! would.

mod classes;
mod element;

use std::collections::HashMap;

pub use classes::ClassList;
pub use element::Element;

use crate::error::DomError;

/// Class names understood by the presenter and coordinator. These are a
/// stable contract with external drivers; do not rename them.
pub mod class {
    pub const ERROR: &str = "error";
    pub const VALID: &str = "valid";
    pub const SHAKE: &str = "shake";
    pub const LOADING: &str = "loading";
    pub const SUCCESS: &str = "success";
    pub const ACTIVE: &str = "active";
    pub const RESULT_MESSAGE: &str = "result-message";
}

/// An id-keyed collection of [`Element`]s.
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: HashMap<String, Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an element, replacing any element with the same id.
    pub fn insert(&mut self, element: Element) {
        self.elements.insert(element.id.clone(), element);
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    /// Look up an element that must exist.
    pub fn require(&self, id: &str) -> Result<&Element, DomError> {
        self.elements.get(id).ok_or_else(|| DomError::missing(id))
    }

    /// Mutable lookup of an element that must exist.
    pub fn require_mut(&mut self, id: &str) -> Result<&mut Element, DomError> {
        self.elements
            .get_mut(id)
            .ok_or_else(|| DomError::missing(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.elements.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
