use std::collections::HashMap;

use super::ClassList;

/// A single addressable node in a [`Document`](super::Document).
///
/// An element carries exactly the surface the rest of the crate is allowed
/// to mutate: classes, text content, input value, checked/disabled flags,
/// visibility, and an inline text color. Anything richer (layout, styling)
/// belongs to the excluded presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Stable identifier, unique within a document.
    pub id: String,
    pub classes: ClassList,
    /// Text content (error slots, labels, counters, the result banner).
    pub text: String,
    /// Current value for input-like elements.
    pub value: String,
    /// Checked flag for checkbox-like elements.
    pub checked: bool,
    pub visible: bool,
    pub disabled: bool,
    /// Inline text color, when one has been assigned.
    pub color: Option<String>,
    /// `data-*` style attributes.
    pub data: HashMap<String, String>,
}

impl Element {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            classes: ClassList::new(),
            text: String::new(),
            value: String::new(),
            checked: false,
            visible: true,
            disabled: false,
            color: None,
            data: HashMap::new(),
        }
    }

    // Builder-style setters, used when assembling a page.

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.add(class);
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}
