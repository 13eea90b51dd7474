//! Error types

/// Error type for document lookups.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomError {
    /// The requested element does not exist in the document.
    #[error("Element '{id}' not found in document")]
    MissingElement { id: String },
}

impl DomError {
    /// Creates a new missing element error.
    pub fn missing(id: impl Into<String>) -> Self {
        Self::MissingElement { id: id.into() }
    }
}

/// Error type for action dispatch.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FormError {
    /// No registered form matches the given type.
    #[error("Form '{form_type}' is not registered")]
    UnknownForm { form_type: String },

    /// No registered form owns the given field.
    #[error("Field '{id}' does not belong to any registered form")]
    UnknownField { id: String },

    /// No registered tab matches the given name.
    #[error("Tab '{tab}' is not registered")]
    UnknownTab { tab: String },

    #[error(transparent)]
    Dom(#[from] DomError),
}

impl FormError {
    pub fn unknown_form(form_type: impl Into<String>) -> Self {
        Self::UnknownForm {
            form_type: form_type.into(),
        }
    }

    pub fn unknown_field(id: impl Into<String>) -> Self {
        Self::UnknownField { id: id.into() }
    }

    pub fn unknown_tab(tab: impl Into<String>) -> Self {
        Self::UnknownTab { tab: tab.into() }
    }
}
