//! formdom: a headless form-validation engine.
//!
//! Models a page of forms as an id-addressed document plus explicit state
//! machines: pure field validators, an error presenter that speaks in
//! class toggles (`error`/`valid`/`shake`), a per-form submission
//! controller, and a tab coordinator. Everything observable (class names,
//! error texts, element ids) is deterministic, so the same assertions a
//! browser driver would make can run against the document directly.

pub mod app;
pub mod clock;
pub mod dom;
pub mod error;
pub mod field;
pub mod form;
pub mod presenter;
pub mod submit;
pub mod validation;

pub mod prelude {
    pub use crate::app::{Action, App, AppBuilder, Effect, TabBinding};
    pub use crate::clock::Clock;
    pub use crate::dom::{class, ClassList, Document, Element};
    pub use crate::error::{DomError, FormError};
    pub use crate::field::{format_input, FieldKind, FieldState, Validity};
    pub use crate::form::{
        error_summary, FormBuilder, FormController, Outcome, SubmissionResult, SubmitPhase,
        SubmitStep, BUSY_LABEL, SUBMISSION_DELAY,
    };
    pub use crate::presenter::{error_slot, Presenter, SHAKE_DURATION};
    pub use crate::submit::{FixedDelaySubmitter, Submitter};
    pub use crate::validation::{
        is_valid_card_number, is_valid_cvv, is_valid_email, is_valid_expiry, Rule,
        ValidationReport,
    };
}
