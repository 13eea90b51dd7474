//! Form validation: rule definitions and per-pass reports.
//!
//! Rules are pure predicates over field state; they never touch the
//! document and never throw. A validation pass evaluates every field's
//! rules (no short-circuiting across fields, so all errors surface at
//! once) and produces a [`ValidationReport`] whose error count equals the
//! number of failing fields.
//!
//! # Example
//!
//! ```ignore
//! let form = FormController::builder("registration")
//!     .field(FieldKind::Text, "firstName")
//!         .required("El nombre es requerido")
//!     .field(FieldKind::Email, "email")
//!         .required("El email es requerido")
//!         .email("Formato de email inválido")
//!     .build();
//!
//! let report = form.evaluate(today);
//! assert_eq!(report.error_count(), 2);
//! ```

mod result;
mod rules;

pub use result::{FieldOutcome, ValidationReport};
pub use rules::{
    is_valid_card_number, is_valid_cvv, is_valid_email, is_valid_expiry, required_rule, Rule,
};
