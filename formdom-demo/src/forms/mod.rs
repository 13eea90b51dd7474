//! The three demo forms and their validation rules.

mod checkout;
mod contact;
mod registration;

pub use checkout::checkout;
pub use contact::contact;
pub use registration::registration;

pub const REGISTRATION_SUBMIT: &str = "registrationSubmit";
pub const REGISTRATION_SUBMIT_LABEL: &str = "Registrarse";

pub const CONTACT_SUBMIT: &str = "contactSubmit";
pub const CONTACT_SUBMIT_LABEL: &str = "Enviar Mensaje";

pub const CHECKOUT_SUBMIT: &str = "checkoutSubmit";
pub const CHECKOUT_SUBMIT_LABEL: &str = "Completar Compra";
