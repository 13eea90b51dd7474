use formdom::prelude::*;

use super::{CONTACT_SUBMIT, CONTACT_SUBMIT_LABEL};
use crate::page::MESSAGE_COUNT;

/// The contact form. The message textarea feeds a live character counter.
pub fn contact() -> FormController {
    FormController::builder("contact")
        .success_message("Mensaje enviado exitosamente. Te responderemos pronto.")
        .submit_button(CONTACT_SUBMIT, CONTACT_SUBMIT_LABEL)
        .field(FieldKind::Text, "contactName")
        .required("El nombre es requerido")
        .field(FieldKind::Email, "contactEmail")
        .required("El email es requerido")
        .email("Formato de email inválido")
        .field(FieldKind::Select, "subject")
        .required("Debes seleccionar un asunto")
        .field(FieldKind::Textarea, "message")
        .required("El mensaje es requerido")
        .min_length(10, "El mensaje debe tener al menos 10 caracteres")
        .char_counter(MESSAGE_COUNT)
        .build()
}
