use formdom::prelude::*;

use super::{CHECKOUT_SUBMIT, CHECKOUT_SUBMIT_LABEL};

/// The checkout form. Card number, expiry, and CVV are reformatted on
/// every keystroke; `saveCard` is never validated.
pub fn checkout() -> FormController {
    FormController::builder("checkout")
        .success_message("Pago procesado exitosamente. ¡Gracias por tu compra!")
        .submit_button(CHECKOUT_SUBMIT, CHECKOUT_SUBMIT_LABEL)
        .field(FieldKind::CardNumber, "cardNumber")
        .required("El número de tarjeta es requerido")
        .card_number("Número de tarjeta inválido")
        .field(FieldKind::ExpiryDate, "expiryDate")
        .required("La fecha de vencimiento es requerida")
        .expiry_date("Fecha de vencimiento inválida o expirada")
        .field(FieldKind::Cvv, "cvv")
        .required("El CVV es requerido")
        .cvv("CVV inválido (3-4 dígitos)")
        .field(FieldKind::Text, "cardName")
        .required("El nombre en la tarjeta es requerido")
        .field(FieldKind::Text, "billingAddress")
        .required("La dirección de facturación es requerida")
        .field(FieldKind::Checkbox, "saveCard")
        .build()
}
