use formdom::prelude::*;

use super::{REGISTRATION_SUBMIT, REGISTRATION_SUBMIT_LABEL};

/// The registration form. The password confirmation is validated live on
/// every keystroke; everything else on submit.
pub fn registration() -> FormController {
    FormController::builder("registration")
        .success_message("Registro exitoso! Bienvenido a nuestra plataforma.")
        .submit_button(REGISTRATION_SUBMIT, REGISTRATION_SUBMIT_LABEL)
        .field(FieldKind::Text, "firstName")
        .required("El nombre es requerido")
        .field(FieldKind::Text, "lastName")
        .required("El apellido es requerido")
        .field(FieldKind::Email, "email")
        .required("El email es requerido")
        .email("Formato de email inválido")
        .field(FieldKind::Password, "password")
        .required("La contraseña es requerida")
        .min_length(8, "La contraseña debe tener al menos 8 caracteres")
        .field(FieldKind::Password, "confirmPassword")
        .matches("password", "Las contraseñas no coinciden")
        .field(FieldKind::Number, "age")
        .required("La edad es requerida")
        .int_range(18, 100, "La edad debe estar entre 18 y 100 años")
        .field(FieldKind::Checkbox, "terms")
        .required("Debes aceptar los términos y condiciones")
        .build()
}
