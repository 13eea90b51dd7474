use std::time::Instant;

use chrono::NaiveDate;
use formdom::clock::Clock;
use formdom::dom::{class, Document, Element};
use formdom::field::{FieldKind, Validity};
use formdom::form::{error_summary, FormController, Outcome, SubmitPhase, SubmitStep, BUSY_LABEL};
use formdom::presenter::{error_slot, Presenter};

fn clock() -> Clock {
    Clock::at(Instant::now(), NaiveDate::from_ymd_opt(2025, 6, 15).unwrap())
}

fn signup_form() -> FormController {
    FormController::builder("signup")
        .success_message("Cuenta creada exitosamente.")
        .submit_button("signupSubmit", "Crear Cuenta")
        .field(FieldKind::Text, "name")
        .required("El nombre es requerido")
        .field(FieldKind::Email, "mail")
        .required("El email es requerido")
        .email("Formato de email inválido")
        .field(FieldKind::Password, "pass")
        .required("La contraseña es requerida")
        .min_length(8, "La contraseña debe tener al menos 8 caracteres")
        .field(FieldKind::Password, "passConfirm")
        .matches("pass", "Las contraseñas no coinciden")
        .build()
}

fn signup_doc() -> Document {
    let mut doc = Document::new();
    for id in ["name", "mail", "pass", "passConfirm"] {
        doc.insert(Element::new(id));
        doc.insert(Element::new(error_slot(id)));
    }
    doc.insert(Element::new("signupSubmit").text("Crear Cuenta"));
    doc
}

fn fixture() -> (FormController, Document, Presenter) {
    (signup_form(), signup_doc(), Presenter::new())
}

fn fill_valid(form: &mut FormController, doc: &mut Document, presenter: &mut Presenter) {
    let clock = clock();
    for (field, value) in [
        ("name", "Juan"),
        ("mail", "juan@ejemplo.com"),
        ("pass", "password123"),
        ("passConfirm", "password123"),
    ] {
        form.input(doc, presenter, field, value, &clock).unwrap();
    }
}

// ============================================================================
// Evaluation
// ============================================================================

#[test]
fn test_pristine_evaluation_counts_required_failures() {
    let form = signup_form();
    let report = form.evaluate(clock().today);

    // The empty confirmation equals the empty password, so it passes.
    assert_eq!(report.error_count(), 3);
    assert!(report.outcome("passConfirm").unwrap().passed());
    assert_eq!(
        report.outcome("name").unwrap().error.as_deref(),
        Some("El nombre es requerido")
    );
}

#[test]
fn test_first_failing_rule_wins() {
    let (mut form, mut doc, mut presenter) = fixture();
    form.input(&mut doc, &mut presenter, "mail", "no-es-email", &clock())
        .unwrap();

    let report = form.evaluate(clock().today);
    assert_eq!(
        report.outcome("mail").unwrap().error.as_deref(),
        Some("Formato de email inválido")
    );
}

#[test]
fn test_evaluation_is_idempotent() {
    let (mut form, mut doc, mut presenter) = fixture();
    form.input(&mut doc, &mut presenter, "mail", "no-es-email", &clock())
        .unwrap();

    let first = form.evaluate(clock().today);
    let second = form.evaluate(clock().today);
    assert_eq!(first, second);
}

// ============================================================================
// Rejected submit
// ============================================================================

#[test]
fn test_rejected_submit_marks_fields_and_reports() {
    let (mut form, mut doc, mut presenter) = fixture();
    let step = form.submit(&mut doc, &mut presenter, &clock()).unwrap();

    let SubmitStep::Rejected(result) = step else {
        panic!("expected rejection");
    };
    assert_eq!(result.outcome, Outcome::ValidationFailed);
    assert_eq!(result.error_count, 3);
    assert_eq!(result.message, error_summary(3));
    assert_eq!(form.phase(), SubmitPhase::Done);

    // Failing fields carry `error`, the passing confirmation carries `valid`.
    assert!(doc.get("name").unwrap().has_class(class::ERROR));
    assert!(doc.get("nameError").unwrap().text == "El nombre es requerido");
    assert!(doc.get("passConfirm").unwrap().has_class(class::VALID));
    assert_eq!(form.field("name").unwrap().validity(), Validity::Invalid);
    assert_eq!(
        form.field("passConfirm").unwrap().validity(),
        Validity::Valid
    );

    // The button is untouched.
    assert!(!doc.get("signupSubmit").unwrap().disabled);
}

#[test]
fn test_resubmitting_unchanged_form_reproduces_result() {
    let (mut form, mut doc, mut presenter) = fixture();
    let first = form.submit(&mut doc, &mut presenter, &clock()).unwrap();
    let second = form.submit(&mut doc, &mut presenter, &clock()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_corrected_form_succeeds_after_rejection() {
    let (mut form, mut doc, mut presenter) = fixture();
    form.submit(&mut doc, &mut presenter, &clock()).unwrap();

    fill_valid(&mut form, &mut doc, &mut presenter);
    let step = form.submit(&mut doc, &mut presenter, &clock()).unwrap();
    assert_eq!(step, SubmitStep::Accepted);
}

// ============================================================================
// Accepted submit and completion
// ============================================================================

#[test]
fn test_accepted_submit_disables_and_relabels_button() {
    let (mut form, mut doc, mut presenter) = fixture();
    fill_valid(&mut form, &mut doc, &mut presenter);

    let step = form.submit(&mut doc, &mut presenter, &clock()).unwrap();
    assert_eq!(step, SubmitStep::Accepted);
    assert_eq!(form.phase(), SubmitPhase::Submitting);

    let button = doc.get("signupSubmit").unwrap();
    assert!(button.disabled);
    assert_eq!(button.text, BUSY_LABEL);
    assert!(button.has_class(class::LOADING));
}

#[test]
fn test_submit_while_submitting_is_ignored() {
    let (mut form, mut doc, mut presenter) = fixture();
    fill_valid(&mut form, &mut doc, &mut presenter);
    form.submit(&mut doc, &mut presenter, &clock()).unwrap();

    let step = form.submit(&mut doc, &mut presenter, &clock()).unwrap();
    assert_eq!(step, SubmitStep::Ignored);
}

#[test]
fn test_completion_restores_button_and_reports_success() {
    let (mut form, mut doc, mut presenter) = fixture();
    fill_valid(&mut form, &mut doc, &mut presenter);
    form.submit(&mut doc, &mut presenter, &clock()).unwrap();

    let result = form.complete(&mut doc).unwrap().unwrap();
    assert_eq!(result.outcome, Outcome::Success);
    assert_eq!(result.error_count, 0);
    assert_eq!(result.message, "Cuenta creada exitosamente.");
    assert_eq!(form.phase(), SubmitPhase::Done);

    let button = doc.get("signupSubmit").unwrap();
    assert!(!button.disabled);
    assert_eq!(button.text, "Crear Cuenta");
    assert!(!button.has_class(class::LOADING));
}

#[test]
fn test_stray_completion_is_ignored() {
    let (mut form, mut doc, _) = fixture();
    assert!(form.complete(&mut doc).unwrap().is_none());
}

// ============================================================================
// Live behaviors
// ============================================================================

#[test]
fn test_confirmation_validates_on_every_keystroke() {
    let (mut form, mut doc, mut presenter) = fixture();
    let clock = clock();

    form.input(&mut doc, &mut presenter, "pass", "password123", &clock)
        .unwrap();
    form.input(&mut doc, &mut presenter, "passConfirm", "password456", &clock)
        .unwrap();

    assert!(doc.get("passConfirm").unwrap().has_class(class::ERROR));
    assert_eq!(
        doc.get("passConfirmError").unwrap().text,
        "Las contraseñas no coinciden"
    );

    form.input(&mut doc, &mut presenter, "passConfirm", "password123", &clock)
        .unwrap();
    assert!(doc.get("passConfirm").unwrap().has_class(class::VALID));
    assert!(doc.get("passConfirmError").unwrap().text.is_empty());
}

#[test]
fn test_typing_in_other_fields_does_not_mark_them() {
    let (mut form, mut doc, mut presenter) = fixture();
    form.input(&mut doc, &mut presenter, "name", "J", &clock())
        .unwrap();
    let name = doc.get("name").unwrap();
    assert!(!name.has_class(class::ERROR));
    assert!(!name.has_class(class::VALID));
    assert_eq!(form.field("name").unwrap().validity(), Validity::Untouched);
}

#[test]
fn test_char_counter_tracks_length_and_color() {
    let mut form = FormController::builder("contact")
        .submit_button("contactSubmit", "Enviar")
        .field(FieldKind::Textarea, "message")
        .required("El mensaje es requerido")
        .char_counter("messageCount")
        .build();
    let mut doc = Document::new();
    doc.insert(Element::new("message"));
    doc.insert(Element::new(error_slot("message")));
    doc.insert(Element::new("messageCount").text("0"));
    doc.insert(Element::new("contactSubmit").text("Enviar"));
    let mut presenter = Presenter::new();
    let clock = clock();

    form.input(&mut doc, &mut presenter, "message", "Hola mundo", &clock)
        .unwrap();
    let counter = doc.get("messageCount").unwrap();
    assert_eq!(counter.text, "10");
    assert_eq!(counter.color.as_deref(), Some("#666"));

    form.input(&mut doc, &mut presenter, "message", &"a".repeat(401), &clock)
        .unwrap();
    assert_eq!(
        doc.get("messageCount").unwrap().color.as_deref(),
        Some("#f39c12")
    );

    form.input(&mut doc, &mut presenter, "message", &"a".repeat(501), &clock)
        .unwrap();
    let counter = doc.get("messageCount").unwrap();
    assert_eq!(counter.text, "501");
    assert_eq!(counter.color.as_deref(), Some("#e74c3c"));
}

// ============================================================================
// Reset
// ============================================================================

#[test]
fn test_reset_returns_fields_to_pristine() {
    let (mut form, mut doc, mut presenter) = fixture();
    form.input(&mut doc, &mut presenter, "mail", "no-es-email", &clock())
        .unwrap();
    form.submit(&mut doc, &mut presenter, &clock()).unwrap();

    form.reset(&mut doc, &mut presenter).unwrap();

    for id in ["name", "mail", "pass", "passConfirm"] {
        let element = doc.get(id).unwrap();
        assert!(element.value.is_empty(), "{id} should be empty");
        assert!(element.classes.is_empty(), "{id} should carry no classes");
        assert!(doc.get(&error_slot(id)).unwrap().text.is_empty());
        assert_eq!(form.field(id).unwrap().validity(), Validity::Untouched);
    }
}
