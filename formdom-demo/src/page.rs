//! The demo page: every element the three forms, the tab bar, and the
//! result banner need, addressed by the ids external drivers rely on.

use formdom::prelude::*;

use crate::forms;

/// Ids of the shared page chrome.
pub const RESULTS: &str = "results";
pub const RESULT_MESSAGE: &str = "resultMessage";
pub const RESET_BUTTON: &str = "resetForm";
pub const MESSAGE_COUNT: &str = "messageCount";

/// Tab names. Each doubles as its content region's id.
pub const TABS: [&str; 3] = ["registration", "contact", "checkout"];

fn tab_button_id(tab: &str) -> String {
    format!("tab-{tab}")
}

/// An input element plus its paired error slot.
fn field_with_slot(doc: &mut Document, id: &str) {
    doc.insert(Element::new(id));
    doc.insert(Element::new(error_slot(id)).class("error-message"));
}

/// Build the full demo document.
pub fn document() -> Document {
    let mut doc = Document::new();

    for tab in TABS {
        let active = tab == "registration";
        let mut button = Element::new(tab_button_id(tab))
            .class("tab-button")
            .data("tab", tab);
        let mut content = Element::new(tab).class("tab-content");
        if active {
            button.classes.add(class::ACTIVE);
            content.classes.add(class::ACTIVE);
        }
        doc.insert(button);
        doc.insert(content);
    }

    // Registration
    for id in [
        "firstName",
        "lastName",
        "email",
        "password",
        "confirmPassword",
        "age",
        "terms",
    ] {
        field_with_slot(&mut doc, id);
    }
    doc.insert(Element::new("registrationForm"));
    doc.insert(Element::new(forms::REGISTRATION_SUBMIT).text(forms::REGISTRATION_SUBMIT_LABEL));

    // Contact
    for id in ["contactName", "contactEmail", "subject", "message"] {
        field_with_slot(&mut doc, id);
    }
    doc.insert(Element::new(MESSAGE_COUNT).text("0"));
    doc.insert(Element::new("contactForm"));
    doc.insert(Element::new(forms::CONTACT_SUBMIT).text(forms::CONTACT_SUBMIT_LABEL));

    // Checkout
    for id in ["cardNumber", "expiryDate", "cvv", "cardName", "billingAddress"] {
        field_with_slot(&mut doc, id);
    }
    doc.insert(Element::new("saveCard"));
    doc.insert(Element::new("checkoutForm"));
    doc.insert(Element::new(forms::CHECKOUT_SUBMIT).text(forms::CHECKOUT_SUBMIT_LABEL));

    // Shared chrome
    doc.insert(Element::new(RESET_BUTTON).text("Resetear Formularios"));
    doc.insert(Element::new(RESULTS).visible(false));
    doc.insert(Element::new(RESULT_MESSAGE));

    doc
}

/// Assemble the whole application: document, the three forms, and the tab
/// bindings, with registration shown first.
pub fn app() -> App {
    let mut builder = App::builder()
        .document(document())
        .form(forms::registration())
        .form(forms::contact())
        .form(forms::checkout())
        .results(RESULTS, RESULT_MESSAGE)
        .initial_tab("registration");
    for tab in TABS {
        builder = builder.tab(tab, tab_button_id(tab), tab);
    }
    builder.build()
}
