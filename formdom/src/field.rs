//! Per-field state and keystroke formatting.

/// Validation state of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validity {
    /// The field has never been validated (pristine).
    #[default]
    Untouched,
    Valid,
    Invalid,
}

/// What sort of input a field is. The kind selects the keystroke formatter
/// and lets a page reset checkboxes and selects correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Number,
    Select,
    Textarea,
    Checkbox,
    CardNumber,
    ExpiryDate,
    Cvv,
}

/// State tracked per input element: its raw value plus the outcome of the
/// last validation pass.
///
/// The validity/message pair is kept consistent by construction:
/// `Invalid` always carries a message, `Valid` and `Untouched` never do.
#[derive(Debug, Clone)]
pub struct FieldState {
    pub id: String,
    pub kind: FieldKind,
    pub value: String,
    pub checked: bool,
    validity: Validity,
    error: Option<String>,
}

impl FieldState {
    pub fn new(id: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id: id.into(),
            kind,
            value: String::new(),
            checked: false,
            validity: Validity::Untouched,
            error: None,
        }
    }

    pub fn validity(&self) -> Validity {
        self.validity
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn mark_invalid(&mut self, message: impl Into<String>) {
        self.validity = Validity::Invalid;
        self.error = Some(message.into());
    }

    pub fn mark_valid(&mut self) {
        self.validity = Validity::Valid;
        self.error = None;
    }

    /// Return the field to its pristine state: empty, unchecked, untouched.
    pub fn reset(&mut self) {
        self.value.clear();
        self.checked = false;
        self.validity = Validity::Untouched;
        self.error = None;
    }
}

/// Apply the presentation-layer formatting a field receives as the user
/// types. Formatting is independent of validation: the stored value is the
/// formatted one, and validators re-normalize where they need to.
pub fn format_input(kind: FieldKind, raw: &str) -> String {
    match kind {
        FieldKind::CardNumber => format_card_number(raw),
        FieldKind::ExpiryDate => format_expiry(raw),
        FieldKind::Cvv => digits(raw),
        _ => raw.to_string(),
    }
}

fn digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Group digits in blocks of four: `1234567890123456` -> `1234 5678 9012 3456`.
fn format_card_number(raw: &str) -> String {
    let cleaned = digits(raw);
    let mut out = String::with_capacity(cleaned.len() + cleaned.len() / 4);
    for (i, ch) in cleaned.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

/// Insert the slash of `MM/YY` once two digits are present, capping the
/// value at five characters.
fn format_expiry(raw: &str) -> String {
    let cleaned = digits(raw);
    if cleaned.len() < 2 {
        return cleaned;
    }
    let month = &cleaned[..2];
    let year: String = cleaned[2..].chars().take(2).collect();
    format!("{month}/{year}")
}
