//! Per-form state: field list, rules, and the submission state machine.

use std::collections::HashMap;
use std::time::Duration;

use chrono::NaiveDate;

use crate::clock::Clock;
use crate::dom::{class, Document};
use crate::error::DomError;
use crate::field::{format_input, FieldKind, FieldState};
use crate::presenter::Presenter;
use crate::validation::{required_rule, Rule, ValidationReport};

/// Label shown on a submit button while its form is submitting.
pub const BUSY_LABEL: &str = "Procesando...";

/// Fixed latency of the simulated network submission.
pub const SUBMISSION_DELAY: Duration = Duration::from_millis(2000);

/// Summary message for a failed validation pass. The count is the number
/// of fields currently invalid.
pub fn error_summary(count: usize) -> String {
    format!("Se encontraron {count} errores. Por favor, corrígelos antes de continuar.")
}

/// Where a form is in its submission lifecycle.
///
/// `Validating` only exists inside a submit call; `Done` accepts a new
/// submit immediately, so re-submitting an unchanged invalid form
/// reproduces the identical result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    ValidationFailed,
}

/// Aggregated outcome of one submit attempt. Transient: consumed by the
/// result banner, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    pub outcome: Outcome,
    pub error_count: usize,
    pub message: String,
}

/// What a submit attempt did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStep {
    /// Validation failed; every failing field was marked and no
    /// submission was started.
    Rejected(SubmissionResult),
    /// All fields valid; the form is now `Submitting` and the caller
    /// should start the asynchronous submission.
    Accepted,
    /// The form was already submitting; the attempt was dropped.
    Ignored,
}

/// Live character counter attached to one field.
#[derive(Debug, Clone)]
struct CharCounter {
    field_id: String,
    slot_id: String,
}

fn counter_color(count: usize) -> &'static str {
    if count > 500 {
        "#e74c3c"
    } else if count > 400 {
        "#f39c12"
    } else {
        "#666"
    }
}

/// One form: its fields, their rules, and its submission state machine.
///
/// A controller owns its fields exclusively; nothing crosses form
/// boundaries except the peer lookups of its own `MatchesField` rules.
#[derive(Debug)]
pub struct FormController {
    form_type: String,
    success_message: String,
    submit_button: String,
    submit_label: String,
    fields: Vec<FieldState>,
    rules: HashMap<String, Vec<Rule>>,
    counter: Option<CharCounter>,
    phase: SubmitPhase,
    last_result: Option<SubmissionResult>,
}

impl FormController {
    pub fn builder(form_type: impl Into<String>) -> FormBuilder {
        FormBuilder::new(form_type)
    }

    /// Short name of the form (`registration`, `contact`, ...). Doubles as
    /// the id of its tab content region.
    pub fn form_type(&self) -> &str {
        &self.form_type
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn last_result(&self) -> Option<&SubmissionResult> {
        self.last_result.as_ref()
    }

    pub fn success_message(&self) -> &str {
        &self.success_message
    }

    pub fn submit_button_id(&self) -> &str {
        &self.submit_button
    }

    pub fn fields(&self) -> &[FieldState] {
        &self.fields
    }

    pub fn field(&self, id: &str) -> Option<&FieldState> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn contains_field(&self, id: &str) -> bool {
        self.field(id).is_some()
    }

    fn field_mut(&mut self, id: &str) -> Option<&mut FieldState> {
        self.fields.iter_mut().find(|f| f.id == id)
    }

    /// Run every field's rules without touching any state. Fields without
    /// rules are skipped. Evaluation of one field stops at its first
    /// failing rule; fields never short-circuit each other.
    pub fn evaluate(&self, today: NaiveDate) -> ValidationReport {
        let mut report = ValidationReport::default();
        for field in &self.fields {
            let Some(rules) = self.rules.get(&field.id) else {
                continue;
            };
            let mut error = None;
            for rule in rules {
                if let Err(message) = rule.check(field, &self.fields, today) {
                    error = Some(message);
                    break;
                }
            }
            report.push(field.id.clone(), error);
        }
        report
    }

    /// Handle a keystroke: format the raw input, store it, and run any
    /// live rules (password confirmation) plus the character counter.
    pub fn input(
        &mut self,
        doc: &mut Document,
        presenter: &mut Presenter,
        field_id: &str,
        raw: &str,
        clock: &Clock,
    ) -> Result<(), DomError> {
        let Some(field) = self.field_mut(field_id) else {
            return Ok(());
        };
        let value = format_input(field.kind, raw);
        field.value = value.clone();
        doc.require_mut(field_id)?.value = value;

        self.run_live_rules(doc, presenter, field_id, clock)?;
        self.update_counter(doc, field_id)?;
        Ok(())
    }

    /// Handle a checkbox toggle.
    pub fn set_checked(
        &mut self,
        doc: &mut Document,
        field_id: &str,
        checked: bool,
    ) -> Result<(), DomError> {
        let Some(field) = self.field_mut(field_id) else {
            return Ok(());
        };
        field.checked = checked;
        doc.require_mut(field_id)?.checked = checked;
        Ok(())
    }

    fn run_live_rules(
        &mut self,
        doc: &mut Document,
        presenter: &mut Presenter,
        field_id: &str,
        clock: &Clock,
    ) -> Result<(), DomError> {
        let live_rule = self
            .rules
            .get(field_id)
            .and_then(|rules| rules.iter().find(|r| r.is_live()).cloned());
        let Some(rule) = live_rule else {
            return Ok(());
        };
        let Some(field) = self.field(field_id) else {
            return Ok(());
        };
        let verdict = rule.check(field, &self.fields, clock.today);
        match verdict {
            Err(message) => {
                if let Some(field) = self.field_mut(field_id) {
                    field.mark_invalid(&message);
                }
                presenter.mark_invalid(doc, field_id, &message, clock.now)?;
            }
            Ok(()) => {
                if let Some(field) = self.field_mut(field_id) {
                    field.mark_valid();
                }
                presenter.mark_valid(doc, field_id)?;
            }
        }
        Ok(())
    }

    fn update_counter(&self, doc: &mut Document, field_id: &str) -> Result<(), DomError> {
        let Some(counter) = self.counter.as_ref().filter(|c| c.field_id == field_id) else {
            return Ok(());
        };
        let count = self
            .field(field_id)
            .map(|f| f.value.chars().count())
            .unwrap_or(0);
        let slot = doc.require_mut(&counter.slot_id)?;
        slot.text = count.to_string();
        slot.color = Some(counter_color(count).to_string());
        Ok(())
    }

    /// Submit attempt. Validates every field, marks each one through the
    /// presenter, and either rejects with an error summary or moves to
    /// `Submitting` (busy button, caller starts the async submission).
    pub fn submit(
        &mut self,
        doc: &mut Document,
        presenter: &mut Presenter,
        clock: &Clock,
    ) -> Result<SubmitStep, DomError> {
        if self.phase == SubmitPhase::Submitting {
            log::debug!("form '{}' already submitting, ignoring submit", self.form_type);
            return Ok(SubmitStep::Ignored);
        }

        self.phase = SubmitPhase::Validating;
        let report = self.evaluate(clock.today);
        for outcome in report.outcomes() {
            match &outcome.error {
                Some(message) => {
                    if let Some(field) = self.field_mut(&outcome.field_id) {
                        field.mark_invalid(message);
                    }
                    presenter.mark_invalid(doc, &outcome.field_id, message, clock.now)?;
                }
                None => {
                    if let Some(field) = self.field_mut(&outcome.field_id) {
                        field.mark_valid();
                    }
                    presenter.mark_valid(doc, &outcome.field_id)?;
                }
            }
        }

        if report.is_valid() {
            self.phase = SubmitPhase::Submitting;
            let button = doc.require_mut(&self.submit_button)?;
            button.disabled = true;
            button.text = BUSY_LABEL.to_string();
            button.classes.add(class::LOADING);
            log::info!("form '{}' valid, submitting", self.form_type);
            Ok(SubmitStep::Accepted)
        } else {
            self.phase = SubmitPhase::Done;
            let count = report.error_count();
            let result = SubmissionResult {
                outcome: Outcome::ValidationFailed,
                error_count: count,
                message: error_summary(count),
            };
            self.last_result = Some(result.clone());
            log::info!("form '{}' rejected with {count} errors", self.form_type);
            Ok(SubmitStep::Rejected(result))
        }
    }

    /// The asynchronous submission resolved. Restores the submit button
    /// and produces the success result. Returns `None` when the form was
    /// not submitting (a stray completion signal).
    pub fn complete(&mut self, doc: &mut Document) -> Result<Option<SubmissionResult>, DomError> {
        if self.phase != SubmitPhase::Submitting {
            log::warn!(
                "form '{}' received completion while not submitting",
                self.form_type
            );
            return Ok(None);
        }
        let button = doc.require_mut(&self.submit_button)?;
        button.disabled = false;
        button.text = self.submit_label.clone();
        button.classes.remove(class::LOADING);

        self.phase = SubmitPhase::Done;
        let result = SubmissionResult {
            outcome: Outcome::Success,
            error_count: 0,
            message: self.success_message.clone(),
        };
        self.last_result = Some(result.clone());
        log::info!("form '{}' submitted successfully", self.form_type);
        Ok(Some(result))
    }

    /// Clear every field back to pristine: values, checkboxes, validity
    /// classes, error messages, and the character counter. The only path
    /// that clears field values.
    pub fn reset(&mut self, doc: &mut Document, presenter: &mut Presenter) -> Result<(), DomError> {
        let ids: Vec<String> = self.fields.iter().map(|f| f.id.clone()).collect();
        for id in &ids {
            if let Some(field) = self.field_mut(id) {
                field.reset();
            }
            let element = doc.require_mut(id)?;
            element.value.clear();
            element.checked = false;
            if self.rules.contains_key(id) {
                presenter.clear(doc, id)?;
            }
        }
        if let Some(counter) = &self.counter {
            doc.require_mut(&counter.slot_id)?.text = "0".to_string();
        }
        Ok(())
    }
}

/// Fluent builder for a [`FormController`]. Rule methods attach to the most
/// recently added field.
#[derive(Debug)]
pub struct FormBuilder {
    form_type: String,
    success_message: String,
    submit_button: String,
    submit_label: String,
    fields: Vec<FieldState>,
    rules: HashMap<String, Vec<Rule>>,
    counter: Option<CharCounter>,
}

impl FormBuilder {
    fn new(form_type: impl Into<String>) -> Self {
        let form_type = form_type.into();
        let submit_button = format!("{form_type}Submit");
        Self {
            form_type,
            success_message: String::new(),
            submit_button,
            submit_label: "Enviar".to_string(),
            fields: Vec::new(),
            rules: HashMap::new(),
            counter: None,
        }
    }

    pub fn success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = message.into();
        self
    }

    /// Override the submit button id and idle label.
    pub fn submit_button(mut self, id: impl Into<String>, label: impl Into<String>) -> Self {
        self.submit_button = id.into();
        self.submit_label = label.into();
        self
    }

    /// Add a field. Subsequent rule calls attach to it.
    pub fn field(mut self, kind: FieldKind, id: impl Into<String>) -> Self {
        self.fields.push(FieldState::new(id, kind));
        self
    }

    fn current(&self) -> &FieldState {
        self.fields
            .last()
            .expect("field() must be called before attaching rules")
    }

    /// Attach an arbitrary rule to the current field.
    pub fn rule(mut self, rule: Rule) -> Self {
        let id = self.current().id.clone();
        self.rules.entry(id).or_default().push(rule);
        self
    }

    pub fn required(self, message: impl Into<String>) -> Self {
        let rule = required_rule(self.current().kind, message);
        self.rule(rule)
    }

    pub fn min_length(self, min: usize, message: impl Into<String>) -> Self {
        self.rule(Rule::MinLength {
            min,
            message: message.into(),
        })
    }

    pub fn email(self, message: impl Into<String>) -> Self {
        self.rule(Rule::Email {
            message: message.into(),
        })
    }

    pub fn int_range(self, min: i64, max: i64, message: impl Into<String>) -> Self {
        self.rule(Rule::IntRange {
            min,
            max,
            message: message.into(),
        })
    }

    pub fn card_number(self, message: impl Into<String>) -> Self {
        self.rule(Rule::CardNumber {
            message: message.into(),
        })
    }

    pub fn expiry_date(self, message: impl Into<String>) -> Self {
        self.rule(Rule::ExpiryDate {
            message: message.into(),
        })
    }

    pub fn cvv(self, message: impl Into<String>) -> Self {
        self.rule(Rule::Cvv {
            message: message.into(),
        })
    }

    /// Value must match the named peer field; re-checked on every
    /// keystroke of this field.
    pub fn matches(self, other: impl Into<String>, message: impl Into<String>) -> Self {
        self.rule(Rule::MatchesField {
            other: other.into(),
            message: message.into(),
        })
    }

    /// Attach a live character counter for the current field, writing into
    /// the given slot element.
    pub fn char_counter(mut self, slot_id: impl Into<String>) -> Self {
        self.counter = Some(CharCounter {
            field_id: self.current().id.clone(),
            slot_id: slot_id.into(),
        });
        self
    }

    pub fn build(self) -> FormController {
        FormController {
            form_type: self.form_type,
            success_message: self.success_message,
            submit_button: self.submit_button,
            submit_label: self.submit_label,
            fields: self.fields,
            rules: self.rules,
            counter: self.counter,
            phase: SubmitPhase::Idle,
            last_result: None,
        }
    }
}
