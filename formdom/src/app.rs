//! Application coordinator: routes actions to forms, switches tabs, and
//! drives the result banner.
//!
//! The coordinator is a plain state machine: an [`Action`] says what
//! happened, `dispatch` applies it, and any follow-up work the outside
//! world must do (starting the simulated submission) comes back as an
//! [`Effect`]. Nothing here blocks or sleeps.

use std::time::Instant;

use crate::clock::Clock;
use crate::dom::{class, Document};
use crate::error::FormError;
use crate::form::{FormController, SubmissionResult, SubmitStep};
use crate::presenter::Presenter;

/// A user-visible thing that happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A keystroke in a text-like field (raw value after the edit).
    Input { field: String, value: String },
    /// A select element changed.
    Select { field: String, value: String },
    /// A checkbox was toggled.
    Toggle { field: String, checked: bool },
    /// A form's submit control was activated.
    Submit { form: String },
    /// The asynchronous submission for a form resolved.
    SubmissionComplete { form: String },
    /// A tab button was clicked.
    SelectTab { tab: String },
    /// The global reset control was activated.
    ResetAll,
}

/// Follow-up work for the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Start the asynchronous submission for a form; feed
    /// [`Action::SubmissionComplete`] back in once it resolves.
    BeginSubmission {
        form: String,
        success_message: String,
    },
}

/// Binding between a tab button and the content region it reveals.
#[derive(Debug, Clone)]
pub struct TabBinding {
    /// Tab name; also the form type it shows.
    pub tab: String,
    pub button_id: String,
    pub content_id: String,
}

/// The whole page: document, presenter, forms, tabs, and the banner.
#[derive(Debug)]
pub struct App {
    doc: Document,
    presenter: Presenter,
    forms: Vec<FormController>,
    tabs: Vec<TabBinding>,
    active_tab: String,
    results_id: String,
    result_message_id: String,
    last_result: Option<SubmissionResult>,
}

impl App {
    pub fn builder() -> AppBuilder {
        AppBuilder::default()
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Name of the tab currently shown.
    pub fn active_tab(&self) -> &str {
        &self.active_tab
    }

    pub fn form(&self, form_type: &str) -> Option<&FormController> {
        self.forms.iter().find(|f| f.form_type() == form_type)
    }

    /// The most recent submission result across all forms (its banner may
    /// be hidden).
    pub fn last_result(&self) -> Option<&SubmissionResult> {
        self.last_result.as_ref()
    }

    /// Apply one action. Returns the effects the driver must run.
    pub fn dispatch(&mut self, action: Action, clock: &Clock) -> Result<Vec<Effect>, FormError> {
        match action {
            Action::Input { field, value } | Action::Select { field, value } => {
                let form = self
                    .forms
                    .iter_mut()
                    .find(|f| f.contains_field(&field))
                    .ok_or_else(|| FormError::unknown_field(field.as_str()))?;
                form.input(&mut self.doc, &mut self.presenter, &field, &value, clock)?;
                Ok(Vec::new())
            }
            Action::Toggle { field, checked } => {
                let form = self
                    .forms
                    .iter_mut()
                    .find(|f| f.contains_field(&field))
                    .ok_or_else(|| FormError::unknown_field(field.as_str()))?;
                form.set_checked(&mut self.doc, &field, checked)?;
                Ok(Vec::new())
            }
            Action::Submit { form } => self.submit(&form, clock),
            Action::SubmissionComplete { form } => self.complete(&form),
            Action::SelectTab { tab } => self.select_tab(&tab),
            Action::ResetAll => self.reset_all(),
        }
    }

    /// Clear expired shake animations. Drivers call this from a timer.
    pub fn tick(&mut self, now: Instant) {
        self.presenter.tick(&mut self.doc, now);
    }

    /// Whether a shake animation is still pending.
    pub fn has_pending_shakes(&self) -> bool {
        self.presenter.has_pending_shakes()
    }

    fn submit(&mut self, form_type: &str, clock: &Clock) -> Result<Vec<Effect>, FormError> {
        let doc = &mut self.doc;
        let presenter = &mut self.presenter;
        let form = self
            .forms
            .iter_mut()
            .find(|f| f.form_type() == form_type)
            .ok_or_else(|| FormError::unknown_form(form_type))?;
        let step = form.submit(doc, presenter, clock)?;
        let form_name = form.form_type().to_string();
        let success_message = form.success_message().to_string();
        match step {
            SubmitStep::Rejected(result) => {
                self.show_result(class::ERROR, &result.message)?;
                self.last_result = Some(result);
                Ok(Vec::new())
            }
            SubmitStep::Accepted => Ok(vec![Effect::BeginSubmission {
                form: form_name,
                success_message,
            }]),
            SubmitStep::Ignored => Ok(Vec::new()),
        }
    }

    fn complete(&mut self, form_type: &str) -> Result<Vec<Effect>, FormError> {
        let doc = &mut self.doc;
        let form = self
            .forms
            .iter_mut()
            .find(|f| f.form_type() == form_type)
            .ok_or_else(|| FormError::unknown_form(form_type))?;
        if let Some(result) = form.complete(doc)? {
            self.show_result(class::SUCCESS, &result.message)?;
            self.last_result = Some(result);
        }
        Ok(Vec::new())
    }

    /// Show exactly one tab: `active` moves to its button and content
    /// region, and the result banner is hidden (its message is kept).
    /// Field values and validity are untouched.
    fn select_tab(&mut self, tab: &str) -> Result<Vec<Effect>, FormError> {
        if !self.tabs.iter().any(|t| t.tab == tab) {
            return Err(FormError::unknown_tab(tab));
        }
        for binding in &self.tabs {
            let on = binding.tab == tab;
            self.doc
                .require_mut(&binding.button_id)?
                .classes
                .toggle(class::ACTIVE, on);
            self.doc
                .require_mut(&binding.content_id)?
                .classes
                .toggle(class::ACTIVE, on);
        }
        self.active_tab = tab.to_string();
        self.doc.require_mut(&self.results_id)?.visible = false;
        log::debug!("tab '{tab}' selected");
        Ok(Vec::new())
    }

    /// Clear every form on the page back to pristine and hide the banner.
    fn reset_all(&mut self) -> Result<Vec<Effect>, FormError> {
        for form in &mut self.forms {
            form.reset(&mut self.doc, &mut self.presenter)?;
        }
        self.doc.require_mut(&self.results_id)?.visible = false;
        log::info!("all forms reset");
        Ok(Vec::new())
    }

    fn show_result(&mut self, kind: &str, message: &str) -> Result<(), FormError> {
        let banner = self.doc.require_mut(&self.result_message_id)?;
        banner.text = message.to_string();
        banner.classes.set([class::RESULT_MESSAGE, kind]);
        self.doc.require_mut(&self.results_id)?.visible = true;
        Ok(())
    }
}

/// Builder assembling a page out of a document, forms, and tab bindings.
#[derive(Debug, Default)]
pub struct AppBuilder {
    doc: Document,
    forms: Vec<FormController>,
    tabs: Vec<TabBinding>,
    initial_tab: Option<String>,
    results_id: String,
    result_message_id: String,
}

impl AppBuilder {
    pub fn document(mut self, doc: Document) -> Self {
        self.doc = doc;
        self
    }

    pub fn form(mut self, form: FormController) -> Self {
        self.forms.push(form);
        self
    }

    pub fn tab(
        mut self,
        tab: impl Into<String>,
        button_id: impl Into<String>,
        content_id: impl Into<String>,
    ) -> Self {
        self.tabs.push(TabBinding {
            tab: tab.into(),
            button_id: button_id.into(),
            content_id: content_id.into(),
        });
        self
    }

    /// Tab shown at startup. Defaults to the first registered tab.
    pub fn initial_tab(mut self, tab: impl Into<String>) -> Self {
        self.initial_tab = Some(tab.into());
        self
    }

    /// Ids of the results container and its message element.
    pub fn results(
        mut self,
        results_id: impl Into<String>,
        result_message_id: impl Into<String>,
    ) -> Self {
        self.results_id = results_id.into();
        self.result_message_id = result_message_id.into();
        self
    }

    pub fn build(self) -> App {
        let active_tab = self
            .initial_tab
            .or_else(|| self.tabs.first().map(|t| t.tab.clone()))
            .unwrap_or_default();
        App {
            doc: self.doc,
            presenter: Presenter::new(),
            forms: self.forms,
            tabs: self.tabs,
            active_tab,
            results_id: self.results_id,
            result_message_id: self.result_message_id,
            last_result: None,
        }
    }
}
