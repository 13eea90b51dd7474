/// Outcome of validating a single field: `error` is `None` when every rule
/// passed, otherwise the first failing rule's message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOutcome {
    pub field_id: String,
    pub error: Option<String>,
}

impl FieldOutcome {
    pub fn passed(&self) -> bool {
        self.error.is_none()
    }
}

/// Result of one full validation pass over a form.
///
/// Every field that carries rules appears exactly once, in form order, so
/// the same pass over unchanged input always produces an identical report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    outcomes: Vec<FieldOutcome>,
}

impl ValidationReport {
    pub fn push(&mut self, field_id: impl Into<String>, error: Option<String>) {
        self.outcomes.push(FieldOutcome {
            field_id: field_id.into(),
            error,
        });
    }

    pub fn outcomes(&self) -> &[FieldOutcome] {
        &self.outcomes
    }

    /// Number of fields whose validation failed.
    pub fn error_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.passed()).count()
    }

    pub fn is_valid(&self) -> bool {
        self.error_count() == 0
    }

    /// Failing outcomes only, in form order.
    pub fn errors(&self) -> impl Iterator<Item = &FieldOutcome> {
        self.outcomes.iter().filter(|o| !o.passed())
    }

    pub fn first_error(&self) -> Option<&FieldOutcome> {
        self.errors().next()
    }

    /// Look up the outcome for a specific field.
    pub fn outcome(&self, field_id: &str) -> Option<&FieldOutcome> {
        self.outcomes.iter().find(|o| o.field_id == field_id)
    }
}
