//! Per-field outcome of a fixed-value pass.

use ironxsd_schema::Expr;

use crate::diagnostic::Diagnostic;

/// Why a field was left untouched without a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Derived from an attribute or generated without schema counterpart.
    NotParticle,
    /// Derived from a group reference or wildcard.
    NotElement,
    /// The element declares no fixed value.
    NoFixedValue,
    /// An initializer is already attached.
    AlreadyInitialized,
}

/// What happened to one field.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// An initializer was attached.
    Initialized(Expr),
    /// The field was ineligible.
    Skipped(SkipReason),
    /// The field was eligible but left unchanged.
    Diagnosed(Diagnostic),
}

/// Outcome for a named field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldReport {
    /// Class owning the field.
    pub class: String,
    /// Field name.
    pub field: String,
    /// Outcome.
    pub outcome: Outcome,
}

/// Outcomes of a pass, in model order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    /// One entry per visited field.
    pub fields: Vec<FieldReport>,
}

impl Report {
    /// Records an outcome.
    pub fn push(&mut self, class: &str, field: &str, outcome: Outcome) {
        self.fields.push(FieldReport {
            class: class.to_string(),
            field: field.to_string(),
            outcome,
        });
    }

    /// Returns the outcome recorded for a field.
    #[must_use]
    pub fn outcome(&self, class: &str, field: &str) -> Option<&Outcome> {
        self.fields
            .iter()
            .find(|r| r.class == class && r.field == field)
            .map(|r| &r.outcome)
    }

    /// Iterates over the fields that received an initializer.
    pub fn initialized(&self) -> impl Iterator<Item = (&FieldReport, &Expr)> {
        self.fields.iter().filter_map(|r| match &r.outcome {
            Outcome::Initialized(expr) => Some((r, expr)),
            _ => None,
        })
    }

    /// Iterates over the diagnostics.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.fields.iter().filter_map(|r| match &r.outcome {
            Outcome::Diagnosed(diagnostic) => Some(diagnostic),
            _ => None,
        })
    }

    /// Number of fields that received an initializer.
    #[must_use]
    pub fn count_initialized(&self) -> usize {
        self.initialized().count()
    }
}
