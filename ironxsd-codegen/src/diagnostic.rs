//! Diagnostics reported by plugins.
//!
//! Recoverable problems found by a plugin are described as a [`Diagnostic`]
//! and handed to a [`DiagnosticSink`], which either collects or logs them.

use std::fmt;

use crate::fixed_value::enums::EnumLookupError;

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// The field was left unchanged; generation continues.
    Warning,
    /// An internal fault; the field was left unchanged and generation continues.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// What went wrong for a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// No literal form is known for the field's type.
    UnsupportedType {
        /// Description of the field's type.
        type_name: String,
        /// Fixed value as written in the schema.
        value: String,
    },
    /// The enumeration or one of its constants could not be found.
    EnumLookup(EnumLookupError),
    /// The shared helper slot could not be installed on the class.
    HelperInstall {
        /// Name of the slot.
        slot: String,
        /// Full cause chain of the failure.
        cause: String,
    },
}

/// A problem found while processing one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity.
    pub severity: Severity,
    /// Class owning the field.
    pub class: String,
    /// Field name.
    pub field: String,
    /// Details.
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    /// Creates a warning for a field.
    #[must_use]
    pub fn warning(class: &str, field: &str, kind: DiagnosticKind) -> Self {
        Self {
            severity: Severity::Warning,
            class: class.to_string(),
            field: field.to_string(),
            kind,
        }
    }

    /// Creates an error for a field.
    #[must_use]
    pub fn error(class: &str, field: &str, kind: DiagnosticKind) -> Self {
        Self {
            severity: Severity::Error,
            class: class.to_string(),
            field: field.to_string(),
            kind,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Did not create default value for field {}.{}",
            self.class, self.field
        )?;
        match &self.kind {
            DiagnosticKind::UnsupportedType { type_name, value } => write!(
                f,
                ". Don't know how to create default value expression for fields of type \
                 {type_name}. Default value of \"{value}\" specified in schema"
            ),
            DiagnosticKind::EnumLookup(err) => write!(f, ": {err}"),
            DiagnosticKind::HelperInstall { slot, cause } => {
                write!(f, ": failed to install {slot}: {cause}")
            }
        }
    }
}

/// Destination for diagnostics produced by a plugin run.
pub trait DiagnosticSink {
    /// Receives one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Sink that logs every diagnostic through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Warning => tracing::warn!(
                class = %diagnostic.class,
                field = %diagnostic.field,
                "{diagnostic}"
            ),
            Severity::Error => tracing::error!(
                class = %diagnostic.class,
                field = %diagnostic.field,
                "{diagnostic}"
            ),
        }
    }
}

/// Renders an error and all of its sources as `outer: inner: ...`.
#[must_use]
pub fn cause_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut chain = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        chain.push_str(": ");
        chain.push_str(&cause.to_string());
        source = cause.source();
    }
    chain
}
