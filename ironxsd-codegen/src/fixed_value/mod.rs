//! Fixed-value default injection.
//!
//! Walks every class of a [`ClassModel`] and attaches a literal initializer
//! to each element-derived field whose schema declaration carries a
//! `fixed` value, so that a freshly constructed instance already holds the
//! value the schema mandates.
//!
//! The pass is a single walk over the model. Each field ends in exactly one
//! [`Outcome`]:
//!
//! - **Initialized**: a literal (or a calendar built through the class's
//!   datatype factory slot) was attached.
//! - **Skipped**: the field is not element-derived, has no fixed value, or
//!   already has an initializer.
//! - **Diagnosed**: the field qualifies but no initializer could be built
//!   (unknown enumeration constant, unsupported type, slot conflict).
//!
//! A fixed value that is malformed for its type (`"7.5"` on an integer
//! field) aborts the pass with [`CodegenError::Literal`].

pub mod enums;
pub mod helper;
pub mod literal;
pub mod report;

pub use enums::{EnumLookupError, find_enum_constant};
pub use helper::ensure_helper_slot;
pub use literal::LiteralKind;
pub use report::{FieldReport, Outcome, Report, SkipReason};

use ironxsd_schema::{ClassModel, EnumerationType, Expr, GeneratedClass, GeneratedField};

use crate::diagnostic::{Diagnostic, DiagnosticKind, DiagnosticSink, cause_chain};
use crate::error::CodegenError;
use crate::options::Options;
use crate::plugin::Plugin;

/// Injects schema fixed values as field initializers.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedValuePlugin;

impl FixedValuePlugin {
    /// Option name that enables the plugin.
    pub const OPTION_NAME: &'static str = "Xfixed-value";

    /// Creates the plugin.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Runs the pass over `model` and reports what happened to every field.
    ///
    /// # Errors
    /// Returns `CodegenError::Literal` if a fixed value is malformed for its
    /// field type, or `CodegenError::Model` if the model rejects a mutation.
    pub fn apply(&self, model: &mut ClassModel, options: &Options) -> Result<Report, CodegenError> {
        let mut report = Report::default();
        let ClassModel { classes, enums, .. } = model;
        for class in classes.iter_mut() {
            scan_class(class, enums, options, &mut report)?;
        }
        Ok(report)
    }
}

impl Plugin for FixedValuePlugin {
    fn option_name(&self) -> &'static str {
        Self::OPTION_NAME
    }

    fn usage(&self) -> String {
        format!(
            "  -{}    : enable rewriting of classes to set default values for fields as specified in XML schema",
            Self::OPTION_NAME
        )
    }

    fn run(
        &self,
        model: &mut ClassModel,
        options: &Options,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<bool, CodegenError> {
        let report = self.apply(model, options)?;
        let initialized = report.count_initialized();

        for entry in report.fields {
            match entry.outcome {
                Outcome::Initialized(expr) if options.verbose => tracing::info!(
                    class = %entry.class,
                    field = %entry.field,
                    initializer = %expr,
                    "Initializing field {}.{} to {}",
                    entry.class,
                    entry.field,
                    expr
                ),
                Outcome::Diagnosed(diagnostic) => sink.report(diagnostic),
                _ => {}
            }
        }

        tracing::debug!(initialized, "fixed-value pass complete");
        Ok(true)
    }
}

/// Returns the fixed value of an element-derived field.
///
/// # Errors
/// Returns the reason the field is not eligible.
pub fn fixed_value_of(field: &GeneratedField) -> Result<&str, SkipReason> {
    let particle = field.origin.particle().ok_or(SkipReason::NotParticle)?;
    let element = particle
        .term
        .as_element_decl()
        .ok_or(SkipReason::NotElement)?;
    element
        .fixed_value
        .as_deref()
        .ok_or(SkipReason::NoFixedValue)
}

/// Processes every field of one class, appending outcomes to `report`.
///
/// # Errors
/// Returns `CodegenError` on a malformed fixed value.
pub fn scan_class(
    class: &mut GeneratedClass,
    enums: &[EnumerationType],
    options: &Options,
    report: &mut Report,
) -> Result<(), CodegenError> {
    // Slot name once installed for this class.
    let mut helper: Option<String> = None;

    for index in 0..class.fields.len() {
        let outcome = process_field(class, index, enums, options, &mut helper)?;
        report.push(&class.name, &class.fields[index].name, outcome);
    }
    Ok(())
}

fn process_field(
    class: &mut GeneratedClass,
    index: usize,
    enums: &[EnumerationType],
    options: &Options,
    helper: &mut Option<String>,
) -> Result<Outcome, CodegenError> {
    let field = &class.fields[index];
    let value = match fixed_value_of(field) {
        Ok(value) => value.to_string(),
        Err(reason) => return Ok(Outcome::Skipped(reason)),
    };
    if field.has_initializer() {
        return Ok(Outcome::Skipped(SkipReason::AlreadyInitialized));
    }

    let kind = LiteralKind::of(field);
    let class_name = class.name.clone();
    let field_name = field.name.clone();
    let invalid = |source| CodegenError::literal(&class_name, &field_name, &value, source);

    let expr = match kind {
        LiteralKind::Text => Expr::str(value.as_str()),
        LiteralKind::Boolean => Expr::Bool(literal::boolean(&value).map_err(invalid)?),
        LiteralKind::NarrowInteger(width) => {
            Expr::Int(literal::narrow_integer(&value, width).map_err(invalid)?)
        }
        LiteralKind::LongInteger => Expr::Long(literal::long_integer(&value).map_err(invalid)?),
        LiteralKind::Float => Expr::Float(literal::float(&value).map_err(invalid)?),
        LiteralKind::Double => Expr::Double(literal::double(&value).map_err(invalid)?),
        LiteralKind::Enumeration(enum_name) => {
            match find_enum_constant(enums, &enum_name, &value) {
                Ok(constant) => Expr::enum_constant(enum_name.as_str(), constant.name.as_str()),
                Err(err) => {
                    return Ok(Outcome::Diagnosed(Diagnostic::warning(
                        &class_name,
                        &field_name,
                        DiagnosticKind::EnumLookup(err),
                    )));
                }
            }
        }
        LiteralKind::Temporal => {
            let slot = match helper.clone() {
                Some(slot) => slot,
                None => match ensure_helper_slot(class, options) {
                    Ok(slot) => {
                        *helper = Some(slot.clone());
                        slot
                    }
                    Err(err) => {
                        return Ok(Outcome::Diagnosed(Diagnostic::error(
                            &class_name,
                            &field_name,
                            DiagnosticKind::HelperInstall {
                                slot: options.helper_field_name.clone(),
                                cause: cause_chain(&err),
                            },
                        )));
                    }
                },
            };
            literal::temporal(&slot, &value)
        }
        LiteralKind::Unsupported(type_name) => {
            return Ok(Outcome::Diagnosed(Diagnostic::warning(
                &class_name,
                &field_name,
                DiagnosticKind::UnsupportedType {
                    type_name,
                    value: value.clone(),
                },
            )));
        }
    };

    class.fields[index].set_initializer(expr.clone())?;
    Ok(Outcome::Initialized(expr))
}
