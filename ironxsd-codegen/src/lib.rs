//! # IronXSD Codegen
//!
//! Class-model plugins and Rust code generation for XML Schemas.
//!
//! This crate provides:
//! - The plugin contract and registry (`-X<name>` options)
//! - The fixed-value plugin, which turns schema `fixed` values into field defaults
//! - Diagnostics and their sinks
//! - Rust rendering of a class model

pub mod diagnostic;
pub mod error;
pub mod fixed_value;
pub mod generator;
pub mod options;
pub mod plugin;
pub mod rust;

pub use diagnostic::{Diagnostic, DiagnosticKind, DiagnosticSink, Severity, TracingSink};
pub use error::{CodegenError, LiteralError};
pub use fixed_value::{FixedValuePlugin, Report};
pub use generator::Generator;
pub use options::Options;
pub use plugin::Plugin;

use ironxsd_schema::ClassModel;

/// Generates Rust code from an XML Schema string, without plugins.
///
/// # Errors
/// Returns `CodegenError` if parsing or generation fails.
pub fn generate_from_xml(xml: &str) -> Result<String, CodegenError> {
    generate_with_options(xml, &Options::default())
}

/// Generates Rust code from an XML Schema string.
///
/// # Arguments
/// * `xml` - XML Schema content
/// * `options` - Plugins to run and generation settings
///
/// # Returns
/// Generated Rust code as a string.
///
/// # Errors
/// Returns `CodegenError` if parsing, a plugin, or generation fails.
pub fn generate_with_options(xml: &str, options: &Options) -> Result<String, CodegenError> {
    let schema = ironxsd_schema::parse_schema(xml)?;
    let mut model = ClassModel::from_schema(&schema);
    if let Some(package) = &options.package {
        model.package = package.clone();
    }
    run_plugins(&mut model, options, &mut TracingSink)?;
    Generator::new(&model).generate()
}

/// Generates Rust code from an XML Schema file.
///
/// # Arguments
/// * `path` - Path to the XML Schema file
/// * `options` - Plugins to run and generation settings
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, a plugin, or generation fails.
pub fn generate_from_file(path: &std::path::Path, options: &Options) -> Result<String, CodegenError> {
    let xml = std::fs::read_to_string(path)?;
    generate_with_options(&xml, options)
}

/// Runs every plugin enabled in `options`, in order.
///
/// # Errors
/// Returns `CodegenError::UnknownPlugin` for an option no plugin answers to,
/// or the first error a plugin returns.
pub fn run_plugins(
    model: &mut ClassModel,
    options: &Options,
    sink: &mut dyn DiagnosticSink,
) -> Result<(), CodegenError> {
    for option in &options.enabled_plugins {
        let plugin = plugin::find(option).ok_or_else(|| CodegenError::UnknownPlugin {
            option: option.clone(),
        })?;
        tracing::debug!(plugin = plugin.option_name(), "running plugin");
        if !plugin.run(model, options, sink)? {
            return Err(CodegenError::generation(format!(
                "plugin -{} failed",
                plugin.option_name()
            )));
        }
    }
    Ok(())
}
