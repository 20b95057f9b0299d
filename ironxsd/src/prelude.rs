//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```ignore
//! use ironxsd::prelude::*;
//! ```

// Schema and class model
pub use ironxsd_schema::{
    ClassModel, EnumerationType, Expr, FieldOrigin, FieldType, GeneratedClass, GeneratedField,
    ModelError, ParseError, Schema, StaticField, StaticInit, parse_schema,
};

// Plugins and diagnostics
pub use ironxsd_codegen::fixed_value::{Outcome, Report, SkipReason};
pub use ironxsd_codegen::plugin::{find as find_plugin, registry as plugin_registry};
pub use ironxsd_codegen::{
    CodegenError, Diagnostic, DiagnosticKind, DiagnosticSink, FixedValuePlugin, Options, Plugin,
    Severity, TracingSink,
};

// Generation
pub use ironxsd_codegen::{
    Generator, generate_from_file, generate_from_xml, generate_with_options, run_plugins,
};
