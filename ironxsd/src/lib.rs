//! # IronXSD
//!
//! XML Schema to Rust data-binding generator.
//!
//! IronXSD reads an XML Schema, builds a class model of the types it
//! declares, lets plugins rewrite that model, and renders it as Rust source.
//!
//! ## Features
//!
//! - **Schema-driven code generation** - One struct per complex type, one enum per enumeration
//! - **Plugin passes** - Enabled per run with `-X<name>` options
//! - **Fixed-value defaults** - `-Xfixed-value` turns schema `fixed` values into `Default` initializers
//!
//! ## Quick Start
//!
//! ```ignore
//! use ironxsd::prelude::*;
//!
//! let options = Options::new().enable(FixedValuePlugin::OPTION_NAME);
//! let code = generate_with_options(&xsd, &options)?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - XML Schema parsing and the class model
//! - [`codegen`] - Plugins and Rust code generation

pub mod prelude;

/// Schema parsing and the class model.
pub mod schema {
    pub use ironxsd_schema::*;
}

/// Plugins and Rust code generation.
pub mod codegen {
    pub use ironxsd_codegen::*;
}

// Re-export commonly used items at the crate root
pub use ironxsd_codegen::{
    CodegenError, FixedValuePlugin, Options, Plugin, generate_from_file, generate_from_xml,
    generate_with_options,
};
pub use ironxsd_schema::{ClassModel, parse_schema};
