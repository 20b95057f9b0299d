//! Rust module generation for a class model.

use ironxsd_schema::ClassModel;

use crate::error::CodegenError;
use crate::rust::{ClassGenerator, EnumGenerator, ident};

/// Renders a whole class model as one Rust module.
///
/// Types the schema maps onto host-provided types (`XmlGregorianCalendar`,
/// `DatatypeFactory`, `BigDecimal`, ...) are resolved through `use super::*`,
/// so the including crate must bring them into scope.
pub struct Generator<'a> {
    model: &'a ClassModel,
}

impl<'a> Generator<'a> {
    /// Creates a generator for `model`.
    #[must_use]
    pub fn new(model: &'a ClassModel) -> Self {
        Self { model }
    }

    /// Generates the module source.
    ///
    /// # Errors
    /// Returns `CodegenError::Generation` if a name cannot be emitted.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let mut output = String::new();
        let package = ident(&self.model.package)?;

        output.push_str("// Generated by ironxsd. Do not edit.\n\n");
        output.push_str(&format!("pub mod {package} {{\n"));
        output.push_str("#[allow(unused_imports)]\n");
        output.push_str("use super::*;\n\n");
        output.push_str(&EnumGenerator::new(self.model).generate()?);
        output.push_str(&ClassGenerator::new(self.model).generate()?);
        output.push_str("}\n");

        Ok(output)
    }
}
