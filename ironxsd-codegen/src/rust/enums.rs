//! Enumeration code generation.

use ironxsd_schema::{ClassModel, EnumerationType};
use proc_macro2::Literal;

use super::ident;
use crate::error::CodegenError;

/// Generator for enumeration definitions.
pub struct EnumGenerator<'a> {
    model: &'a ClassModel,
}

impl<'a> EnumGenerator<'a> {
    /// Creates a new enum generator.
    #[must_use]
    pub fn new(model: &'a ClassModel) -> Self {
        Self { model }
    }

    /// Generates all enumeration definitions.
    ///
    /// # Errors
    /// Returns `CodegenError::Generation` if a name is not a valid identifier.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let mut output = String::new();

        for enumeration in &self.model.enums {
            output.push_str(&self.generate_enum(enumeration)?);
        }

        Ok(output)
    }

    /// Generates one enumeration with its lexical conversions.
    fn generate_enum(&self, enumeration: &EnumerationType) -> Result<String, CodegenError> {
        let mut output = String::new();
        let name = ident(&enumeration.name)?;

        output.push_str(&format!(
            "/// Generated from simple type `{}`.\n",
            enumeration.schema_name
        ));
        output.push_str("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]\n");
        output.push_str(&format!("pub enum {name} {{\n"));
        for (index, constant) in enumeration.constants.iter().enumerate() {
            if index == 0 {
                output.push_str("    #[default]\n");
            }
            output.push_str(&format!("    {},\n", ident(&constant.name)?));
        }
        output.push_str("}\n\n");

        output.push_str(&format!("impl {name} {{\n"));

        output.push_str("    /// Returns the value as written in the schema.\n");
        output.push_str("    #[must_use]\n");
        output.push_str("    pub const fn lexical(&self) -> &'static str {\n");
        output.push_str("        match self {\n");
        for constant in &enumeration.constants {
            output.push_str(&format!(
                "            Self::{} => {},\n",
                constant.name,
                Literal::string(&constant.lexical)
            ));
        }
        output.push_str("        }\n");
        output.push_str("    }\n\n");

        output.push_str("    /// Parses a value as written in the schema.\n");
        output.push_str("    #[must_use]\n");
        output.push_str("    pub fn from_lexical(value: &str) -> Option<Self> {\n");
        output.push_str("        match value {\n");
        for constant in &enumeration.constants {
            output.push_str(&format!(
                "            {} => Some(Self::{}),\n",
                Literal::string(&constant.lexical),
                constant.name
            ));
        }
        output.push_str("            _ => None,\n");
        output.push_str("        }\n");
        output.push_str("    }\n");
        output.push_str("}\n\n");

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironxsd_schema::parse_schema;

    fn create_test_model_with_enum() -> ClassModel {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
    <xs:simpleType name="side">
        <xs:restriction base="xs:string">
            <xs:enumeration value="BUY"/>
            <xs:enumeration value="SELL"/>
        </xs:restriction>
    </xs:simpleType>
</xs:schema>"#;

        let schema = parse_schema(xml).expect("Failed to parse");
        ClassModel::from_schema(&schema)
    }

    #[test]
    fn test_generate_enum() {
        let model = create_test_model_with_enum();
        let output = EnumGenerator::new(&model).generate().expect("generate");

        assert!(output.contains("pub enum Side {"));
        assert!(output.contains("#[default]\n    Buy,"));
        assert!(output.contains("Self::Sell => \"SELL\","));
        assert!(output.contains("\"BUY\" => Some(Self::Buy),"));
        syn::parse_file(&output).expect("generated enum should parse");
    }

    #[test]
    fn test_generate_without_enums() {
        let model = ClassModel::default();
        let output = EnumGenerator::new(&model).generate().expect("generate");
        assert!(output.is_empty());
    }
}
