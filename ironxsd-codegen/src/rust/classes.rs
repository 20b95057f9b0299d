//! Class (struct) code generation.

use ironxsd_schema::{ClassModel, Expr, GeneratedClass, GeneratedField, StaticField, StaticInit};
use proc_macro2::Literal;

use super::{ident, render_expr};
use crate::error::CodegenError;

/// Generator for class definitions.
pub struct ClassGenerator<'a> {
    model: &'a ClassModel,
}

impl<'a> ClassGenerator<'a> {
    /// Creates a new class generator.
    #[must_use]
    pub fn new(model: &'a ClassModel) -> Self {
        Self { model }
    }

    /// Generates all class definitions.
    ///
    /// # Errors
    /// Returns `CodegenError::Generation` if a name is not a valid identifier.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let mut output = String::new();

        for class in &self.model.classes {
            output.push_str(&self.generate_struct(class)?);
            if class.has_initializers() {
                output.push_str(&self.generate_default(class)?);
            }
        }

        Ok(output)
    }

    /// Generates the struct definition.
    fn generate_struct(&self, class: &GeneratedClass) -> Result<String, CodegenError> {
        let mut output = String::new();
        let name = ident(&class.name)?;

        output.push_str(&format!(
            "/// Generated from complex type `{}`.\n",
            class.schema_name
        ));
        if class.has_initializers() {
            output.push_str("#[derive(Debug, Clone)]\n");
        } else {
            output.push_str("#[derive(Debug, Clone, Default)]\n");
        }
        output.push_str(&format!("pub struct {name} {{\n"));
        for field in &class.fields {
            output.push_str(&format!(
                "    /// Schema component `{}`.\n",
                field.schema_name
            ));
            output.push_str(&format!(
                "    pub {}: {},\n",
                ident(&field.name)?,
                field_type(field)
            ));
        }
        output.push_str("}\n\n");

        Ok(output)
    }

    /// Generates a `Default` implementation that applies the initializers.
    fn generate_default(&self, class: &GeneratedClass) -> Result<String, CodegenError> {
        let mut output = String::new();

        output.push_str(&format!("impl Default for {} {{\n", class.name));
        output.push_str("    fn default() -> Self {\n");
        for member in &class.statics {
            output.push_str(&generate_static(member)?);
        }
        output.push_str("        Self {\n");
        for field in &class.fields {
            output.push_str(&format!(
                "            {}: {},\n",
                field.name,
                field_value(field)
            ));
        }
        output.push_str("        }\n");
        output.push_str("    }\n");
        output.push_str("}\n\n");

        Ok(output)
    }
}

/// Emitted type of a field, including its occurrence wrapper.
fn field_type(field: &GeneratedField) -> String {
    let base = field.field_type.rust_type();
    if field.repeated {
        format!("Vec<{base}>")
    } else if field.optional {
        format!("Option<{base}>")
    } else {
        base.to_string()
    }
}

/// Initial value of a field inside `Default::default`.
fn field_value(field: &GeneratedField) -> String {
    let Some(expr) = field.initializer() else {
        return "Default::default()".to_string();
    };
    let value = match expr {
        Expr::Str(_) => format!("String::from({})", render_expr(expr)),
        _ => render_expr(expr),
    };
    if field.optional {
        format!("Some({value})")
    } else {
        value
    }
}

/// Lazily initialized static declared inside `default()`.
fn generate_static(member: &StaticField) -> Result<String, CodegenError> {
    let name = ident(&member.name)?;
    let ty = &member.type_name;
    let init = match &member.init {
        StaticInit::Value(expr) => render_expr(expr),
        StaticInit::FailFast {
            constructor,
            message,
        } => format!(
            "match {} {{ Ok(value) => value, Err(err) => panic!(\"{{}}: {{}}\", {}, err) }}",
            render_expr(constructor),
            Literal::string(message)
        ),
    };
    Ok(format!(
        "        static {name}: std::sync::LazyLock<{ty}> = std::sync::LazyLock::new(|| {init});\n"
    ))
}
