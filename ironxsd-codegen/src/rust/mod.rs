//! Rust code generation modules.

pub mod classes;
pub mod enums;
pub mod exprs;

pub use classes::ClassGenerator;
pub use enums::EnumGenerator;
pub use exprs::render_expr;

use ironxsd_schema::RUST_KEYWORDS;

use crate::error::CodegenError;

/// Checks that `name` can be emitted as a Rust identifier.
pub(crate) fn ident(name: &str) -> Result<&str, CodegenError> {
    let mut chars = name.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c == '_' || c.is_alphabetic())
        && chars.all(|c| c == '_' || c.is_alphanumeric())
        && name != "_"
        && name != "Self"
        && !RUST_KEYWORDS.contains(&name);
    if valid {
        Ok(name)
    } else {
        Err(CodegenError::generation(format!(
            "'{name}' is not a valid Rust identifier"
        )))
    }
}
