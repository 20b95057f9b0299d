//! Error types for code generation.

use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] ironxsd_schema::ParseError),

    /// Class model mutation error.
    #[error("class model error: {0}")]
    Model(#[from] ironxsd_schema::ModelError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A fixed value could not be read as a literal of the field's type.
    #[error("invalid fixed value \"{value}\" for field {class}.{field}")]
    Literal {
        /// Class owning the field.
        class: String,
        /// Field name.
        field: String,
        /// Fixed value as written in the schema.
        value: String,
        /// Underlying parse failure.
        #[source]
        source: LiteralError,
    },

    /// No registered plugin answers to the option.
    #[error("unknown plugin option '{option}'")]
    UnknownPlugin {
        /// Option as supplied by the operator.
        option: String,
    },

    /// Code generation error.
    #[error("generation error: {message}")]
    Generation {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates a generation error with the given message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Creates a literal error for a field.
    pub fn literal(
        class: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
        source: LiteralError,
    ) -> Self {
        Self::Literal {
            class: class.into(),
            field: field.into(),
            value: value.into(),
            source,
        }
    }
}

/// Failure to read a schema value in a literal grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    /// Not one of `true`, `false`, `1`, `0`.
    #[error("'{0}' is not a boolean literal")]
    Boolean(String),

    /// Not a valid integer for the target width.
    #[error("invalid integer literal: {0}")]
    Integer(#[from] ParseIntError),

    /// Not a valid floating point number.
    #[error("invalid floating point literal: {0}")]
    Float(#[from] ParseFloatError),

    /// Non-finite spelling other than `INF`, `-INF` or `NaN`.
    #[error("'{0}' is not an XSD floating point literal")]
    FloatLexical(String),
}
