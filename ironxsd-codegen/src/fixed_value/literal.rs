//! Literal construction for fixed values.

use ironxsd_schema::{Expr, FieldType, GeneratedField};

use crate::error::LiteralError;

/// Factory method that builds a calendar value from its lexical form.
pub const CALENDAR_METHOD: &str = "new_xml_gregorian_calendar";

/// How a fixed value is turned into an initializer for a given field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralKind {
    /// String literal, verbatim.
    Text,
    /// `true`/`false`.
    Boolean,
    /// 8, 16 or 32-bit integer, rendered through the 32-bit literal path.
    NarrowInteger(IntWidth),
    /// 64-bit integer.
    LongInteger,
    /// Single-precision float.
    Float,
    /// Double-precision float.
    Double,
    /// Constant of the named enumeration.
    Enumeration(String),
    /// Calendar value built through the class's datatype factory slot.
    Temporal,
    /// No literal form; carries a description of the type.
    Unsupported(String),
}

impl LiteralKind {
    /// Classifies a field by its resolved type.
    #[must_use]
    pub fn of(field: &GeneratedField) -> Self {
        if field.repeated {
            return Self::Unsupported(format!("Vec<{}>", field.field_type.rust_type()));
        }
        match &field.field_type {
            FieldType::Text => Self::Text,
            FieldType::Boolean => Self::Boolean,
            FieldType::Byte => Self::NarrowInteger(IntWidth::I8),
            FieldType::Short => Self::NarrowInteger(IntWidth::I16),
            FieldType::Int => Self::NarrowInteger(IntWidth::I32),
            FieldType::Long => Self::LongInteger,
            FieldType::Float => Self::Float,
            FieldType::Double => Self::Double,
            FieldType::Calendar => Self::Temporal,
            FieldType::Enum(name) => Self::Enumeration(name.clone()),
            other @ (FieldType::Class(_) | FieldType::Other { .. }) => {
                Self::Unsupported(other.rust_type().to_string())
            }
        }
    }
}

/// Width of the field a narrow integer is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntWidth {
    /// `i8`.
    I8,
    /// `i16`.
    I16,
    /// `i32`.
    I32,
}

/// Reads an XSD boolean (`true`, `false`, `1`, `0`).
///
/// # Errors
/// Returns `LiteralError::Boolean` for anything else.
pub fn boolean(value: &str) -> Result<bool, LiteralError> {
    match value {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(LiteralError::Boolean(value.to_string())),
    }
}

/// Reads an integer that must fit a field of the given width.
///
/// # Errors
/// Returns `LiteralError::Integer` on malformed input or if the value does
/// not fit `width`.
pub fn narrow_integer(value: &str, width: IntWidth) -> Result<i32, LiteralError> {
    Ok(match width {
        IntWidth::I8 => i32::from(value.parse::<i8>()?),
        IntWidth::I16 => i32::from(value.parse::<i16>()?),
        IntWidth::I32 => value.parse::<i32>()?,
    })
}

/// Reads a 64-bit integer.
///
/// # Errors
/// Returns `LiteralError::Integer` on malformed input or overflow.
pub fn long_integer(value: &str) -> Result<i64, LiteralError> {
    Ok(value.parse::<i64>()?)
}

/// Reads a single-precision float, including `INF`, `-INF` and `NaN`.
///
/// # Errors
/// Returns `LiteralError::FloatLexical` for spellings outside the XSD
/// lexical space (`inf`, `Infinity`, `nan`, ...) and `LiteralError::Float`
/// on malformed input.
pub fn float(value: &str) -> Result<f32, LiteralError> {
    match special_float(value) {
        Some(special) => Ok(special as f32),
        None => {
            check_float_lexical(value)?;
            Ok(value.parse::<f32>()?)
        }
    }
}

/// Reads a double-precision float, including `INF`, `-INF` and `NaN`.
///
/// # Errors
/// Returns `LiteralError::FloatLexical` for spellings outside the XSD
/// lexical space and `LiteralError::Float` on malformed input.
pub fn double(value: &str) -> Result<f64, LiteralError> {
    match special_float(value) {
        Some(special) => Ok(special),
        None => {
            check_float_lexical(value)?;
            Ok(value.parse::<f64>()?)
        }
    }
}

/// Builds the calendar initializer reading through the `slot` static.
#[must_use]
pub fn temporal(slot: &str, value: &str) -> Expr {
    Expr::Static(slot.to_string()).invoke(CALENDAR_METHOD, vec![Expr::str(value)])
}

/// Finite XSD floats use only digits, signs, `.` and an exponent marker.
fn check_float_lexical(value: &str) -> Result<(), LiteralError> {
    let finite = value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if finite {
        Ok(())
    } else {
        Err(LiteralError::FloatLexical(value.to_string()))
    }
}

fn special_float(value: &str) -> Option<f64> {
    match value {
        "INF" => Some(f64::INFINITY),
        "-INF" => Some(f64::NEG_INFINITY),
        "NaN" => Some(f64::NAN),
        _ => None,
    }
}
