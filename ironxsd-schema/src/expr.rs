//! Initializer expressions attached to generated members.
//!
//! Covers the literal forms a field initializer can take plus the two call
//! shapes used to build values through a helper object.

use std::fmt;

/// Expression tree for field and static initializers.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// String literal.
    Str(String),
    /// Boolean literal.
    Bool(bool),
    /// 32-bit integer literal (also used for narrower integer fields).
    Int(i32),
    /// 64-bit integer literal.
    Long(i64),
    /// Single-precision floating point literal.
    Float(f32),
    /// Double-precision floating point literal.
    Double(f64),
    /// Reference to a constant of a generated enumeration.
    EnumConstant {
        /// Generated enumeration name.
        enum_name: String,
        /// Constant name within the enumeration.
        constant: String,
    },
    /// Reference to a static member of the enclosing class.
    Static(String),
    /// Call of an associated function, e.g. `DatatypeFactory::new_instance()`.
    Call {
        /// Path of the function.
        path: String,
        /// Arguments.
        args: Vec<Expr>,
    },
    /// Method invocation on a target expression.
    Invoke {
        /// Receiver expression.
        target: Box<Expr>,
        /// Method name.
        method: String,
        /// Arguments.
        args: Vec<Expr>,
    },
}

impl Expr {
    /// Creates a string literal.
    #[must_use]
    pub fn str(value: impl Into<String>) -> Self {
        Self::Str(value.into())
    }

    /// Creates an enum constant reference.
    #[must_use]
    pub fn enum_constant(enum_name: impl Into<String>, constant: impl Into<String>) -> Self {
        Self::EnumConstant {
            enum_name: enum_name.into(),
            constant: constant.into(),
        }
    }

    /// Creates a call of an associated function.
    #[must_use]
    pub fn call(path: impl Into<String>, args: Vec<Expr>) -> Self {
        Self::Call {
            path: path.into(),
            args,
        }
    }

    /// Creates a method invocation on `self`.
    #[must_use]
    pub fn invoke(self, method: impl Into<String>, args: Vec<Expr>) -> Self {
        Self::Invoke {
            target: Box::new(self),
            method: method.into(),
            args,
        }
    }

    /// Returns the static member this expression reads through, if any.
    #[must_use]
    pub fn static_target(&self) -> Option<&str> {
        match self {
            Self::Static(name) => Some(name),
            Self::Invoke { target, .. } => target.static_target(),
            _ => None,
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{s:?}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Long(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v:?}"),
            Self::Double(v) => write!(f, "{v:?}"),
            Self::EnumConstant {
                enum_name,
                constant,
            } => write!(f, "{enum_name}::{constant}"),
            Self::Static(name) => write!(f, "{name}"),
            Self::Call { path, args } => {
                write!(f, "{path}(")?;
                write_args(f, args)?;
                write!(f, ")")
            }
            Self::Invoke {
                target,
                method,
                args,
            } => {
                write!(f, "{target}.{method}(")?;
                write_args(f, args)?;
                write!(f, ")")
            }
        }
    }
}

fn write_args(f: &mut fmt::Formatter<'_>, args: &[Expr]) -> fmt::Result {
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{arg}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_literals() {
        assert_eq!(Expr::str("abc").to_string(), "\"abc\"");
        assert_eq!(Expr::Bool(true).to_string(), "true");
        assert_eq!(Expr::Int(42).to_string(), "42");
        assert_eq!(Expr::Long(-7).to_string(), "-7");
        assert_eq!(Expr::Double(1.0).to_string(), "1.0");
        assert_eq!(Expr::enum_constant("Color", "Green").to_string(), "Color::Green");
    }

    #[test]
    fn test_display_invoke() {
        let expr = Expr::Static("DATATYPE_FACTORY".into())
            .invoke("new_xml_gregorian_calendar", vec![Expr::str("2024-01-01")]);
        assert_eq!(
            expr.to_string(),
            "DATATYPE_FACTORY.new_xml_gregorian_calendar(\"2024-01-01\")"
        );
        assert_eq!(expr.static_target(), Some("DATATYPE_FACTORY"));
    }

    #[test]
    fn test_display_call() {
        let expr = Expr::call("DatatypeFactory::new_instance", Vec::new());
        assert_eq!(expr.to_string(), "DatatypeFactory::new_instance()");
        assert_eq!(expr.static_target(), None);
    }
}
