//! Resolution of fixed values against generated enumerations.

use ironxsd_schema::{EnumConstant, EnumerationType};
use thiserror::Error;

/// Failure to map a fixed value onto an enumeration constant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumLookupError {
    /// The field's enumeration was not generated.
    #[error("could not find enum type {enum_name} for value \"{value}\"")]
    TypeNotFound {
        /// Enumeration name.
        enum_name: String,
        /// Fixed value.
        value: String,
    },

    /// No constant of the enumeration has the fixed value as lexical form.
    #[error("could not find enum constant of {enum_name} for value \"{value}\"")]
    ConstantNotFound {
        /// Enumeration name.
        enum_name: String,
        /// Fixed value.
        value: String,
    },
}

/// Finds the constant of `enum_name` whose lexical form equals `value`.
///
/// Matching is exact string equality against the schema lexical value, not
/// against the generated identifier.
///
/// # Errors
/// Returns `EnumLookupError` if the enumeration or the constant is missing.
pub fn find_enum_constant<'a>(
    enums: &'a [EnumerationType],
    enum_name: &str,
    value: &str,
) -> Result<&'a EnumConstant, EnumLookupError> {
    let enumeration = enums.iter().find(|e| e.name == enum_name).ok_or_else(|| {
        EnumLookupError::TypeNotFound {
            enum_name: enum_name.to_string(),
            value: value.to_string(),
        }
    })?;

    enumeration
        .constants
        .iter()
        .find(|c| c.lexical == value)
        .ok_or_else(|| EnumLookupError::ConstantNotFound {
            enum_name: enum_name.to_string(),
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color() -> Vec<EnumerationType> {
        let lexicals = ["RED", "GREEN", "BLUE"].map(String::from);
        vec![EnumerationType::new("color", &lexicals)]
    }

    #[test]
    fn test_find_constant_by_lexical() {
        let enums = color();
        let constant = find_enum_constant(&enums, "Color", "GREEN").expect("constant");
        assert_eq!(constant.name, "Green");
        assert_eq!(constant.lexical, "GREEN");
    }

    #[test]
    fn test_fallback_names_resolve_to_own_constant() {
        let lexicals = ["value2", "-"].map(String::from);
        let enums = vec![EnumerationType::new("mode", &lexicals)];

        let dash = find_enum_constant(&enums, "Mode", "-").expect("dash constant");
        let value2 = find_enum_constant(&enums, "Mode", "value2").expect("value2 constant");
        assert_ne!(dash.name, value2.name);
        assert_eq!(value2.name, "Value2");
        assert_eq!(dash.name, "Value3");
    }

    #[test]
    fn test_lookup_is_exact() {
        let enums = color();
        assert!(matches!(
            find_enum_constant(&enums, "Color", "Green"),
            Err(EnumLookupError::ConstantNotFound { .. })
        ));
        assert!(matches!(
            find_enum_constant(&enums, "Color", " GREEN"),
            Err(EnumLookupError::ConstantNotFound { .. })
        ));
    }

    #[test]
    fn test_missing_enum_type() {
        let enums = color();
        let err = find_enum_constant(&enums, "Shade", "GREEN").expect_err("no type");
        assert_eq!(
            err.to_string(),
            "could not find enum type Shade for value \"GREEN\""
        );
    }
}
