//! Per-class datatype factory slot.

use ironxsd_schema::{Expr, GeneratedClass, ModelError, StaticField, StaticInit};

use crate::options::Options;

/// Associated function that creates the factory.
pub const FACTORY_CONSTRUCTOR: &str = "new_instance";

/// Describes the slot configured by `options`.
#[must_use]
pub fn helper_slot(options: &Options) -> StaticField {
    StaticField {
        name: options.helper_field_name.clone(),
        type_name: options.helper_type.clone(),
        init: StaticInit::FailFast {
            constructor: Expr::call(
                format!("{}::{FACTORY_CONSTRUCTOR}", options.helper_type),
                Vec::new(),
            ),
            message: format!("Unable to initialize {}", options.helper_type),
        },
    }
}

/// Installs the factory slot on `class` and returns its name.
///
/// A slot identical to the configured one is reused, so running twice over
/// the same class installs it once.
///
/// # Errors
/// Returns `ModelError::DuplicateMember` if another member already uses the
/// slot name.
pub fn ensure_helper_slot(
    class: &mut GeneratedClass,
    options: &Options,
) -> Result<String, ModelError> {
    let slot = helper_slot(options);
    if class.static_field(&slot.name) == Some(&slot) {
        return Ok(slot.name);
    }

    let name = slot.name.clone();
    class.add_static(slot)?;
    tracing::debug!(class = %class.name, slot = %name, "installed datatype factory slot");
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironxsd_schema::{FieldOrigin, FieldType, GeneratedField};

    #[test]
    fn test_helper_slot_shape() {
        let slot = helper_slot(&Options::default());
        assert_eq!(slot.name, "DATATYPE_FACTORY");
        assert_eq!(slot.type_name, "DatatypeFactory");
        match slot.init {
            StaticInit::FailFast {
                constructor,
                message,
            } => {
                assert_eq!(constructor.to_string(), "DatatypeFactory::new_instance()");
                assert_eq!(message, "Unable to initialize DatatypeFactory");
            }
            StaticInit::Value(_) => panic!("expected fail-fast initializer"),
        }
    }

    #[test]
    fn test_ensure_is_idempotent() {
        let mut class = GeneratedClass::new("event");
        let options = Options::default();
        let first = ensure_helper_slot(&mut class, &options).expect("install");
        let second = ensure_helper_slot(&mut class, &options).expect("reuse");
        assert_eq!(first, second);
        assert_eq!(class.statics.len(), 1);
    }

    #[test]
    fn test_ensure_conflicting_member() {
        let mut class = GeneratedClass::new("event");
        let mut field = GeneratedField::new("factory", FieldType::Text, FieldOrigin::Synthetic);
        field.name = "DATATYPE_FACTORY".to_string();
        class.fields.push(field);
        let options = Options::default();
        let err = ensure_helper_slot(&mut class, &options).expect_err("collision");
        assert!(matches!(err, ModelError::DuplicateMember { .. }));
        assert!(class.statics.is_empty());
    }

    #[test]
    fn test_ensure_conflicting_static() {
        let mut class = GeneratedClass::new("event");
        class.statics.push(StaticField {
            name: "DATATYPE_FACTORY".to_string(),
            type_name: "String".to_string(),
            init: StaticInit::Value(Expr::str("factory")),
        });
        let err = ensure_helper_slot(&mut class, &Options::default()).expect_err("collision");
        assert!(matches!(err, ModelError::DuplicateMember { .. }));
        assert_eq!(class.statics.len(), 1);
    }

    #[test]
    fn test_custom_helper() {
        let mut class = GeneratedClass::new("event");
        let options = Options::new()
            .helper_field_name("FACTORY")
            .helper_type("CalendarFactory");
        let name = ensure_helper_slot(&mut class, &options).expect("install");
        assert_eq!(name, "FACTORY");
        assert_eq!(
            class.static_field("FACTORY").map(|s| s.type_name.as_str()),
            Some("CalendarFactory")
        );
    }
}
