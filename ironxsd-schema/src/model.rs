//! Generated class model.
//!
//! This module provides the in-memory representation of the types to be
//! emitted: one [`GeneratedClass`] per complex type, one
//! [`EnumerationType`] per enumeration-restricted simple type. Every field
//! keeps a reference to the schema component it was derived from so that
//! later passes can inspect the original declaration.

use crate::error::ModelError;
use crate::expr::Expr;
use crate::types::{
    AttributeDecl, AttributeUse, BuiltinType, Compositor, ElementDecl, Particle, Schema, Term,
    local_name,
};

/// Maximum nesting depth followed when resolving type and group references.
const MAX_RESOLVE_DEPTH: usize = 16;

/// Class model built from a schema, ready for plugins and code emission.
#[derive(Debug, Clone, Default)]
pub struct ClassModel {
    /// Module name for the generated code.
    pub package: String,
    /// Generated classes, in schema order.
    pub classes: Vec<GeneratedClass>,
    /// Generated enumerations, in schema order.
    pub enums: Vec<EnumerationType>,
}

impl ClassModel {
    /// Builds a class model from a parsed schema.
    #[must_use]
    pub fn from_schema(schema: &Schema) -> Self {
        let mut model = Self {
            package: package_name(schema.target_namespace.as_deref()),
            classes: Vec::new(),
            enums: Vec::new(),
        };

        for simple in schema.simple_types.iter().filter(|s| s.is_enumeration()) {
            model
                .enums
                .push(EnumerationType::new(&simple.name, &simple.enumerations));
        }

        for complex in &schema.complex_types {
            model.classes.push(build_class(schema, &complex.name, complex));
        }

        for element in &schema.elements {
            if let Some(anonymous) = &element.anonymous_type {
                model
                    .classes
                    .push(build_class(schema, &element.decl.name, anonymous));
            }
        }

        model
    }

    /// Looks up a class by generated name.
    #[must_use]
    pub fn class(&self, name: &str) -> Option<&GeneratedClass> {
        self.classes.iter().find(|c| c.name == name)
    }

    /// Looks up a class by generated name for mutation.
    #[must_use]
    pub fn class_mut(&mut self, name: &str) -> Option<&mut GeneratedClass> {
        self.classes.iter_mut().find(|c| c.name == name)
    }

    /// Looks up an enumeration by generated name.
    #[must_use]
    pub fn enumeration(&self, name: &str) -> Option<&EnumerationType> {
        self.enums.iter().find(|e| e.name == name)
    }
}

/// A class to be generated.
#[derive(Debug, Clone, Default)]
pub struct GeneratedClass {
    /// Generated type name.
    pub name: String,
    /// Name of the schema component the class was derived from.
    pub schema_name: String,
    /// Declared instance fields, in content-model order.
    pub fields: Vec<GeneratedField>,
    /// Class-scoped static members added by plugins.
    pub statics: Vec<StaticField>,
}

impl GeneratedClass {
    /// Creates an empty class.
    #[must_use]
    pub fn new(schema_name: &str) -> Self {
        Self {
            name: to_pascal_case(schema_name),
            schema_name: schema_name.to_string(),
            fields: Vec::new(),
            statics: Vec::new(),
        }
    }

    /// Looks up a declared field by generated name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&GeneratedField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Looks up a declared field by generated name for mutation.
    #[must_use]
    pub fn field_mut(&mut self, name: &str) -> Option<&mut GeneratedField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Looks up a static member by name.
    #[must_use]
    pub fn static_field(&self, name: &str) -> Option<&StaticField> {
        self.statics.iter().find(|s| s.name == name)
    }

    /// Returns true if a field or static member with the given name exists.
    #[must_use]
    pub fn has_member(&self, name: &str) -> bool {
        self.field(name).is_some() || self.static_field(name).is_some()
    }

    /// Adds a static member to the class.
    ///
    /// # Errors
    /// Returns `ModelError::DuplicateMember` if the name is already taken.
    pub fn add_static(&mut self, member: StaticField) -> Result<(), ModelError> {
        if self.has_member(&member.name) {
            return Err(ModelError::DuplicateMember {
                class: self.name.clone(),
                member: member.name,
            });
        }
        self.statics.push(member);
        Ok(())
    }

    /// Returns true if any field or static member carries an initializer.
    #[must_use]
    pub fn has_initializers(&self) -> bool {
        !self.statics.is_empty() || self.fields.iter().any(GeneratedField::has_initializer)
    }
}

/// A data member of a generated class.
#[derive(Debug, Clone)]
pub struct GeneratedField {
    /// Generated field name.
    pub name: String,
    /// Name of the schema component the field was derived from.
    pub schema_name: String,
    /// Resolved target type.
    pub field_type: FieldType,
    /// Schema component the field was derived from.
    pub origin: FieldOrigin,
    /// Whether the value may be absent.
    pub optional: bool,
    /// Whether the field holds a collection.
    pub repeated: bool,
    /// Initializer expression, if one was attached.
    initializer: Option<Expr>,
}

impl GeneratedField {
    /// Creates a new field without initializer.
    #[must_use]
    pub fn new(schema_name: &str, field_type: FieldType, origin: FieldOrigin) -> Self {
        Self {
            name: to_field_name(schema_name),
            schema_name: schema_name.to_string(),
            field_type,
            origin,
            optional: false,
            repeated: false,
            initializer: None,
        }
    }

    /// Returns the attached initializer, if any.
    #[must_use]
    pub fn initializer(&self) -> Option<&Expr> {
        self.initializer.as_ref()
    }

    /// Returns true if an initializer is attached.
    #[must_use]
    pub fn has_initializer(&self) -> bool {
        self.initializer.is_some()
    }

    /// Attaches an initializer to the field.
    ///
    /// # Errors
    /// Returns `ModelError::InitializerAlreadySet` if the field already has one.
    pub fn set_initializer(&mut self, expr: Expr) -> Result<(), ModelError> {
        if self.initializer.is_some() {
            return Err(ModelError::InitializerAlreadySet {
                field: self.name.clone(),
            });
        }
        self.initializer = Some(expr);
        Ok(())
    }
}

/// Schema component a field was derived from.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldOrigin {
    /// A particle of the content model (element, group reference or wildcard).
    Particle(Particle),
    /// An attribute declaration.
    Attribute(AttributeDecl),
    /// Generated without a direct schema counterpart (e.g. simple content).
    Synthetic,
}

impl FieldOrigin {
    /// Returns the particle, if the field came from one.
    #[must_use]
    pub const fn particle(&self) -> Option<&Particle> {
        match self {
            Self::Particle(p) => Some(p),
            _ => None,
        }
    }
}

/// Resolved target type of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// Text (`String`).
    Text,
    /// Boolean.
    Boolean,
    /// 8-bit integer.
    Byte,
    /// 16-bit integer.
    Short,
    /// 32-bit integer.
    Int,
    /// 64-bit integer.
    Long,
    /// Single-precision float.
    Float,
    /// Double-precision float.
    Double,
    /// Calendar value built through a datatype factory.
    Calendar,
    /// Generated enumeration.
    Enum(String),
    /// Generated class.
    Class(String),
    /// Any other type; carries the schema type name and the emitted type.
    Other {
        /// Schema type name.
        name: String,
        /// Emitted Rust type.
        rust_type: String,
    },
}

impl FieldType {
    /// Returns the emitted Rust type for a single value.
    #[must_use]
    pub fn rust_type(&self) -> &str {
        match self {
            Self::Text => "String",
            Self::Boolean => "bool",
            Self::Byte => "i8",
            Self::Short => "i16",
            Self::Int => "i32",
            Self::Long => "i64",
            Self::Float => "f32",
            Self::Double => "f64",
            Self::Calendar => "XmlGregorianCalendar",
            Self::Enum(name) | Self::Class(name) => name,
            Self::Other { rust_type, .. } => rust_type,
        }
    }

    fn from_builtin(builtin: BuiltinType, name: &str) -> Self {
        let other = |rust_type: &str| Self::Other {
            name: name.to_string(),
            rust_type: rust_type.to_string(),
        };
        match builtin {
            BuiltinType::String => Self::Text,
            BuiltinType::Boolean => Self::Boolean,
            BuiltinType::Byte => Self::Byte,
            BuiltinType::Short => Self::Short,
            BuiltinType::Int => Self::Int,
            BuiltinType::Long => Self::Long,
            BuiltinType::Float => Self::Float,
            BuiltinType::Double => Self::Double,
            BuiltinType::Calendar => Self::Calendar,
            BuiltinType::Decimal => other("BigDecimal"),
            BuiltinType::Integer => other("BigInteger"),
            BuiltinType::Duration => other("Duration"),
            BuiltinType::Binary => other("Vec<u8>"),
            BuiltinType::QName => other("QName"),
        }
    }
}

/// Enumeration generated from a simple type restricted by enumeration facets.
#[derive(Debug, Clone)]
pub struct EnumerationType {
    /// Generated type name.
    pub name: String,
    /// Name of the schema simple type.
    pub schema_name: String,
    /// Constants, in facet order.
    pub constants: Vec<EnumConstant>,
}

impl EnumerationType {
    /// Creates an enumeration from its schema name and lexical values.
    #[must_use]
    pub fn new(schema_name: &str, lexicals: &[String]) -> Self {
        let mut constants: Vec<EnumConstant> = Vec::with_capacity(lexicals.len());
        for (index, lexical) in lexicals.iter().enumerate() {
            let taken = |name: &str| constants.iter().any(|c| c.name == name);
            let mut name = constant_name(lexical);
            if name.is_empty() || taken(&name) {
                let mut suffix = index + 1;
                name = format!("Value{suffix}");
                while taken(&name) {
                    suffix += 1;
                    name = format!("Value{suffix}");
                }
            }
            constants.push(EnumConstant {
                name,
                lexical: lexical.clone(),
            });
        }

        Self {
            name: to_pascal_case(schema_name),
            schema_name: schema_name.to_string(),
            constants,
        }
    }
}

/// Constant of a generated enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumConstant {
    /// Generated constant name.
    pub name: String,
    /// Original lexical value from the schema.
    pub lexical: String,
}

/// Class-scoped, immutable static member, private to the generated class.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticField {
    /// Member name.
    pub name: String,
    /// Emitted type.
    pub type_name: String,
    /// How the member is initialized.
    pub init: StaticInit,
}

/// Initialization of a static member.
#[derive(Debug, Clone, PartialEq)]
pub enum StaticInit {
    /// Infallible initializer.
    Value(Expr),
    /// Fallible constructor; failure aborts with `message` and the cause.
    FailFast {
        /// Constructor expression returning a `Result`.
        constructor: Expr,
        /// Message raised when construction fails.
        message: String,
    },
}

/// Builds a class from a complex type definition.
fn build_class(
    schema: &Schema,
    schema_name: &str,
    def: &crate::types::ComplexTypeDef,
) -> GeneratedClass {
    let mut class = GeneratedClass::new(schema_name);

    flatten_particles(schema, &def.particles, false, false, 0, &mut class);

    for attribute in &def.attributes {
        if attribute.usage == AttributeUse::Prohibited {
            continue;
        }
        let mut field = GeneratedField::new(
            &attribute.name,
            resolve_type(schema, attribute.type_name.as_deref()),
            FieldOrigin::Attribute(attribute.clone()),
        );
        field.optional = attribute.usage != AttributeUse::Required;
        push_field(&mut class, field);
    }

    if let Some(base) = &def.simple_content {
        let field = GeneratedField::new(
            "value",
            resolve_type(schema, Some(base)),
            FieldOrigin::Synthetic,
        );
        push_field(&mut class, field);
    }

    class
}

/// Flattens particles into fields, in document order.
fn flatten_particles(
    schema: &Schema,
    particles: &[Particle],
    optional: bool,
    repeated: bool,
    depth: usize,
    class: &mut GeneratedClass,
) {
    for particle in particles {
        let optional = optional || particle.is_optional();
        let repeated = repeated || particle.is_repeated();

        match &particle.term {
            Term::Element(decl) => {
                let decl = resolve_element_ref(schema, decl);
                let field_type = element_type(schema, &decl);
                let origin = FieldOrigin::Particle(Particle {
                    term: Term::Element(decl.clone()),
                    ..particle.clone()
                });
                let mut field = GeneratedField::new(&decl.name, field_type, origin);
                field.optional = optional || decl.nillable;
                field.repeated = repeated;
                push_field(class, field);
            }
            Term::ModelGroup(compositor, children) => {
                let optional = optional || *compositor == Compositor::Choice;
                flatten_particles(schema, children, optional, repeated, depth, class);
            }
            Term::GroupRef(name) => match schema.group(name) {
                Some(group) if depth < MAX_RESOLVE_DEPTH => flatten_particles(
                    schema,
                    &group.particles,
                    optional,
                    repeated,
                    depth + 1,
                    class,
                ),
                _ => {
                    let field_type = FieldType::Other {
                        name: name.clone(),
                        rust_type: to_pascal_case(name),
                    };
                    let origin = FieldOrigin::Particle(particle.clone());
                    let mut field = GeneratedField::new(name, field_type, origin);
                    field.optional = optional;
                    field.repeated = repeated;
                    push_field(class, field);
                }
            },
            Term::Wildcard => {
                let field_type = FieldType::Other {
                    name: "anyType".to_string(),
                    rust_type: "AnyElement".to_string(),
                };
                let origin = FieldOrigin::Particle(particle.clone());
                let mut field = GeneratedField::new("any", field_type, origin);
                field.optional = optional;
                field.repeated = repeated;
                push_field(class, field);
            }
        }
    }
}

/// Adds a field, renaming it if the generated name is already taken.
fn push_field(class: &mut GeneratedClass, mut field: GeneratedField) {
    if class.has_member(&field.name) {
        let base = field.name.clone();
        let mut suffix = 2;
        while class.has_member(&format!("{base}_{suffix}")) {
            suffix += 1;
        }
        field.name = format!("{base}_{suffix}");
    }
    class.fields.push(field);
}

/// Replaces an element reference with the referenced top-level declaration.
fn resolve_element_ref(schema: &Schema, decl: &ElementDecl) -> ElementDecl {
    if !decl.is_ref {
        return decl.clone();
    }
    schema
        .elements
        .iter()
        .find(|e| e.decl.name == decl.name)
        .map_or_else(|| decl.clone(), |e| e.decl.clone())
}

/// Resolves the type of an element declaration.
fn element_type(schema: &Schema, decl: &ElementDecl) -> FieldType {
    if decl.type_name.is_none() {
        let anonymous = schema
            .elements
            .iter()
            .any(|e| e.decl.name == decl.name && e.anonymous_type.is_some());
        if anonymous {
            return FieldType::Class(to_pascal_case(&decl.name));
        }
    }
    resolve_type(schema, decl.type_name.as_deref())
}

/// Resolves a type reference to the field type the emitter will use.
fn resolve_type(schema: &Schema, type_name: Option<&str>) -> FieldType {
    let mut current = match type_name {
        Some(name) => local_name(name).to_string(),
        None => {
            return FieldType::Other {
                name: "anyType".to_string(),
                rust_type: "AnyElement".to_string(),
            };
        }
    };

    for _ in 0..MAX_RESOLVE_DEPTH {
        if let Some(simple) = schema.simple_type(&current) {
            if simple.is_enumeration() {
                return FieldType::Enum(to_pascal_case(&simple.name));
            }
            current = local_name(&simple.base).to_string();
            continue;
        }
        if schema.complex_type(&current).is_some() {
            return FieldType::Class(to_pascal_case(&current));
        }
        if let Some(builtin) = BuiltinType::from_xsd_name(&current) {
            return FieldType::from_builtin(builtin, &current);
        }
        break;
    }

    FieldType::Other {
        rust_type: to_pascal_case(&current),
        name: current,
    }
}

/// Derives a module name from a target namespace.
fn package_name(target_namespace: Option<&str>) -> String {
    target_namespace
        .and_then(|ns| {
            ns.split([':', '/', '.'])
                .filter(|segment| !segment.is_empty())
                .last()
        })
        .map(to_snake_case)
        .filter(|name| name.starts_with(|c: char| c.is_ascii_alphabetic()))
        .map(|name| {
            if RUST_KEYWORDS.contains(&name.as_str()) {
                format!("{name}_")
            } else {
                name
            }
        })
        .unwrap_or_else(|| "generated".to_string())
}

/// Derives a constant name from a lexical enumeration value.
fn constant_name(lexical: &str) -> String {
    let cleaned: String = lexical
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    let base = if cleaned.chars().any(|c| c.is_ascii_lowercase()) {
        cleaned
    } else {
        cleaned.to_ascii_lowercase()
    };
    let name = to_pascal_case(&base);
    if name.starts_with(|c: char| c.is_ascii_digit()) || name == "Self" {
        String::new()
    } else {
        name
    }
}

/// Derives a field name, escaping Rust keywords.
fn to_field_name(schema_name: &str) -> String {
    let name = to_snake_case(schema_name);
    let name = if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{name}")
    } else {
        name
    };
    if RUST_KEYWORDS.contains(&name.as_str()) {
        format!("{name}_")
    } else {
        name
    }
}

/// Rust strict and reserved keywords, none of which may name an item.
pub const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod",
    "move", "mut", "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do", "final",
    "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// Converts a string to snake_case.
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_lower = false;
    for c in s.chars() {
        if !c.is_ascii_alphanumeric() {
            if !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
            prev_lower = false;
            continue;
        }
        if c.is_ascii_uppercase() && prev_lower {
            result.push('_');
        }
        prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
        result.push(c.to_ascii_lowercase());
    }
    result.trim_end_matches('_').to_string()
}

/// Converts a string to PascalCase.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;

    for c in s.chars() {
        if c == '_' || c == '-' || c == '.' || c == ' ' {
            capitalize_next = true;
        } else if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_schema;

    const SCHEMA: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema"
           xmlns:tns="urn:test:orders"
           targetNamespace="urn:test:orders">
    <xs:simpleType name="Color">
        <xs:restriction base="xs:string">
            <xs:enumeration value="RED"/>
            <xs:enumeration value="light-blue"/>
            <xs:enumeration value="1"/>
        </xs:restriction>
    </xs:simpleType>
    <xs:simpleType name="Sku">
        <xs:restriction base="xs:token"/>
    </xs:simpleType>
    <xs:complexType name="Order">
        <xs:sequence>
            <xs:element name="sku" type="tns:Sku" fixed="A-1"/>
            <xs:element name="color" type="tns:Color" minOccurs="0"/>
            <xs:element name="lines" type="tns:Line" maxOccurs="unbounded"/>
            <xs:element name="type" type="xs:unsignedByte"/>
            <xs:element name="total" type="xs:decimal"/>
            <xs:choice>
                <xs:element name="email" type="xs:string"/>
                <xs:element name="phone" type="xs:string"/>
            </xs:choice>
            <xs:group ref="tns:Audit"/>
            <xs:group ref="tns:Missing"/>
            <xs:any/>
        </xs:sequence>
        <xs:attribute name="version" type="xs:string" fixed="1.0"/>
        <xs:attribute name="legacy" type="xs:string" use="prohibited"/>
    </xs:complexType>
    <xs:complexType name="Line">
        <xs:simpleContent>
            <xs:extension base="xs:int"/>
        </xs:simpleContent>
    </xs:complexType>
    <xs:group name="Audit">
        <xs:sequence>
            <xs:element name="createdAt" type="xs:dateTime"/>
        </xs:sequence>
    </xs:group>
    <xs:element name="shipment">
        <xs:complexType>
            <xs:sequence>
                <xs:element name="carrier" type="xs:string"/>
            </xs:sequence>
        </xs:complexType>
    </xs:element>
</xs:schema>"#;

    fn model() -> ClassModel {
        let schema = parse_schema(SCHEMA).expect("Failed to parse");
        ClassModel::from_schema(&schema)
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("clOrdId"), "cl_ord_id");
        assert_eq!(to_snake_case("symbol"), "symbol");
        assert_eq!(to_snake_case("created-by"), "created_by");
        assert_eq!(to_snake_case("URL"), "url");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("message_header"), "MessageHeader");
        assert_eq!(to_pascal_case("side"), "Side");
        assert_eq!(to_pascal_case("order-type"), "OrderType");
    }

    #[test]
    fn test_model_package() {
        assert_eq!(model().package, "orders");
        assert_eq!(package_name(None), "generated");
        assert_eq!(package_name(Some("http://example.com/billing/")), "billing");
        assert_eq!(package_name(Some("urn:2024")), "generated");
        assert_eq!(package_name(Some("urn:example:type")), "type_");
        assert_eq!(package_name(Some("urn:x:gen")), "gen_");
    }

    #[test]
    fn test_model_classes() {
        let model = model();
        let names: Vec<_> = model.classes.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Order", "Line", "Shipment"]);
    }

    #[test]
    fn test_enumeration_constants() {
        let model = model();
        let color = model.enumeration("Color").expect("Color enum");
        let names: Vec<_> = color.constants.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Red", "LightBlue", "Value3"]);
        assert_eq!(color.constants[1].lexical, "light-blue");
    }

    #[test]
    fn test_enumeration_fallback_names_unique() {
        let lexicals = ["value2", "-", "value3", "+"].map(String::from);
        let mode = EnumerationType::new("mode", &lexicals);
        let names: Vec<_> = mode.constants.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Value2", "Value3", "Value4", "Value5"]);
    }

    #[test]
    fn test_field_types() {
        let model = model();
        let order = model.class("Order").expect("Order class");

        assert_eq!(order.field("sku").expect("sku").field_type, FieldType::Text);
        assert_eq!(
            order.field("color").expect("color").field_type,
            FieldType::Enum("Color".into())
        );
        assert_eq!(
            order.field("lines").expect("lines").field_type,
            FieldType::Class("Line".into())
        );
        assert_eq!(order.field("type_").expect("type_").field_type, FieldType::Short);
        assert!(matches!(
            order.field("total").expect("total").field_type,
            FieldType::Other { .. }
        ));
        assert_eq!(
            order.field("created_at").expect("created_at").field_type,
            FieldType::Calendar
        );
    }

    #[test]
    fn test_field_occurrence() {
        let model = model();
        let order = model.class("Order").expect("Order class");

        assert!(order.field("color").expect("color").optional);
        assert!(order.field("lines").expect("lines").repeated);
        assert!(order.field("email").expect("email").optional);
        assert!(!order.field("sku").expect("sku").optional);
    }

    #[test]
    fn test_field_origins() {
        let model = model();
        let order = model.class("Order").expect("Order class");

        let sku = order.field("sku").expect("sku");
        let particle = sku.origin.particle().expect("particle origin");
        let decl = particle.term.as_element_decl().expect("element decl");
        assert_eq!(decl.fixed_value.as_deref(), Some("A-1"));

        let version = order.field("version").expect("version");
        assert!(matches!(version.origin, FieldOrigin::Attribute(_)));
        assert!(order.field("legacy").is_none());

        let missing = order.field("missing").expect("missing");
        assert!(matches!(
            missing.origin.particle().map(|p| &p.term),
            Some(Term::GroupRef(_))
        ));

        let any = order.field("any").expect("any");
        assert!(matches!(
            any.origin.particle().map(|p| &p.term),
            Some(Term::Wildcard)
        ));

        let line = model.class("Line").expect("Line class");
        let value = line.field("value").expect("value");
        assert_eq!(value.origin, FieldOrigin::Synthetic);
        assert_eq!(value.field_type, FieldType::Int);
    }

    #[test]
    fn test_set_initializer_once() {
        let mut field = GeneratedField::new("code", FieldType::Text, FieldOrigin::Synthetic);
        assert!(!field.has_initializer());

        field.set_initializer(Expr::str("a")).expect("first initializer");
        assert_eq!(field.initializer(), Some(&Expr::str("a")));

        let err = field.set_initializer(Expr::str("b"));
        assert!(matches!(err, Err(ModelError::InitializerAlreadySet { .. })));
        assert_eq!(field.initializer(), Some(&Expr::str("a")));
    }

    #[test]
    fn test_add_static_collision() {
        let mut model = model();
        let order = model.class_mut("Order").expect("Order class");
        let member = StaticField {
            name: "sku".to_string(),
            type_name: "String".to_string(),
            init: StaticInit::Value(Expr::str("x")),
        };

        let err = order.add_static(member);
        assert!(matches!(err, Err(ModelError::DuplicateMember { .. })));
        assert!(order.statics.is_empty());
    }
}
