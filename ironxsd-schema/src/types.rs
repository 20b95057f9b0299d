//! Schema component definitions.
//!
//! This module contains the data structures representing the XML Schema
//! components the reader understands: simple types with enumeration facets,
//! complex types with their content particles and attributes, model groups
//! and top-level element declarations.

use std::collections::HashMap;

/// Complete schema document.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    /// Target namespace, if declared.
    pub target_namespace: Option<String>,
    /// Named simple type definitions.
    pub simple_types: Vec<SimpleTypeDef>,
    /// Named complex type definitions.
    pub complex_types: Vec<ComplexTypeDef>,
    /// Named model group definitions.
    pub groups: Vec<GroupDef>,
    /// Top-level element declarations.
    pub elements: Vec<TopLevelElement>,
    /// Simple type lookup map (built during parsing).
    simple_map: HashMap<String, usize>,
    /// Complex type lookup map (built during parsing).
    complex_map: HashMap<String, usize>,
}

impl Schema {
    /// Creates a new empty schema.
    #[must_use]
    pub fn new(target_namespace: Option<String>) -> Self {
        Self {
            target_namespace,
            ..Self::default()
        }
    }

    /// Adds a simple type definition.
    pub fn add_simple_type(&mut self, def: SimpleTypeDef) {
        self.simple_map
            .insert(def.name.clone(), self.simple_types.len());
        self.simple_types.push(def);
    }

    /// Adds a complex type definition.
    pub fn add_complex_type(&mut self, def: ComplexTypeDef) {
        self.complex_map
            .insert(def.name.clone(), self.complex_types.len());
        self.complex_types.push(def);
    }

    /// Adds a named model group.
    pub fn add_group(&mut self, group: GroupDef) {
        self.groups.push(group);
    }

    /// Adds a top-level element declaration.
    pub fn add_element(&mut self, element: TopLevelElement) {
        self.elements.push(element);
    }

    /// Looks up a simple type by local name.
    #[must_use]
    pub fn simple_type(&self, name: &str) -> Option<&SimpleTypeDef> {
        self.simple_map.get(name).map(|&idx| &self.simple_types[idx])
    }

    /// Looks up a complex type by local name.
    #[must_use]
    pub fn complex_type(&self, name: &str) -> Option<&ComplexTypeDef> {
        self.complex_map.get(name).map(|&idx| &self.complex_types[idx])
    }

    /// Looks up a named model group by local name.
    #[must_use]
    pub fn group(&self, name: &str) -> Option<&GroupDef> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Returns true if any simple or complex type with the given name exists.
    #[must_use]
    pub fn has_type(&self, name: &str) -> bool {
        self.simple_map.contains_key(name) || self.complex_map.contains_key(name)
    }
}

/// Named simple type, restricted from a base type.
#[derive(Debug, Clone)]
pub struct SimpleTypeDef {
    /// Type name.
    pub name: String,
    /// Base type reference (qualified as written, e.g. `xs:string`).
    pub base: String,
    /// Enumeration facet values, in document order.
    pub enumerations: Vec<String>,
}

impl SimpleTypeDef {
    /// Creates a new simple type restriction.
    #[must_use]
    pub fn new(name: String, base: String) -> Self {
        Self {
            name,
            base,
            enumerations: Vec::new(),
        }
    }

    /// Returns true if the type is restricted by enumeration facets.
    #[must_use]
    pub fn is_enumeration(&self) -> bool {
        !self.enumerations.is_empty()
    }
}

/// Complex type definition.
#[derive(Debug, Clone, Default)]
pub struct ComplexTypeDef {
    /// Type name.
    pub name: String,
    /// Content particles, in document order.
    pub particles: Vec<Particle>,
    /// Attribute declarations.
    pub attributes: Vec<AttributeDecl>,
    /// Base type of simple content, if the type has simple content.
    pub simple_content: Option<String>,
}

impl ComplexTypeDef {
    /// Creates a new, empty complex type.
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }
}

/// Named model group (`xs:group name="..."`).
#[derive(Debug, Clone)]
pub struct GroupDef {
    /// Group name.
    pub name: String,
    /// Particles of the group's compositor.
    pub particles: Vec<Particle>,
}

/// Top-level element declaration.
#[derive(Debug, Clone)]
pub struct TopLevelElement {
    /// Element declaration.
    pub decl: ElementDecl,
    /// Anonymous complex type, if declared inline.
    pub anonymous_type: Option<ComplexTypeDef>,
}

/// Occurrence of a term within a content model.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Minimum occurrences.
    pub min_occurs: u32,
    /// Maximum occurrences.
    pub max_occurs: MaxOccurs,
    /// The term this particle wraps.
    pub term: Term,
}

impl Particle {
    /// Creates a particle occurring exactly once.
    #[must_use]
    pub fn once(term: Term) -> Self {
        Self {
            min_occurs: 1,
            max_occurs: MaxOccurs::Bounded(1),
            term,
        }
    }

    /// Returns true if the particle may be absent.
    #[must_use]
    pub fn is_optional(&self) -> bool {
        self.min_occurs == 0
    }

    /// Returns true if the particle may occur more than once.
    #[must_use]
    pub fn is_repeated(&self) -> bool {
        match self.max_occurs {
            MaxOccurs::Bounded(n) => n > 1,
            MaxOccurs::Unbounded => true,
        }
    }
}

/// Upper occurrence bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxOccurs {
    /// Fixed upper bound.
    Bounded(u32),
    /// `maxOccurs="unbounded"`.
    Unbounded,
}

impl MaxOccurs {
    /// Parses a `maxOccurs` attribute value.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        if s == "unbounded" {
            Some(Self::Unbounded)
        } else {
            s.parse().ok().map(Self::Bounded)
        }
    }
}

/// Particle term.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    /// Local element declaration.
    Element(ElementDecl),
    /// Reference to a named model group.
    GroupRef(String),
    /// Compositor (`sequence`, `choice` or `all`) with its particles.
    ModelGroup(Compositor, Vec<Particle>),
    /// Element wildcard (`xs:any`).
    Wildcard,
}

impl Term {
    /// Returns true if the term is an element declaration.
    #[must_use]
    pub const fn is_element_decl(&self) -> bool {
        matches!(self, Self::Element(_))
    }

    /// Returns the element declaration, if the term is one.
    #[must_use]
    pub const fn as_element_decl(&self) -> Option<&ElementDecl> {
        match self {
            Self::Element(decl) => Some(decl),
            _ => None,
        }
    }
}

/// Model group compositor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compositor {
    /// `xs:sequence`.
    Sequence,
    /// `xs:choice`.
    Choice,
    /// `xs:all`.
    All,
}

impl Compositor {
    /// Resolves a compositor from its element local name.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "sequence" => Some(Self::Sequence),
            "choice" => Some(Self::Choice),
            "all" => Some(Self::All),
            _ => None,
        }
    }
}

/// Element declaration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementDecl {
    /// Element name.
    pub name: String,
    /// Type reference (qualified as written), if any.
    pub type_name: Option<String>,
    /// `fixed` value constraint, verbatim.
    pub fixed_value: Option<String>,
    /// `default` value constraint, verbatim.
    pub default_value: Option<String>,
    /// Whether `nillable="true"`.
    pub nillable: bool,
    /// Whether the declaration is a `ref` to a top-level element.
    pub is_ref: bool,
}

impl ElementDecl {
    /// Creates a new element declaration.
    #[must_use]
    pub fn new(name: String, type_name: Option<String>) -> Self {
        Self {
            name,
            type_name,
            ..Self::default()
        }
    }
}

/// Attribute declaration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttributeDecl {
    /// Attribute name.
    pub name: String,
    /// Type reference (qualified as written), if any.
    pub type_name: Option<String>,
    /// `fixed` value constraint, verbatim.
    pub fixed_value: Option<String>,
    /// `default` value constraint, verbatim.
    pub default_value: Option<String>,
    /// Attribute use.
    pub usage: AttributeUse,
}

/// Attribute `use`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttributeUse {
    /// `use="optional"` (the default).
    #[default]
    Optional,
    /// `use="required"`.
    Required,
    /// `use="prohibited"`.
    Prohibited,
}

impl AttributeUse {
    /// Parses an attribute `use` value.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "optional" => Some(Self::Optional),
            "required" => Some(Self::Required),
            "prohibited" => Some(Self::Prohibited),
            _ => None,
        }
    }
}

/// Built-in XML Schema datatypes the class model distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinType {
    /// `xs:string` and its string-like derivations.
    String,
    /// `xs:boolean`.
    Boolean,
    /// `xs:byte`.
    Byte,
    /// `xs:short`, `xs:unsignedByte`.
    Short,
    /// `xs:int`, `xs:unsignedShort`.
    Int,
    /// `xs:long`, `xs:unsignedInt`.
    Long,
    /// `xs:float`.
    Float,
    /// `xs:double`.
    Double,
    /// `xs:decimal`.
    Decimal,
    /// `xs:integer` and its unbounded derivations.
    Integer,
    /// Date and time types represented as a calendar value.
    Calendar,
    /// `xs:duration`.
    Duration,
    /// `xs:base64Binary`, `xs:hexBinary`.
    Binary,
    /// `xs:QName`.
    QName,
}

impl BuiltinType {
    /// Resolves a built-in datatype from its local name.
    #[must_use]
    pub fn from_xsd_name(name: &str) -> Option<Self> {
        let ty = match name {
            "string" | "normalizedString" | "token" | "language" | "Name" | "NCName"
            | "NMTOKEN" | "ID" | "IDREF" | "ENTITY" | "anyURI" | "anySimpleType" => Self::String,
            "boolean" => Self::Boolean,
            "byte" => Self::Byte,
            "short" | "unsignedByte" => Self::Short,
            "int" | "unsignedShort" => Self::Int,
            "long" | "unsignedInt" => Self::Long,
            "float" => Self::Float,
            "double" => Self::Double,
            "decimal" => Self::Decimal,
            "integer" | "nonNegativeInteger" | "positiveInteger" | "nonPositiveInteger"
            | "negativeInteger" | "unsignedLong" => Self::Integer,
            "date" | "dateTime" | "time" | "gYear" | "gYearMonth" | "gMonth" | "gMonthDay"
            | "gDay" => Self::Calendar,
            "duration" => Self::Duration,
            "base64Binary" | "hexBinary" => Self::Binary,
            "QName" => Self::QName,
            _ => return None,
        };
        Some(ty)
    }
}

/// Strips the namespace prefix from a qualified name.
#[must_use]
pub fn local_name(qname: &str) -> &str {
    qname.rsplit_once(':').map_or(qname, |(_, local)| local)
}
