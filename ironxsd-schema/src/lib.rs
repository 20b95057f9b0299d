//! # IronXSD Schema
//!
//! XML Schema reader and generated class model.
//!
//! This crate provides:
//! - XML Schema parsing for the data-binding subset (types, particles, attributes)
//! - Definitions for the parsed schema components
//! - The class model handed to code-generation plugins
//! - Initializer expressions plugins attach to generated members

pub mod error;
pub mod expr;
pub mod model;
pub mod parser;
pub mod types;

pub use error::{ModelError, ParseError};
pub use expr::Expr;
pub use model::{
    ClassModel, EnumConstant, EnumerationType, FieldOrigin, FieldType, GeneratedClass,
    GeneratedField, RUST_KEYWORDS, StaticField, StaticInit,
};
pub use parser::parse_schema;
pub use types::{
    AttributeDecl, AttributeUse, BuiltinType, ComplexTypeDef, Compositor, ElementDecl, GroupDef,
    MaxOccurs, Particle, Schema, SimpleTypeDef, Term, TopLevelElement,
};
