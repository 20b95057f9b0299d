//! XML Schema reader.
//!
//! This module parses the subset of W3C XML Schema needed to build a class
//! model: named simple types with enumeration facets, complex types with
//! their content models and attributes, named model groups, and top-level
//! element declarations. Namespace prefixes are ignored; components are
//! matched on their local names.

use crate::error::ParseError;
use crate::types::{
    AttributeDecl, AttributeUse, ComplexTypeDef, Compositor, ElementDecl, GroupDef, MaxOccurs,
    Particle, Schema, SimpleTypeDef, Term, TopLevelElement,
};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Parses an XML Schema document from a string.
///
/// # Arguments
/// * `xml` - XML Schema content
///
/// # Returns
/// Parsed schema or parse error.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed or contains invalid schema components.
pub fn parse_schema(xml: &str) -> Result<Schema, ParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut schema: Option<Schema> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => parse_top_level(&mut reader, &mut schema, e, false)?,
            Event::Empty(ref e) => parse_top_level(&mut reader, &mut schema, e, true)?,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    schema.ok_or_else(|| ParseError::structure("No schema element found"))
}

/// Dispatches one child of the `schema` element (or the `schema` element itself).
fn parse_top_level(
    reader: &mut Reader<&[u8]>,
    schema: &mut Option<Schema>,
    e: &BytesStart<'_>,
    empty: bool,
) -> Result<(), ParseError> {
    let tag = tag_name(e)?;

    if tag == "schema" {
        if schema.is_some() {
            return Err(ParseError::structure("nested schema element"));
        }
        *schema = Some(Schema::new(attr(e, "targetNamespace")?));
        return Ok(());
    }

    let Some(schema) = schema.as_mut() else {
        return skip_unless_empty(reader, empty);
    };

    match tag.as_str() {
        "simpleType" => {
            let name = required_attr(e, "simpleType", "name")?;
            if schema.has_type(&name) {
                return Err(ParseError::duplicate("type", name));
            }
            let mut def = SimpleTypeDef::new(name, "xs:string".to_string());
            if !empty {
                parse_simple_type_body(reader, &mut def)?;
            }
            schema.add_simple_type(def);
        }
        "complexType" => {
            let name = required_attr(e, "complexType", "name")?;
            if schema.has_type(&name) {
                return Err(ParseError::duplicate("type", name));
            }
            let mut def = ComplexTypeDef::new(name);
            if !empty {
                parse_complex_type_body(reader, &mut def)?;
            }
            schema.add_complex_type(def);
        }
        "group" => {
            let name = required_attr(e, "group", "name")?;
            if schema.group(&name).is_some() {
                return Err(ParseError::duplicate("group", name));
            }
            let particles = if empty {
                Vec::new()
            } else {
                parse_compositor_children(reader)?
            };
            schema.add_group(GroupDef { name, particles });
        }
        "element" => {
            let element = parse_top_level_element(reader, e, empty)?;
            schema.add_element(element);
        }
        _ => skip_unless_empty(reader, empty)?,
    }

    Ok(())
}

/// Parses the content of a named `simpleType`.
fn parse_simple_type_body(
    reader: &mut Reader<&[u8]>,
    def: &mut SimpleTypeDef,
) -> Result<(), ParseError> {
    let mut buf = Vec::new();
    let mut depth = 0usize;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match tag_name(e)?.as_str() {
                "restriction" => {
                    if let Some(base) = attr(e, "base")? {
                        def.base = base;
                    }
                    depth += 1;
                }
                "enumeration" => {
                    def.enumerations
                        .push(required_attr(e, "enumeration", "value")?);
                    skip_to_end(reader)?;
                }
                _ => skip_to_end(reader)?,
            },
            Event::Empty(ref e) => match tag_name(e)?.as_str() {
                "restriction" => {
                    if let Some(base) = attr(e, "base")? {
                        def.base = base;
                    }
                }
                "enumeration" => {
                    def.enumerations
                        .push(required_attr(e, "enumeration", "value")?);
                }
                _ => {}
            },
            Event::End(_) => {
                if depth == 0 {
                    break;
                }
                depth -= 1;
            }
            Event::Eof => return Err(ParseError::structure("unterminated simpleType")),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

/// Parses the content of a `complexType`, up to and including its end tag.
fn parse_complex_type_body(
    reader: &mut Reader<&[u8]>,
    def: &mut ComplexTypeDef,
) -> Result<(), ParseError> {
    let mut buf = Vec::new();
    let mut depth = 0usize;
    let mut in_simple_content = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                let tag = tag_name(e)?;
                if let Some(compositor) = Compositor::from_tag(&tag) {
                    let (min_occurs, max_occurs) = parse_occurs(e, &tag)?;
                    let particles = parse_compositor_children(reader)?;
                    def.particles.push(Particle {
                        min_occurs,
                        max_occurs,
                        term: Term::ModelGroup(compositor, particles),
                    });
                } else {
                    match tag.as_str() {
                        "simpleContent" => {
                            in_simple_content = true;
                            depth += 1;
                        }
                        "complexContent" => depth += 1,
                        "extension" | "restriction" => {
                            if in_simple_content {
                                def.simple_content = attr(e, "base")?;
                            }
                            depth += 1;
                        }
                        "attribute" => {
                            def.attributes.push(parse_attribute(e)?);
                            skip_to_end(reader)?;
                        }
                        "group" => {
                            def.particles.push(parse_group_ref(e)?);
                            skip_to_end(reader)?;
                        }
                        _ => skip_to_end(reader)?,
                    }
                }
            }
            Event::Empty(ref e) => match tag_name(e)?.as_str() {
                "attribute" => def.attributes.push(parse_attribute(e)?),
                "group" => def.particles.push(parse_group_ref(e)?),
                "extension" | "restriction" if in_simple_content => {
                    def.simple_content = attr(e, "base")?;
                }
                _ => {}
            },
            Event::End(_) => {
                if depth == 0 {
                    break;
                }
                depth -= 1;
            }
            Event::Eof => return Err(ParseError::structure("unterminated complexType")),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

/// Parses the particles of a compositor, up to and including its end tag.
fn parse_compositor_children(reader: &mut Reader<&[u8]>) -> Result<Vec<Particle>, ParseError> {
    let mut particles = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                let tag = tag_name(e)?;
                if let Some(compositor) = Compositor::from_tag(&tag) {
                    let (min_occurs, max_occurs) = parse_occurs(e, &tag)?;
                    let nested = parse_compositor_children(reader)?;
                    particles.push(Particle {
                        min_occurs,
                        max_occurs,
                        term: Term::ModelGroup(compositor, nested),
                    });
                } else {
                    if let Some(particle) = parse_particle(e, &tag)? {
                        particles.push(particle);
                    }
                    skip_to_end(reader)?;
                }
            }
            Event::Empty(ref e) => {
                let tag = tag_name(e)?;
                if let Some(compositor) = Compositor::from_tag(&tag) {
                    let (min_occurs, max_occurs) = parse_occurs(e, &tag)?;
                    particles.push(Particle {
                        min_occurs,
                        max_occurs,
                        term: Term::ModelGroup(compositor, Vec::new()),
                    });
                } else if let Some(particle) = parse_particle(e, &tag)? {
                    particles.push(particle);
                }
            }
            Event::End(_) => break,
            Event::Eof => return Err(ParseError::structure("unterminated model group")),
            _ => {}
        }
        buf.clear();
    }

    Ok(particles)
}

/// Parses a leaf particle (`element`, `group ref` or `any`).
///
/// Returns `None` for annotations and other non-particle children.
fn parse_particle(e: &BytesStart<'_>, tag: &str) -> Result<Option<Particle>, ParseError> {
    let particle = match tag {
        "element" => {
            let (min_occurs, max_occurs) = parse_occurs(e, tag)?;
            Particle {
                min_occurs,
                max_occurs,
                term: Term::Element(parse_element_decl(e)?),
            }
        }
        "group" => parse_group_ref(e)?,
        "any" => {
            let (min_occurs, max_occurs) = parse_occurs(e, tag)?;
            Particle {
                min_occurs,
                max_occurs,
                term: Term::Wildcard,
            }
        }
        _ => return Ok(None),
    };
    Ok(Some(particle))
}

/// Parses a `group ref="..."` particle.
fn parse_group_ref(e: &BytesStart<'_>) -> Result<Particle, ParseError> {
    let (min_occurs, max_occurs) = parse_occurs(e, "group")?;
    let reference = required_attr(e, "group", "ref")?;
    Ok(Particle {
        min_occurs,
        max_occurs,
        term: Term::GroupRef(crate::types::local_name(&reference).to_string()),
    })
}

/// Parses the attributes of an element declaration.
fn parse_element_decl(e: &BytesStart<'_>) -> Result<ElementDecl, ParseError> {
    let mut decl = ElementDecl::default();

    for (key, value) in attributes(e)? {
        match key.as_str() {
            "name" => decl.name = value,
            "ref" => {
                decl.name = crate::types::local_name(&value).to_string();
                decl.is_ref = true;
            }
            "type" => decl.type_name = Some(value),
            "fixed" => decl.fixed_value = Some(value),
            "default" => decl.default_value = Some(value),
            "nillable" => {
                decl.nillable = parse_xsd_bool(&value)
                    .ok_or_else(|| ParseError::invalid_attr("element", "nillable", &value))?
            }
            _ => {}
        }
    }

    if decl.name.is_empty() {
        return Err(ParseError::missing_attr("element", "name"));
    }

    Ok(decl)
}

/// Parses a top-level element declaration, including an anonymous complex type.
fn parse_top_level_element(
    reader: &mut Reader<&[u8]>,
    e: &BytesStart<'_>,
    empty: bool,
) -> Result<TopLevelElement, ParseError> {
    let decl = parse_element_decl(e)?;
    let mut anonymous_type = None;

    if !empty {
        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(ref child) => {
                    if tag_name(child)? == "complexType" {
                        let mut def = ComplexTypeDef::new(decl.name.clone());
                        parse_complex_type_body(reader, &mut def)?;
                        anonymous_type = Some(def);
                    } else {
                        skip_to_end(reader)?;
                    }
                }
                Event::Empty(ref child) => {
                    if tag_name(child)? == "complexType" {
                        anonymous_type = Some(ComplexTypeDef::new(decl.name.clone()));
                    }
                }
                Event::End(_) => break,
                Event::Eof => return Err(ParseError::structure("unterminated element")),
                _ => {}
            }
            buf.clear();
        }
    }

    Ok(TopLevelElement {
        decl,
        anonymous_type,
    })
}

/// Parses an attribute declaration.
fn parse_attribute(e: &BytesStart<'_>) -> Result<AttributeDecl, ParseError> {
    let mut decl = AttributeDecl::default();

    for (key, value) in attributes(e)? {
        match key.as_str() {
            "name" => decl.name = value,
            "ref" => decl.name = crate::types::local_name(&value).to_string(),
            "type" => decl.type_name = Some(value),
            "fixed" => decl.fixed_value = Some(value),
            "default" => decl.default_value = Some(value),
            "use" => {
                decl.usage = AttributeUse::parse(&value)
                    .ok_or_else(|| ParseError::invalid_attr("attribute", "use", &value))?
            }
            _ => {}
        }
    }

    if decl.name.is_empty() {
        return Err(ParseError::missing_attr("attribute", "name"));
    }

    Ok(decl)
}

/// Parses `minOccurs`/`maxOccurs`, defaulting both to one.
fn parse_occurs(e: &BytesStart<'_>, tag: &str) -> Result<(u32, MaxOccurs), ParseError> {
    let min_occurs = match attr(e, "minOccurs")? {
        Some(value) => value
            .parse()
            .map_err(|_| ParseError::invalid_attr(tag, "minOccurs", &value))?,
        None => 1,
    };
    let max_occurs = match attr(e, "maxOccurs")? {
        Some(value) => MaxOccurs::parse(&value)
            .ok_or_else(|| ParseError::invalid_attr(tag, "maxOccurs", &value))?,
        None => MaxOccurs::Bounded(1),
    };
    Ok((min_occurs, max_occurs))
}

/// Parses an `xs:boolean` lexical value.
fn parse_xsd_bool(value: &str) -> Option<bool> {
    match value {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// Returns the local name of an element tag.
fn tag_name(e: &BytesStart<'_>) -> Result<String, ParseError> {
    Ok(std::str::from_utf8(e.local_name().as_ref())?.to_string())
}

/// Collects all attributes of an element with unescaped values.
fn attributes(e: &BytesStart<'_>) -> Result<Vec<(String, String)>, ParseError> {
    let mut out = Vec::new();
    for attr in e.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())?.to_string();
        let raw = std::str::from_utf8(&attr.value)?;
        let value = quick_xml::escape::unescape(raw)?.into_owned();
        out.push((key, value));
    }
    Ok(out)
}

/// Returns a single attribute value, if present.
fn attr(e: &BytesStart<'_>, name: &str) -> Result<Option<String>, ParseError> {
    Ok(attributes(e)?
        .into_iter()
        .find_map(|(key, value)| (key == name).then_some(value)))
}

/// Returns a required attribute value.
fn required_attr(e: &BytesStart<'_>, element: &str, name: &str) -> Result<String, ParseError> {
    attr(e, name)?.ok_or_else(|| ParseError::missing_attr(element, name))
}

/// Skips the remainder of a non-empty element.
fn skip_unless_empty(reader: &mut Reader<&[u8]>, empty: bool) -> Result<(), ParseError> {
    if empty { Ok(()) } else { skip_to_end(reader) }
}

/// Skips to the end of the current element.
fn skip_to_end(reader: &mut Reader<&[u8]>) -> Result<(), ParseError> {
    let mut buf = Vec::new();
    let mut depth = 1;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDER_SCHEMA: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema"
           xmlns:tns="urn:test:orders"
           targetNamespace="urn:test:orders">
    <xs:simpleType name="Color">
        <xs:annotation><xs:documentation>Paint colors.</xs:documentation></xs:annotation>
        <xs:restriction base="xs:string">
            <xs:enumeration value="RED"/>
            <xs:enumeration value="GREEN"/>
            <xs:enumeration value="BLUE"/>
        </xs:restriction>
    </xs:simpleType>
    <xs:complexType name="Order">
        <xs:sequence>
            <xs:element name="currency" type="xs:string" fixed="EUR &amp; co"/>
            <xs:element name="color" type="tns:Color" fixed="GREEN" minOccurs="0"/>
            <xs:element name="lines" type="xs:string" maxOccurs="unbounded"/>
            <xs:choice>
                <xs:element name="email" type="xs:string"/>
                <xs:element name="phone" type="xs:string"/>
            </xs:choice>
            <xs:group ref="tns:Audit"/>
            <xs:any minOccurs="0"/>
        </xs:sequence>
        <xs:attribute name="version" type="xs:string" fixed="1.0" use="required"/>
    </xs:complexType>
    <xs:group name="Audit">
        <xs:sequence>
            <xs:element name="createdBy" type="xs:string"/>
        </xs:sequence>
    </xs:group>
    <xs:element name="order" type="tns:Order"/>
</xs:schema>"#;

    #[test]
    fn test_parse_schema_root() {
        let schema = parse_schema(ORDER_SCHEMA).expect("Failed to parse schema");
        assert_eq!(schema.target_namespace.as_deref(), Some("urn:test:orders"));
        assert_eq!(schema.simple_types.len(), 1);
        assert_eq!(schema.complex_types.len(), 1);
        assert_eq!(schema.groups.len(), 1);
        assert_eq!(schema.elements.len(), 1);
    }

    #[test]
    fn test_parse_enumeration() {
        let schema = parse_schema(ORDER_SCHEMA).expect("Failed to parse schema");
        let color = schema.simple_type("Color").expect("Color type");
        assert_eq!(color.base, "xs:string");
        assert_eq!(color.enumerations, vec!["RED", "GREEN", "BLUE"]);
    }

    #[test]
    fn test_parse_complex_type_particles() {
        let schema = parse_schema(ORDER_SCHEMA).expect("Failed to parse schema");
        let order = schema.complex_type("Order").expect("Order type");

        assert_eq!(order.particles.len(), 1);
        let Term::ModelGroup(Compositor::Sequence, particles) = &order.particles[0].term else {
            panic!("expected a sequence");
        };
        assert_eq!(particles.len(), 6);

        let currency = particles[0].term.as_element_decl().expect("element");
        assert_eq!(currency.name, "currency");
        assert_eq!(currency.fixed_value.as_deref(), Some("EUR & co"));

        assert!(particles[1].is_optional());
        assert!(particles[2].is_repeated());
        assert!(matches!(
            particles[3].term,
            Term::ModelGroup(Compositor::Choice, _)
        ));
        assert_eq!(particles[4].term, Term::GroupRef("Audit".to_string()));
        assert_eq!(particles[5].term, Term::Wildcard);
    }

    #[test]
    fn test_parse_attributes() {
        let schema = parse_schema(ORDER_SCHEMA).expect("Failed to parse schema");
        let order = schema.complex_type("Order").expect("Order type");

        assert_eq!(order.attributes.len(), 1);
        let version = &order.attributes[0];
        assert_eq!(version.name, "version");
        assert_eq!(version.fixed_value.as_deref(), Some("1.0"));
        assert_eq!(version.usage, AttributeUse::Required);
    }

    #[test]
    fn test_parse_simple_content() {
        let xml = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
    <xs:complexType name="Price">
        <xs:simpleContent>
            <xs:extension base="xs:decimal">
                <xs:attribute name="currency" type="xs:string"/>
            </xs:extension>
        </xs:simpleContent>
    </xs:complexType>
</xs:schema>"#;

        let schema = parse_schema(xml).expect("Failed to parse schema");
        let price = schema.complex_type("Price").expect("Price type");
        assert_eq!(price.simple_content.as_deref(), Some("xs:decimal"));
        assert_eq!(price.attributes.len(), 1);
        assert!(price.particles.is_empty());
    }

    #[test]
    fn test_parse_anonymous_top_level_type() {
        let xml = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
    <xs:element name="shipment">
        <xs:complexType>
            <xs:sequence>
                <xs:element name="carrier" type="xs:string" fixed="ACME"/>
            </xs:sequence>
        </xs:complexType>
    </xs:element>
</xs:schema>"#;

        let schema = parse_schema(xml).expect("Failed to parse schema");
        let shipment = &schema.elements[0];
        assert_eq!(shipment.decl.name, "shipment");
        let anonymous = shipment.anonymous_type.as_ref().expect("anonymous type");
        assert_eq!(anonymous.particles.len(), 1);
    }

    #[test]
    fn test_missing_schema_element() {
        let result = parse_schema("<root/>");
        assert!(matches!(result, Err(ParseError::InvalidStructure { .. })));
    }

    #[test]
    fn test_duplicate_type() {
        let xml = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
    <xs:complexType name="A"/>
    <xs:simpleType name="A"><xs:restriction base="xs:int"/></xs:simpleType>
</xs:schema>"#;

        let result = parse_schema(xml);
        assert!(matches!(result, Err(ParseError::DuplicateDefinition { .. })));
    }

    #[test]
    fn test_invalid_max_occurs() {
        let xml = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
    <xs:complexType name="A">
        <xs:sequence>
            <xs:element name="b" type="xs:string" maxOccurs="lots"/>
        </xs:sequence>
    </xs:complexType>
</xs:schema>"#;

        let result = parse_schema(xml);
        assert!(matches!(result, Err(ParseError::InvalidAttribute { .. })));
    }

    #[test]
    fn test_element_ref() {
        let xml = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
    <xs:element name="code" type="xs:string" fixed="X1"/>
    <xs:complexType name="A">
        <xs:sequence>
            <xs:element ref="code"/>
        </xs:sequence>
    </xs:complexType>
</xs:schema>"#;

        let schema = parse_schema(xml).expect("Failed to parse schema");
        let a = schema.complex_type("A").expect("A type");
        let Term::ModelGroup(_, particles) = &a.particles[0].term else {
            panic!("expected a sequence");
        };
        let decl = particles[0].term.as_element_decl().expect("element");
        assert!(decl.is_ref);
        assert_eq!(decl.name, "code");
    }
}
