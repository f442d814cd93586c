use crate::cli::{similar_help_suggestions, PrintableMessage};
use graphql_parser::schema::{Definition, Type as ParsedType, TypeDefinition as ParsedTypeDefinition};
use schema::{Schema, TypeKind};

pub mod schema;

/// Names the introspection JSON always reports as SCALAR kinds
const BUILT_IN_SCALAR_NAMES: [&str; 5] = ["Boolean", "Float", "ID", "Int", "String"];

/// Recursive description of a GraphQL type reference like `[Episode!]!`
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDescriptor {
    Named { name: String, is_scalar: bool },
    List(Box<TypeDescriptor>),
    NonNull(Box<TypeDescriptor>),
}

impl TypeDescriptor {
    /// Parses an SDL type reference and resolves named types against the schema
    pub fn from_reference(reference: &str, schema: &Schema) -> Result<Self, PrintableMessage> {
        // graphql-parser has no entry point for a bare type reference, so
        // parse it in the position of a field type and pull it back out.
        let wrapper = format!("type Wrapper {{ field: {reference} }}");
        let document = graphql_parser::parse_schema::<String>(&wrapper).map_err(|parse_error| {
            PrintableMessage::new_compile_error(&format!(
                "could not parse type reference `{reference}`: {parse_error}"
            ))
        })?;
        for definition in document.definitions {
            if let Definition::TypeDefinition(ParsedTypeDefinition::Object(object)) = definition {
                if let Some(field) = object.fields.into_iter().next() {
                    return Self::from_parsed_type(&field.field_type, schema);
                }
            }
        }
        Err(PrintableMessage::new_compile_error(&format!(
            "could not parse type reference `{reference}`"
        )))
    }

    fn from_parsed_type(
        parsed: &ParsedType<'_, String>,
        schema: &Schema,
    ) -> Result<Self, PrintableMessage> {
        match parsed {
            ParsedType::NamedType(name) => Self::from_name(name, schema),
            ParsedType::ListType(element) => Ok(TypeDescriptor::List(Box::new(
                Self::from_parsed_type(element, schema)?,
            ))),
            ParsedType::NonNullType(inner) => Ok(TypeDescriptor::NonNull(Box::new(
                Self::from_parsed_type(inner, schema)?,
            ))),
        }
    }

    fn from_name(name: &str, schema: &Schema) -> Result<Self, PrintableMessage> {
        if BUILT_IN_SCALAR_NAMES.contains(&name) {
            return Ok(TypeDescriptor::Named {
                name: name.to_string(),
                is_scalar: true,
            });
        }
        match schema.get_type_for_name(name) {
            Some(schema_type) => Ok(TypeDescriptor::Named {
                name: name.to_string(),
                is_scalar: matches!(schema_type.kind, TypeKind::Scalar),
            }),
            None => {
                let mut message =
                    PrintableMessage::new_compile_error(&format!("unknown type `{name}`"));
                if let Some(suggestions) = similar_help_suggestions(name, schema.type_names()) {
                    message.with_help_text(&suggestions);
                }
                Err(message)
            }
        }
    }
}
