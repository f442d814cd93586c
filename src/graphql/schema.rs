//! Produce consumable schema from introspection JSON
use std::collections::HashMap;
use std::io::Read;

mod json;

#[derive(Debug)]
pub enum Error {
    UnknownTypeKind { name: String, kind: String },
    JSONParseError(serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
}

impl TypeKind {
    fn from_introspection_kind(kind: &str) -> Option<Self> {
        match kind {
            "SCALAR" => Some(TypeKind::Scalar),
            "OBJECT" => Some(TypeKind::Object),
            "INTERFACE" => Some(TypeKind::Interface),
            "UNION" => Some(TypeKind::Union),
            "ENUM" => Some(TypeKind::Enum),
            "INPUT_OBJECT" => Some(TypeKind::InputObject),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct Type {
    pub kind: TypeKind,
}

#[derive(Debug)]
pub struct Schema {
    types: HashMap<String, Type>,
}

impl Schema {
    pub fn try_from_reader(reader: impl Read) -> Result<Self, Error> {
        let schema_json = json::Schema::try_from_reader(reader).map_err(Error::JSONParseError)?;
        let mut types = HashMap::with_capacity(schema_json.types.len());
        for type_json in schema_json.types {
            let kind = TypeKind::from_introspection_kind(&type_json.kind).ok_or_else(|| {
                Error::UnknownTypeKind {
                    name: type_json.name.clone(),
                    kind: type_json.kind.clone(),
                }
            })?;
            types.insert(type_json.name, Type { kind });
        }
        Ok(Schema { types })
    }

    pub fn get_type_for_name(&self, name: &str) -> Option<&Type> {
        self.types.get(name)
    }

    /// Type names usable in "did you mean" suggestions
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types
            .keys()
            .map(String::as_str)
            .filter(|name| !name.starts_with("__"))
    }
}
