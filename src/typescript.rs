use crate::cli::RuntimeConfig;
use std::fmt;

mod mapper;

pub use mapper::TypeMapper;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    String,
    Number,
    Boolean,
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            Primitive::String => "string",
            Primitive::Number => "number",
            Primitive::Boolean => "boolean",
        };
        f.write_str(keyword)
    }
}

/// TypeScript type expression, rendered by the `Display` impl
#[derive(Debug, Clone, PartialEq)]
pub enum TypeExpression {
    Keyword(Primitive),
    Any,
    Null,
    Reference(String),
    Array {
        element: Box<TypeExpression>,
        read_only: bool,
    },
    Parenthesized(Box<TypeExpression>),
    Union(Vec<TypeExpression>),
}

impl fmt::Display for TypeExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpression::Keyword(primitive) => write!(f, "{primitive}"),
            TypeExpression::Any => f.write_str("any"),
            TypeExpression::Null => f.write_str("null"),
            TypeExpression::Reference(name) => f.write_str(name),
            TypeExpression::Array {
                element,
                read_only: true,
            } => write!(f, "ReadonlyArray<{element}>"),
            TypeExpression::Array {
                element,
                read_only: false,
            } => write!(f, "{element}[]"),
            TypeExpression::Parenthesized(inner) => write!(f, "({inner})"),
            TypeExpression::Union(members) => {
                for (index, member) in members.iter().enumerate() {
                    if index > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{member}")?;
                }
                Ok(())
            }
        }
    }
}

/// Immutable options for one compile, detached from CLI concerns
#[derive(Debug, Default)]
pub struct CompileConfig {
    pub use_read_only_types: bool,
    pub passthrough_custom_scalars: bool,
    pub custom_scalars_prefix: Option<String>,
    pub ts_interface_prefix: Option<String>,
}

impl From<&RuntimeConfig> for CompileConfig {
    fn from(from: &RuntimeConfig) -> Self {
        CompileConfig {
            use_read_only_types: from.use_read_only_types(),
            passthrough_custom_scalars: from.passthrough_custom_scalars(),
            custom_scalars_prefix: from.custom_scalars_prefix().map(str::to_string),
            ts_interface_prefix: from.ts_interface_prefix().map(str::to_string),
        }
    }
}
