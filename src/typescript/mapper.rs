use super::{CompileConfig, Primitive, TypeExpression};
use crate::graphql::TypeDescriptor;

fn built_in_scalar(name: &str) -> Option<Primitive> {
    match name {
        "String" | "ID" => Some(Primitive::String),
        "Int" | "Float" => Some(Primitive::Number),
        "Boolean" => Some(Primitive::Boolean),
        _ => None,
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, Copy)]
enum ArrayStyle {
    Mutable,
    ReadOnly,
}

/// Translates GraphQL type descriptors into TypeScript type expressions.
///
/// Construction resolves the array wrapping style once, so per call the
/// mapper only walks the descriptor. Every call is side effect free.
#[derive(Debug)]
pub struct TypeMapper {
    array_style: ArrayStyle,
    passthrough_custom_scalars: bool,
    custom_scalars_prefix: Option<String>,
    ts_interface_prefix: Option<String>,
}

impl TypeMapper {
    pub fn new(config: &CompileConfig) -> Self {
        let array_style = if config.use_read_only_types {
            ArrayStyle::ReadOnly
        } else {
            ArrayStyle::Mutable
        };
        TypeMapper {
            array_style,
            passthrough_custom_scalars: config.passthrough_custom_scalars,
            custom_scalars_prefix: config.custom_scalars_prefix.clone(),
            ts_interface_prefix: config.ts_interface_prefix.clone(),
        }
    }

    /// Nullable aware entry point: anything not marked non-null compiles to
    /// a union with `null`.
    pub fn translate(
        &self,
        descriptor: &TypeDescriptor,
        override_name: Option<&str>,
    ) -> TypeExpression {
        match descriptor {
            TypeDescriptor::NonNull(inner) => self.translate_non_nullable(inner, override_name),
            nullable => {
                let base = self.translate_non_nullable(nullable, override_name);
                TypeExpression::Union(vec![base, TypeExpression::Null])
            }
        }
    }

    fn translate_non_nullable(
        &self,
        descriptor: &TypeDescriptor,
        override_name: Option<&str>,
    ) -> TypeExpression {
        match descriptor {
            TypeDescriptor::List(element) => {
                // List elements keep their own nullability.
                let element_type = match self.translate(element, override_name) {
                    union @ TypeExpression::Union(_) => {
                        TypeExpression::Parenthesized(Box::new(union))
                    }
                    other => other,
                };
                self.wrap_array(element_type)
            }
            // A non-null wrapping a non-null cannot occur in a valid schema,
            // but it must not crash either.
            TypeDescriptor::NonNull(inner) => self.translate_non_nullable(inner, override_name),
            TypeDescriptor::Named {
                name,
                is_scalar: true,
            } => match built_in_scalar(override_name.unwrap_or(name)) {
                Some(primitive) => TypeExpression::Keyword(primitive),
                None if self.passthrough_custom_scalars => {
                    let prefix = self.custom_scalars_prefix.as_deref().unwrap_or("");
                    TypeExpression::Reference(format!("{prefix}{name}"))
                }
                None => TypeExpression::Any,
            },
            TypeDescriptor::Named { name, .. } => {
                let reference = match (override_name, &self.ts_interface_prefix) {
                    (Some(explicit), _) => explicit.to_string(),
                    (None, Some(prefix)) => format!("{prefix}J{}", capitalize(name)),
                    (None, None) => name.clone(),
                };
                TypeExpression::Reference(reference)
            }
        }
    }

    fn wrap_array(&self, element: TypeExpression) -> TypeExpression {
        TypeExpression::Array {
            element: Box::new(element),
            read_only: matches!(self.array_style, ArrayStyle::ReadOnly),
        }
    }
}
