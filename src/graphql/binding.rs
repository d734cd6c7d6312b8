//! Binding of the resolver types to the bundled schema document.
//!
//! The document in `schema/github.graphql` is the contract the fake promises
//! to honour. After the executable schema is assembled its SDL is parsed and
//! compared type by type against the document, so a resolver that drifts
//! (renamed field, changed nullability, missing argument) fails at build time
//! rather than in the middle of a test.

use std::collections::{BTreeMap, BTreeSet};

use async_graphql::parser::{
    parse_schema,
    types::{FieldDefinition, InputValueDefinition, ServiceDocument, TypeKind, TypeSystemDefinition},
};

use crate::error::{GitHubError, Result};

/// The schema document the fake is bound to.
pub const SCHEMA_DOCUMENT: &str = include_str!("../../schema/github.graphql");

#[derive(Debug, PartialEq, Eq)]
struct TypeShape {
    kind: &'static str,
    implements: BTreeSet<String>,
    /// Field (or enum value / union member) name to rendered signature.
    fields: BTreeMap<String, String>,
}

/// Checks that every type declared in `document` exists in `bound_sdl` with
/// the same kind, interfaces and fields.
///
/// Types that only exist in the bound schema (built-in scalars, directives)
/// are ignored.
pub fn check(bound_sdl: &str, document: &str) -> Result<()> {
    let expected = shapes(&parse(document, "schema document")?);
    let actual = shapes(&parse(bound_sdl, "bound schema")?);

    let mut problems = Vec::new();
    for (name, want) in &expected {
        let Some(have) = actual.get(name) else {
            problems.push(format!("type {} is not implemented", name));
            continue;
        };
        if have.kind != want.kind {
            problems.push(format!(
                "type {} is {} but the document declares {}",
                name, have.kind, want.kind
            ));
            continue;
        }
        if have.implements != want.implements {
            problems.push(format!(
                "type {} implements {:?} but the document declares {:?}",
                name, have.implements, want.implements
            ));
        }
        for (field, signature) in &want.fields {
            match have.fields.get(field) {
                None => problems.push(format!("{}.{} is not implemented", name, field)),
                Some(found) if found != signature => problems.push(format!(
                    "{}.{} is `{}` but the document declares `{}`",
                    name, field, found, signature
                )),
                Some(_) => {}
            }
        }
        for field in have.fields.keys() {
            if !want.fields.contains_key(field) {
                problems.push(format!("{}.{} is not in the document", name, field));
            }
        }
    }

    if problems.is_empty() {
        tracing::debug!(types = expected.len(), "Schema bound to document");
        Ok(())
    } else {
        Err(GitHubError::SchemaBinding(problems.join("; ")))
    }
}

fn parse(source: &str, what: &str) -> Result<ServiceDocument> {
    parse_schema(source)
        .map_err(|e| GitHubError::SchemaBinding(format!("failed to parse {}: {}", what, e)))
}

fn shapes(doc: &ServiceDocument) -> BTreeMap<String, TypeShape> {
    let mut shapes = BTreeMap::new();
    for definition in &doc.definitions {
        let TypeSystemDefinition::Type(ty) = definition else {
            continue;
        };
        let ty = &ty.node;
        let shape = match &ty.kind {
            TypeKind::Scalar => TypeShape {
                kind: "scalar",
                implements: BTreeSet::new(),
                fields: BTreeMap::new(),
            },
            TypeKind::Object(object) => TypeShape {
                kind: "object",
                implements: names(object.implements.iter().map(|n| n.node.as_str())),
                fields: field_signatures(object.fields.iter().map(|f| &f.node)),
            },
            TypeKind::Interface(interface) => TypeShape {
                kind: "interface",
                implements: names(interface.implements.iter().map(|n| n.node.as_str())),
                fields: field_signatures(interface.fields.iter().map(|f| &f.node)),
            },
            TypeKind::Union(union) => TypeShape {
                kind: "union",
                implements: BTreeSet::new(),
                fields: union
                    .members
                    .iter()
                    .map(|m| (m.node.to_string(), String::new()))
                    .collect(),
            },
            TypeKind::Enum(enumeration) => TypeShape {
                kind: "enum",
                implements: BTreeSet::new(),
                fields: enumeration
                    .values
                    .iter()
                    .map(|v| (v.node.value.node.to_string(), String::new()))
                    .collect(),
            },
            TypeKind::InputObject(input) => TypeShape {
                kind: "input",
                implements: BTreeSet::new(),
                fields: input
                    .fields
                    .iter()
                    .map(|f| (f.node.name.node.to_string(), f.node.ty.node.to_string()))
                    .collect(),
            },
        };
        shapes.insert(ty.name.node.to_string(), shape);
    }
    shapes
}

fn names<'a>(iter: impl Iterator<Item = &'a str>) -> BTreeSet<String> {
    iter.map(str::to_string).collect()
}

fn field_signatures<'a>(
    fields: impl Iterator<Item = &'a FieldDefinition>,
) -> BTreeMap<String, String> {
    fields
        .map(|field| {
            let mut args: Vec<&InputValueDefinition> =
                field.arguments.iter().map(|a| &a.node).collect();
            args.sort_by(|a, b| a.name.node.as_str().cmp(b.name.node.as_str()));
            let args: Vec<String> = args
                .iter()
                .map(|a| format!("{}: {}", a.name.node, a.ty.node))
                .collect();
            (
                field.name.node.to_string(),
                format!("({}) -> {}", args.join(", "), field.ty.node),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"
        interface Node { id: ID! }
        type Thing implements Node {
          id: ID!
          label(lang: String, upper: Boolean!): String!
        }
        input ThingInput { id: ID! label: String }
    "#;

    #[test]
    fn test_identical_documents_bind() {
        assert!(check(DOCUMENT, DOCUMENT).is_ok());
    }

    #[test]
    fn test_argument_order_and_extra_types_are_ignored() {
        let bound = r#"
            scalar Extra
            interface Node { id: ID! }
            input ThingInput { label: String id: ID! }
            type Thing implements Node {
              label(upper: Boolean!, lang: String): String!
              id: ID!
            }
        "#;
        assert!(check(bound, DOCUMENT).is_ok());
    }

    #[test]
    fn test_nullability_drift_is_reported() {
        let bound = DOCUMENT.replace("label: String }", "label: String! }");
        let err = check(&bound, DOCUMENT).unwrap_err().to_string();
        assert!(err.contains("ThingInput.label"), "{err}");
    }

    #[test]
    fn test_missing_and_extra_fields_are_reported() {
        let bound = r#"
            interface Node { id: ID! }
            type Thing implements Node { id: ID! size: Int! }
            input ThingInput { id: ID! label: String }
        "#;
        let err = check(bound, DOCUMENT).unwrap_err().to_string();
        assert!(err.contains("Thing.label is not implemented"), "{err}");
        assert!(err.contains("Thing.size is not in the document"), "{err}");
    }

    #[test]
    fn test_missing_interface_is_reported() {
        let bound = DOCUMENT.replace("type Thing implements Node", "type Thing");
        let err = check(&bound, DOCUMENT).unwrap_err().to_string();
        assert!(err.contains("type Thing implements"), "{err}");
    }

    #[test]
    fn test_unparsable_document_is_an_error() {
        assert!(matches!(
            check(DOCUMENT, "type {"),
            Err(GitHubError::SchemaBinding(_))
        ));
    }
}
