//! Translates Prismic custom type schemas into GraphQL type definitions.
//!
//! The output of [`parse_schemas`] is a flat list of declarative type
//! descriptors for the host schema-builder plus a list of type paths —
//! records mapping each field's position in the document tree to the
//! GraphQL type assigned to it, consumed later when raw API payloads are
//! normalized into node data.
//!
//! The whole transformation is a single synchronous pass over in-memory
//! schemas: no I/O, no shared state between runs, and no fatal failure
//! modes beyond malformed JSON in [`parse_schemas_json`].

mod context;
mod diagnostics;
mod document;
mod fields;
mod names;
pub mod registry;


pub use diagnostics::Diagnostics;

use indexmap::IndexMap;
use prismic_schema::CustomTypeSchema;

use crate::{
    context::OutputContext,
    names::TypeNames,
    registry::{MetaField, MetaType, ObjectType, ScalarType, TypePath, UnionType},
};

/// Options applying to one whole run.
#[derive(Clone, Debug, Default)]
pub struct ParserOptions {
    /// Global prefix applied to every emitted type name, so several schema
    /// sets can coexist in one host schema.
    pub type_prefix: Option<String>,
}

/// Everything one run produces.
#[derive(Debug)]
pub struct ParseResult {
    pub type_defs: Vec<MetaType>,
    pub type_paths: Vec<TypePath>,
    pub diagnostics: Diagnostics,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Could not parse the custom type schemas: {0}")]
    SchemaParse(#[from] serde_json::Error),
}

/// Maps every custom type in the schema set, then appends the two
/// aggregate types: the union of all document types and the merged
/// image-thumbnails type.
pub fn parse_schemas(
    schemas: &IndexMap<String, CustomTypeSchema>,
    options: &ParserOptions,
) -> ParseResult {
    let names = TypeNames::new(options.type_prefix.clone());
    let mut output_ctx = OutputContext::default();

    for (type_id, schema) in schemas {
        document::map_custom_type(type_id, schema, &names, &mut output_ctx);
    }

    let document_types = schemas.keys().map(|type_id| names.document(type_id));
    output_ctx.create_union_type(UnionType::new(names.all_document_types(), document_types));

    create_thumbnails_type(&names, &mut output_ctx);

    ParseResult {
        type_defs: output_ctx.type_defs,
        type_paths: output_ctx.type_paths,
        diagnostics: output_ctx.diagnostics,
    }
}

/// Parses a JSON document of `{ custom_type_id: { tab: { field: schema } } }`
/// and runs [`parse_schemas`] over it.
pub fn parse_schemas_json(json: &str, options: &ParserOptions) -> Result<ParseResult, Error> {
    let schemas: IndexMap<String, CustomTypeSchema> = serde_json::from_str(json)?;
    Ok(parse_schemas(&schemas, options))
}

/// The merged thumbnails type: one field per distinct thumbnail name
/// configured anywhere in the schema set. When there are none, a
/// placeholder scalar serializing to an absent value stands in, since an
/// object type without fields is not representable in GraphQL.
fn create_thumbnails_type(names: &TypeNames, output_ctx: &mut OutputContext) {
    let type_name = names.image_thumbnails_type();

    if output_ctx.thumbnail_names.is_empty() {
        output_ctx.create_scalar_type(ScalarType::always_null(type_name));
        return;
    }

    let thumbnail_type = names.image_thumbnail_type();
    let fields: Vec<_> = output_ctx
        .thumbnail_names
        .iter()
        .map(|name| MetaField::new(name, &thumbnail_type))
        .collect();

    output_ctx.create_object_type(ObjectType::new(type_name, fields).suppress_inference());
}
