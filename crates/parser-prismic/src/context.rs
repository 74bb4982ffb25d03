use indexmap::IndexSet;
use itertools::Itertools;

use crate::{
    diagnostics::Diagnostics,
    names::TypeNames,
    registry::{MetaType, ObjectType, ScalarType, TypePath, UnionType},
};

/// Read-only context for mapping one custom type.
///
/// Descending into a slice zone produces a derived copy via
/// [`InputContext::with_slice_zone`]; nothing here is ever mutated.
#[derive(Clone, Copy)]
pub(crate) struct InputContext<'a> {
    pub(crate) custom_type_id: &'a str,
    pub(crate) names: &'a TypeNames,
    pub(crate) slice_zone_id: Option<&'a str>,
}

impl<'a> InputContext<'a> {
    pub(crate) fn new(custom_type_id: &'a str, names: &'a TypeNames) -> Self {
        InputContext {
            custom_type_id,
            names,
            slice_zone_id: None,
        }
    }

    pub(crate) fn with_slice_zone(self, slice_zone_id: &'a str) -> Self {
        InputContext {
            slice_zone_id: Some(slice_zone_id),
            ..self
        }
    }
}

/// The output channels of one whole run.
///
/// Write-only during traversal: type definitions and type paths are
/// appended as the mappers descend and only read back by the caller once
/// the run is complete.
#[derive(Debug, Default)]
pub(crate) struct OutputContext {
    pub(crate) type_defs: Vec<MetaType>,
    pub(crate) type_paths: Vec<TypePath>,
    pub(crate) diagnostics: Diagnostics,
    /// Every thumbnail name configured anywhere in the schema set, in
    /// first-seen order. Feeds the merged thumbnails type at the end of
    /// the run.
    pub(crate) thumbnail_names: IndexSet<String>,
}

impl OutputContext {
    pub(crate) fn create_object_type(&mut self, object: ObjectType) {
        self.type_defs.push(MetaType::Object(object));
    }

    pub(crate) fn create_union_type(&mut self, union: UnionType) {
        self.type_defs.push(MetaType::Union(union));
    }

    pub(crate) fn create_scalar_type(&mut self, scalar: ScalarType) {
        self.type_defs.push(MetaType::Scalar(scalar));
    }

    pub(crate) fn push_type_path(&mut self, path: Vec<String>, ty: impl Into<String>) {
        self.type_paths.push(TypePath::new(path, ty));
    }

    pub(crate) fn record_thumbnail_name(&mut self, name: &str) {
        self.thumbnail_names.insert(name.to_string());
    }

    pub(crate) fn warn_unsupported_field_kind(&mut self, path: &[String], kind: &str) {
        let dotted = path.iter().join(".");
        let message =
            format!("The field {dotted} has the unsupported type {kind}, so it will be exposed as untyped JSON.");

        tracing::warn!(field = %dotted, kind = %kind, "unsupported field type");
        self.diagnostics.push_warning(message);
    }
}
