//! The data model for Prismic custom type schemas.
//!
//! A custom type is the CMS-side definition of a content model: an ordered
//! set of authoring tabs, each mapping a field API identifier to a field
//! schema. Custom types ship as JSON documents; this crate deserializes them
//! into a closed sum type with a tolerant catch-all for field kinds the
//! consumer does not know about yet.

mod fields;


pub use fields::{
    FieldSchema, GroupConfig, ImageConfig, ImageThumbnail, SliceSchema, SlicesConfig,
};

use indexmap::IndexMap;

/// A single custom type schema, as authored in the CMS.
///
/// Tabs are purely an authoring UI concern and carry no meaning for the
/// output shape, so consumers usually go through [`CustomTypeSchema::fields`].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(transparent)]
pub struct CustomTypeSchema {
    pub tabs: IndexMap<String, IndexMap<String, FieldSchema>>,
}

impl CustomTypeSchema {
    /// Flattens the authoring tabs into a single field mapping.
    ///
    /// On a duplicate field API identifier the later tab wins, at the
    /// position of the first occurrence.
    pub fn fields(&self) -> IndexMap<String, FieldSchema> {
        let mut fields = IndexMap::new();

        for tab in self.tabs.values() {
            for (api_id, schema) in tab {
                fields.insert(api_id.clone(), schema.clone());
            }
        }

        fields
    }
}
