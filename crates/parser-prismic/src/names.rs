use inflector::Inflector;

/// Builds the GraphQL type names for one run.
///
/// CONVENTIONS:
///     - All type names are PascalCase.
///     - Synthesized nested types encode their full ancestry
///       (custom type id → slice zone id → field id → role), which is what
///       keeps the flat GraphQL namespace collision-free.
///     - The optional global prefix applies uniformly to every name, so
///       several schema sets can coexist in one host schema.
#[derive(Clone, Debug, Default)]
pub(crate) struct TypeNames {
    prefix: Option<String>,
}

impl TypeNames {
    pub(crate) fn new(prefix: Option<String>) -> Self {
        TypeNames { prefix }
    }

    fn build(&self, parts: &[&str]) -> String {
        let base: String = parts.iter().map(|part| part.to_pascal_case()).collect();
        self.prefixed(&base)
    }

    fn prefixed(&self, name: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}{name}", prefix.to_pascal_case()),
            None => name.to_string(),
        }
    }

    pub(crate) fn document(&self, type_id: &str) -> String {
        self.build(&[type_id])
    }

    pub(crate) fn data_type(&self, type_id: &str) -> String {
        self.build(&[type_id, "DataType"])
    }

    pub(crate) fn group_type(&self, type_id: &str, api_id: &str) -> String {
        self.build(&[type_id, api_id, "GroupType"])
    }

    pub(crate) fn slices_type(&self, type_id: &str, api_id: &str) -> String {
        self.build(&[type_id, api_id, "SlicesType"])
    }

    pub(crate) fn slice_type(&self, type_id: &str, zone_id: &str, choice_id: &str) -> String {
        self.build(&[type_id, zone_id, choice_id])
    }

    pub(crate) fn slice_primary_type(&self, type_id: &str, zone_id: &str, choice_id: &str) -> String {
        self.build(&[type_id, zone_id, choice_id, "PrimaryType"])
    }

    pub(crate) fn slice_item_type(&self, type_id: &str, zone_id: &str, choice_id: &str) -> String {
        self.build(&[type_id, zone_id, choice_id, "ItemType"])
    }

    pub(crate) fn structured_text_type(&self) -> String {
        self.prefixed("StructuredTextType")
    }

    pub(crate) fn geo_point_type(&self) -> String {
        self.prefixed("GeoPointType")
    }

    pub(crate) fn embed_type(&self) -> String {
        self.prefixed("EmbedType")
    }

    pub(crate) fn link_type(&self) -> String {
        self.prefixed("LinkType")
    }

    pub(crate) fn image_type(&self) -> String {
        self.prefixed("ImageType")
    }

    pub(crate) fn image_thumbnail_type(&self) -> String {
        self.prefixed("ImageThumbnailType")
    }

    pub(crate) fn image_thumbnails_type(&self) -> String {
        self.prefixed("ImageThumbnailsType")
    }

    pub(crate) fn document_interface(&self) -> String {
        self.prefixed("DocumentInterface")
    }

    pub(crate) fn slice_interface(&self) -> String {
        self.prefixed("SliceInterface")
    }

    pub(crate) fn all_document_types(&self) -> String {
        self.prefixed("AllDocumentTypes")
    }
}
