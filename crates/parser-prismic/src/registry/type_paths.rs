use itertools::Itertools;

/// The type-path value marking the synthesized list of cross-language
/// links, which has no CMS-side field kind backing it.
pub const TYPE_PATH_ALTERNATE_LANGUAGES: &str = "AlternateLanguages";

/// Maps a field's structural ancestry in the document tree to the GraphQL
/// type assigned to it.
///
/// Document normalization consumes these to coerce raw API payloads without
/// re-deriving anything from the CMS schema: the `ty` value is either a
/// GraphQL type string or an internal marker such as
/// [`TYPE_PATH_ALTERNATE_LANGUAGES`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TypePath {
    pub path: Vec<String>,
    #[serde(rename = "type")]
    pub ty: String,
}

impl TypePath {
    pub fn new(path: Vec<String>, ty: impl Into<String>) -> Self {
        TypePath {
            path,
            ty: ty.into(),
        }
    }

    pub fn dotted(&self) -> String {
        self.path.iter().join(".")
    }
}
