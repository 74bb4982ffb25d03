use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// One field definition inside a custom type, keyed by the CMS field kind.
///
/// The kind tag fully determines which nested configuration is present.
/// Kinds this crate does not recognize deserialize into
/// [`FieldSchema::Unknown`] with the declared kind preserved, so consumers
/// can degrade gracefully instead of rejecting the whole schema.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldSchema {
    Uid,
    Color,
    Select,
    Text,
    Boolean,
    StructuredText,
    Number,
    Date,
    Timestamp,
    GeoPoint,
    Embed,
    Image(ImageConfig),
    Link,
    Group(GroupConfig),
    Slices(SlicesConfig),
    Slice(SliceSchema),
    /// The list of cross-language siblings of a document. Synthetic: never
    /// present in CMS JSON, only constructed by consumers.
    AlternateLanguages,
    /// A field kind this crate does not recognize.
    Unknown { kind: String },
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ImageConfig {
    #[serde(default)]
    pub thumbnails: Vec<ImageThumbnail>,
}

/// A named crop configured on an image field. Only the name matters for
/// schema purposes; the dimensions are applied CMS-side.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ImageThumbnail {
    pub name: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GroupConfig {
    #[serde(default)]
    pub fields: IndexMap<String, FieldSchema>,
}

/// A slice zone: the set of slice choices documents may draw from.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SlicesConfig {
    #[serde(default)]
    pub choices: IndexMap<String, FieldSchema>,
}

/// One slice choice. `non_repeat` fields appear once per slice instance,
/// `repeat` fields once per repetition.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SliceSchema {
    pub non_repeat: IndexMap<String, FieldSchema>,
    pub repeat: IndexMap<String, FieldSchema>,
}

/// The wire shape of a field definition: `{"type": ..., "config": ...}`,
/// with slice sections as siblings of `type` rather than under `config`.
#[derive(Deserialize)]
struct RawField {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    config: Value,
    #[serde(rename = "non-repeat", default)]
    non_repeat: Value,
    #[serde(default)]
    repeat: Value,
}

impl<'de> Deserialize<'de> for FieldSchema {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        fn from_value<T, E>(value: Value) -> Result<T, E>
        where
            T: serde::de::DeserializeOwned + Default,
            E: serde::de::Error,
        {
            if value.is_null() {
                return Ok(T::default());
            }
            serde_json::from_value(value).map_err(E::custom)
        }

        let raw = RawField::deserialize(deserializer)?;

        Ok(match raw.kind.as_str() {
            "UID" => FieldSchema::Uid,
            "Color" => FieldSchema::Color,
            "Select" => FieldSchema::Select,
            "Text" => FieldSchema::Text,
            "Boolean" => FieldSchema::Boolean,
            "StructuredText" => FieldSchema::StructuredText,
            "Number" => FieldSchema::Number,
            "Date" => FieldSchema::Date,
            "Timestamp" => FieldSchema::Timestamp,
            "GeoPoint" => FieldSchema::GeoPoint,
            "Embed" => FieldSchema::Embed,
            "Image" => FieldSchema::Image(from_value(raw.config)?),
            "Link" => FieldSchema::Link,
            "Group" => FieldSchema::Group(from_value(raw.config)?),
            "Slices" => FieldSchema::Slices(from_value(raw.config)?),
            "Slice" => FieldSchema::Slice(SliceSchema {
                non_repeat: from_value(raw.non_repeat)?,
                repeat: from_value(raw.repeat)?,
            }),
            _ => FieldSchema::Unknown { kind: raw.kind },
        })
    }
}
