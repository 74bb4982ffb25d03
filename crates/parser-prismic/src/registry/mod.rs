//! Declarative GraphQL type descriptors.
//!
//! The host schema-builder consumes these by value; type references between
//! them are plain names, resolved by the host, so emission order carries no
//! meaning.

mod fields;
pub mod resolvers;
mod type_paths;

pub use fields::{FieldExtensions, MetaField, MetaFieldType};
pub use type_paths::{TypePath, TYPE_PATH_ALTERNATE_LANGUAGES};

use indexmap::IndexMap;

/// A single type definition handed to the host schema-builder.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum MetaType {
    Object(ObjectType),
    Union(UnionType),
    Scalar(ScalarType),
}

impl MetaType {
    pub fn name(&self) -> &str {
        match self {
            MetaType::Object(object) => &object.name,
            MetaType::Union(union) => &union.name,
            MetaType::Scalar(scalar) => &scalar.name,
        }
    }

    pub fn object(&self) -> Option<&ObjectType> {
        match self {
            MetaType::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn union(&self) -> Option<&UnionType> {
        match self {
            MetaType::Union(union) => Some(union),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ObjectType {
    pub name: String,
    pub fields: IndexMap<String, MetaField>,
    pub interfaces: Vec<String>,
    /// Whether the host may infer additional fields from data it sees at
    /// runtime. Synthesized types describe their fields exhaustively and
    /// turn this off.
    pub infer: bool,
}

impl ObjectType {
    pub fn new(name: impl Into<String>, fields: impl IntoIterator<Item = MetaField>) -> Self {
        ObjectType {
            name: name.into(),
            fields: fields
                .into_iter()
                .map(|field| (field.name.clone(), field))
                .collect(),
            interfaces: Vec::new(),
            infer: true,
        }
    }

    pub fn with_interfaces(self, interfaces: impl IntoIterator<Item = String>) -> Self {
        Self {
            interfaces: interfaces.into_iter().collect(),
            ..self
        }
    }

    pub fn suppress_inference(self) -> Self {
        Self {
            infer: false,
            ..self
        }
    }
}

/// A union over object types, referenced by name.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct UnionType {
    pub name: String,
    pub possible_types: Vec<String>,
}

impl UnionType {
    pub fn new(name: impl Into<String>, possible_types: impl IntoIterator<Item = String>) -> Self {
        UnionType {
            name: name.into(),
            possible_types: possible_types.into_iter().collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ScalarType {
    pub name: String,
    pub serializer: ScalarSerializer,
}

impl ScalarType {
    /// A scalar that always serializes to an absent value. Used where
    /// GraphQL requires a type but there is nothing to put in it — an
    /// object type must have at least one field.
    pub fn always_null(name: impl Into<String>) -> Self {
        ScalarType {
            name: name.into(),
            serializer: ScalarSerializer::Null,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub enum ScalarSerializer {
    #[default]
    PassThrough,
    Null,
}
