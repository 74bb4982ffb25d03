//! Declarative resolver descriptors.
//!
//! A resolver describes how the host derives a field's value at query time
//! when plain parent lookup is not enough. The host interprets these; this
//! crate only records which transform applies where.

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub enum Resolver {
    /// Read the field off the parent object.
    #[default]
    Parent,
    Transformer(Transformer),
}

impl Resolver {
    pub fn is_parent(&self) -> bool {
        matches!(self, Resolver::Parent)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Transformer {
    /// Copy a key out of the raw document payload.
    Select { key: String },
    /// Serialize a key of the raw document payload to a JSON string.
    JsonStringify { key: String },
    /// Look up the node identifiers stored under a key against the host's
    /// node index. Slice zones store their content as a list of node ids,
    /// so resolution happens at query time rather than schema-build time.
    NodesByIds { key: String },
}
