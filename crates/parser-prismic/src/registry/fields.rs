use super::resolvers::Resolver;

/// A field of a GraphQL object type.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct MetaField {
    pub name: String,
    pub ty: MetaFieldType,
    pub extensions: FieldExtensions,
    pub resolver: Resolver,
}

impl MetaField {
    pub fn new(name: impl Into<String>, ty: impl Into<MetaFieldType>) -> MetaField {
        MetaField {
            name: name.into(),
            ty: ty.into(),
            ..Default::default()
        }
    }

    pub fn with_resolver(self, resolver: Resolver) -> Self {
        Self { resolver, ..self }
    }

    /// Marks the field as accepting the host's date-formatting arguments.
    pub fn with_date_formatting(mut self) -> Self {
        self.extensions.date_format = true;
        self
    }
}

/// Field extensions understood by the host schema-builder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct FieldExtensions {
    pub date_format: bool,
}

/// The type of a field, as a GraphQL type string: `"Float"`,
/// `"[PageBodyHero]"`, `"[LinkType!]!"`.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct MetaFieldType(String);

impl MetaFieldType {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn list(self) -> MetaFieldType {
        MetaFieldType(format!("[{}]", self.0))
    }

    pub fn required(self) -> MetaFieldType {
        MetaFieldType(format!("{}!", self.0))
    }

    /// The name of the underlying named type, with all list and
    /// non-null wrappers stripped.
    pub fn named_type(&self) -> &str {
        self.0
            .trim_end_matches('!')
            .trim_start_matches('[')
            .trim_end_matches(']')
            .trim_end_matches('!')
    }
}

impl From<&str> for MetaFieldType {
    fn from(value: &str) -> Self {
        MetaFieldType(value.to_string())
    }
}

impl From<&String> for MetaFieldType {
    fn from(value: &String) -> Self {
        MetaFieldType(value.clone())
    }
}

impl From<String> for MetaFieldType {
    fn from(value: String) -> Self {
        MetaFieldType(value)
    }
}

impl std::fmt::Display for MetaFieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
