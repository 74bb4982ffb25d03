use prismic_schema::{CustomTypeSchema, FieldSchema};

use crate::{
    context::{InputContext, OutputContext},
    fields::map_field,
    names::TypeNames,
    registry::{
        resolvers::{Resolver, Transformer},
        MetaField, MetaFieldType, ObjectType,
    },
};

/// Maps one custom type to its document object type, synthesizing the
/// nested data type and the document-level fields along the way.
pub(crate) fn map_custom_type(
    type_id: &str,
    schema: &CustomTypeSchema,
    names: &TypeNames,
    output_ctx: &mut OutputContext,
) {
    let input_ctx = InputContext::new(type_id, names);
    let document_path = vec![type_id.to_string()];

    let mut fields = schema.fields();
    // The uid field lives at the document level, not inside data.
    let uid_schema = fields.shift_remove("uid");

    let data_name = names.data_type(type_id);
    let data_path = vec![type_id.to_string(), "data".to_string()];

    let mut data_fields = Vec::with_capacity(fields.len());
    for (api_id, field_schema) in &fields {
        data_fields.push(map_field(
            api_id,
            field_schema,
            &data_path,
            input_ctx,
            output_ctx,
        ));
    }

    output_ctx.create_object_type(ObjectType::new(&data_name, data_fields).suppress_inference());
    output_ctx.push_type_path(data_path, &data_name);

    let document_name = names.document(type_id);

    let mut document_fields = vec![
        MetaField::new("id", MetaFieldType::from("ID").required()),
        MetaField::new("prismicId", MetaFieldType::from("ID").required()),
        MetaField::new("data", &data_name),
        MetaField::new("dataRaw", MetaFieldType::from("JSON").required()).with_resolver(
            Resolver::Transformer(Transformer::Select {
                key: "data".to_string(),
            }),
        ),
        MetaField::new("dataString", MetaFieldType::from("String").required()).with_resolver(
            Resolver::Transformer(Transformer::JsonStringify {
                key: "data".to_string(),
            }),
        ),
        MetaField::new("first_publication_date", MetaFieldType::from("Date").required())
            .with_date_formatting(),
        MetaField::new("last_publication_date", MetaFieldType::from("Date").required())
            .with_date_formatting(),
        MetaField::new("href", "String"),
        MetaField::new("url", "String"),
        MetaField::new("lang", MetaFieldType::from("String").required()),
        MetaField::new(
            "tags",
            MetaFieldType::from("String").required().list().required(),
        ),
        MetaField::new("type", MetaFieldType::from("String").required()),
        map_field(
            "alternate_languages",
            &FieldSchema::AlternateLanguages,
            &document_path,
            input_ctx,
            output_ctx,
        ),
    ];

    if let Some(uid_schema) = uid_schema {
        document_fields.push(map_field(
            "uid",
            &uid_schema,
            &document_path,
            input_ctx,
            output_ctx,
        ));
    }

    output_ctx.create_object_type(
        ObjectType::new(&document_name, document_fields)
            .with_interfaces([names.document_interface(), "Node".to_string()]),
    );
    output_ctx.push_type_path(document_path, &document_name);
}
