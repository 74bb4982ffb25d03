use prismic_schema::{FieldSchema, GroupConfig, SliceSchema, SlicesConfig};

use crate::{
    context::{InputContext, OutputContext},
    registry::{
        resolvers::{Resolver, Transformer},
        MetaField, MetaFieldType, ObjectType, UnionType, TYPE_PATH_ALTERNATE_LANGUAGES,
    },
};

/// Maps one field schema to the GraphQL field representing it.
///
/// Appends exactly one type path for the field itself at `path + [api_id]`,
/// plus further entries for addressable sub-paths (image thumbnails, slice
/// sections), and appends a type definition for every type it synthesizes
/// along the way.
pub(crate) fn map_field(
    api_id: &str,
    field: &FieldSchema,
    path: &[String],
    input_ctx: InputContext<'_>,
    output_ctx: &mut OutputContext,
) -> MetaField {
    let names = input_ctx.names;
    let field_path = append_segment(path, api_id);

    match field {
        FieldSchema::Uid | FieldSchema::Color | FieldSchema::Select | FieldSchema::Text => {
            output_ctx.push_type_path(field_path, "String");
            MetaField::new(api_id, "String")
        }
        FieldSchema::Boolean => {
            output_ctx.push_type_path(field_path, "Boolean");
            MetaField::new(api_id, "Boolean")
        }
        FieldSchema::StructuredText => {
            let ty = names.structured_text_type();
            output_ctx.push_type_path(field_path, &ty);
            MetaField::new(api_id, ty)
        }
        FieldSchema::Number => {
            output_ctx.push_type_path(field_path, "Float");
            MetaField::new(api_id, "Float")
        }
        FieldSchema::Date | FieldSchema::Timestamp => {
            output_ctx.push_type_path(field_path, "Date");
            MetaField::new(api_id, "Date").with_date_formatting()
        }
        FieldSchema::GeoPoint => {
            let ty = names.geo_point_type();
            output_ctx.push_type_path(field_path, &ty);
            MetaField::new(api_id, ty)
        }
        FieldSchema::Embed => {
            let ty = names.embed_type();
            output_ctx.push_type_path(field_path, &ty);
            MetaField::new(api_id, ty)
        }
        FieldSchema::Image(config) => {
            let ty = names.image_type();
            output_ctx.push_type_path(field_path.clone(), &ty);

            let thumbnail_type = names.image_thumbnail_type();
            for thumbnail in &config.thumbnails {
                output_ctx.record_thumbnail_name(&thumbnail.name);

                let mut thumbnail_path = field_path.clone();
                thumbnail_path.push("thumbnails".to_string());
                thumbnail_path.push(thumbnail.name.clone());
                output_ctx.push_type_path(thumbnail_path, &thumbnail_type);
            }

            MetaField::new(api_id, ty)
        }
        FieldSchema::Link => {
            let ty = names.link_type();
            output_ctx.push_type_path(field_path, &ty);
            MetaField::new(api_id, ty)
        }
        FieldSchema::Group(config) => map_group(api_id, config, field_path, input_ctx, output_ctx),
        FieldSchema::Slices(config) => {
            map_slice_zone(api_id, config, field_path, input_ctx, output_ctx)
        }
        FieldSchema::Slice(slice) => map_slice(api_id, slice, field_path, input_ctx, output_ctx),
        FieldSchema::AlternateLanguages => {
            output_ctx.push_type_path(field_path, TYPE_PATH_ALTERNATE_LANGUAGES);

            let ty = MetaFieldType::from(names.link_type())
                .required()
                .list()
                .required();
            MetaField::new(api_id, ty)
        }
        FieldSchema::Unknown { kind } => {
            output_ctx.warn_unsupported_field_kind(&field_path, kind);
            output_ctx.push_type_path(field_path, "JSON");
            MetaField::new(api_id, "JSON")
        }
    }
}

/// A group is a repeatable set of sub-fields: a list of a synthesized
/// object type named after the ancestry of the group field.
fn map_group(
    api_id: &str,
    config: &GroupConfig,
    group_path: Vec<String>,
    input_ctx: InputContext<'_>,
    output_ctx: &mut OutputContext,
) -> MetaField {
    let type_name = input_ctx
        .names
        .group_type(input_ctx.custom_type_id, api_id);

    let mut fields = Vec::with_capacity(config.fields.len());
    for (sub_api_id, sub_schema) in &config.fields {
        fields.push(map_field(
            sub_api_id, sub_schema, &group_path, input_ctx, output_ctx,
        ));
    }

    output_ctx.create_object_type(ObjectType::new(&type_name, fields).suppress_inference());

    let ty = MetaFieldType::from(type_name).list();
    output_ctx.push_type_path(group_path, ty.as_str());

    MetaField::new(api_id, ty)
}

/// A slice zone is a list of a union over its configured slice choices.
/// The raw document stores the zone as a list of node identifiers, so the
/// field carries a resolver that looks the nodes up at query time.
fn map_slice_zone(
    api_id: &str,
    config: &SlicesConfig,
    zone_path: Vec<String>,
    input_ctx: InputContext<'_>,
    output_ctx: &mut OutputContext,
) -> MetaField {
    let zone_ctx = input_ctx.with_slice_zone(api_id);
    let union_name = input_ctx
        .names
        .slices_type(input_ctx.custom_type_id, api_id);

    let mut possible_types = Vec::with_capacity(config.choices.len());
    for (choice_id, choice_schema) in &config.choices {
        let member = map_field(choice_id, choice_schema, &zone_path, zone_ctx, output_ctx);
        possible_types.push(member.ty.named_type().to_string());
    }

    output_ctx.create_union_type(UnionType::new(&union_name, possible_types));

    let ty = MetaFieldType::from(union_name).list();
    output_ctx.push_type_path(zone_path, ty.as_str());

    MetaField::new(api_id, ty).with_resolver(Resolver::Transformer(Transformer::NodesByIds {
        key: api_id.to_string(),
    }))
}

/// One slice choice. Non-repeating fields become a `primary` object type
/// and repeating fields an `items` list type; either section is omitted
/// entirely when its field set is empty, since an empty object type is not
/// representable in GraphQL.
fn map_slice(
    choice_id: &str,
    slice: &SliceSchema,
    choice_path: Vec<String>,
    input_ctx: InputContext<'_>,
    output_ctx: &mut OutputContext,
) -> MetaField {
    let names = input_ctx.names;
    let type_id = input_ctx.custom_type_id;
    // Slices only occur inside a slice zone; the zone id is part of the
    // type name so identical choice ids in different zones cannot collide.
    let zone_id = input_ctx.slice_zone_id.unwrap_or_default();

    let type_name = names.slice_type(type_id, zone_id, choice_id);

    let mut fields = vec![
        MetaField::new("slice_type", MetaFieldType::from("String").required()),
        MetaField::new("slice_label", "String"),
    ];

    if !slice.non_repeat.is_empty() {
        let primary_name = names.slice_primary_type(type_id, zone_id, choice_id);
        let primary_path = append_segment(&choice_path, "primary");

        let mut primary_fields = Vec::with_capacity(slice.non_repeat.len());
        for (api_id, schema) in &slice.non_repeat {
            primary_fields.push(map_field(api_id, schema, &primary_path, input_ctx, output_ctx));
        }

        output_ctx.create_object_type(ObjectType::new(&primary_name, primary_fields));
        output_ctx.push_type_path(primary_path, &primary_name);

        fields.push(MetaField::new("primary", &primary_name));
    }

    if !slice.repeat.is_empty() {
        let item_name = names.slice_item_type(type_id, zone_id, choice_id);
        let items_path = append_segment(&choice_path, "items");

        let mut item_fields = Vec::with_capacity(slice.repeat.len());
        for (api_id, schema) in &slice.repeat {
            item_fields.push(map_field(api_id, schema, &items_path, input_ctx, output_ctx));
        }

        output_ctx.create_object_type(ObjectType::new(&item_name, item_fields));

        let items_ty = MetaFieldType::from(item_name).list();
        output_ctx.push_type_path(items_path, items_ty.as_str());

        fields.push(MetaField::new("items", items_ty));
    }

    output_ctx.create_object_type(
        ObjectType::new(&type_name, fields)
            .with_interfaces([names.slice_interface(), "Node".to_string()]),
    );
    output_ctx.push_type_path(choice_path, &type_name);

    MetaField::new(choice_id, type_name)
}

fn append_segment(path: &[String], segment: &str) -> Vec<String> {
    let mut extended = Vec::with_capacity(path.len() + 1);
    extended.extend_from_slice(path);
    extended.push(segment.to_string());
    extended
}
