//! Content-type payload construction for the SEO plugin.
//!
//! Pure function over a normalized [`SchemaRegistry`] snapshot: no I/O, no
//! side effects, deterministic.

use crate::domain::{ContentTypeDescriptor, ContentTypesPayload, SchemaKind, SchemaRegistry};

/// Built-in plugins whose content types are never reported.
const EXCLUDED_PLUGINS: &[&str] = &["upload", "i18n", "users-permissions"];

/// Bucket every registry entry into collection types, single types, and
/// exposed plugin types.
///
/// API types (name contains `api::`) are always included, split by kind.
/// Other types are included only when visible in the content manager and
/// not owned by an excluded built-in plugin.
pub fn build_content_types_payload(registry: &SchemaRegistry) -> ContentTypesPayload {
    let mut payload = ContentTypesPayload::default();

    for (name, schema) in registry.iter() {
        let is_api_type = name.contains("api::");
        let is_exposed_plugin_type = !is_api_type && schema.visible_in_content_manager;
        if !is_api_type && !is_exposed_plugin_type {
            continue;
        }

        let descriptor = ContentTypeDescriptor {
            seo: schema.has_seo_component,
            uid: schema.uid.clone(),
            kind: schema.kind,
            global_id: schema.global_id.clone(),
            attributes: schema.attributes.clone(),
        };

        if is_api_type {
            match schema.kind {
                SchemaKind::CollectionType => payload.collection_types.push(descriptor),
                SchemaKind::SingleType => payload.single_types.push(descriptor),
            }
        } else {
            let plugin_name = name
                .strip_prefix("plugin::")
                .unwrap_or(name)
                .split('.')
                .next()
                .unwrap_or("");
            if !EXCLUDED_PLUGINS.contains(&plugin_name) {
                payload.plugins.push(descriptor);
            }
        }
    }

    payload
}
