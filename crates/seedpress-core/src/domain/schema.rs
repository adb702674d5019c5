//! Schema-registry types.
//!
//! A host application hands over its live content-type registry as raw JSON.
//! [`SchemaRegistry::from_raw`] normalizes every entry into a typed
//! [`SchemaDescriptor`] once, at the boundary; consuming code never performs
//! fallback lookups into legacy nesting again.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Whether a content type holds many entries or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SchemaKind {
    #[serde(rename = "collectionType")]
    CollectionType,
    #[serde(rename = "singleType")]
    SingleType,
}

/// A normalized content-type schema.
#[derive(Debug, Clone)]
pub struct SchemaDescriptor {
    pub uid: String,
    pub kind: SchemaKind,
    pub global_id: String,
    pub attributes: Map<String, Value>,
    /// True when the content-manager plugin options mark the type visible.
    pub visible_in_content_manager: bool,
    /// True when an `seo` component is attached to the attributes.
    pub has_seo_component: bool,
}

impl SchemaDescriptor {
    /// Normalize one raw schema entry.
    ///
    /// The content-manager options historically lived either directly under
    /// `pluginOptions` or inside a since-removed `__schema__` nesting; both
    /// spellings are resolved here and nowhere else.
    fn from_raw(name: &str, schema: &Value) -> Self {
        let options = schema
            .pointer("/pluginOptions/content-manager")
            .or_else(|| schema.pointer("/__schema__/pluginOptions/content-manager"));
        let visible_in_content_manager = options
            .and_then(|o| o.get("visible"))
            .and_then(Value::as_bool)
            .unwrap_or(false);

        let attributes = schema
            .get("attributes")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();
        let has_seo_component = attributes
            .get("seo")
            .and_then(|seo| seo.get("component"))
            .is_some_and(|component| !component.is_null());

        let kind = match schema.get("kind").and_then(Value::as_str) {
            Some("collectionType") => SchemaKind::CollectionType,
            _ => SchemaKind::SingleType,
        };

        Self {
            uid: schema
                .get("uid")
                .and_then(Value::as_str)
                .unwrap_or(name)
                .to_string(),
            kind,
            global_id: schema
                .get("globalId")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            attributes,
            visible_in_content_manager,
            has_seo_component,
        }
    }
}

/// A snapshot of a host application's content-type registry, keyed by
/// fully-qualified type name.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: BTreeMap<String, SchemaDescriptor>,
}

impl SchemaRegistry {
    /// Normalize a raw registry object. Null and non-object entries are
    /// skipped.
    pub fn from_raw(raw: &Value) -> Self {
        let mut schemas = BTreeMap::new();
        if let Some(entries) = raw.as_object() {
            for (name, schema) in entries {
                if schema.is_null() {
                    continue;
                }
                schemas.insert(name.clone(), SchemaDescriptor::from_raw(name, schema));
            }
        }
        Self { schemas }
    }

    /// Iterate entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemaDescriptor)> {
        self.schemas.iter().map(|(name, schema)| (name.as_str(), schema))
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

/// One content type as reported to the SEO plugin.
#[derive(Debug, Clone, Serialize)]
pub struct ContentTypeDescriptor {
    /// Whether the type carries an SEO component.
    pub seo: bool,
    pub uid: String,
    pub kind: SchemaKind,
    #[serde(rename = "globalId")]
    pub global_id: String,
    pub attributes: Map<String, Value>,
}

/// The bucketed payload consumed by the SEO plugin.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypesPayload {
    pub collection_types: Vec<ContentTypeDescriptor>,
    pub single_types: Vec<ContentTypeDescriptor>,
    pub plugins: Vec<ContentTypeDescriptor>,
}
