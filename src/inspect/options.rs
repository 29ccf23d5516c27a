use serde::Deserialize;

/// Inspection settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InspectOptions {
    /// When non-empty, only objects in these schemas are kept
    pub schemas: Vec<String>,
    /// Objects in these schemas are dropped
    pub exclude_schemas: Vec<String>,
    /// Keep objects in `information_schema` and `pg_*` schemas
    pub include_internal: bool,
}

impl InspectOptions {
    /// Only keep objects from a single schema
    pub fn for_schema(schema: impl Into<String>) -> Self {
        InspectOptions {
            schemas: vec![schema.into()],
            ..Default::default()
        }
    }

    /// Check if objects in `schema` belong in the snapshot
    pub fn includes_schema(&self, schema: &str) -> bool {
        if !self.include_internal && is_internal_schema(schema) {
            return false;
        }
        if self.exclude_schemas.iter().any(|s| s == schema) {
            return false;
        }
        self.schemas.is_empty() || self.schemas.iter().any(|s| s == schema)
    }
}

/// Engine-owned schemas (`pg_catalog`, `pg_toast`, `pg_temp_N`, ...)
pub fn is_internal_schema(schema: &str) -> bool {
    schema == "information_schema" || schema.starts_with("pg_")
}
