use serde::{Serialize, Deserialize};

/// Sequence-specific attributes of a schema object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceDef {
    pub data_type: String,
    pub start: i64,
    pub increment: i64,
    pub min_value: i64,
    pub max_value: i64,
    pub cache: i64,
    pub cycle: bool,
    /// `"schema"."table"."column"` the sequence is owned by, if any
    pub owned_by: Option<String>,
}
