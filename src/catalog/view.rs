use serde::{Serialize, Deserialize};

/// View-specific attributes of a schema object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewDef {
    /// Normalized query text as the catalog prints it
    definition: String,
}

impl ViewDef {
    pub fn new(definition: impl Into<String>) -> Self {
        ViewDef {
            definition: definition.into(),
        }
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }
}
