// Enumerated Type Module

use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDef {
    /// Labels in sort order
    labels: Vec<String>,
}

impl EnumDef {
    pub fn new(labels: Vec<String>) -> Self {
        EnumDef { labels }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Labels can only be appended in place, so `old` must be a prefix of `self`
    pub fn extends(&self, old: &EnumDef) -> bool {
        self.labels.starts_with(&old.labels)
    }
}
