// Comment Module
//
// A comment is modelled twice: as the `comment` text on its owner, and as a
// pseudo-object in the graph so it is ordered after everything its owner needs.

use serde::{Serialize, Deserialize};
use crate::common::types::{Identity, ObjectKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentDef {
    /// Identity of the annotated object
    owner: Identity,
    /// Kind of the annotated object
    owner_kind: ObjectKind,
    /// Comment text
    text: String,
}

impl CommentDef {
    pub fn new(owner: Identity, owner_kind: ObjectKind, text: impl Into<String>) -> Self {
        CommentDef {
            owner,
            owner_kind,
            text: text.into(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn owner_kind(&self) -> ObjectKind {
        self.owner_kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
