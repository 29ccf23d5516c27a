use std::fmt;
use serde::{Serialize, Deserialize};

/// Canonical identity of a schema object within one snapshot.
///
/// Relations, enums and sequences use `"schema"."name"`, routines append their
/// identity arguments (`"schema"."name"(t text)`) and comments are prefixed with
/// the owner's keyword (`view "schema"."name"`).
pub type Identity = String;

/// Kind tag for every object the snapshot models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    Table,
    View,
    Function,
    Procedure,
    Enum,
    Sequence,
    Comment,
}

impl ObjectKind {
    /// Keyword used when the engine names an object of this kind, e.g. in
    /// `COMMENT ON <keyword> ...`
    pub fn keyword(&self) -> &'static str {
        match self {
            ObjectKind::Table => "table",
            ObjectKind::View => "view",
            ObjectKind::Function => "function",
            ObjectKind::Procedure => "procedure",
            ObjectKind::Enum => "type",
            ObjectKind::Sequence => "sequence",
            ObjectKind::Comment => "comment",
        }
    }

    /// Whether objects of this kind produce a row set when queried
    pub fn is_selectable(&self) -> bool {
        matches!(
            self,
            ObjectKind::Table | ObjectKind::View | ObjectKind::Function | ObjectKind::Procedure
        )
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ObjectKind::Table => "TABLE",
            ObjectKind::View => "VIEW",
            ObjectKind::Function => "FUNCTION",
            ObjectKind::Procedure => "PROCEDURE",
            ObjectKind::Enum => "ENUM",
            ObjectKind::Sequence => "SEQUENCE",
            ObjectKind::Comment => "COMMENT",
        };
        write!(f, "{}", name)
    }
}

/// Schema-qualified name as reported by the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QualifiedName {
    pub schema: String,
    pub name: String,
}

impl QualifiedName {
    pub fn new(schema: impl Into<String>, name: impl Into<String>) -> Self {
        QualifiedName {
            schema: schema.into(),
            name: name.into(),
        }
    }

    /// Quoted `"schema"."name"` form
    pub fn identity(&self) -> Identity {
        format!("{}.{}", quote_ident(&self.schema), quote_ident(&self.name))
    }
}

/// Quote an identifier the way the engine's `quote_ident` does when forced:
/// wrap in double quotes and double any embedded quote.
pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Identity of a comment attached to `owner`
pub fn comment_identity(owner_kind: ObjectKind, owner: &str) -> Identity {
    format!("{} {}", owner_kind.keyword(), owner)
}
