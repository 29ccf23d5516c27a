//! Inspection Module
//!
//! Builds an immutable `Inspector` snapshot from rows handed over by the
//! catalog-extraction collaborator.

mod builder;
pub mod error;
pub mod inspector;
pub mod options;
pub mod rows;
pub mod source;

pub use self::error::{InspectError, InspectResult};
pub use self::inspector::{get_inspector, Inspector, ObjectMap};
pub use self::options::{is_internal_schema, InspectOptions};
pub use self::rows::{
    CatalogRows, ColumnRow, CommentRow, DependencyRow, EnumRow, FunctionRow, RelationKind,
    RelationRow, SequenceRow,
};
pub use self::source::CatalogSource;
