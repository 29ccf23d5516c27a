//! Catalog Object Model
//!
//! This module defines the schema objects a snapshot holds (tables, views,
//! functions, enums, sequences and comments), their columns, and the rules
//! for comparing two snapshots of the same object.

pub mod column;
pub mod comment;
pub mod compatibility;
pub mod enum_type;
pub mod error;
pub mod function;
pub mod object;
pub mod sequence;
pub mod table;
pub mod view;

// Re-export key types
pub use self::column::{column_map, Column, ColumnMap};
pub use self::comment::CommentDef;
pub use self::compatibility::{can_replace, definition_eq};
pub use self::enum_type::EnumDef;
pub use self::error::{CompatibilityError, CompatibilityResult};
pub use self::function::{ArgumentMode, FunctionArgument, FunctionDef, RoutineKind};
pub use self::object::{ObjectDefinition, SchemaObject};
pub use self::sequence::SequenceDef;
pub use self::table::TableDef;
pub use self::view::ViewDef;
