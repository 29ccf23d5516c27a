pub mod types;

pub use self::types::{Identity, ObjectKind, QualifiedName};
