use thiserror::Error;
use crate::common::types::{Identity, ObjectKind};

/// Contract violations when comparing two snapshots of an object
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompatibilityError {
    #[error("Cannot compare {left} with {right}: different objects")]
    IdentityMismatch {
        left: Identity,
        right: Identity,
    },
    #[error("Cannot compare {identity}: {left} is not comparable with {right}")]
    KindMismatch {
        identity: Identity,
        left: ObjectKind,
        right: ObjectKind,
    },
}

pub type CompatibilityResult<T> = Result<T, CompatibilityError>;
