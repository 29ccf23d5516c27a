// Replace Compatibility Module
//
// Decides whether a new definition of an object can supersede the installed
// one in place. The predicate is directional: `can_replace(new, old)`.

use log::debug;
use super::column::ColumnMap;
use super::error::{CompatibilityError, CompatibilityResult};
use super::object::{ObjectDefinition, SchemaObject};

/// Fail unless both sides are snapshots of the same object: same identity and
/// same kind
fn check_comparable(left: &SchemaObject, right: &SchemaObject) -> CompatibilityResult<()> {
    if left.identity() != right.identity() {
        return Err(CompatibilityError::IdentityMismatch {
            left: left.identity().to_string(),
            right: right.identity().to_string(),
        });
    }
    if left.kind() != right.kind() {
        return Err(CompatibilityError::KindMismatch {
            identity: left.identity().to_string(),
            left: left.kind(),
            right: right.kind(),
        });
    }
    Ok(())
}

/// Every old column is still present at the same position with the same type;
/// new columns may only be appended.
fn columns_extend(new: &ColumnMap, old: &ColumnMap) -> bool {
    old.len() <= new.len()
        && old
            .values()
            .zip(new.values())
            .all(|(old_col, new_col)| new_col.same_shape(old_col))
}

/// Same columns, same order, same types
fn columns_identical(new: &ColumnMap, old: &ColumnMap) -> bool {
    old.len() == new.len() && columns_extend(new, old)
}

/// Structural equality that rejects objects of different identity or kind
/// instead of reporting them unequal.
pub fn definition_eq(left: &SchemaObject, right: &SchemaObject) -> CompatibilityResult<bool> {
    check_comparable(left, right)?;
    Ok(left == right)
}

/// Whether `new` can replace `old` without dropping and recreating it
pub fn can_replace(new: &SchemaObject, old: &SchemaObject) -> CompatibilityResult<bool> {
    check_comparable(new, old)?;

    let replaceable = match (new.definition(), old.definition()) {
        // Tables are altered, not replaced: additive evolution only
        (ObjectDefinition::Table(_), ObjectDefinition::Table(_)) => {
            columns_extend(new.columns(), old.columns())
        }
        (ObjectDefinition::View(_), ObjectDefinition::View(_)) => {
            columns_extend(new.columns(), old.columns())
        }
        // Any change to the result shape forces drop and recreate
        (ObjectDefinition::Function(new_fn), ObjectDefinition::Function(old_fn)) => {
            new_fn.identity_arguments() == old_fn.identity_arguments()
                && new_fn.return_type == old_fn.return_type
                && new_fn.returns_set == old_fn.returns_set
                && new_fn.keeps_defaults_of(old_fn)
                && columns_identical(new.columns(), old.columns())
        }
        (ObjectDefinition::Enum(new_enum), ObjectDefinition::Enum(old_enum)) => {
            new_enum.extends(old_enum)
        }
        // Every sequence attribute is alterable in place
        (ObjectDefinition::Sequence(_), ObjectDefinition::Sequence(_)) => true,
        (ObjectDefinition::Comment(_), ObjectDefinition::Comment(_)) => true,
        _ => {
            return Err(CompatibilityError::KindMismatch {
                identity: new.identity().to_string(),
                left: new.kind(),
                right: old.kind(),
            });
        }
    };

    debug!("can_replace {} ({}): {}", new.identity(), new.kind(), replaceable);
    Ok(replaceable)
}

impl SchemaObject {
    /// Whether this definition can replace `old` in place; see [`can_replace`]
    pub fn can_replace(&self, old: &SchemaObject) -> CompatibilityResult<bool> {
        can_replace(self, old)
    }

    /// Contract-checked structural equality; see [`definition_eq`]
    pub fn definition_eq(&self, other: &SchemaObject) -> CompatibilityResult<bool> {
        definition_eq(self, other)
    }
}
