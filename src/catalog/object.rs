//! Schema Object Module
//!
//! `SchemaObject` is the unit the snapshot stores: identity, ordered columns,
//! a kind-specific payload and its position in the dependency graph.

use serde::Serialize;
use crate::common::types::{comment_identity, Identity, ObjectKind, QualifiedName};
use super::column::ColumnMap;
use super::comment::CommentDef;
use super::enum_type::EnumDef;
use super::function::{FunctionDef, RoutineKind};
use super::sequence::SequenceDef;
use super::table::TableDef;
use super::view::ViewDef;

/// Kind-specific payload of a schema object
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ObjectDefinition {
    Table(TableDef),
    View(ViewDef),
    Function(FunctionDef),
    Enum(EnumDef),
    Sequence(SequenceDef),
    Comment(CommentDef),
}

impl ObjectDefinition {
    /// Get the kind tag for this payload
    pub fn kind(&self) -> ObjectKind {
        match self {
            ObjectDefinition::Table(_) => ObjectKind::Table,
            ObjectDefinition::View(_) => ObjectKind::View,
            ObjectDefinition::Function(def) => match def.kind {
                RoutineKind::Function => ObjectKind::Function,
                RoutineKind::Procedure => ObjectKind::Procedure,
            },
            ObjectDefinition::Enum(_) => ObjectKind::Enum,
            ObjectDefinition::Sequence(_) => ObjectKind::Sequence,
            ObjectDefinition::Comment(_) => ObjectKind::Comment,
        }
    }
}

/// A schema object from one snapshot
#[derive(Debug, Clone, Serialize)]
pub struct SchemaObject {
    identity: Identity,
    name: QualifiedName,
    /// Table/view columns, or the result columns of a function
    columns: ColumnMap,
    definition: ObjectDefinition,
    /// Comment attached to this object, if any
    comment: Option<String>,
    dependent_on: Vec<Identity>,
    dependents: Vec<Identity>,
    dependent_on_all: Vec<Identity>,
    dependents_all: Vec<Identity>,
}

impl SchemaObject {
    /// Create a new object; the identity is derived from the name and payload
    pub fn new(name: QualifiedName, columns: ColumnMap, definition: ObjectDefinition) -> Self {
        let identity = match &definition {
            ObjectDefinition::Function(def) => {
                format!("{}({})", name.identity(), def.identity_arguments())
            }
            ObjectDefinition::Comment(def) => comment_identity(def.owner_kind(), def.owner()),
            _ => name.identity(),
        };

        SchemaObject {
            identity,
            name,
            columns,
            definition,
            comment: None,
            dependent_on: Vec::new(),
            dependents: Vec::new(),
            dependent_on_all: Vec::new(),
            dependents_all: Vec::new(),
        }
    }

    /// Create the pseudo-object for a comment on `owner`
    pub fn comment_on(owner: &SchemaObject, text: impl Into<String>) -> Self {
        let definition = ObjectDefinition::Comment(CommentDef::new(
            owner.identity.clone(),
            owner.kind(),
            text,
        ));
        SchemaObject::new(owner.name.clone(), ColumnMap::new(), definition)
    }

    /// Get the canonical identity
    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn kind(&self) -> ObjectKind {
        self.definition.kind()
    }

    pub fn schema(&self) -> &str {
        &self.name.schema
    }

    pub fn name(&self) -> &str {
        &self.name.name
    }

    pub fn qualified_name(&self) -> &QualifiedName {
        &self.name
    }

    /// Get the ordered columns (empty for kinds without a row shape)
    pub fn columns(&self) -> &ColumnMap {
        &self.columns
    }

    pub fn definition(&self) -> &ObjectDefinition {
        &self.definition
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Direct dependencies, in catalog discovery order
    pub fn dependent_on(&self) -> &[Identity] {
        &self.dependent_on
    }

    /// Direct dependents, in catalog discovery order
    pub fn dependents(&self) -> &[Identity] {
        &self.dependents
    }

    /// Transitive dependencies, closest first
    pub fn dependent_on_all(&self) -> &[Identity] {
        &self.dependent_on_all
    }

    /// Transitive dependents, closest first, comments last
    pub fn dependents_all(&self) -> &[Identity] {
        &self.dependents_all
    }

    pub fn is_selectable(&self) -> bool {
        self.kind().is_selectable()
    }

    pub fn as_table(&self) -> Option<&TableDef> {
        match &self.definition {
            ObjectDefinition::Table(def) => Some(def),
            _ => None,
        }
    }

    pub fn as_view(&self) -> Option<&ViewDef> {
        match &self.definition {
            ObjectDefinition::View(def) => Some(def),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionDef> {
        match &self.definition {
            ObjectDefinition::Function(def) => Some(def),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumDef> {
        match &self.definition {
            ObjectDefinition::Enum(def) => Some(def),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&SequenceDef> {
        match &self.definition {
            ObjectDefinition::Sequence(def) => Some(def),
            _ => None,
        }
    }

    pub fn as_comment(&self) -> Option<&CommentDef> {
        match &self.definition {
            ObjectDefinition::Comment(def) => Some(def),
            _ => None,
        }
    }

    pub(crate) fn set_comment(&mut self, text: &str) {
        self.comment = Some(text.to_string());
    }

    pub(crate) fn set_columns(&mut self, columns: ColumnMap) {
        self.columns = columns;
    }

    pub(crate) fn set_graph_position(
        &mut self,
        dependent_on: Vec<Identity>,
        dependents: Vec<Identity>,
        dependent_on_all: Vec<Identity>,
        dependents_all: Vec<Identity>,
    ) {
        self.dependent_on = dependent_on;
        self.dependents = dependents;
        self.dependent_on_all = dependent_on_all;
        self.dependents_all = dependents_all;
    }
}

/// Structural equality over definition-relevant attributes. Graph position and
/// the attached comment are not part of an object's definition.
impl PartialEq for SchemaObject {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity
            && self.columns == other.columns
            && self.definition == other.definition
    }
}

impl Eq for SchemaObject {}
