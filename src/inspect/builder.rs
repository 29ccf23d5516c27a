//! Snapshot Assembly
//!
//! Turns catalog rows into schema objects and a dependency graph:
//!
//! 1. objects are created per kind and filtered by schema
//! 2. dependency rows and table inheritance become graph edges
//! 3. inherited columns are reordered, parents first
//! 4. comments become pseudo-objects depending on their owner and all of the
//!    owner's transitive dependencies
//! 5. closures and the creation order are computed once

use std::collections::HashSet;
use linked_hash_map::LinkedHashMap;
use log::debug;
use crate::catalog::column::{column_map, ColumnMap};
use crate::catalog::enum_type::EnumDef;
use crate::catalog::function::FunctionDef;
use crate::catalog::object::{ObjectDefinition, SchemaObject};
use crate::catalog::sequence::SequenceDef;
use crate::catalog::table::{order_inherited_columns, TableDef};
use crate::catalog::view::ViewDef;
use crate::common::types::{Identity, ObjectKind, QualifiedName};
use crate::graph::{DependencyGraph, Direction};
use super::error::{InspectError, InspectResult};
use super::options::InspectOptions;
use super::rows::{CatalogRows, CommentRow, FunctionRow, RelationKind, RelationRow};

/// Fully assembled snapshot contents
#[derive(Debug)]
pub(crate) struct Snapshot {
    pub(crate) pg_version: u32,
    /// Every object, in arena order: relations, functions, enums, sequences, comments
    pub(crate) objects: LinkedHashMap<Identity, SchemaObject>,
    pub(crate) order: Vec<Identity>,
}

pub(crate) struct SnapshotBuilder<'a> {
    options: &'a InspectOptions,
    objects: LinkedHashMap<Identity, SchemaObject>,
    /// Identities dropped by schema filtering
    excluded: HashSet<Identity>,
    graph: DependencyGraph,
}

impl<'a> SnapshotBuilder<'a> {
    pub(crate) fn new(options: &'a InspectOptions) -> Self {
        SnapshotBuilder {
            options,
            objects: LinkedHashMap::new(),
            excluded: HashSet::new(),
            graph: DependencyGraph::new(),
        }
    }

    /// Build a snapshot from one set of catalog rows
    pub(crate) fn build(mut self, rows: CatalogRows) -> InspectResult<Snapshot> {
        let CatalogRows {
            pg_version,
            relations,
            functions,
            enums,
            sequences,
            dependencies,
            comments,
        } = rows;

        for row in &relations {
            self.add_object(relation_object(row))?;
        }
        for row in &functions {
            self.add_object(function_object(row))?;
        }
        for row in enums {
            let name = QualifiedName::new(row.schema, row.name);
            self.add_object(SchemaObject::new(
                name,
                ColumnMap::new(),
                ObjectDefinition::Enum(EnumDef::new(row.labels)),
            ))?;
        }
        for row in sequences {
            let name = QualifiedName::new(row.schema, row.name);
            let def = SequenceDef {
                data_type: row.data_type,
                start: row.start,
                increment: row.increment,
                min_value: row.min_value,
                max_value: row.max_value,
                cache: row.cache,
                cycle: row.cycle,
                owned_by: row.owned_by,
            };
            self.add_object(SchemaObject::new(name, ColumnMap::new(), ObjectDefinition::Sequence(def)))?;
        }

        for row in &dependencies {
            if self.is_excluded(&row.dependent) || self.is_excluded(&row.dependency) {
                debug!("skipping dependency {} -> {} on a filtered object", row.dependent, row.dependency);
                continue;
            }
            self.graph.add_edge(&row.dependent, &row.dependency)?;
        }
        self.add_inheritance_edges()?;
        self.reorder_inherited_columns()?;

        for row in &comments {
            self.add_comment(row)?;
        }

        self.apply_graph_positions()?;
        let order = self.graph.topological_order()?;

        debug!(
            "snapshot built: {} objects, {} excluded, pg_version {}",
            self.objects.len(),
            self.excluded.len(),
            pg_version
        );

        Ok(Snapshot {
            pg_version,
            objects: self.objects,
            order,
        })
    }

    fn is_excluded(&self, identity: &str) -> bool {
        self.excluded.contains(identity)
    }

    fn add_object(&mut self, object: SchemaObject) -> InspectResult<()> {
        let identity = object.identity().to_string();
        if self.objects.contains_key(&identity) || self.excluded.contains(&identity) {
            return Err(InspectError::DuplicateIdentity(identity));
        }

        if !self.options.includes_schema(object.schema()) {
            self.excluded.insert(identity);
            return Ok(());
        }

        self.graph.add_node(identity.clone())?;
        self.objects.insert(identity, object);
        Ok(())
    }

    /// Each child table depends on its parents
    fn add_inheritance_edges(&mut self) -> InspectResult<()> {
        let mut edges = Vec::new();
        for object in self.objects.values() {
            if let Some(table) = object.as_table() {
                for parent in table.parent_tables() {
                    edges.push((object.identity().to_string(), parent.clone()));
                }
            }
        }

        for (child, parent) in edges {
            if self.is_excluded(&parent) {
                debug!("skipping inheritance {} -> {} on a filtered table", child, parent);
                continue;
            }
            if !self.objects.get(&parent).is_some_and(|p| p.kind() == ObjectKind::Table) {
                return Err(InspectError::UnknownParentTable { table: child, parent });
            }
            self.graph.add_edge(&child, &parent)?;
        }
        Ok(())
    }

    /// Visit tables parents-first and put inherited columns in front
    fn reorder_inherited_columns(&mut self) -> InspectResult<()> {
        let order = self.graph.topological_order()?;

        for identity in order {
            let parents: Vec<Identity> = match self.objects.get(&identity).and_then(|o| o.as_table()) {
                Some(table) if !table.parent_tables().is_empty() => table.parent_tables().to_vec(),
                _ => continue,
            };

            let parent_columns: Vec<ColumnMap> = parents
                .iter()
                .filter_map(|parent| self.objects.get(parent))
                .map(|parent| parent.columns().clone())
                .collect();
            let parent_refs: Vec<&ColumnMap> = parent_columns.iter().collect();

            if let Some(child) = self.objects.get_mut(&identity) {
                let ordered = order_inherited_columns(child.columns(), &parent_refs);
                child.set_columns(ordered);
            }
        }
        Ok(())
    }

    /// Attach a comment to its owner and add its pseudo-object to the graph
    fn add_comment(&mut self, row: &CommentRow) -> InspectResult<()> {
        if self.is_excluded(&row.owner) {
            debug!("skipping comment on filtered object {}", row.owner);
            return Ok(());
        }
        // Comments annotate real objects only, never another comment
        if !self
            .objects
            .get(&row.owner)
            .is_some_and(|owner| owner.kind() != ObjectKind::Comment)
        {
            return Err(InspectError::UnknownCommentOwner(row.owner.clone()));
        }

        let ancestors = self.graph.dependent_on_all(&row.owner)?;
        let comment = match self.objects.get_mut(&row.owner) {
            Some(owner) => {
                owner.set_comment(&row.text);
                SchemaObject::comment_on(owner, row.text.clone())
            }
            None => return Err(InspectError::UnknownCommentOwner(row.owner.clone())),
        };

        let identity = comment.identity().to_string();
        if self.objects.contains_key(&identity) {
            return Err(InspectError::DuplicateIdentity(identity));
        }
        self.graph.add_node(identity.clone())?;
        self.objects.insert(identity.clone(), comment);

        self.graph.add_edge(&identity, &row.owner)?;
        for ancestor in &ancestors {
            self.graph.add_edge(&identity, ancestor)?;
        }
        Ok(())
    }

    /// Copy direct edges and closures from the graph into every object
    fn apply_graph_positions(&mut self) -> InspectResult<()> {
        let mut dependent_on_all = self.graph.closures(Direction::DependentOn)?;
        let mut dependents_all = self.graph.closures(Direction::Dependents)?;

        let comments: HashSet<Identity> = self
            .objects
            .values()
            .filter(|o| o.kind() == ObjectKind::Comment)
            .map(|o| o.identity().to_string())
            .collect();

        for (identity, object) in self.objects.iter_mut() {
            let dependent_on = self.graph.dependent_on(identity)?;
            let dependents = self.graph.dependents(identity)?;
            let on_all = dependent_on_all.remove(identity).unwrap_or_default();
            let all = comments_last(dependents_all.remove(identity).unwrap_or_default(), &comments);
            object.set_graph_position(dependent_on, dependents, on_all, all);
        }
        Ok(())
    }
}

/// Stable partition: everything else first, then comments
fn comments_last(identities: Vec<Identity>, comments: &HashSet<Identity>) -> Vec<Identity> {
    let (mut others, trailing): (Vec<Identity>, Vec<Identity>) =
        identities.into_iter().partition(|identity| !comments.contains(identity));
    others.extend(trailing);
    others
}

fn relation_object(row: &RelationRow) -> SchemaObject {
    let mut columns: Vec<_> = row.columns.iter().map(|c| c.to_column()).collect();
    columns.sort_by_key(|c| c.ordinal());

    let definition = match row.kind {
        RelationKind::Table => ObjectDefinition::Table(TableDef::new(
            row.parent_tables.iter().map(QualifiedName::identity).collect(),
            row.is_unlogged,
        )),
        RelationKind::View => {
            ObjectDefinition::View(ViewDef::new(row.definition.clone().unwrap_or_default()))
        }
    };

    SchemaObject::new(row.qualified_name(), column_map(columns), definition)
}

fn function_object(row: &FunctionRow) -> SchemaObject {
    let mut columns: Vec<_> = row.result_columns.iter().map(|c| c.to_column()).collect();
    columns.sort_by_key(|c| c.ordinal());

    let def = FunctionDef {
        kind: row.kind,
        arguments: row.arguments.clone(),
        return_type: row.return_type.clone(),
        returns_set: row.returns_set,
        language: row.language.clone(),
        definition: row.definition.clone(),
        volatility: row.volatility.clone(),
        strict: row.strict,
        security_definer: row.security_definer,
    };

    SchemaObject::new(
        QualifiedName::new(row.schema.clone(), row.name.clone()),
        column_map(columns),
        ObjectDefinition::Function(def),
    )
}
