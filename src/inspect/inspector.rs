//! Inspector Snapshot
//!
//! One immutable inspection result. Objects are shared through `Arc`, so a
//! snapshot can be read from several threads without locking.

use std::sync::Arc;
use linked_hash_map::LinkedHashMap;
use crate::catalog::object::SchemaObject;
use crate::common::types::{Identity, ObjectKind};
use super::builder::SnapshotBuilder;
use super::error::InspectResult;
use super::options::InspectOptions;
use super::rows::CatalogRows;
use super::source::CatalogSource;

/// Insertion-ordered mapping from identity to object
pub type ObjectMap = LinkedHashMap<Identity, Arc<SchemaObject>>;

/// Immutable model of a database schema at one point in time
#[derive(Debug, Clone)]
pub struct Inspector {
    pg_version: u32,
    objects: ObjectMap,
    tables: ObjectMap,
    views: ObjectMap,
    functions: ObjectMap,
    enums: ObjectMap,
    sequences: ObjectMap,
    comments: ObjectMap,
    selectables: ObjectMap,
    order: Vec<Identity>,
}

impl Inspector {
    /// Build a snapshot from already-extracted rows with default options
    pub fn from_rows(rows: CatalogRows) -> InspectResult<Self> {
        Self::from_rows_with_options(rows, &InspectOptions::default())
    }

    /// Build a snapshot from already-extracted rows
    pub fn from_rows_with_options(rows: CatalogRows, options: &InspectOptions) -> InspectResult<Self> {
        let snapshot = SnapshotBuilder::new(options).build(rows)?;

        let mut inspector = Inspector {
            pg_version: snapshot.pg_version,
            objects: ObjectMap::new(),
            tables: ObjectMap::new(),
            views: ObjectMap::new(),
            functions: ObjectMap::new(),
            enums: ObjectMap::new(),
            sequences: ObjectMap::new(),
            comments: ObjectMap::new(),
            selectables: ObjectMap::new(),
            order: snapshot.order,
        };

        for (identity, object) in snapshot.objects {
            let object = Arc::new(object);
            let by_kind = match object.kind() {
                ObjectKind::Table => &mut inspector.tables,
                ObjectKind::View => &mut inspector.views,
                ObjectKind::Function | ObjectKind::Procedure => &mut inspector.functions,
                ObjectKind::Enum => &mut inspector.enums,
                ObjectKind::Sequence => &mut inspector.sequences,
                ObjectKind::Comment => &mut inspector.comments,
            };
            by_kind.insert(identity.clone(), Arc::clone(&object));
            if object.is_selectable() {
                inspector.selectables.insert(identity.clone(), Arc::clone(&object));
            }
            inspector.objects.insert(identity, object);
        }

        Ok(inspector)
    }

    /// Engine version reported by the extractor
    pub fn pg_version(&self) -> u32 {
        self.pg_version
    }

    /// Every object of every kind
    pub fn objects(&self) -> &ObjectMap {
        &self.objects
    }

    pub fn tables(&self) -> &ObjectMap {
        &self.tables
    }

    pub fn views(&self) -> &ObjectMap {
        &self.views
    }

    /// Functions and procedures
    pub fn functions(&self) -> &ObjectMap {
        &self.functions
    }

    pub fn enums(&self) -> &ObjectMap {
        &self.enums
    }

    pub fn sequences(&self) -> &ObjectMap {
        &self.sequences
    }

    /// Comment pseudo-objects, keyed by `<keyword> <owner identity>`
    pub fn comments(&self) -> &ObjectMap {
        &self.comments
    }

    /// Tables, views and functions
    pub fn selectables(&self) -> &ObjectMap {
        &self.selectables
    }

    /// Look up any object by identity
    pub fn get(&self, identity: &str) -> Option<&SchemaObject> {
        self.objects.get(identity).map(|object| object.as_ref())
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Every identity, dependencies before dependents
    pub fn dependency_order(&self) -> Vec<Identity> {
        self.order.clone()
    }

    /// Every identity, dependents before dependencies
    pub fn drop_order(&self) -> Vec<Identity> {
        self.order.iter().rev().cloned().collect()
    }

    /// Creation order restricted to the given kinds
    pub fn dependency_order_for(&self, kinds: &[ObjectKind]) -> Vec<Identity> {
        self.order
            .iter()
            .filter(|identity| {
                self.objects
                    .get(identity.as_str())
                    .is_some_and(|object| kinds.contains(&object.kind()))
            })
            .cloned()
            .collect()
    }
}

/// Fetch rows from `source` once and build a snapshot from them
pub fn get_inspector<S>(source: &mut S, options: &InspectOptions) -> InspectResult<Inspector>
where
    S: CatalogSource + ?Sized,
{
    let rows = source.fetch()?;
    Inspector::from_rows_with_options(rows, options)
}
