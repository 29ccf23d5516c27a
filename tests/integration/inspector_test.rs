// Inspector Integration Tests
//
// Builds snapshots from a JSON catalog dump and exercises lookups, schema
// filtering, ordering and concurrent reads.

use std::cell::Cell;
use std::sync::Arc;
use std::thread;
use anyhow::Result;
use schemagraph::inspect::{get_inspector, CatalogRows, InspectError, InspectOptions, Inspector};
use schemagraph::ObjectKind;

#[path = "../common/mod.rs"]
mod common;
use common::ident;

const FIXTURE: &str = include_str!("../fixtures/catalog.json");

fn fixture_rows() -> CatalogRows {
    serde_json::from_str(FIXTURE).unwrap()
}

fn audit(name: &str) -> String {
    format!("\"audit\".\"{}\"", name)
}

#[test]
fn test_fixture_snapshot() -> Result<()> {
    let i = Inspector::from_rows(fixture_rows())?;

    assert_eq!(i.pg_version(), 16);
    assert_eq!(i.len(), 9);
    assert_eq!(i.tables().len(), 1);
    assert_eq!(i.views().len(), 2);
    assert_eq!(i.functions().len(), 2);
    assert_eq!(i.enums().len(), 1);
    assert_eq!(i.sequences().len(), 1);
    assert_eq!(i.comments().len(), 2);
    assert_eq!(i.selectables().len(), 5);

    // Internal schemas are skipped by default
    assert!(i.get("\"pg_catalog\".\"pg_class\"").is_none());

    let orders = i.get(&ident("orders")).unwrap();
    assert_eq!(orders.kind(), ObjectKind::Table);
    assert_eq!(orders.comment(), Some("customer orders"));
    let names: Vec<&str> = orders.columns().values().map(|c| c.name()).collect();
    assert_eq!(names, vec!["id", "status", "note"]);
    let id = &orders.columns()["id"];
    assert!(!id.is_nullable());
    assert_eq!(id.default(), Some("nextval('orders_id_seq'::regclass)"));
    assert_eq!(orders.columns()["note"].collation(), Some("C"));

    let archive = i.get("\"public\".\"archive\"(before date)").unwrap();
    assert_eq!(archive.kind(), ObjectKind::Procedure);
    let count_open = i.get("\"public\".\"count_open\"()").unwrap();
    assert_eq!(count_open.as_function().map(|f| f.volatility.as_str()), Some("s"));

    // The view's rewrite rule row points back at the view itself
    assert_eq!(
        i.views()[&ident("open_orders")].dependent_on().to_vec(),
        vec![ident("orders"), ident("order_status")]
    );
    Ok(())
}

#[test]
fn test_dependency_order() -> Result<()> {
    let i = Inspector::from_rows(fixture_rows())?;

    let expected = vec![
        ident("order_status"),
        ident("orders_id_seq"),
        "\"public\".\"count_open\"()".to_string(),
        "\"public\".\"archive\"(before date)".to_string(),
        ident("orders"),
        ident("open_orders"),
        audit("order_log"),
        format!("table {}", ident("orders")),
        format!("view {}", audit("order_log")),
    ];
    assert_eq!(i.dependency_order(), expected);

    let mut reversed = expected.clone();
    reversed.reverse();
    assert_eq!(i.drop_order(), reversed);

    // Every object comes after everything it depends on
    let order = i.dependency_order();
    for (position, identity) in order.iter().enumerate() {
        for dependency in i.get(identity).unwrap().dependent_on_all() {
            let before = order.iter().position(|id| id == dependency).unwrap();
            assert!(before < position, "{} must precede {}", dependency, identity);
        }
    }

    assert_eq!(i.dependency_order(), i.dependency_order());
    Ok(())
}

#[test]
fn test_dependency_order_for_kinds() -> Result<()> {
    let i = Inspector::from_rows(fixture_rows())?;

    assert_eq!(
        i.dependency_order_for(&[ObjectKind::Table, ObjectKind::View]),
        vec![ident("orders"), ident("open_orders"), audit("order_log")]
    );
    assert_eq!(
        i.dependency_order_for(&[ObjectKind::Comment]),
        vec![format!("table {}", ident("orders")), format!("view {}", audit("order_log"))]
    );
    assert!(i.dependency_order_for(&[]).is_empty());
    Ok(())
}

#[test]
fn test_schema_filtering() -> Result<()> {
    let public_only = Inspector::from_rows_with_options(fixture_rows(), &InspectOptions::for_schema("public"))?;

    assert!(public_only.get(&audit("order_log")).is_none());
    assert!(public_only.get(&format!("view {}", audit("order_log"))).is_none());
    assert_eq!(public_only.len(), 7);
    // Edges to filtered objects are gone too
    assert_eq!(
        public_only.tables()[&ident("orders")].dependents().to_vec(),
        vec![ident("open_orders"), format!("table {}", ident("orders"))]
    );

    let options: InspectOptions = serde_json::from_str(r#"{ "exclude_schemas": ["audit"] }"#)?;
    let excluding = Inspector::from_rows_with_options(fixture_rows(), &options)?;
    assert_eq!(excluding.dependency_order(), public_only.dependency_order());

    let options: InspectOptions = serde_json::from_str(r#"{ "include_internal": true }"#)?;
    let internal = Inspector::from_rows_with_options(fixture_rows(), &options)?;
    assert_eq!(internal.len(), 10);
    assert!(internal.tables().contains_key("\"pg_catalog\".\"pg_class\""));
    Ok(())
}

#[test]
fn test_get_inspector_fetches_once() -> Result<()> {
    let calls = Cell::new(0);
    let mut source = || -> anyhow::Result<CatalogRows> {
        calls.set(calls.get() + 1);
        Ok(fixture_rows())
    };

    let i = get_inspector(&mut source, &InspectOptions::default())?;
    assert_eq!(calls.get(), 1);
    assert_eq!(i.len(), 9);

    let mut rows = fixture_rows();
    let from_rows = get_inspector(&mut rows, &InspectOptions::default())?;
    assert_eq!(from_rows.dependency_order(), i.dependency_order());
    Ok(())
}

#[test]
fn test_extraction_error_passes_through() {
    let mut source = || -> anyhow::Result<CatalogRows> { Err(anyhow::anyhow!("permission denied for schema audit")) };

    match get_inspector(&mut source, &InspectOptions::default()) {
        Err(InspectError::Extraction(e)) => assert_eq!(e.to_string(), "permission denied for schema audit"),
        other => panic!("expected extraction failure, got {:?}", other.map(|i| i.len())),
    }
}

#[test]
fn test_concurrent_reads() -> Result<()> {
    let i = Arc::new(Inspector::from_rows(fixture_rows())?);
    let expected = i.dependency_order();

    thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let snapshot = Arc::clone(&i);
                s.spawn(move || {
                    let orders = snapshot.get(&ident("orders")).map(|o| o.dependents_all().to_vec());
                    (snapshot.dependency_order(), orders)
                })
            })
            .collect();

        for handle in handles {
            let (order, dependents) = handle.join().unwrap();
            assert_eq!(order, expected);
            assert_eq!(
                dependents,
                Some(vec![
                    ident("open_orders"),
                    audit("order_log"),
                    format!("table {}", ident("orders")),
                    format!("view {}", audit("order_log")),
                ])
            );
        }
    });
    Ok(())
}

#[test]
fn test_objects_serialize() -> Result<()> {
    let i = Inspector::from_rows(fixture_rows())?;
    let value = serde_json::to_value(i.get(&ident("open_orders")).unwrap())?;

    assert_eq!(value["identity"], "\"public\".\"open_orders\"");
    assert_eq!(value["dependent_on"][0], "\"public\".\"orders\"");
    assert_eq!(value["columns"]["id"]["data_type"], "integer");
    Ok(())
}
