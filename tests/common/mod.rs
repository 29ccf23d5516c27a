// Helpers for building catalog rows in tests
#![allow(dead_code)]

use schemagraph::catalog::{ArgumentMode, FunctionArgument, RoutineKind};
use schemagraph::inspect::{
    CatalogRows, ColumnRow, CommentRow, DependencyRow, EnumRow, FunctionRow, RelationKind,
    RelationRow, SequenceRow,
};
use schemagraph::QualifiedName;

// Quoted identity for a relation in the public schema
pub fn ident(name: &str) -> String {
    format!("\"public\".\"{}\"", name)
}

pub fn column(name: &str, data_type: &str, ordinal: i32) -> ColumnRow {
    ColumnRow {
        name: name.to_string(),
        data_type: data_type.to_string(),
        not_null: false,
        default: None,
        ordinal,
        is_inherited: false,
        collation: None,
    }
}

pub fn not_null(mut col: ColumnRow) -> ColumnRow {
    col.not_null = true;
    col
}

pub fn inherited(mut col: ColumnRow) -> ColumnRow {
    col.is_inherited = true;
    col
}

pub fn table(name: &str, columns: Vec<ColumnRow>) -> RelationRow {
    RelationRow {
        schema: "public".to_string(),
        name: name.to_string(),
        kind: RelationKind::Table,
        definition: None,
        columns,
        parent_tables: vec![],
        is_unlogged: false,
    }
}

pub fn child_table(name: &str, parents: &[&str], columns: Vec<ColumnRow>) -> RelationRow {
    let mut row = table(name, columns);
    row.parent_tables = parents.iter().map(|p| QualifiedName::new("public", *p)).collect();
    row
}

pub fn view(name: &str, definition: &str, columns: Vec<ColumnRow>) -> RelationRow {
    RelationRow {
        schema: "public".to_string(),
        name: name.to_string(),
        kind: RelationKind::View,
        definition: Some(definition.to_string()),
        columns,
        parent_tables: vec![],
        is_unlogged: false,
    }
}

pub fn arg(name: &str, data_type: &str) -> FunctionArgument {
    FunctionArgument {
        name: Some(name.to_string()),
        data_type: data_type.to_string(),
        mode: ArgumentMode::In,
        default: None,
    }
}

pub fn function(
    name: &str,
    arguments: Vec<FunctionArgument>,
    return_type: &str,
    result_columns: Vec<ColumnRow>,
    body: &str,
) -> FunctionRow {
    FunctionRow {
        schema: "public".to_string(),
        name: name.to_string(),
        kind: RoutineKind::Function,
        arguments,
        return_type: return_type.to_string(),
        returns_set: true,
        result_columns,
        language: "sql".to_string(),
        definition: body.to_string(),
        volatility: "v".to_string(),
        strict: false,
        security_definer: false,
    }
}

pub fn enumeration(name: &str, labels: &[&str]) -> EnumRow {
    EnumRow {
        schema: "public".to_string(),
        name: name.to_string(),
        labels: labels.iter().map(|l| l.to_string()).collect(),
    }
}

pub fn sequence(name: &str) -> SequenceRow {
    SequenceRow {
        schema: "public".to_string(),
        name: name.to_string(),
        data_type: "integer".to_string(),
        start: 1,
        increment: 1,
        min_value: 1,
        max_value: 2147483647,
        cache: 1,
        cycle: false,
        owned_by: None,
    }
}

pub fn dep(dependent: &str, dependency: &str) -> DependencyRow {
    DependencyRow::new(dependent, dependency)
}

pub fn comment(owner: &str, text: &str) -> CommentRow {
    CommentRow {
        owner: owner.to_string(),
        text: text.to_string(),
    }
}

pub fn rows(pg_version: u32) -> CatalogRows {
    CatalogRows {
        pg_version,
        ..Default::default()
    }
}

// Objects from the pg_trgm relationship sample:
//   fff(t text)             returns TABLE(score decimal)
//   vvv                     view calling an extension function
//   depends_on_fff          view over fff('t')
//   depends_on_vvv(t text)  function selecting from vvv (body-only reference)
//   doubledep               view over depends_on_vvv('x') and depends_on_fff
pub fn relationship_sample() -> CatalogRows {
    let mut r = rows(16);
    r.relations = vec![
        view("depends_on_fff", "SELECT fff.score FROM fff('t'::text) fff(score);", vec![column("score", "numeric", 1)]),
        view(
            "doubledep",
            "SELECT depends_on_vvv.score FROM depends_on_vvv('x'::text) UNION SELECT depends_on_fff.score FROM depends_on_fff;",
            vec![column("score", "numeric", 1)],
        ),
        view("vvv", "SELECT (similarity('aaa'::text, 'aaab'::text))::numeric AS x;", vec![column("x", "numeric", 1)]),
    ];
    r.functions = vec![
        function(
            "depends_on_vvv",
            vec![arg("t", "text")],
            "TABLE(score numeric)",
            vec![column("score", "numeric", 1)],
            " select * from vvv ",
        ),
        function(
            "fff",
            vec![arg("t", "text")],
            "TABLE(score numeric)",
            vec![column("score", "numeric", 1)],
            " select similarity('aaa', 'aaab')::decimal ",
        ),
    ];
    r.dependencies = vec![
        dep(&ident("depends_on_fff"), "\"public\".\"fff\"(t text)"),
        dep(&ident("doubledep"), &ident("depends_on_fff")),
        dep(&ident("doubledep"), "\"public\".\"depends_on_vvv\"(t text)"),
    ];
    r
}
