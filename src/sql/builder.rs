//! Builds parameterized SELECT, INSERT, UPDATE and procedure calls from query descriptions.
//!
//! Every statement yields one JSON value per row (`to_jsonb(main)`), so rows come
//! back in the same shape the REST endpoint produces.

use crate::config::{ProcedureDef, Returns, TableDef};
use crate::query::{Filter, Insert, Select, Update};
use serde_json::Value;

const MAIN_ALIAS: &str = "main";

/// Quote identifier for PostgreSQL (safe: only from the catalog).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Full qualified table name.
fn qualified_table(schema: &str, table: &str) -> String {
    format!("{}.{}", quoted(schema), quoted(table))
}

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<Value>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: Value) -> u32 {
        let n = self.params.len() as u32 + 1;
        self.params.push(v);
        n
    }

    /// Placeholder cast to `pg_type`, e.g. `$2::bool`.
    fn cast_param(&mut self, v: Value, pg_type: &str) -> String {
        let n = self.push_param(v);
        format!("${}::{}", n, pg_type)
    }
}

fn column_type<'a>(table: &'a TableDef, column: &str) -> &'a str {
    table.column(column).map(|c| c.pg_type).unwrap_or("text")
}

fn where_clause(q: &mut QueryBuf, table: &TableDef, filters: &[Filter]) -> String {
    let parts: Vec<String> = filters
        .iter()
        .map(|f| {
            let ph = q.cast_param(f.value.clone(), column_type(table, f.column));
            format!("{}.{} {} {}", MAIN_ALIAS, quoted(f.column), f.op.sql(), ph)
        })
        .collect();
    if parts.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", parts.join(" AND "))
    }
}

/// SELECT with embeds as scalar subqueries merged into the row object.
pub fn select(schema: &str, query: &Select) -> QueryBuf {
    let mut q = QueryBuf::new();
    let table = query.table;

    let mut row_expr = format!("to_jsonb({})", MAIN_ALIAS);
    let embeds: Vec<String> = query
        .embeds
        .iter()
        .filter_map(|name| table.relation(name))
        .map(|r| {
            format!(
                "'{}', (SELECT to_jsonb(sub) FROM {} sub WHERE sub.{} = {}.{})",
                r.name,
                qualified_table(schema, r.related_table),
                quoted(r.their_key_column),
                MAIN_ALIAS,
                quoted(r.our_key_column)
            )
        })
        .collect();
    if !embeds.is_empty() {
        row_expr = format!("{} || jsonb_build_object({})", row_expr, embeds.join(", "));
    }

    let where_sql = where_clause(&mut q, table, &query.filters);
    let order_sql = if query.order.is_empty() {
        String::new()
    } else {
        let parts: Vec<String> = query
            .order
            .iter()
            .map(|o| {
                format!(
                    "{}.{} {}",
                    MAIN_ALIAS,
                    quoted(o.column),
                    if o.ascending { "ASC" } else { "DESC" }
                )
            })
            .collect();
        format!(" ORDER BY {}", parts.join(", "))
    };
    let limit_sql = query.limit.map(|n| format!(" LIMIT {}", n)).unwrap_or_default();

    q.sql = format!(
        "SELECT {} FROM {} {}{}{}{}",
        row_expr,
        qualified_table(schema, table.name),
        MAIN_ALIAS,
        where_sql,
        order_sql,
        limit_sql
    );
    q
}

/// INSERT of the provided columns only, so the table's defaults fill the rest.
/// Values go through json_populate_record so arrays and enums convert server-side.
pub fn insert(schema: &str, insert: &Insert) -> QueryBuf {
    let mut q = QueryBuf::new();
    let table = qualified_table(schema, insert.table.name);
    if insert.row.is_empty() {
        q.sql = format!(
            "INSERT INTO {} AS {} DEFAULT VALUES RETURNING to_jsonb({})",
            table, MAIN_ALIAS, MAIN_ALIAS
        );
        return q;
    }
    let cols: Vec<String> = insert.row.keys().map(|k| quoted(k)).collect();
    let n = q.push_param(Value::Object(insert.row.clone()));
    q.sql = format!(
        "INSERT INTO {} AS {} ({}) SELECT {} FROM json_populate_record(NULL::{}, ${}::json) RETURNING to_jsonb({})",
        table,
        MAIN_ALIAS,
        cols.join(", "),
        cols.join(", "),
        table,
        n,
        MAIN_ALIAS
    );
    q
}

/// UPDATE of every matching row; SET values come from one JSON parameter.
pub fn update(schema: &str, update: &Update) -> QueryBuf {
    let mut q = QueryBuf::new();
    let table = qualified_table(schema, update.table.name);
    let n = q.push_param(Value::Object(update.set.clone()));
    let sets: Vec<String> = update
        .set
        .keys()
        .map(|k| format!("{} = src.{}", quoted(k), quoted(k)))
        .collect();
    let where_sql = where_clause(&mut q, update.table, &update.filters);
    q.sql = format!(
        "UPDATE {} AS {} SET {} FROM json_populate_record(NULL::{}, ${}::json) AS src{} RETURNING to_jsonb({})",
        table,
        MAIN_ALIAS,
        sets.join(", "),
        table,
        n,
        where_sql,
        MAIN_ALIAS
    );
    q
}

/// Procedure call with named arguments. Arguments missing from `args` are passed as NULL.
pub fn call(schema: &str, proc: &ProcedureDef, args: &Value) -> QueryBuf {
    let mut q = QueryBuf::new();
    let named: Vec<String> = proc
        .args
        .iter()
        .map(|a| {
            let v = args.get(a.name).cloned().unwrap_or(Value::Null);
            format!("{} => {}", quoted(a.name), q.cast_param(v, a.pg_type))
        })
        .collect();
    let func = format!("{}.{}({})", quoted(schema), quoted(proc.name), named.join(", "));
    q.sql = match proc.returns {
        Returns::Json => format!("SELECT to_jsonb({})", func),
        Returns::Rows => format!(
            "SELECT COALESCE(jsonb_agg(to_jsonb(r)), '[]'::jsonb) FROM {} r",
            func
        ),
        Returns::Void => format!("SELECT {}", func),
    };
    q
}
