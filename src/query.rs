//! Backend-neutral description of reads and writes.
//!
//! Identifiers are checked against the catalog when a query is built, so the
//! backends can render them without further escaping concerns.

use crate::config::{self, TableDef};
use crate::error::BackendError;
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Eq,
    Lte,
}

impl Op {
    pub fn as_str(&self) -> &'static str {
        match self {
            Op::Eq => "eq",
            Op::Lte => "lte",
        }
    }

    pub fn sql(&self) -> &'static str {
        match self {
            Op::Eq => "=",
            Op::Lte => "<=",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Filter {
    pub column: &'static str,
    pub op: Op,
    pub value: Value,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Order {
    pub column: &'static str,
    pub ascending: bool,
}

/// A read against one table, optionally embedding related rows.
#[derive(Clone, Debug)]
pub struct Select {
    pub table: &'static TableDef,
    pub embeds: Vec<&'static str>,
    pub filters: Vec<Filter>,
    pub order: Vec<Order>,
    pub limit: Option<u32>,
}

impl Select {
    pub fn from(table: &str) -> Result<Self, BackendError> {
        Ok(Select {
            table: lookup_table(table)?,
            embeds: Vec::new(),
            filters: Vec::new(),
            order: Vec::new(),
            limit: None,
        })
    }

    /// Embed the related row `relation` under its own name.
    pub fn embed(mut self, relation: &str) -> Result<Self, BackendError> {
        let r = self.table.relation(relation).ok_or_else(|| {
            BackendError::new(
                "PGRST200",
                format!("Could not find a relationship between '{}' and '{}'", self.table.name, relation),
            )
        })?;
        self.embeds.push(r.name);
        Ok(self)
    }

    pub fn eq(self, column: &str, value: impl Into<Value>) -> Result<Self, BackendError> {
        self.filter(column, Op::Eq, value.into())
    }

    pub fn lte(self, column: &str, value: impl Into<Value>) -> Result<Self, BackendError> {
        self.filter(column, Op::Lte, value.into())
    }

    pub fn order(mut self, column: &str, ascending: bool) -> Result<Self, BackendError> {
        let column = lookup_column(self.table, column)?;
        self.order.push(Order { column, ascending });
        Ok(self)
    }

    pub fn limit(mut self, n: u32) -> Self {
        self.limit = Some(n);
        self
    }

    fn filter(mut self, column: &str, op: Op, value: Value) -> Result<Self, BackendError> {
        let column = lookup_column(self.table, column)?;
        self.filters.push(Filter { column, op, value });
        Ok(self)
    }
}

/// Row insert; `row` must be a JSON object whose keys are columns of `table`.
#[derive(Clone, Debug)]
pub struct Insert {
    pub table: &'static TableDef,
    pub row: serde_json::Map<String, Value>,
}

impl Insert {
    pub fn new(table: &str, row: Value) -> Result<Self, BackendError> {
        let table = lookup_table(table)?;
        let row = checked_object(table, row)?;
        Ok(Insert { table, row })
    }
}

/// Update of every row matching `filters`; `set` holds the new column values.
#[derive(Clone, Debug)]
pub struct Update {
    pub table: &'static TableDef,
    pub set: serde_json::Map<String, Value>,
    pub filters: Vec<Filter>,
}

impl Update {
    pub fn new(table: &str, set: Value) -> Result<Self, BackendError> {
        let table = lookup_table(table)?;
        let set = checked_object(table, set)?;
        Ok(Update {
            table,
            set,
            filters: Vec::new(),
        })
    }

    pub fn eq(mut self, column: &str, value: impl Into<Value>) -> Result<Self, BackendError> {
        let column = lookup_column(self.table, column)?;
        self.filters.push(Filter {
            column,
            op: Op::Eq,
            value: value.into(),
        });
        Ok(self)
    }
}

fn lookup_table(name: &str) -> Result<&'static TableDef, BackendError> {
    config::table(name).ok_or_else(|| {
        BackendError::new("42P01", format!("relation \"public.{}\" does not exist", name))
    })
}

fn lookup_column(table: &'static TableDef, name: &str) -> Result<&'static str, BackendError> {
    table.column(name).map(|c| c.name).ok_or_else(|| {
        BackendError::new(
            "42703",
            format!("column {}.{} does not exist", table.name, name),
        )
    })
}

fn checked_object(
    table: &'static TableDef,
    value: Value,
) -> Result<serde_json::Map<String, Value>, BackendError> {
    let Value::Object(map) = value else {
        return Err(BackendError::new("PGRST102", "row must be a JSON object"));
    };
    for key in map.keys() {
        lookup_column(table, key)?;
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builds_select() {
        let q = Select::from("programs")
            .and_then(|q| q.embed("category"))
            .and_then(|q| q.eq("is_public", true))
            .and_then(|q| q.order("display_order", true))
            .map(|q| q.limit(3))
            .unwrap();
        assert_eq!(q.table.name, "programs");
        assert_eq!(q.embeds, vec!["category"]);
        assert_eq!(q.filters[0].value, json!(true));
        assert_eq!(q.limit, Some(3));
    }

    #[test]
    fn unknown_identifiers_are_rejected() {
        let err = Select::from("programs").and_then(|q| q.eq("nope", 1)).unwrap_err();
        assert!(err.has_code("42703"));
        assert!(Select::from("users").is_err());
        assert!(Select::from("trustees").and_then(|q| q.embed("category")).is_err());
    }

    #[test]
    fn insert_rejects_unknown_keys() {
        assert!(Insert::new("contact_inquiries", json!({ "email": "a@b.c" })).is_ok());
        let err = Insert::new("contact_inquiries", json!({ "password": "x" })).unwrap_err();
        assert!(err.message.unwrap().contains("password"));
        assert!(Insert::new("contact_inquiries", json!([1])).is_err());
    }
}
