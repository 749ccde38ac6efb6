//! Key case conversion at the HTTP boundary: request keys camelCase -> snake_case
//! (the model's field names), response keys snake_case -> camelCase (for the client).

use serde_json::{Map, Value};

/// Fields whose object value is keyed by data (fiscal categories, objective
/// names, months) rather than by field names; their inner keys are left alone.
const DATA_KEYED_FIELDS: &[&str] = &[
    "income_breakdown",
    "expense_breakdown",
    "program_allocation",
    "impact_metrics",
    "by_objective",
    "by_month",
    "by_category",
    "income_sources",
    "expense_categories",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Case {
    Camel,
    Snake,
}

impl Case {
    pub fn convert(&self, s: &str) -> String {
        match self {
            Case::Camel => to_camel_case(s),
            Case::Snake => to_snake_case(s),
        }
    }
}

/// "created_at" -> "createdAt"
pub fn to_camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut capitalize_next = false;
    for c in s.chars() {
        if c == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            out.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// "createdAt" -> "created_at"
pub fn to_snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Rename every object key in `value` (recursively) to `case`, except inside
/// data-keyed fields.
pub fn rekey(value: &mut Value, case: Case) {
    match value {
        Value::Object(map) => rekey_object(map, case),
        Value::Array(items) => {
            for v in items.iter_mut() {
                rekey(v, case);
            }
        }
        _ => {}
    }
}

fn rekey_object(map: &mut Map<String, Value>, case: Case) {
    let old = std::mem::take(map);
    for (k, mut v) in old {
        let snake = to_snake_case(&k);
        if !DATA_KEYED_FIELDS.contains(&snake.as_str()) {
            rekey(&mut v, case);
        }
        map.insert(case.convert(&k), v);
    }
}
