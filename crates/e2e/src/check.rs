//! Evaluating spec expectations against a response

use fakestore_client::ApiResponse;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::spec::{Expectations, FieldAssertion};

/// Outcome of one expectation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssertionResult {
    pub description: String,
    pub passed: bool,
    pub detail: Option<String>,
}

impl AssertionResult {
    fn pass(description: String) -> Self {
        Self { description, passed: true, detail: None }
    }

    fn fail(description: String, detail: String) -> Self {
        Self { description, passed: false, detail: Some(detail) }
    }
}

/// Check every expectation in order, stopping after the first failure
pub fn evaluate(expect: &Expectations, response: &ApiResponse) -> Vec<AssertionResult> {
    let mut results = Vec::new();

    if let Some(ok) = expect.ok {
        let desc = format!("status is {}2xx", if ok { "" } else { "not " });
        if response.is_ok() == ok {
            results.push(AssertionResult::pass(desc));
        } else {
            results.push(AssertionResult::fail(desc, format!("got {}", response.status())));
            return results;
        }
    }

    if let Some(status) = expect.status {
        let desc = format!("status == {}", status);
        if response.status() == status {
            results.push(AssertionResult::pass(desc));
        } else {
            results.push(AssertionResult::fail(
                desc,
                format!("Expected {}, but got {}", status, response.status()),
            ));
            return results;
        }
    }

    if let Some(text) = &expect.text {
        let desc = format!("body == {:?}", text);
        if response.text() == text {
            results.push(AssertionResult::pass(desc));
        } else {
            results.push(AssertionResult::fail(desc, format!("body was {:?}", response.text())));
            return results;
        }
    }

    if expect.array_len.is_none() && expect.fields.is_empty() {
        return results;
    }

    let body = match response.json_value() {
        Ok(body) => body,
        Err(e) => {
            results.push(AssertionResult::fail("body is JSON".to_string(), e.to_string()));
            return results;
        }
    };

    if let Some(len) = expect.array_len {
        let desc = format!("body is an array of {}", len);
        match body.as_array() {
            Some(items) if items.len() == len => results.push(AssertionResult::pass(desc)),
            Some(items) => {
                results.push(AssertionResult::fail(desc, format!("array has {} items", items.len())));
                return results;
            }
            None => {
                results.push(AssertionResult::fail(desc, "Response is not a list".to_string()));
                return results;
            }
        }
    }

    for field in &expect.fields {
        let result = check_field(field, &body);
        let failed = !result.passed;
        results.push(result);
        if failed {
            break;
        }
    }

    results
}

fn check_field(field: &FieldAssertion, body: &Value) -> AssertionResult {
    let desc = describe_field(field);

    let value = match (lookup(body, &field.path), field.present) {
        (None, Some(false)) => return AssertionResult::pass(desc),
        (Some(value), Some(false)) => {
            return AssertionResult::fail(desc, format!("'{}' should be absent, got {}", field.path, value))
        }
        (Some(value), _) => value,
        (None, _) => return AssertionResult::fail(desc, format!("'{}' is missing", field.path)),
    };

    if field.non_empty && !is_non_empty(value) {
        return AssertionResult::fail(desc, format!("'{}' is empty: {}", field.path, value));
    }

    if let Some(expected) = &field.equals {
        if !values_match(expected, value) {
            return AssertionResult::fail(desc, format!("expected {}, got {}", expected, value));
        }
    }

    AssertionResult::pass(desc)
}

fn describe_field(field: &FieldAssertion) -> String {
    if field.present == Some(false) {
        return format!("{} absent", field.path);
    }

    let mut parts = Vec::new();
    if field.present == Some(true) || (field.equals.is_none() && !field.non_empty) {
        parts.push("present".to_string());
    }
    if field.non_empty {
        parts.push("non-empty".to_string());
    }
    if let Some(expected) = &field.equals {
        parts.push(format!("== {}", expected));
    }
    format!("{} {}", field.path, parts.join(", "))
}

/// Resolve a dotted path; numeric segments index into arrays
pub fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(value);
    }

    path.split('.').try_fold(value, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

fn is_non_empty(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        Value::Bool(_) | Value::Number(_) => true,
    }
}

/// JSON equality, except that numbers compare by value (`100` == `100.0`)
fn values_match(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Number(a), Value::Number(b)) => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => a == b,
            _ => a == b,
        },
        _ => expected == actual,
    }
}
