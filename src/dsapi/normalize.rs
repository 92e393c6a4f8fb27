//! Response shape normalization
//!
//! The records endpoint has been seen returning a Solr envelope, a bare
//! `docs` object, and other objects. Only the first is documented.

use serde_json::Value;

/// Which branch produced the records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// `{"response": {"docs": [...], "numFound": n}}`
    Solr,
    /// `{"docs": [...]}`
    Docs,
    /// Any other object, kept whole as one record
    SingleObject,
    /// Not an object at all
    Unrecognized,
}

/// Normalized records from one response
#[derive(Debug, Clone, PartialEq)]
pub struct Records {
    pub docs: Vec<Value>,
    pub total_found: u64,
    pub shape: ResponseShape,
}

impl Records {
    fn new(docs: Vec<Value>, total_found: u64, shape: ResponseShape) -> Self {
        Self {
            docs,
            total_found,
            shape,
        }
    }
}

/// Normalize a decoded response body.
///
/// Precedence: `response` key, then `docs` key, then the object itself.
/// Non-object bodies give zero records.
pub fn normalize(body: Value) -> Records {
    let Value::Object(mut map) = body else {
        return Records::new(Vec::new(), 0, ResponseShape::Unrecognized);
    };

    if let Some(response) = map.remove("response") {
        let docs = array_or_empty(response.get("docs"));
        let total = response
            .get("numFound")
            .and_then(Value::as_u64)
            .unwrap_or(0);
        return Records::new(docs, total, ResponseShape::Solr);
    }

    if let Some(docs) = map.remove("docs") {
        let docs = array_or_empty(Some(&docs));
        let total = docs.len() as u64;
        return Records::new(docs, total, ResponseShape::Docs);
    }

    Records::new(vec![Value::Object(map)], 1, ResponseShape::SingleObject)
}

fn array_or_empty(value: Option<&Value>) -> Vec<Value> {
    value
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}
