//! Seed loading: a JSON array or NDJSON file of todo documents.

use crate::collection::Collection;
use crate::document::{Document, ID_FIELD};
use crate::errors::DbError;
use crate::todo::Todo;
use bson::oid::ObjectId;
use bson::{Bson, Document as BsonDocument};
use serde_json::Value;
use std::path::Path;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub inserted: u64,
}

/// Loads every record in `path` into `collection`, in file order.
///
/// Records are stored as given; only `_id` is normalized. A 24-hex string or an extended-JSON
/// `{"$oid": "..."}` becomes an ObjectId, and a missing `_id` gets a fresh one. Each record must
/// decode as a todo; `category` is not checked against the enumeration.
///
/// # Errors
/// Fails on I/O errors, malformed JSON, non-object or non-todo records, an `_id` that is not an
/// ObjectId, or an `_id` already present. Records before the failing one stay inserted.
pub fn load_seed(path: &Path, collection: &Collection) -> Result<ImportReport, DbError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| DbError::Io(format!("{}: {e}", path.display())))?;
    let mut report = ImportReport::default();
    if text.trim_start().starts_with('[') {
        let Value::Array(records) = serde_json::from_str::<Value>(&text)? else {
            return Err(DbError::Decode("expected JSON array".into()));
        };
        for (idx, v) in records.into_iter().enumerate() {
            insert_record(collection, v, &format!("record {idx}"))?;
            report.inserted += 1;
        }
    } else {
        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let v: Value = serde_json::from_str(line)
                .map_err(|e| DbError::Decode(format!("line {}: {e}", line_no + 1)))?;
            insert_record(collection, v, &format!("line {}", line_no + 1))?;
            report.inserted += 1;
        }
    }
    log::info!("seeded {} todos from {}", report.inserted, path.display());
    Ok(report)
}

fn insert_record(collection: &Collection, v: Value, at: &str) -> Result<(), DbError> {
    let doc = Document::new(to_seed_document(v)?);
    Todo::from_document(&doc.data).map_err(|e| DbError::Decode(format!("{at}: {e}")))?;
    collection.insert_document(doc)?;
    Ok(())
}

fn to_seed_document(v: Value) -> Result<BsonDocument, DbError> {
    let map = match v {
        Value::Object(map) => map,
        other => return Err(DbError::Decode(format!("seed record is not an object: {other}"))),
    };
    let mut doc = BsonDocument::new();
    for (k, val) in map {
        let b = if k == ID_FIELD { Bson::ObjectId(parse_seed_id(&val)?) } else { json_to_bson(val) };
        doc.insert(k, b);
    }
    Ok(doc)
}

fn parse_seed_id(v: &Value) -> Result<ObjectId, DbError> {
    let hex = match v {
        Value::String(s) => s.as_str(),
        Value::Object(m) => m.get("$oid").and_then(Value::as_str).unwrap_or_default(),
        _ => "",
    };
    ObjectId::parse_str(hex).map_err(|_| DbError::InvalidDocumentId(v.to_string()))
}

fn json_to_bson(v: Value) -> Bson {
    match v {
        Value::Null => Bson::Null,
        Value::Bool(b) => Bson::Boolean(b),
        Value::Number(n) => n.as_i64().map_or_else(|| Bson::Double(n.as_f64().unwrap_or(f64::NAN)), Bson::Int64),
        Value::String(s) => Bson::String(s),
        Value::Array(a) => Bson::Array(a.into_iter().map(json_to_bson).collect()),
        Value::Object(m) => Bson::Document(m.into_iter().map(|(k, v)| (k, json_to_bson(v))).collect()),
    }
}
