#![allow(dead_code)]

use bson::{doc, oid::ObjectId, Bson};
use std::sync::Arc;
use todolite::collection::Collection;
use todolite::document::Document;
use todolite::todo::{QueryOptions, TodoQueryParams, TodoService};

pub const SAM_ID: &str = "5f0c9a4e2b8d3c1a7e6f4b21";

/// The four-record fixture, in insertion order: Chris, Pat, Jamie, Sam.
pub fn fixture_collection() -> Arc<Collection> {
    let col = Arc::new(Collection::new("todos"));
    col.insert_document(Document::new(doc! {
        "owner": "Chris", "status": true, "body": "UMM homework", "category": "homework"
    })).unwrap();
    col.insert_document(Document::new(doc! {
        "owner": "Pat", "status": false, "body": "IBM work", "category": "work"
    })).unwrap();
    col.insert_document(Document::new(doc! {
        "owner": "Jamie", "status": true, "body": "OHMNET project", "category": "software design"
    })).unwrap();
    let sam = ObjectId::parse_str(SAM_ID).unwrap();
    col.insert_document(Document::new(doc! {
        "_id": Bson::ObjectId(sam), "owner": "Sam", "status": false, "body": "Frogs project", "category": "software design"
    })).unwrap();
    col
}

pub fn fixture_service() -> (TodoService, Arc<Collection>) {
    fixture_service_with(QueryOptions::default())
}

pub fn fixture_service_with(options: QueryOptions) -> (TodoService, Arc<Collection>) {
    let col = fixture_collection();
    (TodoService::new(col.clone(), options), col)
}

pub fn params(pairs: &[(&str, &str)]) -> TodoQueryParams {
    TodoQueryParams::from_pairs(pairs.iter().copied())
}

pub fn owners(service: &TodoService, pairs: &[(&str, &str)]) -> Vec<String> {
    service.list(&params(pairs)).unwrap().into_iter().map(|t| t.owner).collect()
}
