mod common;

use common::{SAM_ID, fixture_service, fixture_service_with, owners, params};
use todolite::errors::TodoError;
use todolite::todo::{CategoryMatch, NewTodo, QueryOptions};

fn new_todo(owner: &str, body: &str, category: &str) -> NewTodo {
    NewTodo {
        owner: Some(owner.into()),
        status: None,
        body: Some(body.into()),
        category: Some(category.into()),
    }
}

#[test]
fn no_filters_list_everything_sorted_by_owner() {
    let (svc, _) = fixture_service();
    assert_eq!(owners(&svc, &[]), ["Chris", "Jamie", "Pat", "Sam"]);
}

#[test]
fn filters_are_anded() {
    let (svc, _) = fixture_service();
    assert_eq!(owners(&svc, &[("owner", "a")]), ["Jamie", "Pat", "Sam"]);
    assert_eq!(owners(&svc, &[("owner", "A"), ("status", "false")]), ["Pat", "Sam"]);
    assert_eq!(owners(&svc, &[("category", "software design"), ("status", "true")]), ["Jamie"]);
    assert_eq!(owners(&svc, &[("body", "project"), ("contains", "frogs")]), ["Sam"]);
    assert!(owners(&svc, &[("owner", "chris"), ("status", "incomplete")]).is_empty());
}

#[test]
fn owner_filter_is_literal_text() {
    let (svc, _) = fixture_service();
    assert!(owners(&svc, &[("owner", ".*")]).is_empty());
}

#[test]
fn status_aliases_are_equivalent() {
    let (svc, _) = fixture_service();
    assert_eq!(owners(&svc, &[("status", "complete")]), owners(&svc, &[("status", "true")]));
    assert_eq!(owners(&svc, &[("status", "INCOMPLETE")]), owners(&svc, &[("status", "false")]));
    assert_eq!(owners(&svc, &[("status", "complete")]), ["Chris", "Jamie"]);
}

#[test]
fn unknown_status_names_allowed_values() {
    let (svc, _) = fixture_service();
    let err = svc.list(&params(&[("status", "maybe")])).unwrap_err();
    assert!(matches!(err, TodoError::Validation(_)));
    assert!(err.to_string().contains("complete, incomplete, true, false"));
}

#[test]
fn category_outside_enumeration_is_rejected() {
    let (svc, _) = fixture_service();
    for bad in ["work", "Homework", ""] {
        assert!(matches!(svc.list(&params(&[("category", bad)])), Err(TodoError::Validation(_))), "{bad}");
    }
}

#[test]
fn category_case_follows_configuration() {
    let opts = QueryOptions { category_match: CategoryMatch::Insensitive, ..QueryOptions::default() };
    let (svc, _) = fixture_service_with(opts);
    assert_eq!(owners(&svc, &[("category", "Software Design")]), ["Jamie", "Sam"]);
}

#[test]
fn limit_rules() {
    let (svc, _) = fixture_service();
    for bad in ["0", "-1"] {
        assert!(matches!(svc.list(&params(&[("limit", bad)])), Err(TodoError::Validation(_))));
    }
    assert_eq!(owners(&svc, &[("limit", "2")]), ["Chris", "Jamie"]);
    assert_eq!(owners(&svc, &[("limit", "10")]).len(), 4);
}

#[test]
fn desc_reverses_asc() {
    let (svc, _) = fixture_service();
    let mut asc = owners(&svc, &[("sortby", "body")]);
    let desc = owners(&svc, &[("sortby", "body"), ("sortorder", "desc")]);
    asc.reverse();
    assert_eq!(asc, desc);
}

#[test]
fn sortby_wins_over_order_by() {
    let (svc, _) = fixture_service();
    assert_eq!(owners(&svc, &[("orderBy", "body")]), ["Sam", "Pat", "Jamie", "Chris"]);
    assert_eq!(owners(&svc, &[("orderBy", "body"), ("sortby", "owner")]), ["Chris", "Jamie", "Pat", "Sam"]);
}

#[test]
fn count_ignores_limit_and_sort() {
    let (svc, _) = fixture_service();
    assert_eq!(svc.count(&params(&[("status", "false"), ("limit", "1")])).unwrap(), 2);
    assert_eq!(svc.count(&params(&[])).unwrap(), 4);
}

#[test]
fn lookup_outcomes() {
    let (svc, _) = fixture_service();
    let sam = svc.get(SAM_ID).unwrap();
    assert_eq!(sam.owner, "Sam");
    assert_eq!(sam.body, "Frogs project");
    assert!(!sam.status);

    let err = svc.get("not-an-id").unwrap_err();
    assert!(matches!(err, TodoError::MalformedIdentifier(_)));
    assert!(err.to_string().contains("wasn't a legal identifier"));

    assert!(matches!(svc.get("000000000000000000000000"), Err(TodoError::NotFound(_))));
}

#[test]
fn delete_absent_leaves_collection_unchanged() {
    let (svc, col) = fixture_service();
    assert!(matches!(svc.delete("000000000000000000000000"), Err(TodoError::NotFound(_))));
    assert!(matches!(svc.delete("bogus"), Err(TodoError::NotFound(_))));
    assert_eq!(col.len(), 4);
}

#[test]
fn delete_existing_removes_one() {
    let (svc, col) = fixture_service();
    svc.delete(SAM_ID).unwrap();
    assert_eq!(col.len(), 3);
    assert!(matches!(svc.get(SAM_ID), Err(TodoError::NotFound(_))));
    assert!(matches!(svc.delete(SAM_ID), Err(TodoError::NotFound(_))));
}

#[test]
fn create_rejects_empty_fields() {
    let (svc, col) = fixture_service();
    for bad in [
        new_todo("", "b", "homework"),
        new_todo("o", "", "homework"),
        new_todo("o", "b", ""),
        NewTodo { owner: None, ..new_todo("o", "b", "homework") },
        new_todo("o", "b", "work"),
    ] {
        assert!(matches!(svc.create(bad), Err(TodoError::Validation(_))));
    }
    assert_eq!(col.len(), 4);
}

#[test]
fn created_todo_is_resolvable() {
    let (svc, col) = fixture_service();
    let id = svc.create(new_todo("Kim", "buy milk", "groceries")).unwrap();
    assert_eq!(col.len(), 5);
    let got = svc.get(&id.to_hex()).unwrap();
    assert_eq!(got.id, id);
    assert_eq!(got.owner, "Kim");
    assert!(!got.status);
    assert_eq!(got.category, "groceries");
}
