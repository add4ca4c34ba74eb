//! Turns raw list-query parameters into a validated filter, sort, and limit.

use std::num::NonZeroUsize;

use bson::Bson;

use crate::errors::TodoError;
use crate::query::{Filter, FindOptions, Order, SortSpec};

use super::model::{BODY_FIELD, CATEGORY_FIELD, Category, CategoryMatch, OWNER_FIELD, STATUS_FIELD};
use super::params::{CATEGORY_KEY, LIMIT_KEY, STATUS_KEY, TodoQueryParams};

pub const DEFAULT_SORT_KEY: &str = "owner";

/// Deployment-level knobs for query construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    pub default_sort_key: String,
    pub category_match: CategoryMatch,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self { default_sort_key: DEFAULT_SORT_KEY.to_string(), category_match: CategoryMatch::default() }
    }
}

/// A fully validated list query.
#[derive(Debug, Clone)]
pub struct TodoQuery {
    pub filter: Filter,
    pub sort: SortSpec,
    pub limit: Option<NonZeroUsize>,
}

impl TodoQuery {
    #[must_use]
    pub fn find_options(&self) -> FindOptions {
        FindOptions { sort: Some(vec![self.sort.clone()]), limit: self.limit }
    }
}

/// Builds the whole query. The first invalid parameter aborts construction.
///
/// # Errors
/// `TodoError::Validation` for a bad `status`, `category`, or `limit`.
pub fn build_query(params: &TodoQueryParams, opts: &QueryOptions) -> Result<TodoQuery, TodoError> {
    Ok(TodoQuery {
        filter: build_filter(params, opts)?,
        sort: build_sort(params, opts),
        limit: parse_limit(params.limit.as_deref())?,
    })
}

/// ANDs one clause per supplied filter parameter; no parameters yields `Filter::True`.
///
/// # Errors
/// `TodoError::Validation` for a bad `status` or `category`.
pub fn build_filter(params: &TodoQueryParams, opts: &QueryOptions) -> Result<Filter, TodoError> {
    let mut clauses = Vec::new();
    if let Some(owner) = &params.owner {
        clauses.push(Filter::text_match(OWNER_FIELD, owner)?);
    }
    for needle in [&params.body, &params.contains].into_iter().flatten() {
        clauses.push(Filter::text_match(BODY_FIELD, needle)?);
    }
    if let Some(raw) = &params.status {
        clauses.push(Filter::Equality { path: STATUS_FIELD.to_string(), value: Bson::Boolean(parse_status(raw)?) });
    }
    if let Some(raw) = &params.category {
        let category = parse_category(raw, opts.category_match)?;
        clauses.push(Filter::ExactMatch {
            path: CATEGORY_FIELD.to_string(),
            value: category.as_str().to_string(),
            case_insensitive: opts.category_match == CategoryMatch::Insensitive,
        });
    }
    Ok(Filter::all(clauses))
}

/// Single-key sort; an empty key falls back to the default. Only `desc` (any case) reverses; every other direction is ascending.
#[must_use]
pub fn build_sort(params: &TodoQueryParams, opts: &QueryOptions) -> SortSpec {
    let field = params
        .sort_key()
        .filter(|k| !k.is_empty())
        .unwrap_or(opts.default_sort_key.as_str())
        .to_string();
    let order = match params.sort_order.as_deref() {
        Some(dir) if dir.eq_ignore_ascii_case("desc") => Order::Desc,
        _ => Order::Asc,
    };
    SortSpec { field, order }
}

/// `complete`/`true` and `incomplete`/`false`, case-insensitively.
///
/// # Errors
/// `TodoError::Validation` naming the allowed values.
pub fn parse_status(raw: &str) -> Result<bool, TodoError> {
    match raw.to_ascii_lowercase().as_str() {
        "complete" | "true" => Ok(true),
        "incomplete" | "false" => Ok(false),
        _ => Err(TodoError::Validation(format!(
            "{STATUS_KEY} must be one of complete, incomplete, true, false; got '{raw}'"
        ))),
    }
}

/// # Errors
/// `TodoError::Validation` when `raw` is outside the category enumeration.
pub fn parse_category(raw: &str, matching: CategoryMatch) -> Result<Category, TodoError> {
    Category::parse(raw, matching).ok_or_else(|| {
        TodoError::Validation(format!(
            "{CATEGORY_KEY} must be one of {}; got '{raw}'",
            Category::allowed_list()
        ))
    })
}

/// Absent means unlimited. Present must be a positive integer.
///
/// # Errors
/// `TodoError::Validation` for zero, negative, or non-numeric values.
pub fn parse_limit(raw: Option<&str>) -> Result<Option<NonZeroUsize>, TodoError> {
    let Some(raw) = raw else { return Ok(None) };
    raw.parse::<NonZeroUsize>()
        .map(Some)
        .map_err(|_| TodoError::Validation(format!("{LIMIT_KEY} must be a positive integer; got '{raw}'")))
}
