use crate::document::ID_FIELD;
use crate::errors::DbError;
use crate::types::DocumentId;
use bson::Bson;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

// Safety limits to prevent resource abuse
pub(crate) const MAX_PATH_DEPTH: usize = 32;
pub(crate) const MAX_SORT_FIELDS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub order: Order,
}

/// Options for `find_docs`.
///
/// Semantics:
/// - Sorting is stable; documents comparing equal keep insertion order.
/// - `limit: None` means no limiting step at all.
#[derive(Debug, Clone, Default)]
pub struct FindOptions {
    pub sort: Option<Vec<SortSpec>>,
    pub limit: Option<NonZeroUsize>,
}

/// Predicate over a bson document.
#[derive(Debug, Clone)]
pub enum Filter {
    True,
    And(Vec<Filter>),
    /// Case-insensitive substring match of a string field. Built from literal text, see `Filter::text_match`.
    TextMatch { path: String, pattern: Regex },
    /// Whole-string equality on a string field.
    ExactMatch { path: String, value: String, case_insensitive: bool },
    /// Bson equality on any field.
    Equality { path: String, value: Bson },
}

impl Filter {
    /// Substring clause for `needle`. Regex metacharacters in `needle` are escaped, so the
    /// caller's text is never interpreted as a pattern.
    ///
    /// # Errors
    /// Returns `DbError::QueryError` when the escaped pattern exceeds the regex size limit.
    pub fn text_match(path: impl Into<String>, needle: &str) -> Result<Self, DbError> {
        let pattern = RegexBuilder::new(&regex::escape(needle))
            .case_insensitive(true)
            .build()
            .map_err(|e| DbError::QueryError(e.to_string()))?;
        Ok(Self::TextMatch { path: path.into(), pattern })
    }

    #[must_use]
    pub fn id_eq(id: DocumentId) -> Self {
        Self::Equality { path: ID_FIELD.to_string(), value: Bson::from(id) }
    }

    /// Conjunction of `clauses`; no clauses means match everything.
    #[must_use]
    pub fn all(clauses: Vec<Self>) -> Self {
        if clauses.is_empty() { Self::True } else { Self::And(clauses) }
    }

    #[must_use]
    pub const fn is_match_all(&self) -> bool {
        matches!(self, Self::True)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DeleteReport {
    pub deleted: u64,
}
