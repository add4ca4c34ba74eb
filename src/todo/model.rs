use crate::document::ID_FIELD;
use crate::errors::{DbError, TodoError};
use crate::types::DocumentId;
use bson::{Bson, Document as BsonDocument, doc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const OWNER_FIELD: &str = "owner";
pub const STATUS_FIELD: &str = "status";
pub const BODY_FIELD: &str = "body";
pub const CATEGORY_FIELD: &str = "category";

/// The fixed set of todo categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Homework,
    VideoGames,
    SoftwareDesign,
    Groceries,
}

impl Category {
    pub const ALL: [Self; 4] = [Self::Homework, Self::VideoGames, Self::SoftwareDesign, Self::Groceries];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Homework => "homework",
            Self::VideoGames => "video games",
            Self::SoftwareDesign => "software design",
            Self::Groceries => "groceries",
        }
    }

    /// Looks `raw` up in the enumeration under the given case rule.
    #[must_use]
    pub fn parse(raw: &str, matching: CategoryMatch) -> Option<Self> {
        Self::ALL.into_iter().find(|c| match matching {
            CategoryMatch::Sensitive => c.as_str() == raw,
            CategoryMatch::Insensitive => c.as_str().eq_ignore_ascii_case(raw),
        })
    }

    /// `homework, video games, software design, groceries`
    #[must_use]
    pub fn allowed_list() -> String {
        Self::ALL.map(Self::as_str).join(", ")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether `category` values are compared case-sensitively, both when validating and when filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryMatch {
    #[default]
    Sensitive,
    Insensitive,
}

impl FromStr for CategoryMatch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sensitive" => Ok(Self::Sensitive),
            "insensitive" => Ok(Self::Insensitive),
            other => Err(format!("category_match must be 'sensitive' or 'insensitive', got '{other}'")),
        }
    }
}

/// A stored todo as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub owner: String,
    pub status: bool,
    pub body: String,
    pub category: String,
}

impl Todo {
    /// Reads a todo out of a stored bson document.
    ///
    /// # Errors
    /// Returns `DbError::Decode` when a field is missing or has the wrong bson type.
    pub fn from_document(doc: &BsonDocument) -> Result<Self, DbError> {
        let id = match doc.get(ID_FIELD) {
            Some(Bson::ObjectId(oid)) => DocumentId(*oid),
            _ => return Err(DbError::Decode(format!("stored todo has no ObjectId {ID_FIELD}"))),
        };
        let status = match doc.get(STATUS_FIELD) {
            Some(Bson::Boolean(b)) => *b,
            _ => return Err(DbError::Decode(format!("todo {id}: {STATUS_FIELD} is not a boolean"))),
        };
        Ok(Self {
            id,
            owner: string_field(doc, &id, OWNER_FIELD)?,
            status,
            body: string_field(doc, &id, BODY_FIELD)?,
            category: string_field(doc, &id, CATEGORY_FIELD)?,
        })
    }
}

fn string_field(doc: &BsonDocument, id: &DocumentId, key: &str) -> Result<String, DbError> {
    match doc.get(key) {
        Some(Bson::String(s)) => Ok(s.clone()),
        _ => Err(DbError::Decode(format!("todo {id}: {key} is not a string"))),
    }
}

/// Candidate record accepted by the create operation. Every field may be absent on the wire
/// so that validation, not deserialization, decides what is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodo {
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub status: Option<bool>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl NewTodo {
    /// Validates the candidate and converts it into the document to insert (without `_id`).
    /// `status` defaults to `false`.
    ///
    /// # Errors
    /// `TodoError::Validation` naming the first missing/empty field, or an out-of-set category.
    pub fn into_document(self, matching: CategoryMatch) -> Result<BsonDocument, TodoError> {
        let owner = required(self.owner, OWNER_FIELD)?;
        let body = required(self.body, BODY_FIELD)?;
        let raw_category = required(self.category, CATEGORY_FIELD)?;
        let category = Category::parse(&raw_category, matching).ok_or_else(|| {
            TodoError::Validation(format!(
                "todo {CATEGORY_FIELD} must be one of {}; got '{raw_category}'",
                Category::allowed_list()
            ))
        })?;
        Ok(doc! {
            "owner": owner,
            "status": self.status.unwrap_or(false),
            "body": body,
            "category": category.as_str(),
        })
    }
}

fn required(value: Option<String>, field: &str) -> Result<String, TodoError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(TodoError::Validation(format!("todo must have a non-empty {field}"))),
    }
}
