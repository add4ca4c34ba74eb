//! Recognized query-parameter names and their raw, unvalidated values.

pub const OWNER_KEY: &str = "owner";
pub const BODY_KEY: &str = "body";
pub const CONTAINS_KEY: &str = "contains";
pub const STATUS_KEY: &str = "status";
pub const CATEGORY_KEY: &str = "category";
pub const LIMIT_KEY: &str = "limit";
pub const SORT_BY_KEY: &str = "sortby";
pub const ORDER_BY_KEY: &str = "orderBy";
pub const SORT_ORDER_KEY: &str = "sortorder";

/// Raw list-query parameters. `None` means the parameter was not supplied at all;
/// an empty string is a supplied (empty) value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoQueryParams {
    pub owner: Option<String>,
    pub body: Option<String>,
    pub contains: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
    pub limit: Option<String>,
    pub sort_by: Option<String>,
    pub order_by: Option<String>,
    pub sort_order: Option<String>,
}

impl TodoQueryParams {
    /// Picks the recognized names out of `pairs`; anything else is ignored.
    /// When a name repeats, the last value wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                OWNER_KEY => &mut params.owner,
                BODY_KEY => &mut params.body,
                CONTAINS_KEY => &mut params.contains,
                STATUS_KEY => &mut params.status,
                CATEGORY_KEY => &mut params.category,
                LIMIT_KEY => &mut params.limit,
                SORT_BY_KEY => &mut params.sort_by,
                ORDER_BY_KEY => &mut params.order_by,
                SORT_ORDER_KEY => &mut params.sort_order,
                _ => continue,
            };
            *slot = Some(value.into());
        }
        params
    }

    /// The requested sort key; `sortby` takes precedence over `orderBy`.
    #[must_use]
    pub fn sort_key(&self) -> Option<&str> {
        self.sort_by.as_deref().or(self.order_by.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_keys_are_ignored_and_last_value_wins() {
        let p = TodoQueryParams::from_pairs([
            ("owner", "Pat"),
            ("age", "12"),
            ("owner", "Sam"),
            ("orderBy", "body"),
        ]);
        assert_eq!(p.owner.as_deref(), Some("Sam"));
        assert_eq!(p.sort_key(), Some("body"));
        assert_eq!(p.status, None);
    }

    #[test]
    fn sortby_beats_order_by() {
        let p = TodoQueryParams::from_pairs([("orderBy", "body"), ("sortby", "category")]);
        assert_eq!(p.sort_key(), Some("category"));
    }
}
