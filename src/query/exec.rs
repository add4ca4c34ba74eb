use crate::collection::Collection;
use crate::document::Document;

use super::cursor::Cursor;
use super::eval::{compare_docs, eval_filter};
use super::types::{DeleteReport, Filter, FindOptions, MAX_SORT_FIELDS};

/// Filter, then sort, then cap. The result is fully materialized.
pub fn find_docs(col: &Collection, filter: &Filter, opts: &FindOptions) -> Cursor {
    let start = std::time::Instant::now();
    let mut docs: Vec<Document> =
        col.get_all_documents().into_iter().filter(|d| eval_filter(&d.data, filter)).collect();

    if let Some(sort) = &opts.sort {
        if sort.len() > MAX_SORT_FIELDS {
            log::warn!("sort spec too long: {}", sort.len());
        }
        docs.sort_by(|a, b| compare_docs(&a.data, &b.data, sort));
    }

    if let Some(limit) = opts.limit {
        docs.truncate(limit.get());
    }

    log::debug!(
        target: "todolite::query",
        "{{\"op\":\"find\",\"collection\":\"{}\",\"duration_us\":{},\"result_count\":{},\"limit\":{}}}",
        col.name_str(),
        start.elapsed().as_micros(),
        docs.len(),
        opts.limit.map_or(0, std::num::NonZeroUsize::get)
    );
    Cursor::new(docs)
}

#[must_use]
pub fn count_docs(col: &Collection, filter: &Filter) -> usize {
    if filter.is_match_all() {
        return col.len();
    }
    col.get_all_documents().iter().filter(|d| eval_filter(&d.data, filter)).count()
}

/// Deletes the first document matching `filter`, if any.
pub fn delete_one(col: &Collection, filter: &Filter) -> DeleteReport {
    let removed = col.remove_first_where(|d| eval_filter(&d.data, filter));
    DeleteReport { deleted: u64::from(removed.is_some()) }
}
