// Submodules for separation of concerns
mod cursor;
mod eval;
mod exec;
mod types;

pub use cursor::Cursor;
pub use eval::{compare_bson, eval_filter};
pub use exec::{count_docs, delete_one, find_docs};
pub use types::{DeleteReport, Filter, FindOptions, Order, SortSpec};
