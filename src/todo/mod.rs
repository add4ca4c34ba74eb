pub mod builder;
pub mod model;
pub mod params;
mod service;

pub use builder::{QueryOptions, TodoQuery, build_query};
pub use model::{Category, CategoryMatch, NewTodo, Todo};
pub use params::TodoQueryParams;
pub use service::TodoService;
