// Sale-deed generation: field validation, template rendering, handlers.
// Pagination and PDF assembly live in `layout` and `pdf`; handlers here only
// orchestrate validate → render → paginate → assemble → store.

pub mod fields;
pub mod handlers;
pub mod template;
