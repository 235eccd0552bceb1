//! Server HTTP handlers.

mod add;
mod index;

pub use add::add_visit_handler;
pub use index::index_handler;
