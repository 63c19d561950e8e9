//! Placeholder resolution for Postman-style collections.
//!
//! The pipeline has two pure stages: [`environment::build_variable_map`] turns an
//! environment document into a [`VariableMap`], and [`collection::resolve_requests`]
//! walks a collection tree and substitutes `{{name}}` tokens in every request URL.

pub mod collection;
pub mod environment;
pub mod models;
pub mod placeholder;

pub use collection::{collection_items, resolve_requests, walk, NodeShape, WalkReport};
pub use environment::{build_variable_map, VariableMap};
pub use models::ResolvedRequest;
pub use placeholder::{placeholder_names, substitute, unresolved_placeholders};
