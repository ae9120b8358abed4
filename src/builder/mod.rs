//! # Builder Module
//!
//! Reverse routing: turns a URI template plus parameter values into a concrete
//! path or absolute URL for links and redirects.
//!
//! ```text
//! build("/users/{id}", {id: "42"}, false) → /users/42
//! build("/users/{id}", {id: "42"}, true)  → https://example.com/users/42
//! build("/users/{id}", {},         false) → Err(MissingRouteParameter)
//! ```
//!
//! A missing placeholder value is always an error. Emitting the literal `{id}` or
//! an empty segment would produce a syntactically valid path that could match a
//! different route.

mod core;

pub use core::{ParamSource, UrlBuilder, DEFAULT_BASE_URL};
