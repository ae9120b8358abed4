//! # Pattern Module
//!
//! Compiles human-authored URI templates into anchored matchers.
//!
//! ## Overview
//!
//! A template such as `/users/{id}/posts` is tokenized into literal runs and named
//! placeholders. The default [`RegexPatternCompiler`] then:
//!
//! - escapes every literal run, since template text is ordinary path text
//! - maps each `{name}` placeholder to `([^/]+)`, so it matches exactly one
//!   segment and never crosses a `/`
//! - anchors the result at both ends, so `/users/{id}` never matches `/users/42/edit`
//!
//! ```text
//! /users/{id}/posts  →  ^/users/([^/]+)/posts$   params: ["id"]
//! /files/{name}.json →  ^/files/([^/]+)\.json$   params: ["name"]
//! ```
//!
//! Malformed templates (unbalanced braces, empty or non-identifier names, repeated
//! names) fail with [`RouteError::PatternCompilation`](crate::error::RouteError).
//!
//! ## Extension point
//!
//! Only `{name}` single-segment placeholders are understood. Constraint syntax
//! (`{id:\d+}`), optional segments and multi-segment wildcards are rejected; a
//! different dialect can be plugged into the router through [`UriPatternCompiler`].

mod compiler;
mod template;

pub use compiler::{
    CompiledPattern, ParamVec, PathPattern, RegexPatternCompiler, UriPatternCompiler,
    MAX_INLINE_PARAMS,
};
pub use template::{placeholder_names, tokenize, Token};
