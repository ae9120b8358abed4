//! # Router Module
//!
//! The router module owns the route registry and request dispatch.
//!
//! ## Overview
//!
//! The router is responsible for:
//! - Holding routes in registration order
//! - Matching incoming requests to the first route whose method and template accept them
//! - Looking routes up by name for reverse URL generation
//!
//! ## Architecture
//!
//! ```text
//! bootstrap:   Route ... → RouteCollection::add (append-only, order = priority)
//!
//! per request: for route in registration order
//!                  UrlBuilder::template_source(route.uri)   (base path + literal template)
//!                → UriPatternCompiler::compile               (cached if enabled)
//!                → method == route.method && pattern.is_match(path)
//!              first hit wins, otherwise None
//! ```
//!
//! Compilation happens on demand for each route tried. With the pattern cache
//! enabled the compiled form is reused; match results are the same either way.
//!
//! ## Example
//!
//! ```rust
//! use http::Method;
//! use routemap::route::{RequestTarget, Route};
//! use routemap::router::RouteCollection;
//!
//! let routes = RouteCollection::with_defaults()
//!     .add(Route::new(Method::GET, "/pets", "list_pets"))
//!     .add(Route::new(Method::GET, "/pets/{id}", "get_pet").with_name("pet"));
//!
//! let hit = routes
//!     .match_with_params(&RequestTarget::new(Method::GET, "/pets/123"))
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(*hit.route.handler(), "get_pet");
//! assert_eq!(hit.get_path_param("id"), Some("123"));
//! ```
//!
//! ## Performance
//!
//! Dispatch is a linear scan, O(n) in the number of routes, which suits the small
//! tables this registry targets.

mod core;
mod shared;

pub use core::{RouteCollection, RouteMatch};
pub use shared::SharedRouteCollection;
