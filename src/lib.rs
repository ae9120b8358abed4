//! # routemap
//!
//! **routemap** is the route-definition and dispatch layer of a request-handling
//! framework. It registers named, method-scoped URI templates, picks the single
//! best-matching route for each incoming request, and builds concrete paths from
//! templates for link generation.
//!
//! ## Architecture
//!
//! - **[`route`]** - `Route` value object and the `RouteRequest` view of a request
//! - **[`pattern`]** - Template tokenizer and the regex-backed pattern compiler
//! - **[`builder`]** - `UrlBuilder`: template + parameters → path or absolute URL
//! - **[`router`]** - `RouteCollection`: ordered registry, first-match dispatch, named lookup
//! - **[`error`]** - `RouteError` taxonomy
//! - **[`runtime_config`]** - Environment / YAML configuration
//! - **[`logging`]** - tracing subscriber setup for binaries
//!
//! ### Request Handling Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Caller as Dispatcher (caller)
//!     participant Routes as RouteCollection
//!     participant Builder as UrlBuilder
//!     participant Compiler as UriPatternCompiler
//!
//!     Caller->>Routes: match_request(GET /users/42)
//!     loop each route in registration order
//!         Routes->>Builder: template_source("/users/{id}")
//!         Builder-->>Routes: "/users/{id}" (under base path)
//!         Routes->>Compiler: compile(source)
//!         Compiler-->>Routes: ^/users/([^/]+)$
//!         Routes->>Routes: method == GET && is_match(path)
//!     end
//!     Routes-->>Caller: Some(route) | None
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use http::Method;
//! use routemap::route::{RequestTarget, Route};
//! use routemap::router::RouteCollection;
//!
//! let routes = RouteCollection::with_defaults()
//!     .add(Route::new(Method::GET, "/users/{id}", "get_user").with_name("user_show"))
//!     .add(Route::new(Method::POST, "/checkout", "checkout").with_name("checkout"));
//!
//! // Dispatch
//! let request = RequestTarget::new(Method::GET, "/users/42");
//! let route = routes.match_request(&request)?.expect("route");
//! assert_eq!(*route.handler(), "get_user");
//!
//! // Reverse generation
//! assert_eq!(routes.url_for("user_show", &[("id", "42")], false)?, "/users/42");
//! # Ok::<(), routemap::RouteError>(())
//! ```
//!
//! ## Concurrency
//!
//! Routes are registered at bootstrap; afterwards a `RouteCollection` is only read,
//! and matching is synchronous, CPU-only work that needs no locking. Tables that
//! change while requests are in flight go through [`router::SharedRouteCollection`],
//! which publishes complete copies.

pub mod builder;
pub mod cli;
pub mod error;
pub mod logging;
pub mod pattern;
pub mod route;
pub mod router;
pub mod runtime_config;

pub use builder::{ParamSource, UrlBuilder};
pub use error::{RouteError, RouteResult, TemplateErrorKind};
pub use pattern::{CompiledPattern, PathPattern, RegexPatternCompiler, UriPatternCompiler};
pub use route::{RequestTarget, Route, RouteRequest};
pub use router::{RouteCollection, RouteMatch, SharedRouteCollection};
pub use runtime_config::RouterConfig;
