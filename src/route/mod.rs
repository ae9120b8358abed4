//! # Route Module
//!
//! A [`Route`] is the immutable description of one endpoint: an HTTP method, a URI
//! template such as `/users/{id}`, an optional name used for reverse URL generation,
//! and an opaque handler value that the routing core carries but never inspects.
//!
//! Incoming requests reach the router through the [`RouteRequest`] trait, which only
//! exposes the two fields dispatch needs: the method and the path.

mod core;

pub use core::{RequestTarget, Route, RouteRequest};
