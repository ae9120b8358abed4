use http::Method;
use std::fmt;

/// One registered endpoint: method, URI template, optional name and handler.
///
/// Fields are fixed at construction. [`Route::with_name`] consumes the route, so a
/// name can only be attached before the route is handed to a collection.
///
/// # Example
///
/// ```rust
/// use http::Method;
/// use routemap::route::Route;
///
/// let route = Route::new(Method::GET, "/users/{id}", "show_user").with_name("user_show");
/// assert_eq!(route.uri(), "/users/{id}");
/// assert_eq!(route.name(), Some("user_show"));
/// assert_eq!(*route.handler(), "show_user");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<H> {
    method: Method,
    uri: String,
    name: Option<String>,
    handler: H,
}

impl<H> Route<H> {
    /// Create an unnamed route.
    pub fn new(method: Method, uri: impl Into<String>, handler: H) -> Self {
        Self {
            method,
            uri: uri.into(),
            name: None,
            handler,
        }
    }

    /// Attach a name used by [`RouteCollection::get`](crate::router::RouteCollection::get)
    /// and reverse URL generation.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The raw URI template, placeholders intact.
    #[inline]
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn handler(&self) -> &H {
        &self.handler
    }
}

impl<H> fmt::Display for Route<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} {} ({})", self.method, self.uri, name),
            None => write!(f, "{} {}", self.method, self.uri),
        }
    }
}

/// The view of an incoming request that dispatch reads.
pub trait RouteRequest {
    fn method(&self) -> &Method;
    /// Request path without query string.
    fn path(&self) -> &str;
}

/// Minimal owned request: a method and a path.
///
/// Useful for tests, tooling, and callers whose transport does not use `http` types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTarget {
    method: Method,
    path: String,
}

impl RequestTarget {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
        }
    }

    /// Parse the method token. Comparison later is exact, so `"get"` is an
    /// extension method distinct from `GET`.
    pub fn parse(method: &str, path: impl Into<String>) -> Result<Self, http::method::InvalidMethod> {
        Ok(Self::new(Method::from_bytes(method.as_bytes())?, path))
    }
}

impl RouteRequest for RequestTarget {
    fn method(&self) -> &Method {
        &self.method
    }

    fn path(&self) -> &str {
        &self.path
    }
}

impl<B> RouteRequest for http::Request<B> {
    fn method(&self) -> &Method {
        http::Request::method(self)
    }

    fn path(&self) -> &str {
        self.uri().path()
    }
}

impl<T: RouteRequest + ?Sized> RouteRequest for &T {
    fn method(&self) -> &Method {
        (**self).method()
    }

    fn path(&self) -> &str {
        (**self).path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_accessors() {
        let route = Route::new(Method::POST, "/orders", 7u32);
        assert_eq!(route.method(), &Method::POST);
        assert_eq!(route.uri(), "/orders");
        assert_eq!(route.name(), None);
        assert_eq!(*route.handler(), 7);
    }

    #[test]
    fn test_route_display() {
        let route = Route::new(Method::GET, "/cart", ()).with_name("checkout");
        assert_eq!(route.to_string(), "GET /cart (checkout)");
    }

    #[test]
    fn test_request_target_parse_is_case_sensitive() {
        let upper = RequestTarget::parse("GET", "/").unwrap();
        let lower = RequestTarget::parse("get", "/").unwrap();
        assert_eq!(upper.method(), &Method::GET);
        assert_ne!(lower.method(), &Method::GET);
    }

    #[test]
    fn test_request_target_parse_rejects_bad_token() {
        assert!(RequestTarget::parse("GE T", "/").is_err());
    }

    #[test]
    fn test_http_request_path_excludes_query() {
        let req = http::Request::builder()
            .method(Method::GET)
            .uri("http://example.com/users/42?tab=posts")
            .body(())
            .unwrap();
        assert_eq!(RouteRequest::path(&req), "/users/42");
        assert_eq!(RouteRequest::method(&req), &Method::GET);
    }
}
