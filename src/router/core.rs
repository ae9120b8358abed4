use dashmap::DashMap;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::builder::{ParamSource, UrlBuilder};
use crate::error::{RouteError, RouteResult};
use crate::pattern::{ParamVec, PathPattern, RegexPatternCompiler, UriPatternCompiler};
use crate::route::{Route, RouteRequest};
use crate::runtime_config::RouterConfig;

/// Result of successfully dispatching a request to a route.
///
/// Borrows the matched route from its collection and owns the captured
/// placeholder values.
#[derive(Debug, Clone)]
pub struct RouteMatch<'a, H> {
    /// The winning route
    pub route: &'a Route<H>,
    /// Placeholder values in template order (e.g. `{id}` → `("id", "123")`)
    pub path_params: ParamVec,
}

impl<H> RouteMatch<'_, H> {
    /// Get a path parameter by name
    #[inline]
    #[must_use]
    pub fn get_path_param(&self, name: &str) -> Option<&str> {
        self.path_params
            .iter()
            .rfind(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    /// Convert path_params to a HashMap.
    /// Note: This allocates - use get_path_param() on hot paths instead
    #[must_use]
    pub fn path_params_map(&self) -> HashMap<String, String> {
        self.path_params
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }
}

type PatternCache = DashMap<String, Arc<dyn PathPattern>>;

/// Ordered registry of routes with first-match dispatch and named lookup.
///
/// Registration order is match priority: when two templates accept the same
/// method/path pair, the route registered first wins. Routes are never removed or
/// mutated once registered.
///
/// The pattern compiler and URL builder are injected, never looked up from global
/// state, so a collection can be tested with a fake compiler.
///
/// # Example
///
/// ```rust
/// use http::Method;
/// use routemap::route::{RequestTarget, Route};
/// use routemap::router::RouteCollection;
///
/// let routes = RouteCollection::with_defaults()
///     .add(Route::new(Method::GET, "/users/{id}", "show_user").with_name("user_show"))
///     .add(Route::new(Method::DELETE, "/users/{id}", "delete_user"));
///
/// let request = RequestTarget::new(Method::GET, "/users/42");
/// let route = routes.match_request(&request).unwrap().unwrap();
/// assert_eq!(*route.handler(), "show_user");
///
/// let path = routes.url_for("user_show", &[("id", "42")], false).unwrap();
/// assert_eq!(path, "/users/42");
/// ```
#[derive(Clone)]
pub struct RouteCollection<H> {
    routes: Vec<Route<H>>,
    compiler: Arc<dyn UriPatternCompiler>,
    builder: UrlBuilder,
    /// Compiled patterns keyed by template source, when caching is enabled
    cache: Option<Arc<PatternCache>>,
}

impl<H> RouteCollection<H> {
    /// Create an empty collection using the given compiler and builder.
    /// Pattern caching is off; enable it with [`RouteCollection::with_pattern_cache`].
    pub fn new(compiler: Arc<dyn UriPatternCompiler>, builder: UrlBuilder) -> Self {
        Self {
            routes: Vec::new(),
            compiler,
            builder,
            cache: None,
        }
    }

    /// Regex compiler, default builder, pattern cache enabled.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(Arc::new(RegexPatternCompiler::new()), UrlBuilder::default())
            .with_pattern_cache(true)
    }

    /// Build an empty collection from runtime configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidBaseUrl`] when the configured base URL or base
    /// path is unusable.
    pub fn from_config(config: &RouterConfig) -> RouteResult<Self> {
        let builder = UrlBuilder::new(&config.base_url)?.with_base_path(&config.base_path)?;
        Ok(Self::new(Arc::new(RegexPatternCompiler::new()), builder)
            .with_pattern_cache(config.cache_patterns))
    }

    /// Cache compiled patterns by template source. Match results are identical with
    /// or without the cache; only recompilation is skipped.
    #[must_use]
    pub fn with_pattern_cache(mut self, enabled: bool) -> Self {
        self.cache = enabled.then(|| Arc::new(PatternCache::new()));
        self
    }

    /// Append a route and return the collection for chaining.
    #[must_use]
    pub fn add(mut self, route: Route<H>) -> Self {
        self.push(route);
        self
    }

    /// Append a route in place.
    ///
    /// Always succeeds. A duplicate name is logged and kept; [`get`](Self::get)
    /// keeps returning the first route registered under that name.
    pub fn push(&mut self, route: Route<H>) -> &mut Self {
        if let Some(name) = route.name() {
            if self.get(name).is_some() {
                warn!(
                    route_name = %name,
                    method = %route.method(),
                    uri = %route.uri(),
                    "Duplicate route name registered; lookups return the first registration"
                );
            }
        }
        debug!(
            method = %route.method(),
            uri = %route.uri(),
            route_name = route.name().unwrap_or(""),
            position = self.routes.len(),
            "Route registered"
        );
        self.routes.push(route);
        self
    }

    /// Append a route, refusing a name that is already registered.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::DuplicateRouteName`] and drops the route.
    pub fn try_add(mut self, route: Route<H>) -> RouteResult<Self> {
        if let Some(name) = route.name() {
            if self.get(name).is_some() {
                return Err(RouteError::DuplicateRouteName {
                    name: name.to_string(),
                });
            }
        }
        self.push(route);
        Ok(self)
    }

    /// All routes in registration order.
    #[must_use]
    pub fn all(&self) -> &[Route<H>] {
        &self.routes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Route<H>> {
        self.routes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    #[must_use]
    pub fn builder(&self) -> &UrlBuilder {
        &self.builder
    }

    /// First route registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Route<H>> {
        self.routes.iter().find(|r| r.name() == Some(name))
    }

    /// First route registered under `name`, or `default`.
    #[must_use]
    pub fn get_or<'a>(&'a self, name: &str, default: &'a Route<H>) -> &'a Route<H> {
        self.get(name).unwrap_or(default)
    }

    /// Select the route that should service `request`.
    ///
    /// Routes are tried in registration order. For each one the literal template is
    /// rendered through the URL builder, compiled, and accepted only if the request
    /// method equals the route method exactly and the pattern matches the whole
    /// request path.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(route))` - the first route satisfying both conditions
    /// * `Ok(None)` - no route matches (callers typically answer 404)
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::PatternCompilation`] if a template tried before the
    /// winning route is malformed.
    pub fn match_request<R>(&self, request: &R) -> RouteResult<Option<&Route<H>>>
    where
        R: RouteRequest + ?Sized,
    {
        let found = self.find(request)?;
        Ok(found.map(|(route, _)| route))
    }

    /// Same dispatch as [`match_request`](Self::match_request), also returning the
    /// captured placeholder values.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::PatternCompilation`] if a template tried before the
    /// winning route is malformed.
    pub fn match_with_params<R>(&self, request: &R) -> RouteResult<Option<RouteMatch<'_, H>>>
    where
        R: RouteRequest + ?Sized,
    {
        let Some((route, pattern)) = self.find(request)? else {
            return Ok(None);
        };
        let path_params = pattern.captures(request.path()).unwrap_or_default();
        Ok(Some(RouteMatch { route, path_params }))
    }

    /// Generate a path (or absolute URL) for the route registered under `name`.
    ///
    /// # Errors
    ///
    /// - [`RouteError::UnknownRouteName`] if no route carries that name
    /// - [`RouteError::MissingRouteParameter`] if a placeholder has no value
    /// - [`RouteError::PatternCompilation`] if the route's template is malformed
    pub fn url_for<P>(&self, name: &str, params: &P, absolute: bool) -> RouteResult<String>
    where
        P: ParamSource + ?Sized,
    {
        let route = self.get(name).ok_or_else(|| RouteError::UnknownRouteName {
            name: name.to_string(),
        })?;
        self.builder.build(route.uri(), params, absolute)
    }

    /// Compile every registered template once, surfacing the first malformed one.
    ///
    /// Optional: matching compiles on demand. Calling this at bootstrap turns a bad
    /// template into a startup failure and, with caching on, warms the cache.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::PatternCompilation`] for the first malformed template.
    pub fn validate(&self) -> RouteResult<()> {
        for route in &self.routes {
            self.pattern_for(route)?;
        }
        info!(
            routes_count = self.routes.len(),
            base_path = %self.builder.base_path(),
            cached = self.cache.is_some(),
            "Routing table validated"
        );
        Ok(())
    }

    fn find<R>(&self, request: &R) -> RouteResult<Option<(&Route<H>, Arc<dyn PathPattern>)>>
    where
        R: RouteRequest + ?Sized,
    {
        let method = request.method();
        let path = request.path();
        debug!(method = %method, path = %path, routes_count = self.routes.len(), "Route match attempt");

        for (position, route) in self.routes.iter().enumerate() {
            let pattern = self.pattern_for(route)?;
            if route.method() == method && pattern.is_match(path) {
                debug!(
                    method = %method,
                    path = %path,
                    route_pattern = %pattern.source(),
                    route_name = route.name().unwrap_or(""),
                    position,
                    "Route matched"
                );
                return Ok(Some((route, pattern)));
            }
        }

        debug!(method = %method, path = %path, "No route matched");
        Ok(None)
    }

    fn pattern_for(&self, route: &Route<H>) -> RouteResult<Arc<dyn PathPattern>> {
        let source = self.builder.template_source(route.uri())?;
        let Some(cache) = &self.cache else {
            return self.compiler.compile(&source);
        };
        if let Some(hit) = cache.get(&source) {
            return Ok(Arc::clone(hit.value()));
        }
        let pattern = self.compiler.compile(&source)?;
        cache.insert(source, Arc::clone(&pattern));
        Ok(pattern)
    }
}

impl<H> Default for RouteCollection<H> {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl<'a, H> IntoIterator for &'a RouteCollection<H> {
    type Item = &'a Route<H>;
    type IntoIter = std::slice::Iter<'a, Route<H>>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

impl<H> fmt::Debug for RouteCollection<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let routes: Vec<String> = self.routes.iter().map(ToString::to_string).collect();
        f.debug_struct("RouteCollection")
            .field("routes", &routes)
            .field("compiler", &self.compiler)
            .field("builder", &self.builder)
            .field("cached", &self.cache.is_some())
            .finish()
    }
}
