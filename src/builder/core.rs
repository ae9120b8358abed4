use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::sync::Arc;

use url::Url;

use crate::error::{RouteError, RouteResult};
use crate::pattern::{tokenize, Token};

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost";

/// Lookup of placeholder values by name.
///
/// Implemented for the map and slice shapes callers usually have at hand, including
/// the [`ParamVec`](crate::pattern::ParamVec) captured by a match, so a matched
/// request's parameters can be fed straight back into generation.
pub trait ParamSource {
    fn param(&self, name: &str) -> Option<&str>;
}

impl<S: BuildHasher> ParamSource for HashMap<String, String, S> {
    fn param(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl<S: BuildHasher> ParamSource for HashMap<&str, &str, S> {
    fn param(&self, name: &str) -> Option<&str> {
        self.get(name).copied()
    }
}

impl ParamSource for BTreeMap<String, String> {
    fn param(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl ParamSource for [(&str, &str)] {
    fn param(&self, name: &str) -> Option<&str> {
        self.iter().rfind(|(k, _)| *k == name).map(|(_, v)| *v)
    }
}

impl<const N: usize> ParamSource for [(&str, &str); N] {
    fn param(&self, name: &str) -> Option<&str> {
        self.as_slice().param(name)
    }
}

impl ParamSource for [(Arc<str>, String)] {
    fn param(&self, name: &str) -> Option<&str> {
        self.iter()
            .rfind(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }
}

impl<T: ParamSource + ?Sized> ParamSource for &T {
    fn param(&self, name: &str) -> Option<&str> {
        (**self).param(name)
    }
}

/// Builds concrete paths and URLs from URI templates.
///
/// Holds the application's base URL (for absolute links) and an optional base path
/// that mounts every route under a common prefix such as `/api/v1`. The same
/// builder renders the template source the router compiles, so generated paths and
/// matched paths always agree on the prefix.
///
/// # Example
///
/// ```rust
/// use routemap::builder::UrlBuilder;
///
/// let builder = UrlBuilder::new("https://shop.example.com").unwrap();
/// let params = [("id", "42")];
/// assert_eq!(builder.build("/users/{id}", &params, false).unwrap(), "/users/42");
/// assert_eq!(
///     builder.build("/users/{id}", &params, true).unwrap(),
///     "https://shop.example.com/users/42"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    /// Absolute base URL without trailing slash
    base_url: String,
    /// Empty, or `/segment[/segment...]` without trailing slash
    base_path: String,
}

impl UrlBuilder {
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidBaseUrl`] unless `base_url` is an absolute
    /// `http`/`https` URL with a host and no query or fragment.
    pub fn new(base_url: &str) -> RouteResult<Self> {
        Ok(Self {
            base_url: validate_base_url(base_url)?,
            base_path: String::new(),
        })
    }

    /// Mount all routes under `base_path`. `""` and `"/"` clear the prefix.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidBaseUrl`] if the prefix contains placeholders or
    /// unbalanced braces; the base path is literal text.
    pub fn with_base_path(mut self, base_path: &str) -> RouteResult<Self> {
        let trimmed = base_path.trim().trim_end_matches('/');
        let literal = matches!(tokenize(trimmed).as_deref(), Ok([]) | Ok([Token::Literal(_)]));
        if !literal {
            return Err(RouteError::InvalidBaseUrl {
                url: base_path.to_string(),
                reason: "base path must be literal text without placeholders".to_string(),
            });
        }
        self.base_path = if trimmed.is_empty() {
            String::new()
        } else if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        };
        Ok(self)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Substitute placeholder values into `template`.
    ///
    /// Values are percent-encoded, so a value containing `/` stays inside its
    /// segment. Entries in `params` without a matching placeholder are ignored.
    /// With `absolute`, the configured base URL is prepended; otherwise the result
    /// is root-relative.
    ///
    /// # Errors
    ///
    /// - [`RouteError::PatternCompilation`] for a malformed template
    /// - [`RouteError::MissingRouteParameter`] when a placeholder has no value, or an
    ///   empty one (an empty segment could never match the route it came from)
    pub fn build<P>(&self, template: &str, params: &P, absolute: bool) -> RouteResult<String>
    where
        P: ParamSource + ?Sized,
    {
        let tokens = tokenize(template)?;
        let mut path = String::with_capacity(template.len() + 16);
        for token in tokens {
            match token {
                Token::Literal(text) => path.push_str(text),
                Token::Placeholder(name) => match params.param(name) {
                    Some(value) if !value.is_empty() => {
                        path.push_str(&urlencoding::encode(value));
                    }
                    _ => {
                        return Err(RouteError::MissingRouteParameter {
                            template: template.to_string(),
                            parameter: name.to_string(),
                        });
                    }
                },
            }
        }

        let path = self.mount(&path);
        if absolute {
            Ok(format!("{}{}", self.base_url, path))
        } else {
            Ok(path)
        }
    }

    /// Render the literal template (placeholders intact) under the base path.
    ///
    /// This is the source string the router hands to the pattern compiler.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::PatternCompilation`] for a malformed template.
    pub fn template_source(&self, template: &str) -> RouteResult<String> {
        tokenize(template)?;
        Ok(self.mount(template))
    }

    fn mount(&self, path: &str) -> String {
        let path: Cow<'_, str> = if path.starts_with('/') {
            Cow::Borrowed(path)
        } else {
            Cow::Owned(format!("/{path}"))
        };
        if self.base_path.is_empty() {
            path.into_owned()
        } else if path == "/" {
            self.base_path.clone()
        } else {
            format!("{}{}", self.base_path, path)
        }
    }
}

impl Default for UrlBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            base_path: String::new(),
        }
    }
}

fn validate_base_url(raw: &str) -> RouteResult<String> {
    let invalid = |reason: &str| RouteError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: reason.to_string(),
    };

    let url = Url::parse(raw.trim()).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host"));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("query and fragment are not allowed"));
    }
    Ok(url.as_str().trim_end_matches('/').to_string())
}
