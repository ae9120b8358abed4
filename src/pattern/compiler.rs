use regex::Regex;
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

use super::template::{tokenize, Token};
use crate::error::{RouteError, RouteResult, TemplateErrorKind};

/// Maximum number of path parameters before heap allocation.
/// Most REST paths carry at most a handful of placeholders (e.g. `/users/{id}/posts/{post_id}`).
pub const MAX_INLINE_PARAMS: usize = 8;

/// Captured placeholder values, in template order.
///
/// Names are `Arc<str>` because they come from the compiled pattern and are shared
/// across every match; values are per-request data.
pub type ParamVec = SmallVec<[(Arc<str>, String); MAX_INLINE_PARAMS]>;

/// A compiled template that can be tested against concrete request paths.
pub trait PathPattern: Send + Sync + fmt::Debug {
    /// The template source this pattern was compiled from.
    fn source(&self) -> &str;

    /// Placeholder names in template order.
    fn param_names(&self) -> &[Arc<str>];

    /// True when the whole path matches the pattern.
    fn is_match(&self, path: &str) -> bool;

    /// Placeholder values when the whole path matches, `None` otherwise.
    fn captures(&self, path: &str) -> Option<ParamVec>;
}

/// Turns a URI template into a [`PathPattern`].
///
/// The router receives its compiler by injection, so tests and alternative
/// template dialects can supply their own implementation.
pub trait UriPatternCompiler: Send + Sync + fmt::Debug {
    /// # Errors
    ///
    /// Returns [`RouteError::PatternCompilation`] when the template is malformed.
    fn compile(&self, template: &str) -> RouteResult<Arc<dyn PathPattern>>;
}

/// Default compiler: `{name}` placeholders become single-segment regex captures.
///
/// `/users/{id}` compiles to `^/users/([^/]+)$`. Literal text is regex-escaped, so
/// `/v1.0/items` only matches a literal dot.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexPatternCompiler;

impl RegexPatternCompiler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Compile to the concrete pattern type.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::PatternCompilation`] when the template is malformed.
    pub fn compile_pattern(&self, template: &str) -> RouteResult<CompiledPattern> {
        CompiledPattern::new(template)
    }
}

impl UriPatternCompiler for RegexPatternCompiler {
    fn compile(&self, template: &str) -> RouteResult<Arc<dyn PathPattern>> {
        Ok(Arc::new(self.compile_pattern(template)?))
    }
}

/// Anchored regex compiled from a URI template.
#[derive(Clone)]
pub struct CompiledPattern {
    source: String,
    regex: Regex,
    param_names: Vec<Arc<str>>,
}

impl CompiledPattern {
    /// # Errors
    ///
    /// Returns [`RouteError::PatternCompilation`] when the template is malformed.
    pub fn new(template: &str) -> RouteResult<Self> {
        let source = if template.is_empty() { "/" } else { template };
        let tokens = tokenize(source)?;

        let mut pattern = String::with_capacity(source.len() + 16);
        let mut param_names = Vec::with_capacity(tokens.len());
        pattern.push('^');
        for token in tokens {
            match token {
                Token::Literal(text) => pattern.push_str(&regex::escape(text)),
                Token::Placeholder(name) => {
                    pattern.push_str("([^/]+)");
                    param_names.push(Arc::from(name));
                }
            }
        }
        pattern.push('$');

        let regex = Regex::new(&pattern).map_err(|e| {
            RouteError::compilation(source, TemplateErrorKind::Regex(e.to_string()))
        })?;

        Ok(Self {
            source: source.to_string(),
            regex,
            param_names,
        })
    }

    /// The generated regular expression, for diagnostics.
    #[must_use]
    pub fn regex_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl fmt::Debug for CompiledPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledPattern")
            .field("source", &self.source)
            .field("regex", &self.regex.as_str())
            .field("param_names", &self.param_names)
            .finish()
    }
}

impl PathPattern for CompiledPattern {
    fn source(&self) -> &str {
        &self.source
    }

    fn param_names(&self) -> &[Arc<str>] {
        &self.param_names
    }

    #[inline]
    fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    fn captures(&self, path: &str) -> Option<ParamVec> {
        let caps = self.regex.captures(path)?;
        let mut params = ParamVec::new();
        for (i, name) in self.param_names.iter().enumerate() {
            if let Some(value) = caps.get(i + 1) {
                params.push((Arc::clone(name), decode_segment(value.as_str())));
            }
        }
        Some(params)
    }
}

/// Percent-decode a captured segment; undecodable input is kept as-is.
fn decode_segment(raw: &str) -> String {
    match urlencoding::decode(raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_string(),
    }
}
