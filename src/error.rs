//! # Error Module
//!
//! Every fallible operation in the routing core returns [`RouteError`].
//!
//! Not-found conditions are deliberately absent from this taxonomy: a request that
//! matches no route, or a name lookup that finds nothing, is reported as `None` so
//! callers can branch on presence and produce their own "not found" response.

use thiserror::Error;

/// Why a URI template was refused by the pattern compiler.
///
/// Positions are byte offsets into the template string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateErrorKind {
    /// A `{` was never closed
    #[error("unclosed placeholder starting at byte {position}")]
    UnclosedPlaceholder { position: usize },
    /// A `}` appeared without a matching `{`
    #[error("unexpected '}}' at byte {position}")]
    UnopenedPlaceholder { position: usize },
    /// A `{` appeared inside another placeholder
    #[error("nested '{{' at byte {position}")]
    NestedPlaceholder { position: usize },
    /// `{}` with nothing between the braces
    #[error("empty placeholder at byte {position}")]
    EmptyPlaceholder { position: usize },
    /// Placeholder names are identifiers: `[A-Za-z_][A-Za-z0-9_]*`
    #[error("invalid placeholder name '{name}'")]
    InvalidPlaceholderName { name: String },
    /// The same placeholder name used twice in one template
    #[error("placeholder '{name}' appears more than once")]
    DuplicatePlaceholder { name: String },
    /// The regex engine rejected the generated expression
    #[error("regex engine rejected pattern: {0}")]
    Regex(String),
}

/// Errors produced while compiling, matching or generating routes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The URI template is malformed and cannot be compiled into a pattern.
    #[error("cannot compile URI template '{template}': {reason}")]
    PatternCompilation {
        template: String,
        reason: TemplateErrorKind,
    },

    /// Path generation hit a placeholder with no supplied value.
    #[error("missing value for parameter '{parameter}' in route template '{template}'")]
    MissingRouteParameter { template: String, parameter: String },

    /// The configured base URL is not an absolute http(s) URL.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Named generation was asked for a route name that is not registered.
    #[error("no route named '{name}' is registered")]
    UnknownRouteName { name: String },

    /// Strict registration refused a second route with an existing name.
    #[error("a route named '{name}' is already registered")]
    DuplicateRouteName { name: String },
}

impl RouteError {
    pub(crate) fn compilation(template: &str, reason: TemplateErrorKind) -> Self {
        RouteError::PatternCompilation {
            template: template.to_string(),
            reason,
        }
    }
}

/// Result alias used throughout the crate.
pub type RouteResult<T> = Result<T, RouteError>;
