//! URI template tokenizer shared by the pattern compiler and the URL builder.
//!
//! A template is a run of literal text interleaved with `{name}` placeholders.
//! Both directions (matching and generation) read templates through [`tokenize`],
//! so a template that compiles also builds, and vice versa.

use crate::error::{RouteError, RouteResult, TemplateErrorKind};

/// One piece of a tokenized template, borrowing from the template string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Literal path text, matched verbatim
    Literal(&'a str),
    /// Placeholder name without braces
    Placeholder(&'a str),
}

/// Split a template into literal runs and placeholders.
///
/// # Errors
///
/// Returns [`RouteError::PatternCompilation`] for unbalanced or nested braces, empty
/// placeholders, names that are not identifiers, and repeated names.
///
/// # Example
///
/// ```rust
/// use routemap::pattern::{tokenize, Token};
///
/// let tokens = tokenize("/users/{id}/posts").unwrap();
/// assert_eq!(
///     tokens,
///     vec![Token::Literal("/users/"), Token::Placeholder("id"), Token::Literal("/posts")]
/// );
/// ```
pub fn tokenize(template: &str) -> RouteResult<Vec<Token<'_>>> {
    let mut tokens = Vec::with_capacity(template.matches('{').count() * 2 + 1);
    let mut literal_start = 0;
    let mut open: Option<usize> = None;

    for (i, c) in template.char_indices() {
        match (c, open) {
            ('{', Some(_)) => {
                return Err(RouteError::compilation(
                    template,
                    TemplateErrorKind::NestedPlaceholder { position: i },
                ));
            }
            ('{', None) => {
                if i > literal_start {
                    tokens.push(Token::Literal(&template[literal_start..i]));
                }
                open = Some(i);
            }
            ('}', None) => {
                return Err(RouteError::compilation(
                    template,
                    TemplateErrorKind::UnopenedPlaceholder { position: i },
                ));
            }
            ('}', Some(start)) => {
                let name = &template[start + 1..i];
                if name.is_empty() {
                    return Err(RouteError::compilation(
                        template,
                        TemplateErrorKind::EmptyPlaceholder { position: start },
                    ));
                }
                if !is_identifier(name) {
                    return Err(RouteError::compilation(
                        template,
                        TemplateErrorKind::InvalidPlaceholderName {
                            name: name.to_string(),
                        },
                    ));
                }
                if tokens.contains(&Token::Placeholder(name)) {
                    return Err(RouteError::compilation(
                        template,
                        TemplateErrorKind::DuplicatePlaceholder {
                            name: name.to_string(),
                        },
                    ));
                }
                tokens.push(Token::Placeholder(name));
                open = None;
                literal_start = i + 1;
            }
            _ => {}
        }
    }

    if let Some(start) = open {
        return Err(RouteError::compilation(
            template,
            TemplateErrorKind::UnclosedPlaceholder { position: start },
        ));
    }
    if literal_start < template.len() {
        tokens.push(Token::Literal(&template[literal_start..]));
    }
    Ok(tokens)
}

/// Placeholder names present in a template, in template order.
///
/// # Errors
///
/// Same as [`tokenize`].
pub fn placeholder_names(template: &str) -> RouteResult<Vec<&str>> {
    Ok(tokenize(template)?
        .into_iter()
        .filter_map(|t| match t {
            Token::Placeholder(name) => Some(name),
            Token::Literal(_) => None,
        })
        .collect())
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(template: &str) -> TemplateErrorKind {
        match tokenize(template) {
            Err(RouteError::PatternCompilation { reason, .. }) => reason,
            other => panic!("expected compilation error for {template:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_literal_only() {
        assert_eq!(tokenize("/health").unwrap(), vec![Token::Literal("/health")]);
    }

    #[test]
    fn test_empty_template_has_no_tokens() {
        assert!(tokenize("").unwrap().is_empty());
    }

    #[test]
    fn test_placeholder_sharing_a_segment() {
        assert_eq!(
            tokenize("/files/{name}.json").unwrap(),
            vec![
                Token::Literal("/files/"),
                Token::Placeholder("name"),
                Token::Literal(".json"),
            ]
        );
    }

    #[test]
    fn test_adjacent_placeholders() {
        assert_eq!(
            tokenize("/{a}{b}").unwrap(),
            vec![Token::Literal("/"), Token::Placeholder("a"), Token::Placeholder("b")]
        );
    }

    #[test]
    fn test_unclosed() {
        assert_eq!(
            reason("/users/{id"),
            TemplateErrorKind::UnclosedPlaceholder { position: 7 }
        );
    }

    #[test]
    fn test_unopened() {
        assert_eq!(
            reason("/users/id}"),
            TemplateErrorKind::UnopenedPlaceholder { position: 9 }
        );
    }

    #[test]
    fn test_nested() {
        assert_eq!(
            reason("/{a{b}}"),
            TemplateErrorKind::NestedPlaceholder { position: 3 }
        );
    }

    #[test]
    fn test_empty_placeholder() {
        assert_eq!(
            reason("/users/{}"),
            TemplateErrorKind::EmptyPlaceholder { position: 7 }
        );
    }

    #[test]
    fn test_constraint_syntax_is_rejected() {
        assert_eq!(
            reason(r"/users/{id:\d+}"),
            TemplateErrorKind::InvalidPlaceholderName {
                name: r"id:\d+".to_string()
            }
        );
        assert!(matches!(
            reason("/{*rest}"),
            TemplateErrorKind::InvalidPlaceholderName { .. }
        ));
        assert!(matches!(
            reason("/{1st}"),
            TemplateErrorKind::InvalidPlaceholderName { .. }
        ));
    }

    #[test]
    fn test_duplicate_placeholder() {
        assert_eq!(
            reason("/org/{id}/user/{id}"),
            TemplateErrorKind::DuplicatePlaceholder {
                name: "id".to_string()
            }
        );
    }

    #[test]
    fn test_placeholder_names_in_order() {
        assert_eq!(
            placeholder_names("/users/{user_id}/posts/{post_id}").unwrap(),
            vec!["user_id", "post_id"]
        );
    }
}
