//! Selectors and assertions for rendered element trees.
//!
//! # Design Philosophy
//!
//! - **Strict Selection**: resolving a selector fails unless exactly one
//!   element matches (ambiguity is a test bug, not something to paper over)
//! - **Accessible Queries**: elements are located by role and accessible
//!   name, or by text content, never by tree position
//! - **Pattern Matching**: accessible names match case-insensitively, the
//!   way interaction tests conventionally write `name=/increment/i`

use std::fmt;

use regex::{Regex, RegexBuilder};

use crate::result::{ContarError, ContarResult};
use crate::view::{Element, Role};

/// Text matcher for accessible names and text content
#[derive(Debug, Clone)]
pub enum TextMatch {
    /// Exact, case-sensitive equality
    Exact(String),
    /// Compiled pattern match
    Pattern(Regex),
}

impl TextMatch {
    /// Match text exactly
    #[must_use]
    pub fn exact(text: impl Into<String>) -> Self {
        Self::Exact(text.into())
    }

    /// Match text against a case-insensitive pattern
    ///
    /// # Errors
    ///
    /// Returns [`ContarError::InvalidPattern`] if the pattern does not compile
    pub fn pattern(pattern: &str) -> ContarResult<Self> {
        let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self::Pattern(regex))
    }

    /// Check whether `text` satisfies this matcher
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Self::Exact(expected) => text == expected,
            Self::Pattern(regex) => regex.is_match(text),
        }
    }
}

impl fmt::Display for TextMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(text) => write!(f, "\"{text}\""),
            Self::Pattern(regex) => write!(f, "/{}/i", regex.as_str()),
        }
    }
}

/// Selector for locating elements in a rendered tree
#[derive(Debug, Clone)]
pub enum Selector {
    /// Select by accessible role, optionally filtered by accessible name
    Role {
        /// Required role
        role: Role,
        /// Optional accessible-name filter
        name: Option<TextMatch>,
    },
    /// Select any non-container element by text content
    Text(TextMatch),
}

impl Selector {
    /// Select by role alone
    #[must_use]
    pub const fn role(role: Role) -> Self {
        Self::Role { role, name: None }
    }

    /// Select by role and accessible name (case-insensitive pattern)
    ///
    /// # Errors
    ///
    /// Returns [`ContarError::InvalidPattern`] if the name pattern does not compile
    pub fn role_named(role: Role, name_pattern: &str) -> ContarResult<Self> {
        Ok(Self::Role {
            role,
            name: Some(TextMatch::pattern(name_pattern)?),
        })
    }

    /// Select a button by accessible name (case-insensitive pattern)
    ///
    /// # Errors
    ///
    /// Returns [`ContarError::InvalidPattern`] if the name pattern does not compile
    pub fn button(name_pattern: &str) -> ContarResult<Self> {
        Self::role_named(Role::Button, name_pattern)
    }

    /// Select by exact text content
    #[must_use]
    pub fn text(literal: impl Into<String>) -> Self {
        Self::Text(TextMatch::exact(literal))
    }

    /// Select by text-content pattern (case-insensitive)
    ///
    /// # Errors
    ///
    /// Returns [`ContarError::InvalidPattern`] if the pattern does not compile
    pub fn text_pattern(pattern: &str) -> ContarResult<Self> {
        Ok(Self::Text(TextMatch::pattern(pattern)?))
    }

    /// Check whether a single element satisfies this selector
    #[must_use]
    pub fn matches<M>(&self, element: &Element<M>) -> bool {
        match self {
            Self::Role { role, name } => {
                element.role() == *role
                    && name.as_ref().map_or(true, |n| n.matches(element.text_content()))
            }
            // Containers have no text of their own; skip them so a text
            // query never matches both a leaf and its wrapper.
            Self::Text(matcher) => {
                element.role() != Role::Group && matcher.matches(element.text_content())
            }
        }
    }

    /// Resolve this selector against a tree, strictly.
    ///
    /// # Errors
    ///
    /// Returns [`ContarError::ElementNotFound`] when nothing matches and
    /// [`ContarError::AmbiguousSelector`] when more than one element does.
    pub fn resolve_in<'a, M>(&self, root: &'a Element<M>) -> ContarResult<&'a Element<M>> {
        let mut matches = root.descendants().filter(|e| self.matches(e));
        let first = matches.next().ok_or_else(|| ContarError::ElementNotFound {
            selector: self.to_string(),
        })?;
        let extra = matches.count();
        if extra > 0 {
            return Err(ContarError::AmbiguousSelector {
                selector: self.to_string(),
                count: extra + 1,
            });
        }
        Ok(first)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Role { role, name: None } => write!(f, "role={}", role.name()),
            Self::Role {
                role,
                name: Some(name),
            } => write!(f, "role={} name={name}", role.name()),
            Self::Text(matcher) => write!(f, "text={matcher}"),
        }
    }
}

/// Assertion builder over a resolved element's text
///
/// `expect(...).to_have_text("Count: 1")?`
///
/// When a rendered-tree outline is attached, failure diagnostics embed it
/// so the external runner sees what the surface actually displayed.
#[derive(Debug, Clone)]
pub struct Expect {
    actual: String,
    rendered: Option<String>,
}

impl Expect {
    /// Create an expectation over the given actual text
    #[must_use]
    pub fn new(actual: impl Into<String>) -> Self {
        Self {
            actual: actual.into(),
            rendered: None,
        }
    }

    /// Attach a rendered-tree outline to embed in failure diagnostics
    #[must_use]
    pub fn with_rendered_tree(mut self, outline: impl Into<String>) -> Self {
        self.rendered = Some(outline.into());
        self
    }

    fn embed(&self, err: ContarError) -> ContarError {
        match (&self.rendered, err) {
            (Some(outline), ContarError::AssertionError { message }) => {
                ContarError::AssertionError {
                    message: format!("{message}\nrendered tree:\n{outline}"),
                }
            }
            (_, err) => err,
        }
    }

    /// Assert the text equals `expected` exactly
    ///
    /// # Errors
    ///
    /// Returns [`ContarError::AssertionError`] describing expected vs. actual
    pub fn to_have_text(&self, expected: impl AsRef<str>) -> ContarResult<()> {
        if self.actual == expected.as_ref() {
            Ok(())
        } else {
            Err(self.embed(ContarError::assertion(expected, &self.actual)))
        }
    }

    /// Assert the text contains `expected`
    ///
    /// # Errors
    ///
    /// Returns [`ContarError::AssertionError`] describing expected vs. actual
    pub fn to_contain_text(&self, expected: impl AsRef<str>) -> ContarResult<()> {
        if self.actual.contains(expected.as_ref()) {
            Ok(())
        } else {
            Err(self.embed(ContarError::AssertionError {
                message: format!(
                    "expected text to contain '{}' but got '{}'",
                    expected.as_ref(),
                    self.actual
                ),
            }))
        }
    }

    /// Assert the text matches a case-insensitive pattern
    ///
    /// # Errors
    ///
    /// Returns [`ContarError::InvalidPattern`] for a bad pattern and
    /// [`ContarError::AssertionError`] on mismatch
    pub fn to_match_text(&self, pattern: &str) -> ContarResult<()> {
        if TextMatch::pattern(pattern)?.matches(&self.actual) {
            Ok(())
        } else {
            Err(self.embed(ContarError::AssertionError {
                message: format!(
                    "expected text matching /{pattern}/i but got '{}'",
                    self.actual
                ),
            }))
        }
    }

    /// The actual text under assertion
    #[must_use]
    pub fn actual(&self) -> &str {
        &self.actual
    }
}
