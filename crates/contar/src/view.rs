//! Render-surface element tree.
//!
//! A component's `view()` produces an [`Element`] tree: the queryable,
//! inspectable output of one render. Elements are identified by [`Role`]
//! and accessible text, and actionable elements carry the message they
//! dispatch when activated.
//!
//! The tree is a plain value. Re-rendering replaces the whole tree, so the
//! displayed text is always an exact function of the state at last render.

use serde::{Deserialize, Serialize};

/// Accessible role of a rendered element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Generic container with no semantics of its own
    Group,
    /// Section heading
    Heading,
    /// Static text content
    Text,
    /// Actionable button
    Button,
}

impl Role {
    /// Accessible role name as exposed to queries
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Group => "group",
            Self::Heading => "heading",
            Self::Text => "text",
            Self::Button => "button",
        }
    }
}

/// One node of a rendered view.
///
/// `M` is the component's message type; a button stores the message it
/// dispatches to the state owner when the user activates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element<M> {
    role: Role,
    text: String,
    on_activate: Option<M>,
    children: Vec<Element<M>>,
}

impl<M> Element<M> {
    /// Create a container element wrapping children
    #[must_use]
    pub fn group(children: Vec<Element<M>>) -> Self {
        Self {
            role: Role::Group,
            text: String::new(),
            on_activate: None,
            children,
        }
    }

    /// Create a heading element
    #[must_use]
    pub fn heading(text: impl Into<String>) -> Self {
        Self {
            role: Role::Heading,
            text: text.into(),
            on_activate: None,
            children: Vec::new(),
        }
    }

    /// Create a static text element
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            role: Role::Text,
            text: text.into(),
            on_activate: None,
            children: Vec::new(),
        }
    }

    /// Create a button whose accessible name is `label` and which
    /// dispatches `message` when activated
    #[must_use]
    pub fn button(label: impl Into<String>, message: M) -> Self {
        Self {
            role: Role::Button,
            text: label.into(),
            on_activate: Some(message),
            children: Vec::new(),
        }
    }

    /// The element's accessible role
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// The element's text content (a button's accessible name)
    #[must_use]
    pub fn text_content(&self) -> &str {
        &self.text
    }

    /// Whether activating this element dispatches a message
    #[must_use]
    pub const fn is_actionable(&self) -> bool {
        self.on_activate.is_some()
    }

    /// The message dispatched on activation, if any
    #[must_use]
    pub const fn activation_message(&self) -> Option<&M> {
        self.on_activate.as_ref()
    }

    /// Direct children of this element
    #[must_use]
    pub fn children(&self) -> &[Element<M>] {
        &self.children
    }

    /// Depth-first iterator over this element and all descendants
    pub fn descendants(&self) -> Descendants<'_, M> {
        Descendants { stack: vec![self] }
    }

    /// Role/text shape of the tree, for failure diagnostics
    #[must_use]
    pub fn outline(&self) -> serde_json::Value {
        let mut node = serde_json::json!({
            "role": self.role.name(),
            "text": self.text,
        });
        if self.is_actionable() {
            node["actionable"] = serde_json::Value::Bool(true);
        }
        if !self.children.is_empty() {
            node["children"] = serde_json::Value::Array(
                self.children.iter().map(Element::outline).collect(),
            );
        }
        node
    }
}

/// Depth-first traversal over an element tree
#[derive(Debug)]
pub struct Descendants<'a, M> {
    stack: Vec<&'a Element<M>>,
}

impl<'a, M> Iterator for Descendants<'a, M> {
    type Item = &'a Element<M>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        // Push in reverse so children come out in document order.
        self.stack.extend(next.children.iter().rev());
        Some(next)
    }
}
