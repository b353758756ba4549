//! Interaction test harness.
//!
//! Mounts one component instance per harness, drives it through simulated
//! user activations, and exposes strict queries over the rendered tree.
//! Scenario isolation is structural: each harness owns its component and
//! its tree, so two harnesses can never share state.
//!
//! # Dispatch model
//!
//! Activations are messages. [`Harness::click`] resolves its target,
//! enqueues the target's message, yields to the scheduler (the host may
//! batch or defer the update), then applies every pending message in
//! dispatch order and re-renders once. Nothing is dropped or reordered.
//!
//! # Example
//!
//! ```rust
//! use contar::{Counter, Harness, Selector};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> contar::ContarResult<()> {
//! let mut harness = Harness::<Counter>::mount();
//! harness.expect(&Selector::text("Count: 0"))?.to_have_text("Count: 0")?;
//!
//! harness.click(&Selector::button("increment")?).await?;
//! harness.expect(&Selector::text_pattern("^count:")?)?.to_have_text("Count: 1")?;
//! # Ok(())
//! # }
//! ```

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::component::Component;
use crate::locator::{Expect, Selector};
use crate::result::{ContarError, ContarResult};
use crate::view::{Element, Role};

/// A mounted component under test
#[derive(Debug)]
pub struct Harness<C: Component> {
    component: C,
    tree: Element<C::Message>,
    pending: VecDeque<C::Message>,
}

impl<C: Component> Harness<C> {
    /// Mount a fresh instance with default props
    #[must_use]
    pub fn mount() -> Self {
        Self::mount_with(C::Props::default())
    }

    /// Mount a fresh instance with the given props
    #[must_use]
    pub fn mount_with(props: C::Props) -> Self {
        let component = C::create(props);
        let tree = component.view();
        debug!("mounted component");
        Self {
            component,
            tree,
            pending: VecDeque::new(),
        }
    }

    /// The current rendered tree
    #[must_use]
    pub fn tree(&self) -> &Element<C::Message> {
        &self.tree
    }

    /// Resolve a selector strictly against the current tree
    ///
    /// # Errors
    ///
    /// Returns [`ContarError::ElementNotFound`] or
    /// [`ContarError::AmbiguousSelector`] per strict selection
    pub fn get(&self, selector: &Selector) -> ContarResult<&Element<C::Message>> {
        selector.resolve_in(&self.tree)
    }

    /// Locate a single element by role and accessible-name pattern
    ///
    /// # Errors
    ///
    /// Fails on a bad pattern or a non-unique match
    pub fn get_by_role(&self, role: Role, name: &str) -> ContarResult<&Element<C::Message>> {
        self.get(&Selector::role_named(role, name)?)
    }

    /// Locate a single element by exact text content
    ///
    /// # Errors
    ///
    /// Fails on a non-unique match
    pub fn get_by_text(&self, text: &str) -> ContarResult<&Element<C::Message>> {
        self.get(&Selector::text(text))
    }

    /// Locate a single element by text-content pattern
    ///
    /// # Errors
    ///
    /// Fails on a bad pattern or a non-unique match
    pub fn find_by_text_pattern(&self, pattern: &str) -> ContarResult<&Element<C::Message>> {
        self.get(&Selector::text_pattern(pattern)?)
    }

    /// Build an expectation over the text of the element `selector` resolves
    /// to. Failure diagnostics embed the rendered-tree outline.
    ///
    /// # Errors
    ///
    /// Fails if the selector does not resolve to exactly one element
    pub fn expect(&self, selector: &Selector) -> ContarResult<Expect> {
        let actual = self.get(selector)?.text_content().to_string();
        Ok(Expect::new(actual).with_rendered_tree(self.dump()?))
    }

    /// Enqueue an activation without applying it.
    ///
    /// Models a second activation arriving in the same logical batch; the
    /// queued messages take effect at the next [`settle`](Self::settle).
    ///
    /// # Errors
    ///
    /// Returns [`ContarError::NotActionable`] if the resolved element has
    /// no bound action, or a strict-selection error
    pub fn dispatch(&mut self, selector: &Selector) -> ContarResult<()> {
        let message = {
            let target = selector.resolve_in(&self.tree)?;
            target
                .activation_message()
                .cloned()
                .ok_or_else(|| ContarError::NotActionable {
                    selector: selector.to_string(),
                })?
        };
        trace!(selector = %selector, ?message, "dispatch");
        self.pending.push_back(message);
        Ok(())
    }

    /// Yield to the scheduler, then apply every pending message in
    /// dispatch order and re-render once.
    pub async fn settle(&mut self) {
        tokio::task::yield_now().await;
        if self.pending.is_empty() {
            return;
        }
        let applied = self.pending.len();
        while let Some(message) = self.pending.pop_front() {
            trace!(?message, "apply");
            self.component.update(message);
        }
        self.tree = self.component.view();
        debug!(applied, "re-rendered");
    }

    /// Simulate one user activation of the element `selector` resolves to,
    /// awaiting the resulting state update and re-render.
    ///
    /// # Errors
    ///
    /// Returns [`ContarError::NotActionable`] for a non-actionable target,
    /// or a strict-selection error
    pub async fn click(&mut self, selector: &Selector) -> ContarResult<()> {
        self.dispatch(selector)?;
        self.settle().await;
        Ok(())
    }

    /// Pretty-printed role/text outline of the current tree, for
    /// failure diagnostics
    ///
    /// # Errors
    ///
    /// Returns [`ContarError::Json`] if serialization fails
    pub fn dump(&self) -> ContarResult<String> {
        Ok(serde_json::to_string_pretty(&self.tree.outline())?)
    }
}
