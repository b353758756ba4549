//! Component contract.
//!
//! A component owns one piece of state and evolves it through explicit
//! messages: each actionable element in its view carries the message it
//! sends back to the state owner, and [`Component::update`] applies the
//! corresponding transition to the *current* state. Deriving the next
//! state from the live value (never from a value captured when a handler
//! was created) is what makes two activations in one batch both count.
//!
//! Configuration is a closed, statically typed `Props` shape. A component
//! that needs no configuration uses a zero-field struct deriving
//! `Default`.

use std::fmt::Debug;

use crate::view::Element;

/// A message-driven UI component under test.
pub trait Component: Sized {
    /// Closed configuration shape; `Default` covers the no-props case
    type Props: Default;

    /// Command type dispatched by actionable elements
    type Message: Clone + Debug + PartialEq;

    /// Create a fresh instance from its configuration
    fn create(props: Self::Props) -> Self;

    /// Apply one transition to the current state
    fn update(&mut self, message: Self::Message);

    /// Render the current state as an element tree
    fn view(&self) -> Element<Self::Message>;
}
