//! Contar: Spanish "to count" — in-process interaction testing for
//! message-driven UI components, with a reference counter widget.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    CONTAR Architecture                        │
//! ├──────────────────────────────────────────────────────────────┤
//! │   ┌────────────┐     ┌─────────────┐     ┌────────────┐       │
//! │   │ Component  │     │  Harness    │     │  Element   │       │
//! │   │ update()   │◄────│  dispatch/  │────►│  tree      │       │
//! │   │ view()     │     │  settle     │     │  queries   │       │
//! │   └────────────┘     └─────────────┘     └────────────┘       │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! A [`Component`] owns its state and evolves it through explicit
//! messages; its `view()` is an [`Element`] tree queried by role and
//! accessible text. A [`Harness`] mounts one instance per scenario,
//! simulates user activations (awaited, so batched updates settle before
//! the re-render is observed), and asserts rendered text via strict
//! selectors.
//!
//! The [`Counter`] component is the reference instance: `"Count: {n}"`
//! with Increment/Decrement buttons.

#![warn(missing_docs)]

mod component;
mod counter;
mod harness;
mod locator;
mod result;
mod view;

pub use component::Component;
pub use counter::{Counter, CounterMsg, CounterProps};
pub use harness::Harness;
pub use locator::{Expect, Selector, TextMatch};
pub use result::{ContarError, ContarResult};
pub use view::{Descendants, Element, Role};
