//! Reference counter component.
//!
//! One `i64` of state, initial value 0, no bounds in either direction.
//! The two buttons dispatch [`CounterMsg::Increment`] and
//! [`CounterMsg::Decrement`]; each transition is a pure function of the
//! previous count.

use crate::component::Component;
use crate::view::Element;

/// Counter configuration. Closed shape, nothing required.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterProps {}

/// Commands the counter's buttons dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterMsg {
    /// `n → n + 1`
    Increment,
    /// `n → n - 1`
    Decrement,
}

/// A counter displaying `"Count: {n}"` with increment/decrement buttons
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    count: i64,
}

impl Counter {
    /// Current count value
    #[must_use]
    pub const fn count(&self) -> i64 {
        self.count
    }
}

impl Component for Counter {
    type Props = CounterProps;
    type Message = CounterMsg;

    fn create(_props: CounterProps) -> Self {
        Self { count: 0 }
    }

    fn update(&mut self, message: CounterMsg) {
        self.count = match message {
            CounterMsg::Increment => self.count + 1,
            CounterMsg::Decrement => self.count - 1,
        };
    }

    fn view(&self) -> Element<CounterMsg> {
        Element::group(vec![
            Element::heading("Counter"),
            Element::text(format!("Count: {}", self.count)),
            Element::button("Increment", CounterMsg::Increment),
            Element::button("Decrement", CounterMsg::Decrement),
        ])
    }
}
