//! Saltworks widget — the reactive controller that bridges slider events to
//! the calculator, plus the navigation menu toggle.

pub mod controller;
pub mod debounce;
pub mod host;
pub mod nav;

pub use controller::{SalinityWidget, WidgetStatus, UNAVAILABLE_MESSAGE};
pub use debounce::Debouncer;
pub use host::*;
pub use nav::{NavHost, NavKey, NavMenu};

#[cfg(test)]
mod tests;
