//! Responsive breakpoint ordering
//!
//! Breakpoints are named viewport thresholds ordered smallest to largest.
//! The order is the primary sort key for cascade-safe style emission: a
//! style keyed on an earlier breakpoint must be emitted before one keyed on
//! a later breakpoint so that CSS source order resolves ties mobile-first.

use serde::{Deserialize, Serialize};

/// Default breakpoint names, smallest to largest.
pub const DEFAULT_ORDER: [&str; 5] = ["xs", "sm", "md", "lg", "xl"];

/// An immutable, ordered sequence of breakpoint names.
///
/// Owned by the theme configuration; a single instance is passed into each
/// ordering pass and never mutated during it. The `Default` order is empty
/// (a theme with no responsive axis); [`BreakpointOrder::standard`] builds
/// the conventional table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BreakpointOrder {
    names: Vec<String>,
}

impl BreakpointOrder {
    /// Builds an order from names listed smallest to largest.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// The conventional `xs < sm < md < lg < xl` order.
    pub fn standard() -> Self {
        Self::new(DEFAULT_ORDER)
    }

    /// Position of a breakpoint in the order, `None` if unrecognized.
    pub fn index(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index(name).is_some()
    }

    /// Names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
