//! Vesti Style Compiler
//!
//! The build-time half of the vesti theming system. A source scanner (not
//! part of this crate) discovers style object literals at compile time; this
//! crate turns each discovered declaration into atomic class-name fragments
//! and orders the full set so the downstream code generator can emit CSS
//! rules in a cascade-safe sequence.
//!
//! # Ordering
//!
//! CSS resolves rules of equal specificity by source order, so responsive
//! overrides must be emitted mobile-first: a rule keyed on `sm` before one
//! keyed on `lg`, and base rules with no breakpoint before either. See
//! [`order_styles`].
//!
//! ```rust
//! use vesti_compiler::order_styles;
//! use vesti_spec::{BreakpointOrder, StyleDecl};
//!
//! let entries = vec![
//!     ("bg-lg-primary".to_owned(), StyleDecl::new().with_responsive("bg", [("lg", "primary")])),
//!     ("bg-sm-accent".to_owned(), StyleDecl::new().with_responsive("bg", [("sm", "accent")])),
//! ];
//! let ordered = order_styles(entries, &BreakpointOrder::standard());
//! assert_eq!(ordered[0].0, "bg-sm-accent");
//! ```

pub mod collect;
pub mod order;

pub use collect::collect_entries;
pub use order::{order_styles, StyleEntry};
