//! Vesti Core Data Model
//!
//! This crate defines the types shared by every layer of the vesti theming
//! system:
//!
//! - **Declaration trees**: [`StyleDecl`] / [`StyleValue`], the tagged
//!   representation of a style object, with scalar properties, responsive
//!   (per-breakpoint) values, and nested pseudo-selector blocks
//! - **Breakpoints**: [`BreakpointOrder`], the mobile-first total order of
//!   responsive breakpoints used for cascade-safe style ordering
//! - **Slices**: [`Slice`], the named sections of a theme (colors, spacings,
//!   radii, ...) and the property → slice routing table
//! - **Components**: [`ComponentConfig`], per-component base style,
//!   variants, and interaction states
//!
//! # Example
//!
//! ```rust
//! use vesti_spec::{BreakpointOrder, StyleDecl};
//!
//! let decl = StyleDecl::new()
//!     .with("display", "flex")
//!     .with_responsive("px", [("xs", "s"), ("md", "m")]);
//!
//! let breakpoints = BreakpointOrder::standard();
//! assert_eq!(breakpoints.index("md"), Some(2));
//! assert!(!decl.is_empty());
//! ```

pub mod breakpoints;
pub mod component;
pub mod decl;
pub mod properties;
pub mod slices;
pub mod value;

pub use breakpoints::BreakpointOrder;
pub use component::{ComponentConfig, ComponentMeta, ComponentStyle};
pub use decl::{is_pseudo_selector, StyleDecl, StyleValue};
pub use properties::slice_of;
pub use slices::Slice;
pub use value::Scalar;
