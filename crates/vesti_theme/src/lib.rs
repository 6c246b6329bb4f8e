//! Vesti Theme Storage
//!
//! Theme values, the process-wide theme registry, token resolution, and
//! class-name derivation.
//!
//! # Overview
//!
//! - [`Theme`]: a named collection of token slices (colors, spacings, ...),
//!   breakpoints, and component configs, loadable from JSON or TOML
//! - [`ThemeRegistry`]: the global register of named themes with a current
//!   selection and change notification
//! - [`class_name`]: deterministic class-name identifiers for atomic style
//!   fragments
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use vesti_theme::{Theme, ThemeRegistry};
//!
//! let registry = ThemeRegistry::get();
//! registry.set("acme", Theme::from_json_str(ACME_JSON)?);
//! registry.set_current("acme")?;
//!
//! let theme = registry.current();
//! let primary = theme.resolve_property("bg", "primary");
//! ```
//!
//! The build-time ordering core never reads the registry: callers fetch
//! `current().breakpoints` once and pass it in explicitly.

pub mod class_name;
pub mod error;
pub mod registry;
pub mod theme;

pub use class_name::{class_name, FragmentPath};
pub use error::ThemeError;
pub use registry::{set_change_callback, ThemeRegistry};
pub use theme::Theme;
