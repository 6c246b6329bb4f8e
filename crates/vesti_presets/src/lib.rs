//! Vesti Default Preset
//!
//! The built-in theme preset: color palettes with light and dark variants,
//! default token scales, breakpoints with their media queries, and the
//! built-in component presets (`Box`, `Button`, `Header`).
//!
//! # Quick Start
//!
//! ```rust
//! use vesti_presets::ThemePreset;
//!
//! let theme = ThemePreset::Light.build();
//! assert!(theme.colors.contains_key("primary"));
//! assert_eq!(theme.breakpoints.index("md"), Some(2));
//! ```
//!
//! Call [`install`] to register both variants in the global registry and
//! select the light one.

pub mod colors;
pub mod components;
pub mod preset;
pub mod scales;

pub use preset::{install, ThemePreset};
