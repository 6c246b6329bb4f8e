//! Component style configuration
//!
//! A [`ComponentConfig`] describes how a named component renders: its base
//! style, per-variant overrides, and interaction-state declarations. Variant
//! and state lookups preserve declaration order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::decl::StyleDecl;

/// Presentation metadata attached to a component config.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentMeta {
    pub description: Option<String>,
    pub tags: Vec<String>,
    /// Hidden components are skipped by inspection tooling.
    pub hidden: bool,
}

/// A single style layer: the base of a component or one of its variants.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentStyle {
    /// Suggested host tag (`"header"`, `"button"`, ...).
    pub tag: Option<String>,
    /// The layer's style declaration.
    pub style: StyleDecl,
    /// Default values for style-affecting props.
    pub props: StyleDecl,
    /// Interaction-state declarations keyed by state name.
    pub states: IndexMap<String, StyleDecl>,
}

impl ComponentStyle {
    pub fn new(style: StyleDecl) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_state(mut self, state: impl Into<String>, decl: StyleDecl) -> Self {
        self.states.insert(state.into(), decl);
        self
    }
}

/// Full configuration for a named component.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentConfig {
    #[serde(flatten)]
    pub base: ComponentStyle,
    /// Variant name → style layer.
    pub variants: IndexMap<String, ComponentStyle>,
    pub meta: ComponentMeta,
}

impl ComponentConfig {
    pub fn new(style: StyleDecl) -> Self {
        Self {
            base: ComponentStyle::new(style),
            ..Self::default()
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.base.tag = Some(tag.into());
        self
    }

    pub fn with_variant(mut self, name: impl Into<String>, variant: ComponentStyle) -> Self {
        self.variants.insert(name.into(), variant);
        self
    }

    pub fn with_meta(mut self, meta: ComponentMeta) -> Self {
        self.meta = meta;
        self
    }

    /// The style layer for a variant; unknown variants resolve to the base.
    pub fn variant(&self, name: &str) -> &ComponentStyle {
        self.variants.get(name).unwrap_or(&self.base)
    }

    /// The style layer for an optional variant selection.
    pub fn style_for(&self, variant: Option<&str>) -> &ComponentStyle {
        match variant {
            Some(name) => self.variant(name),
            None => &self.base,
        }
    }
}
