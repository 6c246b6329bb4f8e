//! Style declaration trees
//!
//! A [`StyleDecl`] is the typed form of a style object literal. Top-level
//! keys are either plain CSS-like properties with scalar values, properties
//! whose value varies per breakpoint (a responsive value), or
//! pseudo-selector keys (`&:hover`, `:focus`, ...) wrapping a nested
//! declaration.
//!
//! Declarations deserialize from their natural JSON shape. Classification is
//! lenient: a subtree that does not fit any of the three forms degrades to
//! the closest representable shape instead of failing the whole declaration.

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as JsonValue;
use tracing::trace;

use crate::value::Scalar;

/// Whether a declaration key names a pseudo-selector block rather than a
/// style property. Selector keys start with a non-alphanumeric marker
/// (`&:hover`, `:focus-visible`, `&::before`).
pub fn is_pseudo_selector(key: &str) -> bool {
    key.chars().next().is_some_and(|c| !c.is_alphanumeric())
}

/// A single value inside a [`StyleDecl`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// Plain property value.
    Scalar(Scalar),
    /// Breakpoint name → scalar override, applied mobile-first.
    Responsive(IndexMap<String, Scalar>),
    /// Declaration scoped to a pseudo-selector.
    Nested(StyleDecl),
}

impl StyleValue {
    /// The responsive map, if this value is responsive.
    pub fn as_responsive(&self) -> Option<&IndexMap<String, Scalar>> {
        match self {
            StyleValue::Responsive(map) => Some(map),
            _ => None,
        }
    }

    /// The nested declaration, if this value is a pseudo-selector block.
    pub fn as_nested(&self) -> Option<&StyleDecl> {
        match self {
            StyleValue::Nested(decl) => Some(decl),
            _ => None,
        }
    }
}

impl From<Scalar> for StyleValue {
    fn from(value: Scalar) -> Self {
        StyleValue::Scalar(value)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Scalar(value.into())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Scalar(value.into())
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Scalar(value.into())
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Scalar(value.into())
    }
}

impl From<bool> for StyleValue {
    fn from(value: bool) -> Self {
        StyleValue::Scalar(value.into())
    }
}

/// An ordered style declaration tree.
///
/// Key order is insertion order and survives serialization; downstream
/// consumers rely on it for stable output.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleDecl {
    properties: IndexMap<String, StyleValue>,
}

impl StyleDecl {
    /// Creates an empty declaration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a plain property, returning the declaration for chaining.
    pub fn with(mut self, property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.properties.insert(property.into(), value.into());
        self
    }

    /// Adds a responsive property from `(breakpoint, value)` pairs.
    pub fn with_responsive<I, K, V>(mut self, property: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Scalar>,
    {
        let map = values
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.properties
            .insert(property.into(), StyleValue::Responsive(map));
        self
    }

    /// Adds a pseudo-selector block.
    pub fn with_nested(mut self, selector: impl Into<String>, decl: StyleDecl) -> Self {
        self.properties
            .insert(selector.into(), StyleValue::Nested(decl));
        self
    }

    /// Inserts a value, replacing any previous one under the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: StyleValue) {
        self.properties.insert(key.into(), value);
    }

    /// Looks up a key.
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.properties.get(key)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Reads a declaration out of a JSON value.
    ///
    /// The root must be an object; inside it, classification is lenient and
    /// never fails (see [`StyleDecl`] docs).
    pub fn from_json(value: &JsonValue) -> Option<Self> {
        match value {
            JsonValue::Object(map) => Some(classify(
                map.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
            )),
            _ => None,
        }
    }
}

impl FromIterator<(String, StyleValue)> for StyleDecl {
    fn from_iter<I: IntoIterator<Item = (String, StyleValue)>>(iter: I) -> Self {
        Self {
            properties: iter.into_iter().collect(),
        }
    }
}

impl Serialize for StyleDecl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.properties.len()))?;
        for (key, value) in &self.properties {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for StyleDecl {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = IndexMap::<String, JsonValue>::deserialize(deserializer)?;
        Ok(classify(raw))
    }
}

/// Converts a raw key → JSON map into a typed declaration.
///
/// - a pseudo-selector key with an object value becomes a nested block
/// - any other object value is read as a responsive map, keeping only the
///   members with scalar values
/// - scalar values stay scalars; anything else (arrays, nulls) is dropped
fn classify(raw: IndexMap<String, JsonValue>) -> StyleDecl {
    let mut properties = IndexMap::with_capacity(raw.len());

    for (key, value) in raw {
        let classified = if is_pseudo_selector(&key) {
            classify_selector_value(&key, value)
        } else {
            classify_property_value(&key, value)
        };
        if let Some(style_value) = classified {
            properties.insert(key, style_value);
        }
    }

    StyleDecl { properties }
}

fn classify_selector_value(key: &str, value: JsonValue) -> Option<StyleValue> {
    match value {
        JsonValue::Object(map) => Some(StyleValue::Nested(classify(
            map.into_iter().collect::<IndexMap<_, _>>(),
        ))),
        other => match scalar_of(&other) {
            // A scalar under a selector key carries no responsive
            // structure; keep it so the declaration round-trips.
            Some(scalar) => Some(StyleValue::Scalar(scalar)),
            None => {
                trace!(key, "dropping malformed pseudo-selector value");
                None
            }
        },
    }
}

fn classify_property_value(key: &str, value: JsonValue) -> Option<StyleValue> {
    match value {
        JsonValue::Object(map) => {
            let mut responsive = IndexMap::with_capacity(map.len());
            for (breakpoint, member) in map {
                match scalar_of(&member) {
                    Some(scalar) => {
                        responsive.insert(breakpoint, scalar);
                    }
                    None => {
                        trace!(key, breakpoint = %breakpoint, "skipping non-scalar responsive member")
                    }
                }
            }
            Some(StyleValue::Responsive(responsive))
        }
        other => match scalar_of(&other) {
            Some(scalar) => Some(StyleValue::Scalar(scalar)),
            None => {
                trace!(key, "dropping non-scalar property value");
                None
            }
        },
    }
}

fn scalar_of(value: &JsonValue) -> Option<Scalar> {
    match value {
        JsonValue::Bool(b) => Some(Scalar::Bool(*b)),
        JsonValue::Number(n) => n.as_f64().map(Scalar::Number),
        JsonValue::String(s) => Some(Scalar::String(s.clone())),
        _ => None,
    }
}
