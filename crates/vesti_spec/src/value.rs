//! Scalar style values

use std::fmt;

use serde::{Deserialize, Serialize};

/// A leaf style value: a theme token name, a raw CSS value, a number, or a
/// flag.
///
/// Scalars serialize untagged, so `"primary"`, `1.5`, and `true` all
/// round-trip to their natural JSON/TOML forms.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Number(f64),
    String(String),
}

impl Scalar {
    /// String content, if this scalar is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric content, if this scalar is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{b}"),
            // Whole numbers print without a trailing ".0" so that token
            // paths like `z-index-10` stay readable.
            Scalar::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::String(value.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::String(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Number(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Number(value.into())
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::Scalar;

    #[test]
    fn test_display_forms() {
        assert_eq!(Scalar::from("primary").to_string(), "primary");
        assert_eq!(Scalar::from(10).to_string(), "10");
        assert_eq!(Scalar::from(1.5).to_string(), "1.5");
        assert_eq!(Scalar::from(true).to_string(), "true");
    }

    #[test]
    fn test_untagged_roundtrip() {
        let json = serde_json::json!(["accent", 4, false]);
        let scalars: Vec<Scalar> = serde_json::from_value(json).unwrap();
        assert_eq!(
            scalars,
            vec![Scalar::from("accent"), Scalar::from(4), Scalar::from(false)]
        );
    }
}
