//! Class-name derivation
//!
//! Every atomic style fragment (one property, one value, optionally scoped
//! to a pseudo-selector path and a breakpoint) gets a deterministic
//! class-name identifier. Token-shaped values produce readable names
//! (`bg-lg-primary`, `bg-hover-lg-primary`); anything else falls back to a
//! stable hash suffix so identifiers stay valid and collision-free.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;
use vesti_spec::Scalar;

/// Where a fragment sits inside its declaration.
#[derive(Clone, Copy, Debug, Default)]
pub struct FragmentPath<'a> {
    /// Enclosing pseudo-selector keys, outermost first.
    pub selectors: &'a [String],
    /// Breakpoint name for responsive fragments.
    pub breakpoint: Option<&'a str>,
}

impl<'a> FragmentPath<'a> {
    pub fn new(selectors: &'a [String], breakpoint: Option<&'a str>) -> Self {
        Self {
            selectors,
            breakpoint,
        }
    }
}

/// Derives the class name for one fragment.
///
/// Segments are kebab-joined: property, selector names stripped of their
/// markers, breakpoint, value token.
pub fn class_name(property: &str, path: FragmentPath<'_>, value: &Scalar) -> String {
    let mut segments = vec![sanitize(property)];
    segments.extend(path.selectors.iter().map(|s| sanitize(s)));
    if let Some(breakpoint) = path.breakpoint {
        segments.push(sanitize(breakpoint));
    }

    let rendered = value.to_string();
    let token = sanitize(&rendered);
    if token.is_empty() || token != rendered {
        // Lossy or empty token: a readable prefix alone could collide
        // (`"a.b"` and `"a-b"` both sanitize to `a-b`), so pin the value
        // with a stable hash.
        if !token.is_empty() {
            segments.push(token);
        }
        segments.push(format!("{:08x}", hash_of(&rendered)));
    } else {
        segments.push(token);
    }

    segments.retain(|s| !s.is_empty());
    segments.join("-")
}

/// Keeps `[a-zA-Z0-9-]`, maps `.` and `_` to `-`, drops everything else.
fn sanitize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_ascii_alphanumeric() || c == '-' {
            out.push(c);
        } else if c == '.' || c == '_' {
            out.push('-');
        }
    }
    out.trim_matches('-').to_owned()
}

fn hash_of(raw: &str) -> u32 {
    let mut hasher = FxHasher::default();
    raw.hash(&mut hasher);
    hasher.finish() as u32
}
