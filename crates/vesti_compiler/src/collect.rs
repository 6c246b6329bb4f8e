//! Style-entry collection
//!
//! Splits a discovered declaration into atomic fragments, one entry per
//! (pseudo-selector path, property, breakpoint, value), each carrying the
//! class-name identifier the generated markup will reference. Entries come
//! out in discovery order; [`order_styles`](crate::order_styles) is the
//! separate, later pass that makes the sequence cascade-safe.

use rustc_hash::FxHashSet;
use vesti_spec::{Scalar, StyleDecl, StyleValue};
use vesti_theme::{class_name, FragmentPath};

use crate::order::StyleEntry;

/// Splits `decl` into atomic entries with derived identifiers.
///
/// Duplicate fragments (same identifier) collapse to their first
/// occurrence, keeping identifiers unique within the pass.
pub fn collect_entries(decl: &StyleDecl) -> Vec<StyleEntry> {
    let mut entries = Vec::new();
    let mut seen = FxHashSet::default();
    let mut selectors = Vec::new();
    walk(decl, &mut selectors, &mut seen, &mut entries);
    entries
}

fn walk(
    decl: &StyleDecl,
    selectors: &mut Vec<String>,
    seen: &mut FxHashSet<String>,
    entries: &mut Vec<StyleEntry>,
) {
    for (property, value) in decl.iter() {
        match value {
            StyleValue::Scalar(scalar) => {
                let id = class_name(property, FragmentPath::new(selectors, None), scalar);
                push(entries, seen, id, fragment(selectors, property, None, scalar));
            }
            StyleValue::Responsive(map) => {
                for (breakpoint, scalar) in map {
                    let path = FragmentPath::new(selectors, Some(breakpoint.as_str()));
                    let id = class_name(property, path, scalar);
                    push(
                        entries,
                        seen,
                        id,
                        fragment(selectors, property, Some(breakpoint.as_str()), scalar),
                    );
                }
            }
            StyleValue::Nested(nested) => {
                selectors.push(property.to_owned());
                walk(nested, selectors, seen, entries);
                selectors.pop();
            }
        }
    }
}

fn push(entries: &mut Vec<StyleEntry>, seen: &mut FxHashSet<String>, id: String, decl: StyleDecl) {
    if seen.insert(id.clone()) {
        entries.push((id, decl));
    }
}

/// Rebuilds the minimal declaration holding exactly one fragment, wrapped
/// back into its selector path.
fn fragment(
    selectors: &[String],
    property: &str,
    breakpoint: Option<&str>,
    value: &Scalar,
) -> StyleDecl {
    let leaf = match breakpoint {
        Some(name) => StyleDecl::new().with_responsive(property, [(name, value.clone())]),
        None => StyleDecl::new().with(property, value.clone()),
    };
    selectors
        .iter()
        .rev()
        .fold(leaf, |inner, selector| {
            StyleDecl::new().with_nested(selector.clone(), inner)
        })
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use vesti_spec::StyleDecl;

    use super::collect_entries;

    fn decl(value: serde_json::Value) -> StyleDecl {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_splits_into_atomic_fragments() {
        let entries = collect_entries(&decl(json!({
            "bg": "primary",
            "px": { "xs": "s", "md": "m" },
        })));

        let ids: Vec<&str> = entries.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["bg-primary", "px-xs-s", "px-md-m"]);
    }

    #[test]
    fn test_pseudo_fragments_keep_their_wrapper() {
        let entries = collect_entries(&decl(json!({
            "&:hover": { "bg": { "lg": "primary" } },
        })));

        assert_eq!(entries.len(), 1);
        let (id, fragment) = &entries[0];
        assert_eq!(id, "bg-hover-lg-primary");
        assert_eq!(
            serde_json::to_value(fragment).unwrap(),
            json!({ "&:hover": { "bg": { "lg": "primary" } } })
        );
    }

    #[test]
    fn test_duplicates_collapse() {
        let entries = collect_entries(&decl(json!({
            "bg": "primary",
            "&:hover": { "bg": "primary" },
        })));
        // distinct paths, distinct ids
        assert_eq!(entries.len(), 2);

        let doubled = collect_entries(&decl(json!({
            "backgroundColor": "primary",
        })));
        let again = collect_entries(&decl(json!({
            "backgroundColor": "primary",
        })));
        assert_eq!(doubled, again);
    }
}
