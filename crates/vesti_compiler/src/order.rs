//! Cascade-safe style ordering
//!
//! Generated CSS rules for atomic style fragments all share the same
//! specificity, so the emission order decides which override wins. Rules
//! must come out mobile-first: base declarations with no responsive value,
//! then breakpoint-keyed declarations ascending through the breakpoint
//! order, then declarations keyed on names the order table does not know.

use tracing::warn;
use vesti_spec::{BreakpointOrder, StyleDecl, StyleValue};

/// One named style declaration headed for the code generator.
pub type StyleEntry = (String, StyleDecl);

/// An entry's position class in the emission order.
///
/// The derived `Ord` is the whole ordering contract:
/// `Unconstrained < Known(0) < Known(1) < ... < Unrecognized`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Rank {
    /// No responsive value anywhere in the declaration: a base style,
    /// emitted before every override.
    Unconstrained,
    /// Earliest breakpoint found, as an index into the order table.
    Known(usize),
    /// Only breakpoints missing from the order table were found; emitted
    /// after everything the table can place.
    Unrecognized,
}

/// Sorts style entries into a cascade-safe emission sequence.
///
/// Each entry is ranked by the earliest breakpoint referenced anywhere in
/// its declaration tree; responsive values nested inside pseudo-selector
/// blocks count the same as top-level ones. The sort is stable: entries of
/// equal rank keep their input order. Inputs are never mutated; the result
/// is a permutation of the input.
pub fn order_styles(entries: Vec<StyleEntry>, breakpoints: &BreakpointOrder) -> Vec<StyleEntry> {
    let mut ranked: Vec<(Rank, StyleEntry)> = entries
        .into_iter()
        .map(|entry| (rank_of(&entry.1, breakpoints), entry))
        .collect();

    // sort_by_key is stable, which carries the tie-break-by-input-order
    // guarantee.
    ranked.sort_by_key(|(rank, _)| *rank);
    ranked.into_iter().map(|(_, entry)| entry).collect()
}

fn rank_of(decl: &StyleDecl, breakpoints: &BreakpointOrder) -> Rank {
    scan(decl, breakpoints).unwrap_or(Rank::Unconstrained)
}

/// The minimum rank over every breakpoint found in the tree, `None` when
/// the tree holds no responsive value at all.
fn scan(decl: &StyleDecl, breakpoints: &BreakpointOrder) -> Option<Rank> {
    let mut found: Option<Rank> = None;

    for (key, value) in decl.iter() {
        let candidate = match value {
            StyleValue::Scalar(_) => None,
            StyleValue::Responsive(map) => map
                .keys()
                .map(|name| match breakpoints.index(name) {
                    Some(index) => Rank::Known(index),
                    None => {
                        warn!(
                            property = key,
                            breakpoint = %name,
                            "unrecognized breakpoint; ordering after known breakpoints"
                        );
                        Rank::Unrecognized
                    }
                })
                .min(),
            StyleValue::Nested(nested) => scan(nested, breakpoints),
        };
        found = match (found, candidate) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
    }

    found
}
