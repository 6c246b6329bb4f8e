//! Theme slice names
//!
//! A theme is a collection of named slices. Token slices map token names to
//! scalar values (`colors`, `spacings`, ...); the structural slices
//! (`breakpoints`, `mediaQueries`, `components`) carry their own shapes.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Every slice a theme can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Slice {
    Colors,
    Gradients,
    Spacings,
    Sizes,
    Radii,
    Shadows,
    Borders,
    BorderWidths,
    BorderStyles,
    Fonts,
    FontSizes,
    FontWeights,
    LineHeights,
    LetterSpacings,
    Opacities,
    ZIndices,
    Transitions,
    Breakpoints,
    MediaQueries,
    Components,
}

impl Slice {
    /// Stable slice id used in serialized themes.
    pub fn id(self) -> &'static str {
        match self {
            Self::Colors => "colors",
            Self::Gradients => "gradients",
            Self::Spacings => "spacings",
            Self::Sizes => "sizes",
            Self::Radii => "radii",
            Self::Shadows => "shadows",
            Self::Borders => "borders",
            Self::BorderWidths => "borderWidths",
            Self::BorderStyles => "borderStyles",
            Self::Fonts => "fonts",
            Self::FontSizes => "fontSizes",
            Self::FontWeights => "fontWeights",
            Self::LineHeights => "lineHeights",
            Self::LetterSpacings => "letterSpacings",
            Self::Opacities => "opacities",
            Self::ZIndices => "zIndices",
            Self::Transitions => "transitions",
            Self::Breakpoints => "breakpoints",
            Self::MediaQueries => "mediaQueries",
            Self::Components => "components",
        }
    }

    /// Looks a slice up by its stable id.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|slice| slice.id() == id)
    }

    /// Whether this slice maps token names to scalar values.
    pub fn is_token_slice(self) -> bool {
        !matches!(
            self,
            Self::Breakpoints | Self::MediaQueries | Self::Components
        )
    }

    /// Full slice list.
    pub fn all() -> &'static [Slice] {
        const SLICES: [Slice; 20] = [
            Slice::Colors,
            Slice::Gradients,
            Slice::Spacings,
            Slice::Sizes,
            Slice::Radii,
            Slice::Shadows,
            Slice::Borders,
            Slice::BorderWidths,
            Slice::BorderStyles,
            Slice::Fonts,
            Slice::FontSizes,
            Slice::FontWeights,
            Slice::LineHeights,
            Slice::LetterSpacings,
            Slice::Opacities,
            Slice::ZIndices,
            Slice::Transitions,
            Slice::Breakpoints,
            Slice::MediaQueries,
            Slice::Components,
        ];
        &SLICES
    }
}

impl Display for Slice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::Slice;

    #[test]
    fn test_ids_roundtrip() {
        for slice in Slice::all() {
            assert_eq!(Slice::from_id(slice.id()), Some(*slice));
        }
    }

    #[test]
    fn test_serde_uses_camel_case_ids() {
        assert_eq!(
            serde_json::to_string(&Slice::FontSizes).unwrap(),
            "\"fontSizes\""
        );
        let slice: Slice = serde_json::from_str("\"zIndices\"").unwrap();
        assert_eq!(slice, Slice::ZIndices);
    }

    #[test]
    fn test_structural_slices() {
        assert!(Slice::Colors.is_token_slice());
        assert!(!Slice::Breakpoints.is_token_slice());
        assert!(!Slice::Components.is_token_slice());
    }
}
