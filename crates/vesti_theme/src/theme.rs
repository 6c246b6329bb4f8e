//! Theme values
//!
//! A [`Theme`] is a named collection of token slices plus the structural
//! slices (breakpoints, media queries, component configs). Token slices map
//! token names to scalar values; resolution routes a style property through
//! the property map to the right slice.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use vesti_spec::{slice_of, BreakpointOrder, ComponentConfig, Scalar, Slice};

use crate::error::ThemeError;

/// Token name → scalar value.
pub type TokenSlice = IndexMap<String, Scalar>;

/// A complete theme.
///
/// All fields default to empty, so partial themes deserialize cleanly and
/// merge over a preset.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Theme {
    pub colors: TokenSlice,
    pub gradients: TokenSlice,
    pub spacings: TokenSlice,
    pub sizes: TokenSlice,
    pub radii: TokenSlice,
    pub shadows: TokenSlice,
    pub borders: TokenSlice,
    pub border_widths: TokenSlice,
    pub border_styles: TokenSlice,
    pub fonts: TokenSlice,
    pub font_sizes: TokenSlice,
    pub font_weights: TokenSlice,
    pub line_heights: TokenSlice,
    pub letter_spacings: TokenSlice,
    pub opacities: TokenSlice,
    pub z_indices: TokenSlice,
    pub transitions: TokenSlice,

    /// Responsive breakpoints, ascending.
    pub breakpoints: BreakpointOrder,
    /// Breakpoint name → media query string (data only; emission is the
    /// code generator's concern).
    pub media_queries: IndexMap<String, String>,
    /// Component name → configuration.
    pub components: IndexMap<String, ComponentConfig>,
}

impl Theme {
    /// Parses a theme from JSON.
    pub fn from_json_str(source: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Parses a theme from TOML.
    pub fn from_toml_str(source: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(source)?)
    }

    /// A token slice by name; `None` for the structural slices.
    pub fn slice(&self, slice: Slice) -> Option<&TokenSlice> {
        let tokens = match slice {
            Slice::Colors => &self.colors,
            Slice::Gradients => &self.gradients,
            Slice::Spacings => &self.spacings,
            Slice::Sizes => &self.sizes,
            Slice::Radii => &self.radii,
            Slice::Shadows => &self.shadows,
            Slice::Borders => &self.borders,
            Slice::BorderWidths => &self.border_widths,
            Slice::BorderStyles => &self.border_styles,
            Slice::Fonts => &self.fonts,
            Slice::FontSizes => &self.font_sizes,
            Slice::FontWeights => &self.font_weights,
            Slice::LineHeights => &self.line_heights,
            Slice::LetterSpacings => &self.letter_spacings,
            Slice::Opacities => &self.opacities,
            Slice::ZIndices => &self.z_indices,
            Slice::Transitions => &self.transitions,
            Slice::Breakpoints | Slice::MediaQueries | Slice::Components => return None,
        };
        Some(tokens)
    }

    /// Resolves a token within a slice.
    pub fn resolve(&self, slice: Slice, token: &str) -> Option<&Scalar> {
        self.slice(slice)?.get(token)
    }

    /// Resolves a style property's token value by routing the property to
    /// its slice. Properties without a slice take raw CSS values and never
    /// resolve.
    pub fn resolve_property(&self, property: &str, token: &str) -> Option<&Scalar> {
        self.resolve(slice_of(property)?, token)
    }

    /// Like [`Theme::resolve`], but failing loudly for callers that require
    /// the token to exist.
    pub fn require(&self, slice: Slice, token: &str) -> Result<&Scalar, ThemeError> {
        self.resolve(slice, token)
            .ok_or_else(|| ThemeError::UnresolvedToken {
                slice,
                token: token.to_owned(),
            })
    }

    /// A component config by name.
    pub fn component(&self, name: &str) -> Result<&ComponentConfig, ThemeError> {
        self.components
            .get(name)
            .ok_or_else(|| ThemeError::UnknownComponent(name.to_owned()))
    }

    /// Merges `overrides` over this theme, right-biased: tokens present in
    /// `overrides` win, everything else is kept. Breakpoints are replaced
    /// wholesale when the override declares any.
    pub fn merge(mut self, overrides: Theme) -> Theme {
        fn merge_tokens(base: &mut TokenSlice, over: TokenSlice) {
            for (token, value) in over {
                base.insert(token, value);
            }
        }

        merge_tokens(&mut self.colors, overrides.colors);
        merge_tokens(&mut self.gradients, overrides.gradients);
        merge_tokens(&mut self.spacings, overrides.spacings);
        merge_tokens(&mut self.sizes, overrides.sizes);
        merge_tokens(&mut self.radii, overrides.radii);
        merge_tokens(&mut self.shadows, overrides.shadows);
        merge_tokens(&mut self.borders, overrides.borders);
        merge_tokens(&mut self.border_widths, overrides.border_widths);
        merge_tokens(&mut self.border_styles, overrides.border_styles);
        merge_tokens(&mut self.fonts, overrides.fonts);
        merge_tokens(&mut self.font_sizes, overrides.font_sizes);
        merge_tokens(&mut self.font_weights, overrides.font_weights);
        merge_tokens(&mut self.line_heights, overrides.line_heights);
        merge_tokens(&mut self.letter_spacings, overrides.letter_spacings);
        merge_tokens(&mut self.opacities, overrides.opacities);
        merge_tokens(&mut self.z_indices, overrides.z_indices);
        merge_tokens(&mut self.transitions, overrides.transitions);

        if !overrides.breakpoints.is_empty() {
            self.breakpoints = overrides.breakpoints;
        }
        for (name, query) in overrides.media_queries {
            self.media_queries.insert(name, query);
        }
        for (name, config) in overrides.components {
            self.components.insert(name, config);
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use vesti_spec::{Scalar, Slice};

    use super::Theme;

    fn base() -> Theme {
        Theme::from_json_str(
            r##"{
                "colors": { "primary": "#06f", "accent": "#23cedf" },
                "spacings": { "s": "8px", "m": "16px" },
                "breakpoints": ["xs", "sm", "md", "lg"]
            }"##,
        )
        .unwrap()
    }

    #[test]
    fn test_resolve_routes_through_property_map() {
        let theme = base();
        assert_eq!(
            theme.resolve_property("bg", "primary"),
            Some(&Scalar::from("#06f"))
        );
        assert_eq!(
            theme.resolve_property("px", "m"),
            Some(&Scalar::from("16px"))
        );
        assert_eq!(theme.resolve_property("display", "flex"), None);
    }

    #[test]
    fn test_require_reports_slice_and_token() {
        let err = base().require(Slice::Colors, "missing").unwrap_err();
        assert_eq!(err.to_string(), "no `colors` token named `missing`");
    }

    #[test]
    fn test_merge_is_right_biased() {
        let overridden = base().merge(
            Theme::from_json_str(r##"{ "colors": { "primary": "#000" } }"##).unwrap(),
        );
        assert_eq!(
            overridden.resolve(Slice::Colors, "primary"),
            Some(&Scalar::from("#000"))
        );
        // untouched tokens survive
        assert_eq!(
            overridden.resolve(Slice::Colors, "accent"),
            Some(&Scalar::from("#23cedf"))
        );
        assert_eq!(overridden.breakpoints.len(), 4);
    }

    #[test]
    fn test_toml_loading() {
        let theme = Theme::from_toml_str(
            r##"
                breakpoints = ["xs", "sm"]

                [colors]
                primary = "#06f"

                [zIndices]
                overlay = 100
            "##,
        )
        .unwrap();
        assert_eq!(
            theme.resolve(Slice::Colors, "primary"),
            Some(&Scalar::from("#06f"))
        );
        assert_eq!(
            theme.resolve(Slice::ZIndices, "overlay"),
            Some(&Scalar::from(100))
        );
        assert_eq!(theme.breakpoints.index("sm"), Some(1));
    }
}
