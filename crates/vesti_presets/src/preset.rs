//! Built-in theme preset catalog

use std::fmt::{Display, Formatter};

use vesti_spec::BreakpointOrder;
use vesti_theme::{Theme, ThemeRegistry};

use crate::{colors, components, scales};

/// Built-in theme preset catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    Light,
    Dark,
}

impl ThemePreset {
    /// Stable preset id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 2] = [ThemePreset::Light, ThemePreset::Dark];
        &PRESETS
    }

    /// Builds the complete theme for this preset.
    pub fn build(self) -> Theme {
        let colors = match self {
            Self::Light => colors::light_colors(),
            Self::Dark => colors::dark_colors(),
        };

        Theme {
            colors,
            spacings: scales::spacings(),
            sizes: scales::sizes(),
            radii: scales::radii(),
            shadows: scales::shadows(),
            fonts: scales::fonts(),
            font_sizes: scales::font_sizes(),
            font_weights: scales::font_weights(),
            line_heights: scales::line_heights(),
            letter_spacings: scales::letter_spacings(),
            border_widths: scales::border_widths(),
            border_styles: scales::border_styles(),
            opacities: scales::opacities(),
            z_indices: scales::z_indices(),
            transitions: scales::transitions(),
            breakpoints: BreakpointOrder::standard(),
            media_queries: scales::media_queries(),
            components: components::all(),
            ..Theme::default()
        }
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Registers both presets in the global registry and selects the light one.
pub fn install() {
    let registry = ThemeRegistry::get();
    for preset in ThemePreset::all() {
        registry.set(preset.id(), preset.build());
    }
    registry
        .set_current(ThemePreset::Light.id())
        .expect("light preset was just registered");
}
