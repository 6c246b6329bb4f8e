//! Default color palettes
//!
//! The base palette is shared; light and dark variants add the
//! scheme-dependent surface and text tokens on top.

use vesti_theme::theme::TokenSlice;

/// Shared palette: brand ramps plus semantic colors.
pub fn base_colors() -> TokenSlice {
    [
        ("dark", "#2f2f2f"),
        ("error", "#d10343"),
        ("light", "#ececec"),
        ("primary.lightest", "#dbe9ff"),
        ("primary.lighter", "#92bdff"),
        ("primary.light", "#4992ff"),
        ("primary", "#06f"),
        ("primary.dark", "#0049b6"),
        ("primary.darker", "#002c6d"),
        ("primary.darkest", "#000f24"),
        ("secondary.lightest", "#fae0f0"),
        ("secondary.lighter", "#f0a1d1"),
        ("secondary.light", "#e563b3"),
        ("secondary", "#db2494"),
        ("secondary.dark", "#9c1a6a"),
        ("secondary.darker", "#5e0f3f"),
        ("secondary.darkest", "#1f0515"),
        ("success", "#01ce80"),
        ("warning", "#ff8c00"),
        ("accent", "#23cedf"),
        ("disabled", "#bcbcbc"),
        ("white", "#ffffff"),
        ("black", "#000000"),
    ]
    .into_iter()
    .map(|(token, value)| (token.to_owned(), value.into()))
    .collect()
}

/// Light-scheme palette.
pub fn light_colors() -> TokenSlice {
    let mut colors = base_colors();
    for (token, value) in [
        ("background", "#ffffff"),
        ("invertedBackground", "#000000"),
        ("textColor", "#2f2f2f"),
        ("invertedTextColor", "#ececec"),
        ("headTextColor", "#000000"),
        ("invertedHeadTextColor", "#ffffff"),
    ] {
        colors.insert(token.to_owned(), value.into());
    }
    colors
}

/// Dark-scheme palette.
pub fn dark_colors() -> TokenSlice {
    let mut colors = base_colors();
    for (token, value) in [
        ("background", "#000000"),
        ("invertedBackground", "#ffffff"),
        ("textColor", "#ececec"),
        ("invertedTextColor", "#2f2f2f"),
        ("headTextColor", "#ffffff"),
        ("invertedHeadTextColor", "#000000"),
    ] {
        colors.insert(token.to_owned(), value.into());
    }
    colors
}

#[cfg(test)]
mod tests {
    use super::{dark_colors, light_colors};

    #[test]
    fn test_schemes_share_the_base_palette() {
        let light = light_colors();
        let dark = dark_colors();
        assert_eq!(light.get("primary"), dark.get("primary"));
        assert_ne!(light.get("background"), dark.get("background"));
        assert_ne!(light.get("textColor"), dark.get("textColor"));
    }
}
