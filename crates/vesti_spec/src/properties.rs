//! Property → slice routing
//!
//! Style properties resolve their values against a theme slice: `bg` and
//! `borderColor` read from `colors`, `px` from `spacings`, and so on.
//! Shorthand aliases (`bg`, `p`, `mx`, `w`, ...) route to the same slice as
//! their longhand forms.

use crate::slices::Slice;

/// The slice a style property's values resolve against, `None` for
/// properties that take raw CSS values (`display`, `position`, ...).
pub fn slice_of(property: &str) -> Option<Slice> {
    let slice = match property {
        // colors
        "color" | "bg" | "backgroundColor" | "borderColor" | "borderTopColor"
        | "borderRightColor" | "borderBottomColor" | "borderLeftColor" | "outlineColor"
        | "caretColor" | "fill" | "stroke" | "textDecorationColor" => Slice::Colors,

        // gradients
        "gradient" | "bgGradient" | "textGradient" => Slice::Gradients,

        // spacings
        "margin" | "m" | "marginTop" | "mt" | "marginRight" | "mr" | "marginBottom" | "mb"
        | "marginLeft" | "ml" | "mx" | "my" | "padding" | "p" | "paddingTop" | "pt"
        | "paddingRight" | "pr" | "paddingBottom" | "pb" | "paddingLeft" | "pl" | "px" | "py"
        | "gap" | "rowGap" | "columnGap" => Slice::Spacings,

        // sizes
        "width" | "w" | "height" | "h" | "minWidth" | "minW" | "maxWidth" | "maxW"
        | "minHeight" | "minH" | "maxHeight" | "maxH" | "size" | "top" | "right" | "bottom"
        | "left" => Slice::Sizes,

        // radii
        "borderRadius" | "rounded" | "borderTopLeftRadius" | "borderTopRightRadius"
        | "borderBottomLeftRadius" | "borderBottomRightRadius" => Slice::Radii,

        // shadows
        "boxShadow" | "shadow" | "textShadow" => Slice::Shadows,

        // borders
        "border" | "borderTop" | "borderRight" | "borderBottom" | "borderLeft" | "outline" => {
            Slice::Borders
        }
        "borderWidth" | "borderTopWidth" | "borderRightWidth" | "borderBottomWidth"
        | "borderLeftWidth" | "outlineWidth" => Slice::BorderWidths,
        "borderStyle" | "outlineStyle" => Slice::BorderStyles,

        // typography
        "fontFamily" | "font" => Slice::Fonts,
        "fontSize" => Slice::FontSizes,
        "fontWeight" => Slice::FontWeights,
        "lineHeight" => Slice::LineHeights,
        "letterSpacing" => Slice::LetterSpacings,

        // misc token slices
        "opacity" => Slice::Opacities,
        "zIndex" => Slice::ZIndices,
        "transition" => Slice::Transitions,

        // component composition
        "componentName" | "variant" | "state" => Slice::Components,

        _ => return None,
    };
    Some(slice)
}

#[cfg(test)]
mod tests {
    use super::slice_of;
    use crate::slices::Slice;

    #[test]
    fn test_shorthands_route_with_longhands() {
        assert_eq!(slice_of("bg"), Some(Slice::Colors));
        assert_eq!(slice_of("backgroundColor"), Some(Slice::Colors));
        assert_eq!(slice_of("px"), Some(Slice::Spacings));
        assert_eq!(slice_of("paddingLeft"), Some(Slice::Spacings));
        assert_eq!(slice_of("w"), Some(Slice::Sizes));
        assert_eq!(slice_of("rounded"), Some(Slice::Radii));
    }

    #[test]
    fn test_raw_css_properties_have_no_slice() {
        assert_eq!(slice_of("display"), None);
        assert_eq!(slice_of("position"), None);
        assert_eq!(slice_of("alignItems"), None);
    }

    #[test]
    fn test_composition_properties() {
        assert_eq!(slice_of("componentName"), Some(Slice::Components));
        assert_eq!(slice_of("variant"), Some(Slice::Components));
    }
}
