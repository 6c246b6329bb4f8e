//! Built-in component presets
//!
//! `Box` is the styling primitive every other component composes through;
//! `Button` and `Header` carry variants, interaction states, and responsive
//! padding.

use indexmap::IndexMap;
use vesti_spec::{ComponentConfig, ComponentMeta, ComponentStyle, StyleDecl};

/// The unstyled primitive other components build on.
pub fn box_config() -> ComponentConfig {
    ComponentConfig::new(StyleDecl::new()).with_meta(ComponentMeta {
        description: Some("Styling primitive".to_owned()),
        hidden: true,
        ..ComponentMeta::default()
    })
}

pub fn button() -> ComponentConfig {
    let base = StyleDecl::new()
        .with("componentName", "Box")
        .with("display", "inline-flex")
        .with("alignItems", "center")
        .with("justifyContent", "center")
        .with("px", "m")
        .with("py", "xs")
        .with("borderRadius", "m")
        .with("fontSize", "s")
        .with("fontWeight", "semibold")
        .with("transition", "fast")
        .with("cursor", "pointer");

    ComponentConfig::new(base)
        .with_tag("button")
        .with_variant(
            "primary",
            ComponentStyle::new(
                StyleDecl::new()
                    .with("bg", "primary")
                    .with("color", "white")
                    .with_nested("&:hover", StyleDecl::new().with("bg", "primary.dark")),
            ),
        )
        .with_variant(
            "outline",
            ComponentStyle::new(
                StyleDecl::new()
                    .with("bg", "background")
                    .with("color", "primary")
                    .with("borderWidth", "thin")
                    .with("borderStyle", "solid")
                    .with("borderColor", "primary"),
            ),
        )
        .with_variant(
            "ghost",
            ComponentStyle::new(
                StyleDecl::new()
                    .with("bg", "background")
                    .with("color", "textColor")
                    .with_nested("&:hover", StyleDecl::new().with("bg", "light")),
            ),
        )
}

pub fn header() -> ComponentConfig {
    let base = StyleDecl::new()
        .with("componentName", "Box")
        .with("display", "flex")
        .with("alignItems", "center")
        .with_responsive("px", [("xs", "s"), ("sm", "s"), ("md", "m"), ("lg", "m")])
        .with("width", "100")
        .with("minHeight", "60px")
        .with("color", "textColor");

    let fixed = StyleDecl::new()
        .with("position", "fixed")
        .with("top", "none")
        .with("left", "none")
        .with("zIndex", "highest");

    ComponentConfig::new(base)
        .with_tag("header")
        .with_variant(
            "primary",
            ComponentStyle::new(StyleDecl::new().with("bg", "primary").with("color", "white")),
        )
        .with_variant(
            "primary.fixed",
            ComponentStyle::new(
                fixed
                    .clone()
                    .with("bg", "primary")
                    .with("color", "white"),
            ),
        )
        .with_variant("fixed", ComponentStyle::new(fixed))
        .with_meta(ComponentMeta {
            hidden: true,
            ..ComponentMeta::default()
        })
}

/// All built-in component presets, keyed by component name.
pub fn all() -> IndexMap<String, ComponentConfig> {
    [
        ("Box", box_config()),
        ("Button", button()),
        ("Header", header()),
    ]
    .into_iter()
    .map(|(name, config)| (name.to_owned(), config))
    .collect()
}

#[cfg(test)]
mod tests {
    use vesti_spec::StyleValue;

    use super::{all, button, header};

    #[test]
    fn test_catalog_names() {
        let components = all();
        let names: Vec<&str> = components.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Box", "Button", "Header"]);
    }

    #[test]
    fn test_header_padding_is_responsive() {
        let header = header();
        let px = header
            .base
            .style
            .get("px")
            .and_then(StyleValue::as_responsive)
            .unwrap();
        assert_eq!(px.keys().collect::<Vec<_>>(), vec!["xs", "sm", "md", "lg"]);
    }

    #[test]
    fn test_header_fixed_variants_share_positioning() {
        let header = header();
        for variant in ["primary.fixed", "fixed"] {
            let style = &header.variant(variant).style;
            assert!(style.get("position").is_some(), "variant {variant}");
            assert!(style.get("zIndex").is_some(), "variant {variant}");
        }
    }

    #[test]
    fn test_button_hover_is_nested() {
        let button = button();
        let primary = button.variant("primary");
        assert!(matches!(
            primary.style.get("&:hover"),
            Some(StyleValue::Nested(_))
        ));
    }
}
