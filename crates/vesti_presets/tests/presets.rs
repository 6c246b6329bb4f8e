use vesti_presets::ThemePreset;
use vesti_spec::{Scalar, Slice, StyleValue};

#[test]
fn preset_catalog_contains_expected_presets() {
    let mut ids: Vec<&str> = ThemePreset::all().iter().map(|p| p.id()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["dark", "light"]);
}

#[test]
fn presets_have_distinct_background_and_shared_brand() {
    let light = ThemePreset::Light.build();
    let dark = ThemePreset::Dark.build();

    assert_ne!(
        light.resolve(Slice::Colors, "background"),
        dark.resolve(Slice::Colors, "background"),
        "light and dark backgrounds must differ"
    );
    assert_eq!(
        light.resolve(Slice::Colors, "primary"),
        dark.resolve(Slice::Colors, "primary"),
        "brand colors are scheme-independent"
    );
}

#[test]
fn presets_route_shorthand_properties() {
    let theme = ThemePreset::Light.build();
    assert_eq!(theme.resolve_property("px", "m"), Some(&Scalar::from("16px")));
    assert_eq!(
        theme.resolve_property("bg", "primary"),
        Some(&Scalar::from("#06f"))
    );
    assert_eq!(
        theme.resolve_property("zIndex", "highest"),
        Some(&Scalar::from(9999))
    );
}

#[test]
fn presets_carry_the_default_breakpoints_and_queries() {
    for preset in ThemePreset::all() {
        let theme = preset.build();
        assert_eq!(theme.breakpoints.index("xs"), Some(0));
        assert_eq!(theme.breakpoints.index("xl"), Some(4));
        for name in theme.breakpoints.names() {
            assert!(
                theme.media_queries.contains_key(name),
                "preset {preset:?} missing media query for {name}"
            );
        }
    }
}

#[test]
fn header_preset_resolves_against_its_theme() {
    let theme = ThemePreset::Light.build();
    let header = theme.component("Header").unwrap();

    // every responsive padding token must exist in the spacings slice
    let px = header
        .base
        .style
        .get("px")
        .and_then(StyleValue::as_responsive)
        .expect("Header px is responsive");
    for (breakpoint, token) in px {
        assert!(theme.breakpoints.contains(breakpoint));
        let token = token.as_str().unwrap();
        assert!(
            theme.resolve(Slice::Spacings, token).is_some(),
            "unresolved spacing token {token}"
        );
    }
}

#[test]
fn unknown_component_is_an_error() {
    let theme = ThemePreset::Light.build();
    assert!(theme.component("Sidebar").is_err());
}
