//! Default token scales

use indexmap::IndexMap;
use vesti_spec::Scalar;
use vesti_theme::theme::TokenSlice;

fn slice<V: Into<Scalar>, const N: usize>(entries: [(&str, V); N]) -> TokenSlice {
    entries
        .into_iter()
        .map(|(token, value)| (token.to_owned(), value.into()))
        .collect()
}

pub fn spacings() -> TokenSlice {
    slice([
        ("none", "0px"),
        ("xxs", "4px"),
        ("xs", "8px"),
        ("s", "12px"),
        ("m", "16px"),
        ("l", "24px"),
        ("xl", "32px"),
        ("xxl", "48px"),
    ])
}

pub fn sizes() -> TokenSlice {
    slice([
        ("none", "0"),
        ("25", "25%"),
        ("50", "50%"),
        ("75", "75%"),
        ("100", "100%"),
        ("auto", "auto"),
    ])
}

pub fn radii() -> TokenSlice {
    slice([
        ("none", "0px"),
        ("s", "4px"),
        ("m", "8px"),
        ("l", "16px"),
        ("round", "50%"),
    ])
}

pub fn shadows() -> TokenSlice {
    slice([
        ("none", "none"),
        ("light", "0px 1px 2px 0px rgba(47, 47, 47, 0.25)"),
        ("medium", "0px 2px 8px 0px rgba(47, 47, 47, 0.25)"),
        ("strong", "0px 4px 16px 0px rgba(47, 47, 47, 0.35)"),
    ])
}

pub fn fonts() -> TokenSlice {
    slice([
        ("regular", "'Inter', sans-serif"),
        ("mono", "'JetBrains Mono', monospace"),
    ])
}

pub fn font_sizes() -> TokenSlice {
    slice([
        ("xs", "12px"),
        ("s", "14px"),
        ("m", "16px"),
        ("l", "20px"),
        ("xl", "24px"),
        ("xxl", "32px"),
    ])
}

pub fn font_weights() -> TokenSlice {
    slice([
        ("regular", 400),
        ("semibold", 600),
        ("bold", 700),
    ])
}

pub fn line_heights() -> TokenSlice {
    slice([("compact", 1.2), ("regular", 1.5), ("relaxed", 1.8)])
}

pub fn letter_spacings() -> TokenSlice {
    slice([("tight", "-0.02em"), ("regular", "0em"), ("wide", "0.08em")])
}

pub fn border_widths() -> TokenSlice {
    slice([("none", "0px"), ("thin", "1px"), ("medium", "2px"), ("thick", "4px")])
}

pub fn border_styles() -> TokenSlice {
    slice([("none", "none"), ("solid", "solid"), ("dashed", "dashed")])
}

pub fn opacities() -> TokenSlice {
    slice([
        ("transparent", 0.0),
        ("faint", 0.25),
        ("medium", 0.5),
        ("visible", 0.75),
        ("opaque", 1.0),
    ])
}

pub fn z_indices() -> TokenSlice {
    slice([
        ("none", 0),
        ("low", 10),
        ("medium", 100),
        ("high", 1000),
        ("highest", 9999),
    ])
}

pub fn transitions() -> TokenSlice {
    slice([
        ("none", "none"),
        ("fast", "all 0.1s ease-in-out"),
        ("medium", "all 0.25s ease-in-out"),
        ("slow", "all 0.5s ease-in-out"),
    ])
}

/// Breakpoint name → media query string, matching the default
/// [`BreakpointOrder`](vesti_spec::BreakpointOrder).
pub fn media_queries() -> IndexMap<String, String> {
    [
        ("xs", "@media screen and (min-width: 0px)"),
        ("sm", "@media screen and (min-width: 640px)"),
        ("md", "@media screen and (min-width: 768px)"),
        ("lg", "@media screen and (min-width: 1024px)"),
        ("xl", "@media screen and (min-width: 1280px)"),
    ]
    .into_iter()
    .map(|(name, query)| (name.to_owned(), query.to_owned()))
    .collect()
}

#[cfg(test)]
mod tests {
    use vesti_spec::BreakpointOrder;

    use super::media_queries;

    #[test]
    fn test_media_queries_cover_the_default_order() {
        let queries = media_queries();
        let order = BreakpointOrder::standard();
        for name in order.names() {
            assert!(queries.contains_key(name), "missing media query for {name}");
        }
    }
}
