use thiserror::Error;

use vesti_spec::Slice;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("unknown theme `{0}`")]
    UnknownTheme(String),

    #[error("unknown component `{0}`")]
    UnknownComponent(String),

    #[error("no `{slice}` token named `{token}`")]
    UnresolvedToken { slice: Slice, token: String },

    #[error("invalid theme JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid theme TOML: {0}")]
    Toml(#[from] toml::de::Error),
}
