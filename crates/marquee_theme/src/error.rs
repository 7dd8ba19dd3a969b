use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("theme `{theme}` is missing {} role(s): {}", .roles.len(), .roles.join(", "))]
    MissingRoles {
        theme: String,
        roles: Vec<&'static str>,
    },

    #[error("a theme named `{0}` is already registered")]
    DuplicateTheme(String),

    #[error("no theme named `{0}`")]
    UnknownTheme(String),

    #[error("theme state is already initialized")]
    AlreadyInitialized,

    #[error("theme `{theme}` extends `{expected}` but was resolved against `{found}`")]
    ParentMismatch {
        theme: String,
        expected: String,
        found: String,
    },

    #[error("unknown theme role `{0}`")]
    UnknownRole(String),

    #[error("token `{0}` is not defined")]
    UnknownToken(String),

    #[error("invalid token `{token}`: {reason}")]
    InvalidToken { token: String, reason: String },

    #[error("invalid color `{0}` (expected #RGB, #RRGGBB, #RRGGBBAA or var(--name))")]
    InvalidColor(String),

    #[error("value at `{path}` must be a string or a table")]
    InvalidValue { path: String },

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("failed to read theme file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
