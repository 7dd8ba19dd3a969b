//! Theme files
//!
//! Custom themes are written in TOML. A file names its parent (the default
//! theme when omitted), may declare extra tokens, and sets role colors either
//! as literals or as references to tokens visible from the parent:
//!
//! ```toml
//! name = "ocean"
//! extends = "default"
//!
//! [tokens.blue]
//! c100 = "#99CCFF"
//!
//! [tokens.accent]
//! primary = "#3399FF"
//!
//! [colors.mediaCard]
//! barFillColor = "blue.c100"
//! badge = "#101010"
//! hoverAccent = "var(--accent)"
//! ```

use crate::error::ThemeError;
use crate::registry::ThemeRegistry;
use crate::schema::Role;
use crate::theme::{Theme, ThemeDefinition};
use crate::themes::DEFAULT_THEME;
use crate::tokens::{Color, ColorValue, Palette, Ramp, Shade};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeFile {
    name: String,
    #[serde(default)]
    extends: Option<String>,
    #[serde(default)]
    tokens: toml::Table,
    #[serde(default)]
    colors: toml::Table,
}

/// Parse a theme file into a definition.
///
/// Token references are resolved here, against the parent's palette with the
/// file's own tokens layered on top, so `registry` must already hold the
/// parent.
pub fn parse_definition(
    src: &str,
    registry: &ThemeRegistry,
) -> Result<ThemeDefinition, ThemeError> {
    let file: ThemeFile = toml::from_str(src)?;
    let parent_name = file.extends.as_deref().unwrap_or(DEFAULT_THEME);
    let parent = registry.require(parent_name)?;

    let own_tokens = parse_tokens(&file.tokens)?;
    let visible = parent.palette().merged(&own_tokens);

    let mut leaves = Vec::new();
    flatten(&file.colors, "", &mut leaves)?;
    if leaves.is_empty() {
        warn!(
            "theme `{}` sets no colors; it will look identical to `{}`",
            file.name, parent_name
        );
    }

    let mut definition = ThemeDefinition::new(file.name)
        .extends(parent_name)
        .with_palette(own_tokens);
    for (path, text) in leaves {
        let role: Role = path.parse()?;
        definition.insert(role, parse_color(text, &visible)?);
    }
    debug!(
        "parsed theme `{}`: {} role(s) over `{}`",
        definition.name(),
        definition.len(),
        parent_name
    );
    Ok(definition)
}

impl ThemeRegistry {
    /// Parse, resolve and register a theme from TOML source
    pub fn load_str(&mut self, src: &str) -> Result<&Theme, ThemeError> {
        let definition = parse_definition(src, self)?;
        self.register_definition(definition)
    }

    /// Read, resolve and register a theme file
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<&Theme, ThemeError> {
        let path = path.as_ref();
        let src = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loading theme file {}", path.display());
        self.load_str(&src)
    }
}

/// A literal (`#hex`, `var(--x)`) or a token reference (`pink.c200`)
fn parse_color(text: &str, palette: &Palette) -> Result<ColorValue, ThemeError> {
    let text = text.trim();
    if text.starts_with('#') || text.starts_with("var(") {
        text.parse()
    } else {
        palette.expect(text).map(ColorValue::Solid)
    }
}

fn parse_tokens(table: &toml::Table) -> Result<Palette, ThemeError> {
    let mut palette = Palette::new();
    for (key, value) in table {
        match value {
            toml::Value::String(_) => {
                let color = literal(value, &format!("tokens.{key}"))?;
                palette.insert_color(key.clone(), color);
            }
            toml::Value::Table(roles) if key == "accent" => {
                for (role, value) in roles {
                    let color = literal(value, &format!("tokens.accent.{role}"))?;
                    palette.accents_mut().set(role.parse()?, color);
                }
            }
            toml::Value::Table(levels) => {
                let mut shades = Vec::with_capacity(levels.len());
                for (level, value) in levels {
                    let shade: Shade = level.parse()?;
                    let color = literal(value, &format!("tokens.{key}.{level}"))?;
                    shades.push((shade, color));
                }
                palette.insert_ramp(Ramp::new(key.clone(), shades));
            }
            _ => {
                return Err(ThemeError::InvalidValue {
                    path: format!("tokens.{key}"),
                })
            }
        }
    }
    Ok(palette)
}

/// Token values must be literal colors
fn literal(value: &toml::Value, path: &str) -> Result<Color, ThemeError> {
    value
        .as_str()
        .ok_or_else(|| ThemeError::InvalidValue {
            path: path.to_string(),
        })?
        .parse()
}

/// Collect `(dotted path, string)` leaves of a nested table
fn flatten<'a>(
    table: &'a toml::Table,
    prefix: &str,
    out: &mut Vec<(String, &'a str)>,
) -> Result<(), ThemeError> {
    for (key, value) in table {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            toml::Value::String(text) => out.push((path, text.as_str())),
            toml::Value::Table(inner) => flatten(inner, &path, out)?,
            _ => return Err(ThemeError::InvalidValue { path }),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::pink;

    fn registry() -> ThemeRegistry {
        ThemeRegistry::builtin().unwrap()
    }

    #[test]
    fn references_resolve_against_parent_and_own_tokens() {
        let src = r##"
            name = "rose"
            extends = "pink"

            [tokens.rose]
            c500 = "#E11D48"

            [colors.mediaCard]
            barFillColor = "rose.c500"
            barColor = "pink.c700"

            [colors.video.context.type]
            main = "var(--rose-text)"
        "##;
        let definition = parse_definition(src, &registry()).unwrap();
        assert_eq!(definition.parent(), Some("pink"));
        assert_eq!(
            definition.get(Role::MediaCardBarFillColor),
            Some(&ColorValue::Solid(Color::from_hex(0xE11D48)))
        );
        assert_eq!(
            definition.get(Role::MediaCardBarColor),
            Some(&ColorValue::Solid(pink::pink::C700))
        );
        assert_eq!(
            definition.get(Role::VideoContextTypeMain),
            Some(&ColorValue::var("--rose-text"))
        );
        assert_eq!(definition.len(), 3);
    }

    #[test]
    fn accent_tokens_shadow_the_parent_accents() {
        let src = r##"
            name = "bright"

            [tokens.accent]
            primary = "#00FFAA"

            [colors.progress]
            filled = "accent.primary"
            background = "accent.secondary"
        "##;
        let definition = parse_definition(src, &registry()).unwrap();
        assert_eq!(definition.parent(), Some(DEFAULT_THEME));
        assert_eq!(
            definition.get(Role::ProgressFilled),
            Some(&ColorValue::Solid(Color::from_hex(0x00FFAA)))
        );
        assert_eq!(
            definition.get(Role::ProgressBackground),
            Some(&ColorValue::Solid(Color::from_hex(0x9E9E9E)))
        );
    }

    #[test]
    fn rejects_unknown_roles_and_tokens() {
        let unknown_role = r##"
            name = "x"
            [colors.mediaCard]
            glow = "#FFFFFF"
        "##;
        assert!(matches!(
            parse_definition(unknown_role, &registry()),
            Err(ThemeError::UnknownRole(path)) if path == "mediaCard.glow"
        ));

        let unknown_token = r#"
            name = "x"
            [colors.mediaCard]
            badge = "teal.c100"
        "#;
        assert!(matches!(
            parse_definition(unknown_token, &registry()),
            Err(ThemeError::UnknownToken(token)) if token == "teal.c100"
        ));
    }

    #[test]
    fn rejects_malformed_values() {
        let number = r#"
            name = "x"
            [colors.mediaCard]
            badge = 12
        "#;
        assert!(matches!(
            parse_definition(number, &registry()),
            Err(ThemeError::InvalidValue { path }) if path == "mediaCard.badge"
        ));

        let bad_hex = r##"
            name = "x"
            [colors.mediaCard]
            badge = "#12345"
        "##;
        assert!(matches!(
            parse_definition(bad_hex, &registry()),
            Err(ThemeError::InvalidColor(_))
        ));

        let bad_level = r##"
            name = "x"
            [tokens.teal]
            c150 = "#008080"
        "##;
        assert!(matches!(
            parse_definition(bad_level, &registry()),
            Err(ThemeError::InvalidToken { .. })
        ));

        assert!(matches!(
            parse_definition("name = ", &registry()),
            Err(ThemeError::Toml(_))
        ));
        assert!(matches!(
            parse_definition("name = \"x\"\nextends = \"neon\"", &registry()),
            Err(ThemeError::UnknownTheme(name)) if name == "neon"
        ));
    }

    #[test]
    fn loaded_theme_is_registered_and_total() {
        let mut registry = registry();
        let theme = registry
            .load_str(
                r##"
                name = "midnight"
                [colors.background]
                main = "#000010"
            "##,
            )
            .unwrap();
        assert_eq!(
            theme.lookup("background.main"),
            Some(&ColorValue::Solid(Color::from_hex(0x000010)))
        );
        assert_eq!(theme.iter().count(), Role::ALL.len());
        assert!(registry.contains("midnight"));
    }
}
