//! Subcommand implementations

use anyhow::{bail, Context, Result};
use marquee_theme::{Role, Theme, ThemeRegistry};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Built-in themes plus any theme files given on the command line
pub fn load_registry(theme_files: &[PathBuf]) -> Result<ThemeRegistry> {
    let mut registry = ThemeRegistry::builtin().context("built-in themes failed to resolve")?;
    for path in theme_files {
        let theme = registry
            .load_file(path)
            .with_context(|| format!("failed to load {}", path.display()))?;
        tracing::info!("Registered theme `{}` from {}", theme.name(), path.display());
    }
    Ok(registry)
}

pub fn list(registry: &ThemeRegistry, out: &mut impl Write) -> Result<()> {
    for theme in registry.iter() {
        match theme.parent() {
            Some(parent) => writeln!(out, "{} (extends {parent})", theme.name())?,
            None => writeln!(out, "{}", theme.name())?,
        }
    }
    Ok(())
}

pub fn show(
    registry: &ThemeRegistry,
    name: &str,
    role: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    let theme = registry.require(name)?;
    match role {
        Some(path) => {
            let Some(value) = theme.lookup(path) else {
                bail!("`{path}` is not a theme role");
            };
            writeln!(out, "{value}")?;
        }
        None => {
            for (role, value) in theme.iter() {
                writeln!(out, "{role} = {value}")?;
            }
        }
    }
    Ok(())
}

pub fn css(
    registry: &ThemeRegistry,
    name: &str,
    selector: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    let theme = registry.require(name)?;
    let selector = selector
        .map(str::to_owned)
        .unwrap_or_else(|| default_selector(theme));
    out.write_all(theme.to_css(&selector).as_bytes())?;
    Ok(())
}

pub fn json(registry: &ThemeRegistry, name: &str, out: &mut impl Write) -> Result<()> {
    let theme = registry.require(name)?;
    writeln!(out, "{}", theme.to_json()?)?;
    Ok(())
}

pub fn check(mut registry: ThemeRegistry, file: &Path, out: &mut impl Write) -> Result<()> {
    let name = registry
        .load_file(file)
        .with_context(|| format!("{} is not a valid theme", file.display()))?
        .name()
        .to_string();
    let theme = registry.require(&name)?;
    let inherited = match theme.parent().and_then(|p| registry.get(p)) {
        Some(parent) => Role::ALL
            .iter()
            .filter(|role| theme.color(**role) == parent.color(**role))
            .count(),
        None => 0,
    };
    writeln!(
        out,
        "{}: ok ({} roles, {} same as parent)",
        theme.name(),
        Role::ALL.len(),
        inherited
    )?;
    Ok(())
}

fn default_selector(theme: &Theme) -> String {
    format!(".theme-{}", theme.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn list_shows_parents() {
        let registry = load_registry(&[]).unwrap();
        let text = run(|out| list(&registry, out));
        assert_eq!(text, "default\npink (extends default)\n");
    }

    #[test]
    fn show_single_role() {
        let registry = load_registry(&[]).unwrap();
        let text = run(|out| show(&registry, "pink", Some("mediaCard.barFillColor"), out));
        assert_eq!(text, "#FF99CC\n");

        let mut sink = Vec::new();
        assert!(show(&registry, "pink", Some("mediaCard.glow"), &mut sink).is_err());
        assert!(show(&registry, "neon", None, &mut sink).is_err());
    }

    #[test]
    fn css_uses_theme_selector_by_default() {
        let registry = load_registry(&[]).unwrap();
        let text = run(|out| css(&registry, "default", None, out));
        assert!(text.starts_with(".theme-default {\n"));
        assert!(text.contains("--colors-mediaCard-barFillColor: #B0B0B0;"));
    }

    #[test]
    fn json_nests_role_paths() {
        let registry = load_registry(&[]).unwrap();
        let text = run(|out| json(&registry, "pink", out));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["name"], "pink");
        assert_eq!(value["extends"], "default");
        assert_eq!(value["colors"]["video"]["context"]["sliderFilled"], "#FF66B2");
    }
}
