//! Global theme state singleton
//!
//! Holds the registry built at startup and the theme selected for the
//! session. The registry never changes after init; switching themes only
//! swaps which entry widgets read from.

use crate::error::ThemeError;
use crate::registry::ThemeRegistry;
use crate::schema::Role;
use crate::theme::Theme;
use crate::tokens::ColorValue;
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, OnceLock, RwLock};

/// Global theme state instance
static THEME_STATE: OnceLock<ThemeState> = OnceLock::new();

/// Global redraw callback - set by the app layer to trigger UI updates
static REDRAW_CALLBACK: Mutex<Option<fn()>> = Mutex::new(None);

/// Set the redraw callback function
///
/// Called whenever the active theme or an override changes.
pub fn set_redraw_callback(callback: fn()) {
    *REDRAW_CALLBACK.lock().unwrap() = Some(callback);
}

fn trigger_redraw() {
    // Release the lock first; callbacks may touch theme state again.
    let callback = *REDRAW_CALLBACK.lock().unwrap();
    if let Some(callback) = callback {
        callback();
    }
}

/// Theme state read by widgets during render
pub struct ThemeState {
    registry: ThemeRegistry,

    /// Registry index of the active theme
    active: AtomicUsize,

    /// Runtime color overrides, checked before the active theme
    color_overrides: RwLock<FxHashMap<Role, ColorValue>>,

    /// Set when colors changed since the last repaint
    needs_repaint: AtomicBool,
}

impl ThemeState {
    /// Build a standalone state with `active` selected
    pub fn new(registry: ThemeRegistry, active: &str) -> Result<Self, ThemeError> {
        let index = registry
            .index_of(active)
            .ok_or_else(|| ThemeError::UnknownTheme(active.to_string()))?;
        Ok(Self {
            registry,
            active: AtomicUsize::new(index),
            color_overrides: RwLock::new(FxHashMap::default()),
            needs_repaint: AtomicBool::new(false),
        })
    }

    /// Initialize the global theme state (call once at app startup)
    ///
    /// Only the first successful call installs its registry; later calls
    /// fail with [`ThemeError::AlreadyInitialized`] and leave the existing
    /// state untouched.
    pub fn init(registry: ThemeRegistry, active: &str) -> Result<(), ThemeError> {
        let state = Self::new(registry, active)?;
        if THEME_STATE.set(state).is_err() {
            tracing::warn!("ThemeState::init - already initialized, keeping existing state");
            return Err(ThemeError::AlreadyInitialized);
        }
        tracing::debug!("ThemeState::init - active theme `{active}`");
        Ok(())
    }

    /// Initialize with the built-in presets and the default theme active
    pub fn init_default() -> Result<(), ThemeError> {
        Self::init(ThemeRegistry::builtin()?, crate::themes::DEFAULT_THEME)
    }

    /// Get the global theme state instance
    pub fn get() -> &'static ThemeState {
        THEME_STATE
            .get()
            .expect("ThemeState not initialized. Call ThemeState::init() at app startup.")
    }

    /// Try to get the global theme state (returns None if not initialized)
    pub fn try_get() -> Option<&'static ThemeState> {
        THEME_STATE.get()
    }

    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    // ========== Active Theme ==========

    /// The theme currently selected
    pub fn active(&self) -> &Theme {
        self.registry.by_index(self.active.load(Ordering::SeqCst))
    }

    pub fn active_name(&self) -> &str {
        self.active().name()
    }

    /// Select a registered theme by name
    pub fn set_active(&self, name: &str) -> Result<(), ThemeError> {
        let index = self
            .registry
            .index_of(name)
            .ok_or_else(|| ThemeError::UnknownTheme(name.to_string()))?;
        let previous = self.active.swap(index, Ordering::SeqCst);
        if previous != index {
            tracing::debug!(
                "ThemeState::set_active - switching from `{}` to `{}`",
                self.registry.by_index(previous).name(),
                name
            );
            self.needs_repaint.store(true, Ordering::SeqCst);
            trigger_redraw();
        }
        Ok(())
    }

    // ========== Color Access ==========

    /// Get a role color (checks override first)
    pub fn color(&self, role: Role) -> ColorValue {
        if let Some(value) = self.color_overrides.read().unwrap().get(&role) {
            return value.clone();
        }
        self.active().color(role).clone()
    }

    /// Get a role color by dotted path; unknown paths apply no color
    pub fn lookup(&self, path: &str) -> Option<ColorValue> {
        Role::from_path(path).map(|role| self.color(role))
    }

    /// Set a color override (triggers repaint)
    pub fn set_color_override(&self, role: Role, value: impl Into<ColorValue>) {
        self.color_overrides
            .write()
            .unwrap()
            .insert(role, value.into());
        self.needs_repaint.store(true, Ordering::SeqCst);
        trigger_redraw();
    }

    /// Remove a color override
    pub fn remove_color_override(&self, role: Role) {
        self.color_overrides.write().unwrap().remove(&role);
        self.needs_repaint.store(true, Ordering::SeqCst);
        trigger_redraw();
    }

    /// Clear all overrides
    pub fn clear_overrides(&self) {
        self.color_overrides.write().unwrap().clear();
        self.needs_repaint.store(true, Ordering::SeqCst);
        trigger_redraw();
    }

    // ========== Dirty Flags ==========

    /// Check if theme changes require repaint
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint.load(Ordering::SeqCst)
    }

    /// Clear the repaint flag
    pub fn clear_repaint(&self) {
        self.needs_repaint.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::{pink, DEFAULT_THEME, PINK_THEME};
    use crate::tokens::Color;

    fn state() -> ThemeState {
        ThemeState::new(ThemeRegistry::builtin().unwrap(), DEFAULT_THEME).unwrap()
    }

    #[test]
    fn unknown_initial_theme_is_rejected() {
        let err = ThemeState::new(ThemeRegistry::builtin().unwrap(), "neon").err();
        assert!(matches!(err, Some(ThemeError::UnknownTheme(name)) if name == "neon"));
    }

    #[test]
    fn switching_themes_changes_colors_and_marks_repaint() {
        let state = state();
        assert!(!state.needs_repaint());

        state.set_active(PINK_THEME).unwrap();
        assert_eq!(state.active_name(), PINK_THEME);
        assert_eq!(
            state.color(Role::VideoContextSliderFilled).solid(),
            Some(pink::pink::C200)
        );
        assert!(state.needs_repaint());

        state.clear_repaint();
        state.set_active(PINK_THEME).unwrap();
        assert!(!state.needs_repaint(), "re-selecting is a no-op");

        assert!(state.set_active("neon").is_err());
        assert_eq!(state.active_name(), PINK_THEME);
    }

    #[test]
    fn overrides_shadow_the_active_theme_until_removed() {
        let state = state();
        let red = Color::from_hex(0xFF0000);

        state.set_color_override(Role::MediaCardBarFillColor, red);
        assert_eq!(
            state.lookup("mediaCard.barFillColor"),
            Some(ColorValue::Solid(red))
        );

        // overrides survive a theme switch
        state.set_active(PINK_THEME).unwrap();
        assert_eq!(state.color(Role::MediaCardBarFillColor).solid(), Some(red));

        state.remove_color_override(Role::MediaCardBarFillColor);
        assert_eq!(
            state.color(Role::MediaCardBarFillColor).solid(),
            Some(pink::pink::C100)
        );

        state.set_color_override(Role::BackgroundMain, ColorValue::var("--page"));
        state.clear_overrides();
        assert_eq!(
            state.color(Role::BackgroundMain).solid(),
            Some(pink::shade::C900)
        );
        assert_eq!(state.lookup("background.glow"), None);
    }
}
