//! The canonical role schema
//!
//! Every theme maps each [`Role`] to a color. Roles are addressed by the
//! dotted paths the styling layer reads (`mediaCard.barFillColor`,
//! `video.context.type.main`), so the path strings are the contract with the
//! widgets and must not change.

use crate::error::ThemeError;
use rustc_hash::FxHashMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::OnceLock;

macro_rules! roles {
    ($($variant:ident => $path:literal),* $(,)?) => {
        /// Semantic color role keys for dynamic access
        #[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
        pub enum Role {
            $($variant,)*
        }

        impl Role {
            /// Every role, in schema order
            pub const ALL: &'static [Role] = &[$(Role::$variant,)*];

            /// Dotted role path
            pub fn path(self) -> &'static str {
                match self {
                    $(Role::$variant => $path,)*
                }
            }
        }
    };
}

roles! {
    // Theme picker preview swatches
    ThemePreviewPrimary => "themePreview.primary",
    ThemePreviewSecondary => "themePreview.secondary",
    ThemePreviewGhost => "themePreview.ghost",

    // Branding
    PillBackground => "pill.background",
    PillBackgroundHover => "pill.backgroundHover",
    PillHighlight => "pill.highlight",
    PillActiveBackground => "pill.activeBackground",

    GlobalAccentA => "global.accentA",
    GlobalAccentB => "global.accentB",

    LightBarLight => "lightBar.light",

    // Buttons
    ButtonsToggle => "buttons.toggle",
    ButtonsToggleDisabled => "buttons.toggleDisabled",
    ButtonsDanger => "buttons.danger",
    ButtonsDangerHover => "buttons.dangerHover",
    ButtonsSecondary => "buttons.secondary",
    ButtonsSecondaryText => "buttons.secondaryText",
    ButtonsSecondaryHover => "buttons.secondaryHover",
    ButtonsPrimary => "buttons.primary",
    ButtonsPrimaryText => "buttons.primaryText",
    ButtonsPrimaryHover => "buttons.primaryHover",
    ButtonsPurple => "buttons.purple",
    ButtonsPurpleHover => "buttons.purpleHover",
    ButtonsCancel => "buttons.cancel",
    ButtonsCancelHover => "buttons.cancelHover",

    // Page body
    BackgroundMain => "background.main",
    BackgroundSecondary => "background.secondary",
    BackgroundSecondaryHover => "background.secondaryHover",
    BackgroundAccentA => "background.accentA",
    BackgroundAccentB => "background.accentB",

    ModalBackground => "modal.background",

    // Typography
    TypeLogo => "type.logo",
    TypeEmphasis => "type.emphasis",
    TypeText => "type.text",
    TypeDimmed => "type.dimmed",
    TypeDivider => "type.divider",
    TypeSecondary => "type.secondary",
    TypeDanger => "type.danger",
    TypeSuccess => "type.success",
    TypeLink => "type.link",
    TypeLinkHover => "type.linkHover",

    // Search bar
    SearchBackground => "search.background",
    SearchHoverBackground => "search.hoverBackground",
    SearchFocused => "search.focused",
    SearchPlaceholder => "search.placeholder",
    SearchIcon => "search.icon",
    SearchText => "search.text",

    // Media cards
    MediaCardHoverBackground => "mediaCard.hoverBackground",
    MediaCardHoverAccent => "mediaCard.hoverAccent",
    MediaCardHoverShadow => "mediaCard.hoverShadow",
    MediaCardShadow => "mediaCard.shadow",
    MediaCardBarColor => "mediaCard.barColor",
    MediaCardBarFillColor => "mediaCard.barFillColor",
    MediaCardBadge => "mediaCard.badge",
    MediaCardBadgeText => "mediaCard.badgeText",

    LargeCardBackground => "largeCard.background",
    LargeCardIcon => "largeCard.icon",

    // Dropdown
    DropdownBackground => "dropdown.background",
    DropdownAltBackground => "dropdown.altBackground",
    DropdownHoverBackground => "dropdown.hoverBackground",
    DropdownHighlight => "dropdown.highlight",
    DropdownHighlightHover => "dropdown.highlightHover",
    DropdownText => "dropdown.text",
    DropdownSecondary => "dropdown.secondary",
    DropdownBorder => "dropdown.border",
    DropdownContentBackground => "dropdown.contentBackground",

    // Passphrase
    AuthenticationBorder => "authentication.border",
    AuthenticationInputBg => "authentication.inputBg",
    AuthenticationInputBgHover => "authentication.inputBgHover",
    AuthenticationWordBackground => "authentication.wordBackground",
    AuthenticationCopyText => "authentication.copyText",
    AuthenticationCopyTextHover => "authentication.copyTextHover",
    AuthenticationErrorText => "authentication.errorText",

    // Settings page
    SettingsSidebarActiveLink => "settings.sidebar.activeLink",
    SettingsSidebarBadge => "settings.sidebar.badge",
    SettingsSidebarTypeSecondary => "settings.sidebar.type.secondary",
    SettingsSidebarTypeInactive => "settings.sidebar.type.inactive",
    SettingsSidebarTypeIcon => "settings.sidebar.type.icon",
    SettingsSidebarTypeIconActivated => "settings.sidebar.type.iconActivated",
    SettingsSidebarTypeActivated => "settings.sidebar.type.activated",
    SettingsCardBorder => "settings.card.border",
    SettingsCardBackground => "settings.card.background",
    SettingsCardAltBackground => "settings.card.altBackground",
    SettingsSaveBarBackground => "settings.saveBar.background",

    UtilsDivider => "utils.divider",

    // Onboarding
    OnboardingBar => "onboarding.bar",
    OnboardingBarFilled => "onboarding.barFilled",
    OnboardingDivider => "onboarding.divider",
    OnboardingCard => "onboarding.card",
    OnboardingCardHover => "onboarding.cardHover",
    OnboardingBorder => "onboarding.border",
    OnboardingGood => "onboarding.good",
    OnboardingBest => "onboarding.best",
    OnboardingLink => "onboarding.link",

    // Error page
    ErrorsCard => "errors.card",
    ErrorsBorder => "errors.border",
    ErrorsTypeSecondary => "errors.type.secondary",

    AboutCircle => "about.circle",
    AboutCircleText => "about.circleText",

    EditBadgeBg => "editBadge.bg",
    EditBadgeBgHover => "editBadge.bgHover",
    EditBadgeText => "editBadge.text",

    ProgressBackground => "progress.background",
    ProgressPreloaded => "progress.preloaded",
    ProgressFilled => "progress.filled",

    // Video player
    VideoButtonBackground => "video.buttonBackground",
    VideoAutoPlayBackground => "video.autoPlay.background",
    VideoAutoPlayHover => "video.autoPlay.hover",
    VideoScrapingCard => "video.scraping.card",
    VideoScrapingError => "video.scraping.error",
    VideoScrapingSuccess => "video.scraping.success",
    VideoScrapingLoading => "video.scraping.loading",
    VideoScrapingNoresult => "video.scraping.noresult",
    VideoAudioSet => "video.audio.set",

    // Player context menus (settings, volume, captions)
    VideoContextBackground => "video.context.background",
    VideoContextLight => "video.context.light",
    VideoContextBorder => "video.context.border",
    VideoContextHoverColor => "video.context.hoverColor",
    VideoContextButtonFocus => "video.context.buttonFocus",
    VideoContextFlagBg => "video.context.flagBg",
    VideoContextInputBg => "video.context.inputBg",
    VideoContextButtonOverInputHover => "video.context.buttonOverInputHover",
    VideoContextInputPlaceholder => "video.context.inputPlaceholder",
    VideoContextCardBorder => "video.context.cardBorder",
    VideoContextSlider => "video.context.slider",
    VideoContextSliderFilled => "video.context.sliderFilled",
    VideoContextError => "video.context.error",
    VideoContextButtonsList => "video.context.buttons.list",
    VideoContextButtonsActive => "video.context.buttons.active",
    VideoContextCloseHover => "video.context.closeHover",
    VideoContextTypeMain => "video.context.type.main",
    VideoContextTypeSecondary => "video.context.type.secondary",
    VideoContextTypeAccent => "video.context.type.accent",
}

impl Role {
    /// Find the role for a dotted path; unknown paths yield `None`
    pub fn from_path(path: &str) -> Option<Role> {
        static BY_PATH: OnceLock<FxHashMap<&'static str, Role>> = OnceLock::new();
        BY_PATH
            .get_or_init(|| Role::ALL.iter().map(|role| (role.path(), *role)).collect())
            .get(path)
            .copied()
    }

    /// Name of the CSS custom property the styling layer reads for this role
    ///
    /// `mediaCard.hoverAccent` -> `--colors-mediaCard-hoverAccent`
    pub fn css_variable(self) -> String {
        format!("--colors-{}", self.path().replace('.', "-"))
    }

    /// Path segments, outermost branch first
    pub fn segments(self) -> impl Iterator<Item = &'static str> {
        self.path().split('.')
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Role {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::from_path(s).ok_or_else(|| ThemeError::UnknownRole(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn role_paths_are_unique() {
        let paths: FxHashSet<&str> = Role::ALL.iter().map(|r| r.path()).collect();
        assert_eq!(paths.len(), Role::ALL.len());
    }

    #[test]
    fn no_role_path_is_a_prefix_branch_of_another() {
        // A leaf cannot also be a branch, or nested export would collide.
        for role in Role::ALL {
            let branch = format!("{}.", role.path());
            assert!(
                Role::ALL.iter().all(|other| !other.path().starts_with(&branch)),
                "{role} is both a leaf and a branch"
            );
        }
    }

    #[test]
    fn paths_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::from_path(role.path()), Some(*role));
        }
        assert_eq!(Role::from_path("mediaCard"), None);
        assert!("mediaCard.glow".parse::<Role>().is_err());
    }

    #[test]
    fn css_variable_names_keep_camel_case_segments() {
        assert_eq!(
            Role::MediaCardHoverAccent.css_variable(),
            "--colors-mediaCard-hoverAccent"
        );
        assert_eq!(
            Role::VideoContextTypeMain.css_variable(),
            "--colors-video-context-type-main"
        );
    }
}
