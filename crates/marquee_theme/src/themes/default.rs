//! Default grayscale theme
//!
//! The base every other built-in theme extends. It defines every role, so it
//! resolves without a parent.

use crate::schema::Role::*;
use crate::theme::ThemeDefinition;
use crate::tokens::{Accents, Color, Palette};

/// Registry name of the default theme
pub const DEFAULT_THEME: &str = "default";

pub const BLACK: Color = Color::from_hex(0x000000);

crate::ramp! {
    /// Neutral grays, light to dark
    pub mod gray = "gray" {
        C100 = 0xE0E0E0,
        C200 = 0xB0B0B0,
        C300 = 0x808080,
        C400 = 0x606060,
        C500 = 0x404040,
        C600 = 0x303030,
        C700 = 0x202020,
        C800 = 0x121212,
        C900 = 0x000000,
    }
}

crate::ramp! {
    /// Near-black shades used for shadows and overlays
    pub mod shade = "shade" {
        C25 = 0x6D6D6D,
        C50 = 0x585858,
        C100 = 0x404040,
        C200 = 0x303030,
        C300 = 0x1A1A1A,
        C400 = 0x121212,
        C500 = 0x0D0D0D,
        C600 = 0x0A0A0A,
        C700 = 0x050505,
        C800 = 0x000000,
        C900 = 0x000000,
    }
}

crate::ramp! {
    pub mod ash = "ash" {
        C50 = 0xB0B0B0,
        C100 = 0x9E9E9E,
        C200 = 0x7D7D7D,
        C300 = 0x5D5D5D,
        C400 = 0x3D3D3D,
        C500 = 0x2E2E2E,
        C600 = 0x1F1F1F,
        C700 = 0x101010,
        C800 = 0x080808,
        C900 = 0x000000,
    }
}

/// Accent roles (gray tones in the default theme)
pub mod accent {
    use crate::tokens::Color;

    pub const PRIMARY: Color = Color::from_hex(0xB0B0B0);
    pub const SECONDARY: Color = Color::from_hex(0x9E9E9E);
    pub const ERROR: Color = Color::from_hex(0x7D7D7D);
}

pub fn palette() -> Palette {
    Palette::new()
        .with_color("black", BLACK)
        .with_ramp(gray::ramp())
        .with_ramp(shade::ramp())
        .with_ramp(ash::ramp())
        .with_accents(Accents::new(
            accent::PRIMARY,
            accent::SECONDARY,
            accent::ERROR,
        ))
}

pub fn definition() -> ThemeDefinition {
    ThemeDefinition::new(DEFAULT_THEME)
        .with_palette(palette())
        .set(ThemePreviewPrimary, BLACK)
        .set(ThemePreviewSecondary, gray::C600)
        .set(ThemePreviewGhost, gray::C100)
        // Branding
        .set(PillBackground, gray::C500)
        .set(PillBackgroundHover, gray::C400)
        .set(PillHighlight, accent::PRIMARY)
        .set(PillActiveBackground, gray::C500)
        .set(GlobalAccentA, accent::PRIMARY)
        .set(GlobalAccentB, accent::SECONDARY)
        .set(LightBarLight, gray::C700)
        // Buttons
        .set(ButtonsToggle, accent::PRIMARY)
        .set(ButtonsToggleDisabled, ash::C500)
        .set(ButtonsDanger, accent::ERROR)
        .set(ButtonsDangerHover, gray::C500)
        .set(ButtonsSecondary, ash::C700)
        .set(ButtonsSecondaryText, gray::C100)
        .set(ButtonsSecondaryHover, ash::C600)
        .set(ButtonsPrimary, gray::C100)
        .set(ButtonsPrimaryText, BLACK)
        .set(ButtonsPrimaryHover, gray::C200)
        .set(ButtonsPurple, accent::PRIMARY)
        .set(ButtonsPurpleHover, gray::C400)
        .set(ButtonsCancel, ash::C500)
        .set(ButtonsCancelHover, ash::C400)
        // Page body
        .set(BackgroundMain, BLACK)
        .set(BackgroundSecondary, gray::C800)
        .set(BackgroundSecondaryHover, gray::C700)
        .set(BackgroundAccentA, accent::PRIMARY)
        .set(BackgroundAccentB, accent::SECONDARY)
        .set(ModalBackground, gray::C800)
        // Typography
        .set(TypeLogo, accent::PRIMARY)
        .set(TypeEmphasis, gray::C100)
        .set(TypeText, gray::C100)
        .set(TypeDimmed, gray::C300)
        .set(TypeDivider, gray::C500)
        .set(TypeSecondary, gray::C600)
        .set(TypeDanger, accent::ERROR)
        .set(TypeSuccess, accent::SECONDARY)
        .set(TypeLink, accent::PRIMARY)
        .set(TypeLinkHover, accent::PRIMARY)
        // Search bar
        .set(SearchBackground, gray::C700)
        .set(SearchHoverBackground, gray::C600)
        .set(SearchFocused, gray::C500)
        .set(SearchPlaceholder, gray::C300)
        .set(SearchIcon, gray::C300)
        .set(SearchText, gray::C100)
        // Media cards
        .set(MediaCardHoverBackground, gray::C600)
        .set(MediaCardHoverAccent, shade::C500)
        .set(MediaCardHoverShadow, shade::C900)
        .set(MediaCardShadow, shade::C700)
        .set(MediaCardBarColor, ash::C400)
        .set(MediaCardBarFillColor, accent::PRIMARY)
        .set(MediaCardBadge, shade::C600)
        .set(MediaCardBadgeText, gray::C100)
        .set(LargeCardBackground, gray::C700)
        .set(LargeCardIcon, accent::PRIMARY)
        // Dropdown
        .set(DropdownBackground, gray::C700)
        .set(DropdownAltBackground, gray::C800)
        .set(DropdownHoverBackground, gray::C600)
        .set(DropdownHighlight, accent::PRIMARY)
        .set(DropdownHighlightHover, accent::PRIMARY)
        .set(DropdownText, gray::C100)
        .set(DropdownSecondary, gray::C300)
        .set(DropdownBorder, gray::C500)
        .set(DropdownContentBackground, gray::C600)
        // Passphrase
        .set(AuthenticationBorder, gray::C500)
        .set(AuthenticationInputBg, gray::C700)
        .set(AuthenticationInputBgHover, gray::C600)
        .set(AuthenticationWordBackground, gray::C600)
        .set(AuthenticationCopyText, gray::C100)
        .set(AuthenticationCopyTextHover, ash::C50)
        .set(AuthenticationErrorText, accent::ERROR)
        // Settings page
        .set(SettingsSidebarActiveLink, gray::C600)
        .set(SettingsSidebarBadge, gray::C900)
        .set(SettingsSidebarTypeSecondary, gray::C300)
        .set(SettingsSidebarTypeInactive, gray::C500)
        .set(SettingsSidebarTypeIcon, gray::C500)
        .set(SettingsSidebarTypeIconActivated, accent::PRIMARY)
        .set(SettingsSidebarTypeActivated, accent::PRIMARY)
        .set(SettingsCardBorder, gray::C500)
        .set(SettingsCardBackground, gray::C600)
        .set(SettingsCardAltBackground, gray::C600)
        .set(SettingsSaveBarBackground, gray::C800)
        .set(UtilsDivider, gray::C500)
        // Onboarding
        .set(OnboardingBar, gray::C500)
        .set(OnboardingBarFilled, accent::PRIMARY)
        .set(OnboardingDivider, gray::C300)
        .set(OnboardingCard, gray::C800)
        .set(OnboardingCardHover, gray::C700)
        .set(OnboardingBorder, gray::C600)
        .set(OnboardingGood, accent::PRIMARY)
        .set(OnboardingBest, accent::SECONDARY)
        .set(OnboardingLink, accent::PRIMARY)
        // Error page
        .set(ErrorsCard, gray::C800)
        .set(ErrorsBorder, gray::C500)
        .set(ErrorsTypeSecondary, gray::C300)
        .set(AboutCircle, ash::C500)
        .set(AboutCircleText, gray::C100)
        .set(EditBadgeBg, ash::C500)
        .set(EditBadgeBgHover, ash::C400)
        .set(EditBadgeText, gray::C100)
        .set(ProgressBackground, gray::C500)
        .set(ProgressPreloaded, gray::C500)
        .set(ProgressFilled, accent::PRIMARY)
        // Video player
        .set(VideoButtonBackground, ash::C200)
        .set(VideoAutoPlayBackground, ash::C700)
        .set(VideoAutoPlayHover, ash::C500)
        .set(VideoScrapingCard, gray::C700)
        .set(VideoScrapingError, accent::ERROR)
        .set(VideoScrapingSuccess, accent::SECONDARY)
        .set(VideoScrapingLoading, accent::PRIMARY)
        .set(VideoScrapingNoresult, gray::C300)
        .set(VideoAudioSet, accent::PRIMARY)
        .set(VideoContextBackground, gray::C900)
        .set(VideoContextLight, gray::C100)
        .set(VideoContextBorder, gray::C600)
        .set(VideoContextHoverColor, gray::C600)
        .set(VideoContextButtonFocus, gray::C500)
        .set(VideoContextFlagBg, gray::C500)
        .set(VideoContextInputBg, gray::C600)
        .set(VideoContextButtonOverInputHover, gray::C500)
        .set(VideoContextInputPlaceholder, gray::C300)
        .set(VideoContextCardBorder, gray::C700)
        .set(VideoContextSlider, gray::C500)
        .set(VideoContextSliderFilled, accent::PRIMARY)
        .set(VideoContextError, accent::ERROR)
        .set(VideoContextButtonsList, gray::C700)
        .set(VideoContextButtonsActive, gray::C900)
        .set(VideoContextCloseHover, gray::C800)
        .set(VideoContextTypeMain, gray::C500)
        .set(VideoContextTypeSecondary, gray::C300)
        .set(VideoContextTypeAccent, accent::PRIMARY)
}
