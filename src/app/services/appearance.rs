//! Appearance pane logic, kept free of any widget types.
//!
//! The preferences dialog is a thin shell over this module: widget callbacks
//! translate raw control state into the functions here, and every resulting
//! [`AppearanceChange`] is forwarded to the configuration store, which is the
//! single authority for both the theme and the auto-switch flag. The pane
//! itself holds no shadow state.

use crate::app::domain::settings::{AppSettings, Theme};
use crate::app::infrastructure::error::AppError;
use crate::app::infrastructure::platform;

/// One selectable entry in the theme control.
pub struct ThemeOption {
    pub title: &'static str,
    pub description: &'static str,
}

/// The fixed option list: index 0 = Light, index 1 = Dark.
pub const THEME_OPTIONS: [ThemeOption; 2] = [
    ThemeOption {
        title: "Light",
        description: "The default appearance",
    },
    ThemeOption {
        title: "Dark",
        description: "Dim window chrome and content, easier on the eyes at night",
    },
];

/// Snapshot of the host's dark-mode capability, taken when the dialog opens.
///
/// Injected rather than queried at the interaction site so the pane logic can
/// be exercised without a real OS underneath.
#[derive(Debug, Clone, Copy)]
pub struct DarkModeSupport {
    /// The OS exposes a dark-mode signal at all.
    pub supported: bool,
    /// The signal's value at snapshot time.
    pub enabled: bool,
}

impl DarkModeSupport {
    pub fn detect() -> Self {
        let supported = platform::supports_dark_mode();
        Self {
            supported,
            enabled: supported && platform::is_dark_mode_enabled(),
        }
    }
}

/// One-way change notifications from the pane to the configuration store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppearanceChange {
    SelectedTheme(Theme),
    AutoSwitchTheme(bool),
}

/// Translate a theme control index into a Theme.
///
/// The control is built from [`THEME_OPTIONS`], so anything outside {0, 1}
/// means the control itself is broken. Callers treat the error as a logic
/// defect, not something to recover from with a guessed default.
pub fn theme_from_index(index: i32) -> Result<Theme, AppError> {
    match index {
        0 => Ok(Theme::Light),
        1 => Ok(Theme::Dark),
        _ => Err(AppError::UnknownThemeIndex(index)),
    }
}

/// Index shown as selected in the theme control for a given Theme.
pub fn selected_index(theme: Theme) -> i32 {
    if theme == Theme::Dark { 1 } else { 0 }
}

/// The user explicitly picked the theme at `index`.
///
/// An explicit pick always cancels automatic tracking, even if the picked
/// theme matches what tracking would have produced.
pub fn pick_theme(index: i32) -> Result<Vec<AppearanceChange>, AppError> {
    let theme = theme_from_index(index)?;
    Ok(vec![
        AppearanceChange::SelectedTheme(theme),
        AppearanceChange::AutoSwitchTheme(false),
    ])
}

/// The user toggled "automatically switch theme".
///
/// Turning it on reads the OS snapshot once and synthesizes the matching
/// control index, going through the same translation as an explicit pick.
/// The flag change is emitted after the theme sync, so the store always lands
/// on the toggled value. Turning it off changes the flag only.
pub fn toggle_auto_switch(
    checked: bool,
    dark_mode: &DarkModeSupport,
) -> Result<Vec<AppearanceChange>, AppError> {
    let mut changes = Vec::with_capacity(2);

    if checked {
        let index = if dark_mode.enabled { 1 } else { 0 };
        changes.push(AppearanceChange::SelectedTheme(theme_from_index(index)?));
    }

    changes.push(AppearanceChange::AutoSwitchTheme(checked));
    Ok(changes)
}

/// Whether the auto-switch control is rendered at all. When the OS has no
/// dark-mode signal the toggle is omitted, not disabled.
pub fn shows_auto_switch(dark_mode: &DarkModeSupport) -> bool {
    dark_mode.supported
}

/// Resolve the theme to apply at startup: a live OS snapshot when auto-switch
/// is on and the platform can answer, the stored choice otherwise.
pub fn effective_theme(settings: &AppSettings, dark_mode: &DarkModeSupport) -> Theme {
    if settings.auto_switch_theme && dark_mode.supported {
        if dark_mode.enabled { Theme::Dark } else { Theme::Light }
    } else {
        settings.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dark_mode(supported: bool, enabled: bool) -> DarkModeSupport {
        DarkModeSupport { supported, enabled }
    }

    #[test]
    fn test_theme_from_index_valid() {
        assert_eq!(theme_from_index(0).unwrap(), Theme::Light);
        assert_eq!(theme_from_index(1).unwrap(), Theme::Dark);
    }

    #[test]
    fn test_theme_from_index_out_of_range() {
        assert!(matches!(
            theme_from_index(2),
            Err(AppError::UnknownThemeIndex(2))
        ));
        assert!(matches!(
            theme_from_index(-1),
            Err(AppError::UnknownThemeIndex(-1))
        ));
    }

    #[test]
    fn test_selected_index_projection() {
        assert_eq!(selected_index(Theme::Light), 0);
        assert_eq!(selected_index(Theme::Dark), 1);
        // Idempotent: same input, same index
        assert_eq!(selected_index(Theme::Dark), selected_index(Theme::Dark));
    }

    #[test]
    fn test_index_roundtrips_through_projection() {
        for index in [0, 1] {
            let theme = theme_from_index(index).unwrap();
            assert_eq!(selected_index(theme), index);
        }
    }

    #[test]
    fn test_pick_theme_forces_auto_switch_off() {
        let changes = pick_theme(1).unwrap();
        assert_eq!(
            changes,
            vec![
                AppearanceChange::SelectedTheme(Theme::Dark),
                AppearanceChange::AutoSwitchTheme(false),
            ]
        );

        let changes = pick_theme(0).unwrap();
        assert_eq!(
            changes,
            vec![
                AppearanceChange::SelectedTheme(Theme::Light),
                AppearanceChange::AutoSwitchTheme(false),
            ]
        );
    }

    #[test]
    fn test_pick_theme_bad_index_emits_nothing() {
        let err = pick_theme(3).unwrap_err();
        assert!(matches!(err, AppError::UnknownThemeIndex(3)));
    }

    #[test]
    fn test_toggle_on_while_os_dark() {
        let changes = toggle_auto_switch(true, &dark_mode(true, true)).unwrap();
        assert_eq!(
            changes,
            vec![
                AppearanceChange::SelectedTheme(Theme::Dark),
                AppearanceChange::AutoSwitchTheme(true),
            ]
        );
    }

    #[test]
    fn test_toggle_on_while_os_light() {
        let changes = toggle_auto_switch(true, &dark_mode(true, false)).unwrap();
        assert_eq!(
            changes,
            vec![
                AppearanceChange::SelectedTheme(Theme::Light),
                AppearanceChange::AutoSwitchTheme(true),
            ]
        );
    }

    #[test]
    fn test_toggle_on_flag_change_comes_last() {
        // The store must land on auto-switch = true; the theme sync can
        // never clobber it because it is emitted first.
        let changes = toggle_auto_switch(true, &dark_mode(true, true)).unwrap();
        assert_eq!(
            changes.last(),
            Some(&AppearanceChange::AutoSwitchTheme(true))
        );
    }

    #[test]
    fn test_toggle_off_leaves_theme_alone() {
        let changes = toggle_auto_switch(false, &dark_mode(true, true)).unwrap();
        assert_eq!(changes, vec![AppearanceChange::AutoSwitchTheme(false)]);
    }

    #[test]
    fn test_effective_theme_manual() {
        let settings = AppSettings {
            theme: Theme::Dark,
            auto_switch_theme: false,
        };
        assert_eq!(effective_theme(&settings, &dark_mode(true, false)), Theme::Dark);
    }

    #[test]
    fn test_effective_theme_auto_follows_os() {
        let settings = AppSettings {
            theme: Theme::Light,
            auto_switch_theme: true,
        };
        assert_eq!(effective_theme(&settings, &dark_mode(true, true)), Theme::Dark);
        assert_eq!(effective_theme(&settings, &dark_mode(true, false)), Theme::Light);
    }

    #[test]
    fn test_effective_theme_auto_without_support_uses_stored() {
        let settings = AppSettings {
            theme: Theme::Dark,
            auto_switch_theme: true,
        };
        assert_eq!(effective_theme(&settings, &dark_mode(false, false)), Theme::Dark);
    }

    #[test]
    fn test_auto_switch_control_omitted_without_support() {
        // Regardless of the stored flag value, the control does not render
        assert!(!shows_auto_switch(&dark_mode(false, false)));
        assert!(shows_auto_switch(&dark_mode(true, false)));
    }

    #[test]
    fn test_option_list_matches_translation() {
        assert_eq!(THEME_OPTIONS.len(), 2);
        assert_eq!(THEME_OPTIONS[0].title, "Light");
        assert_eq!(THEME_OPTIONS[1].title, "Dark");
    }
}
