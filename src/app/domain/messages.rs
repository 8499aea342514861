use crate::app::domain::settings::Theme;

/// All messages that can be sent through the FLTK channel.
/// Each menu or dialog callback sends one of these; the dispatch loop in main
/// handles them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // File
    Quit,

    // Edit
    OpenPreferences,

    // View
    ToggleDarkMode,

    // Appearance pane -> configuration store
    SelectedThemeChanged(Theme),
    AutoSwitchThemeChanged(bool),
}
