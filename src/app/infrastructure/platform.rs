//! Platform-specific dark-mode detection.
//!
//! Two synchronous queries: whether the host OS exposes a dark-mode signal at
//! all, and whether dark mode is currently active. Both are point-in-time
//! reads; nothing here subscribes to OS theme-change events.

/// Whether the host OS exposes a dark-mode preference we know how to read.
#[cfg(any(target_os = "windows", target_os = "macos"))]
pub fn supports_dark_mode() -> bool {
    true
}

/// Whether the host OS exposes a dark-mode preference we know how to read.
/// On Linux this is only meaningful if gsettings is around to ask.
#[cfg(target_os = "linux")]
pub fn supports_dark_mode() -> bool {
    use std::process::Command;

    Command::new("gsettings")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Whether the host OS exposes a dark-mode preference we know how to read.
#[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
pub fn supports_dark_mode() -> bool {
    false
}

/// Current OS dark-mode state. Returns false when detection fails.
pub fn is_dark_mode_enabled() -> bool {
    // Windows: Check registry for dark mode preference
    #[cfg(target_os = "windows")]
    {
        use winreg::RegKey;
        use winreg::enums::HKEY_CURRENT_USER;

        if let Ok(hkcu) = RegKey::predef(HKEY_CURRENT_USER)
            .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
        {
            // AppsUseLightTheme: 0 = dark mode, 1 = light mode
            if let Ok(value) = hkcu.get_value::<u32, _>("AppsUseLightTheme") {
                return value == 0;
            }
        }
    }

    // Linux: ask gsettings, preferring the modern color-scheme key
    #[cfg(target_os = "linux")]
    {
        use std::process::Command;

        if let Ok(output) = Command::new("gsettings")
            .args(["get", "org.gnome.desktop.interface", "color-scheme"])
            .output()
        {
            let scheme = String::from_utf8_lossy(&output.stdout);
            if scheme.contains("prefer-dark") {
                return true;
            }
        }

        // Older desktops only expose it through the GTK theme name
        if let Ok(output) = Command::new("gsettings")
            .args(["get", "org.gnome.desktop.interface", "gtk-theme"])
            .output()
        {
            let theme = String::from_utf8_lossy(&output.stdout).to_lowercase();
            if theme.contains("dark") {
                return true;
            }
        }
    }

    // macOS: AppleInterfaceStyle is only set when dark mode is on
    #[cfg(target_os = "macos")]
    {
        use std::process::Command;

        if let Ok(output) = Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            if output.status.success() {
                let style = String::from_utf8_lossy(&output.stdout).to_lowercase();
                if style.contains("dark") {
                    return true;
                }
            }
        }
    }

    false
}
