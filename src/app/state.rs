use std::cell::RefCell;
use std::rc::Rc;

use fltk::{app::Sender, frame::Frame, menu::MenuBar, window::Window};

use super::domain::messages::Message;
use super::domain::settings::{AppSettings, Theme};
use super::services::appearance::{self, AppearanceChange, DarkModeSupport};
use crate::ui::dialogs::appearance::show_appearance_dialog;
use crate::ui::theme::apply_theme;
#[cfg(target_os = "windows")]
use crate::ui::theme::set_windows_titlebar_theme;

/// Main application coordinator. Owns the widgets and the authoritative
/// settings; the appearance dialog only proposes changes through the channel.
pub struct AppState {
    pub window: Window,
    pub menu: MenuBar,
    pub content: Frame,
    pub sender: Sender<Message>,
    pub settings: Rc<RefCell<AppSettings>>,
    /// Theme currently painted on the widgets.
    pub theme: Theme,
}

impl AppState {
    pub fn new(
        window: Window,
        menu: MenuBar,
        content: Frame,
        sender: Sender<Message>,
        settings: Rc<RefCell<AppSettings>>,
    ) -> Self {
        let theme = appearance::effective_theme(&settings.borrow(), &DarkModeSupport::detect());
        Self {
            window,
            menu,
            content,
            sender,
            settings,
            theme,
        }
    }

    /// Paint the startup theme. Call after `window.show()` so the Windows
    /// titlebar attribute has a real handle to work with.
    pub fn apply_startup_theme(&mut self) {
        self.apply(self.theme);
    }

    fn apply(&mut self, theme: Theme) {
        self.theme = theme;
        apply_theme(&mut self.window, &mut self.menu, &mut self.content, theme);
        #[cfg(target_os = "windows")]
        set_windows_titlebar_theme(&self.window, theme);
    }

    /// Handle one channel message. Returns `true` if the app should exit.
    pub fn handle(&mut self, msg: Message) -> bool {
        match msg {
            Message::Quit => return true,
            Message::OpenPreferences => self.open_preferences(),
            Message::ToggleDarkMode => self.toggle_dark_mode(),
            Message::SelectedThemeChanged(theme) => {
                self.apply_change(AppearanceChange::SelectedTheme(theme));
            }
            Message::AutoSwitchThemeChanged(flag) => {
                self.apply_change(AppearanceChange::AutoSwitchTheme(flag));
            }
        }
        false
    }

    pub fn open_preferences(&mut self) {
        let current = self.settings.borrow().clone();
        show_appearance_dialog(&current, DarkModeSupport::detect(), &self.sender);
    }

    /// Menu shortcut for an explicit pick of the opposite theme. Goes through
    /// the same pick path as the dialog, so it also cancels auto-switching.
    pub fn toggle_dark_mode(&mut self) {
        let index = if self.theme == Theme::Dark { 0 } else { 1 };
        let changes = appearance::pick_theme(index)
            .expect("opposite of the current theme is always in the option list");
        for change in changes {
            self.apply_change(change);
        }
    }

    fn apply_change(&mut self, change: AppearanceChange) {
        match change {
            AppearanceChange::SelectedTheme(theme) => {
                self.settings.borrow_mut().theme = theme;
                self.apply(theme);
            }
            AppearanceChange::AutoSwitchTheme(flag) => {
                self.settings.borrow_mut().auto_switch_theme = flag;
            }
        }

        if let Err(e) = self.settings.borrow().save() {
            eprintln!("Failed to save settings: {}", e);
        }
    }
}
