use fltk::{enums::Color, frame::Frame, menu::MenuBar, prelude::*, window::Window};

use crate::app::domain::settings::Theme;

/// Paint the main window chrome and content for the given theme.
pub fn apply_theme(window: &mut Window, menu: &mut MenuBar, content: &mut Frame, theme: Theme) {
    match theme {
        Theme::Dark => {
            window.set_color(Color::from_rgb(25, 25, 25));
            window.set_label_color(Color::from_rgb(220, 220, 220));
            menu.set_color(Color::from_rgb(35, 35, 35));
            menu.set_text_color(Color::from_rgb(220, 220, 220));
            menu.set_selection_color(Color::from_rgb(60, 60, 60)); // Hover color
            content.set_color(Color::from_rgb(30, 30, 30));
            content.set_label_color(Color::from_rgb(220, 220, 220));
        }
        Theme::Light => {
            window.set_color(Color::from_rgb(240, 240, 240));
            window.set_label_color(Color::Black);
            menu.set_color(Color::from_rgb(240, 240, 240));
            menu.set_text_color(Color::Black);
            menu.set_selection_color(Color::from_rgb(200, 200, 200)); // Hover color
            content.set_color(Color::White);
            content.set_label_color(Color::Black);
        }
    }

    window.redraw();
    menu.redraw();
    content.redraw();
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &Window, theme: Theme) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DwmSetWindowAttribute, DWMWINDOWATTRIBUTE};

    unsafe {
        let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);

        let on: i32 = if theme == Theme::Dark { 1 } else { 0 };

        // Try attribute 20 (Windows 11 / Windows 10 2004+)
        let _ = DwmSetWindowAttribute(
            hwnd,
            DWMWINDOWATTRIBUTE(20), // DWMWA_USE_IMMERSIVE_DARK_MODE
            from_ref(&on).cast(),
            size_of::<i32>() as u32,
        );

        // Also try attribute 19 (Windows 10 1809-1903)
        let _ = DwmSetWindowAttribute(
            hwnd,
            DWMWINDOWATTRIBUTE(19),
            from_ref(&on).cast(),
            size_of::<i32>() as u32,
        );
    }
}
