use fltk::{
    app::Sender,
    frame::Frame,
    group::Flex,
    menu::MenuBar,
    prelude::*,
    window::Window,
};

use crate::app::domain::messages::Message;

pub struct MainWidgets {
    pub wind: Window,
    pub menu: MenuBar,
    pub content: Frame,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 480, 320, "Nocturne");
    wind.set_xclass("Nocturne");

    let mut flex = Flex::new(0, 0, 480, 320, None);
    flex.set_type(fltk::group::FlexType::Column);

    let mut menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    let mut content = Frame::default();
    content.set_frame(fltk::enums::FrameType::FlatBox);
    content.set_label("Open Edit \u{2192} Preferences\u{2026} to change the theme.");

    flex.end();
    wind.resizable(&flex);
    wind.end();

    let sender_quit = sender.clone();
    menu.add(
        "File/Quit",
        fltk::enums::Shortcut::Ctrl | 'q',
        fltk::menu::MenuFlag::Normal,
        move |_| sender_quit.send(Message::Quit),
    );

    let sender_prefs = sender.clone();
    menu.add(
        "Edit/Preferences...",
        fltk::enums::Shortcut::Ctrl | ',',
        fltk::menu::MenuFlag::Normal,
        move |_| sender_prefs.send(Message::OpenPreferences),
    );

    let sender_toggle = sender.clone();
    menu.add(
        "View/Toggle Dark Mode",
        fltk::enums::Shortcut::None,
        fltk::menu::MenuFlag::Normal,
        move |_| sender_toggle.send(Message::ToggleDarkMode),
    );

    MainWidgets {
        wind,
        menu,
        content,
    }
}
