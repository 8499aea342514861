use fltk::{
    app::Sender,
    button::{Button, CheckButton, RadioRoundButton},
    enums::{Align, Color},
    frame::Frame,
    group::Group,
    prelude::*,
    window::Window,
};

use crate::app::domain::messages::Message;
use crate::app::domain::settings::AppSettings;
use crate::app::services::appearance::{self, AppearanceChange, DarkModeSupport, THEME_OPTIONS};

// The controls are built from the fixed option list, so an index the core
// rejects means the dialog itself is broken.
const BAD_INDEX: &str = "theme control produced an index outside the fixed option list";

fn message_for(change: AppearanceChange) -> Message {
    match change {
        AppearanceChange::SelectedTheme(theme) => Message::SelectedThemeChanged(theme),
        AppearanceChange::AutoSwitchTheme(flag) => Message::AutoSwitchThemeChanged(flag),
    }
}

/// Show the appearance preferences dialog.
///
/// Changes are applied live: every interaction sends the resulting change
/// notifications to the configuration store through the channel, and there is
/// nothing to confirm or cancel.
pub fn show_appearance_dialog(
    current: &AppSettings,
    dark_mode: DarkModeSupport,
    sender: &Sender<Message>,
) {
    let mut dialog = Window::default()
        .with_size(380, 270)
        .with_label("Preferences")
        .center_screen();
    dialog.make_modal(true);

    Frame::default()
        .with_pos(15, 15)
        .with_size(350, 25)
        .with_label("Theme:")
        .with_align(Align::Left | Align::Inside);

    let theme_group = Group::default().with_pos(30, 45).with_size(320, 100);
    let mut radios = Vec::with_capacity(THEME_OPTIONS.len());
    for (i, option) in THEME_OPTIONS.iter().enumerate() {
        let y = 45 + i as i32 * 50;
        let mut radio = RadioRoundButton::default()
            .with_pos(30, y)
            .with_size(320, 25)
            .with_label(option.title);
        let mut desc = Frame::default()
            .with_pos(48, y + 25)
            .with_size(302, 20)
            .with_label(option.description)
            .with_align(Align::Left | Align::Inside | Align::Wrap);
        desc.set_label_size(11);
        desc.set_label_color(Color::from_rgb(100, 100, 100));
        if i as i32 == appearance::selected_index(current.theme) {
            radio.set_value(true);
        }
        radios.push(radio);
    }
    theme_group.end();

    // Absent, not disabled, when the OS has no dark-mode signal to follow
    let auto_check = if appearance::shows_auto_switch(&dark_mode) {
        let mut check = CheckButton::default()
            .with_pos(30, 155)
            .with_size(320, 25)
            .with_label("Automatically switch theme to match the system theme");
        check.set_value(current.auto_switch_theme);
        Some(check)
    } else {
        None
    };

    let mut close_btn = Button::default()
        .with_pos(275, 225)
        .with_size(90, 30)
        .with_label("Close");

    dialog.end();
    dialog.show();

    for (i, radio) in radios.iter_mut().enumerate() {
        let sender = sender.clone();
        let auto_check = auto_check.clone();
        radio.set_callback(move |_| {
            let changes = appearance::pick_theme(i as i32).expect(BAD_INDEX);
            for change in &changes {
                sender.send(message_for(*change));
            }
            // Reflect the cancelled tracking without waiting on the store
            if let Some(mut check) = auto_check.clone() {
                check.set_value(false);
            }
        });
    }

    if let Some(mut check) = auto_check.clone() {
        let sender = sender.clone();
        let mut radios = radios.clone();
        check.set_callback(move |c| {
            let changes = appearance::toggle_auto_switch(c.value(), &dark_mode).expect(BAD_INDEX);
            for change in &changes {
                if let AppearanceChange::SelectedTheme(theme) = *change {
                    let selected = appearance::selected_index(theme) as usize;
                    for (i, radio) in radios.iter_mut().enumerate() {
                        radio.set_value(i == selected);
                    }
                }
                sender.send(message_for(*change));
            }
        });
    }

    let dialog_close = dialog.clone();
    close_btn.set_callback(move |_| {
        dialog_close.clone().hide();
    });

    super::run_dialog(&dialog);
}
