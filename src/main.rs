use std::cell::RefCell;
use std::rc::Rc;

use fltk::{app, prelude::*};

use nocturne::app::domain::{AppSettings, Message};
use nocturne::app::state::AppState;
use nocturne::ui::main_window::build_main_window;

fn main() {
    let fltk_app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let settings = Rc::new(RefCell::new(AppSettings::load()));
    let widgets = build_main_window(&sender);

    let mut state = AppState::new(
        widgets.wind,
        widgets.menu,
        widgets.content,
        sender,
        settings,
    );

    state.window.show();
    state.apply_startup_theme();

    while fltk_app.wait() {
        if let Some(msg) = receiver.recv() {
            if state.handle(msg) {
                break;
            }
        }
    }
}
