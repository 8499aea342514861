pub mod appearance;

use fltk::{app, prelude::*, window::Window};

/// Pump events while a modal dialog is up. If the app decides to quit while
/// the dialog is open (X on the main window), the dialog is closed too.
pub fn run_dialog(dialog: &Window) {
    while dialog.shown() {
        app::wait();
        if app::should_program_quit() {
            dialog.clone().hide();
        }
    }
}
