use tauri::{AppHandle, Manager, Runtime};

use crate::MAIN_WINDOW_LABEL;

/// Shows the main window once its page has loaded, or minimizes it when the
/// start-minimized override is set. A missing window is logged and skipped.
pub(crate) fn present_main_window<R: Runtime, F>(
    app_handle: &AppHandle<R>,
    start_minimized: bool,
    log: F,
) where
    F: Fn(&str),
{
    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        log("present_main_window skipped: main window not found");
        return;
    };

    if start_minimized {
        if let Err(error) = window.minimize() {
            log(&format!("failed to minimize main window: {error}"));
        }
        return;
    }

    if let Err(error) = window.show() {
        log(&format!("failed to show main window: {error}"));
    }
    if let Err(error) = window.set_focus() {
        log(&format!("failed to focus main window: {error}"));
    }
}

/// Brings the existing main window to the front, used when a second launch
/// of the shell is redirected to the running instance.
pub(crate) fn focus_main_window<R: Runtime, F>(app_handle: &AppHandle<R>, log: F)
where
    F: Fn(&str),
{
    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        log("focus_main_window skipped: main window not found");
        return;
    };

    if let Err(error) = window.unminimize() {
        log(&format!("failed to unminimize main window: {error}"));
    }
    if let Err(error) = window.show() {
        log(&format!("failed to show main window: {error}"));
    }
    if let Err(error) = window.set_focus() {
        log(&format!("failed to focus main window: {error}"));
    }
}
