use tauri::{webview::PageLoadEvent, Manager};

use crate::{
    append_shell_log, main_window, shell_config,
    status_display::{StatusDisplay, TauriStatusFeed},
    ShellStatusState, TestCounterState, UpdateCheckState, MAIN_WINDOW_LABEL,
};

pub(crate) fn run() {
    append_shell_log("desktop process starting");

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app_handle, _argv, _cwd| {
            append_shell_log("second launch redirected to running instance");
            main_window::focus_main_window(app_handle, append_shell_log);
        }))
        .plugin(tauri_plugin_updater::Builder::new().build())
        .plugin(tauri_plugin_process::init())
        .plugin(tauri_plugin_notification::init())
        .manage(UpdateCheckState::default())
        .manage(TestCounterState::default())
        .manage(ShellStatusState::default())
        .invoke_handler(tauri::generate_handler![
            crate::bridge_commands::shell_bridge_ping,
            crate::bridge_commands::shell_bridge_ui_ready,
            crate::bridge_commands::shell_bridge_open_test_window,
            crate::bridge_commands::shell_bridge_increment_counter,
            crate::bridge_commands::shell_bridge_get_update_status,
        ])
        .on_page_load(|webview, payload| {
            if matches!(payload.event(), PageLoadEvent::Finished)
                && webview.window().label() == MAIN_WINDOW_LABEL
            {
                append_shell_log(&format!("main page loaded: {}", payload.url()));
                main_window::present_main_window(
                    webview.app_handle(),
                    shell_config::start_minimized(),
                    append_shell_log,
                );
            }
        })
        .setup(|app| {
            let feed = TauriStatusFeed::new(app.handle().clone());
            let display = StatusDisplay::mount(feed, || {
                append_shell_log("shell status mirror mounted");
            });

            let status_state = app.state::<ShellStatusState>();
            if let Ok(mut guard) = status_state.display.lock() {
                *guard = Some(display);
            }

            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
