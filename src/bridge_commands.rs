use tauri::{AppHandle, State};

use crate::{
    append_shell_log, shell_config, test_window, update_check, ShellBridgeResult, ShellStatusState,
    TestCounterState, UpdateStatusSnapshot,
};

fn format_ping_log(arg: &str) -> String {
    format!("IPC test: {arg}")
}

fn ping_reply() -> String {
    "IPC test: pong".to_string()
}

/// Request/reply ping used by the UI to probe the bridge.
#[tauri::command]
pub(crate) fn shell_bridge_ping(message: String) -> String {
    append_shell_log(&format_ping_log(&message));
    ping_reply()
}

/// Readiness signal from the UI. Kicks off the eager update check unless
/// the kill switch is set; an already-running check is left alone.
#[tauri::command]
pub(crate) fn shell_bridge_ui_ready(app_handle: AppHandle, marker: Option<String>) {
    append_shell_log(&format!(
        "ui ready: {}",
        marker.as_deref().unwrap_or("(no marker)")
    ));

    if !shell_config::auto_update_check_enabled() {
        append_shell_log("auto update check disabled, skipping eager check");
        return;
    }

    update_check::spawn_update_check(app_handle);
}

#[tauri::command]
pub(crate) fn shell_bridge_open_test_window(app_handle: AppHandle) -> ShellBridgeResult {
    match test_window::open_test_window(&app_handle) {
        Ok(()) => ShellBridgeResult {
            ok: true,
            reason: None,
        },
        Err(error) => {
            append_shell_log(&format!("failed to open test window: {error}"));
            ShellBridgeResult {
                ok: false,
                reason: Some(error),
            }
        }
    }
}

#[tauri::command]
pub(crate) fn shell_bridge_increment_counter(counter: State<'_, TestCounterState>) -> u64 {
    counter.increment()
}

/// Pull-side of the status feed, for surfaces that missed the push.
#[tauri::command]
pub(crate) fn shell_bridge_get_update_status(
    status: State<'_, ShellStatusState>,
) -> UpdateStatusSnapshot {
    let state = status
        .display
        .lock()
        .ok()
        .and_then(|guard| guard.as_ref().map(|display| display.snapshot()))
        .unwrap_or_default();

    UpdateStatusSnapshot {
        message: state.message,
        is_updating: state.is_updating,
    }
}
