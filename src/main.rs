#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_runtime;
mod app_types;
mod bridge_commands;
mod logging;
mod main_window;
mod progress;
mod shell_config;
mod status_channel;
mod status_display;
mod test_window;
mod update_check;
mod update_events;
mod update_monitor;

pub(crate) use app_constants::*;
pub(crate) use app_types::{
    AtomicFlagGuard, ShellBridgeResult, ShellStatusState, TestCounterState, UpdateCheckState,
    UpdateStatusSnapshot,
};
pub(crate) use logging::append_shell_log;

fn main() {
    app_runtime::run();
}
