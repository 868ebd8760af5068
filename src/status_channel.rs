//! Main -> UI status channels.
//!
//! Two unidirectional channels with fixed payload shapes: `message` carries a
//! display string, `isUpdating` carries a boolean. Sends are fire-and-forget.

use tauri::{AppHandle, Emitter, Manager, Runtime};

use crate::{append_shell_log, IS_UPDATING_EVENT, MAIN_WINDOW_LABEL, STATUS_MESSAGE_EVENT};

pub(crate) trait StatusChannel {
    fn send_message(&self, message: &str);
    fn send_is_updating(&self, updating: bool);
}

/// Posts status to the main window's content view. The window may not exist
/// yet, or may already be closed; either way the send is silently skipped.
pub(crate) struct MainWindowChannel<R: Runtime> {
    app_handle: AppHandle<R>,
}

impl<R: Runtime> MainWindowChannel<R> {
    pub(crate) fn new(app_handle: AppHandle<R>) -> Self {
        Self { app_handle }
    }

    fn emit_to_main_window<P: serde::Serialize + Clone>(&self, event: &str, payload: P) {
        let Some(window) = self.app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
            return;
        };

        if let Err(error) = window.emit(event, payload) {
            append_shell_log(&format!("failed to emit {event} to main window: {error}"));
        }
    }
}

impl<R: Runtime> StatusChannel for MainWindowChannel<R> {
    fn send_message(&self, message: &str) {
        self.emit_to_main_window(STATUS_MESSAGE_EVENT, message.to_string());
    }

    fn send_is_updating(&self, updating: bool) {
        self.emit_to_main_window(IS_UPDATING_EVENT, updating);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use tauri::{
        test::{mock_builder, mock_context, noop_assets, MockRuntime},
        Listener, WebviewUrl, WebviewWindowBuilder,
    };

    use super::*;

    fn mock_app() -> tauri::App<MockRuntime> {
        mock_builder()
            .build(mock_context(noop_assets()))
            .expect("failed to build mock app")
    }

    #[test]
    fn send_without_main_window_is_skipped_without_panicking() {
        let app = mock_app();
        let channel = MainWindowChannel::new(app.handle().clone());

        channel.send_message("Checking for update...");
        channel.send_is_updating(true);
    }

    #[test]
    fn send_message_reaches_listeners_when_main_window_exists() {
        let app = mock_app();
        WebviewWindowBuilder::new(&app, MAIN_WINDOW_LABEL, WebviewUrl::App("index.html".into()))
            .build()
            .expect("failed to build main window");

        let received = Arc::new(Mutex::new(Vec::<String>::new()));
        let captured = received.clone();
        app.listen_any(STATUS_MESSAGE_EVENT, move |event| {
            if let Ok(text) = serde_json::from_str::<String>(event.payload()) {
                captured.lock().unwrap().push(text);
            }
        });

        let channel = MainWindowChannel::new(app.handle().clone());
        channel.send_message("X");

        assert_eq!(received.lock().unwrap().as_slice(), ["X".to_string()]);
    }

    #[test]
    fn send_is_updating_carries_a_boolean_payload() {
        let app = mock_app();
        WebviewWindowBuilder::new(&app, MAIN_WINDOW_LABEL, WebviewUrl::App("index.html".into()))
            .build()
            .expect("failed to build main window");

        let received = Arc::new(Mutex::new(Vec::<bool>::new()));
        let captured = received.clone();
        app.listen_any(IS_UPDATING_EVENT, move |event| {
            if let Ok(flag) = serde_json::from_str::<bool>(event.payload()) {
                captured.lock().unwrap().push(flag);
            }
        });

        let channel = MainWindowChannel::new(app.handle().clone());
        channel.send_is_updating(true);

        assert_eq!(received.lock().unwrap().as_slice(), [true]);
    }
}
