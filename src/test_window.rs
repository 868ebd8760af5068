use tauri::{AppHandle, Manager, Runtime, WebviewUrl, WebviewWindowBuilder};

use crate::{
    TEST_WINDOW_HEIGHT, TEST_WINDOW_LABEL, TEST_WINDOW_PAGE, TEST_WINDOW_TITLE, TEST_WINDOW_WIDTH,
};

/// Opens the secondary test window, or refocuses it if it already exists.
pub(crate) fn open_test_window<R: Runtime>(app_handle: &AppHandle<R>) -> Result<(), String> {
    if let Some(window) = app_handle.get_webview_window(TEST_WINDOW_LABEL) {
        window
            .show()
            .map_err(|error| format!("Failed to show test window: {error}"))?;
        window
            .set_focus()
            .map_err(|error| format!("Failed to focus test window: {error}"))?;
        return Ok(());
    }

    WebviewWindowBuilder::new(
        app_handle,
        TEST_WINDOW_LABEL,
        WebviewUrl::App(TEST_WINDOW_PAGE.into()),
    )
    .title(TEST_WINDOW_TITLE)
    .inner_size(TEST_WINDOW_WIDTH, TEST_WINDOW_HEIGHT)
    .build()
    .map(|_| ())
    .map_err(|error| format!("Failed to create test window: {error}"))
}
