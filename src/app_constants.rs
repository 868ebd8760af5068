pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const TEST_WINDOW_LABEL: &str = "testwindow";
pub(crate) const TEST_WINDOW_PAGE: &str = "testwindow.html";
pub(crate) const TEST_WINDOW_TITLE: &str = "Test Window";
pub(crate) const TEST_WINDOW_WIDTH: f64 = 400.0;
pub(crate) const TEST_WINDOW_HEIGHT: f64 = 300.0;

/// Main -> UI status channel carrying a display string.
pub(crate) const STATUS_MESSAGE_EVENT: &str = "message";
/// Main -> UI status channel carrying the in-progress flag.
pub(crate) const IS_UPDATING_EVENT: &str = "isUpdating";

/// Shown by the status display before the first message arrives.
pub(crate) const STATUS_PLACEHOLDER: &str = "No update status yet.";

pub(crate) const SHELL_LOG_FILE: &str = "heron-desktop.log";

pub(crate) const AUTO_UPDATE_CHECK_ENV: &str = "HERON_AUTO_UPDATE";
pub(crate) const START_MINIMIZED_ENV: &str = "HERON_START_MINIMIZED";
pub(crate) const LOG_FILE_ENV: &str = "HERON_LOG_FILE";
