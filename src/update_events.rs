//! The six update lifecycle events and their mapping to display status.
//!
//! Each event is a stateless formatting step: no state machine is kept here,
//! the external updater drives the ordering.

/// Transfer statistics attached to a progress event. Values are passed
/// through as computed from the download stream, without validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DownloadProgress {
    pub(crate) bytes_per_second: u64,
    pub(crate) percent: f64,
    pub(crate) transferred: u64,
    pub(crate) total: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum UpdateEvent {
    Checking,
    Available,
    NotAvailable,
    Error(String),
    Progress(DownloadProgress),
    Downloaded,
}

/// Status pushed to the UI for a single lifecycle event. The in-progress
/// flag is only carried by the events that change it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct UpdateStatus {
    pub(crate) message: String,
    pub(crate) is_updating: Option<bool>,
}

pub(crate) fn status_for_event(event: &UpdateEvent) -> UpdateStatus {
    match event {
        UpdateEvent::Checking => UpdateStatus {
            message: "Checking for update...".to_string(),
            is_updating: Some(true),
        },
        UpdateEvent::Available => UpdateStatus {
            message: "Update available. Downloading...".to_string(),
            is_updating: None,
        },
        UpdateEvent::NotAvailable => UpdateStatus {
            message: "Update not available.".to_string(),
            is_updating: Some(false),
        },
        UpdateEvent::Error(error) => UpdateStatus {
            message: format!("Error: {error}"),
            is_updating: Some(false),
        },
        UpdateEvent::Progress(progress) => UpdateStatus {
            message: format!(
                "Download speed: {} - Downloaded {}% ({}/{})",
                progress.bytes_per_second, progress.percent, progress.transferred, progress.total
            ),
            is_updating: None,
        },
        UpdateEvent::Downloaded => UpdateStatus {
            message: "Update downloaded. Restarting app...".to_string(),
            is_updating: None,
        },
    }
}
