use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

use crate::status_display::{StatusDisplay, TauriStatusFeed};

/// Guards the at-most-one-in-flight update check.
#[derive(Debug, Default)]
pub(crate) struct UpdateCheckState {
    pub(crate) in_flight: AtomicBool,
}

/// Backing state for the test window counter.
#[derive(Debug, Default)]
pub(crate) struct TestCounterState {
    count: Mutex<u64>,
}

impl TestCounterState {
    pub(crate) fn increment(&self) -> u64 {
        match self.count.lock() {
            Ok(mut guard) => {
                *guard += 1;
                *guard
            }
            Err(_) => 0,
        }
    }
}

/// Shell-side mirror of the status feed, mounted once at startup.
#[derive(Default)]
pub(crate) struct ShellStatusState {
    pub(crate) display: Mutex<Option<StatusDisplay<TauriStatusFeed<tauri::Wry>>>>,
}

#[derive(Debug, serde::Serialize)]
pub(crate) struct ShellBridgeResult {
    pub(crate) ok: bool,
    pub(crate) reason: Option<String>,
}

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateStatusSnapshot {
    pub(crate) message: String,
    pub(crate) is_updating: bool,
}

pub(crate) struct AtomicFlagGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> AtomicFlagGuard<'a> {
    pub(crate) fn try_set(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        Some(Self { flag })
    }
}

impl Drop for AtomicFlagGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Relaxed);
    }
}
