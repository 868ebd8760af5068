//! Shell-side view of the latest update status.
//!
//! Mirrors what the main window page renders: the last `message` string and
//! the last `isUpdating` flag, last write wins. Backs the status query
//! command so the feed can be pulled as well as pushed.

use std::sync::{Arc, Mutex};

use tauri::{AppHandle, Listener, Runtime};

use crate::{append_shell_log, IS_UPDATING_EVENT, STATUS_MESSAGE_EVENT, STATUS_PLACEHOLDER};

pub(crate) type SubscriptionId = u32;

/// Subscription seam over the two status channels.
pub(crate) trait StatusFeed {
    fn subscribe_message(
        &self,
        handler: Box<dyn Fn(String) + Send + Sync + 'static>,
    ) -> SubscriptionId;
    fn subscribe_is_updating(
        &self,
        handler: Box<dyn Fn(bool) + Send + Sync + 'static>,
    ) -> SubscriptionId;
    fn unsubscribe(&self, subscription: SubscriptionId);
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DisplayState {
    pub(crate) message: String,
    pub(crate) is_updating: bool,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            message: STATUS_PLACEHOLDER.to_string(),
            is_updating: false,
        }
    }
}

pub(crate) struct StatusDisplay<F: StatusFeed> {
    feed: F,
    state: Arc<Mutex<DisplayState>>,
    subscriptions: Vec<SubscriptionId>,
}

impl<F: StatusFeed> StatusDisplay<F> {
    /// Registers one listener per channel, then announces readiness exactly
    /// once. Re-mounting forms a new registration cycle.
    pub(crate) fn mount(feed: F, on_ready: impl FnOnce()) -> Self {
        let state = Arc::new(Mutex::new(DisplayState::default()));

        let message_state = state.clone();
        let message_subscription = feed.subscribe_message(Box::new(move |message| {
            if let Ok(mut guard) = message_state.lock() {
                guard.message = message;
            }
        }));

        let flag_state = state.clone();
        let flag_subscription = feed.subscribe_is_updating(Box::new(move |updating| {
            if let Ok(mut guard) = flag_state.lock() {
                guard.is_updating = updating;
            }
        }));

        on_ready();

        Self {
            feed,
            state,
            subscriptions: vec![message_subscription, flag_subscription],
        }
    }

    pub(crate) fn snapshot(&self) -> DisplayState {
        self.state
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Removes both listeners. Messages arriving afterwards no longer touch
    /// the displayed state.
    pub(crate) fn unmount(&mut self) {
        for subscription in self.subscriptions.drain(..) {
            self.feed.unsubscribe(subscription);
        }
    }
}

impl<F: StatusFeed> Drop for StatusDisplay<F> {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Production feed over the Tauri event system.
pub(crate) struct TauriStatusFeed<R: Runtime> {
    app_handle: AppHandle<R>,
}

impl<R: Runtime> TauriStatusFeed<R> {
    pub(crate) fn new(app_handle: AppHandle<R>) -> Self {
        Self { app_handle }
    }
}

impl<R: Runtime> StatusFeed for TauriStatusFeed<R> {
    fn subscribe_message(
        &self,
        handler: Box<dyn Fn(String) + Send + Sync + 'static>,
    ) -> SubscriptionId {
        self.app_handle
            .listen_any(STATUS_MESSAGE_EVENT, move |event| {
                match serde_json::from_str::<String>(event.payload()) {
                    Ok(message) => handler(message),
                    Err(error) => append_shell_log(&format!(
                        "discarding malformed {STATUS_MESSAGE_EVENT} payload: {error}"
                    )),
                }
            })
    }

    fn subscribe_is_updating(
        &self,
        handler: Box<dyn Fn(bool) + Send + Sync + 'static>,
    ) -> SubscriptionId {
        self.app_handle
            .listen_any(IS_UPDATING_EVENT, move |event| {
                match serde_json::from_str::<bool>(event.payload()) {
                    Ok(updating) => handler(updating),
                    Err(error) => append_shell_log(&format!(
                        "discarding malformed {IS_UPDATING_EVENT} payload: {error}"
                    )),
                }
            })
    }

    fn unsubscribe(&self, subscription: SubscriptionId) {
        self.app_handle.unlisten(subscription);
    }
}
