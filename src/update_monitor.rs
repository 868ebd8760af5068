//! Bridges the external update service to the UI notification channel.

use crate::status_channel::StatusChannel;
use crate::update_events::{status_for_event, UpdateEvent};

/// Restart-and-install capability, silent and force-run: no user
/// confirmation step sits between the downloaded payload and the restart.
pub(crate) trait InstallTrigger {
    fn restart_and_install(&self);
}

/// Translates lifecycle events into status sends. At most one monitor
/// drives a given window's status stream at a time; the update check
/// driver enforces that with its in-flight guard.
pub(crate) struct UpdateMonitor<C: StatusChannel, I: InstallTrigger> {
    channel: C,
    installer: I,
}

impl<C: StatusChannel, I: InstallTrigger> UpdateMonitor<C, I> {
    pub(crate) fn new(channel: C, installer: I) -> Self {
        Self { channel, installer }
    }

    /// Formats the event, sends the message (and flag, when the event
    /// carries one), and on `Downloaded` triggers the install after the
    /// notification went out.
    pub(crate) fn handle_event(&self, event: UpdateEvent) {
        let status = status_for_event(&event);
        self.channel.send_message(&status.message);
        if let Some(updating) = status.is_updating {
            self.channel.send_is_updating(updating);
        }

        if matches!(event, UpdateEvent::Downloaded) {
            self.installer.restart_and_install();
        }
    }
}
