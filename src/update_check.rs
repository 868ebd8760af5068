//! Drives a single check / download / install cycle against the updater
//! plugin and feeds each phase to the update monitor.

use std::sync::{Arc, Mutex};

use tauri::{AppHandle, Manager};
use tauri_plugin_notification::NotificationExt;
use tauri_plugin_updater::UpdaterExt;

use crate::{
    append_shell_log,
    progress::ProgressTracker,
    status_channel::MainWindowChannel,
    update_events::UpdateEvent,
    update_monitor::{InstallTrigger, UpdateMonitor},
    AtomicFlagGuard, UpdateCheckState,
};

type PendingInstall = (tauri_plugin_updater::Update, Vec<u8>);

/// Installs the downloaded payload and restarts, silent and force-run.
/// Armed by the driver once the download has finished.
pub(crate) struct ShellInstaller {
    app_handle: AppHandle,
    pending: Arc<Mutex<Option<PendingInstall>>>,
}

impl InstallTrigger for ShellInstaller {
    fn restart_and_install(&self) {
        let pending = self.pending.lock().ok().and_then(|mut guard| guard.take());
        let Some((update, bytes)) = pending else {
            append_shell_log("restart requested without a downloaded update payload");
            return;
        };

        if let Err(error) = update.install(&bytes) {
            append_shell_log(&format!(
                "Failed to install update {}: {}",
                update.version, error
            ));
            return;
        }

        append_shell_log(&format!(
            "update {} installed, restarting app",
            update.version
        ));
        self.app_handle.request_restart();
    }
}

pub(crate) fn spawn_update_check(app_handle: AppHandle) {
    tauri::async_runtime::spawn(async move {
        run_update_check(app_handle).await;
    });
}

async fn run_update_check(app_handle: AppHandle) {
    let check_state = app_handle.state::<UpdateCheckState>();
    let Some(_guard) = AtomicFlagGuard::try_set(&check_state.in_flight) else {
        append_shell_log("update check skipped: another check is already in flight");
        return;
    };

    let updater = match app_handle.updater() {
        Ok(updater) => updater,
        Err(error) => {
            // Initialization failures stay in the log; only failures of an
            // update that has already started checking reach the UI.
            append_shell_log(&format!("Failed to initialize updater: {error}"));
            return;
        }
    };

    let pending: Arc<Mutex<Option<PendingInstall>>> = Arc::new(Mutex::new(None));
    let monitor = UpdateMonitor::new(
        MainWindowChannel::new(app_handle.clone()),
        ShellInstaller {
            app_handle: app_handle.clone(),
            pending: pending.clone(),
        },
    );

    let current_version = app_handle.package_info().version.to_string();
    monitor.handle_event(UpdateEvent::Checking);

    match updater.check().await {
        Ok(Some(update)) => {
            let new_version = update.version.to_string();
            if !is_newer_version(&current_version, &new_version) {
                append_shell_log(&format!(
                    "advertised version {new_version} is not newer than {current_version}, treating as no update"
                ));
                monitor.handle_event(UpdateEvent::NotAvailable);
                return;
            }

            append_shell_log(&format!(
                "update available: {current_version} -> {new_version}"
            ));
            monitor.handle_event(UpdateEvent::Available);

            let mut tracker = ProgressTracker::new();
            let downloaded_bytes = match update
                .download(
                    |chunk_length, content_length| {
                        monitor.handle_event(UpdateEvent::Progress(
                            tracker.record(chunk_length, content_length),
                        ));
                    },
                    || {},
                )
                .await
            {
                Ok(bytes) => bytes,
                Err(error) => {
                    monitor.handle_event(UpdateEvent::Error(error.to_string()));
                    return;
                }
            };

            notify_update_ready(&app_handle, &new_version);

            if let Ok(mut guard) = pending.lock() {
                *guard = Some((update, downloaded_bytes));
            }
            monitor.handle_event(UpdateEvent::Downloaded);
        }
        Ok(None) => monitor.handle_event(UpdateEvent::NotAvailable),
        Err(error) => monitor.handle_event(UpdateEvent::Error(error.to_string())),
    }
}

/// OS-level half of check-and-notify, independent of the in-app channel.
fn notify_update_ready(app_handle: &AppHandle, version: &str) {
    if let Err(error) = app_handle
        .notification()
        .builder()
        .title("Update ready")
        .body(format!(
            "Heron {version} has been downloaded and will be installed."
        ))
        .show()
    {
        append_shell_log(&format!("failed to show update notification: {error}"));
    }
}

/// Unparseable versions fall back to the updater plugin's own decision.
fn is_newer_version(current: &str, candidate: &str) -> bool {
    match (
        semver::Version::parse(current),
        semver::Version::parse(candidate),
    ) {
        (Ok(current), Ok(candidate)) => candidate > current,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use tauri::{
        test::{mock_builder, mock_context, noop_assets, MockRuntime},
        WebviewUrl, WebviewWindowBuilder,
    };

    use super::is_newer_version;
    use crate::{
        status_channel::MainWindowChannel,
        status_display::{StatusDisplay, TauriStatusFeed},
        update_events::{DownloadProgress, UpdateEvent},
        update_monitor::{InstallTrigger, UpdateMonitor},
        MAIN_WINDOW_LABEL,
    };

    #[test]
    fn newer_semver_is_accepted() {
        assert!(is_newer_version("1.2.3", "1.2.4"));
        assert!(is_newer_version("1.2.3", "2.0.0"));
    }

    #[test]
    fn same_or_older_semver_is_rejected() {
        assert!(!is_newer_version("1.2.3", "1.2.3"));
        assert!(!is_newer_version("1.2.3", "1.0.0"));
    }

    #[test]
    fn unparseable_versions_defer_to_the_updater() {
        assert!(is_newer_version("1.2.3", "nightly"));
        assert!(is_newer_version("dev", "1.2.3"));
    }

    #[derive(Clone, Default)]
    struct CountingInstaller {
        calls: Arc<AtomicUsize>,
    }

    impl InstallTrigger for CountingInstaller {
        fn restart_and_install(&self) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct Shell {
        _app: tauri::App<MockRuntime>,
        monitor: UpdateMonitor<MainWindowChannel<MockRuntime>, CountingInstaller>,
        display: StatusDisplay<TauriStatusFeed<MockRuntime>>,
        installer: CountingInstaller,
    }

    /// Wires the real channel, monitor, and display over the mock runtime.
    fn shell_under_test() -> Shell {
        let app = mock_builder()
            .build(mock_context(noop_assets()))
            .expect("failed to build mock app");
        WebviewWindowBuilder::new(&app, MAIN_WINDOW_LABEL, WebviewUrl::App("index.html".into()))
            .build()
            .expect("failed to build main window");

        let installer = CountingInstaller::default();
        let monitor = UpdateMonitor::new(
            MainWindowChannel::new(app.handle().clone()),
            installer.clone(),
        );
        let display = StatusDisplay::mount(TauriStatusFeed::new(app.handle().clone()), || {});

        Shell {
            monitor,
            display,
            installer,
            _app: app,
        }
    }

    #[test]
    fn checking_reaches_the_display_with_flag_raised() {
        let shell = shell_under_test();

        shell.monitor.handle_event(UpdateEvent::Checking);

        let state = shell.display.snapshot();
        assert_eq!(state.message, "Checking for update...");
        assert!(state.is_updating);
    }

    #[test]
    fn not_available_reaches_the_display_with_flag_cleared() {
        let shell = shell_under_test();

        shell.monitor.handle_event(UpdateEvent::Checking);
        shell.monitor.handle_event(UpdateEvent::NotAvailable);

        let state = shell.display.snapshot();
        assert_eq!(state.message, "Update not available.");
        assert!(!state.is_updating);
    }

    #[test]
    fn progress_reaches_the_display_with_all_four_values() {
        let shell = shell_under_test();

        shell
            .monitor
            .handle_event(UpdateEvent::Progress(DownloadProgress {
                bytes_per_second: 1000,
                percent: 50.0,
                transferred: 500,
                total: 1000,
            }));

        let message = shell.display.snapshot().message;
        assert_eq!(message, "Download speed: 1000 - Downloaded 50% (500/1000)");
    }

    #[test]
    fn downloaded_shows_restart_message_and_fires_installer_once() {
        let shell = shell_under_test();

        shell.monitor.handle_event(UpdateEvent::Downloaded);

        assert_eq!(
            shell.display.snapshot().message,
            "Update downloaded. Restarting app..."
        );
        assert_eq!(shell.installer.calls.load(Ordering::SeqCst), 1);
    }
}
