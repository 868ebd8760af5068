use std::{
    env,
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use crate::{LOG_FILE_ENV, SHELL_LOG_FILE};

/// Appends a timestamped line to the shell log. Logging must never take the
/// shell down, so resolution and write failures are swallowed.
pub(crate) fn append_shell_log(line: &str) {
    let Some(path) = resolve_shell_log_path() else {
        return;
    };
    let _ = append_log_line(&path, line);
}

pub(crate) fn resolve_shell_log_path() -> Option<PathBuf> {
    if let Ok(value) = env::var(LOG_FILE_ENV) {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }

    home::home_dir().map(|home| home.join(".heron").join(SHELL_LOG_FILE))
}

fn append_log_line(path: &Path, line: &str) -> Result<(), String> {
    if let Some(parent_dir) = path.parent() {
        std::fs::create_dir_all(parent_dir).map_err(|error| {
            format!(
                "Failed to create log directory {}: {}",
                parent_dir.display(),
                error
            )
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|error| format!("Failed to open log file {}: {}", path.display(), error))?;

    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    writeln!(file, "[{timestamp}] {line}")
        .map_err(|error| format!("Failed to write log file {}: {}", path.display(), error))
}
