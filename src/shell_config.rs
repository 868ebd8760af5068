use std::env;

use crate::{AUTO_UPDATE_CHECK_ENV, START_MINIMIZED_ENV};

/// The eager update check can be disabled with `HERON_AUTO_UPDATE=0`.
pub(crate) fn auto_update_check_enabled() -> bool {
    parse_auto_update_check(env::var(AUTO_UPDATE_CHECK_ENV).ok().as_deref())
}

/// Mirrors the classic `START_MINIMIZED` switch: any non-empty value
/// minimizes the main window instead of showing it after the first load.
pub(crate) fn start_minimized() -> bool {
    parse_start_minimized(env::var(START_MINIMIZED_ENV).ok().as_deref())
}

fn parse_auto_update_check(raw: Option<&str>) -> bool {
    !matches!(raw.map(str::trim), Some("0"))
}

fn parse_start_minimized(raw: Option<&str>) -> bool {
    raw.map(str::trim).is_some_and(|value| !value.is_empty())
}
