//! Log subscriber setup.
//!
//! The terminal is owned by the user interface while the animation runs, so logs never go to
//! standard output or standard error. They are written to a file when one is configured and
//! dropped otherwise.

use std::{fs::File, path::Path, sync::Mutex};

use color_eyre::eyre::{eyre, Result};
use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Installs the global log subscriber writing to `path`.
///
/// The verbosity follows `RUST_LOG` and falls back to [`DEFAULT_FILTER`]. Passing `None` leaves
/// logging disabled.
///
/// # Errors
///
/// This function may return errors if:
/// - The log file cannot be created
/// - A global subscriber has already been installed
pub fn init(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| eyre!("failed to install log subscriber: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_without_path_is_noop() {
        assert!(init(None).is_ok());
    }

    #[test]
    fn test_init_with_unwritable_path_fails() {
        let path = Path::new("/nonexistent-directory/mazetrail/maze.log");

        assert!(init(Some(path)).is_err());
    }
}
