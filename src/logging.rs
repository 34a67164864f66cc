//! File logging for the binary.
//!
//! The animation owns the terminal, so logs only go to a file and there is
//! no stderr fallback.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Install a global `tracing` subscriber writing to `path`.
///
/// `None` leaves logging off. The filter comes from `RUST_LOG`, defaulting to
/// `info`.
pub fn init_tracing(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_leaves_logging_off() {
        init_tracing(None).unwrap();
    }

    #[test]
    fn second_install_reports_error() {
        let dir = std::env::temp_dir();
        let first = dir.join(format!("tui-runners-{}-a.log", std::process::id()));
        let second = dir.join(format!("tui-runners-{}-b.log", std::process::id()));

        init_tracing(Some(&first)).unwrap();
        tracing::info!("logging installed");
        let err = init_tracing(Some(&second)).unwrap_err();
        assert!(err.to_string().contains("tracing subscriber"), "{err}");

        let _ = std::fs::remove_file(first);
        let _ = std::fs::remove_file(second);
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let err = init_tracing(Some(Path::new("/nonexistent-dir/runners.log"))).unwrap_err();
        assert!(err.to_string().contains("failed to create log file"), "{err}");
    }
}
