//! Opening applications through the system opener.

use std::process::{Child, Command, Stdio};
use std::time::Duration;

use flint_core::LaunchError;
use wait_timeout::ChildExt;

#[cfg(target_os = "macos")]
const OPENER: &str = "open";
#[cfg(not(target_os = "macos"))]
const OPENER: &str = "xdg-open";

/// How long the reaper waits for the opener before giving up on its status.
const REAP_TIMEOUT: Duration = Duration::from_secs(10);

/// Open an application bundle with the system opener.
///
/// Returns once the opener has been spawned. Its exit status is collected on
/// a background thread and only logged.
pub fn launch_application(path: &str) -> Result<(), LaunchError> {
    launch_with(OPENER, path)
}

/// Like [`launch_application`] with an explicit opener program.
pub fn launch_with(opener: &str, path: &str) -> Result<(), LaunchError> {
    let child = Command::new(opener)
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| LaunchError::Spawn {
            path: path.to_string(),
            source,
        })?;

    let path = path.to_string();
    std::thread::spawn(move || reap(child, path));
    Ok(())
}

fn reap(mut child: Child, path: String) {
    match child.wait_timeout(REAP_TIMEOUT) {
        Ok(Some(status)) if status.success() => {
            tracing::debug!("Opened {}", path);
        }
        Ok(Some(status)) => {
            let err = LaunchError::Exited {
                path,
                code: status.code(),
            };
            tracing::error!("{}", err);
        }
        Ok(None) => {
            tracing::warn!("Opener for '{}' still running after {:?}", path, REAP_TIMEOUT);
            let _ = child.wait();
        }
        Err(e) => {
            tracing::error!("Failed to wait on opener for '{}': {}", path, e);
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_launch_with_spawns_opener() {
        assert!(launch_with("true", "/Applications/Safari.app").is_ok());
    }

    #[test]
    fn test_nonzero_exit_is_not_a_spawn_error() {
        // The exit status is only logged by the reaper
        assert!(launch_with("false", "/Applications/Safari.app").is_ok());
    }

    #[test]
    fn test_missing_opener_is_spawn_error() {
        let err = launch_with("/nonexistent/flint-opener", "/Applications/Safari.app")
            .unwrap_err();
        match err {
            LaunchError::Spawn { path, .. } => assert_eq!(path, "/Applications/Safari.app"),
            other => panic!("expected spawn error, got {:?}", other),
        }
    }
}
