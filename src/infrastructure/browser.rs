// SPDX-License-Identifier: MPL-2.0
//! Hands URLs to the platform's default browser.

use crate::error::{Error, Result};
use std::process::{Command, Stdio};

/// Launches the system URL handler without waiting for it to exit.
pub fn open(url: &str) -> Result<()> {
    let mut command = launcher(url);
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| Error::Io(format!("Failed to open {}: {}", url, e)))?;
    tracing::debug!(url, "opened link in browser");
    Ok(())
}

#[cfg(target_os = "windows")]
fn launcher(url: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", url]);
    command
}

#[cfg(target_os = "macos")]
fn launcher(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn launcher(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_passed_as_last_argument() {
        let command = launcher("https://example.com");
        let last = command.get_args().last().map(|arg| arg.to_os_string());
        assert_eq!(last, Some("https://example.com".into()));
    }
}
