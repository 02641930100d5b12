//! Hands files to the operating system's default application.
//!
//! - macOS: `open`
//! - Windows: `cmd /C start ""`
//! - other Unix: `xdg-open`
//!
//! `ZOTERO_STORE_OPENER` replaces the platform command with a single program
//! that receives the path as its only argument.

use anyhow::{bail, Context, Result};
use log::debug;
use std::path::Path;
use std::process::Command;

pub const OPENER_ENV: &str = "ZOTERO_STORE_OPENER";

/// Opens `path` and waits for the opener to exit.
pub fn open_path(path: &Path) -> Result<()> {
    let mut command = opener_command(std::env::var(OPENER_ENV).ok());
    command.arg(path);
    debug!(
        "event=launcher_spawn module=cli status=start program={:?} path={}",
        command.get_program(),
        path.display()
    );

    let status = command
        .status()
        .with_context(|| format!("failed to launch {:?}", command.get_program()))?;

    if !status.success() {
        bail!("{:?} exited with {status}", command.get_program());
    }
    Ok(())
}

fn opener_command(override_program: Option<String>) -> Command {
    if let Some(program) = override_program.filter(|value| !value.trim().is_empty()) {
        return Command::new(program.trim());
    }
    platform_command()
}

#[cfg(target_os = "macos")]
fn platform_command() -> Command {
    Command::new("open")
}

#[cfg(target_os = "windows")]
fn platform_command() -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn platform_command() -> Command {
    Command::new("xdg-open")
}

#[cfg(test)]
mod tests {
    use super::opener_command;

    #[test]
    fn override_replaces_platform_opener() {
        let command = opener_command(Some(" echo ".to_string()));
        assert_eq!(command.get_program(), "echo");
        assert_eq!(command.get_args().count(), 0);
    }

    #[test]
    fn blank_override_falls_back_to_platform_opener() {
        let command = opener_command(Some("  ".to_string()));
        assert_ne!(command.get_program(), "");
    }

    #[cfg(unix)]
    #[test]
    fn failing_opener_is_an_error() {
        std::env::set_var(super::OPENER_ENV, "false");
        let err = super::open_path(std::path::Path::new("/nonexistent")).unwrap_err();
        std::env::remove_var(super::OPENER_ENV);
        assert!(err.to_string().contains("exited with"));
    }
}
