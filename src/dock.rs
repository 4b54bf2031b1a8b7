use anyhow::{Context, Result};
use std::process::Command;

/// Restart the Dock so it re-reads the preference database. Callers decide
/// how much failure matters; a committed update survives either way and
/// shows up at the next login.
pub fn restart() -> Result<()> {
    let status = Command::new("killall")
        .arg("Dock")
        .status()
        .context("Failed to execute killall")?;

    if status.success() {
        Ok(())
    } else {
        anyhow::bail!(
            "killall Dock exited with code {}",
            status.code().unwrap_or(-1)
        )
    }
}
