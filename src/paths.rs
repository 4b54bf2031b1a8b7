use anyhow::{Context, Result};
use std::path::PathBuf;

/// Location of the wallpaper preference database relative to the home
/// directory. The file is created and maintained by the desktop
/// environment, never by this tool.
pub const DB_RELATIVE_PATH: &str = "Library/Application Support/Dock/desktoppicture.db";

/// Resolve the wallpaper database path under the current user's home.
pub fn db_path() -> Result<PathBuf> {
    db_path_from(dirs::home_dir())
}

fn db_path_from(home: Option<PathBuf>) -> Result<PathBuf> {
    let home = home.context("Unable to determine home directory")?;
    Ok(home.join(DB_RELATIVE_PATH))
}
