use anyhow::{Context, Result};
use rusqlite::{Connection, OpenFlags, params};
use std::collections::BTreeMap;
use std::path::Path;

/// Handle on the wallpaper preference database. The schema (a `data`
/// table of image paths and a `preferences` table of slot assignments)
/// belongs to the desktop environment; this side only rewrites rows.
pub struct WallpaperDb {
    conn: Connection,
}

impl WallpaperDb {
    /// Open the database read-write. The file is never created here: a
    /// missing database means the desktop environment has not set one up,
    /// which is an error rather than a fresh start.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_WRITE)
            .with_context(|| format!("cannot open wallpaper database at {}", path.display()))?;
        Ok(WallpaperDb { conn })
    }

    /// Replace the stored preferences with `prefs` in a single
    /// transaction. If any statement fails the transaction is dropped
    /// un-committed and rolls back, leaving the previous contents intact.
    pub fn replace_prefs(&mut self, prefs: &BTreeMap<String, String>) -> Result<()> {
        let tx = self.conn.transaction().context("beginning transaction")?;

        tx.execute_batch(
            "DELETE FROM data;
             DELETE FROM preferences;",
        )
        .context("clearing existing preferences")?;

        for (key, value) in prefs {
            // Each distinct image path is stored once, however many slots
            // point at it.
            tx.execute(
                "INSERT INTO data
                 SELECT ?1
                 WHERE NOT EXISTS (SELECT value FROM data WHERE value = ?1)",
                params![value],
            )
            .with_context(|| format!("storing image path for '{key}'"))?;

            tx.execute(
                "INSERT INTO preferences
                 SELECT ?1, data.ROWID
                 FROM data
                 WHERE data.value = ?2",
                params![key, value],
            )
            .with_context(|| format!("storing preference for '{key}'"))?;
        }

        tx.commit().context("committing preference update")
    }
}
