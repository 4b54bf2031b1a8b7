use anyhow::Result;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Where the wallpaper database lives inside a home directory. Matches
/// what the binary resolves against $HOME.
pub const DB_RELATIVE_PATH: &str = "Library/Application Support/Dock/desktoppicture.db";

/// A throwaway home directory for one test, seeded with the wallpaper
/// database fixture the desktop environment would normally maintain.
pub struct TestEnvironment {
    home: TempDir,
}

impl TestEnvironment {
    /// Home directory containing an empty wallpaper database with the
    /// expected schema.
    pub fn new() -> Result<Self> {
        Self::with_schema(
            "CREATE TABLE data (value);
             CREATE TABLE preferences (key, data_id);",
        )
    }

    /// Home directory whose database is created with a custom schema.
    pub fn with_schema(schema: &str) -> Result<Self> {
        let env = Self::without_database()?;
        let db_path = env.db_path();
        fs::create_dir_all(db_path.parent().unwrap())?;

        let conn = Connection::open(&db_path)?;
        conn.execute_batch(schema)?;
        Ok(env)
    }

    /// Home directory with no wallpaper database at all.
    pub fn without_database() -> Result<Self> {
        Ok(Self {
            home: tempfile::tempdir()?,
        })
    }

    pub fn home(&self) -> &Path {
        self.home.path()
    }

    pub fn db_path(&self) -> PathBuf {
        self.home.path().join(DB_RELATIVE_PATH)
    }

    /// Run a statement directly against the database, bypassing the binary.
    pub fn execute_sql(&self, sql: &str) -> Result<()> {
        let conn = Connection::open(self.db_path())?;
        conn.execute_batch(sql)?;
        Ok(())
    }

    /// Read back (key, value) pairs joined across both tables, ordered by key.
    pub fn stored_prefs(&self) -> Result<Vec<(String, String)>> {
        let conn = Connection::open(self.db_path())?;
        let mut stmt = conn.prepare(
            "SELECT preferences.key, data.value
             FROM preferences
             JOIN data ON data.ROWID = preferences.data_id
             ORDER BY preferences.key",
        )?;
        let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
        Ok(rows.collect::<rusqlite::Result<_>>()?)
    }

    pub fn count_rows(&self, table: &str) -> Result<i64> {
        let conn = Connection::open(self.db_path())?;
        let count = conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
            row.get(0)
        })?;
        Ok(count)
    }
}
