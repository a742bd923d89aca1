//! Read-only connection to a genealogy database.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use census_core::errors::StorageError;
use census_core::traits::{MediaCatalog, SourceStore};
use census_core::types::{MediaLink, QualityHistogram, SourceRow};
use rusqlite::{Connection, OpenFlags};
use tracing::{debug, info};

use crate::queries;

/// Case-insensitive collation some genealogy databases declare on their
/// text columns. Statements touching those columns fail unless it exists.
const RMNOCASE: &str = "RMNOCASE";

/// `SourceStore` + `MediaCatalog` over a SQLite database opened read-only.
pub struct SqliteSourceStore {
    conn: Connection,
    path: Option<PathBuf>,
}

impl SqliteSourceStore {
    /// Open the database at `path` without write access.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        if !path.is_file() {
            return Err(StorageError::NotFound {
                path: path.display().to_string(),
            });
        }
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| StorageError::SqliteError {
            message: format!("open {}: {e}", path.display()),
        })?;
        register_collations(&conn)?;
        info!(db = %path.display(), "opened record database");
        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// Wrap an existing connection (used by tests and embedders).
    pub fn from_connection(conn: Connection) -> Result<Self, StorageError> {
        register_collations(&conn)?;
        Ok(Self { conn, path: None })
    }

    /// Database file path (None when wrapping a connection).
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

fn register_collations(conn: &Connection) -> Result<(), StorageError> {
    conn.create_collation(RMNOCASE, |a: &str, b: &str| {
        a.to_lowercase().cmp(&b.to_lowercase())
    })
    .map_err(|e| StorageError::SqliteError {
        message: format!("register collation {RMNOCASE}: {e}"),
    })
}

impl SourceStore for SqliteSourceStore {
    fn sources(&self, name_prefix: &str) -> Result<Vec<SourceRow>, StorageError> {
        let rows = queries::query_sources(&self.conn, name_prefix)?;
        debug!(prefix = name_prefix, source_count = rows.len(), "loaded source rows");
        Ok(rows)
    }

    fn quality_histogram(&self, name_prefix: &str) -> Result<QualityHistogram, StorageError> {
        queries::query_quality_histogram(&self.conn, name_prefix)
    }
}

impl MediaCatalog for SqliteSourceStore {
    fn media_links(
        &self,
        name_prefix: &str,
    ) -> Result<BTreeMap<i64, Vec<MediaLink>>, StorageError> {
        queries::query_media_links(&self.conn, name_prefix)
    }

    fn media_mentioning(&self, directory_name: &str) -> Result<Vec<MediaLink>, StorageError> {
        queries::query_media_mentioning(&self.conn, directory_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = SqliteSourceStore::open(&dir.path().join("absent.rmtree"))
            .err()
            .unwrap();
        assert!(matches!(err, StorageError::NotFound { .. }));
    }

    #[test]
    fn collation_is_available() {
        let conn = Connection::open_in_memory().unwrap();
        let store = SqliteSourceStore::from_connection(conn).unwrap();
        let equal: i64 = store
            .conn
            .query_row("SELECT 'Ohio' = 'OHIO' COLLATE RMNOCASE", [], |r| r.get(0))
            .unwrap();
        assert_eq!(equal, 1);
        assert!(store.path().is_none());
    }
}
