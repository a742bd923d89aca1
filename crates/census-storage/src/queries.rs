//! Source, citation-quality, and media queries.
//!
//! Sources are matched by an exact, case-sensitive prefix of `Name`.
//! `OwnerType = 3` marks links owned by a source record.

use std::collections::BTreeMap;

use census_core::errors::StorageError;
use census_core::types::{MediaLink, QualityHistogram, SourceRow};
use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, Row};
use tracing::warn;

use crate::fields::{decode_fields, CitationFields};

/// Owner type of a link attached to a source record.
pub const OWNER_TYPE_SOURCE: i64 = 3;

fn sqlite_err(e: rusqlite::Error) -> StorageError {
    StorageError::SqliteError {
        message: e.to_string(),
    }
}

/// Text of a column that may be stored as TEXT or BLOB. NULL reads as empty.
fn text_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<String> {
    Ok(match row.get_ref(idx)? {
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        _ => String::new(),
    })
}

/// Decode a field blob, falling back to empty texts when it is malformed.
fn citation_fields(source_id: i64, xml: &str) -> CitationFields {
    if xml.trim().is_empty() {
        return CitationFields::default();
    }
    decode_fields(xml).unwrap_or_else(|e| {
        warn!(source_id, error = %e, "undecodable field blob; treating citation texts as empty");
        CitationFields::default()
    })
}

/// Sources whose name starts with `prefix`, ordered by id.
pub fn query_sources(conn: &Connection, prefix: &str) -> Result<Vec<SourceRow>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT s.SourceID, s.Name, s.Fields,
                    (SELECT COUNT(*) FROM MediaLinkTable ml
                      WHERE ml.OwnerType = ?2 AND ml.OwnerID = s.SourceID)
             FROM SourceTable s
             WHERE substr(s.Name, 1, length(?1)) = ?1
             ORDER BY s.SourceID",
        )
        .map_err(sqlite_err)?;

    let rows = stmt
        .query_map(params![prefix, OWNER_TYPE_SOURCE], |row| {
            let id: i64 = row.get(0)?;
            let name = text_column(row, 1)?;
            let xml = text_column(row, 2)?;
            let media_count: i64 = row.get(3)?;
            Ok((id, name, xml, media_count))
        })
        .map_err(sqlite_err)?;

    let mut sources = Vec::new();
    for row in rows {
        let (id, name, xml, media_count) = row.map_err(sqlite_err)?;
        let fields = citation_fields(id, &xml);
        sources.push(SourceRow {
            id,
            name,
            footnote: fields.footnote,
            short_footnote: fields.short_footnote,
            bibliography: fields.bibliography,
            media_count: u32::try_from(media_count).unwrap_or(u32::MAX),
        });
    }
    Ok(sources)
}

/// Quality labels of citation links whose citation belongs to a matching
/// source. NULL quality counts under the empty label.
pub fn query_quality_histogram(
    conn: &Connection,
    prefix: &str,
) -> Result<QualityHistogram, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT COALESCE(cl.Quality, ''), COUNT(*)
             FROM CitationLinkTable cl
             JOIN CitationTable c ON c.CitationID = cl.CitationID
             JOIN SourceTable s ON s.SourceID = c.SourceID
             WHERE substr(s.Name, 1, length(?1)) = ?1
             GROUP BY COALESCE(cl.Quality, '')",
        )
        .map_err(sqlite_err)?;

    let rows = stmt
        .query_map(params![prefix], |row| {
            Ok((text_column(row, 0)?, row.get::<_, i64>(1)?))
        })
        .map_err(sqlite_err)?;

    let mut histogram = QualityHistogram::new();
    for row in rows {
        let (label, count) = row.map_err(sqlite_err)?;
        *histogram.entry(label).or_insert(0) += usize::try_from(count).unwrap_or(0);
    }
    Ok(histogram)
}

/// Media linked to each matching source; sources without media map to an
/// empty list.
pub fn query_media_links(
    conn: &Connection,
    prefix: &str,
) -> Result<BTreeMap<i64, Vec<MediaLink>>, StorageError> {
    let mut links: BTreeMap<i64, Vec<MediaLink>> = BTreeMap::new();

    let mut ids = conn
        .prepare_cached(
            "SELECT SourceID FROM SourceTable
             WHERE substr(Name, 1, length(?1)) = ?1
             ORDER BY SourceID",
        )
        .map_err(sqlite_err)?;
    let id_rows = ids
        .query_map(params![prefix], |row| row.get::<_, i64>(0))
        .map_err(sqlite_err)?;
    for id in id_rows {
        links.insert(id.map_err(sqlite_err)?, Vec::new());
    }

    let mut stmt = conn
        .prepare_cached(
            "SELECT ml.OwnerID, m.MediaPath, m.MediaFile
             FROM MediaLinkTable ml
             JOIN MultimediaTable m ON m.MediaID = ml.MediaID
             JOIN SourceTable s ON s.SourceID = ml.OwnerID
             WHERE ml.OwnerType = ?2 AND substr(s.Name, 1, length(?1)) = ?1
             ORDER BY ml.OwnerID, ml.LinkID",
        )
        .map_err(sqlite_err)?;
    let rows = stmt
        .query_map(params![prefix, OWNER_TYPE_SOURCE], |row| {
            Ok((row.get::<_, i64>(0)?, text_column(row, 1)?, text_column(row, 2)?))
        })
        .map_err(sqlite_err)?;
    for row in rows {
        let (owner, path, file) = row.map_err(sqlite_err)?;
        links.entry(owner).or_default().push(MediaLink::new(path, file));
    }

    Ok(links)
}

/// Every media record whose stored path contains `directory_name`.
pub fn query_media_mentioning(
    conn: &Connection,
    directory_name: &str,
) -> Result<Vec<MediaLink>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT MediaPath, MediaFile FROM MultimediaTable
             WHERE instr(MediaPath, ?1) > 0
             ORDER BY MediaID",
        )
        .map_err(sqlite_err)?;
    let rows = stmt
        .query_map(params![directory_name], |row| {
            Ok(MediaLink::new(text_column(row, 0)?, text_column(row, 1)?))
        })
        .map_err(sqlite_err)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(sqlite_err)
}
