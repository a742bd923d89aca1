//! In-memory record source for tests and embedding.

use std::collections::BTreeMap;

use crate::errors::StorageError;
use crate::types::{MediaLink, QualityHistogram, SourceRow};

use super::{MediaCatalog, SourceStore};

#[derive(Debug, Clone)]
struct MediaRecord {
    owner: Option<i64>,
    link: MediaLink,
}

/// A `SourceStore` + `MediaCatalog` backed by plain vectors.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    sources: Vec<SourceRow>,
    citations: Vec<(i64, String)>,
    media: Vec<MediaRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a source. `media_count` is recomputed from the media records.
    pub fn add_source(
        &mut self,
        id: i64,
        name: &str,
        footnote: &str,
        short_footnote: &str,
        bibliography: &str,
    ) -> &mut Self {
        self.sources.push(SourceRow {
            id,
            name: name.to_string(),
            footnote: footnote.to_string(),
            short_footnote: short_footnote.to_string(),
            bibliography: bibliography.to_string(),
            media_count: 0,
        });
        self
    }

    /// Add a citation of `source_id` carrying a quality label.
    pub fn add_citation(&mut self, source_id: i64, quality: &str) -> &mut Self {
        self.citations.push((source_id, quality.to_string()));
        self
    }

    /// Add a media record, optionally linked to a source.
    pub fn add_media(&mut self, owner: Option<i64>, path: &str, file: &str) -> &mut Self {
        self.media.push(MediaRecord {
            owner,
            link: MediaLink::new(path, file),
        });
        self
    }

    fn matching(&self, name_prefix: &str) -> impl Iterator<Item = &SourceRow> {
        let prefix = name_prefix.to_string();
        self.sources
            .iter()
            .filter(move |s| s.name.starts_with(&prefix))
    }
}

impl SourceStore for MemoryStore {
    fn sources(&self, name_prefix: &str) -> Result<Vec<SourceRow>, StorageError> {
        let mut rows: Vec<SourceRow> = self
            .matching(name_prefix)
            .map(|s| {
                let mut row = s.clone();
                row.media_count = self
                    .media
                    .iter()
                    .filter(|m| m.owner == Some(s.id))
                    .count() as u32;
                row
            })
            .collect();
        rows.sort_by_key(|r| r.id);
        Ok(rows)
    }

    fn quality_histogram(&self, name_prefix: &str) -> Result<QualityHistogram, StorageError> {
        let ids: Vec<i64> = self.matching(name_prefix).map(|s| s.id).collect();
        let mut histogram = QualityHistogram::new();
        for (source_id, quality) in &self.citations {
            if ids.contains(source_id) {
                *histogram.entry(quality.clone()).or_insert(0) += 1;
            }
        }
        Ok(histogram)
    }
}

impl MediaCatalog for MemoryStore {
    fn media_links(
        &self,
        name_prefix: &str,
    ) -> Result<BTreeMap<i64, Vec<MediaLink>>, StorageError> {
        let mut links: BTreeMap<i64, Vec<MediaLink>> = BTreeMap::new();
        for source in self.matching(name_prefix) {
            let linked = self
                .media
                .iter()
                .filter(|m| m.owner == Some(source.id))
                .map(|m| m.link.clone())
                .collect();
            links.insert(source.id, linked);
        }
        Ok(links)
    }

    fn media_mentioning(&self, directory_name: &str) -> Result<Vec<MediaLink>, StorageError> {
        Ok(self
            .media
            .iter()
            .filter(|m| m.link.path.contains(directory_name))
            .map(|m| m.link.clone())
            .collect())
    }
}
