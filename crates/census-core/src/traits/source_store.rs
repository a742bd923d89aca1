//! Record-source retrieval ports.

use std::collections::BTreeMap;

use crate::errors::StorageError;
use crate::types::{MediaLink, QualityHistogram, SourceRow};

/// Retrieves source rows and citation-quality counts.
///
/// Sources are selected by their identifying-name prefix
/// (e.g. `"Fed Census: 1940,"`).
pub trait SourceStore {
    /// Rows whose identifying name starts with `name_prefix`, ordered by id.
    fn sources(&self, name_prefix: &str) -> Result<Vec<SourceRow>, StorageError>;

    /// Quality labels of citations attached to those sources.
    fn quality_histogram(&self, name_prefix: &str) -> Result<QualityHistogram, StorageError>;
}

/// Retrieves stored media references.
pub trait MediaCatalog {
    /// Media linked to each matching source. Every matching source has an
    /// entry, empty when nothing is linked.
    fn media_links(
        &self,
        name_prefix: &str,
    ) -> Result<BTreeMap<i64, Vec<MediaLink>>, StorageError>;

    /// Every stored media record whose path mentions `directory_name`.
    fn media_mentioning(&self, directory_name: &str) -> Result<Vec<MediaLink>, StorageError>;
}

impl<T: SourceStore + ?Sized> SourceStore for &T {
    fn sources(&self, name_prefix: &str) -> Result<Vec<SourceRow>, StorageError> {
        (**self).sources(name_prefix)
    }

    fn quality_histogram(&self, name_prefix: &str) -> Result<QualityHistogram, StorageError> {
        (**self).quality_histogram(name_prefix)
    }
}

impl<T: MediaCatalog + ?Sized> MediaCatalog for &T {
    fn media_links(
        &self,
        name_prefix: &str,
    ) -> Result<BTreeMap<i64, Vec<MediaLink>>, StorageError> {
        (**self).media_links(name_prefix)
    }

    fn media_mentioning(&self, directory_name: &str) -> Result<Vec<MediaLink>, StorageError> {
        (**self).media_mentioning(directory_name)
    }
}
