//! Append-only local catalog cache.
//!
//! A JSON array of previously synced products, used as an offline snapshot
//! for SKU, barcode and id lookups. Records are only ever appended; the file
//! is rewritten through a temp file in the same directory and renamed into
//! place, so readers see either the old or the new array.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use catsync_core::{Product, Variant};
use tempfile::NamedTempFile;

use crate::error::ReconcileError;
use crate::matcher::{find, Criterion};

#[derive(Debug, Clone)]
pub struct CatalogCache {
    path: PathBuf,
}

/// An owned lookup hit from the cache.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedMatch {
    pub product: Product,
    /// Set for variant-level criteria.
    pub variant: Option<Variant>,
}

impl CatalogCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every cached product. A missing file is an empty catalog.
    ///
    /// # Errors
    ///
    /// Returns `ReconcileError::CacheIo` if the file exists but cannot be read,
    /// or `ReconcileError::CacheParse` if it is not a JSON array of products.
    pub fn load(&self) -> Result<Vec<Product>, ReconcileError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "catalog cache absent; starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&content).map_err(|e| ReconcileError::CacheParse {
            path: self.path.display().to_string(),
            source: e,
        })
    }

    /// Appends `product` after the existing records.
    ///
    /// # Errors
    ///
    /// Returns `ReconcileError` if the existing cache cannot be read, or the
    /// new array cannot be written and renamed into place.
    pub fn append(&self, product: &Product) -> Result<(), ReconcileError> {
        let mut records = self.load()?;
        records.push(product.clone());

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|e| self.io_error(e))?;

        let json = serde_json::to_vec_pretty(&records).map_err(|e| ReconcileError::CachePersist {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;
        let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| self.io_error(e))?;
        tmp.write_all(&json).map_err(|e| self.io_error(e))?;
        tmp.as_file().sync_all().map_err(|e| self.io_error(e))?;
        tmp.persist(&self.path)
            .map_err(|e| ReconcileError::CachePersist {
                path: self.path.display().to_string(),
                reason: e.error.to_string(),
            })?;

        tracing::info!(
            path = %self.path.display(),
            product_id = ?product.id,
            records = records.len(),
            "appended product to catalog cache"
        );
        Ok(())
    }

    /// Looks `criterion` up in the cached catalog.
    ///
    /// # Errors
    ///
    /// Propagates `load` failures.
    pub fn find(&self, criterion: &Criterion<'_>) -> Result<Option<CachedMatch>, ReconcileError> {
        let records = self.load()?;
        let lookup = find(&records, criterion);
        Ok(lookup.product().map(|product| CachedMatch {
            product: product.clone(),
            variant: lookup.variant().cloned(),
        }))
    }

    fn io_error(&self, source: std::io::Error) -> ReconcileError {
        ReconcileError::CacheIo {
            path: self.path.display().to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::fixtures::{product, variant};

    fn skued(id: i64, sku: &str) -> Variant {
        let mut v = variant(Some(id), "Black", "9", "1");
        v.sku = Some(sku.to_string());
        v
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let cache = CatalogCache::new(dir.path().join("nope.json"));
        assert!(cache.load().unwrap().is_empty());
    }

    #[test]
    fn append_keeps_previous_records_in_order() {
        let dir = TempDir::new().unwrap();
        let cache = CatalogCache::new(dir.path().join("data").join("catalog.json"));

        cache.append(&product(Some(1), "a", vec![skued(11, "A")])).unwrap();
        cache.append(&product(Some(2), "b", vec![skued(21, "B")])).unwrap();

        let ids: Vec<_> = cache.load().unwrap().iter().filter_map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn find_returns_owned_variant_hit() {
        let dir = TempDir::new().unwrap();
        let cache = CatalogCache::new(dir.path().join("catalog.json"));
        cache.append(&product(Some(1), "", vec![skued(11, "A"), skued(12, "B")])).unwrap();

        let hit = cache.find(&Criterion::Sku("B")).unwrap().unwrap();
        assert_eq!(hit.product.id, Some(1));
        assert_eq!(hit.variant.and_then(|v| v.id), Some(12));
        assert!(cache.find(&Criterion::Sku("Z")).unwrap().is_none());
    }

    #[test]
    fn corrupt_file_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, "{not an array").unwrap();

        let err = CatalogCache::new(&path).load().unwrap_err();
        assert!(matches!(err, ReconcileError::CacheParse { .. }), "got: {err:?}");
    }

    #[test]
    fn corrupt_file_is_not_overwritten_by_append() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, "{not an array").unwrap();

        let cache = CatalogCache::new(&path);
        assert!(cache.append(&product(Some(1), "", Vec::new())).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "{not an array");
    }
}
