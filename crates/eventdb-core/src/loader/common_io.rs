// crates/eventdb-core/src/loader/common_io.rs
use crate::error::{EventDbError, Result};
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// How a catalog file is stored, judged by its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    JsonGz,
    Snapshot,
}

impl CatalogFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        if name.ends_with(".json.gz") {
            Ok(Self::JsonGz)
        } else if name.ends_with(".json") {
            Ok(Self::Json)
        } else if name.ends_with(".bin") {
            Ok(Self::Snapshot)
        } else {
            Err(EventDbError::UnsupportedFormat(path.display().to_string()))
        }
    }
}

/// Snapshot cache that sits next to a source file: `events.json` -> `events.json.bin`.
pub fn cache_path(source: &Path) -> PathBuf {
    let mut name = source.file_name().unwrap_or_default().to_os_string();
    name.push(".bin");
    source.with_file_name(name)
}

/// A cache is fresh when it exists and the source is not newer than it.
/// A source whose mtime cannot be read does not invalidate the cache.
pub fn is_cache_fresh(source: &Path, cache: &Path) -> bool {
    let cache_time = match fs::metadata(cache).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(_) => return false,
    };
    match fs::metadata(source).and_then(|m| m.modified()) {
        Ok(source_time) => source_time <= cache_time,
        Err(_) => true,
    }
}

/// Opens a file, buffers it, and unwraps gzip when asked to.
pub fn open_stream(path: &Path, gzipped: bool) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        EventDbError::NotFound(format!("Catalog not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if !gzipped {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(EventDbError::UnsupportedFormat(format!(
            "{} (gzip support needs the `compact` feature)",
            path.display()
        )))
    }
}
