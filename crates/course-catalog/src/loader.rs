//! CSV dataset loading.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};

use course_types::{coerce_subscribers, Catalog, CourseRecord};

use crate::error::CatalogError;
use crate::schema::ColumnMap;

/// A parsed catalog together with the hash of the bytes it came from.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    /// SHA-256 hex digest of the dataset bytes
    pub content_hash: String,
}

/// Read the raw dataset bytes from disk.
pub fn read_dataset(path: &Path) -> Result<Vec<u8>, CatalogError> {
    std::fs::read(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// SHA-256 hex digest of dataset bytes.
pub fn content_hash(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

/// Load and validate the dataset at `path`.
pub fn load_catalog(path: &Path) -> Result<LoadedCatalog, CatalogError> {
    let bytes = read_dataset(path)?;
    let content_hash = content_hash(&bytes);
    let catalog = parse_catalog(bytes.as_slice())?;

    let short_hash = &content_hash[..12];
    info!(
        path = %path.display(),
        courses = catalog.len(),
        hash = short_hash,
        "Loaded course catalog"
    );

    Ok(LoadedCatalog {
        catalog,
        content_hash,
    })
}

/// Parse a CSV dataset from any reader.
///
/// The header row is validated before any data row is read. Data rows
/// shorter than the header yield empty cells; unparseable numbers are
/// coerced rather than rejected.
pub fn parse_catalog<R: Read>(reader: R) -> Result<Catalog, CatalogError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let columns = ColumnMap::from_headers(headers.iter())?;
    debug!(?columns, "Resolved dataset columns");

    let mut records = Vec::new();
    let mut coerced = 0usize;
    for row in csv_reader.records() {
        let row = row?;
        let record = to_record(&row, &columns);
        if record.num_subscribers == 0 && !is_zero_like(cell(&row, columns.num_subscribers)) {
            coerced += 1;
        }
        records.push(record);
    }

    if coerced > 0 {
        warn!(rows = coerced, "Coerced unparseable subscriber counts to 0");
    }

    Ok(Catalog::new(records))
}

fn to_record(row: &StringRecord, columns: &ColumnMap) -> CourseRecord {
    CourseRecord {
        title: cell(row, columns.title).to_string(),
        url: cell(row, columns.url).to_string(),
        price: cell(row, columns.price).to_string(),
        num_subscribers: coerce_subscribers(cell(row, columns.num_subscribers)),
        level: cell(row, columns.level).to_string(),
        subject: cell(row, columns.subject).to_string(),
        published_timestamp: cell(row, columns.published_timestamp).to_string(),
    }
}

fn cell(row: &StringRecord, index: usize) -> &str {
    row.get(index).unwrap_or_default()
}

fn is_zero_like(raw: &str) -> bool {
    raw.trim().parse::<f64>().map(|v| v == 0.0).unwrap_or(false)
}
