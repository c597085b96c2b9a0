//! Persistence of output documents and the company reference list.

use facts_core::{CompanyDirectory, FactsError, OutputDocument, Result};
use facts_transform::filings_frame;
use polars::prelude::ParquetWriter;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Default directory for per-ticker output documents.
pub const DEFAULT_OUTPUT_DIR: &str = "./data/sec/filings";

/// Default location of the saved company reference list.
pub const DEFAULT_COMPANIES_PATH: &str = "./data/sec/companies.json";

/// Returns the output document path for `ticker` inside `dir`.
#[must_use]
pub fn output_path(dir: &Path, ticker: &str) -> PathBuf {
    dir.join(format!("{ticker}.json"))
}

/// Returns the Parquet sidecar path for an output document path.
#[must_use]
pub fn parquet_path(json_path: &Path) -> PathBuf {
    json_path.with_extension("parquet")
}

/// Serializes `value` as JSON indented with four spaces.
///
/// # Errors
/// Returns [`FactsError::Parse`] if serialization fails.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value
        .serialize(&mut ser)
        .map_err(|e| FactsError::Parse(e.to_string()))?;
    Ok(buf)
}

/// Writes `value` as pretty JSON to `path`, creating parent directories.
///
/// The file's existence is checked after the write.
///
/// # Errors
/// Returns [`FactsError::OutputWriteFailure`] if the file cannot be written
/// or is not present afterwards.
pub async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let bytes = to_pretty_json(value).map_err(|e| FactsError::output_write(path, e))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| FactsError::output_write(path, e))?;
        }
    }

    tokio::fs::write(path, &bytes)
        .await
        .map_err(|e| FactsError::output_write(path, e))?;

    let exists = tokio::fs::try_exists(path)
        .await
        .map_err(|e| FactsError::output_write(path, e))?;
    if !exists {
        return Err(FactsError::output_write(path, "file not present after write"));
    }

    debug!(path = %path.display(), bytes = bytes.len(), "Wrote JSON");
    Ok(())
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| FactsError::Parse(format!("{}: {e}", path.display())))?;
    serde_json::from_slice(&bytes).map_err(|e| FactsError::Parse(format!("{}: {e}", path.display())))
}

/// Writes an output document to `path`.
///
/// # Errors
/// Returns [`FactsError::OutputWriteFailure`] on any write failure.
#[instrument(skip(path, doc), fields(path = %path.display(), concepts = doc.len()))]
pub async fn write_output_document(path: &Path, doc: &OutputDocument) -> Result<()> {
    write_json(path, doc).await?;
    info!(filings = doc.filing_count(), "Saved output document");
    Ok(())
}

/// Reads an output document back from `path`.
///
/// # Errors
/// Returns [`FactsError::Parse`] if the file is missing or not a valid
/// output document.
pub async fn read_output_document(path: &Path) -> Result<OutputDocument> {
    read_json(path).await
}

/// Writes the filings of `doc` as a Parquet table to `path`.
///
/// # Errors
/// Returns [`FactsError::Export`] if the table cannot be built, or
/// [`FactsError::OutputWriteFailure`] if the file cannot be written.
pub fn write_parquet(path: &Path, doc: &OutputDocument) -> Result<()> {
    let mut df = filings_frame(doc)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| FactsError::output_write(path, e))?;
        }
    }

    let file = std::fs::File::create(path).map_err(|e| FactsError::output_write(path, e))?;
    ParquetWriter::new(file)
        .finish(&mut df)
        .map_err(|e| FactsError::output_write(path, e))?;

    debug!(path = %path.display(), rows = df.height(), "Wrote Parquet");
    Ok(())
}

/// Saves the company reference list as JSON.
///
/// # Errors
/// Returns [`FactsError::OutputWriteFailure`] on any write failure.
pub async fn save_companies(path: &Path, directory: &CompanyDirectory) -> Result<()> {
    write_json(path, directory).await?;
    info!(path = %path.display(), companies = directory.len(), "Saved company list");
    Ok(())
}

/// Loads a company reference list saved by [`save_companies`].
///
/// # Errors
/// Returns [`FactsError::Parse`] if the file is missing or malformed.
pub async fn load_companies(path: &Path) -> Result<CompanyDirectory> {
    read_json(path).await
}
