use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::models::RatingRecord;
use crate::error::Error;

const HEADER: [&str; 5] = [
    "timestamp_utc",
    "session_id",
    "image_name",
    "random_score",
    "organized_score",
];

/// Append-only CSV rating log. Every session and process pointed at the same
/// path shares it; existing rows are never rewritten.
pub struct RatingLog {
    path: PathBuf,
}

impl RatingLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record, writing the header first iff the file does not
    /// exist yet. Header and record are encoded into a single buffer and
    /// appended with one write, so a concurrent reader never sees a partial
    /// row.
    pub fn append(&self, record: &RatingRecord) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let is_new = !self.path.is_file();

        let mut buf = Vec::new();
        {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(&mut buf);
            if is_new {
                writer.write_record(HEADER)?;
            }
            writer.serialize(record)?;
            writer.flush()?;
        }

        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        file.write_all(&buf)?;

        debug!(
            "appended rating for {} to {}",
            record.image_name,
            self.path.display()
        );
        Ok(())
    }

    /// All records currently in the log, oldest first. A missing log reads
    /// as empty.
    pub fn read_all(&self) -> Result<Vec<RatingRecord>, Error> {
        if !self.path.is_file() {
            return Ok(Vec::new());
        }
        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut records = Vec::new();
        for row in reader.deserialize() {
            records.push(row?);
        }
        Ok(records)
    }

    pub fn count(&self) -> Result<usize, Error> {
        Ok(self.read_all()?.len())
    }
}
