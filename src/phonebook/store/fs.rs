use super::DataStore;
use crate::error::{PhonebookError, Result};
use crate::model::{Field, Record};
use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "phonebook.csv";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(PhonebookError::Io)?;
            }
        }
        Ok(())
    }
}

/// Maps each field to its column in the file, by header name. Fields the
/// file has no column for map to `None` and read as empty.
fn column_map(headers: &StringRecord) -> [Option<usize>; 6] {
    Field::ALL.map(|field| headers.iter().position(|h| h == field.name()))
}

fn record_from_row(row: &StringRecord, columns: &[Option<usize>; 6]) -> Record {
    Record::from_pairs(Field::ALL.into_iter().zip(columns.iter()).map(|(field, col)| {
        let value = col.and_then(|idx| row.get(idx)).unwrap_or("");
        (field, value)
    }))
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Record>> {
        if !self.path.exists() {
            debug!("{} does not exist, starting empty", self.path.display());
            return Ok(Vec::new());
        }
        let meta = fs::metadata(&self.path)?;
        if meta.is_file() && meta.len() == 0 {
            return Ok(Vec::new());
        }

        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)?;
        let columns = column_map(reader.headers()?);

        let mut records = Vec::new();
        for row in reader.records() {
            records.push(record_from_row(&row?, &columns));
        }

        debug!("loaded {} records from {}", records.len(), self.path.display());
        Ok(records)
    }

    fn save(&mut self, records: &[Record]) -> Result<()> {
        self.ensure_parent_dir()?;

        let mut writer = WriterBuilder::new()
            .terminator(Terminator::CRLF)
            .from_path(&self.path)?;
        writer.write_record(Field::headers())?;
        for record in records {
            writer.write_record(record.values())?;
        }
        writer.flush().map_err(PhonebookError::Io)?;

        debug!("saved {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}
