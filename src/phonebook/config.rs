use crate::error::{PhonebookError, Result};
use crate::pagination::{PageSize, DEFAULT_PAGE_SIZE};
use crate::store::fs::DEFAULT_DATA_FILE;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for the phonebook, stored as `config.json` in the config dir.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PhonebookConfig {
    /// CSV file holding the records. Relative paths resolve against the
    /// working directory.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Records per page when the session starts.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for PhonebookConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            page_size: default_page_size(),
        }
    }
}

impl PhonebookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PhonebookError::Io)?;
        let config: PhonebookConfig =
            serde_json::from_str(&content).map_err(PhonebookError::Serialization)?;
        Ok(config)
    }

    pub fn page_size(&self) -> Result<PageSize> {
        PageSize::new(self.page_size).map_err(|_| {
            PhonebookError::Config(format!(
                "page_size must be at least 1, got {}",
                self.page_size
            ))
        })
    }

    /// `data_file` resolved against `cwd` when relative.
    pub fn data_path(&self, cwd: &Path) -> PathBuf {
        if self.data_file.is_absolute() {
            self.data_file.clone()
        } else {
            cwd.join(&self.data_file)
        }
    }
}
