use anyhow::Result;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Connection to the CSV data directory.
///
/// Owns the base directory and the path helpers; repositories never build
/// paths themselves.
#[derive(Clone)]
pub struct CsvConnection {
    base_directory: PathBuf,
}

impl CsvConnection {
    /// Create a new connection, creating the base directory when missing.
    pub fn new(base_directory: impl AsRef<Path>) -> Result<Self> {
        let base_directory = base_directory.as_ref().to_path_buf();
        if !base_directory.exists() {
            fs::create_dir_all(&base_directory)?;
            info!("Created data directory: {:?}", base_directory);
        }
        Ok(Self { base_directory })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Path of the client table.
    pub fn clients_file_path(&self) -> PathBuf {
        self.base_directory.join("clients.csv")
    }

    /// Create the client table with its header when it doesn't exist yet.
    pub fn ensure_clients_file_exists(&self) -> Result<()> {
        let path = self.clients_file_path();
        if !path.exists() {
            let mut writer = csv::Writer::from_path(&path)?;
            writer.write_record([
                "id",
                "company",
                "address",
                "locality",
                "created_at",
                "updated_at",
            ])?;
            writer.flush()?;
            info!("Created clients file: {:?}", path);
        }
        Ok(())
    }
}
