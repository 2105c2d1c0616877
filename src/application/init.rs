//! Initialize list use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, ListRepository};
use log::info;
use std::fs;
use std::path::Path;

/// Initialize a new list at the specified path with default config
pub fn init(path: &Path) -> Result<FileSystemRepository> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;
    repo.save_config(&Config::default())?;

    info!("initialized list at {}", path.display());
    Ok(repo)
}
