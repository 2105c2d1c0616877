//! File system repository

use crate::error::{RememberError, Result};
use crate::infrastructure::config::DATA_DIR;
use crate::infrastructure::{Config, DurableSlot};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming the list root
pub const ROOT_ENV: &str = "REMEMBERIT_ROOT";

/// Abstract repository for list operations
pub trait ListRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .rememberit/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .rememberit/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .rememberit directory exists
    fn is_initialized(&self) -> bool;

    /// Create .rememberit directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of ListRepository.
///
/// Also acts as a [`DurableSlot`]: each key is stored as
/// `.rememberit/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover list root by walking up from current directory
    /// First checks REMEMBERIT_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_data_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(RememberError::Config(format!(
                    "{} is set to '{}' but no .rememberit directory found. \
                    Run 'rememberit init' in that directory or unset {}.",
                    ROOT_ENV,
                    path.display(),
                    ROOT_ENV
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover list root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_data_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(RememberError::NotInitialized(start.to_path_buf())),
            }
        }
    }

    fn has_data_dir(path: &Path) -> bool {
        path.join(DATA_DIR).is_dir()
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(DATA_DIR).join(format!("{}.json", key))
    }
}

impl ListRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_data_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let data_dir = self.root.join(DATA_DIR);

        if data_dir.exists() {
            return Err(RememberError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&data_dir)?;
        Ok(())
    }
}

impl DurableSlot for FileSystemRepository {
    fn read(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(RememberError::Io(e)),
        }
    }

    /// Write to a temp file next to the target, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so the
    /// destination is removed first.
    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        if !self.is_initialized() {
            return Err(RememberError::NotInitialized(self.root.clone()));
        }

        let path = self.slot_path(key);
        let tmp_path = path.with_file_name(format!("{}.json.tmp-{}", key, std::process::id()));

        fs::write(&tmp_path, value)?;

        if let Err(e) = replace_file(&tmp_path, &path) {
            // The temp file is ours alone; drop it so no stray copy remains
            let _ = fs::remove_file(&tmp_path);
            return Err(RememberError::Io(e));
        }
        Ok(())
    }
}

fn replace_file(from: &Path, to: &Path) -> std::io::Result<()> {
    if cfg!(windows) && to.exists() {
        fs::remove_file(to)?;
    }
    fs::rename(from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::sync::{Mutex, OnceLock};
    use tempfile::TempDir;

    fn env_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    struct EnvVarRestore {
        key: &'static str,
        previous: Option<OsString>,
    }

    impl EnvVarRestore {
        fn capture(key: &'static str) -> Self {
            Self {
                key,
                previous: std::env::var_os(key),
            }
        }
    }

    impl Drop for EnvVarRestore {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                std::env::set_var(self.key, value);
            } else {
                std::env::remove_var(self.key);
            }
        }
    }

    fn initialized_repo() -> (TempDir, FileSystemRepository) {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        (temp, repo)
    }

    #[test]
    fn test_is_initialized() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        assert!(!repo.is_initialized());
        repo.initialize().unwrap();
        assert!(repo.is_initialized());
        assert!(temp.path().join(".rememberit").is_dir());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let (_temp, repo) = initialized_repo();
        assert!(repo.initialize().is_err());
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let (temp, _repo) = initialized_repo();

        let subdir = temp.path().join("sub").join("deep");
        fs::create_dir_all(&subdir).unwrap();

        let repo = FileSystemRepository::discover_from(&subdir).unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_discover_fails_when_uninitialized() {
        let temp = TempDir::new().unwrap();
        let result = FileSystemRepository::discover_from(temp.path());
        assert!(matches!(result, Err(RememberError::NotInitialized(_))));
    }

    #[test]
    fn test_discover_uses_env_root() {
        let _guard = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture(ROOT_ENV);
        let (temp, _repo) = initialized_repo();

        std::env::set_var(ROOT_ENV, temp.path());
        let repo = FileSystemRepository::discover().unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_discover_env_root_without_data_dir() {
        let _guard = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture(ROOT_ENV);
        let temp = TempDir::new().unwrap();

        std::env::set_var(ROOT_ENV, temp.path());
        let err = FileSystemRepository::discover().unwrap_err();
        assert!(err.to_string().contains(ROOT_ENV));
    }

    #[test]
    fn test_slot_read_absent() {
        let (_temp, repo) = initialized_repo();
        assert_eq!(repo.read("entries").unwrap(), None);
    }

    #[test]
    fn test_slot_write_replaces_value() {
        let (temp, mut repo) = initialized_repo();

        repo.write("entries", "[1]").unwrap();
        repo.write("entries", "[]").unwrap();

        assert_eq!(repo.read("entries").unwrap().as_deref(), Some("[]"));
        assert_eq!(
            fs::read_to_string(temp.path().join(".rememberit/entries.json")).unwrap(),
            "[]"
        );

        // No temp files left behind
        let leftovers: Vec<_> = fs::read_dir(temp.path().join(".rememberit"))
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().contains(".tmp-"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_slot_failed_replace_leaves_no_temp_file() {
        let (temp, mut repo) = initialized_repo();
        let data_dir = temp.path().join(".rememberit");

        // A non-empty directory where the slot file belongs cannot be replaced
        fs::create_dir(data_dir.join("entries.json")).unwrap();
        fs::write(data_dir.join("entries.json").join("keep"), "x").unwrap();

        assert!(repo.write("entries", "[]").is_err());

        let leftovers: Vec<_> = fs::read_dir(&data_dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().contains(".tmp-"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_root() {
        let (temp, repo) = initialized_repo();
        assert_eq!(repo.root(), temp.path());
    }

    #[test]
    fn test_slot_write_requires_initialization() {
        let temp = TempDir::new().unwrap();
        let mut repo = FileSystemRepository::new(temp.path().to_path_buf());
        assert!(matches!(
            repo.write("entries", "[]"),
            Err(RememberError::NotInitialized(_))
        ));
    }
}
