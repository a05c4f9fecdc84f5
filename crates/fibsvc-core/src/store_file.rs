//! JSON-file backed exclusion store.
//!
//! The file is the source of truth and may be shared by several processes
//! (the server and the CLI). Mutations take an advisory lock on a sibling
//! `.lock` file, re-read the blacklist, apply the change and write it back.
//! Reads reuse the in-memory copy until the file's modification time or
//! length changes.

use std::collections::BTreeSet;
use std::fs::{File, Metadata, OpenOptions};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fs2::FileExt;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use serde::{Deserialize, Serialize};

use crate::constants::BLACKLIST_FILE_VERSION;
use crate::error::FibError;
use crate::store::ExclusionStore;

#[derive(Debug, Serialize, Deserialize)]
struct BlacklistFile {
    version: u32,
    numbers: BTreeSet<u64>,
}

/// Modification time and length of the file a set was loaded from.
/// `None` when the file does not exist.
type Fingerprint = Option<(SystemTime, u64)>;

#[derive(Debug, Default)]
struct Loaded {
    numbers: BTreeSet<u64>,
    fingerprint: Fingerprint,
}

/// Exclusion store persisted as a JSON file.
#[derive(Debug)]
pub struct FileExclusionStore {
    path: PathBuf,
    lock_path: PathBuf,
    state: RwLock<Loaded>,
}

impl FileExclusionStore {
    /// Open the store at `path`. A missing file is an empty blacklist.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, FibError> {
        let path = path.into();
        let loaded = load_from_path(&path)?;
        tracing::info!(path = %path.display(), entries = loaded.numbers.len(), "Blacklist loaded");
        Ok(Self {
            lock_path: sibling(&path, ".lock"),
            path,
            state: RwLock::new(loaded),
        })
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The in-memory set, reloaded first if the file changed on disk.
    fn current(&self) -> Result<RwLockReadGuard<'_, Loaded>, FibError> {
        let on_disk = fingerprint(&self.path)?;
        let state = self.state.read();
        if state.fingerprint == on_disk {
            return Ok(state);
        }
        drop(state);

        let mut state = self.state.write();
        if state.fingerprint != on_disk {
            *state = load_from_path(&self.path)?;
            tracing::debug!(path = %self.path.display(), entries = state.numbers.len(), "Blacklist reloaded");
        }
        Ok(RwLockWriteGuard::downgrade(state))
    }

    /// Apply `mutate` to the latest file contents and persist if it reports
    /// a change.
    ///
    /// The in-process write lock and the cross-process file lock are both
    /// held from the re-read to the rename.
    fn mutate(&self, mutate: impl FnOnce(&mut BTreeSet<u64>) -> bool) -> Result<(), FibError> {
        let mut state = self.state.write();
        let _lock = FileLock::acquire(&self.lock_path)?;

        let mut latest = load_from_path(&self.path)?;
        if mutate(&mut latest.numbers) {
            save_to_path(&latest.numbers, &self.path)?;
            latest.fingerprint = fingerprint(&self.path)?;
        }
        *state = latest;
        Ok(())
    }
}

impl ExclusionStore for FileExclusionStore {
    fn contains(&self, index: u64) -> Result<bool, FibError> {
        Ok(self.current()?.numbers.contains(&index))
    }

    fn add(&self, index: u64) -> Result<(), FibError> {
        self.mutate(|numbers| numbers.insert(index))
    }

    fn remove(&self, index: u64) -> Result<(), FibError> {
        self.mutate(|numbers| numbers.remove(&index))
    }

    fn snapshot(&self) -> Result<BTreeSet<u64>, FibError> {
        Ok(self.current()?.numbers.clone())
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

/// Exclusive advisory lock, released on drop.
struct FileLock {
    file: File,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self, FibError> {
        create_parent_dirs(path)?;
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(path)?;
        FileExt::lock_exclusive(&file)?;
        Ok(Self { file })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        if let Err(e) = FileExt::unlock(&self.file) {
            tracing::warn!(error = %e, "Failed to release blacklist lock");
        }
    }
}

fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

fn create_parent_dirs(path: &Path) -> Result<(), FibError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

fn fingerprint_of(metadata: &Metadata) -> Result<(SystemTime, u64), FibError> {
    Ok((metadata.modified()?, metadata.len()))
}

fn fingerprint(path: &Path) -> Result<Fingerprint, FibError> {
    match std::fs::metadata(path) {
        Ok(metadata) => Ok(Some(fingerprint_of(&metadata)?)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn load_from_path(path: &Path) -> Result<Loaded, FibError> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Loaded::default()),
        Err(e) => return Err(e.into()),
    };
    // Metadata and content come from the same handle, so a concurrent
    // rename cannot pair new content with an old fingerprint.
    let fingerprint = Some(fingerprint_of(&file.metadata()?)?);
    let mut content = String::new();
    file.read_to_string(&mut content)?;

    let file: BlacklistFile = serde_json::from_str(&content)?;
    if file.version != BLACKLIST_FILE_VERSION {
        return Err(FibError::Store(format!(
            "unsupported blacklist file version {} (expected {BLACKLIST_FILE_VERSION})",
            file.version
        )));
    }
    if file.numbers.contains(&0) {
        return Err(FibError::Store("blacklist file contains index 0".into()));
    }
    Ok(Loaded {
        numbers: file.numbers,
        fingerprint,
    })
}

/// Write to a sibling temp file, then rename over the target.
fn save_to_path(numbers: &BTreeSet<u64>, path: &Path) -> Result<(), FibError> {
    create_parent_dirs(path)?;
    let file = BlacklistFile {
        version: BLACKLIST_FILE_VERSION,
        numbers: numbers.clone(),
    };
    let content = serde_json::to_string_pretty(&file)?;

    let tmp = sibling(path, ".tmp");
    std::fs::write(&tmp, content)?;
    std::fs::rename(&tmp, path)?;
    tracing::debug!(path = %path.display(), entries = numbers.len(), "Blacklist persisted");
    Ok(())
}
