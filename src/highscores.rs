//! Persistence of the best score across runs
use crate::consts;
use serde_json::{Map, Value};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Somewhere to keep the best score between runs
pub(crate) trait ScoreStore: fmt::Debug {
    /// Return the stored best score, or `None` if nothing is stored
    fn load_best(&self) -> Result<Option<u32>, LoadError>;

    fn save_best(&mut self, score: u32) -> Result<(), SaveError>;
}

/// Stores the best score as a JSON object in a file on disk
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Return the default path of the best score file
    pub(crate) fn default_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|p| p.join("adaptasnake").join("best.json"))
    }

    /// Prepare to store the best score at `path`, first checking that its
    /// directory exists and can be written to.
    pub(crate) fn open(path: PathBuf) -> Result<FileStore, SaveError> {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        fs_err::create_dir_all(dir).map_err(SaveError::mkdir)?;
        let probe = dir.join(consts::STORAGE_PROBE_NAME);
        fs_err::write(&probe, "1").map_err(SaveError::write)?;
        fs_err::remove_file(&probe).map_err(SaveError::write)?;
        Ok(FileStore { path })
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    fn read_object(&self) -> Result<Option<Map<String, Value>>, LoadError> {
        let src = match fs_err::read(&self.path) {
            Ok(src) => src,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(LoadError::read(e)),
        };
        serde_json::from_slice(&src)
            .map(Some)
            .map_err(LoadError::deserialize)
    }
}

impl ScoreStore for FileStore {
    fn load_best(&self) -> Result<Option<u32>, LoadError> {
        Ok(self
            .read_object()?
            .and_then(|mut obj| obj.remove(consts::BEST_SCORE_KEY))
            .and_then(score_from_value))
    }

    fn save_best(&mut self, score: u32) -> Result<(), SaveError> {
        // Keep any other keys that happen to be in the file
        let mut obj = self.read_object().ok().flatten().unwrap_or_default();
        let _ = obj.insert(String::from(consts::BEST_SCORE_KEY), Value::from(score));
        let mut src = serde_json::to_string(&obj).map_err(SaveError::serialize)?;
        src.push('\n');
        fs_err::write(&self.path, &src).map_err(SaveError::write)?;
        Ok(())
    }
}

/// Interpret a stored value as a score.  A string is read up to its first
/// non-digit, so `"12abc"` is 12.  Values with no leading digits, negative
/// numbers, and fractional numbers are treated as absent.
fn score_from_value(value: Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => {
            let s = s.trim_start();
            let s = s.strip_prefix('+').unwrap_or(s);
            let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
            s[..end].parse::<u32>().ok()
        }
        _ => None,
    }
}

/// Keeps the best score in memory only
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct MemoryStore(Option<u32>);

impl ScoreStore for MemoryStore {
    fn load_best(&self) -> Result<Option<u32>, LoadError> {
        Ok(self.0)
    }

    fn save_best(&mut self, score: u32) -> Result<(), SaveError> {
        self.0 = Some(score);
        Ok(())
    }
}

/// The best score seen so far, written through to a [`ScoreStore`] whenever
/// it improves
#[derive(Debug)]
pub(crate) struct BestScore {
    value: u32,
    store: Box<dyn ScoreStore>,
    persistent: bool,
}

impl BestScore {
    /// Load the best score from `store`.  A store that cannot be read or that
    /// holds a malformed value yields a best score of 0.
    pub(crate) fn load(store: Box<dyn ScoreStore>) -> BestScore {
        let value = match store.load_best() {
            Ok(value) => value.unwrap_or_default(),
            Err(e) => {
                log::warn!("{}; starting from 0", ErrorChain(&e));
                0
            }
        };
        log::debug!("Loaded best score {value}");
        BestScore {
            value,
            store,
            persistent: true,
        }
    }

    /// A best score that will not outlive the process
    pub(crate) fn in_memory() -> BestScore {
        BestScore {
            value: 0,
            store: Box::new(MemoryStore::default()),
            persistent: false,
        }
    }

    pub(crate) fn get(&self) -> u32 {
        self.value
    }

    /// Is the best score being saved anywhere that outlives the process?
    pub(crate) fn is_persistent(&self) -> bool {
        self.persistent
    }

    /// Record `score` as the new best if it beats the current one.  Returns
    /// `true` if it did.  Failure to save is logged and otherwise ignored.
    pub(crate) fn record(&mut self, score: u32) -> bool {
        if score <= self.value {
            return false;
        }
        self.value = score;
        if let Err(e) = self.store.save_best(score) {
            log::warn!("{}", ErrorChain(&e));
        }
        true
    }
}

/// Display an error followed by each of its sources
#[derive(Debug)]
pub(crate) struct ErrorChain<'a>(pub(crate) &'a dyn std::error::Error);

impl fmt::Display for ErrorChain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;
        let mut source = self.0.source();
        while let Some(src) = source {
            write!(f, ": {src}")?;
            source = src.source();
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
#[error("Failed to save best score to disk")]
pub(crate) struct SaveError(#[source] SaveErrorSource);

impl SaveError {
    pub(crate) fn no_path() -> Self {
        SaveError(SaveErrorSource::NoPath)
    }

    fn mkdir(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Mkdir(e))
    }

    fn serialize(e: serde_json::Error) -> Self {
        SaveError(SaveErrorSource::Serialize(e))
    }

    fn write(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Write(e))
    }
}

#[derive(Debug, Error)]
enum SaveErrorSource {
    #[error("could not determine path to local data directory")]
    NoPath,
    #[error("failed to create parent directories")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to serialize best score")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write best score file")]
    Write(#[source] std::io::Error),
}

#[derive(Debug, Error)]
#[error("Failed to read best score from disk")]
pub(crate) struct LoadError(#[source] LoadErrorSource);

impl LoadError {
    fn read(e: std::io::Error) -> Self {
        LoadError(LoadErrorSource::Read(e))
    }

    fn deserialize(e: serde_json::Error) -> Self {
        LoadError(LoadErrorSource::Deserialize(e))
    }
}

#[derive(Debug, Error)]
enum LoadErrorSource {
    #[error("failed to read best score file")]
    Read(#[source] std::io::Error),
    #[error("failed to deserialize best score file")]
    Deserialize(#[source] serde_json::Error),
}
