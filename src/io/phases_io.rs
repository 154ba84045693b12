use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::model::config::AppConfig;
use crate::model::phase::StartUpPhases;

/// Directory holding the checklist files, discovered by walking up from cwd.
pub const DATA_DIR: &str = "liftoff";
pub const PHASES_FILE: &str = "phases.json";
pub const CONFIG_FILE: &str = "config.toml";

/// Error type for checklist I/O operations
#[derive(Debug, thiserror::Error)]
pub enum PhasesError {
    #[error("not a liftoff checklist: no liftoff/ directory found")]
    NotAChecklist,
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not serialize phases: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("could not parse config.toml: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Discover the checklist directory by walking up from `start`, looking for
/// a `liftoff/` subdirectory with a phases file. `start` may also be the
/// data directory itself.
pub fn discover_dir(start: &Path) -> Result<PathBuf, PhasesError> {
    if start.join(PHASES_FILE).is_file() {
        return Ok(start.to_path_buf());
    }
    let mut current = start.to_path_buf();
    loop {
        let data_dir = current.join(DATA_DIR);
        if data_dir.is_dir() && data_dir.join(PHASES_FILE).is_file() {
            return Ok(data_dir);
        }
        if !current.pop() {
            return Err(PhasesError::NotAChecklist);
        }
    }
}

/// Read and parse the phases file from the checklist directory.
pub fn load_phases(dir: &Path) -> Result<StartUpPhases, PhasesError> {
    let path = dir.join(PHASES_FILE);
    let text = fs::read_to_string(&path).map_err(|e| PhasesError::Read {
        path: path.clone(),
        source: e,
    })?;
    serde_json::from_str(&text).map_err(|e| PhasesError::Parse { path, source: e })
}

/// Write the phases file atomically (temp file in the same directory, then
/// rename over the original).
pub fn save_phases(dir: &Path, phases: &StartUpPhases) -> Result<(), PhasesError> {
    let json = serde_json::to_string_pretty(phases)?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(json.as_bytes())?;
    tmp.write_all(b"\n")?;
    tmp.persist(dir.join(PHASES_FILE))
        .map_err(|e| PhasesError::Io(e.error))?;
    Ok(())
}

/// Read config.toml from the checklist directory. A missing file is not an
/// error; defaults apply.
pub fn load_config(dir: &Path) -> Result<AppConfig, PhasesError> {
    let path = dir.join(CONFIG_FILE);
    if !path.is_file() {
        return Ok(AppConfig::default());
    }
    let text = fs::read_to_string(&path).map_err(|e| PhasesError::Read {
        path: path.clone(),
        source: e,
    })?;
    Ok(toml::from_str(&text)?)
}
