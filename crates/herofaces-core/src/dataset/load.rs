//! JSON loading for `content/fullunits.json` and `languages/fulllanguages.json`.

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

use super::{DatasetError, Languages, Localization, UnitSet};

pub const UNITS_FILE: &str = "content/fullunits.json";
pub const LANGUAGES_FILE: &str = "languages/fulllanguages.json";

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DatasetError> {
    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(DatasetError::Missing {
                path: path.to_path_buf(),
            })
        }
        Err(source) => {
            return Err(DatasetError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    serde_json::from_slice(&bytes).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the unit roster. An empty roster is an error.
pub fn load_units(path: &Path) -> Result<UnitSet, DatasetError> {
    let units: UnitSet = read_json(path)?;
    if units.is_empty() {
        return Err(DatasetError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(units)
}

/// Loads every language table. An empty file is an error.
pub fn load_languages(path: &Path) -> Result<Languages, DatasetError> {
    let languages: Languages = read_json(path)?;
    if languages.is_empty() {
        return Err(DatasetError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(languages)
}

/// Everything the face planner needs, for one language.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub units: UnitSet,
    pub names: Localization,
}

impl Dataset {
    /// Loads both files under `data_dir` and keeps the `language` table.
    ///
    /// A language code absent from an otherwise valid file yields an empty
    /// table, so every name falls back to its raw id.
    pub fn load(data_dir: &Path, language: &str) -> Result<Self, DatasetError> {
        let units = load_units(&data_dir.join(UNITS_FILE))?;
        let languages_path: PathBuf = data_dir.join(LANGUAGES_FILE);
        let mut languages = load_languages(&languages_path)?;
        let names = match languages.remove(language) {
            Some(table) => table,
            None => {
                tracing::warn!(
                    "{}",
                    DatasetError::MissingLanguage {
                        code: language.to_string(),
                        path: languages_path,
                    }
                );
                Localization::default()
            }
        };
        Ok(Self { units, names })
    }
}
