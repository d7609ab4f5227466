use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{
    error::{Error, Result},
    utils,
};

pub const SETTINGS_FILENAME: &str = "HierarchyMaker.json";
pub const DEFAULT_LANGUAGE: &str = "English";
pub const DEFAULT_PROJECT_SUBFOLDER: &str = "projects";
pub const DEFAULT_IMAGES_SUBFOLDER: &str = "images";

/// User preferences, always fully populated.
///
/// Serialized with the key names of the configurable on-disk schema so that
/// older builds can still read what we write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub language: String,
    #[serde(rename = "projectPath")]
    pub project_base_directory: PathBuf,
    #[serde(rename = "projectFolder")]
    pub project_subfolder: String,
    #[serde(rename = "imagesFolder")]
    pub images_subfolder: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            project_base_directory: utils::get_home_dir(),
            project_subfolder: DEFAULT_PROJECT_SUBFOLDER.to_string(),
            images_subfolder: DEFAULT_IMAGES_SUBFOLDER.to_string(),
        }
    }
}

/// Whatever subset of keys a settings file actually contains.
///
/// Covers both historical layouts: `projectPath` + `projectFolder`, and the
/// single `projectDirectory` base.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredSettings {
    language: Option<String>,
    project_path: Option<PathBuf>,
    project_directory: Option<PathBuf>,
    project_folder: Option<String>,
    images_folder: Option<String>,
}

impl StoredSettings {
    fn overlay(self, defaults: Settings) -> Settings {
        Settings {
            language: self.language.unwrap_or(defaults.language),
            project_base_directory: self
                .project_path
                .or(self.project_directory)
                .unwrap_or(defaults.project_base_directory),
            project_subfolder: self.project_folder.unwrap_or(defaults.project_subfolder),
            images_subfolder: self.images_folder.unwrap_or(defaults.images_subfolder),
        }
    }
}

pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Store backed by `<home>/HierarchyMaker.json`.
    pub fn new() -> Self {
        Self::at(&utils::get_home_dir().join(SETTINGS_FILENAME))
    }

    pub fn at(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Defaults overlaid with the persisted file. A missing file is not an error.
    pub fn load(&self) -> Result<Settings> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(
                    "no settings file at `{}`, using defaults",
                    self.path.display()
                );
                return Ok(Settings::default());
            }
            Err(e) => {
                return Err(Error::ConfigCorrupt {
                    path: self.path.clone(),
                    reason: e.to_string(),
                })
            }
        };
        trace!("raw settings: {}", data);

        let stored: StoredSettings =
            serde_json::from_str(&data).map_err(|e| Error::ConfigCorrupt {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        let settings = stored.overlay(Settings::default());
        info!("loaded settings from `{}`", self.path.display());
        debug!("{:#?}", settings);
        Ok(settings)
    }

    /// Like [`SettingsStore::load`] but never fails: a corrupt file yields the
    /// defaults together with the error, so it can be shown once labels exist.
    pub fn load_or_default(&self) -> (Settings, Option<Error>) {
        match self.load() {
            Ok(settings) => (settings, None),
            Err(e) => (Settings::default(), Some(e)),
        }
    }

    /// Overwrites the settings file with the full record.
    pub fn save(&self, settings: &Settings) -> Result<()> {
        let write_error = |source: io::Error| Error::SettingsWrite {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(write_error)?;
            }
        }

        let json = serde_json::to_string_pretty(settings)
            .map_err(io::Error::from)
            .map_err(write_error)?;
        trace!("serialize settings: `{:?} -> {}`", settings, json);

        fs::write(&self.path, json).map_err(write_error)?;
        debug!("wrote settings to `{}`", self.path.display());
        Ok(())
    }
}
