use log::{debug, info, trace};
use serde::Deserialize;
use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};

use crate::error::{Error, Result};

pub const DEFAULT_LOCALE_CODE: &str = "en";
pub const LANGUAGE_CODES_FILENAME: &str = "language_codes.json";

pub const LANGUAGE_CODES_RAW: &str = include_str!("../locales/language_codes.json");
pub const EN_LOCALE_RAW: &str = include_str!("../locales/en.json");
pub const HE_LOCALE_RAW: &str = include_str!("../locales/he.json");

/// Locale files shipped inside the binary, keyed by file name.
pub const BUNDLED_LOCALES: [(&str, &str); 3] = [
    (LANGUAGE_CODES_FILENAME, LANGUAGE_CODES_RAW),
    ("en.json", EN_LOCALE_RAW),
    ("he.json", HE_LOCALE_RAW),
];

#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    #[default]
    #[serde(rename = "ltr")]
    LeftToRight,
    #[serde(rename = "rtl")]
    RightToLeft,
}

impl Direction {
    /// Wraps `text` in a directional isolate when it must be laid out right-to-left.
    pub fn isolate(self, text: &str) -> String {
        match self {
            Direction::LeftToRight => text.to_string(),
            Direction::RightToLeft => format!("\u{2067}{text}\u{2069}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageEntry {
    pub code: String,
    pub direction: Direction,
}

/// Either `"he"` or `{"code": "he", "direction": "rtl"}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Code(String),
    Detailed {
        code: String,
        #[serde(default)]
        direction: Direction,
    },
}

impl From<RawEntry> for LanguageEntry {
    fn from(raw: RawEntry) -> Self {
        match raw {
            RawEntry::Code(code) => LanguageEntry {
                code,
                direction: Direction::LeftToRight,
            },
            RawEntry::Detailed { code, direction } => LanguageEntry { code, direction },
        }
    }
}

/// Display name to entry, in the order the codes file lists them.
#[derive(Debug, Clone, Default)]
pub struct LanguageCatalog {
    entries: Vec<(String, LanguageEntry)>,
}

impl LanguageCatalog {
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&LanguageEntry> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, entry)| entry)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Entry for `name`, or the default locale when the name is unknown.
    pub fn resolve(&self, name: &str) -> LanguageEntry {
        if let Some(entry) = self.get(name) {
            return entry.clone();
        }

        debug!(
            "unknown language `{}`, falling back to `{}`",
            name, DEFAULT_LOCALE_CODE
        );
        let direction = self
            .entries
            .iter()
            .find(|(_, entry)| entry.code == DEFAULT_LOCALE_CODE)
            .map(|(_, entry)| entry.direction)
            .unwrap_or_default();

        LanguageEntry {
            code: DEFAULT_LOCALE_CODE.to_string(),
            direction,
        }
    }
}

/// Key to display string for one locale.
#[derive(Debug, Clone, Default)]
pub struct Translations {
    pub code: String,
    pub direction: Direction,
    table: HashMap<String, String>,
}

impl Translations {
    pub fn new(code: &str, direction: Direction, table: HashMap<String, String>) -> Self {
        Self {
            code: code.to_string(),
            direction,
            table,
        }
    }

    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        translate(&self.table, key)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Identity fallback: a missing key renders as the key itself.
pub fn translate<'a>(table: &'a HashMap<String, String>, key: &'a str) -> &'a str {
    table.get(key).map(String::as_str).unwrap_or(key)
}

pub struct Localizer {
    locales_dir: PathBuf,
}

impl Localizer {
    pub fn new(locales_dir: &Path) -> Self {
        Self {
            locales_dir: locales_dir.to_path_buf(),
        }
    }

    pub fn locales_dir(&self) -> &Path {
        &self.locales_dir
    }

    fn read_locale_file(&self, filename: &str) -> Result<(PathBuf, String)> {
        let path = self.locales_dir.join(filename);
        match fs::read_to_string(&path) {
            Ok(data) => {
                trace!("loaded {}", data);
                Ok((path, data))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(Error::CatalogMissing { path }),
            Err(e) => Err(Error::CatalogCorrupt {
                path,
                reason: e.to_string(),
            }),
        }
    }

    pub fn load_language_codes(&self) -> Result<LanguageCatalog> {
        let (path, data) = self.read_locale_file(LANGUAGE_CODES_FILENAME)?;

        // preserve_order keeps the file's ordering in the map
        let raw: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(&data).map_err(|e| Error::CatalogCorrupt {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        let mut entries = Vec::with_capacity(raw.len());
        for (name, value) in raw {
            let entry: RawEntry =
                serde_json::from_value(value).map_err(|e| Error::CatalogCorrupt {
                    path: path.clone(),
                    reason: format!("language `{}`: {}", name, e),
                })?;
            entries.push((name, entry.into()));
        }

        info!(
            "loaded {} languages from: {}",
            entries.len(),
            path.display()
        );
        Ok(LanguageCatalog { entries })
    }

    pub fn load_language_names(&self) -> Result<Vec<String>> {
        let catalog = self.load_language_codes()?;
        Ok(catalog.names().into_iter().map(String::from).collect())
    }

    pub fn load_translations(&self, language_name: &str) -> Result<Translations> {
        let catalog = self.load_language_codes()?;
        self.load_translations_from(&catalog, language_name)
    }

    /// Same as [`Localizer::load_translations`] with an already loaded catalog.
    pub fn load_translations_from(
        &self,
        catalog: &LanguageCatalog,
        language_name: &str,
    ) -> Result<Translations> {
        let entry = catalog.resolve(language_name);
        let (path, data) = self.read_locale_file(&format!("{}.json", entry.code))?;

        let table: HashMap<String, String> =
            serde_json::from_str(&data).map_err(|e| Error::CatalogCorrupt {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        info!("load {} locale from: {}", entry.code, path.display());
        Ok(Translations::new(&entry.code, entry.direction, table))
    }

    /// Writes the bundled locale files that are not already present.
    /// Returns the paths that were written.
    pub fn install_bundled(&self) -> io::Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.locales_dir)?;

        let mut written = Vec::new();
        for (filename, contents) in BUNDLED_LOCALES {
            let path = self.locales_dir.join(filename);
            if path.exists() {
                debug!("keeping existing locale file `{}`", path.display());
                continue;
            }

            fs::write(&path, contents)?;
            info!("wrote bundled locale to `{}`", path.display());
            written.push(path);
        }

        Ok(written)
    }
}
