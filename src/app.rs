use chrono::NaiveDate;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use yansi::Paint;

use crate::{
    error::{Error, Result},
    localizer::{LanguageCatalog, Localizer, Translations},
    project,
    settings::{Settings, SettingsStore},
};

/// Running session: the settings record plus the labels currently shown.
///
/// Every language switch and every creation attempt writes the whole record
/// back to the store. A failed write is reported and otherwise ignored.
pub struct App {
    store: SettingsStore,
    localizer: Localizer,
    catalog: LanguageCatalog,
    settings: Settings,
    translations: Translations,
}

impl App {
    /// Fails only when the language list or the selected translation table
    /// cannot be loaded.
    pub fn start(store: SettingsStore, localizer: Localizer) -> Result<App> {
        let (settings, load_error) = store.load_or_default();
        let catalog = localizer.load_language_codes()?;
        let translations = localizer.load_translations_from(&catalog, &settings.language)?;

        info!(
            "starting with language `{}` ({})",
            settings.language, translations.code
        );

        let app = App {
            store,
            localizer,
            catalog,
            settings,
            translations,
        };

        if let Some(e) = load_error {
            app.report_warning("loading_settings_warning", &e);
        }

        Ok(app)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_path(&self) -> &Path {
        self.store.path()
    }

    pub fn catalog(&self) -> &LanguageCatalog {
        &self.catalog
    }

    pub fn translations(&self) -> &Translations {
        &self.translations
    }

    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.translations.translate(key)
    }

    /// Translated text laid out in the current language's direction.
    pub fn label(&self, key: &str) -> String {
        self.translations.direction.isolate(self.t(key))
    }

    /// Only languages listed in the catalog can be selected and persisted.
    pub fn change_language(&mut self, language: &str) -> Result<()> {
        if !self.catalog.contains(language) {
            return Err(Error::UnknownLanguage {
                name: language.to_string(),
            });
        }

        let translations = self
            .localizer
            .load_translations_from(&self.catalog, language)?;

        self.translations = translations;
        self.settings.language = language.to_string();
        info!(
            "switched language to `{}` ({})",
            language, self.translations.code
        );

        self.persist();
        Ok(())
    }

    pub fn create_project(&mut self, name: &str, today: NaiveDate) -> Result<PathBuf> {
        let result = project::create_project(
            &self.settings.project_base_directory,
            &self.settings.project_subfolder,
            &self.settings.images_subfolder,
            name,
            today,
        );
        if let Err(e) = &result {
            debug!("create project failed ({:?}): {}", e.kind(), e);
        }

        self.persist();
        result
    }

    /// User-facing message for `err` in the current language.
    pub fn describe_error(&self, err: &Error) -> String {
        let message = match err {
            Error::InvalidName { .. } => self.t("define_project_name").to_string(),
            Error::AlreadyExists { name, date } => format!(
                "{} {} {} {} {}.",
                self.t("folder"),
                name,
                self.t("already_exists"),
                self.t("at_date"),
                date
            ),
            other => other.to_string(),
        };

        self.translations.direction.isolate(&message)
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.settings) {
            self.report_warning("saving_settings_warning", &e);
        }
    }

    fn report_warning(&self, title_key: &str, err: &Error) {
        warn!("{}", err);
        eprintln!(
            "{} {}",
            format!("{}:", self.label(title_key)).yellow().bold(),
            err
        );
    }
}


#[cfg(test)]
mod tests {
    use super::fixture::Fixture;
    use super::*;
    use crate::{error::ErrorKind, localizer::Direction, settings::SETTINGS_FILENAME};
    use std::fs;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn starts_with_stored_language() {
        let fixture = Fixture::new();
        fixture.write_settings(r#"{"language": "עברית"}"#);

        let app = fixture.start().unwrap();

        assert_eq!(app.translations().code, "he");
        assert_eq!(app.translations().direction, Direction::RightToLeft);
        assert_eq!(app.t("title"), "יוצר היררכיה");
        assert_eq!(app.label("title"), "\u{2067}יוצר היררכיה\u{2069}");
    }

    #[test]
    fn corrupt_settings_fall_back_to_defaults() {
        let fixture = Fixture::new();
        fixture.write_settings("][");

        let app = fixture.start().unwrap();

        assert_eq!(app.settings(), &Settings::default());
        assert_eq!(app.translations().code, "en");
    }

    #[test]
    fn missing_locales_are_fatal() {
        let fixture = Fixture::new();
        fs::remove_file(fixture.dir.path().join("locales/en.json")).unwrap();

        let err = fixture.start().err().unwrap();
        assert_eq!(err.kind(), ErrorKind::CatalogMissing);
    }

    #[test]
    fn language_switch_is_persisted() {
        let fixture = Fixture::new();
        let mut app = fixture.start().unwrap();

        app.change_language("עברית").unwrap();

        assert_eq!(app.settings().language, "עברית");
        assert_eq!(app.translations().direction, Direction::RightToLeft);
        assert_eq!(fixture.saved().language, "עברית");
    }

    #[test]
    fn failed_save_keeps_language_switch() {
        let fixture = Fixture::new();
        let blocker = fixture.dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let mut app = App::start(
            SettingsStore::at(&blocker.join(SETTINGS_FILENAME)),
            Localizer::new(&fixture.dir.path().join("locales")),
        )
        .unwrap();

        app.change_language("עברית").unwrap();

        assert_eq!(app.settings().language, "עברית");
        assert_eq!(app.t("title"), "יוצר היררכיה");
    }

    #[test]
    fn create_attempts_are_persisted() {
        let fixture = Fixture::new();
        let base = fixture.dir.path().join("work");
        fixture.write_settings(&format!(
            r#"{{"projectPath": {}}}"#,
            serde_json::to_string(&base).unwrap()
        ));
        let mut app = fixture.start().unwrap();

        let created = app.create_project("shoot1", date()).unwrap();
        assert_eq!(created, base.join("projects/2024-03-01/shoot1"));
        assert_eq!(fixture.saved().project_base_directory, base);

        fs::remove_file(fixture.settings_path()).unwrap();
        let err = app.create_project("shoot1", date()).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
        assert!(fixture.settings_path().exists());
        assert_eq!(
            app.describe_error(&err),
            "Folder shoot1 already exists at 2024-03-01."
        );
    }

    #[test]
    fn empty_name_message_falls_back_to_key() {
        let fixture = Fixture::new();
        let mut app = fixture.start().unwrap();

        let err = app.create_project("", date()).unwrap_err();

        assert_eq!(app.describe_error(&err), "define_project_name");
    }

    #[test]
    fn unknown_language_is_rejected_and_not_persisted() {
        let fixture = Fixture::new();
        let mut app = fixture.start().unwrap();

        let err = app.change_language("Klingon").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::UnknownLanguage);
        assert_eq!(app.settings().language, "English");
        assert_eq!(app.translations().code, "en");
        assert!(!fixture.settings_path().exists());
    }
}
