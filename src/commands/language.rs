use anyhow::{Context, Result};
use yansi::Paint;

use crate::app::App;

pub fn list_languages(app: &App) -> Result<()> {
    let catalog = app.catalog();

    for name in catalog.names() {
        let entry = catalog.resolve(name);
        if name == app.settings().language {
            println!("{} {} ({})", "*".green().bold(), name.bold(), entry.code);
        } else {
            println!("  {} ({})", name, entry.code);
        }
    }

    Ok(())
}

pub fn set_language(app: &mut App, name: &str) -> Result<()> {
    let names = app.catalog().names().join(", ");
    app.change_language(name)
        .with_context(|| format!("available languages: {}", names))?;
    eprintln!("{} {}", app.label("language_label"), name);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::fixture::Fixture;

    #[test]
    fn switches_to_listed_language() {
        let fixture = Fixture::new();
        let mut app = fixture.start().unwrap();

        set_language(&mut app, "עברית").unwrap();

        assert_eq!(fixture.saved().language, "עברית");
    }

    #[test]
    fn rejects_unlisted_language() {
        let fixture = Fixture::new();
        let mut app = fixture.start().unwrap();

        let err = set_language(&mut app, "Klingon").unwrap_err();

        assert!(format!("{:#}", err).contains("Klingon"));
        assert_eq!(app.settings().language, "English");
        assert!(!fixture.settings_path().exists());
    }
}
