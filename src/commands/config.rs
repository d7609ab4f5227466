use anyhow::Result;

use crate::app::App;

pub fn show_config(app: &App) -> Result<()> {
    let translations = app.translations();

    println!("settings file: {}", app.settings_path().display());
    println!(
        "active locale: {} ({:?}, {} keys)",
        translations.code,
        translations.direction,
        translations.len()
    );
    println!("{}", serde_json::to_string_pretty(app.settings())?);

    Ok(())
}
