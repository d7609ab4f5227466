use anyhow::{ensure, Context, Result};
use log::warn;

use crate::localizer::Localizer;

pub fn show_locales(localizer: &Localizer, init: bool) -> Result<()> {
    let locales_dir = localizer.locales_dir();

    if init {
        let written = localizer.install_bundled().with_context(|| {
            format!("failed to write locales to: {}", locales_dir.display())
        })?;
        for path in written {
            eprintln!("wrote: {}", path.display());
        }
    }

    ensure!(
        locales_dir.exists(),
        "locales directory not found: {} (use `--init` to create it)",
        locales_dir.display()
    );
    println!("locales directory: {}", locales_dir.display());

    for name in localizer.load_language_names()? {
        let translations = localizer.load_translations(&name)?;
        if translations.is_empty() {
            warn!("no translations for `{}`", name);
        }
        println!(
            "- {} ({}, {} keys)",
            name,
            translations.code,
            translations.len()
        );
    }

    Ok(())
}
