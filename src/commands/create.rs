use anyhow::{bail, Result};
use chrono::NaiveDate;
use log::{debug, info};

use crate::{app::App, project, utils};

pub fn create_project(
    app: &mut App,
    name: &str,
    date: Option<NaiveDate>,
    dry_run: bool,
) -> Result<()> {
    let today = date.unwrap_or_else(utils::get_current_date);

    if dry_run {
        if let Err(e) = project::validate_name(name) {
            debug!("{:?}", e);
            bail!("{}: {}", app.label("error_title"), app.describe_error(&e));
        }

        let settings = app.settings();
        let target = project::compute_target_path(
            &settings.project_base_directory,
            &settings.project_subfolder,
            name,
            today,
        );
        info!("dry run, nothing created");
        println!("{}", target.display());
        return Ok(());
    }

    match app.create_project(name, today) {
        Ok(path) => {
            eprintln!("{}", app.label("success_message"));
            println!("{}", path.display());
            Ok(())
        }
        Err(e) => {
            debug!("{:?}", e);
            bail!("{}: {}", app.label("error_title"), app.describe_error(&e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::fixture::Fixture;
    use std::fs;

    fn start_in_base(fixture: &Fixture) -> App {
        let base = fixture.dir.path().join("work");
        fixture.write_settings(&format!(
            r#"{{"projectPath": {}}}"#,
            serde_json::to_string(&base).unwrap()
        ));
        fixture.start().unwrap()
    }

    fn date() -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2024, 3, 1)
    }

    #[test]
    fn dry_run_creates_nothing() {
        let fixture = Fixture::new();
        let mut app = start_in_base(&fixture);

        create_project(&mut app, "shoot1", date(), true).unwrap();

        assert!(!fixture.dir.path().join("work").exists());
    }

    #[test]
    fn dry_run_rejects_invalid_names() {
        let fixture = Fixture::new();
        let mut app = start_in_base(&fixture);

        for name in ["", "..", "../../etc"] {
            assert!(
                create_project(&mut app, name, date(), true).is_err(),
                "`{name}` should be rejected"
            );
        }

        assert!(!fixture.dir.path().join("work").exists());
    }

    #[test]
    fn create_then_repeat_fails() {
        let fixture = Fixture::new();
        let mut app = start_in_base(&fixture);

        create_project(&mut app, "shoot1", date(), false).unwrap();
        let target = fixture.dir.path().join("work/projects/2024-03-01/shoot1");
        assert!(target.join("images").is_dir());

        let err = create_project(&mut app, "shoot1", date(), false).unwrap_err();
        assert!(err.to_string().contains("shoot1"));
        assert_eq!(fs::read_dir(&target).unwrap().count(), 1);
    }
}
