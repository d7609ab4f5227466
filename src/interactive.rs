use anyhow::Result;
use inquire::{InquireError, Select, Text};
use log::info;
use std::fmt;
use yansi::Paint;

use crate::{app::App, utils};

fn print_banner(app: &App) {
    let version = env!("CARGO_PKG_VERSION");
    let title = app.label("title");

    println!("{}", "+-----------------------------+".yellow());
    println!("{} {}", "|".yellow(), title.blue().bold());
    println!(
        "{} {}",
        "|".yellow(),
        format!("version: {version}").white().bold()
    );
    println!("{}", "+-----------------------------+\n".yellow());
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    CreateProject,
    ChangeLanguage,
    Quit,
}

struct MenuItem {
    action: MenuAction,
    label: String,
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

fn menu_items(app: &App) -> Vec<MenuItem> {
    [
        (MenuAction::CreateProject, "create_project"),
        (MenuAction::ChangeLanguage, "change_language"),
        (MenuAction::Quit, "quit"),
    ]
    .into_iter()
    .map(|(action, key)| MenuItem {
        action,
        label: app.label(key),
    })
    .collect()
}

/// Esc and Ctrl-C end the current prompt without being an error.
fn cancellable<T>(answer: Result<T, InquireError>) -> Result<Option<T>> {
    match answer {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
            info!("prompt cancelled by user");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

fn change_language(app: &mut App) -> Result<()> {
    let names: Vec<String> = app
        .catalog()
        .names()
        .into_iter()
        .map(String::from)
        .collect();
    let cursor = names
        .iter()
        .position(|name| *name == app.settings().language)
        .unwrap_or(0);

    let answer = Select::new(&app.label("language_label"), names)
        .with_starting_cursor(cursor)
        .prompt();
    let Some(language) = cancellable(answer)? else {
        return Ok(());
    };

    info!("user selected language: {}", language);
    app.change_language(&language)?;
    print_banner(app);
    Ok(())
}

fn create_project(app: &mut App) -> Result<()> {
    let answer = Text::new(&app.label("project_name_label")).prompt();
    let Some(name) = cancellable(answer)? else {
        return Ok(());
    };

    info!("user input: {}", name);
    match app.create_project(&name, utils::get_current_date()) {
        Ok(path) => {
            eprintln!(
                "{} {}",
                app.label("success_title").green().bold(),
                app.label("success_message")
            );
            eprintln!("{}", app.label("new_project_label"));
            println!("{}\n", path.display());
        }
        Err(e) => {
            eprintln!(
                "{} {}\n",
                app.label("error_title").red().bold(),
                app.describe_error(&e)
            );
        }
    }

    Ok(())
}

pub fn show_interactive(app: &mut App) -> Result<()> {
    print_banner(app);

    loop {
        let answer = Select::new(&app.label("menu_prompt"), menu_items(app)).prompt();
        let Some(choice) = cancellable(answer)? else {
            break;
        };

        match choice.action {
            MenuAction::CreateProject => create_project(app)?,
            MenuAction::ChangeLanguage => change_language(app)?,
            MenuAction::Quit => break,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_prompt_is_not_an_error() {
        let answer: Result<String, InquireError> = Err(InquireError::OperationCanceled);
        assert!(cancellable(answer).unwrap().is_none());

        let answer: Result<String, InquireError> = Err(InquireError::OperationInterrupted);
        assert!(cancellable(answer).unwrap().is_none());
    }

    #[test]
    fn other_prompt_failures_propagate() {
        let answer: Result<String, InquireError> = Err(InquireError::NotTTY);
        assert!(cancellable(answer).is_err());

        let answer: Result<String, InquireError> = Ok(String::from("shoot1"));
        assert_eq!(cancellable(answer).unwrap(), Some(String::from("shoot1")));
    }
}
