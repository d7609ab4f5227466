use chrono::NaiveDate;
use log::{debug, info};
use std::{
    env, fs, io,
    path::{Component, Path, PathBuf},
};

use crate::{
    error::{Error, Result},
    utils,
};

pub enum TreeLocation<'a> {
    /// `base/subfolder/YYYY-MM-DD`, shared by every project of the day
    DateDir,
    ProjectDir(&'a str),
    ImagesDir(&'a str),
}

/// Directory layout for projects created on one given day.
pub struct ProjectTree {
    base_directory: PathBuf,
    project_subfolder: String,
    images_subfolder: String,
    date: String,
}

impl ProjectTree {
    pub fn new(
        base_directory: &Path,
        project_subfolder: &str,
        images_subfolder: &str,
        today: NaiveDate,
    ) -> Self {
        Self {
            base_directory: base_directory.to_path_buf(),
            project_subfolder: project_subfolder.to_string(),
            images_subfolder: images_subfolder.to_string(),
            date: utils::format_date(today),
        }
    }

    pub fn get_path(&self, location: TreeLocation) -> PathBuf {
        match location {
            TreeLocation::DateDir => self
                .base_directory
                .join(&self.project_subfolder)
                .join(&self.date),
            TreeLocation::ProjectDir(name) => self.get_path(TreeLocation::DateDir).join(name),
            TreeLocation::ImagesDir(name) => self
                .get_path(TreeLocation::ProjectDir(name))
                .join(&self.images_subfolder),
        }
    }

    fn ensure_created(&self, location: TreeLocation) -> Result<()> {
        let dir = self.get_path(location);
        if dir.exists() {
            debug!("directory already exists at `{}`", dir.display());
            return Ok(());
        }

        fs::create_dir_all(&dir).map_err(|source| Error::Filesystem {
            path: dir.clone(),
            source,
        })?;
        info!("successfully created `{}`", dir.display());
        Ok(())
    }

    fn create_dir(path: &Path) -> io::Result<()> {
        fs::create_dir(path)?;
        debug!("created `{}`", path.display());
        Ok(())
    }

    /// Creates `DateDir/name/images` and returns the absolute project directory.
    ///
    /// Nothing is touched when the name is rejected or the project already
    /// exists. Directories created before an I/O failure are left in place.
    pub fn create(&self, name: &str) -> Result<PathBuf> {
        validate_name(name)?;

        self.ensure_created(TreeLocation::DateDir)?;

        let target = self.get_path(TreeLocation::ProjectDir(name));
        if target.exists() {
            info!("project `{}` already exists at {}", name, self.date);
            return Err(self.already_exists(name));
        }

        Self::create_dir(&target).map_err(|source| match source.kind() {
            io::ErrorKind::AlreadyExists => self.already_exists(name),
            _ => Error::Filesystem {
                path: target.clone(),
                source,
            },
        })?;

        let images = self.get_path(TreeLocation::ImagesDir(name));
        Self::create_dir(&images).map_err(|source| Error::Filesystem {
            path: images.clone(),
            source,
        })?;

        let target = absolute(&target)?;
        info!("created project at `{}`", target.display());
        Ok(target)
    }

    fn already_exists(&self, name: &str) -> Error {
        Error::AlreadyExists {
            name: name.to_string(),
            date: self.date.clone(),
        }
    }
}

/// A project name must be exactly one plain path component.
pub fn validate_name(name: &str) -> Result<()> {
    let invalid = || Error::InvalidName {
        name: name.to_string(),
    };

    if name.trim().is_empty() {
        return Err(invalid());
    }

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(part)), None) if part.to_str() == Some(name) => Ok(()),
        _ => Err(invalid()),
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    let cwd = env::current_dir().map_err(|source| Error::Filesystem {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(cwd.join(path))
}

/// `base/subfolder/today/name`, without touching the filesystem.
pub fn compute_target_path(
    base_directory: &Path,
    project_subfolder: &str,
    project_name: &str,
    today: NaiveDate,
) -> PathBuf {
    ProjectTree::new(base_directory, project_subfolder, "", today)
        .get_path(TreeLocation::ProjectDir(project_name))
}

pub fn create_project(
    base_directory: &Path,
    project_subfolder: &str,
    images_subfolder: &str,
    project_name: &str,
    today: NaiveDate,
) -> Result<PathBuf> {
    ProjectTree::new(base_directory, project_subfolder, images_subfolder, today).create(project_name)
}
