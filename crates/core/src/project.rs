//! The directory under test and the executable search path used to probe it

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct ProjectDir {
    root: PathBuf,
    search_path: Option<OsString>,
}

impl ProjectDir {
    /// Use `root` with the ambient `PATH`
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(Error::InvalidRoot(root));
        }
        Ok(Self {
            root,
            search_path: env::var_os("PATH"),
        })
    }

    pub fn current() -> Result<Self> {
        Self::new(env::current_dir()?)
    }

    /// Replace the executable search path (a `PATH`-style list)
    pub fn with_search_path(mut self, search_path: impl Into<OsString>) -> Self {
        self.search_path = Some(search_path.into());
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// True if `relative` exists, whatever its kind
    pub fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }

    pub fn has_file(&self, relative: &str) -> bool {
        self.path(relative).is_file()
    }

    pub fn has_dir(&self, relative: &str) -> bool {
        self.path(relative).is_dir()
    }

    /// Locate `name` on the search path
    pub fn find_executable(&self, name: &str) -> Option<PathBuf> {
        let search_path = self.search_path.as_ref()?;
        env::split_paths(search_path)
            .filter(|dir| !dir.as_os_str().is_empty())
            .flat_map(|dir| candidate_names(name).map(move |file| dir.join(file)))
            .find(|candidate| is_executable(candidate))
    }
}

#[cfg(windows)]
fn candidate_names(name: &str) -> impl Iterator<Item = String> + '_ {
    ["", ".exe", ".cmd", ".bat"]
        .into_iter()
        .map(move |ext| format!("{name}{ext}"))
}

#[cfg(not(windows))]
fn candidate_names(name: &str) -> impl Iterator<Item = String> + '_ {
    std::iter::once(name.to_string())
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
