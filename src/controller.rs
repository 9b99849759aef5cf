//! The editing surface commands run against

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::command::Command;

/// Controls the main editor UI: the editor pane and the project navigator
pub trait Controller {
    /// Run a resolved command against the live editing surface
    ///
    /// Failures inside the command are the controller's to report; dispatch
    /// does not recover from them.
    fn execute(&mut self, command: &mut dyn Command);

    fn editor(&mut self) -> &mut dyn Editor;

    fn navigator(&mut self) -> &mut dyn Navigator;
}

/// The text editing pane
pub trait Editor {
    /// Open `path`, making it the active file
    fn open(&mut self, path: &Path) -> anyhow::Result<()>;

    /// Ask the user for a file to open; `None` if they dismissed the picker
    fn choose_file(&mut self) -> Option<PathBuf>;

    fn active_file(&self) -> Option<&Path>;

    fn open_files(&self) -> &[PathBuf];
}

/// The project navigator pane
pub trait Navigator {
    fn add_project(&mut self, project: Project) -> anyhow::Result<()>;

    fn projects(&self) -> &[Project];
}

/// A named project root shown in the navigator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub path: PathBuf,
}

impl Project {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}
