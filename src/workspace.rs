//! In-memory controller: an editor with open files and a project navigator
//!
//! `Workspace` is the reference `Controller` used by the command-line tool and
//! the integration tests. It keeps what a GUI host would render (open files,
//! the active file, projects, a status message) without drawing anything.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::command::Command;
use crate::controller::{Controller, Editor, Navigator, Project};
use crate::util::{filename_for_display, validate_file_for_opening, validate_project_dir};
use crate::util::ProjectError;

/// Open files, most recently opened last
#[derive(Debug, Default)]
pub struct FileEditor {
    files: Vec<PathBuf>,
    active: Option<usize>,
    /// Answers for the file picker, consumed in order before any dialog
    picks: VecDeque<PathBuf>,
}

impl FileEditor {
    /// Queue the answer the next file picker request receives
    pub fn queue_pick(&mut self, path: impl Into<PathBuf>) {
        self.picks.push_back(path.into());
    }
}

impl Editor for FileEditor {
    fn open(&mut self, path: &Path) -> anyhow::Result<()> {
        validate_file_for_opening(path)
            .map_err(|e| anyhow::anyhow!(e.user_message(&filename_for_display(path))))?;

        let path = path
            .canonicalize()
            .with_context(|| format!("Failed to resolve {}", path.display()))?;

        // Reopening an already open file just activates it
        let idx = match self.files.iter().position(|p| *p == path) {
            Some(idx) => idx,
            None => {
                self.files.push(path);
                self.files.len() - 1
            }
        };
        self.active = Some(idx);
        tracing::debug!("Active file: {}", self.files[idx].display());
        Ok(())
    }

    fn choose_file(&mut self) -> Option<PathBuf> {
        if let Some(path) = self.picks.pop_front() {
            return Some(path);
        }

        #[cfg(feature = "dialog")]
        {
            rfd::FileDialog::new().set_title("Open file").pick_file()
        }

        #[cfg(not(feature = "dialog"))]
        {
            tracing::debug!("No file picker available");
            None
        }
    }

    fn active_file(&self) -> Option<&Path> {
        self.active.map(|idx| self.files[idx].as_path())
    }

    fn open_files(&self) -> &[PathBuf] {
        &self.files
    }
}

/// Project roots, in the order they were added
#[derive(Debug, Default)]
pub struct ProjectNavigator {
    projects: Vec<Project>,
}

impl Navigator for ProjectNavigator {
    fn add_project(&mut self, project: Project) -> anyhow::Result<()> {
        validate_project_dir(&project.path)?;

        if self.projects.iter().any(|p| p.name == project.name) {
            return Err(ProjectError::Duplicate(project.name).into());
        }

        tracing::info!(
            "Added project {} ({})",
            project.name,
            project.path.display()
        );
        self.projects.push(project);
        Ok(())
    }

    fn projects(&self) -> &[Project] {
        &self.projects
    }
}

/// Most recent executions kept in [`Workspace::executed`]
pub const MAX_EXECUTED: usize = 100;

/// Reference controller
#[derive(Debug, Default)]
pub struct Workspace {
    editor: FileEditor,
    navigator: ProjectNavigator,
    /// Names of executed commands, oldest first, whether or not they
    /// succeeded. Capped at [`MAX_EXECUTED`].
    executed: Vec<String>,
    /// Outcome of the last execution, for the status line
    status: Option<String>,
    last_error: Option<String>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a workspace with projects already in the navigator
    ///
    /// Invalid projects are logged and skipped.
    pub fn with_projects(projects: impl IntoIterator<Item = Project>) -> Self {
        let mut workspace = Self::new();
        for project in projects {
            let name = project.name.clone();
            if let Err(e) = workspace.navigator.add_project(project) {
                tracing::warn!("Skipping configured project {}: {}", name, e);
            }
        }
        workspace
    }

    /// The last [`MAX_EXECUTED`] executed command names, oldest first
    pub fn executed(&self) -> &[String] {
        &self.executed
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn file_editor(&self) -> &FileEditor {
        &self.editor
    }

    pub fn file_editor_mut(&mut self) -> &mut FileEditor {
        &mut self.editor
    }

    pub fn project_navigator(&self) -> &ProjectNavigator {
        &self.navigator
    }
}

impl Controller for Workspace {
    fn execute(&mut self, command: &mut dyn Command) {
        let name = command.name().to_string();
        if self.executed.len() >= MAX_EXECUTED {
            let excess = self.executed.len() + 1 - MAX_EXECUTED;
            self.executed.drain(..excess);
        }
        self.executed.push(name.clone());

        match command.exec(self) {
            Ok(()) => {
                tracing::info!("Executed {}", name);
                self.status = Some(format!("{}: done", name));
                self.last_error = None;
            }
            Err(e) => {
                tracing::warn!("Command {} failed: {:#}", name, e);
                self.status = Some(format!("{}: {:#}", name, e));
                self.last_error = Some(format!("{:#}", e));
            }
        }
    }

    fn editor(&mut self) -> &mut dyn Editor {
        &mut self.editor
    }

    fn navigator(&mut self) -> &mut dyn Navigator {
        &mut self.navigator
    }
}
