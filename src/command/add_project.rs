//! AddProject: prompt for a directory and add it to the navigator

use anyhow::bail;

use super::{expand_home, Command, InputStep, TextInput};
use crate::controller::{Controller, Project};

pub const ADD_PROJECT: &str = "AddProject";

#[derive(Debug, Default)]
struct ProjectPathStep {
    input: TextInput,
}

impl InputStep for ProjectPathStep {
    fn prompt(&self) -> &str {
        "Add project"
    }

    fn input(&self) -> &TextInput {
        &self.input
    }

    fn input_mut(&mut self) -> &mut TextInput {
        &mut self.input
    }
}

/// Adds the directory typed in the command box as a project
///
/// The project is named after the directory.
#[derive(Debug, Default)]
pub struct ProjectAdder {
    step: ProjectPathStep,
}

impl ProjectAdder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Command for ProjectAdder {
    fn name(&self) -> &str {
        ADD_PROJECT
    }

    fn next_step(&mut self) -> Option<&mut dyn InputStep> {
        Some(&mut self.step)
    }

    fn exec(&mut self, controller: &mut dyn Controller) -> anyhow::Result<()> {
        let raw = self.step.input.text().trim();
        if raw.is_empty() {
            bail!("No project path given");
        }
        let path = expand_home(raw);
        let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            bail!("Cannot derive a project name from {}", path.display());
        };
        controller.navigator().add_project(Project::new(name, path))
    }

    fn reset(&mut self) {
        self.step.input.clear();
    }
}
