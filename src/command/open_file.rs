//! OpenFile: ask the editor for a file and open it

use super::Command;
use crate::controller::Controller;

pub const OPEN_FILE: &str = "OpenFile";

/// Opens a file chosen through the editor's own picker
///
/// Runs as soon as it is triggered. Dismissing the picker is not an error.
#[derive(Debug, Default)]
pub struct FileOpener;

impl FileOpener {
    pub fn new() -> Self {
        Self
    }
}

impl Command for FileOpener {
    fn name(&self) -> &str {
        OPEN_FILE
    }

    fn exec(&mut self, controller: &mut dyn Controller) -> anyhow::Result<()> {
        let editor = controller.editor();
        match editor.choose_file() {
            Some(path) => editor.open(&path),
            None => {
                tracing::debug!("No file chosen");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_without_input() {
        let mut opener = FileOpener::new();
        assert_eq!(opener.name(), OPEN_FILE);
        assert!(opener.next_step().is_none());
    }
}
