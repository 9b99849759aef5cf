//! Command-line interface for inspecting and exercising key dispatch
//!
//! Supports:
//! - Listing the effective key bindings
//! - Resolving a single key string
//! - Replaying a sequence of key presses and typed text against a workspace
//! - Writing the effective configuration to a config file

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::commander::Commander;
use crate::config::CommanderConfig;
use crate::controller::Controller;
use crate::keymap::{parse_key_string, KeyChord, KeymapError};
use crate::workspace::Workspace;

/// Keyboard command dispatch for an editor shell
#[derive(Parser, Debug)]
#[command(name = "commander", version, about = "Keyboard command dispatch")]
pub struct CliArgs {
    /// Config file to use instead of the one in the config directory
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Extra keymap file layered over the configured ones
    #[arg(short = 'k', long, value_name = "FILE", global = true)]
    pub keymap: Option<PathBuf>,

    /// Log dispatch decisions to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// List the effective key bindings
    Keys,
    /// Print the command bound to a key, e.g. `ctrl+o`
    Resolve {
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Feed events to a fresh workspace and report what executed
    ///
    /// Events are key strings (`ctrl+o`, `enter`, `backspace`), `text:<chars>`
    /// to type into the command box, `pick:<path>` to answer the next file
    /// picker, `focus` to click into the box, `blur` to click back out of it,
    /// and `cancel` to abandon the current command.
    Replay {
        #[arg(value_name = "EVENTS", required = true)]
        events: Vec<String>,
    },
    /// Write the effective configuration to the config file
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}

impl CliArgs {
    /// Effective configuration: the config file plus command-line overrides
    pub fn load_config(&self) -> CommanderConfig {
        let mut config = match &self.config {
            Some(path) => CommanderConfig::load_from(path),
            None => CommanderConfig::load(),
        };
        if let Some(keymap) = &self.keymap {
            config.keymap = Some(keymap.clone());
        }
        config
    }
}

/// One step of a replay
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayEvent {
    Key(KeyChord),
    Text(String),
    Pick(PathBuf),
    Focus,
    Blur,
    Cancel,
}

impl ReplayEvent {
    pub fn parse(event: &str) -> Result<Self, KeymapError> {
        if let Some(text) = event.strip_prefix("text:") {
            return Ok(Self::Text(text.to_string()));
        }
        if let Some(path) = event.strip_prefix("pick:") {
            return Ok(Self::Pick(PathBuf::from(path)));
        }
        match event {
            "focus" => Ok(Self::Focus),
            "blur" => Ok(Self::Blur),
            "cancel" => Ok(Self::Cancel),
            key => parse_key_string(key).map(Self::Key),
        }
    }
}

/// Apply one event, returning true if the commander took it
pub fn apply_event(commander: &mut Commander<Workspace>, event: &ReplayEvent) -> bool {
    match event {
        ReplayEvent::Key(chord) => commander.key_press(*chord) || commander.edit_key(*chord),
        ReplayEvent::Text(text) => commander.insert_text(text),
        ReplayEvent::Pick(path) => {
            commander.controller_mut().file_editor_mut().queue_pick(path.clone());
            true
        }
        ReplayEvent::Focus => {
            commander.focus_box();
            true
        }
        ReplayEvent::Blur => {
            commander.blur_box();
            true
        }
        ReplayEvent::Cancel => commander.cancel(),
    }
}

/// Save `config` to `target`, or to the config directory when none is given
///
/// Refuses to replace an existing file unless `force` is set.
pub fn init_config(
    config: &CommanderConfig,
    target: Option<&Path>,
    force: bool,
) -> anyhow::Result<PathBuf> {
    let path = match target {
        Some(path) => path.to_path_buf(),
        None => crate::config_paths::config_file()
            .ok_or_else(|| anyhow::anyhow!("No config directory available"))?,
    };
    if path.exists() && !force {
        anyhow::bail!("{} already exists, use --force to overwrite", path.display());
    }

    match target {
        Some(path) => config.save_to(path)?,
        None => config.save()?,
    }
    tracing::info!("Wrote config to {}", path.display());
    Ok(path)
}

/// `chord  Command` lines for every binding, sorted by chord
pub fn binding_lines<C: Controller>(commander: &Commander<C>) -> Vec<String> {
    let mut lines: Vec<String> = commander
        .bindings()
        .iter()
        .map(|(chord, id)| {
            let name = commander.registry().name_of(*id).unwrap_or("<unknown>");
            format!("{:<20} {}", chord.display_string(), name)
        })
        .collect();
    lines.sort();
    lines
}

pub fn run(args: CliArgs) -> anyhow::Result<()> {
    let config = args.load_config();

    match args.command {
        CliCommand::Keys => {
            let commander = Commander::with_config(Workspace::new(), &config);
            for line in binding_lines(&commander) {
                println!("{}", line);
            }
        }
        CliCommand::Resolve { key } => {
            let chord = parse_key_string(&key)?;
            let commander = Commander::with_config(Workspace::new(), &config);
            match commander.bindings().resolve(&chord) {
                Some(id) => println!(
                    "{} -> {}",
                    chord,
                    commander.registry().name_of(id).unwrap_or("<unknown>")
                ),
                None => println!("{} is not bound", chord),
            }
        }
        CliCommand::Replay { events } => {
            let events = events
                .iter()
                .map(|e| ReplayEvent::parse(e))
                .collect::<Result<Vec<_>, _>>()?;

            let workspace = Workspace::with_projects(config.projects.iter().cloned());
            let mut commander = Commander::with_config(workspace, &config);

            for event in &events {
                let consumed = apply_event(&mut commander, event);
                tracing::debug!("{:?} consumed={}", event, consumed);
            }

            let pending = commander.status_line();
            let workspace = commander.controller();
            for name in workspace.executed() {
                println!("executed {}", name);
            }
            if let Some(status) = workspace.status() {
                println!("status: {}", status);
            }
            if let Some(line) = pending {
                println!("pending: {}", line);
            }
            if workspace.last_error().is_some() {
                anyhow::bail!("last command failed");
            }
        }
        CliCommand::Init { force } => {
            let path = init_config(&config, args.config.as_deref(), force)?;
            println!("wrote {}", path.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::{KeyCode, Modifiers};

    #[test]
    fn test_parse_replay_events() {
        assert_eq!(
            ReplayEvent::parse("text:src/main.rs").unwrap(),
            ReplayEvent::Text("src/main.rs".to_string())
        );
        assert_eq!(
            ReplayEvent::parse("text:").unwrap(),
            ReplayEvent::Text(String::new())
        );
        assert_eq!(
            ReplayEvent::parse("pick:/tmp/a.txt").unwrap(),
            ReplayEvent::Pick(PathBuf::from("/tmp/a.txt"))
        );
        assert_eq!(ReplayEvent::parse("focus").unwrap(), ReplayEvent::Focus);
        assert_eq!(ReplayEvent::parse("blur").unwrap(), ReplayEvent::Blur);
        assert_eq!(ReplayEvent::parse("cancel").unwrap(), ReplayEvent::Cancel);
        assert_eq!(
            ReplayEvent::parse("ctrl+o").unwrap(),
            ReplayEvent::Key(KeyChord::new(KeyCode::Char('o'), Modifiers::CTRL))
        );
        assert!(ReplayEvent::parse("ctrl+").is_err());
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let args = CliArgs::parse_from(["commander", "resolve", "ctrl+o"]);
        assert!(matches!(args.command, CliCommand::Resolve { ref key } if key == "ctrl+o"));

        let args = CliArgs::parse_from(["commander", "-v", "replay", "ctrl+o", "text:a", "enter"]);
        assert!(args.verbose);
        match args.command {
            CliCommand::Replay { events } => assert_eq!(events.len(), 3),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_replay_requires_events() {
        assert!(CliArgs::try_parse_from(["commander", "replay"]).is_err());
    }

    #[test]
    fn test_keymap_flag_overrides_config() {
        let args = CliArgs::parse_from([
            "commander",
            "--config",
            "/nonexistent/config.yaml",
            "--keymap",
            "/tmp/keys.yaml",
            "keys",
        ]);
        let config = args.load_config();
        assert_eq!(config.keymap, Some(PathBuf::from("/tmp/keys.yaml")));
        assert!(config.default_bindings);
    }

    #[test]
    fn test_binding_lines_sorted() {
        let commander = Commander::new(
            Workspace::new(),
            crate::command::builtin_commands(),
            &crate::keymap::default_bindings(),
        );
        let lines = binding_lines(&commander);
        let mut sorted = lines.clone();
        sorted.sort();
        assert_eq!(lines, sorted);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines.iter().filter(|l| l.ends_with("OpenFile")).count(), 2);
        assert_eq!(lines.iter().filter(|l| l.ends_with("AddProject")).count(), 2);
    }

    #[test]
    fn test_replay_blur_keeps_staged_command() {
        let mut commander = Commander::new(
            Workspace::new(),
            crate::command::builtin_commands(),
            &crate::keymap::default_bindings(),
        );
        let events = ["ctrl+shift+n", "text:/tmp", "blur", "text:/more"]
            .iter()
            .map(|e| ReplayEvent::parse(e).unwrap())
            .collect::<Vec<_>>();

        let consumed: Vec<bool> = events
            .iter()
            .map(|event| apply_event(&mut commander, event))
            .collect();

        assert_eq!(consumed, [true, true, true, false]);
        assert!(!commander.command_box().has_focus());
        assert_eq!(commander.status_line().as_deref(), Some("Add project: /tmp"));
        assert!(commander.controller().executed().is_empty());
    }

    #[test]
    fn test_init_writes_config_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("commander").join("config.yaml");
        let config = CommanderConfig {
            keymap: Some(PathBuf::from("/tmp/keys.yaml")),
            ..CommanderConfig::default()
        };

        assert_eq!(init_config(&config, Some(&path), false).unwrap(), path);
        assert_eq!(CommanderConfig::load_from(&path), config);

        // An existing file is left alone without --force
        let other = CommanderConfig {
            default_bindings: false,
            ..CommanderConfig::default()
        };
        assert!(init_config(&other, Some(&path), false).is_err());
        assert_eq!(CommanderConfig::load_from(&path), config);

        init_config(&other, Some(&path), true).unwrap();
        assert_eq!(CommanderConfig::load_from(&path), other);
    }

    #[test]
    fn test_cli_parses_init() {
        let args = CliArgs::parse_from(["commander", "--config", "/tmp/c.yaml", "init", "--force"]);
        assert!(matches!(args.command, CliCommand::Init { force: true }));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/c.yaml")));
    }
}
