//! Ordered command registry

use super::Command;

/// Non-owning handle to a registered command
///
/// Handles index into the registry that issued them and stay valid for its
/// whole lifetime; commands are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommandId(pub(crate) usize);

impl CommandId {
    /// Position in registration order
    pub fn index(self) -> usize {
        self.0
    }
}

/// Owns every command, in registration order
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a command, returning its handle
    ///
    /// Name lookups return the first command registered under a name, so a
    /// duplicate is only reachable through its handle.
    pub fn register(&mut self, command: Box<dyn Command>) -> CommandId {
        if self.find(command.name()).is_some() {
            tracing::warn!(
                "Command name {} registered twice; name lookups resolve to the first",
                command.name()
            );
        }
        let id = CommandId(self.commands.len());
        tracing::debug!("Registered command {} as {:?}", command.name(), id);
        self.commands.push(command);
        id
    }

    pub fn get(&self, id: CommandId) -> Option<&(dyn Command + 'static)> {
        self.commands.get(id.0).map(|c| &**c)
    }

    pub fn get_mut(&mut self, id: CommandId) -> Option<&mut (dyn Command + 'static)> {
        self.commands.get_mut(id.0).map(|c| &mut **c)
    }

    /// Find a command by exact name
    pub fn find(&self, name: &str) -> Option<CommandId> {
        self.commands
            .iter()
            .position(|c| c.name() == name)
            .map(CommandId)
    }

    /// Name of the command behind `id`
    pub fn name_of(&self, id: CommandId) -> Option<&str> {
        self.get(id).map(|c| c.name())
    }

    /// Command names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.commands.iter().map(|c| c.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CommandId, &dyn Command)> {
        self.commands
            .iter()
            .enumerate()
            .map(|(i, c)| (CommandId(i), &**c))
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::Controller;

    struct Named(&'static str);

    impl Command for Named {
        fn name(&self) -> &str {
            self.0
        }

        fn exec(&mut self, _controller: &mut dyn Controller) -> anyhow::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_register_assigns_sequential_ids() {
        let mut registry = CommandRegistry::new();
        let a = registry.register(Box::new(Named("A")));
        let b = registry.register(Box::new(Named("B")));

        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names(), vec!["A", "B"]);
    }

    #[test]
    fn test_find_by_name() {
        let mut registry = CommandRegistry::new();
        registry.register(Box::new(Named("A")));
        let b = registry.register(Box::new(Named("B")));

        assert_eq!(registry.find("B"), Some(b));
        assert_eq!(registry.find("b"), None);
        assert_eq!(registry.name_of(b), Some("B"));
    }

    #[test]
    fn test_duplicate_name_resolves_to_first() {
        let mut registry = CommandRegistry::new();
        let first = registry.register(Box::new(Named("A")));
        let second = registry.register(Box::new(Named("A")));

        assert_ne!(first, second);
        assert_eq!(registry.find("A"), Some(first));
        assert!(registry.get(second).is_some());
    }

    #[test]
    fn test_unknown_id() {
        let mut registry = CommandRegistry::new();
        assert!(registry.get(CommandId(4)).is_none());
        assert!(registry.get_mut(CommandId(4)).is_none());
        assert!(registry.is_empty());
    }
}
