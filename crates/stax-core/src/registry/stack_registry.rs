//! Registry of declared stacks

use std::collections::HashMap;
use std::sync::Arc;

use super::error::{RegistryError, RegistryResult};
use super::stack::{StackOptions, StackType};
use crate::capability::Capability;
use crate::log_debug;
use crate::logging::{Logger, NoOpLogger};
use crate::router::{CommandGroup, CommandRouter, Route};

/// Owns every stack type and the router they are exposed through
///
/// Built once at startup, populated by the declaration loader through
/// `&mut`, then read-only while a command runs.
pub struct StackRegistry {
    /// Names in the order they were added, repeats included
    names: Vec<String>,
    types: HashMap<String, StackType>,
    router: CommandRouter,
    logger: Arc<dyn Logger>,
}

impl StackRegistry {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            names: Vec::new(),
            types: HashMap::new(),
            router: CommandRouter::new(),
            logger,
        }
    }

    /// Add a stack, creating its type on first use
    ///
    /// Capability identifiers are resolved before anything changes, so an
    /// unknown one leaves the registry exactly as it was. Re-adding a name
    /// keeps the existing type and its capabilities.
    pub fn add_stack(&mut self, name: &str, options: &StackOptions) -> RegistryResult<&StackType> {
        let capabilities = options
            .include
            .iter()
            .map(|id| {
                Capability::resolve(id).ok_or_else(|| RegistryError::UnknownCapability {
                    stack: name.to_string(),
                    capability: id.clone(),
                })
            })
            .collect::<RegistryResult<Vec<_>>>()?;

        self.names.push(name.to_string());

        let created = !self.types.contains_key(name);
        let stack = self
            .types
            .entry(name.to_string())
            .or_insert_with(|| StackType::new(name));
        for capability in capabilities {
            if stack.attach(capability) {
                log_debug!(self.logger, "attached {} to stack {}", capability, name);
            }
        }
        stack.apply(options);
        let description = stack.description();

        self.router.register_subcommand(name, description, Route::Stack);
        log_debug!(
            self.logger,
            "{} stack {}",
            if created { "created" } else { "updated" },
            name
        );

        Ok(&self.types[name])
    }

    /// Add a non-stack command group at the top level
    pub fn add_command(&mut self, name: &str, group: Box<dyn CommandGroup>) {
        self.router
            .register_subcommand(name, format!("{} commands", name), Route::Group(group));
        log_debug!(self.logger, "added command group {}", name);
    }

    /// Every name passed to `add_stack`, in order
    pub fn list_stacks(&self) -> &[String] {
        &self.names
    }

    pub fn stack(&self, name: &str) -> Option<&StackType> {
        self.types.get(name)
    }

    /// Stack types in first-registration order
    pub fn stacks(&self) -> impl Iterator<Item = &StackType> {
        let mut seen = std::collections::HashSet::new();
        self.names
            .iter()
            .filter(move |name| seen.insert(name.as_str()))
            .filter_map(move |name| self.types.get(name.as_str()))
    }

    /// Number of distinct stack types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn router(&self) -> &CommandRouter {
        &self.router
    }

    pub fn logger(&self) -> &Arc<dyn Logger> {
        &self.logger
    }
}

impl Default for StackRegistry {
    fn default() -> Self {
        Self::new(Arc::new(NoOpLogger::new()))
    }
}

impl std::fmt::Debug for StackRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StackRegistry")
            .field("names", &self.names)
            .field("types", &self.types)
            .field("router", &self.router)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::{CommandResult, Invocation};
    use clap::{ArgMatches, Command};

    struct Version;

    impl CommandGroup for Version {
        fn command(&self, name: &str) -> Command {
            Command::new(name.to_string())
        }

        fn run(&self, _invocation: &mut Invocation<'_>, _matches: &ArgMatches) -> CommandResult<()> {
            Ok(())
        }
    }

    fn keypair() -> StackOptions {
        StackOptions::new().with_include(["Keypair"])
    }

    #[test]
    fn test_add_stack_creates_type() {
        let mut registry = StackRegistry::default();
        let stack = registry.add_stack("payments", &keypair()).unwrap();
        assert_eq!(stack.name(), "payments");
        assert!(stack.has(Capability::KeyPair));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.router().len(), 1);
        assert!(matches!(registry.router().route("payments"), Some(Route::Stack)));
    }

    #[test]
    fn test_readding_is_idempotent() {
        let mut registry = StackRegistry::default();
        registry.add_stack("payments", &keypair()).unwrap();
        registry.add_stack("payments", &keypair()).unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.router().len(), 1);
        assert_eq!(registry.list_stacks(), ["payments", "payments"]);
        assert_eq!(
            registry.stack("payments").unwrap().capabilities(),
            &[Capability::KeyPair]
        );
    }

    #[test]
    fn test_readding_keeps_previous_mixins() {
        let mut registry = StackRegistry::default();
        registry.add_stack("payments", &keypair()).unwrap();
        registry.add_stack("payments", &StackOptions::new()).unwrap();

        let stack = registry.stack("payments").unwrap();
        assert!(stack.has(Capability::KeyPair));
        assert_eq!(stack.capabilities().len(), 1);
    }

    #[test]
    fn test_unknown_capability_does_not_mutate() {
        let mut registry = StackRegistry::default();
        registry.add_stack("vpc", &StackOptions::new()).unwrap();

        let err = registry
            .add_stack("payments", &StackOptions::new().with_include(["Keypair", "Database"]))
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::UnknownCapability {
                stack: "payments".into(),
                capability: "Database".into()
            }
        );

        assert_eq!(registry.list_stacks(), ["vpc"]);
        assert!(registry.stack("payments").is_none());
        assert_eq!(registry.router().len(), 1);

        // existing stacks are untouched as well
        assert!(registry
            .add_stack("vpc", &StackOptions::new().with_include(["Nope"]))
            .is_err());
        assert!(registry.stack("vpc").unwrap().capabilities().is_empty());
        assert_eq!(registry.list_stacks(), ["vpc"]);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let mut registry = StackRegistry::default();
        for name in ["vpc", "payments", "web", "payments"] {
            registry.add_stack(name, &StackOptions::new()).unwrap();
        }
        assert_eq!(registry.list_stacks(), ["vpc", "payments", "web", "payments"]);
        let order: Vec<_> = registry.stacks().map(|s| s.name()).collect();
        assert_eq!(order, vec!["vpc", "payments", "web"]);
        let routes: Vec<_> = registry.router().names().collect();
        assert_eq!(routes, vec!["vpc", "payments", "web"]);
    }

    #[test]
    fn test_settings_merge_across_declarations() {
        let mut registry = StackRegistry::default();
        registry
            .add_stack("payments", &keypair().with_kms_id("alias/payments"))
            .unwrap();
        registry
            .add_stack("payments", &StackOptions::new().with_description("cards"))
            .unwrap();

        let stack = registry.stack("payments").unwrap();
        assert_eq!(stack.kms_id(), Some("alias/payments"));
        assert_eq!(stack.description(), "cards");
        assert_eq!(registry.router().description("payments"), Some("cards"));
    }

    #[test]
    fn test_add_command() {
        let mut registry = StackRegistry::default();
        registry.add_command("version", Box::new(Version));

        assert!(registry.is_empty());
        assert!(registry.list_stacks().is_empty());
        assert!(matches!(registry.router().route("version"), Some(Route::Group(_))));
        assert_eq!(registry.router().description("version"), Some("version commands"));
    }
}
