//! Stack type descriptors

use serde::{Deserialize, Serialize};

use crate::capability::Capability;

/// Options accepted by `StackRegistry::add_stack`
///
/// This is also the per-stack shape of declaration and extension files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackOptions {
    /// Capability identifiers to attach, in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<String>,
    /// Encryption key id for secrets this stack stores
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kms_id: Option<String>,
    /// Credential name, when it should differ from the stack name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_pair_name: Option<String>,
    /// Help text for the stack's subcommand
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl StackOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_include<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_kms_id(mut self, kms_id: impl Into<String>) -> Self {
        self.kms_id = Some(kms_id.into());
        self
    }

    pub fn with_key_pair_name(mut self, name: impl Into<String>) -> Self {
        self.key_pair_name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Layer `other` on top: includes are appended, set fields win
    pub fn merge(&mut self, other: StackOptions) {
        self.include.extend(other.include);
        if other.kms_id.is_some() {
            self.kms_id = other.kms_id;
        }
        if other.key_pair_name.is_some() {
            self.key_pair_name = other.key_pair_name;
        }
        if other.description.is_some() {
            self.description = other.description;
        }
    }
}

/// A registered stack: its name, settings and attached capabilities
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackType {
    name: String,
    description: Option<String>,
    capabilities: Vec<Capability>,
    kms_id: Option<String>,
    key_pair_name: Option<String>,
}

impl StackType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            capabilities: Vec::new(),
            kms_id: None,
            key_pair_name: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Help text, `"<name> stack"` unless configured
    pub fn description(&self) -> String {
        self.description
            .clone()
            .unwrap_or_else(|| format!("{} stack", self.name))
    }

    pub fn kms_id(&self) -> Option<&str> {
        self.kms_id.as_deref()
    }

    pub fn key_pair_name(&self) -> Option<&str> {
        self.key_pair_name.as_deref()
    }

    /// Attached capabilities in attachment order
    pub fn capabilities(&self) -> &[Capability] {
        &self.capabilities
    }

    pub fn has(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    /// Attach a capability; returns false if it was already attached
    pub fn attach(&mut self, capability: Capability) -> bool {
        if self.has(capability) {
            return false;
        }
        self.capabilities.push(capability);
        true
    }

    /// Capability handling the `command` subcommand; last attached wins
    pub fn resolve_command(&self, command: &str) -> Option<Capability> {
        last_attached(&self.capabilities, command, |c| c.command_name()).copied()
    }

    /// One capability per subcommand name, in attachment order of the winners
    pub fn commands(&self) -> Vec<Capability> {
        self.capabilities
            .iter()
            .filter(|c| self.resolve_command(c.command_name()) == Some(**c))
            .copied()
            .collect()
    }

    pub(crate) fn apply(&mut self, options: &StackOptions) {
        if let Some(kms_id) = &options.kms_id {
            self.kms_id = Some(kms_id.clone());
        }
        if let Some(name) = &options.key_pair_name {
            self.key_pair_name = Some(name.clone());
        }
        if let Some(description) = &options.description {
            self.description = Some(description.clone());
        }
    }
}

/// Scan attachments from the most recent one
fn last_attached<'a, T>(attached: &'a [T], command: &str, name_of: impl Fn(&T) -> &str) -> Option<&'a T> {
    attached.iter().rev().find(|item| name_of(item) == command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_attached_wins_on_collision() {
        let attached = [("first", "key"), ("second", "ssh"), ("third", "key")];
        let found = last_attached(&attached, "key", |(_, command)| *command);
        assert_eq!(found, Some(&("third", "key")));
        assert_eq!(last_attached(&attached, "ssh", |(_, c)| *c), Some(&("second", "ssh")));
        assert_eq!(last_attached(&attached, "db", |(_, c)| *c), None);
    }

    #[test]
    fn test_attach_is_idempotent() {
        let mut stack = StackType::new("payments");
        assert!(stack.attach(Capability::KeyPair));
        assert!(!stack.attach(Capability::KeyPair));
        assert_eq!(stack.capabilities(), &[Capability::KeyPair]);
    }

    #[test]
    fn test_resolve_command() {
        let mut stack = StackType::new("payments");
        assert_eq!(stack.resolve_command("key"), None);
        stack.attach(Capability::KeyPair);
        assert_eq!(stack.resolve_command("key"), Some(Capability::KeyPair));
        assert_eq!(stack.resolve_command("db"), None);
        assert_eq!(stack.commands(), vec![Capability::KeyPair]);
    }

    #[test]
    fn test_default_description() {
        let mut stack = StackType::new("payments");
        assert_eq!(stack.description(), "payments stack");
        stack.apply(&StackOptions::new().with_description("card processing"));
        assert_eq!(stack.description(), "card processing");
    }

    #[test]
    fn test_apply_keeps_unset_fields() {
        let mut stack = StackType::new("payments");
        stack.apply(&StackOptions::new().with_kms_id("alias/a").with_key_pair_name("bastion"));
        stack.apply(&StackOptions::new());
        assert_eq!(stack.kms_id(), Some("alias/a"));
        assert_eq!(stack.key_pair_name(), Some("bastion"));

        stack.apply(&StackOptions::new().with_kms_id("alias/b"));
        assert_eq!(stack.kms_id(), Some("alias/b"));
    }

    #[test]
    fn test_merge_options() {
        let mut base = StackOptions::new().with_include(["Keypair"]).with_kms_id("alias/base");
        base.merge(StackOptions::new().with_include(["key_pair"]).with_description("ext"));
        assert_eq!(base.include, vec!["Keypair", "key_pair"]);
        assert_eq!(base.kms_id.as_deref(), Some("alias/base"));
        assert_eq!(base.description.as_deref(), Some("ext"));
    }

    #[test]
    fn test_options_from_yaml() {
        let options: StackOptions =
            serde_yaml::from_str("include: [Keypair]\nkms_id: alias/payments\n").unwrap();
        assert_eq!(options.include, vec!["Keypair"]);
        assert_eq!(options.kms_id.as_deref(), Some("alias/payments"));
        assert!(options.description.is_none());
    }
}
