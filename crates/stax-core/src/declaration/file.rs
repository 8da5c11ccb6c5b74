//! Declaration file format and discovery

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::error::{DeclarationError, DeclarationResult};
use crate::registry::StackOptions;

pub const DECLARATION_FILE: &str = "Staxfile";

/// Per-stack extensions, relative to the project root
pub const EXTENSION_DIR: &str = "lib/stack";

/// Parsed `Staxfile`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub stacks: Vec<StackEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    /// Encryption key id for stacks that do not set one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kms_id: Option<String>,
}

/// One item of `stacks:`, either a bare name or a full entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StackEntry {
    Name(String),
    Full(StackDeclaration),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackDeclaration {
    pub name: String,
    #[serde(flatten)]
    pub options: StackOptions,
}

impl StackEntry {
    pub fn name(&self) -> &str {
        match self {
            StackEntry::Name(name) => name,
            StackEntry::Full(full) => &full.name,
        }
    }

    pub fn into_parts(self) -> (String, StackOptions) {
        match self {
            StackEntry::Name(name) => (name, StackOptions::default()),
            StackEntry::Full(full) => (full.name, full.options),
        }
    }
}

impl Declaration {
    pub fn from_file(path: &Path) -> DeclarationResult<Self> {
        read_yaml(path).map(Option::unwrap_or_default)
    }
}

/// Why `name` cannot name a stack, if it cannot
///
/// Stack names become subcommands, extension file names and temp file prefixes.
pub fn invalid_stack_name(name: &str) -> Option<&'static str> {
    if name.trim().is_empty() {
        Some("name is empty")
    } else if name.contains(['/', '\\']) {
        Some("name must not contain path separators")
    } else if name == "." || name == ".." {
        Some("name must not be a relative path component")
    } else if name.starts_with('-') {
        Some("name must not start with '-'")
    } else {
        None
    }
}

/// Nearest `Staxfile` in `start` or one of its parents
pub fn find_declaration(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(DECLARATION_FILE))
        .find(|candidate| candidate.is_file())
}

/// Parse a YAML file; `None` for an empty document
pub(crate) fn read_yaml<T: DeserializeOwned>(path: &Path) -> DeclarationResult<Option<T>> {
    let content = fs::read_to_string(path).map_err(|source| DeclarationError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if content.trim().is_empty() {
        return Ok(None);
    }
    serde_yaml::from_str(&content)
        .map(Some)
        .map_err(|source| DeclarationError::Parse {
            path: path.to_path_buf(),
            source,
        })
}
