//! Turns a `Staxfile` into registry calls

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::error::{DeclarationError, DeclarationResult};
use super::file::{find_declaration, invalid_stack_name, read_yaml, Declaration, EXTENSION_DIR};
use crate::logging::Logger;
use crate::registry::{StackOptions, StackRegistry};
use crate::log_debug;

/// A loaded project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Directory holding the `Staxfile`
    pub root: PathBuf,
    pub file: PathBuf,
    /// Declared stack names, in file order
    pub stacks: Vec<String>,
}

/// Finds and evaluates declarations against a registry
pub struct DeclarationLoader {
    logger: Arc<dyn Logger>,
}

impl DeclarationLoader {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger }
    }

    /// Load the nearest `Staxfile` at or above `start`
    pub fn load(
        &self,
        start: &Path,
        registry: &mut StackRegistry,
    ) -> DeclarationResult<Option<Project>> {
        match find_declaration(start) {
            Some(file) => self.load_file(&file, registry).map(Some),
            None => {
                log_debug!(self.logger, "no Staxfile found from {}", start.display());
                Ok(None)
            }
        }
    }

    /// Evaluate a known declaration file
    pub fn load_file(&self, file: &Path, registry: &mut StackRegistry) -> DeclarationResult<Project> {
        let root = file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        log_debug!(self.logger, "loading {}", file.display());

        let declaration = Declaration::from_file(file)?;
        for entry in &declaration.stacks {
            if let Some(reason) = invalid_stack_name(entry.name()) {
                return Err(DeclarationError::InvalidStackName {
                    path: file.to_path_buf(),
                    name: entry.name().to_string(),
                    reason,
                });
            }
        }
        let mut extensions = Extensions::new(&root);

        // stacks registered before this file was read get their extensions first
        let existing = registry.list_stacks().to_vec();
        for name in existing {
            if let Some(options) = extensions.take(&name)? {
                registry.add_stack(&name, &options)?;
            }
        }

        let mut stacks = Vec::with_capacity(declaration.stacks.len());
        for entry in declaration.stacks {
            let (name, mut options) = entry.into_parts();
            if let Some(extension) = extensions.take(&name)? {
                options.merge(extension);
            }
            let has_kms_id = options.kms_id.is_some()
                || registry.stack(&name).and_then(|s| s.kms_id()).is_some();
            if !has_kms_id {
                options.kms_id = declaration.defaults.kms_id.clone();
            }
            registry.add_stack(&name, &options)?;
            stacks.push(name);
        }

        log_debug!(
            self.logger,
            "loaded {} stack(s) from {}",
            stacks.len(),
            file.display()
        );
        Ok(Project {
            root,
            file: file.to_path_buf(),
            stacks,
        })
    }
}

impl std::fmt::Debug for DeclarationLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeclarationLoader").finish_non_exhaustive()
    }
}

/// `lib/stack/<name>.yaml` files, each read at most once
struct Extensions {
    dir: PathBuf,
    seen: HashSet<String>,
}

impl Extensions {
    fn new(root: &Path) -> Self {
        Self {
            dir: root.join(EXTENSION_DIR),
            seen: HashSet::new(),
        }
    }

    fn take(&mut self, name: &str) -> DeclarationResult<Option<StackOptions>> {
        if !self.seen.insert(name.to_string()) {
            return Ok(None);
        }
        let path = self.dir.join(format!("{name}.yaml"));
        if !path.is_file() {
            return Ok(None);
        }
        Ok(Some(read_yaml(&path)?.unwrap_or_default()))
    }
}
