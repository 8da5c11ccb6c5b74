//! Route table

/// Where a top-level subcommand leads
pub enum Route {
    /// A stack in the registry, looked up by the route's name
    Stack,
    /// A non-stack command group
    Group(Box<dyn super::CommandGroup>),
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Route::Stack => f.write_str("Stack"),
            Route::Group(_) => f.write_str("Group(..)"),
        }
    }
}

/// A registered top-level subcommand
#[derive(Debug)]
pub struct RouteEntry {
    pub name: String,
    pub description: String,
    pub route: Route,
}

/// Top-level subcommands in registration order
#[derive(Debug, Default)]
pub struct CommandRouter {
    entries: Vec<RouteEntry>,
}

impl CommandRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name`, replacing any earlier registration in place
    pub fn register_subcommand(&mut self, name: &str, description: impl Into<String>, route: Route) {
        let entry = RouteEntry {
            name: name.to_string(),
            description: description.into(),
            route,
        };
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn route(&self, name: &str) -> Option<&Route> {
        self.entry(name).map(|e| &e.route)
    }

    pub fn description(&self, name: &str) -> Option<&str> {
        self.entry(name).map(|e| e.description.as_str())
    }

    pub fn entry(&self, name: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
